#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! This module provides re-exports of tracing macros when the `tracing`
//! feature is enabled. When the feature is disabled, no-op macros are
//! provided so call sites compile unchanged; the browser frontend layers its
//! own `console.error` reporting on top of the typed outcomes, so nothing is
//! lost when tracing is off.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

// `#[macro_export]` lands the no-op macros at the crate root; re-export them
// here so `crate::logging::error!` resolves in both configurations.
#[cfg(not(feature = "tracing"))]
pub use crate::{debug, error, warn};
