#![forbid(unsafe_code)]

//! Pure logic for the Redline overlay toolkit.
//!
//! This crate is host-agnostic: it knows nothing about the DOM. It provides
//! the pieces the browser frontend (`redline-web`) glues to real elements:
//!
//! - [`KeyPress`] / [`Modifiers`] - normalized key input and the canonical
//!   signature encoding (`"shift+ctrl+71"`)
//! - [`HotkeyRouter`] - signature to overlay-action routing table
//! - [`GridConfig`] / [`GridLayout`] - grid overlay configuration and the
//!   stripe/baseline layout solver
//! - [`GuideConfig`] - guide overlay configuration
//! - [`Host`] and the toggle engine - overlay lifecycle (lazy build, then
//!   show/hide) generic over a host-element seam
//!
//! Everything here is deterministic and testable off-wasm; the DOM seam is
//! the [`Host`] trait, implemented by `redline-web` over `web_sys` elements
//! and by mock elements in tests.

use std::fmt;

pub mod grid;
pub mod guide;
pub mod hotkey;
pub mod input;
pub mod logging;
pub mod overlay;

pub use grid::{BaselineRow, GridConfig, GridLayout, HostMetrics, Stripe};
pub use guide::GuideConfig;
pub use hotkey::{HotkeyAction, HotkeyRouter};
pub use input::{KeyPress, KeyPressRecord, Modifiers, KEY_G};
pub use overlay::{Host, OverlayKind, ToggleOutcome, toggle_grid, toggle_guide};

/// Overlay configuration validation failures.
///
/// Both kinds are recoverable and local to one host element: a failed element
/// gets no overlay subtree, siblings in the same batch are unaffected, and a
/// later toggle re-attempts construction (the element's attributes may have
/// been fixed in the meantime).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither or both of unit-size / unit-count supplied for a grid.
    UnitSpec,
    /// Guide URL attribute absent.
    MissingGuideUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitSpec => write!(
                f,
                "specify either {} or {}, not both",
                grid::ATTR_UNIT_SIZE,
                grid::ATTR_UNIT_COUNT
            ),
            Self::MissingGuideUrl => write!(f, "specify {}", guide::ATTR_GUIDE_URL),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_name_the_attributes() {
        assert_eq!(
            ConfigError::UnitSpec.to_string(),
            "specify either data-grid-unit-size or data-grid-unit-count, not both"
        );
        assert_eq!(
            ConfigError::MissingGuideUrl.to_string(),
            "specify data-guide-url"
        );
    }
}
