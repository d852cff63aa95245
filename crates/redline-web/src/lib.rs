#![forbid(unsafe_code)]

//! Browser frontend for Redline.
//!
//! This crate is intentionally host-specific (web/WASM). It glues
//! `redline-core`'s pure overlay engine to real DOM elements and exposes the
//! `wasm-bindgen` API surface:
//!
//! - `toggleGrid(elements)` / `toggleGuide(elements)` - run the overlay
//!   engine over an array of elements, returning the same array for chaining
//! - `bindHotKeys()` - register the page-lifetime `keydown` dispatcher
//!   (Shift+Ctrl+G for grids, Shift+Ctrl+Alt+G for guides)
//! - `ensureConsole()` - install a no-op `console` when the host lacks one
//! - `scope(object)` - bind every function-valued property to its object
//! - `reverse(elements)` - reversed copy of an element array
//!
//! The deterministic pieces (inline style text, class names, keydown
//! normalization, content-width arithmetic, property enumeration order) live
//! in [`style`], [`event`], [`measure`], and [`props`] and compile on every
//! target, so `cargo test --workspace` exercises them off-wasm.

pub mod event;
pub mod measure;
pub mod props;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{bind_hot_keys, ensure_console, reverse, scope, toggle_grid, toggle_guide};
