#![forbid(unsafe_code)]

//! DOM keydown normalization.
//!
//! The signature contract is defined over the legacy numeric `keyCode`, with
//! `which` as the fallback some hosts report instead (`keyCode || which`).
//! Normalization is pure so the quirk stays testable off-wasm; the wasm layer
//! only extracts the raw fields from the `KeyboardEvent`.

use redline_core::KeyPress;

/// Normalize raw DOM keydown fields into a [`KeyPress`].
///
/// `key_code` of zero falls back to `which`, matching the legacy DOM
/// behavior the signature format was defined against.
#[must_use]
pub fn normalize_keydown(
    shift: bool,
    ctrl: bool,
    alt: bool,
    key_code: u32,
    which: u32,
) -> KeyPress {
    let code = if key_code != 0 { key_code } else { which };
    KeyPress::from_flags(shift, ctrl, alt, code)
}
