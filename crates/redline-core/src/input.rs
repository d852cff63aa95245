#![forbid(unsafe_code)]

//! Normalized keyboard input and signature encoding.
//!
//! A [`KeyPress`] carries a modifier bitset plus the legacy numeric DOM key
//! code, which is what the signature format is defined over. The signature is
//! a stable string of ordered modifier tokens joined with the key code by
//! `+`, e.g. `"shift+ctrl+71"`; it exists so dispatch tables can match on a
//! single value instead of a tuple of flags.
//!
//! Token order is fixed (`shift`, `ctrl`, `alt`) regardless of the order the
//! host reported the modifiers in, so the encoding is canonical.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Legacy DOM key code for the letter `G`.
pub const KEY_G: u32 = 71;

bitflags! {
    /// Modifier keys held during a key press.
    ///
    /// Encoded as a compact `u8` bitset in the wire record (`mods`).
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

/// A normalized key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Modifier keys active during the press.
    pub mods: Modifiers,

    /// Legacy numeric key code (`event.keyCode`, with `event.which` as the
    /// fallback when the former is zero).
    pub key_code: u32,
}

impl KeyPress {
    /// Create a key press with no modifiers.
    #[must_use]
    pub const fn new(key_code: u32) -> Self {
        Self {
            mods: Modifiers::empty(),
            key_code,
        }
    }

    /// Builder-style modifier attachment.
    #[must_use]
    pub const fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    /// Build from the raw boolean flags a DOM key event exposes.
    #[must_use]
    pub fn from_flags(shift: bool, ctrl: bool, alt: bool, key_code: u32) -> Self {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::SHIFT, shift);
        mods.set(Modifiers::CTRL, ctrl);
        mods.set(Modifiers::ALT, alt);
        Self { mods, key_code }
    }

    /// Canonical signature for this press.
    ///
    /// Ordered optional tokens `shift`, `ctrl`, `alt` followed by the key
    /// code, all joined with `+`. A press without modifiers is just the key
    /// code: `"71"`.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut tokens: Vec<&str> = Vec::with_capacity(3);
        if self.mods.contains(Modifiers::SHIFT) {
            tokens.push("shift");
        }
        if self.mods.contains(Modifiers::CTRL) {
            tokens.push("ctrl");
        }
        if self.mods.contains(Modifiers::ALT) {
            tokens.push("alt");
        }
        let mut signature = tokens.join("+");
        if !signature.is_empty() {
            signature.push('+');
        }
        signature.push_str(&self.key_code.to_string());
        signature
    }
}

/// JSON-friendly wire form of a [`KeyPress`] for record/replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPressRecord {
    /// Modifier bitset (`Modifiers` bits).
    pub mods: u8,
    /// Legacy numeric key code.
    pub key_code: u32,
}

impl From<KeyPress> for KeyPressRecord {
    fn from(press: KeyPress) -> Self {
        Self {
            mods: press.mods.bits(),
            key_code: press.key_code,
        }
    }
}

impl From<KeyPressRecord> for KeyPress {
    fn from(record: KeyPressRecord) -> Self {
        Self {
            mods: Modifiers::from_bits_truncate(record.mods),
            key_code: record.key_code,
        }
    }
}
