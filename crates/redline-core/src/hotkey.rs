#![forbid(unsafe_code)]

//! Hotkey routing: key signatures → overlay actions.
//!
//! The router is a plain lookup table over canonical signatures, so the web
//! layer's `keydown` listener stays a thin dispatcher: normalize the event,
//! ask the router, act. Registration of the single document-level listener is
//! the host application's job (`bindHotKeys()` in `redline-web`); this module
//! holds no globals.

use crate::input::{KEY_G, KeyPress, Modifiers};

/// What a matched hotkey toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    /// Toggle grid overlays on all elements carrying [`HotkeyAction::trigger_class`].
    ToggleGrid,
    /// Toggle guide overlays likewise.
    ToggleGuide,
}

impl HotkeyAction {
    /// CSS class an element opts in with to receive this action.
    #[must_use]
    pub const fn trigger_class(self) -> &'static str {
        match self {
            Self::ToggleGrid => "has-grid",
            Self::ToggleGuide => "has-guide",
        }
    }
}

/// Signature → action dispatch table.
#[derive(Debug, Clone)]
pub struct HotkeyRouter {
    bindings: Vec<(String, HotkeyAction)>,
}

impl HotkeyRouter {
    /// Empty router with no bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding for the signature of `press`.
    ///
    /// A later binding for the same signature shadows an earlier one.
    #[must_use]
    pub fn bind(mut self, press: KeyPress, action: HotkeyAction) -> Self {
        self.bindings.insert(0, (press.signature(), action));
        self
    }

    /// Exact-match lookup. Unknown signatures produce no action.
    #[must_use]
    pub fn route(&self, press: &KeyPress) -> Option<HotkeyAction> {
        let signature = press.signature();
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == signature)
            .map(|&(_, action)| action)
    }
}

impl Default for HotkeyRouter {
    /// The stock bindings: Shift+Ctrl+G toggles grids, Shift+Ctrl+Alt+G
    /// toggles guides.
    fn default() -> Self {
        Self::empty()
            .bind(
                KeyPress::new(KEY_G).with_mods(Modifiers::SHIFT | Modifiers::CTRL),
                HotkeyAction::ToggleGrid,
            )
            .bind(
                KeyPress::new(KEY_G)
                    .with_mods(Modifiers::SHIFT | Modifiers::CTRL | Modifiers::ALT),
                HotkeyAction::ToggleGuide,
            )
    }
}
