//! Page-level dispatch: a synthetic key press routed through the hotkey table
//! toggles overlays on exactly the elements opted in via trigger classes.
//!
//! This mirrors what `redline-web`'s `bindHotKeys` listener does: route the
//! press, select elements by the action's trigger class, run the engine over
//! the selection.

use redline_core::grid::HostMetrics;
use redline_core::guide::GuideConfig;
use redline_core::overlay::{Host, OverlayKind};
use redline_core::{GridLayout, HotkeyAction, HotkeyRouter, KeyPress, toggle_grid, toggle_guide};

struct PageElement {
    classes: Vec<&'static str>,
    attrs: Vec<(&'static str, &'static str)>,
    grid: Option<(GridLayout, bool)>,
    guide: Option<(GuideConfig, bool)>,
}

impl PageElement {
    fn new(classes: &[&'static str], attrs: &[(&'static str, &'static str)]) -> Self {
        Self {
            classes: classes.to_vec(),
            attrs: attrs.to_vec(),
            grid: None,
            guide: None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }
}

impl Host for PageElement {
    fn attr(&self, name: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|&&(key, _)| key == name)
            .map(|&(_, value)| value.to_string())
    }

    fn metrics(&self) -> HostMetrics {
        HostMetrics {
            width: 120.0,
            height: 80.0,
            padding_left: 0.0,
            line_height: 20.0,
        }
    }

    fn overlay_visible(&self, kind: OverlayKind) -> Option<bool> {
        match kind {
            OverlayKind::Grid => self.grid.as_ref().map(|&(_, visible)| visible),
            OverlayKind::Guide => self.guide.as_ref().map(|&(_, visible)| visible),
        }
    }

    fn set_overlay_visible(&mut self, kind: OverlayKind, visible: bool) {
        match kind {
            OverlayKind::Grid => {
                if let Some(state) = self.grid.as_mut() {
                    state.1 = visible;
                }
            }
            OverlayKind::Guide => {
                if let Some(state) = self.guide.as_mut() {
                    state.1 = visible;
                }
            }
        }
    }

    fn mount_grid(&mut self, layout: &GridLayout) {
        self.grid = Some((layout.clone(), false));
    }

    fn mount_guide(&mut self, config: &GuideConfig) {
        self.guide = Some((config.clone(), false));
    }
}

/// What the web layer's keydown listener does, minus the DOM.
fn dispatch(router: &HotkeyRouter, press: &KeyPress, page: &mut [PageElement]) {
    let Some(action) = router.route(press) else {
        return;
    };
    let class = action.trigger_class();
    let mut selected: Vec<&mut PageElement> = page
        .iter_mut()
        .filter(|element| element.has_class(class))
        .collect();
    match action {
        HotkeyAction::ToggleGrid => {
            toggle_grid(&mut selected);
        }
        HotkeyAction::ToggleGuide => {
            toggle_guide(&mut selected);
        }
    }
}

fn page() -> Vec<PageElement> {
    vec![
        PageElement::new(&["has-grid"], &[("data-grid-unit-count", "4")]),
        PageElement::new(&["plain"], &[("data-grid-unit-count", "4")]),
        PageElement::new(
            &["has-grid", "has-guide"],
            &[
                ("data-grid-unit-size", "30"),
                ("data-guide-url", "guides/a.png"),
            ],
        ),
    ]
}

#[test]
fn grid_chord_toggles_only_marked_elements() {
    let router = HotkeyRouter::default();
    let mut elements = page();
    let press = KeyPress::from_flags(true, true, false, 71);

    dispatch(&router, &press, &mut elements);
    assert_eq!(elements[0].overlay_visible(OverlayKind::Grid), Some(true));
    assert_eq!(elements[1].overlay_visible(OverlayKind::Grid), None);
    assert_eq!(elements[2].overlay_visible(OverlayKind::Grid), Some(true));

    dispatch(&router, &press, &mut elements);
    assert_eq!(elements[0].overlay_visible(OverlayKind::Grid), Some(false));
    assert_eq!(elements[2].overlay_visible(OverlayKind::Grid), Some(false));
}

#[test]
fn guide_chord_is_independent_of_grid_state() {
    let router = HotkeyRouter::default();
    let mut elements = page();

    dispatch(&router, &KeyPress::from_flags(true, true, true, 71), &mut elements);
    assert_eq!(elements[0].overlay_visible(OverlayKind::Guide), None);
    assert_eq!(elements[2].overlay_visible(OverlayKind::Guide), Some(true));
    assert_eq!(elements[2].overlay_visible(OverlayKind::Grid), None);
}

#[test]
fn unbound_chords_touch_nothing() {
    let router = HotkeyRouter::default();
    let mut elements = page();

    dispatch(&router, &KeyPress::new(71), &mut elements);
    dispatch(&router, &KeyPress::from_flags(false, true, false, 71), &mut elements);
    for element in &elements {
        assert_eq!(element.overlay_visible(OverlayKind::Grid), None);
        assert_eq!(element.overlay_visible(OverlayKind::Guide), None);
    }
}
