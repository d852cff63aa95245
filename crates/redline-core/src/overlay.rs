#![forbid(unsafe_code)]

//! Overlay lifecycle engine.
//!
//! An overlay subtree is built lazily on the first toggle of its kind for a
//! host element, then only ever shown or hidden; a correctly built subtree is
//! never torn down or recomputed. The engine is generic over [`Host`], the
//! seam between this crate's pure logic and the real DOM: `redline-web`
//! implements it over `web_sys` elements, tests implement it with mocks.
//!
//! Per-element errors are isolated. A failed element records a
//! [`ToggleOutcome::Failed`] and mounts nothing; its siblings in the same
//! batch proceed normally, and the next toggle re-attempts construction so
//! attribute fixes take effect without a page reload.

use crate::grid::{GridConfig, GridLayout, HostMetrics};
use crate::guide::GuideConfig;
use crate::{ConfigError, logging};

/// The two overlay kinds an element can carry, at most one subtree of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Unit stripes plus baseline rulings.
    Grid,
    /// A single reference image.
    Guide,
}

impl OverlayKind {
    /// Marker class tagging the overlay subtree's root node.
    #[must_use]
    pub const fn marker_class(self) -> &'static str {
        match self {
            Self::Grid => "redline-grid",
            Self::Guide => "redline-guide",
        }
    }
}

/// A host element as seen by the overlay engine.
///
/// Implementations own attribute access, measurement, and the actual node
/// construction; the engine owns ordering and the build-once invariant.
pub trait Host {
    /// Read an attribute, `None` when absent.
    fn attr(&self, name: &str) -> Option<String>;

    /// Measure the element's rendered metrics.
    fn metrics(&self) -> HostMetrics;

    /// Current visibility of the overlay subtree of `kind`, or `None` when
    /// no such subtree has been built on this element.
    fn overlay_visible(&self, kind: OverlayKind) -> Option<bool>;

    /// Show or hide an existing overlay subtree.
    fn set_overlay_visible(&mut self, kind: OverlayKind, visible: bool);

    /// Build the grid subtree from solved placement, initially hidden.
    fn mount_grid(&mut self, layout: &GridLayout);

    /// Build the guide subtree (starts the image load), initially hidden.
    fn mount_guide(&mut self, config: &GuideConfig);
}

// Selections built by class filtering hold `&mut` handles; let the engine
// run over those directly.
impl<H: Host + ?Sized> Host for &mut H {
    fn attr(&self, name: &str) -> Option<String> {
        (**self).attr(name)
    }

    fn metrics(&self) -> HostMetrics {
        (**self).metrics()
    }

    fn overlay_visible(&self, kind: OverlayKind) -> Option<bool> {
        (**self).overlay_visible(kind)
    }

    fn set_overlay_visible(&mut self, kind: OverlayKind, visible: bool) {
        (**self).set_overlay_visible(kind, visible);
    }

    fn mount_grid(&mut self, layout: &GridLayout) {
        (**self).mount_grid(layout);
    }

    fn mount_guide(&mut self, config: &GuideConfig) {
        (**self).mount_guide(config);
    }
}

/// Per-element result of a toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The overlay is now visible (freshly built overlays always end here).
    Shown,
    /// The overlay is now hidden.
    Hidden,
    /// Construction was aborted; no subtree exists on this element.
    Failed(ConfigError),
}

impl ToggleOutcome {
    /// The error, when construction failed.
    #[must_use]
    pub const fn error(&self) -> Option<ConfigError> {
        match self {
            Self::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

/// Toggle grid overlays on every host in order, one outcome per host.
pub fn toggle_grid<H: Host>(hosts: &mut [H]) -> Vec<ToggleOutcome> {
    hosts.iter_mut().map(toggle_grid_one).collect()
}

/// Toggle guide overlays on every host in order, one outcome per host.
pub fn toggle_guide<H: Host>(hosts: &mut [H]) -> Vec<ToggleOutcome> {
    hosts.iter_mut().map(toggle_guide_one).collect()
}

fn toggle_grid_one<H: Host>(host: &mut H) -> ToggleOutcome {
    if let Some(outcome) = flip_existing(host, OverlayKind::Grid) {
        return outcome;
    }

    let config = GridConfig::from_attrs(|name| host.attr(name));
    let layout = match GridLayout::solve(&config, &host.metrics()) {
        Ok(layout) => layout,
        Err(err) => {
            logging::error!("grid overlay: {err}");
            return ToggleOutcome::Failed(err);
        }
    };

    host.mount_grid(&layout);
    host.set_overlay_visible(OverlayKind::Grid, true);
    ToggleOutcome::Shown
}

fn toggle_guide_one<H: Host>(host: &mut H) -> ToggleOutcome {
    if let Some(outcome) = flip_existing(host, OverlayKind::Guide) {
        return outcome;
    }

    let config = match GuideConfig::from_attrs(|name| host.attr(name)) {
        Ok(config) => config,
        Err(err) => {
            logging::error!("guide overlay: {err}");
            return ToggleOutcome::Failed(err);
        }
    };

    host.mount_guide(&config);
    host.set_overlay_visible(OverlayKind::Guide, true);
    ToggleOutcome::Shown
}

/// Flip an already-built subtree, or `None` when nothing is built yet.
fn flip_existing<H: Host>(host: &mut H, kind: OverlayKind) -> Option<ToggleOutcome> {
    let visible = host.overlay_visible(kind)?;
    host.set_overlay_visible(kind, !visible);
    Some(if visible {
        ToggleOutcome::Hidden
    } else {
        ToggleOutcome::Shown
    })
}
