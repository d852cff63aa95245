#![forbid(unsafe_code)]

//! Inline style text and class names for overlay nodes.
//!
//! Overlay nodes are styled inline so the library needs no stylesheet; the
//! marker classes exist for subtree lookup and for consumers who want to
//! restyle the overlays from their own CSS. Everything here is pure string
//! building, kept out of the wasm-gated modules so it stays testable on any
//! target.

use redline_core::grid::{BaselineRow, Stripe};

/// Class on each vertical unit stripe.
pub const CLASS_GRID_UNIT: &str = "redline-grid-unit";
/// Class on each baseline ruling.
pub const CLASS_GRID_BASELINE: &str = "redline-grid-baseline";

/// Semi-transparent red shared by stripes and rulings.
pub const GUIDE_FILL: &str = "rgba(255, 0, 0, 0.25)";

/// Grid container sits above page content; the guide image sits below the
/// grid so both can be shown together.
pub const GRID_Z_INDEX: u32 = 500;
/// Z-order of the guide image.
pub const GUIDE_Z_INDEX: u32 = 400;

/// Inline style for the grid container: covers the host box, elevated,
/// initially hidden.
#[must_use]
pub fn grid_container_style() -> String {
    format!(
        "position: absolute; left: 0; right: 0; top: 0; bottom: 0; \
         z-index: {GRID_Z_INDEX}; display: none;"
    )
}

/// Inline style for one unit stripe.
#[must_use]
pub fn stripe_style(stripe: &Stripe) -> String {
    format!(
        "position: absolute; left: {}px; top: 0; bottom: 0; width: {}px; \
         background-color: {GUIDE_FILL};",
        stripe.left, stripe.width
    )
}

/// Inline style for one baseline ruling; the visible line is the row's
/// bottom border.
#[must_use]
pub fn baseline_style(row: &BaselineRow) -> String {
    format!(
        "position: absolute; left: 0; right: 0; top: {}px; height: {}px; \
         border-bottom: 1px solid {GUIDE_FILL};",
        row.top, row.height
    )
}

/// Inline style for the guide image: host top-left, elevated, initially
/// hidden.
#[must_use]
pub fn guide_style() -> String {
    format!("position: absolute; left: 0; top: 0; z-index: {GUIDE_Z_INDEX}; display: none;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn container_covers_the_host_and_starts_hidden() {
        let style = grid_container_style();
        assert!(style.contains("position: absolute"));
        assert!(style.contains("z-index: 500"));
        assert!(style.contains("display: none"));
    }

    #[test]
    fn stripe_style_places_by_left_offset() {
        let style = stripe_style(&Stripe {
            left: 25.0,
            width: 20.0,
        });
        assert_eq!(
            style,
            "position: absolute; left: 25px; top: 0; bottom: 0; width: 20px; \
             background-color: rgba(255, 0, 0, 0.25);"
        );
    }

    #[test]
    fn fractional_offsets_keep_their_precision() {
        let style = stripe_style(&Stripe {
            left: 12.5,
            width: 33.25,
        });
        assert!(style.contains("left: 12.5px"));
        assert!(style.contains("width: 33.25px"));
    }

    #[test]
    fn baseline_rules_with_a_bottom_border() {
        let style = baseline_style(&BaselineRow {
            top: 32.0,
            height: 16.0,
        });
        assert!(style.contains("top: 32px"));
        assert!(style.contains("height: 16px"));
        assert!(style.contains("border-bottom: 1px solid rgba(255, 0, 0, 0.25)"));
    }

    #[test]
    fn guide_sits_below_the_grid() {
        assert!(GUIDE_Z_INDEX < GRID_Z_INDEX);
        assert!(guide_style().contains("z-index: 400"));
    }
}
