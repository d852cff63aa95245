#![forbid(unsafe_code)]

//! Grid overlay configuration and layout solving.
//!
//! The grid overlay is a stack of vertical unit stripes plus horizontal
//! baseline rulings, sized from the host element's rendered metrics. The
//! solver here is pure: it takes a parsed [`GridConfig`] and measured
//! [`HostMetrics`] and returns plain placement data ([`Stripe`] /
//! [`BaselineRow`]) for the host layer to turn into DOM nodes.
//!
//! Exactly one of `unit_size` / `unit_count` must be configured; the other is
//! derived from the host width:
//!
//! - from a count: `unit_size = (width - gutter * (count - 1)) / count`
//! - from a size:  `unit_count = floor((width + gutter) / (size + gutter))`

use crate::ConfigError;

/// Attribute carrying an explicit unit width in px.
pub const ATTR_UNIT_SIZE: &str = "data-grid-unit-size";
/// Attribute carrying an explicit unit count.
pub const ATTR_UNIT_COUNT: &str = "data-grid-unit-count";
/// Attribute carrying the gutter width in px.
pub const ATTR_GUTTER: &str = "data-grid-gutter";
/// Attribute carrying the baseline offset in px.
pub const ATTR_BASELINE_OFFSET: &str = "data-grid-baseline-offset";

/// Rendered metrics of a host element, in px.
///
/// Measured by the host layer; `line_height` comes from a non-destructive
/// text probe (append a throwaway text node, read its height, remove it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMetrics {
    /// Content width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
    /// Left padding; stripes start here.
    pub padding_left: f64,
    /// Measured line height; the baseline ruling interval.
    pub line_height: f64,
}

/// Parsed grid overlay configuration for one host element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridConfig {
    /// Explicit unit width in px, if configured.
    pub unit_size: Option<f64>,
    /// Explicit unit count, if configured.
    pub unit_count: Option<u32>,
    /// Gap between stripes in px. Default 0.
    pub gutter: f64,
    /// Top offset of the first baseline ruling in px. Default 0.
    pub baseline_offset: f64,
}

impl GridConfig {
    /// Populate from an attribute source (typically DOM data attributes).
    ///
    /// Unparsable numeric attributes fall back to the field defaults;
    /// validation of the unit-size/unit-count pair happens in
    /// [`GridLayout::solve`], not here.
    pub fn from_attrs<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            unit_size: parse_px(attr(ATTR_UNIT_SIZE)),
            unit_count: parse_count(attr(ATTR_UNIT_COUNT)),
            gutter: parse_px(attr(ATTR_GUTTER)).unwrap_or(0.0),
            baseline_offset: parse_px(attr(ATTR_BASELINE_OFFSET)).unwrap_or(0.0),
        }
    }
}

fn parse_px(value: Option<String>) -> Option<f64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

fn parse_count(value: Option<String>) -> Option<u32> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// One vertical unit stripe, positioned relative to the overlay container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stripe {
    /// Left edge in px.
    pub left: f64,
    /// Width in px.
    pub width: f64,
}

/// One horizontal baseline ruling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineRow {
    /// Top edge in px.
    pub top: f64,
    /// Row height in px; the ruled line sits on the row's bottom edge.
    pub height: f64,
}

/// Solved grid placement for one host element.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Effective unit width after derivation.
    pub unit_size: f64,
    /// Effective unit count after derivation.
    pub unit_count: u32,
    /// Vertical stripes, left to right.
    pub stripes: Vec<Stripe>,
    /// Baseline rulings, top to bottom.
    pub baselines: Vec<BaselineRow>,
}

impl GridLayout {
    /// Solve stripe and baseline placement.
    ///
    /// Errors with [`ConfigError::UnitSpec`] unless exactly one of
    /// `unit_size` / `unit_count` is configured.
    pub fn solve(config: &GridConfig, metrics: &HostMetrics) -> Result<Self, ConfigError> {
        let (unit_size, unit_count) = match (config.unit_size, config.unit_count) {
            (None, None) | (Some(_), Some(_)) => return Err(ConfigError::UnitSpec),
            (None, Some(count)) => (derive_unit_size(metrics.width, config.gutter, count), count),
            (Some(size), None) => (size, derive_unit_count(metrics.width, config.gutter, size)),
        };

        let mut stripes = Vec::with_capacity(unit_count as usize);
        let mut left = metrics.padding_left;
        for _ in 0..unit_count {
            stripes.push(Stripe {
                left,
                width: unit_size,
            });
            left += unit_size + config.gutter;
        }

        let mut baselines = Vec::new();
        if metrics.line_height > 0.0 {
            let mut top = config.baseline_offset;
            // A ruling that would cross the bottom edge is not emitted.
            while top + metrics.line_height < metrics.height {
                baselines.push(BaselineRow {
                    top,
                    height: metrics.line_height,
                });
                top += metrics.line_height;
            }
        }

        Ok(Self {
            unit_size,
            unit_count,
            stripes,
            baselines,
        })
    }
}

fn derive_unit_size(width: f64, gutter: f64, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (width - gutter * (f64::from(count) - 1.0)) / f64::from(count)
}

fn derive_unit_count(width: f64, gutter: f64, size: f64) -> u32 {
    if size + gutter <= 0.0 {
        return 0;
    }
    let count = ((width + gutter) / (size + gutter)).floor();
    if count.is_sign_negative() { 0 } else { count as u32 }
}
