#![forbid(unsafe_code)]

//! `Host` implementation over real DOM elements.
//!
//! [`WebHost`] wraps a `web_sys::HtmlElement` and owns all measurement and
//! node construction; the overlay engine in `redline-core` drives it. DOM
//! calls that can only fail on a detached or exotic document are swallowed:
//! an element we cannot measure or append to simply gets no overlay, which
//! matches the per-element error isolation of the engine.

use redline_core::grid::{GridLayout, HostMetrics};
use redline_core::guide::{self, GuideConfig};
use redline_core::overlay::{Host, OverlayKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::{measure, style};

/// One DOM element as seen by the overlay engine.
#[derive(Debug, Clone)]
pub struct WebHost {
    element: HtmlElement,
}

impl WebHost {
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    fn document(&self) -> Option<Document> {
        self.element.owner_document()
    }

    /// The overlay subtree root of `kind`, when one has been built.
    fn overlay_node(&self, kind: OverlayKind) -> Option<HtmlElement> {
        self.element
            .query_selector(&format!(".{}", kind.marker_class()))
            .ok()
            .flatten()
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
    }

    /// Measure line height with a throwaway text node sized by the host's
    /// current font settings.
    fn measure_line_height(&self) -> f64 {
        let Some(document) = self.document() else {
            return 0.0;
        };
        let Ok(probe) = document.create_element("div") else {
            return 0.0;
        };
        probe.set_text_content(Some("LineHeight"));
        if self.element.append_child(&probe).is_err() {
            return 0.0;
        }
        let height = probe
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| f64::from(el.offset_height()));
        probe.remove();
        height
    }

    /// Read a computed style property as px.
    fn computed_px(&self, property: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(&self.element).ok().flatten()?;
        let value = style.get_property_value(property).ok()?;
        parse_px(&value)
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

impl Host for WebHost {
    fn attr(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn metrics(&self) -> HostMetrics {
        let padding_left = self.computed_px("padding-left").unwrap_or(0.0);
        let padding_right = self.computed_px("padding-right").unwrap_or(0.0);
        HostMetrics {
            width: measure::content_width(
                f64::from(self.element.client_width()),
                padding_left,
                padding_right,
            ),
            height: f64::from(self.element.offset_height()),
            padding_left,
            line_height: self.measure_line_height(),
        }
    }

    fn overlay_visible(&self, kind: OverlayKind) -> Option<bool> {
        let node = self.overlay_node(kind)?;
        let display = node
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        Some(display != "none")
    }

    fn set_overlay_visible(&mut self, kind: OverlayKind, visible: bool) {
        let Some(node) = self.overlay_node(kind) else {
            return;
        };
        if visible {
            let _ = node.style().remove_property("display");
        } else {
            let _ = node.style().set_property("display", "none");
        }
    }

    fn mount_grid(&mut self, layout: &GridLayout) {
        let Some(document) = self.document() else {
            return;
        };
        let Ok(container) = document.create_element("div") else {
            return;
        };
        container.set_class_name(OverlayKind::Grid.marker_class());
        let _ = container.set_attribute("style", &style::grid_container_style());

        for stripe in &layout.stripes {
            let Ok(unit) = document.create_element("div") else {
                continue;
            };
            unit.set_class_name(style::CLASS_GRID_UNIT);
            let _ = unit.set_attribute("style", &style::stripe_style(stripe));
            let _ = container.append_child(&unit);
        }

        for row in &layout.baselines {
            let Ok(line) = document.create_element("div") else {
                continue;
            };
            line.set_class_name(style::CLASS_GRID_BASELINE);
            let _ = line.set_attribute("style", &style::baseline_style(row));
            let _ = container.append_child(&line);
        }

        let _ = self.element.append_child(&container);
    }

    fn mount_guide(&mut self, config: &GuideConfig) {
        let Some(document) = self.document() else {
            return;
        };
        let Ok(node) = document.create_element("img") else {
            return;
        };
        let Ok(image) = node.dyn_into::<HtmlImageElement>() else {
            return;
        };
        image.set_class_name(OverlayKind::Guide.marker_class());
        let _ = image.set_attribute("style", &style::guide_style());

        // Once the image loads, grow the host to at least its natural
        // height. The closure is one-shot; the image keeps it alive.
        let host = self.element.clone();
        let loaded = image.clone();
        let onload = Closure::once(move || {
            let expanded = guide::expanded_height(
                f64::from(host.offset_height()),
                f64::from(loaded.natural_height()),
            );
            let _ = host.style().set_property("height", &format!("{expanded}px"));
        });
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        // Assign the source after the hook so a cached image cannot fire
        // before we listen.
        image.set_src(&config.url);
        let _ = self.element.append_child(&image);
    }
}
