#![forbid(unsafe_code)]

//! JS-facing API surface, exported via `wasm-bindgen`.
//!
//! Element collections cross the boundary as `js_sys::Array` (callers with a
//! `NodeList` convert with `Array.from`). Toggle calls return the array they
//! were given so call sites can chain. Errors surface per element through
//! `console.error`; a failed element never aborts its siblings.

use js_sys::{Array, Function, Object, Reflect};
use redline_core::{HotkeyAction, HotkeyRouter, ToggleOutcome};
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::dom::WebHost;
use crate::event::normalize_keydown;
use crate::props;

/// Toggle grid overlays on every element of `elements`.
///
/// Returns the same array for chaining.
#[wasm_bindgen(js_name = toggleGrid)]
pub fn toggle_grid(elements: Array) -> Array {
    let mut hosts = collect_hosts(&elements);
    report_failures(&redline_core::toggle_grid(&mut hosts));
    elements
}

/// Toggle guide overlays on every element of `elements`.
///
/// Returns the same array for chaining.
#[wasm_bindgen(js_name = toggleGuide)]
pub fn toggle_guide(elements: Array) -> Array {
    let mut hosts = collect_hosts(&elements);
    report_failures(&redline_core::toggle_guide(&mut hosts));
    elements
}

thread_local! {
    static HOTKEYS_BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Register the global hotkey dispatcher on `document`.
///
/// Call once at startup; repeat calls are no-ops. The listener lives for the
/// rest of the page (its closure is intentionally leaked) and is never
/// unregistered.
#[wasm_bindgen(js_name = bindHotKeys)]
pub fn bind_hot_keys() {
    if HOTKEYS_BOUND.with(Cell::get) {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let router = HotkeyRouter::default();
    let target = document.clone();
    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let press = normalize_keydown(
            event.shift_key(),
            event.ctrl_key(),
            event.alt_key(),
            event.key_code(),
            legacy_which(&event),
        );
        let Some(action) = router.route(&press) else {
            return;
        };
        let mut hosts = hosts_by_class(&target, action.trigger_class());
        let outcomes = match action {
            HotkeyAction::ToggleGrid => redline_core::toggle_grid(&mut hosts),
            HotkeyAction::ToggleGuide => redline_core::toggle_guide(&mut hosts),
        };
        report_failures(&outcomes);
    });

    if document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
        HOTKEYS_BOUND.with(|bound| bound.set(true));
    }
}

/// Ensure `console.log` / `console.error` exist.
///
/// Idempotent; hosts that already expose a working console are left alone.
/// Otherwise installs an object with no-op `log` and `error` so
/// unconditional logging calls elsewhere never throw.
#[wasm_bindgen(js_name = ensureConsole)]
pub fn ensure_console() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if has_working_console(&window) {
        return;
    }
    let stub = Object::new();
    let noop = Function::new_no_args("");
    let _ = Reflect::set(&stub, &JsValue::from_str("log"), &noop);
    let _ = Reflect::set(&stub, &JsValue::from_str("error"), &noop);
    let _ = Reflect::set(&window, &JsValue::from_str("console"), &stub);
}

/// Lock the scope of every enumerable function-valued property of `object`
/// to the object itself, so detached references keep their `this`.
///
/// Enumerates like `for..in`, prototype chain included, because instance
/// methods usually live on the prototype; the bound replacements are written
/// onto the object itself, shadowing the prototype originals. Skips a
/// property literally named `constructor`. Mutates in place.
#[wasm_bindgen]
pub fn scope(object: &Object) {
    for name in props::chain_keys(&enumerable_levels(object)) {
        if !props::should_rebind(&name) {
            continue;
        }
        let key = JsValue::from_str(&name);
        let Ok(value) = Reflect::get(object, &key) else {
            continue;
        };
        let Ok(function) = value.dyn_into::<Function>() else {
            continue;
        };
        let _ = Reflect::set(object, &key, &function.bind(object));
    }
}

/// Own enumerable string keys of the object and of each prototype level,
/// nearest-first, ending at the null prototype.
fn enumerable_levels(object: &Object) -> Vec<Vec<String>> {
    let mut levels = Vec::new();
    let mut current = JsValue::from(object.clone());
    while current.is_object() {
        let level = Object::from(current.clone());
        levels.push(
            Object::keys(&level)
                .iter()
                .filter_map(|key| key.as_string())
                .collect(),
        );
        current = Reflect::get_prototype_of(&current)
            .map(JsValue::from)
            .unwrap_or(JsValue::NULL);
    }
    levels
}

/// Reversed copy of an element array; the input is left untouched.
#[wasm_bindgen]
pub fn reverse(elements: &Array) -> Array {
    let reversed = Array::new();
    for index in (0..elements.length()).rev() {
        reversed.push(&elements.get(index));
    }
    reversed
}

fn collect_hosts(elements: &Array) -> Vec<WebHost> {
    elements
        .iter()
        .filter_map(|value| value.dyn_into::<HtmlElement>().ok())
        .map(WebHost::new)
        .collect()
}

fn hosts_by_class(document: &Document, class: &str) -> Vec<WebHost> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .map(WebHost::new)
        .collect()
}

fn report_failures(outcomes: &[ToggleOutcome]) {
    for outcome in outcomes {
        if let Some(err) = outcome.error() {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
        }
    }
}

fn has_working_console(window: &web_sys::Window) -> bool {
    let Ok(console) = Reflect::get(window, &JsValue::from_str("console")) else {
        return false;
    };
    if console.is_undefined() || console.is_null() {
        return false;
    }
    is_function(&console, "log") && is_function(&console, "error")
}

fn is_function(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

/// Legacy `event.which`, read reflectively: it is non-standard and absent
/// from some hosts, where it reads as zero.
fn legacy_which(event: &KeyboardEvent) -> u32 {
    Reflect::get(event, &JsValue::from_str("which"))
        .ok()
        .and_then(|value| value.as_f64())
        .map_or(0, |which| which as u32)
}
