// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM lookups and style toggles.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::ids::{LOADER_NAME, PLOT_NAME};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("larmor_web: missing window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("larmor_web: missing document"))
}

/// Looks up `#id` and casts it to `T`.
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("larmor_web: missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("larmor_web: #{id} has the wrong element type")))
}

pub(crate) fn elements_by_name(document: &Document, name: &str) -> Vec<HtmlElement> {
    let list = document.get_elements_by_name(name);
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(crate) fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// Swaps canvases and loaders while a rebuild is pending.
pub(crate) fn set_loading_style(document: &Document, loading: bool) -> Result<(), JsValue> {
    let (canvas_opacity, canvas_visibility) = if loading { ("0", "hidden") } else { ("1", "visible") };
    for canvas in elements_by_name(document, PLOT_NAME) {
        let style = canvas.style();
        style.set_property("opacity", canvas_opacity)?;
        style.set_property("visibility", canvas_visibility)?;
    }
    let (loader_opacity, loader_visibility, play_state) = if loading {
        ("1", "visible", "running")
    } else {
        ("0", "hidden", "paused")
    };
    for loader in elements_by_name(document, LOADER_NAME) {
        let style = loader.style();
        style.set_property("opacity", loader_opacity)?;
        style.set_property("visibility", loader_visibility)?;
        style.set_property("animation-play-state", play_state)?;
    }
    Ok(())
}

/// Removes the page-level spinner and reveals the page.
pub(crate) fn reveal_page(document: &Document) -> Result<(), JsValue> {
    if let Some(loading) = document.get_element_by_id("loading-container") {
        loading.remove();
    }
    let page: HtmlElement = element_by_id(document, "page-container")?;
    page.set_attribute("style", "visibility: visible; opacity: 1;")
}
