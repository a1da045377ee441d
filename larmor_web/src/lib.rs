// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser host for the Larmor plots.
//!
//! On `wasm32` targets this crate mounts the demo when the page has loaded:
//! it wraps each plot canvas in a [`CanvasSurface`], builds a
//! [`larmor_plots::PlotOrchestrator`] over them, and drives it from a single
//! `requestAnimationFrame` chain. Resize and parameter changes go through one
//! cancellable [`gloo_timers`] timeout.
//!
//! Notes:
//! - `web-sys`/`wasm-bindgen` are only used on `wasm32` targets.
//! - Other targets only get the element ids and CSS colour helpers.

mod css;
pub mod ids;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod surface;

pub use css::{brush_css, css_color};
#[cfg(target_arch = "wasm32")]
pub use surface::{CanvasContext, CanvasSurface};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Module entry point: installs logging and mounts the page once loaded.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("larmor_web: logger already installed"));
    }

    let window = dom::window()?;
    let document = dom::document()?;
    if document.ready_state() == "complete" {
        return mount();
    }
    // Failures are logged by `mount`.
    let on_load = Closure::once(|| {
        let _ = mount();
    });
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn mount() -> Result<(), JsValue> {
    app::App::mount()
        .map(drop)
        .inspect_err(|err| log::error!("larmor_web: mount failed: {err:?}"))
}
