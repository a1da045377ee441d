// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page wiring: event listeners, the animation-frame loop and the rebuild
//! timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use kurbo::Point;
use larmor_core::Ticket;
use larmor_plots::{
    Command, OrchestratorConfig, PlotOrchestrator, command_for_keydown, command_for_keyup,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent,
    TouchEvent, Window,
};

use crate::dom;
use crate::ids::{MAX_SPEED, NEXT_FRAME, PLAY_PAUSE, PLOT_CONTAINER};
use crate::surface::CanvasSurface;

/// The mounted page.
///
/// Shared as `Rc<App>` by every listener. Listeners never hold a borrow of the
/// orchestrator across a call back into `App`.
pub(crate) struct App {
    window: Window,
    document: Document,
    orchestrator: RefCell<PlotOrchestrator<CanvasSurface>>,
    play_pause: HtmlElement,
    max_speed: HtmlInputElement,
    frame_callback: RefCell<Option<Closure<dyn FnMut()>>>,
    frame_pending: Cell<bool>,
    rebuild_timer: RefCell<Option<Timeout>>,
}

impl core::fmt::Debug for App {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("orchestrator", &self.orchestrator)
            .field("frame_pending", &self.frame_pending)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Builds the plots over the page's canvases and installs every listener.
    pub(crate) fn mount() -> Result<Rc<Self>, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        dom::reveal_page(&document)?;

        let orchestrator = PlotOrchestrator::new(OrchestratorConfig::default(), |id| {
            CanvasSurface::from_id(&document, id)
        })?;
        let max_speed: HtmlInputElement = dom::element_by_id(&document, MAX_SPEED)?;
        max_speed.set_value(&orchestrator.max_speed().to_string());

        let app = Rc::new(Self {
            play_pause: dom::element_by_id(&document, PLAY_PAUSE)?,
            max_speed,
            orchestrator: RefCell::new(orchestrator),
            frame_callback: RefCell::new(None),
            frame_pending: Cell::new(false),
            rebuild_timer: RefCell::new(None),
            window,
            document,
        });

        let looped = Rc::clone(&app);
        *app.frame_callback.borrow_mut() = Some(Closure::new(move || looped.on_frame()));

        app.install_pointer_listeners()?;
        app.install_control_listeners()?;
        app.update_label();
        app.schedule_frame();
        log::info!("larmor mounted");
        Ok(app)
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        kind: &str,
        mut handler: impl FnMut(&Rc<Self>, &Event) + 'static,
    ) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(&app, &event));
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn install_pointer_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        let container: HtmlElement = dom::element_by_id(&self.document, PLOT_CONTAINER)?;

        self.listen(&container, "mousedown", |app, event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                if mouse.button() == 0 {
                    app.orchestrator.borrow_mut().pointer_mut().press();
                }
            }
        })?;
        self.listen(&container, "mouseup", |app, event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                if mouse.button() == 0 {
                    app.orchestrator.borrow_mut().pointer_mut().release();
                }
            }
        })?;
        self.listen(&container, "mousemove", |app, event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let at = app.scaled(mouse.client_x(), mouse.client_y());
                app.orchestrator.borrow_mut().pointer_mut().move_to(at);
            }
        })?;
        self.listen(&container, "touchstart", |app, event| {
            if let Some(at) = app.touch_position(event) {
                app.orchestrator.borrow_mut().pointer_mut().touch_at(at);
            }
        })?;
        self.listen(&container, "touchmove", |app, event| {
            if let Some(at) = app.touch_position(event) {
                app.orchestrator.borrow_mut().pointer_mut().move_to(at);
            }
        })?;
        self.listen(&container, "touchend", |app, _| {
            app.orchestrator.borrow_mut().pointer_mut().release();
        })
    }

    fn install_control_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        self.listen(&self.window, "resize", |app, _| {
            let ticket = app.orchestrator.borrow_mut().on_resize(dom::now_ms());
            app.schedule_rebuild(ticket);
        })?;
        self.listen(&self.document, "keydown", |app, event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                if let Some(command) = command_for_keydown(&key.code(), key.ctrl_key()) {
                    app.run(command);
                }
            }
        })?;
        self.listen(&self.document, "keyup", |app, event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                let input: &JsValue = app.max_speed.as_ref();
                let in_input = event.target().is_some_and(|target| {
                    let target: &JsValue = target.as_ref();
                    target == input
                });
                if let Some(command) = command_for_keyup(&key.code(), key.ctrl_key(), in_input) {
                    app.run(command);
                }
            }
        })?;
        self.listen(&self.max_speed, "change", |app, _| app.run(Command::ApplyParameters))?;

        let play_pause = self.play_pause.clone();
        self.listen(&play_pause, "click", |app, _| app.run(Command::TogglePlayback))?;
        let next_frame: HtmlElement = dom::element_by_id(&self.document, NEXT_FRAME)?;
        self.listen(&next_frame, "click", |app, _| app.run(Command::NextFrame))
    }

    fn run(self: &Rc<Self>, command: Command) {
        match command {
            Command::TogglePlayback => {
                let running = self.orchestrator.borrow_mut().toggle_all().is_running();
                self.update_label();
                if running {
                    self.schedule_frame();
                }
            }
            Command::NextFrame => {
                self.orchestrator.borrow_mut().step_all();
            }
            Command::ApplyParameters => {
                let text = self.max_speed.value();
                let (applied, ticket) = self
                    .orchestrator
                    .borrow_mut()
                    .apply_max_speed_input(&text, dom::now_ms());
                self.max_speed.set_value(&applied.to_string());
                self.schedule_rebuild(ticket);
            }
        }
    }

    /// Shows the loaders and (re)arms the rebuild timer.
    ///
    /// Replacing the stored timer drops, and so cancels, the previous one.
    fn schedule_rebuild(self: &Rc<Self>, ticket: Ticket) {
        if let Err(err) = dom::set_loading_style(&self.document, true) {
            log::warn!("could not show loaders: {err:?}");
        }
        let quiet_ms = self.orchestrator.borrow().quiet_ms();
        let app = Rc::clone(self);
        #[allow(clippy::cast_possible_truncation, reason = "quiet period is a few hundred ms")]
        let timer = Timeout::new(quiet_ms.max(0.0) as u32, move || app.on_rebuild(ticket));
        *self.rebuild_timer.borrow_mut() = Some(timer);
    }

    fn on_rebuild(self: &Rc<Self>, ticket: Ticket) {
        if !self.orchestrator.borrow_mut().fire(ticket) {
            return;
        }
        if let Err(err) = dom::set_loading_style(&self.document, false) {
            log::warn!("could not hide loaders: {err:?}");
        }
        self.update_label();
        self.schedule_frame();
    }

    fn on_frame(&self) {
        self.frame_pending.set(false);
        if self.orchestrator.borrow_mut().frame() {
            self.schedule_frame();
        }
    }

    /// Requests an animation frame unless one is already pending.
    fn schedule_frame(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            self.frame_pending.set(false);
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            self.frame_pending.set(false);
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }

    fn update_label(&self) {
        let label = self.orchestrator.borrow().play_label();
        self.play_pause.set_inner_html(label);
    }

    fn scaled(&self, x: i32, y: i32) -> Point {
        self.orchestrator
            .borrow()
            .particle()
            .device_point(Point::new(f64::from(x), f64::from(y)))
    }

    fn touch_position(&self, event: &Event) -> Option<Point> {
        let touch_event = event.dyn_ref::<TouchEvent>()?;
        touch_event.prevent_default();
        let touch = touch_event.changed_touches().get(0)?;
        Some(self.scaled(touch.page_x(), touch.page_y()))
    }
}
