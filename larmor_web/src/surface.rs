// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML canvas backing for [`Surface`].

use kurbo::{BezPath, Circle, PathEl, Rect};
use larmor_plots::{DrawContext, DrawError, StrokeStyle, Surface};
use peniko::Brush;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::css::brush_css;
use crate::dom;

/// 2D context of a [`CanvasSurface`].
#[derive(Clone, Debug)]
pub struct CanvasContext {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasContext {
    fn attached(&self) -> Result<(), DrawError> {
        if self.canvas.is_connected() {
            Ok(())
        } else {
            Err(DrawError::Detached)
        }
    }

    fn paint(brush: &Brush) -> Result<String, DrawError> {
        brush_css(brush).ok_or_else(|| DrawError::Backend("only solid paints are supported".into()))
    }

    fn trace(&self, path: &BezPath) {
        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
    }
}

fn backend(err: JsValue) -> DrawError {
    DrawError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl DrawContext for CanvasContext {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) -> Result<(), DrawError> {
        self.attached()?;
        self.ctx.set_fill_style_str(&Self::paint(brush)?);
        self.ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) -> Result<(), DrawError> {
        self.attached()?;
        self.ctx.set_stroke_style_str(&Self::paint(&stroke.brush)?);
        self.ctx.set_line_width(stroke.stroke_width);
        self.trace(path);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> Result<(), DrawError> {
        self.attached()?;
        self.ctx.set_fill_style_str(&Self::paint(brush)?);
        self.ctx.begin_path();
        self.ctx
            .arc(circle.center.x, circle.center.y, circle.radius, 0.0, core::f64::consts::TAU)
            .map_err(backend)?;
        self.ctx.fill();
        Ok(())
    }
}

/// A canvas element sized to its on-screen box times the device pixel ratio.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    width: f64,
    height: f64,
    pixel_ratio: f64,
    ctx: CanvasContext,
}

impl CanvasSurface {
    /// Wraps `canvas`, creating an opaque 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::FALSE)?;
        let ctx = canvas
            .get_context_with_context_options("2d", &options)?
            .ok_or_else(|| JsValue::from_str("larmor_web: missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
            ctx: CanvasContext { canvas, ctx },
        })
    }

    /// Looks up the canvas `#id` in `document`.
    pub fn from_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        Self::new(dom::element_by_id(document, id)?)
    }
}

impl Surface for CanvasSurface {
    type Context = CanvasContext;

    fn resize(&mut self) {
        self.pixel_ratio = dom::window().map_or(1.0, |w| w.device_pixel_ratio());
        let canvas = &self.ctx.canvas;
        self.width = (f64::from(canvas.client_width()) * self.pixel_ratio).round().max(0.0);
        self.height = (f64::from(canvas.client_height()) * self.pixel_ratio).round().max(0.0);
        #[allow(clippy::cast_possible_truncation, reason = "rounded and non-negative")]
        {
            canvas.set_width(self.width as u32);
            canvas.set_height(self.height as u32);
        }
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn context(&mut self) -> &mut Self::Context {
        &mut self.ctx
    }
}
