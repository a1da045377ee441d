// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory surface that records draw calls.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Rect};
use peniko::Brush;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::surface::{BACKGROUND, DrawContext, DrawError, StrokeStyle, Surface};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled rectangle.
    FillRect {
        /// Rectangle in device pixels.
        rect: Rect,
        /// Fill paint.
        brush: Brush,
    },
    /// A stroked path.
    StrokePath {
        /// Path in device pixels.
        path: BezPath,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// A filled circle.
    FillCircle {
        /// Circle in device pixels.
        circle: Circle,
        /// Fill paint.
        brush: Brush,
    },
}

impl DrawOp {
    /// Returns `true` for a fill of `bounds` with the plot background.
    pub fn is_clear_of(&self, bounds: Rect) -> bool {
        matches!(self, Self::FillRect { rect, brush } if *rect == bounds && *brush == Brush::Solid(BACKGROUND))
    }
}

/// Draw context of a [`RecordingSurface`].
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
    detached: bool,
}

impl RecordingContext {
    fn record(&mut self, op: DrawOp) -> Result<(), DrawError> {
        if self.detached {
            return Err(DrawError::Detached);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) -> Result<(), DrawError> {
        self.record(DrawOp::FillRect {
            rect,
            brush: brush.clone(),
        })
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) -> Result<(), DrawError> {
        self.record(DrawOp::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        })
    }

    fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> Result<(), DrawError> {
        self.record(DrawOp::FillCircle {
            circle,
            brush: brush.clone(),
        })
    }
}

/// A [`Surface`] that records draw calls instead of rasterizing them.
///
/// The "on-screen" size is set explicitly with [`RecordingSurface::set_css_size`]
/// and only takes effect on the next [`Surface::resize`], as with a real canvas.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    css_width: f64,
    css_height: f64,
    device_ratio: f64,
    pixel_ratio: f64,
    width: f64,
    height: f64,
    resizes: usize,
    ctx: RecordingContext,
}

impl RecordingSurface {
    /// Creates a surface with the given CSS size and a pixel ratio of one.
    pub fn new(css_width: f64, css_height: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_ratio: 1.0,
            pixel_ratio: 1.0,
            width: 0.0,
            height: 0.0,
            resizes: 0,
            ctx: RecordingContext::default(),
        }
    }

    /// Sets the device pixel ratio applied on resize.
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.device_ratio = pixel_ratio;
        self
    }

    /// Changes the device pixel ratio, as a browser zoom would. It takes
    /// effect on the next resize.
    pub fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        self.device_ratio = pixel_ratio;
    }

    /// Changes the CSS size, as a layout change would.
    pub fn set_css_size(&mut self, css_width: f64, css_height: f64) {
        self.css_width = css_width;
        self.css_height = css_height;
    }

    /// Makes every subsequent draw call fail with [`DrawError::Detached`].
    pub fn set_detached(&mut self, detached: bool) {
        self.ctx.detached = detached;
    }

    /// Draw calls recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ctx.ops
    }

    /// Returns and forgets the recorded draw calls.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        core::mem::take(&mut self.ctx.ops)
    }

    /// Draw calls since the most recent background clear, i.e. the visible
    /// frame.
    pub fn last_frame(&self) -> &[DrawOp] {
        let bounds = self.bounds();
        let start = self
            .ctx
            .ops
            .iter()
            .rposition(|op| op.is_clear_of(bounds))
            .unwrap_or(0);
        &self.ctx.ops[start..]
    }

    /// Forgets draw calls hidden by a later background clear.
    pub fn discard_overdrawn(&mut self) {
        let keep = self.last_frame().len();
        let len = self.ctx.ops.len();
        self.ctx.ops.drain(..len - keep);
    }

    /// Number of full-surface background fills recorded so far.
    pub fn clears(&self) -> usize {
        let bounds = self.bounds();
        self.ctx.ops.iter().filter(|op| op.is_clear_of(bounds)).count()
    }

    /// Number of times [`Surface::resize`] ran.
    pub fn resizes(&self) -> usize {
        self.resizes
    }
}

impl Surface for RecordingSurface {
    type Context = RecordingContext;

    fn resize(&mut self) {
        self.pixel_ratio = self.device_ratio;
        self.width = (self.css_width * self.pixel_ratio).round();
        self.height = (self.css_height * self.pixel_ratio).round();
        self.resizes += 1;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_applies_pixel_ratio() {
        let mut s = RecordingSurface::new(300.5, 100.0).with_pixel_ratio(2.0);
        assert_eq!(s.width(), 0.0, "unsized until the first resize");
        s.resize();
        assert_eq!((s.width(), s.height()), (601.0, 200.0));
        s.set_css_size(10.0, 10.0);
        assert_eq!(s.width(), 601.0, "css size applies on resize only");
        s.resize();
        assert_eq!(s.width(), 20.0);
        assert_eq!(s.resizes(), 2);
    }

    #[test]
    fn detached_surface_rejects_draws() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.resize();
        s.set_detached(true);
        assert_eq!(s.clear(), Err(DrawError::Detached));
        assert!(s.ops().is_empty());
        s.set_detached(false);
        assert_eq!(s.clear(), Ok(()));
        assert_eq!(s.clears(), 1);
    }

    #[test]
    fn overdrawn_calls_are_discarded() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.resize();
        let dot = Circle::new((1.0, 1.0), 1.0);
        let white = Brush::Solid(peniko::color::palette::css::WHITE);
        s.clear().unwrap();
        s.context().fill_circle(dot, &white).unwrap();
        s.clear().unwrap();
        s.context().fill_circle(dot, &white).unwrap();
        assert_eq!(s.last_frame().len(), 2);
        s.discard_overdrawn();
        assert_eq!(s.ops().len(), 2, "only the visible frame is kept");
        assert_eq!(s.clears(), 1);
    }
}
