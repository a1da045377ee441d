// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas surface abstraction.
//!
//! Plots never talk to a concrete canvas. They draw through [`DrawContext`],
//! obtained from a [`Surface`] that knows its device-pixel size. The web
//! adapter backs this with an HTML canvas; [`crate::RecordingSurface`] backs it
//! with an in-memory op log.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Background every plot clears to.
pub const BACKGROUND: Color = css::BLACK;

/// A failure while issuing draw calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The surface's backing element is no longer attached.
    #[error("drawing surface is detached")]
    Detached,
    /// The backend rejected a draw call.
    #[error("drawing backend error: {0}")]
    Backend(String),
}

/// A paint + width pair for stroked paths.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in device pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::WHITE, 1.0)
    }
}

/// The 2D drawing primitives plots need.
pub trait DrawContext {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) -> Result<(), DrawError>;

    /// Strokes an open path.
    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) -> Result<(), DrawError>;

    /// Fills a circle.
    fn fill_circle(&mut self, circle: Circle, brush: &Brush) -> Result<(), DrawError>;
}

/// A drawable canvas with a device-pixel size.
///
/// [`Surface::resize`] must run at least once before drawing; plots do this on
/// construction and on every update.
pub trait Surface {
    /// Drawing context type, valid for the surface's whole lifetime.
    type Context: DrawContext;

    /// Recomputes the pixel size from the on-screen size and pixel ratio.
    fn resize(&mut self);

    /// Width in device pixels as of the last resize.
    fn width(&self) -> f64;

    /// Height in device pixels as of the last resize.
    fn height(&self) -> f64;

    /// Device pixels per CSS pixel as of the last resize.
    fn pixel_ratio(&self) -> f64;

    /// Returns the drawing context.
    fn context(&mut self) -> &mut Self::Context;

    /// The full surface rectangle.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }

    /// Fills the whole surface with [`BACKGROUND`].
    fn clear(&mut self) -> Result<(), DrawError> {
        let bounds = self.bounds();
        self.context().fill_rect(bounds, &Brush::Solid(BACKGROUND))
    }
}
