// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot configuration and the stock plot layout.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use larmor_core::{DEFAULT_AVERAGING_WINDOW, DEFAULT_EVENTS_WINDOW, DEFAULT_MAX_SPEED, DEFAULT_QUIET_MS};
use peniko::Color;
use peniko::color::palette::css;

use crate::surface::StrokeStyle;

/// Registry key and canvas id of the two-channel position chart.
pub const AXIS_POSITION: &str = "axis-position";
/// Registry key and canvas id of the two-channel velocity chart.
pub const AXIS_VELOCITY: &str = "axis-velocity";
/// Registry key and canvas id of the two-channel acceleration chart.
pub const AXIS_ACCELERATION: &str = "axis-acceleration";
/// Registry key and canvas id of the speed chart.
pub const ABS_VELOCITY: &str = "abs-velocity";
/// Registry key and canvas id of the acceleration-magnitude chart.
pub const ABS_ACCELERATION: &str = "abs-acceleration";
/// Canvas id of the particle plot.
pub const PARTICLE: &str = "particle";

/// Red used for acceleration throughout the demo.
pub const ACCELERATION_RED: Color = Color::from_rgb8(176, 26, 0);

/// Frames a signal would take to cross a grid cell.
///
/// The retarded-field view this horizon belongs to is not modelled; the value
/// is kept so the particle plot reports the same horizon as its canvas layout.
pub const RETARDATION_FRAMES: usize = 60;

/// Configuration of one strip chart.
#[derive(Clone, Debug, PartialEq)]
pub struct StripChartConfig {
    /// Registry key, also the id of the backing canvas.
    pub id: String,
    /// Multiplier from sample value to pixels.
    pub scale: f64,
    /// Vertical position of the zero line as a fraction of the height.
    pub origin: f64,
    /// Stroke colour per channel; the last colour repeats for extra channels.
    pub colors: Vec<Color>,
    /// Line width in device pixels.
    pub line_width: f64,
}

impl StripChartConfig {
    /// Creates a config with a white stroke of width 1.5.
    ///
    /// `origin` is clamped into `[0, 1]`.
    pub fn new(id: impl Into<String>, scale: f64, origin: f64) -> Self {
        Self {
            id: id.into(),
            scale,
            origin: origin.clamp(0.0, 1.0),
            colors: vec![css::WHITE],
            line_width: 1.5,
        }
    }

    /// Sets the per-channel colours.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Sets the line width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Stroke for `channel`.
    pub fn stroke_for(&self, channel: usize) -> StrokeStyle {
        let color = self
            .colors
            .get(channel)
            .or(self.colors.last())
            .copied()
            .unwrap_or(css::WHITE);
        StrokeStyle::solid(color, self.line_width)
    }
}

/// The five stock strip charts, in registry order.
pub fn default_strip_charts() -> Vec<StripChartConfig> {
    vec![
        StripChartConfig::new(AXIS_POSITION, 100.0, 0.5)
            .with_colors([Color::from_rgb8(180, 180, 180), Color::from_rgb8(120, 120, 120)]),
        StripChartConfig::new(AXIS_VELOCITY, 0.1, 0.5)
            .with_colors([Color::from_rgb8(255, 255, 255), Color::from_rgb8(150, 150, 150)]),
        StripChartConfig::new(AXIS_ACCELERATION, 3.0, 0.5)
            .with_colors([ACCELERATION_RED, Color::from_rgb8(110, 16, 0)]),
        StripChartConfig::new(ABS_VELOCITY, 0.2, 0.9).with_colors([Color::from_rgb8(255, 255, 255)]),
        StripChartConfig::new(ABS_ACCELERATION, 3.0, 0.9).with_colors([ACCELERATION_RED]),
    ]
}

/// Configuration of the particle plot.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Speed limit; the particle reaches at most 99% of it.
    pub max_speed: f64,
    /// Velocity samples in the acceleration estimate.
    pub averaging_window: usize,
    /// Retained particle events feeding the strip charts.
    pub events_window: usize,
    /// Stroke of the velocity vector.
    pub velocity_stroke: StrokeStyle,
    /// Stroke of the acceleration vector.
    pub acceleration_stroke: StrokeStyle,
    /// Length multiplier of the drawn acceleration vector.
    pub acceleration_gain: f64,
    /// Radius of the particle disk.
    pub radius: f64,
    /// Fill of the particle disk.
    pub fill: Color,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            averaging_window: DEFAULT_AVERAGING_WINDOW,
            events_window: DEFAULT_EVENTS_WINDOW,
            velocity_stroke: StrokeStyle::solid(css::WHITE, 2.0),
            acceleration_stroke: StrokeStyle::solid(ACCELERATION_RED, 8.0),
            acceleration_gain: 8.0,
            radius: 10.0,
            fill: css::WHITE,
        }
    }
}

impl ParticleConfig {
    /// Sets the speed limit.
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Sets the averaging window.
    pub fn with_averaging_window(mut self, averaging_window: usize) -> Self {
        self.averaging_window = averaging_window;
        self
    }

    /// Sets the event window.
    pub fn with_events_window(mut self, events_window: usize) -> Self {
        self.events_window = events_window;
        self
    }
}

/// Configuration of the whole plot set.
#[derive(Clone, Debug, PartialEq)]
pub struct OrchestratorConfig {
    /// Canvas id of the particle plot.
    pub particle_canvas: String,
    /// Particle plot settings.
    pub particle: ParticleConfig,
    /// Strip charts, in registry order.
    pub strips: Vec<StripChartConfig>,
    /// Quiet period before a resize burst rebuilds the plots.
    pub quiet_ms: f64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            particle_canvas: String::from(PARTICLE),
            particle: ParticleConfig::default(),
            strips: default_strip_charts(),
            quiet_ms: DEFAULT_QUIET_MS,
        }
    }
}

impl OrchestratorConfig {
    /// Sets the particle plot settings.
    pub fn with_particle(mut self, particle: ParticleConfig) -> Self {
        self.particle = particle;
        self
    }

    /// Replaces the strip charts.
    pub fn with_strips(mut self, strips: Vec<StripChartConfig>) -> Self {
        self.strips = strips;
        self
    }

    /// Sets the resize quiet period.
    pub fn with_quiet_ms(mut self, quiet_ms: f64) -> Self {
        self.quiet_ms = quiet_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use peniko::Brush;

    use super::*;

    #[test]
    fn stroke_repeats_last_colour() {
        let cfg = StripChartConfig::new("x", 1.0, 0.5).with_colors([css::RED, css::BLUE]);
        assert_eq!(cfg.stroke_for(0).brush, Brush::from(css::RED));
        assert_eq!(cfg.stroke_for(1).brush, Brush::from(css::BLUE));
        assert_eq!(cfg.stroke_for(5).brush, Brush::from(css::BLUE));
        assert_eq!(cfg.stroke_for(0).stroke_width, 1.5);
    }

    #[test]
    fn origin_is_clamped_to_unit_range() {
        assert_eq!(StripChartConfig::new("x", 1.0, 1.7).origin, 1.0);
        assert_eq!(StripChartConfig::new("x", 1.0, -0.2).origin, 0.0);
    }

    #[test]
    fn stock_layout_has_five_distinct_keys() {
        let strips = default_strip_charts();
        let keys: Vec<&str> = strips.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            keys,
            [AXIS_POSITION, AXIS_VELOCITY, AXIS_ACCELERATION, ABS_VELOCITY, ABS_ACCELERATION]
        );
    }
}
