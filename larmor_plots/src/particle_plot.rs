// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The particle plot: the draggable charge and the source of every strip chart
//! series.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point};
use larmor_core::{HistoryRing, Particle, ParticleEvent, Playback, Pointer};
use peniko::Brush;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::{
    ABS_ACCELERATION, ABS_VELOCITY, AXIS_ACCELERATION, AXIS_POSITION, AXIS_VELOCITY,
    ParticleConfig, RETARDATION_FRAMES,
};
use crate::registry::PlotRegistry;
use crate::series::Series;
use crate::surface::{DrawContext, DrawError, Surface};

/// Interactive plot of the charged particle.
///
/// Each frame it steps the physics from the pointer, draws the particle with
/// its velocity and acceleration vectors, and publishes the derived series to
/// the strip charts.
#[derive(Debug)]
pub struct ParticlePlot<S> {
    config: ParticleConfig,
    surface: S,
    particle: Particle,
    pointer: Pointer,
    playback: Playback,
    frames: u64,
}

impl<S: Surface> ParticlePlot<S> {
    /// Creates the plot, sizes its surface and centres the particle.
    pub fn new(config: ParticleConfig, surface: S) -> Self {
        let particle = Particle::new(config.averaging_window, config.events_window);
        let max_speed = config.max_speed;
        let mut plot = Self {
            config,
            surface,
            particle,
            pointer: Pointer::default(),
            playback: Playback::Running,
            frames: 0,
        };
        plot.update(max_speed);
        plot
    }

    /// Applies `max_speed`, resizes, recentres the particle with neutral
    /// histories and resumes.
    pub fn update(&mut self, max_speed: f64) {
        self.config.max_speed = max_speed;
        self.playback.pause();
        self.surface.resize();
        self.particle.reset(self.center());
        self.playback.play();
        log::debug!(
            "particle plot updated: {}x{} px, max speed {max_speed}",
            self.surface.width(),
            self.surface.height()
        );
    }

    fn center(&self) -> Point {
        Point::new(
            (self.surface.width() / 2.0).round(),
            (self.surface.height() / 2.0).round(),
        )
    }

    /// Runs one host frame: steps, draws and publishes while running.
    ///
    /// Returns `true` if the plot wants another frame.
    pub fn frame<T: Surface>(&mut self, strips: &mut PlotRegistry<T>) -> bool {
        if !self.playback.is_running() {
            return false;
        }
        self.advance(strips);
        true
    }

    /// Advances exactly one frame while paused; does nothing while running.
    ///
    /// Returns `true` if a frame was advanced.
    pub fn step<T: Surface>(&mut self, strips: &mut PlotRegistry<T>) -> bool {
        if self.playback.is_running() {
            return false;
        }
        self.advance(strips);
        true
    }

    fn advance<T: Surface>(&mut self, strips: &mut PlotRegistry<T>) {
        self.particle.step(&self.pointer, self.config.max_speed);
        self.frames += 1;
        self.draw();
        self.publish(strips);
    }

    /// Redraws the particle, logging rather than propagating draw failures.
    pub fn draw(&mut self) {
        if let Err(err) = self.try_draw() {
            log::warn!("particle plot draw failed: {err}");
        }
    }

    fn try_draw(&mut self) -> Result<(), DrawError> {
        self.surface.clear()?;
        let position = self.particle.position();
        let velocity = self.particle.velocity();
        let acceleration = self.particle.acceleration() * self.config.acceleration_gain;
        let ctx = self.surface.context();

        let mut velocity_line = BezPath::new();
        velocity_line.move_to(position);
        velocity_line.line_to(position + velocity);
        ctx.stroke_path(&velocity_line, &self.config.velocity_stroke)?;

        let mut acceleration_line = BezPath::new();
        acceleration_line.move_to(position);
        acceleration_line.line_to(position + acceleration);
        ctx.stroke_path(&acceleration_line, &self.config.acceleration_stroke)?;

        ctx.fill_circle(
            Circle::new(position, self.config.radius),
            &Brush::Solid(self.config.fill),
        )
    }

    /// Fills the surface with the background.
    pub fn clear(&mut self) {
        if let Err(err) = self.surface.clear() {
            log::warn!("particle plot clear failed: {err}");
        }
    }

    /// Hands the derived series to their strip charts and redraws every chart.
    ///
    /// Series whose key is not registered are dropped.
    pub fn publish<T: Surface>(&self, strips: &mut PlotRegistry<T>) {
        for (key, series) in self.series() {
            match strips.get_mut(key) {
                Some(chart) => chart.set_values(series),
                None => log::trace!("no strip chart registered for `{key}`"),
            }
        }
        for chart in strips.iter_mut() {
            chart.draw();
        }
    }

    /// The five strip-chart series derived from the event history, newest
    /// sample first.
    pub fn series(&self) -> [(&'static str, Series); 5] {
        let events = self.particle.events();
        let width = self.surface.width();
        let height = self.surface.height();
        [
            (
                AXIS_POSITION,
                Series::pair(
                    channel(events, |e| normalized(e.position.y, height)),
                    channel(events, |e| normalized(e.position.x, width)),
                ),
            ),
            (
                AXIS_VELOCITY,
                Series::pair(channel(events, |e| e.velocity.y), channel(events, |e| e.velocity.x)),
            ),
            (
                AXIS_ACCELERATION,
                Series::pair(channel(events, |e| e.acceleration.y), channel(events, |e| e.acceleration.x)),
            ),
            (ABS_VELOCITY, Series::single(channel(events, |e| e.speed))),
            (
                ABS_ACCELERATION,
                Series::single(channel(events, |e| e.acceleration_magnitude)),
            ),
        ]
    }

    /// Flips between running and paused; returns `true` if now running.
    pub fn toggle(&mut self) -> bool {
        self.playback.toggle()
    }

    /// Pauses the plot.
    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Resumes the plot.
    pub fn play(&mut self) {
        self.playback.play();
    }

    /// Returns `true` while running.
    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    /// Current playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Pointer state written by input handlers.
    pub fn pointer_mut(&mut self) -> &mut Pointer {
        &mut self.pointer
    }

    /// Converts a CSS-pixel position on the page into surface pixels, using
    /// the pixel ratio the surface was last sized with.
    pub fn device_point(&self, css: Point) -> Point {
        let ratio = self.surface.pixel_ratio();
        Point::new(css.x * ratio, css.y * ratio)
    }

    /// The simulated particle.
    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    /// Number of physics steps taken.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The speed limit currently applied.
    pub fn max_speed(&self) -> f64 {
        self.config.max_speed
    }

    /// Frames of history a retarded-field view would look back over.
    pub fn retardation_frames(&self) -> usize {
        RETARDATION_FRAMES
    }

    /// The plot's configuration.
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// The backing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The backing surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn channel(events: &HistoryRing<ParticleEvent>, sample: impl Fn(&ParticleEvent) -> f64) -> Vec<f64> {
    events.iter().map(sample).collect()
}

/// Offset of `v` from the middle of `extent`, as a fraction of `extent`.
fn normalized(v: f64, extent: f64) -> f64 {
    if extent == 0.0 {
        0.0
    } else {
        (v - extent / 2.0) / extent
    }
}
