// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-controlled point-mass kinematics.
//!
//! The particle is steered by the pointer while it is held and coasts to a stop
//! when released. Acceleration is a finite difference across a window of past
//! velocities rather than an instantaneous derivative, which gives the
//! radiation strip charts a smoother signal.

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::pointer::Pointer;
use crate::ring::HistoryRing;

/// Fraction of the pointer offset adopted as velocity while dragging.
pub const DRAG_GAIN: f64 = 0.5;
/// Per-frame velocity decay after release.
pub const RELEASE_DECAY: f64 = 0.95;
/// Per-axis speed below which a released particle snaps to rest.
pub const REST_THRESHOLD: f64 = 0.5;
/// Fraction of the configured max speed the particle may reach.
pub const SPEED_HEADROOM: f64 = 0.99;
/// Position advance per frame, as a fraction of velocity.
pub const POSITION_SUBSTEP: f64 = 0.05;
/// Default number of velocity samples in the acceleration estimate.
pub const DEFAULT_AVERAGING_WINDOW: usize = 20;
/// Default number of retained particle events.
pub const DEFAULT_EVENTS_WINDOW: usize = 400;

/// A snapshot of the particle after one physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleEvent {
    /// Position in canvas pixels.
    pub position: Point,
    /// Velocity in pixels per frame (before the position sub-step).
    pub velocity: Vec2,
    /// Finite-difference acceleration.
    pub acceleration: Vec2,
    /// `|velocity|`.
    pub speed: f64,
    /// `|acceleration|`.
    pub acceleration_magnitude: f64,
    /// `atan2(acceleration.x, acceleration.y)`.
    pub angle: f64,
}

impl ParticleEvent {
    /// An event for a particle resting at `position`.
    pub fn at_rest(position: Point) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            speed: 0.0,
            acceleration_magnitude: 0.0,
            angle: 0.0,
        }
    }
}

/// Physics state of the single charged particle.
#[derive(Clone, Debug)]
pub struct Particle {
    position: Point,
    velocity: Vec2,
    acceleration: Vec2,
    velocities: HistoryRing<Vec2>,
    events: HistoryRing<ParticleEvent>,
}

impl Particle {
    /// Creates a particle at the origin with neutral histories.
    ///
    /// `averaging_window` is raised to at least two so the finite difference
    /// always spans one interval.
    pub fn new(averaging_window: usize, events_window: usize) -> Self {
        let averaging_window = averaging_window.max(2);
        Self {
            position: Point::ORIGIN,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            velocities: HistoryRing::filled(averaging_window, Vec2::ZERO),
            events: HistoryRing::filled(events_window, ParticleEvent::at_rest(Point::ORIGIN)),
        }
    }

    /// Puts the particle at rest at `center` and resets both histories.
    pub fn reset(&mut self, center: Point) {
        self.position = center;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.velocities.refill(Vec2::ZERO);
        self.events.refill(ParticleEvent::at_rest(center));
        log::debug!("particle reset at ({}, {})", center.x, center.y);
    }

    /// Advances the particle by one frame and records the resulting event.
    pub fn step(&mut self, pointer: &Pointer, max_speed: f64) -> ParticleEvent {
        let velocity = if pointer.held {
            (pointer.position - self.position) * DRAG_GAIN
        } else {
            Vec2::new(coast(self.velocity.x), coast(self.velocity.y))
        };
        self.velocity = limit_speed(velocity, SPEED_HEADROOM * max_speed);

        self.velocities.push_front(self.velocity);
        let newest = self.velocities.newest().copied().unwrap_or(Vec2::ZERO);
        let oldest = self.velocities.oldest().copied().unwrap_or(Vec2::ZERO);
        let intervals = (self.velocities.capacity() - 1) as f64;
        self.acceleration = (newest - oldest) / intervals;

        self.position += self.velocity * POSITION_SUBSTEP;

        let event = ParticleEvent {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            speed: magnitude(self.velocity),
            acceleration_magnitude: magnitude(self.acceleration),
            angle: self.acceleration.x.atan2(self.acceleration.y),
        };
        self.events.push_front(event);
        event
    }

    /// Current position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current acceleration estimate.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Past velocities, newest first.
    pub fn velocities(&self) -> &HistoryRing<Vec2> {
        &self.velocities
    }

    /// Past events, newest first.
    pub fn events(&self) -> &HistoryRing<ParticleEvent> {
        &self.events
    }
}

fn coast(v: f64) -> f64 {
    if v > REST_THRESHOLD || v < -REST_THRESHOLD {
        RELEASE_DECAY * v
    } else {
        0.0
    }
}

/// Rescales `v` to `max` if it is longer, keeping its direction.
pub fn limit_speed(v: Vec2, max: f64) -> Vec2 {
    let squared = v.x * v.x + v.y * v.y;
    if squared > max * max {
        v * (max / squared.sqrt())
    } else {
        v
    }
}

/// Euclidean length of `v`.
pub fn magnitude(v: Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}
