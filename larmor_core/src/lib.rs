// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinematics core for Larmor.
//!
//! This crate holds the state that drives the charged-particle demo, free of any
//! drawing or host concerns:
//! - **[`Particle`]** integrates a pointer-steered point mass and keeps bounded
//!   velocity and event histories.
//! - **[`HistoryRing`]** is the fixed-capacity, newest-first buffer behind them.
//! - **[`Playback`]** and **[`Debouncer`]** are the small state machines used to
//!   pause plots and to coalesce resize bursts.
//!
//! Time is never read from a clock here; callers pass frame ticks and
//! millisecond timestamps in.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod debounce;
#[cfg(not(feature = "std"))]
mod float;
mod input;
mod kinematics;
mod playback;
mod pointer;
mod ring;

pub use debounce::{DEFAULT_QUIET_MS, Debouncer, Ticket};
pub use input::{DEFAULT_MAX_SPEED, MIN_MAX_SPEED, constrain, parse_leading_f64, resolve_max_speed};
pub use kinematics::{
    DEFAULT_AVERAGING_WINDOW, DEFAULT_EVENTS_WINDOW, DRAG_GAIN, POSITION_SUBSTEP, Particle,
    ParticleEvent, RELEASE_DECAY, REST_THRESHOLD, SPEED_HEADROOM, limit_speed, magnitude,
};
pub use playback::Playback;
pub use pointer::Pointer;
pub use ring::HistoryRing;
