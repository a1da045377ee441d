// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plots for the Larmor charged-particle demo.
//!
//! This crate sits between `larmor_core` and a host:
//! - **[`Surface`]** and **[`DrawContext`]** are the only drawing seam. The web
//!   crate implements them over a 2D canvas; [`RecordingSurface`] records calls
//!   for tests and SVG dumps.
//! - **[`ParticlePlot`]** steps the particle from the pointer and publishes the
//!   derived [`Series`] to the **[`StripChart`]**s in a [`PlotRegistry`].
//! - **[`PlotOrchestrator`]** owns the whole set: frame fan-out, global
//!   play/pause/step, and debounced rebuilds on resize or parameter change.
//!
//! Nothing here reads a clock or touches the DOM; hosts pass timestamps in and
//! mirror [`PlotOrchestrator::canvases_visible`] onto their loaders.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod config;
mod controls;
#[cfg(not(feature = "std"))]
mod float;
mod orchestrator;
#[cfg(test)]
mod orchestrator_tests;
mod particle_plot;
mod recording;
mod registry;
mod series;
mod strip_chart;
mod surface;

pub use config::{
    ABS_ACCELERATION, ABS_VELOCITY, ACCELERATION_RED, AXIS_ACCELERATION, AXIS_POSITION,
    AXIS_VELOCITY, OrchestratorConfig, PARTICLE, ParticleConfig, RETARDATION_FRAMES,
    StripChartConfig, default_strip_charts,
};
pub use controls::{Command, command_for_keydown, command_for_keyup};
pub use orchestrator::PlotOrchestrator;
pub use particle_plot::ParticlePlot;
pub use recording::{DrawOp, RecordingContext, RecordingSurface};
pub use registry::PlotRegistry;
pub use series::Series;
pub use strip_chart::{StripChart, channel_path};
pub use surface::{BACKGROUND, DrawContext, DrawError, StrokeStyle, Surface};
