// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless run of the Larmor plots.
//!
//! Drags the particle around a circle, lets it coast, single-steps while
//! paused, then rebuilds at a lower speed limit after a resize burst. The last
//! frame of every canvas is written as SVG.

mod svg;

use std::f64::consts::TAU;
use std::path::Path;

use kurbo::{Point, Vec2};
use larmor_plots::{OrchestratorConfig, PARTICLE, PlotOrchestrator, RecordingSurface};

/// Simulated time per animation frame.
const FRAME_MS: f64 = 1000.0 / 60.0;

struct Clock {
    now_ms: f64,
}

impl Clock {
    fn tick(&mut self) -> f64 {
        self.now_ms += FRAME_MS;
        self.now_ms
    }
}

fn surface_for(id: &str) -> Result<RecordingSurface, String> {
    Ok(if id == PARTICLE {
        RecordingSurface::new(800.0, 600.0)
    } else {
        RecordingSurface::new(400.0, 100.0)
    })
}

/// Keeps only the visible frame on every surface.
fn discard_overdrawn(plots: &mut PlotOrchestrator<RecordingSurface>) {
    plots.particle_mut().surface_mut().discard_overdrawn();
    for chart in plots.strips_mut().iter_mut() {
        chart.surface_mut().discard_overdrawn();
    }
}

fn peak_acceleration(plots: &PlotOrchestrator<RecordingSurface>) -> f64 {
    plots
        .particle()
        .particle()
        .events()
        .iter()
        .map(|e| e.acceleration_magnitude)
        .fold(0.0, f64::max)
}

fn orbit(plots: &mut PlotOrchestrator<RecordingSurface>, clock: &mut Clock, center: Point, frames: u32) {
    let radius = 150.0;
    for i in 0..frames {
        let phase = TAU * f64::from(i) / 120.0;
        let at = center + Vec2::new(phase.cos(), phase.sin()) * radius;
        plots.pointer_mut().touch_at(at);
        plots.frame();
        discard_overdrawn(plots);
        clock.tick();
    }
}

fn coast(plots: &mut PlotOrchestrator<RecordingSurface>, clock: &mut Clock, frames: u32) {
    plots.pointer_mut().release();
    for _ in 0..frames {
        plots.frame();
        discard_overdrawn(plots);
        clock.tick();
    }
}

fn main() -> std::io::Result<()> {
    let mut plots = PlotOrchestrator::new(OrchestratorConfig::default(), surface_for)
        .map_err(std::io::Error::other)?;
    let mut clock = Clock { now_ms: 0.0 };
    let center = plots.particle().particle().position();

    orbit(&mut plots, &mut clock, center, 240);
    println!(
        "orbit: speed {:.1} px/frame, peak |a| {:.3}",
        plots.particle().particle().velocity().length(),
        peak_acceleration(&plots)
    );

    coast(&mut plots, &mut clock, 120);
    println!(
        "coast: speed {:.3} px/frame after {} frames",
        plots.particle().particle().velocity().length(),
        plots.particle().frames()
    );

    plots.toggle_all();
    plots.pointer_mut().touch_at(center + Vec2::new(200.0, 0.0));
    for _ in 0..3 {
        plots.step_all();
    }
    println!(
        "paused at frame {}, control shows `{}`",
        plots.particle().frames(),
        plots.play_label()
    );

    for _ in 0..5 {
        plots.on_resize(clock.tick());
    }
    let (applied, _) = plots.apply_max_speed_input("200", clock.tick());
    while !plots.poll(clock.tick()) {}
    println!(
        "rebuilt {} time(s) with max speed {applied}",
        plots.reconstructions()
    );

    orbit(&mut plots, &mut clock, center, 120);
    println!(
        "fast orbit capped at {:.1} px/frame",
        plots.particle().particle().velocity().length()
    );

    let out = Path::new("larmor_demo_out");
    std::fs::create_dir_all(out)?;
    std::fs::write(
        out.join(format!("{PARTICLE}.svg")),
        svg::frame_to_svg(plots.particle().surface()),
    )?;
    for chart in plots.strips().iter() {
        std::fs::write(
            out.join(format!("{}.svg", chart.id())),
            svg::frame_to_svg(chart.surface()),
        )?;
    }
    println!(
        "wrote {} SVG files to {}",
        plots.strips().len() + 1,
        out.display()
    );
    Ok(())
}
