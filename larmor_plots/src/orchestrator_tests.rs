// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use larmor_core::Playback;

use crate::{
    ABS_VELOCITY, Command, OrchestratorConfig, PARTICLE, ParticleConfig, PlotOrchestrator,
    RecordingSurface, StripChartConfig, Surface,
};

fn surface_for(id: &str) -> Result<RecordingSurface, String> {
    Ok(if id == PARTICLE {
        RecordingSurface::new(640.0, 480.0)
    } else {
        RecordingSurface::new(300.0, 80.0)
    })
}

fn orchestrator() -> PlotOrchestrator<RecordingSurface> {
    PlotOrchestrator::new(OrchestratorConfig::default(), surface_for).unwrap()
}

fn redraws(o: &PlotOrchestrator<RecordingSurface>) -> Vec<usize> {
    o.strips().iter().map(|c| c.redraws()).collect()
}

#[test]
fn builds_every_canvas_in_order() {
    let mut seen = Vec::new();
    let o = PlotOrchestrator::new(OrchestratorConfig::default(), |id: &str| {
        seen.push(id.to_string());
        surface_for(id)
    })
    .unwrap();
    assert_eq!(
        seen,
        [
            "axis-position",
            "axis-velocity",
            "axis-acceleration",
            "abs-velocity",
            "abs-acceleration",
            "particle"
        ]
    );
    assert_eq!(o.strips().len(), 5);
    assert!(o.is_running());
    assert!(o.canvases_visible());
}

#[test]
fn missing_canvas_aborts_construction() {
    let result = PlotOrchestrator::new(OrchestratorConfig::default(), |id: &str| {
        if id == ABS_VELOCITY {
            Err(String::from("no canvas"))
        } else {
            surface_for(id)
        }
    });
    assert_eq!(result.err().as_deref(), Some("no canvas"));
}

#[test]
fn running_frame_steps_and_publishes() {
    let mut o = orchestrator();
    o.pointer_mut().touch_at(Point::new(420.0, 240.0));
    assert!(o.frame());
    assert_eq!(o.particle().frames(), 1);
    let speed = o.strips().get(ABS_VELOCITY).unwrap().values();
    assert_eq!(speed.channels()[0][0], 50.0);
    // Once from the particle's publish, once from the chart's own frame.
    assert_eq!(redraws(&o), [2; 5]);
}

#[test]
fn pause_then_step_advances_exactly_one_frame() {
    let mut o = orchestrator();
    o.pointer_mut().touch_at(Point::new(420.0, 240.0));
    o.frame();

    assert_eq!(o.toggle_all(), Playback::Paused);
    assert!(!o.frame(), "paused plots stop the frame loop");
    let before = *o.particle().particle().events().newest().unwrap();
    let frames = o.particle().frames();
    let drawn = redraws(&o);

    assert!(o.step_all());
    assert_eq!(o.particle().frames(), frames + 1);
    let events = o.particle().particle().events();
    assert_eq!(events.len(), 400, "the event ring stays full");
    assert_eq!(events.get(1), Some(&before), "the previous newest moved back by one");
    assert_ne!(events.newest(), Some(&before));
    let stepped: Vec<usize> = drawn.iter().map(|n| n + 1).collect();
    assert_eq!(redraws(&o), stepped, "every strip chart redraws once");

    assert!(!o.frame());
    assert_eq!(o.particle().frames(), frames + 1, "no movement without another step");
    assert_eq!(redraws(&o), stepped, "no redraws without another step");
    assert!(!o.is_running());
}

#[test]
fn step_is_ignored_while_running() {
    let mut o = orchestrator();
    assert!(!o.step_all());
    assert_eq!(o.particle().frames(), 0);
}

#[test]
fn resize_burst_rebuilds_once_after_quiet_period() {
    let mut o = orchestrator();
    for t in [0.0, 50.0, 120.0, 200.0, 280.0] {
        o.on_resize(t);
        assert!(!o.poll(t));
    }
    assert!(!o.is_running(), "plots pause while a rebuild is pending");
    assert!(!o.canvases_visible(), "canvases hide while a rebuild is pending");
    assert!(!o.poll(579.0));
    assert_eq!(o.reconstructions(), 0);

    assert!(o.poll(580.0));
    assert_eq!(o.reconstructions(), 1);
    assert!(o.canvases_visible());
    assert!(o.is_running(), "rebuilt plots resume");
    assert!(!o.poll(2000.0), "the burst fires once");
    assert_eq!(o.reconstructions(), 1);
}

#[test]
fn only_the_latest_timer_ticket_rebuilds() {
    let mut o = orchestrator();
    let first = o.on_resize(0.0);
    let second = o.on_resize(100.0);
    assert!(!o.fire(first));
    assert!(o.is_reconstruction_pending());
    assert!(o.fire(second));
    assert!(!o.fire(second));
    assert_eq!(o.reconstructions(), 1);
}

#[test]
fn resize_clears_and_rebuild_resizes_every_surface() {
    let mut o = orchestrator();
    o.frame();
    o.particle_mut().surface_mut().set_css_size(320.0, 200.0);
    o.on_resize(0.0);
    assert!(
        o.strips()
            .iter()
            .all(|c| c.surface().ops().last().is_some_and(|op| op.is_clear_of(c.surface().bounds()))),
        "strip charts are cleared immediately"
    );
    o.poll(300.0);
    assert_eq!(o.particle().particle().position(), Point::new(160.0, 100.0));
    assert!(o.strips().iter().all(|c| c.surface().resizes() == 2));
}

#[test]
fn max_speed_input_is_floored_and_applied_on_rebuild() {
    let mut o = orchestrator();
    let (applied, _) = o.apply_max_speed_input("10", 0.0);
    assert_eq!(applied, 50.0);
    assert_eq!(o.particle().max_speed(), 600.0, "applied only after the quiet period");
    o.poll(300.0);
    assert_eq!(o.particle().max_speed(), 50.0);

    o.pointer_mut().touch_at(Point::new(5000.0, 240.0));
    o.frame();
    assert!(o.particle().particle().velocity().x <= 49.5 + 1e-9);
}

#[test]
fn unparseable_max_speed_keeps_the_previous_value() {
    let mut o = orchestrator();
    o.apply_max_speed_input("250", 0.0);
    let (applied, _) = o.apply_max_speed_input("fast", 10.0);
    assert_eq!(applied, 250.0);
    assert_eq!(o.apply_max_speed_input("1200px", 20.0).0, 1200.0, "no ceiling");
}

#[test]
fn toggle_fans_out_to_every_plot() {
    let mut o = orchestrator();
    assert_eq!(o.play_label(), "pause");
    o.execute(Command::TogglePlayback, 0.0);
    assert!(!o.particle().is_running());
    assert!(o.strips().iter().all(|c| !c.is_running()));
    assert_eq!(o.play_label(), "play_arrow");

    // A single running strip counts as running, so the next toggle pauses it.
    o.strips_mut().get_mut(ABS_VELOCITY).unwrap().play();
    assert_eq!(o.toggle_all(), Playback::Paused);
    assert_eq!(o.toggle_all(), Playback::Running);
    assert!(o.strips().iter().all(|c| c.is_running()));
}

#[test]
fn next_frame_command_steps_paused_plots() {
    let mut o = orchestrator();
    o.pause_all();
    o.execute(Command::NextFrame, 0.0);
    o.execute(Command::NextFrame, 0.0);
    assert_eq!(o.particle().frames(), 2);
    o.execute(Command::ApplyParameters, 0.0);
    assert!(o.is_reconstruction_pending());
}

#[test]
fn configured_windows_and_quiet_period_are_honoured() {
    let config = OrchestratorConfig::default()
        .with_quiet_ms(50.0)
        .with_particle(
            ParticleConfig::default()
                .with_max_speed(120.0)
                .with_averaging_window(4)
                .with_events_window(32),
        )
        .with_strips(vec![
            StripChartConfig::new(ABS_VELOCITY, 0.2, 0.9).with_line_width(3.0),
        ]);
    let mut o = PlotOrchestrator::new(config, surface_for).unwrap();
    assert_eq!(o.quiet_ms(), 50.0);
    assert_eq!(o.max_speed(), 120.0);
    assert_eq!(o.strips().len(), 1);

    let particle = o.particle().particle();
    assert_eq!(particle.velocities().capacity(), 4);
    assert_eq!(particle.events().capacity(), 32);
    assert_eq!(particle.events().len(), 32, "events start filled at rest");

    o.frame();
    let chart = o.strips().get(ABS_VELOCITY).unwrap();
    assert_eq!(chart.values().channels()[0].len(), 32);
    assert_eq!(chart.config().stroke_for(0).stroke_width, 3.0);

    o.on_resize(1000.0);
    assert!(!o.poll(1049.0));
    assert!(o.poll(1050.0), "rebuilds after the configured quiet period");
}

#[test]
fn controls_wait_for_a_pending_rebuild() {
    let mut o = orchestrator();
    o.on_resize(0.0);
    assert_eq!(o.toggle_all(), Playback::Paused, "toggle cannot resume hidden plots");
    assert!(!o.is_running());
    assert!(!o.frame());
    assert!(!o.step_all(), "no stepping into a surface being resized");
    o.execute(Command::NextFrame, 10.0);
    assert_eq!(o.particle().frames(), 0);
    assert!(!o.canvases_visible());

    assert!(o.poll(300.0));
    assert!(o.is_running());
    assert_eq!(o.toggle_all(), Playback::Paused);
    assert!(o.step_all());
    assert_eq!(o.particle().frames(), 1);
}
