// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plot set as one unit: construction, frame fan-out, debounced
//! reconstruction and the global controls.

use larmor_core::{Debouncer, Playback, Pointer, Ticket, resolve_max_speed};

use crate::config::OrchestratorConfig;
use crate::controls::Command;
use crate::particle_plot::ParticlePlot;
use crate::registry::PlotRegistry;
use crate::strip_chart::StripChart;
use crate::surface::Surface;

/// Owns the particle plot and every strip chart.
///
/// Hosts drive it with [`frame`](Self::frame) once per animation frame and
/// forward resize, input and key events. Rebuilding after a resize or a
/// parameter change is debounced: the plots are paused and cleared at once and
/// rebuilt when the quiet period elapses, either on [`poll`](Self::poll) or when
/// the host's timer hands back the [`Ticket`] through [`fire`](Self::fire).
#[derive(Debug)]
pub struct PlotOrchestrator<S> {
    particle: ParticlePlot<S>,
    strips: PlotRegistry<S>,
    debouncer: Debouncer,
    max_speed: f64,
    canvases_visible: bool,
    reconstructions: usize,
}

impl<S: Surface> PlotOrchestrator<S> {
    /// Builds every plot, asking `make_surface` for the surface of each canvas
    /// id.
    ///
    /// Strip charts are created first, in configuration order, then the
    /// particle plot.
    pub fn new<E>(
        config: OrchestratorConfig,
        mut make_surface: impl FnMut(&str) -> Result<S, E>,
    ) -> Result<Self, E> {
        let mut strips = PlotRegistry::new();
        for strip in config.strips {
            let surface = make_surface(&strip.id)?;
            if let Some(old) = strips.insert(StripChart::new(strip, surface)) {
                log::warn!("duplicate strip chart `{}` replaced", old.id());
            }
        }
        let surface = make_surface(&config.particle_canvas)?;
        let max_speed = config.particle.max_speed;
        let particle = ParticlePlot::new(config.particle, surface);
        log::info!("built particle plot and {} strip charts", strips.len());
        Ok(Self {
            particle,
            strips,
            debouncer: Debouncer::new(config.quiet_ms),
            max_speed,
            canvases_visible: true,
            reconstructions: 0,
        })
    }

    /// Runs one host frame on every plot.
    ///
    /// Returns `true` while any plot is running, i.e. while the host should
    /// schedule another frame.
    pub fn frame(&mut self) -> bool {
        let mut running = self.particle.frame(&mut self.strips);
        for chart in self.strips.iter_mut() {
            running |= chart.frame();
        }
        running
    }

    /// Pauses and clears every plot, hides the canvases and (re)starts the
    /// quiet period.
    ///
    /// Each call supersedes the previous pending rebuild.
    pub fn request_reconstruction(&mut self, now_ms: f64) -> Ticket {
        self.pause_all();
        self.particle.clear();
        for chart in self.strips.iter_mut() {
            chart.clear();
        }
        self.canvases_visible = false;
        let ticket = self.debouncer.trigger(now_ms);
        log::trace!("reconstruction pending until {:?}", self.debouncer.deadline());
        ticket
    }

    /// Handles a window resize at `now_ms`.
    pub fn on_resize(&mut self, now_ms: f64) -> Ticket {
        self.request_reconstruction(now_ms)
    }

    /// Rebuilds the plots if the pending quiet period has elapsed by `now_ms`.
    ///
    /// Returns `true` if a rebuild ran.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if !self.debouncer.poll(now_ms) {
            return false;
        }
        self.reconstruct();
        true
    }

    /// Rebuilds the plots if `ticket` belongs to the latest request.
    ///
    /// Returns `true` if a rebuild ran.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if !self.debouncer.fire(ticket) {
            return false;
        }
        self.reconstruct();
        true
    }

    fn reconstruct(&mut self) {
        self.canvases_visible = true;
        self.particle.update(self.max_speed);
        for chart in self.strips.iter_mut() {
            chart.update();
        }
        self.reconstructions += 1;
        log::info!(
            "plots rebuilt ({}), max speed {}",
            self.reconstructions,
            self.max_speed
        );
    }

    /// Parses the max-speed input and schedules a rebuild with the result.
    ///
    /// Returns the value that will be applied, for echoing back into the input.
    pub fn apply_max_speed_input(&mut self, text: &str, now_ms: f64) -> (f64, Ticket) {
        self.max_speed = resolve_max_speed(text, self.max_speed);
        (self.max_speed, self.request_reconstruction(now_ms))
    }

    /// Pauses every plot if any is running, otherwise resumes every plot.
    ///
    /// Ignored while a rebuild is pending, since the plots stay paused and
    /// hidden until it runs. Returns the new state.
    pub fn toggle_all(&mut self) -> Playback {
        if self.is_reconstruction_pending() {
            log::debug!("toggle ignored while a rebuild is pending");
            return Playback::Paused;
        }
        if self.is_running() {
            self.pause_all();
            Playback::Paused
        } else {
            self.play_all();
            Playback::Running
        }
    }

    /// Pauses every plot.
    pub fn pause_all(&mut self) {
        self.particle.pause();
        for chart in self.strips.iter_mut() {
            chart.pause();
        }
        log::debug!("plots paused");
    }

    /// Resumes every plot.
    pub fn play_all(&mut self) {
        self.particle.play();
        for chart in self.strips.iter_mut() {
            chart.play();
        }
        log::debug!("plots resumed");
    }

    /// Advances one frame while paused.
    ///
    /// The particle steps once and its publish redraws each strip chart once.
    /// Returns `false` (and does nothing) while running or while a rebuild is
    /// pending.
    pub fn step_all(&mut self) -> bool {
        if self.is_reconstruction_pending() {
            return false;
        }
        self.particle.step(&mut self.strips)
    }

    /// Runs a bound command at `now_ms`.
    ///
    /// `ApplyParameters` needs the input text, so hosts route it through
    /// [`apply_max_speed_input`](Self::apply_max_speed_input) instead; here it
    /// only restarts the rebuild with the current parameters.
    pub fn execute(&mut self, command: Command, now_ms: f64) {
        match command {
            Command::TogglePlayback => {
                self.toggle_all();
            }
            Command::NextFrame => {
                self.step_all();
            }
            Command::ApplyParameters => {
                self.request_reconstruction(now_ms);
            }
        }
    }

    /// Label of the play/pause control for the current state.
    pub fn play_label(&self) -> &'static str {
        if self.is_running() {
            Playback::Running.control_label()
        } else {
            Playback::Paused.control_label()
        }
    }

    /// Returns `true` while any plot is running.
    pub fn is_running(&self) -> bool {
        self.particle.is_running() || self.strips.iter().any(StripChart::is_running)
    }

    /// Pointer state written by input handlers.
    pub fn pointer_mut(&mut self) -> &mut Pointer {
        self.particle.pointer_mut()
    }

    /// The max speed applied on the next rebuild.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// `false` between a rebuild request and the rebuild.
    pub fn canvases_visible(&self) -> bool {
        self.canvases_visible
    }

    /// Quiet period before a requested rebuild runs, in milliseconds.
    pub fn quiet_ms(&self) -> f64 {
        self.debouncer.quiet_ms()
    }

    /// Returns `true` while a rebuild is pending.
    pub fn is_reconstruction_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Number of completed rebuilds.
    pub fn reconstructions(&self) -> usize {
        self.reconstructions
    }

    /// The particle plot.
    pub fn particle(&self) -> &ParticlePlot<S> {
        &self.particle
    }

    /// The particle plot, mutably.
    pub fn particle_mut(&mut self) -> &mut ParticlePlot<S> {
        &mut self.particle
    }

    /// The strip charts.
    pub fn strips(&self) -> &PlotRegistry<S> {
        &self.strips
    }

    /// The strip charts, mutably.
    pub fn strips_mut(&mut self) -> &mut PlotRegistry<S> {
        &mut self.strips
    }
}
