// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling strip chart.
//!
//! A strip chart plots its series from right (newest) to left (oldest) around a
//! horizontal zero line. It owns no data source: the particle plot replaces the
//! series every frame through [`StripChart::set_values`].

use kurbo::BezPath;
use larmor_core::Playback;

use crate::config::StripChartConfig;
use crate::series::Series;
use crate::surface::{DrawContext, DrawError, Surface};

/// A scrolling line chart of one or two channels on its own surface.
#[derive(Debug)]
pub struct StripChart<S> {
    config: StripChartConfig,
    surface: S,
    values: Series,
    playback: Playback,
    redraws: usize,
}

impl<S: Surface> StripChart<S> {
    /// Creates a running chart and sizes its surface.
    pub fn new(config: StripChartConfig, surface: S) -> Self {
        let mut chart = Self {
            config,
            surface,
            values: Series::new(),
            playback: Playback::Running,
            redraws: 0,
        };
        chart.update();
        chart
    }

    /// Resizes the surface and resumes the chart.
    pub fn update(&mut self) {
        self.surface.resize();
        self.play();
    }

    /// Replaces the plotted series. Does not draw.
    pub fn set_values(&mut self, values: Series) {
        self.values = values;
    }

    /// The current series.
    pub fn values(&self) -> &Series {
        &self.values
    }

    /// Redraws the chart, logging rather than propagating draw failures.
    pub fn draw(&mut self) {
        match self.try_draw() {
            Ok(()) => self.redraws += 1,
            Err(err) => log::warn!("strip chart `{}` draw failed: {err}", self.config.id),
        }
    }

    fn try_draw(&mut self) -> Result<(), DrawError> {
        self.surface.clear()?;
        let width = self.surface.width();
        let height = self.surface.height();
        for (channel, samples) in self.values.channels().iter().enumerate() {
            let Some(path) = channel_path(samples, width, height, self.config.origin, self.config.scale)
            else {
                continue;
            };
            let stroke = self.config.stroke_for(channel);
            self.surface.context().stroke_path(&path, &stroke)?;
        }
        Ok(())
    }

    /// Fills the surface with the background without plotting the series.
    pub fn clear(&mut self) {
        if let Err(err) = self.surface.clear() {
            log::warn!("strip chart `{}` clear failed: {err}", self.config.id);
        }
    }

    /// Runs one host frame: redraws while running.
    ///
    /// Returns `true` if the chart wants another frame.
    pub fn frame(&mut self) -> bool {
        if !self.playback.is_running() {
            return false;
        }
        self.draw();
        true
    }

    /// Flips between running and paused; returns `true` if now running.
    pub fn toggle(&mut self) -> bool {
        self.playback.toggle()
    }

    /// Pauses the chart.
    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Resumes the chart.
    pub fn play(&mut self) {
        self.playback.play();
    }

    /// Redraws exactly once while paused; does nothing while running.
    ///
    /// Returns `true` if a redraw happened.
    pub fn step(&mut self) -> bool {
        if self.playback.is_running() {
            return false;
        }
        self.draw();
        true
    }

    /// Returns `true` while running.
    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    /// Current playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Number of completed redraws.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// The chart's configuration.
    pub fn config(&self) -> &StripChartConfig {
        &self.config
    }

    /// Registry key of the chart.
    pub fn id(&self) -> &str {
        &self.config.id
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

/// Builds the polyline for one channel on a `width` × `height` surface.
///
/// The line starts just past the right edge on the zero line, then visits every
/// second sample, newest at the right edge. Returns `None` for an empty channel.
pub fn channel_path(samples: &[f64], width: f64, height: f64, origin: f64, scale: f64) -> Option<BezPath> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let zero = origin * height;
    let mut path = BezPath::new();
    path.move_to((width + 1.0, zero));
    for (i, v) in samples.iter().enumerate().step_by(2) {
        path.line_to((width - width * i as f64 / n, zero - v * scale));
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{PathEl, Point};

    use super::*;
    use crate::recording::{DrawOp, RecordingSurface};

    fn chart() -> StripChart<RecordingSurface> {
        let config = StripChartConfig::new("axis-velocity", 2.0, 0.5);
        StripChart::new(config, RecordingSurface::new(100.0, 50.0))
    }

    fn points(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => *p,
                other => panic!("unexpected element {other:?}"),
            })
            .collect()
    }

    #[test]
    fn empty_series_draws_only_background() {
        let mut c = chart();
        c.draw();
        let ops = c.surface_mut().take_ops();
        assert_eq!(ops.len(), 1, "only the clear is recorded: {ops:?}");
        assert!(ops[0].is_clear_of(c.surface().bounds()));

        c.set_values(Series::pair(Vec::new(), Vec::new()));
        c.draw();
        assert_eq!(c.surface().ops().len(), 1, "empty channels draw nothing");
    }

    #[test]
    fn polyline_scrolls_newest_to_the_right() {
        let path = channel_path(&[1.0, 9.0, 2.0, 9.0], 100.0, 50.0, 0.5, 10.0).unwrap();
        assert_eq!(
            points(&path),
            [
                Point::new(101.0, 25.0),
                Point::new(100.0, 15.0),
                Point::new(50.0, 5.0),
            ]
        );
        assert!(channel_path(&[], 100.0, 50.0, 0.5, 10.0).is_none());
    }

    #[test]
    fn each_channel_gets_its_own_stroke() {
        let mut c = chart();
        c.set_values(Series::pair(vec![1.0, 2.0], vec![3.0]));
        c.draw();
        let strokes: Vec<_> = c
            .surface()
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokePath { stroke, .. } => Some(stroke.stroke_width),
                _ => None,
            })
            .collect();
        assert_eq!(strokes, [1.5, 1.5]);
    }

    #[test]
    fn step_redraws_once_only_while_paused() {
        let mut c = chart();
        assert!(!c.step(), "stepping a running chart is a no-op");
        c.pause();
        assert!(!c.frame(), "paused charts stop rescheduling");
        assert!(c.step());
        assert_eq!(c.redraws(), 1);
        assert!(c.playback().is_paused(), "step leaves the chart paused");
        assert!(c.toggle());
        assert!(c.frame());
        assert_eq!(c.redraws(), 2);
    }

    #[test]
    fn draw_failures_are_contained() {
        let mut c = chart();
        c.surface_mut().set_detached(true);
        c.set_values(Series::single(vec![1.0, 2.0, 3.0]));
        assert!(c.frame(), "a failed draw keeps the loop alive");
        assert_eq!(c.redraws(), 0);
        c.surface_mut().set_detached(false);
        assert!(c.frame());
        assert_eq!(c.redraws(), 1);
    }

    #[test]
    fn update_resizes_and_resumes() {
        let mut c = chart();
        c.pause();
        c.surface_mut().set_css_size(40.0, 20.0);
        c.update();
        assert!(c.is_running());
        assert_eq!(c.surface().bounds(), kurbo::Rect::new(0.0, 0.0, 40.0, 20.0));
    }
}
