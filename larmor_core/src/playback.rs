// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Play/pause state shared by every plot.

/// Whether a plot's frame loop is active.
///
/// A running plot redraws on every host frame. A paused plot stops
/// rescheduling itself and only redraws on an explicit single step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Playback {
    /// Redraws every frame.
    #[default]
    Running,
    /// Redraws only on an explicit step.
    Paused,
}

impl Playback {
    /// Returns `true` while running.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns `true` while paused.
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Flips between running and paused.
    ///
    /// Returns `true` if the transition entered [`Playback::Running`], in which
    /// case the caller must restart its frame loop.
    pub fn toggle(&mut self) -> bool {
        *self = match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        };
        self.is_running()
    }

    /// Enters [`Playback::Running`].
    pub fn play(&mut self) {
        *self = Self::Running;
    }

    /// Enters [`Playback::Paused`].
    pub fn pause(&mut self) {
        *self = Self::Paused;
    }

    /// Label for a play/pause control reflecting this state.
    ///
    /// Uses Material icon ligature names: the control offers the opposite
    /// action.
    pub fn control_label(self) -> &'static str {
        match self {
            Self::Running => "pause",
            Self::Paused => "play_arrow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_and_toggles() {
        let mut p = Playback::default();
        assert!(p.is_running());
        assert!(!p.toggle(), "first toggle pauses");
        assert!(p.is_paused());
        assert!(p.toggle(), "second toggle resumes");
        assert_eq!(p, Playback::Running);
    }

    #[test]
    fn labels_offer_the_opposite_action() {
        assert_eq!(Playback::Running.control_label(), "pause");
        assert_eq!(Playback::Paused.control_label(), "play_arrow");
    }
}
