// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip-chart sample series.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Samples for one strip chart: one or two channels, newest sample first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    channels: SmallVec<[Vec<f64>; 2]>,
}

impl Series {
    /// Creates a series with no channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-channel series.
    pub fn single(values: Vec<f64>) -> Self {
        let mut channels = SmallVec::new();
        channels.push(values);
        Self { channels }
    }

    /// Creates a two-channel series.
    pub fn pair(first: Vec<f64>, second: Vec<f64>) -> Self {
        let mut channels = SmallVec::new();
        channels.push(first);
        channels.push(second);
        Self { channels }
    }

    /// The channels in draw order.
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if no channel holds a sample.
    pub fn is_empty(&self) -> bool {
        self.channels.iter().all(Vec::is_empty)
    }
}
