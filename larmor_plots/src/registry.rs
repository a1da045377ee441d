// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered strip-chart registry.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::strip_chart::StripChart;
use crate::surface::Surface;

/// Strip charts keyed by id, iterated in insertion order.
///
/// Order only matters for bulk operations (pause/play/step all); lookups go
/// through the key index.
#[derive(Debug)]
pub struct PlotRegistry<S> {
    charts: Vec<StripChart<S>>,
    index: HashMap<String, usize>,
}

impl<S> Default for PlotRegistry<S> {
    fn default() -> Self {
        Self {
            charts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S: Surface> PlotRegistry<S> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `chart` under its id.
    ///
    /// A chart with the same id is replaced in place, keeping its position, and
    /// returned.
    pub fn insert(&mut self, chart: StripChart<S>) -> Option<StripChart<S>> {
        if let Some(&slot) = self.index.get(chart.id()) {
            return Some(core::mem::replace(&mut self.charts[slot], chart));
        }
        self.index.insert(String::from(chart.id()), self.charts.len());
        self.charts.push(chart);
        None
    }

    /// Looks up a chart by id.
    pub fn get(&self, id: &str) -> Option<&StripChart<S>> {
        self.index.get(id).map(|&slot| &self.charts[slot])
    }

    /// Looks up a chart by id, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut StripChart<S>> {
        self.index.get(id).map(|&slot| &mut self.charts[slot])
    }

    /// Returns `true` if a chart is registered under `id`.
    pub fn contains_key(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered charts.
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// Returns `true` if no charts are registered.
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Chart ids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.charts.iter().map(StripChart::id)
    }

    /// Charts in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, StripChart<S>> {
        self.charts.iter()
    }

    /// Charts in insertion order, mutably.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, StripChart<S>> {
        self.charts.iter_mut()
    }
}
