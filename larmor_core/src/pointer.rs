// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer/touch state shared between input handlers and the physics step.

use kurbo::Point;

/// Latest pointer position (device pixels) and whether it is pressed.
///
/// Input handlers write this with last-write-wins semantics; the physics step
/// reads it once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    /// Pointer position in canvas pixels.
    pub position: Point,
    /// `true` while the primary button is down or a touch is active.
    pub held: bool,
}

impl Pointer {
    /// Records a new pointer position.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Marks the pointer as pressed.
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Marks the pointer as released.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Presses at `position`, as a touch start does.
    pub fn touch_at(&mut self, position: Point) {
        self.held = true;
        self.position = position;
    }
}
