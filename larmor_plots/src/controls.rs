// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard shortcuts.
//!
//! Key handling is split from the DOM so the mapping can be tested without a
//! browser; the web crate only forwards `KeyboardEvent::code` and modifiers.

/// A user command bound to a key or button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Pause every plot if running, else resume every plot.
    TogglePlayback,
    /// Advance every paused plot by one frame.
    NextFrame,
    /// Validate the parameter inputs and rebuild the plots.
    ApplyParameters,
}

/// Command bound to a key press, by physical key code.
///
/// `P` toggles playback and `N` advances one frame, unless Ctrl is held.
pub fn command_for_keydown(code: &str, ctrl: bool) -> Option<Command> {
    if ctrl {
        return None;
    }
    match code {
        "KeyP" => Some(Command::TogglePlayback),
        "KeyN" => Some(Command::NextFrame),
        _ => None,
    }
}

/// Command bound to a key release.
///
/// Ctrl+Enter applies the parameters from anywhere; plain Enter only while a
/// parameter input has focus.
pub fn command_for_keyup(code: &str, ctrl: bool, in_input: bool) -> Option<Command> {
    let enter = matches!(code, "Enter" | "NumpadEnter");
    (enter && (ctrl || in_input)).then_some(Command::ApplyParameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_keys() {
        assert_eq!(command_for_keydown("KeyP", false), Some(Command::TogglePlayback));
        assert_eq!(command_for_keydown("KeyN", false), Some(Command::NextFrame));
        assert_eq!(command_for_keydown("KeyP", true), None, "ctrl+p is left to the browser");
        assert_eq!(command_for_keydown("KeyQ", false), None);
    }

    #[test]
    fn enter_applies_parameters() {
        assert_eq!(command_for_keyup("Enter", true, false), Some(Command::ApplyParameters));
        assert_eq!(command_for_keyup("Enter", false, true), Some(Command::ApplyParameters));
        assert_eq!(command_for_keyup("Enter", false, false), None);
        assert_eq!(command_for_keyup("KeyA", true, true), None);
    }
}
