// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element ids and names the page must provide.

/// `name` shared by every plot canvas.
pub const PLOT_NAME: &str = "plot";
/// `name` shared by every spinning loader.
pub const LOADER_NAME: &str = "plot-loader";
/// Play/pause button.
pub const PLAY_PAUSE: &str = "play-pause";
/// Next-frame button.
pub const NEXT_FRAME: &str = "next-frame";
/// Max-speed number input.
pub const MAX_SPEED: &str = "max-speed";
/// Element receiving pointer and touch input.
pub const PLOT_CONTAINER: &str = "plot-container";
