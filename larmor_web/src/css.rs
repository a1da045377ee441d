// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint to CSS colour strings for the canvas 2D API.

use peniko::{Brush, Color};

/// Formats `color` as a CSS `rgb()`/`rgba()` string.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}

/// CSS colour of a solid brush; `None` for gradients and images.
pub fn brush_css(brush: &Brush) -> Option<String> {
    match brush {
        Brush::Solid(color) => Some(css_color(*color)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use larmor_plots::ACCELERATION_RED;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn opaque_colours_use_rgb() {
        assert_eq!(css_color(ACCELERATION_RED), "rgb(176, 26, 0)");
        assert_eq!(css_color(css::BLACK), "rgb(0, 0, 0)");
    }

    #[test]
    fn translucent_colours_use_rgba() {
        assert_eq!(css_color(Color::from_rgba8(255, 0, 0, 0)), "rgba(255, 0, 0, 0)");
    }

    #[test]
    fn solid_brushes_only() {
        assert_eq!(brush_css(&Brush::Solid(css::WHITE)).as_deref(), Some("rgb(255, 255, 255)"));
    }
}
