// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of recorded draw calls.

use std::fmt::Write as _;

use kurbo::Rect;
use larmor_plots::{DrawOp, RecordingSurface, Surface};
use peniko::Brush;

/// Renders the last full frame recorded on `surface`.
///
/// Everything before the most recent background clear is overdrawn and
/// skipped.
pub(crate) fn frame_to_svg(surface: &RecordingSurface) -> String {
    ops_to_svg(surface.bounds(), surface.last_frame())
}

pub(crate) fn ops_to_svg(view_box: Rect, ops: &[DrawOp]) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    );

    for op in ops {
        match op {
            DrawOp::FillRect { rect, brush } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                );
                write_paint_attr(&mut out, "fill", brush);
                out.push_str("/>\n");
            }
            DrawOp::StrokePath { path, stroke } => {
                let _ = write!(out, r#"<path d="{}" fill="none""#, path.to_svg());
                write_paint_attr(&mut out, "stroke", &stroke.brush);
                let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
                out.push_str("/>\n");
            }
            DrawOp::FillCircle { circle, brush } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    circle.center.x, circle.center.y, circle.radius
                );
                write_paint_attr(&mut out, "fill", brush);
                out.push_str("/>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}
