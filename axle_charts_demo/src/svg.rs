// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `axle_charts_demo`.

use std::fmt::Write as _;

use axle_core::{Group, Label, Primitive, StrokeStyle};
use kurbo::{Point, Rect};
use peniko::Brush;

/// Renders y-up `axle_core` groups into a y-down SVG document.
#[derive(Debug)]
pub(crate) struct SvgScene {
    /// Drawing size in the y-up plane; `(0, 0)` is its lower-left corner.
    size: Rect,
    body: String,
}

impl SvgScene {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Rect::new(0.0, 0.0, width, height),
            body: String::new(),
        }
    }

    pub(crate) fn draw(&mut self, group: &Group) {
        group.walk(&mut |p| match p {
            Primitive::Line(l) => {
                let (a, b) = (self.flip(l.line.p0), self.flip(l.line.p1));
                let _ = write!(
                    self.body,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    a.x, a.y, b.x, b.y
                );
                write_stroke_attrs(&mut self.body, &l.stroke);
                self.body.push_str("/>\n");
            }
            Primitive::Rect(r) => {
                let top_left = self.flip(Point::new(r.rect.x0, r.rect.y1));
                let _ = write!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    top_left.x,
                    top_left.y,
                    r.rect.width(),
                    r.rect.height(),
                );
                match &r.fill {
                    Some(fill) => write_paint_attr(&mut self.body, "fill", fill),
                    None => self.body.push_str(r#" fill="none""#),
                }
                if let Some(stroke) = &r.stroke {
                    write_stroke_attrs(&mut self.body, stroke);
                }
                self.body.push_str("/>\n");
            }
            Primitive::Label(label) => self.draw_label(label),
            Primitive::Group(_) => {}
        });
    }

    fn draw_label(&mut self, label: &Label) {
        let style = &label.style;
        let lines: Vec<&str> = label.text.split('\n').collect();
        let (width, height) = estimate_text_size(&lines, style.font_size);
        let anchor = label.anchor_point();
        let lower_left = style.box_anchor.box_origin(anchor, width, height);

        // Text is laid out from the top-left corner of its box.
        let top_left = self.flip(Point::new(lower_left.x, lower_left.y + height));
        let pivot = self.flip(anchor);
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="Helvetica, sans-serif" dominant-baseline="text-before-edge""#,
            top_left.x, top_left.y, style.font_size
        );
        if style.angle != 0.0 {
            // Counter-clockwise in the y-up plane is clockwise once flipped.
            let _ = write!(
                self.body,
                r#" transform="rotate({} {} {})""#,
                -style.angle, pivot.x, pivot.y
            );
        }
        write_paint_attr(&mut self.body, "fill", &style.fill);
        self.body.push('>');
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { style.font_size };
            let _ = write!(
                self.body,
                r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                top_left.x,
                dy,
                escape_xml(line)
            );
        }
        self.body.push_str("</text>\n");
    }

    fn flip(&self, p: Point) -> Point {
        Point::new(p.x, self.size.y1 - p.y)
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            self.size.x0,
            self.size.y0,
            self.size.width(),
            self.size.height(),
            self.size.width(),
            self.size.height()
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Very rough heuristic: ~0.6em average glyph width, one em per line.
fn estimate_text_size(lines: &[&str], font_size: f64) -> (f64, f64) {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = 0.6 * font_size * longest as f64;
    let height = font_size * lines.len().max(1) as f64;
    (width, height)
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    write_paint_attr(out, "stroke", &stroke.brush);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
    if !stroke.is_solid() {
        let dashes: Vec<String> = stroke.dash_pattern.iter().map(f64::to_string).collect();
        let _ = write!(out, r#" stroke-dasharray="{}""#, dashes.join(" "));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
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

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
