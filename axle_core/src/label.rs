// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label primitives.
//!
//! Chart components decide *where* a label belongs (its origin) and *what* it says.
//! How the text box sits around that origin is described by a [`BoxAnchor`], which
//! the label collaborator resolves after measuring the text.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Vec2};
use peniko::Brush;
use peniko::color::palette::css;

/// Which point of a label's bounding box is pinned to the label's anchor point.
///
/// Compass names follow the drawing plane: `N` is the top edge (largest y).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxAnchor {
    /// Top edge, horizontally centred.
    N,
    /// Top-right corner.
    NE,
    /// Right edge, vertically centred.
    E,
    /// Bottom-right corner.
    SE,
    /// Bottom edge, horizontally centred.
    S,
    /// Bottom-left corner.
    SW,
    /// Left edge, vertically centred.
    W,
    /// Top-left corner.
    NW,
    /// Box centre.
    #[default]
    C,
}

impl BoxAnchor {
    /// Fractions of the box width and height between the box's lower-left corner
    /// and the anchored point.
    pub fn fractions(self) -> (f64, f64) {
        match self {
            Self::N => (0.5, 1.0),
            Self::NE => (1.0, 1.0),
            Self::E => (1.0, 0.5),
            Self::SE => (1.0, 0.0),
            Self::S => (0.5, 0.0),
            Self::SW => (0.0, 0.0),
            Self::W => (0.0, 0.5),
            Self::NW => (0.0, 1.0),
            Self::C => (0.5, 0.5),
        }
    }

    /// Returns the lower-left corner of a `width` x `height` box anchored at `at`.
    pub fn box_origin(self, at: Point, width: f64, height: f64) -> Point {
        let (fx, fy) = self.fractions();
        Point::new(at.x - fx * width, at.y - fy * height)
    }
}

/// Visual attributes of a label, independent of its position and text.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Box anchor hint.
    pub box_anchor: BoxAnchor,
    /// Horizontal nudge applied to the origin.
    pub dx: f64,
    /// Vertical nudge applied to the origin.
    pub dy: f64,
    /// Rotation angle in degrees (counter-clockwise in the y-up plane).
    pub angle: f64,
    /// Font size in drawing-plane units.
    pub font_size: f64,
    /// Text fill.
    pub fill: Brush,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            box_anchor: BoxAnchor::C,
            dx: 0.0,
            dy: 0.0,
            angle: 0.0,
            font_size: 10.0,
            fill: Brush::Solid(css::BLACK),
        }
    }
}

impl LabelStyle {
    /// Sets the box anchor.
    pub fn with_box_anchor(mut self, box_anchor: BoxAnchor) -> Self {
        self.box_anchor = box_anchor;
        self
    }

    /// Sets the origin nudge.
    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// A text label placed in the drawing plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Origin chosen by the chart component (before the style's nudge).
    pub origin: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Visual attributes.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a label with the default style.
    pub fn new(origin: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
            style: LabelStyle::default(),
        }
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    /// The origin after applying the style's `dx`/`dy` nudge.
    ///
    /// This is the point the [`BoxAnchor`] pins the text box to.
    pub fn anchor_point(&self) -> Point {
        self.origin + Vec2::new(self.style.dx, self.style.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_anchor_hangs_box_below_point() {
        let p = BoxAnchor::N.box_origin(Point::new(100.0, 50.0), 20.0, 10.0);
        assert_eq!(p, Point::new(90.0, 40.0));
    }

    #[test]
    fn east_anchor_puts_box_left_of_point() {
        let p = BoxAnchor::E.box_origin(Point::new(100.0, 50.0), 20.0, 10.0);
        assert_eq!(p, Point::new(80.0, 45.0));
    }

    #[test]
    fn anchor_point_applies_nudge() {
        let label = Label::new((10.0, 20.0), "x")
            .with_style(LabelStyle::default().with_offset(0.0, -5.0));
        assert_eq!(label.anchor_point(), Point::new(10.0, 15.0));
    }
}
