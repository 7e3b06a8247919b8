// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groups of drawing primitives.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Rect};
use peniko::Brush;

use crate::{Label, StrokeStyle};

/// A stroked line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LineShape {
    /// Segment geometry.
    pub line: Line,
    /// Stroke style.
    pub stroke: StrokeStyle,
}

impl LineShape {
    /// Creates a line with the default stroke.
    pub fn new(line: Line) -> Self {
        Self {
            line,
            stroke: StrokeStyle::default(),
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

/// A rectangle with optional fill and outline.
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    /// Rectangle geometry (normalized: `x0 <= x1`, `y0 <= y1`).
    pub rect: Rect,
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Outline; `None` draws no outline.
    pub stroke: Option<StrokeStyle>,
}

impl RectShape {
    /// Creates an unpainted rectangle. The rectangle is normalized.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: rect.abs(),
            fill: None,
            stroke: None,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: Option<Brush>) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: Option<StrokeStyle>) -> Self {
        self.stroke = stroke;
        self
    }
}

/// A single drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A stroked line segment.
    Line(LineShape),
    /// A filled and/or outlined rectangle.
    Rect(RectShape),
    /// A text label.
    Label(Label),
    /// A nested group.
    Group(Group),
}

impl From<LineShape> for Primitive {
    fn from(value: LineShape) -> Self {
        Self::Line(value)
    }
}

impl From<RectShape> for Primitive {
    fn from(value: RectShape) -> Self {
        Self::Rect(value)
    }
}

impl From<Label> for Primitive {
    fn from(value: Label) -> Self {
        Self::Label(value)
    }
}

impl From<Group> for Primitive {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

/// An ordered collection of primitives. Order is paint order.
///
/// Chart components always return a group, even when there is nothing to draw, so
/// callers can compose results unconditionally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Child primitives in paint order.
    pub items: Vec<Primitive>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive.
    pub fn push(&mut self, item: impl Into<Primitive>) {
        self.items.push(item.into());
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group has no direct children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visits every non-group primitive in paint order, descending into nested groups.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Primitive)) {
        for item in &self.items {
            match item {
                Primitive::Group(g) => g.walk(f),
                other => f(other),
            }
        }
    }

    /// Returns every non-group primitive in paint order.
    pub fn leaves(&self) -> Vec<&Primitive> {
        let mut out = Vec::new();
        self.walk(&mut |p| out.push(p));
        out
    }

    /// Returns every line in paint order.
    pub fn lines(&self) -> Vec<&LineShape> {
        let mut out = Vec::new();
        self.walk(&mut |p| {
            if let Primitive::Line(l) = p {
                out.push(l);
            }
        });
        out
    }

    /// Returns every rectangle in paint order.
    pub fn rects(&self) -> Vec<&RectShape> {
        let mut out = Vec::new();
        self.walk(&mut |p| {
            if let Primitive::Rect(r) = p {
                out.push(r);
            }
        });
        out
    }

    /// Returns every label in paint order.
    pub fn labels(&self) -> Vec<&Label> {
        let mut out = Vec::new();
        self.walk(&mut |p| {
            if let Primitive::Label(l) = p {
                out.push(l);
            }
        });
        out
    }

    /// Bounding box of all lines and rectangles, ignoring labels.
    ///
    /// Returns `None` for a group without geometry.
    pub fn bounds(&self) -> Option<Rect> {
        let mut out: Option<Rect> = None;
        self.walk(&mut |p| {
            let b = match p {
                Primitive::Line(l) => Rect::from_points(l.line.p0, l.line.p1),
                Primitive::Rect(r) => r.rect,
                Primitive::Label(_) | Primitive::Group(_) => return,
            };
            out = Some(match out {
                None => b,
                Some(r) => r.union(b),
            });
        });
        out
    }
}

impl Extend<Primitive> for Group {
    fn extend<T: IntoIterator<Item = Primitive>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn walk_descends_into_nested_groups() {
        let mut inner = Group::new();
        inner.push(LineShape::new(Line::new((0.0, 0.0), (10.0, 0.0))));
        inner.push(Label::new((5.0, 0.0), "a"));

        let mut outer = Group::new();
        outer.push(RectShape::new(Rect::new(0.0, 0.0, 4.0, 4.0)));
        outer.push(inner);
        outer.push(Group::new());

        assert_eq!(outer.len(), 3);
        assert_eq!(outer.leaves().len(), 3);
        assert_eq!(outer.lines().len(), 1);
        assert_eq!(outer.rects().len(), 1);
        assert_eq!(outer.labels().len(), 1);
    }

    #[test]
    fn rect_shape_is_normalized() {
        let r = RectShape::new(Rect::new(10.0, 50.0, 20.0, 30.0));
        assert_eq!(r.rect, Rect::new(10.0, 30.0, 20.0, 50.0));
    }

    #[test]
    fn bounds_ignore_labels() {
        let mut g = Group::new();
        g.push(LineShape::new(Line::new((0.0, 0.0), (10.0, 0.0))));
        g.push(Label::new(Point::new(500.0, 500.0), "far away"));
        g.push(RectShape::new(Rect::new(2.0, -3.0, 4.0, 1.0)));
        assert_eq!(g.bounds(), Some(Rect::new(0.0, -3.0, 10.0, 1.0)));
        assert_eq!(Group::new().bounds(), None);
    }
}
