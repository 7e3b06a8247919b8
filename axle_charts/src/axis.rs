// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry shared by category and value axes.
//!
//! An axis runs along its *primary* direction (x for a horizontal axis, y for a vertical
//! one) starting at its origin. Ticks and label offsets extend along the *secondary*
//! direction. Keeping every computation in primary/secondary terms lets one code path
//! serve both orientations.

use hashbrown::HashMap;
use kurbo::{Line, Point};

use axle_core::{BoxAnchor, Group, LabelStyle, LineShape, StrokeStyle};

use crate::{ChartResult, Dataset, JoinMode};

/// The direction an axis runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal axis; advances x.
    X,
    /// Vertical axis; advances y.
    Y,
}

impl Direction {
    /// The perpendicular direction.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `p` along this direction.
    pub fn primary(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// The coordinate of `p` across this direction.
    pub fn secondary(self, p: Point) -> f64 {
        self.other().primary(p)
    }

    /// Builds a point from coordinates along and across this direction.
    pub fn point(self, primary: f64, secondary: f64) -> Point {
        match self {
            Self::X => Point::new(primary, secondary),
            Self::Y => Point::new(secondary, primary),
        }
    }
}

/// Where an axis sits: its origin and its extent along the primary direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPosition {
    /// Start of the axis line.
    pub origin: Point,
    /// Length along the primary direction.
    pub length: f64,
}

impl Default for AxisPosition {
    /// Placeholder geometry so a freshly created axis can be previewed on its own.
    fn default() -> Self {
        Self {
            origin: Point::new(50.0, 50.0),
            length: 100.0,
        }
    }
}

impl AxisPosition {
    /// Creates a position.
    pub fn new(origin: impl Into<Point>, length: f64) -> Self {
        Self {
            origin: origin.into(),
            length,
        }
    }

    /// Primary coordinate of the axis start.
    pub fn start(&self, direction: Direction) -> f64 {
        direction.primary(self.origin)
    }

    /// Primary coordinate of the axis end.
    pub fn end(&self, direction: Direction) -> f64 {
        self.start(direction) + self.length
    }

    /// Secondary coordinate shared by every point of the axis line.
    pub fn cross(&self, direction: Direction) -> f64 {
        direction.secondary(self.origin)
    }

    /// The axis line from origin to end.
    pub fn line(&self, direction: Direction) -> Line {
        let cross = self.cross(direction);
        Line::new(
            direction.point(self.start(direction), cross),
            direction.point(self.end(direction), cross),
        )
    }
}

/// How far tick marks reach to either side of the axis line.
///
/// `inward` extends toward increasing secondary coordinates (up from a horizontal axis,
/// right of a vertical one); `outward` extends the other way. Tick marks are only drawn
/// when the two extents differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickExtents {
    /// Extent toward increasing secondary coordinates.
    pub inward: f64,
    /// Extent toward decreasing secondary coordinates.
    pub outward: f64,
}

impl Default for TickExtents {
    fn default() -> Self {
        Self {
            inward: 0.0,
            outward: 5.0,
        }
    }
}

impl TickExtents {
    /// Creates tick extents.
    pub fn new(inward: f64, outward: f64) -> Self {
        Self { inward, outward }
    }

    /// Extents that suppress tick marks.
    pub fn none() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns `true` if tick marks should be drawn.
    pub fn is_visible(&self) -> bool {
        self.inward != self.outward
    }

    /// The tick mark at `primary` on an axis whose line sits at `cross`.
    pub fn line(&self, direction: Direction, primary: f64, cross: f64) -> Line {
        Line::new(
            direction.point(primary, cross - self.outward),
            direction.point(primary, cross + self.inward),
        )
    }
}

/// Stroke styling for the axis line and its ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis line.
    pub rule: StrokeStyle,
    /// Style for tick marks.
    pub tick: StrokeStyle,
}

impl AxisStyle {
    /// Uses `stroke` for both the axis line and the ticks.
    pub fn uniform(stroke: StrokeStyle) -> Self {
        Self {
            rule: stroke.clone(),
            tick: stroke,
        }
    }
}

/// Tick label styles: a shared default plus per-index overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyles {
    /// Style used for every label without an override.
    pub default: LabelStyle,
    overrides: HashMap<usize, LabelStyle>,
}

impl LabelStyles {
    /// Uses `default` for every label.
    pub fn new(default: LabelStyle) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Default tick label styling for an axis running in `direction`.
    ///
    /// Labels hang below a horizontal axis (anchor `N`, nudged down by 5) and sit left of
    /// a vertical one (anchor `E`, nudged left by 5).
    pub fn for_direction(direction: Direction) -> Self {
        let style = match direction {
            Direction::X => LabelStyle::default()
                .with_box_anchor(BoxAnchor::N)
                .with_offset(0.0, -5.0),
            Direction::Y => LabelStyle::default()
                .with_box_anchor(BoxAnchor::E)
                .with_offset(-5.0, 0.0),
        };
        Self::new(style)
    }

    /// Overrides the style of label `index`.
    pub fn with_override(mut self, index: usize, style: LabelStyle) -> Self {
        self.set(index, style);
        self
    }

    /// Overrides the style of label `index` in place.
    pub fn set(&mut self, index: usize, style: LabelStyle) {
        self.overrides.insert(index, style);
    }

    /// Removes every override.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// The effective style of label `index`.
    pub fn get(&self, index: usize) -> &LabelStyle {
        self.overrides.get(&index).unwrap_or(&self.default)
    }
}

/// Capabilities shared by every axis variant.
///
/// This is the seam the axis connector and the bar layout work against: they only need an
/// axis's direction, its position, and the drawing-plane coordinate of a data value.
pub trait ChartAxis {
    /// The direction the axis runs in.
    fn direction(&self) -> Direction;

    /// Current position.
    fn position(&self) -> AxisPosition;

    /// Replaces the position. Geometry is stored as given, without validation.
    fn reposition(&mut self, position: AxisPosition);

    /// Derives the axis's data-dependent state from `data`.
    fn configure(&mut self, data: &Dataset) -> ChartResult<()>;

    /// Primary drawing-plane coordinate of a data-space value.
    ///
    /// For value axes this is the linear scale; for category axes `value` is a fractional
    /// bucket index.
    fn coordinate(&self, value: f64) -> ChartResult<f64>;

    /// Renders the axis line, ticks and tick labels.
    fn draw(&self) -> ChartResult<Group>;

    /// Positions this axis relative to `other`; see [`crate::join`].
    fn join_to(&mut self, other: &dyn ChartAxis, mode: JoinMode) -> ChartResult<()>
    where
        Self: Sized,
    {
        crate::join(self, other, mode)
    }
}

/// Renders the axis line of an axis with `position` running in `direction`.
pub(crate) fn axis_line(
    direction: Direction,
    position: &AxisPosition,
    style: &AxisStyle,
) -> Group {
    let mut g = Group::new();
    g.push(LineShape::new(position.line(direction)).with_stroke(style.rule.clone()));
    g
}

/// Renders one tick mark per primary coordinate in `at`, unless ticks are suppressed.
pub(crate) fn tick_marks(
    direction: Direction,
    position: &AxisPosition,
    extents: &TickExtents,
    style: &AxisStyle,
    at: impl IntoIterator<Item = f64>,
) -> Group {
    let mut g = Group::new();
    if !extents.is_visible() {
        return g;
    }
    let cross = position.cross(direction);
    for primary in at {
        let line = extents.line(direction, primary, cross);
        g.push(LineShape::new(line).with_stroke(style.tick.clone()));
    }
    g
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn direction_maps_primary_and_secondary() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Direction::X.primary(p), 3.0);
        assert_eq!(Direction::X.secondary(p), 7.0);
        assert_eq!(Direction::Y.primary(p), 7.0);
        assert_eq!(Direction::Y.point(7.0, 3.0), p);
        assert_eq!(Direction::X.other(), Direction::Y);
    }

    #[test]
    fn axis_line_runs_along_primary_direction() {
        let pos = AxisPosition::new((10.0, 20.0), 100.0);
        assert_eq!(
            pos.line(Direction::X),
            Line::new((10.0, 20.0), (110.0, 20.0))
        );
        assert_eq!(
            pos.line(Direction::Y),
            Line::new((10.0, 20.0), (10.0, 120.0))
        );
    }

    #[test]
    fn ticks_extend_outward_below_and_left() {
        let ext = TickExtents::default();
        assert_eq!(
            ext.line(Direction::X, 30.0, 20.0),
            Line::new((30.0, 15.0), (30.0, 20.0))
        );
        assert_eq!(
            ext.line(Direction::Y, 30.0, 10.0),
            Line::new((5.0, 30.0), (10.0, 30.0))
        );
    }

    #[test]
    fn equal_extents_suppress_ticks() {
        let pos = AxisPosition::default();
        let style = AxisStyle::default();
        let equal = TickExtents::new(3.0, 3.0);
        let g = tick_marks(Direction::X, &pos, &equal, &style, [1.0, 2.0]);
        assert!(g.is_empty());
        let default = TickExtents::default();
        let g = tick_marks(Direction::X, &pos, &default, &style, [1.0, 2.0]);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn label_overrides_fall_back_to_default() {
        let styles = LabelStyles::for_direction(Direction::Y)
            .with_override(2, LabelStyle::default().with_angle(30.0));
        assert_eq!(styles.get(0).box_anchor, BoxAnchor::E);
        assert_eq!(styles.get(0).dx, -5.0);
        assert_eq!(styles.get(2).angle, 30.0);
    }
}
