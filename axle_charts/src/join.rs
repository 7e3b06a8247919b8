// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning one axis relative to a perpendicular axis.

use crate::{AxisPosition, ChartAxis, ChartError, ChartResult};

/// Where a dependent axis crosses its reference axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JoinMode {
    /// At the reference axis's origin (the bottom of a vertical axis, the left end of a
    /// horizontal one).
    Start,
    /// At the reference axis's far end (top or right).
    End,
    /// At the reference axis's drawing-plane coordinate of a data value.
    ///
    /// The reference axis must be configured. For a category axis the value is a
    /// fractional bucket index.
    FixedValue(f64),
    /// At a literal drawing-plane coordinate.
    FixedPoints(f64),
}

impl JoinMode {
    /// Builds a fixed mode from a data value or a literal coordinate.
    ///
    /// Exactly one of `value` and `points` must be given.
    pub fn fixed(value: Option<f64>, points: Option<f64>) -> ChartResult<Self> {
        match (value, points) {
            (Some(v), None) => Ok(Self::FixedValue(v)),
            (None, Some(p)) => Ok(Self::FixedPoints(p)),
            _ => Err(ChartError::JoinReference),
        }
    }
}

/// Positions `axis` so that it crosses `other` as described by `mode`.
///
/// The dependent axis keeps its length. Its start along its own direction is copied from
/// the reference axis's origin, and its crossing coordinate comes from `mode`. The axes
/// must run in different directions; this is checked before anything else.
pub fn join(axis: &mut dyn ChartAxis, other: &dyn ChartAxis, mode: JoinMode) -> ChartResult<()> {
    let direction = axis.direction();
    let reference = other.direction();
    if direction == reference {
        return Err(ChartError::FlavourMismatch {
            axis: direction,
            other: reference,
        });
    }

    let target = other.position();
    let cross = match mode {
        JoinMode::Start => target.start(reference),
        JoinMode::End => target.end(reference),
        JoinMode::FixedValue(v) => other.coordinate(v)?,
        JoinMode::FixedPoints(p) => p,
    };
    let start = direction.primary(target.origin);
    let length = axis.position().length;
    axis.reposition(AxisPosition::new(direction.point(start, cross), length));
    tracing::trace!(?direction, ?mode, start, cross, "axis joined");
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Point;

    use super::*;
    use crate::{
        CategoryAxis, CategoryAxisSpec, Dataset, Direction, ValueAxis, ValueAxisSpec,
    };

    fn y_value_axis() -> ValueAxis {
        let data = Dataset::single(vec![13.0, 20.0]);
        let spec = ValueAxisSpec::default().with_min(-10.0).with_max(30.0);
        let mut axis = ValueAxis::new(Direction::Y, spec);
        axis.set_position((40.0, 20.0), 200.0);
        axis.configure(&data).unwrap();
        axis
    }

    #[test]
    fn fixed_points_sets_the_crossing_literally() {
        let y = y_value_axis();
        let mut x = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
        x.set_position((0.0, 0.0), 150.0);
        x.join_to(&y, JoinMode::FixedPoints(100.0)).unwrap();
        let pos = x.position();
        assert_eq!(pos.origin, Point::new(40.0, 100.0));
        assert_eq!(pos.length, 150.0);
    }

    #[test]
    fn start_end_and_value_modes() {
        let y = y_value_axis();
        let mut x = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());

        x.join_to(&y, JoinMode::Start).unwrap();
        assert_eq!(x.position().origin, Point::new(40.0, 20.0));

        x.join_to(&y, JoinMode::End).unwrap();
        assert_eq!(x.position().origin, Point::new(40.0, 220.0));

        x.join_to(&y, JoinMode::FixedValue(0.0)).unwrap();
        assert_eq!(x.position().origin, Point::new(40.0, 70.0));
    }

    #[test]
    fn value_axis_joins_category_buckets() {
        let data = Dataset::single(vec![1.0, 2.0, 3.0, 4.0]);
        let mut cat = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
        cat.set_position((10.0, 10.0), 200.0);
        cat.configure(&data).unwrap();

        let mut y = ValueAxis::new(Direction::Y, ValueAxisSpec::default());
        y.set_position((0.0, 0.0), 100.0);
        y.join_to(&cat, JoinMode::FixedValue(2.0)).unwrap();
        assert_eq!(y.position().origin, Point::new(110.0, 10.0));
        assert_eq!(y.position().length, 100.0);
    }

    #[test]
    fn fixed_value_needs_a_configured_reference() {
        let y = ValueAxis::new(Direction::Y, ValueAxisSpec::default());
        let mut x = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
        assert_eq!(
            x.join_to(&y, JoinMode::FixedValue(0.0)).unwrap_err(),
            ChartError::NotConfigured
        );
    }

    #[test]
    fn same_direction_joins_fail_in_every_mode() {
        let other = y_value_axis();
        for mode in [
            JoinMode::Start,
            JoinMode::End,
            JoinMode::FixedValue(0.0),
            JoinMode::FixedPoints(10.0),
        ] {
            let mut axis = CategoryAxis::new(Direction::Y, CategoryAxisSpec::default());
            let before = axis.position();
            assert_eq!(
                axis.join_to(&other, mode).unwrap_err(),
                ChartError::FlavourMismatch {
                    axis: Direction::Y,
                    other: Direction::Y
                },
                "{mode:?}"
            );
            assert_eq!(axis.position(), before, "failed join must not move the axis");
        }
    }

    #[test]
    fn fixed_mode_requires_exactly_one_reference() {
        assert_eq!(
            JoinMode::fixed(Some(3.0), None),
            Ok(JoinMode::FixedValue(3.0))
        );
        assert_eq!(
            JoinMode::fixed(None, Some(3.0)),
            Ok(JoinMode::FixedPoints(3.0))
        );
        assert_eq!(
            JoinMode::fixed(Some(1.0), Some(2.0)),
            Err(ChartError::JoinReference)
        );
        assert_eq!(JoinMode::fixed(None, None), Err(ChartError::JoinReference));
    }
}
