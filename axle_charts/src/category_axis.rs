// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category axes: equal-width buckets, one per data point.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use axle_core::{Group, Label};

use crate::axis::{axis_line, tick_marks};
use crate::{
    AxisPosition, AxisStyle, ChartAxis, ChartError, ChartResult, Dataset, Direction,
    LabelStyles, TickExtents,
};

/// Configuration for a [`CategoryAxis`].
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxisSpec {
    /// Whether the axis is drawn at all.
    pub visible: bool,
    /// Tick mark extents at bucket boundaries.
    pub ticks: TickExtents,
    /// Stroke styling.
    pub style: AxisStyle,
    /// Tick label styles. `None` uses [`LabelStyles::for_direction`].
    pub labels: Option<LabelStyles>,
    /// One name per bucket. `None` draws no labels.
    pub category_names: Option<Vec<String>>,
}

impl Default for CategoryAxisSpec {
    fn default() -> Self {
        Self {
            visible: true,
            ticks: TickExtents::default(),
            style: AxisStyle::default(),
            labels: None,
            category_names: None,
        }
    }
}

impl CategoryAxisSpec {
    /// Shows or hides the axis.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the tick extents.
    pub fn with_ticks(mut self, ticks: TickExtents) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the stroke styling.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the tick label styles.
    pub fn with_labels(mut self, labels: LabelStyles) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Sets the bucket names.
    pub fn with_category_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// An ordinal axis that divides its length into equal buckets.
///
/// Bucket `i` covers `[start + i * w, start + (i + 1) * w)` where `w` is the bucket width.
/// Tick marks sit on the bucket boundaries and labels at the bucket centres.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    direction: Direction,
    spec: CategoryAxisSpec,
    labels: LabelStyles,
    position: AxisPosition,
    bucket_count: usize,
    configured: bool,
}

impl CategoryAxis {
    /// Creates an axis with placeholder geometry.
    pub fn new(direction: Direction, spec: CategoryAxisSpec) -> Self {
        let labels = spec
            .labels
            .clone()
            .unwrap_or_else(|| LabelStyles::for_direction(direction));
        Self {
            direction,
            spec,
            labels,
            position: AxisPosition::default(),
            bucket_count: 0,
            configured: false,
        }
    }

    /// The axis configuration.
    pub fn spec(&self) -> &CategoryAxisSpec {
        &self.spec
    }

    /// Sets the origin and length.
    pub fn set_position(&mut self, origin: impl Into<Point>, length: f64) {
        self.position = AxisPosition::new(origin, length);
    }

    /// Number of buckets (the row length of the configured dataset).
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Width of one bucket along the axis.
    ///
    /// An axis without buckets behaves as if it had one, so the width is always finite.
    pub fn bucket_width(&self) -> f64 {
        self.position.length / self.bucket_count.max(1) as f64
    }

    /// Returns `true` once [`ChartAxis::configure`] has run.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Start coordinate and width of bucket `index` along the axis.
    pub fn scale(&self, index: usize) -> (f64, f64) {
        let width = self.bucket_width();
        (
            self.position.start(self.direction) + index as f64 * width,
            width,
        )
    }

    /// The axis line.
    pub fn axis_line(&self) -> Group {
        axis_line(self.direction, &self.position, &self.spec.style)
    }

    /// Tick marks on the `bucket_count + 1` bucket boundaries.
    pub fn ticks(&self) -> Group {
        let start = self.position.start(self.direction);
        let width = self.bucket_width();
        tick_marks(
            self.direction,
            &self.position,
            &self.spec.ticks,
            &self.spec.style,
            (0..=self.bucket_count).map(|i| start + i as f64 * width),
        )
    }

    /// One label per bucket, centred in the bucket.
    pub fn tick_labels(&self) -> ChartResult<Group> {
        let mut g = Group::new();
        let Some(names) = &self.spec.category_names else {
            return Ok(g);
        };
        if names.len() != self.bucket_count {
            return Err(ChartError::CategoryNameCount {
                expected: self.bucket_count,
                found: names.len(),
            });
        }
        let cross = self.position.cross(self.direction);
        for (i, name) in names.iter().enumerate() {
            let (offset, width) = self.scale(i);
            let at = self.direction.point(offset + 0.5 * width, cross);
            g.push(Label::new(at, name.clone()).with_style(self.labels.get(i).clone()));
        }
        Ok(g)
    }
}

impl ChartAxis for CategoryAxis {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn position(&self) -> AxisPosition {
        self.position
    }

    fn reposition(&mut self, position: AxisPosition) {
        self.position = position;
    }

    fn configure(&mut self, data: &Dataset) -> ChartResult<()> {
        self.bucket_count = data.row_len();
        self.configured = true;
        tracing::trace!(
            direction = ?self.direction,
            buckets = self.bucket_count,
            "category axis configured"
        );
        Ok(())
    }

    fn coordinate(&self, value: f64) -> ChartResult<f64> {
        if !self.configured {
            return Err(ChartError::NotConfigured);
        }
        Ok(self.position.start(self.direction) + value * self.bucket_width())
    }

    fn draw(&self) -> ChartResult<Group> {
        let mut g = Group::new();
        if !self.spec.visible {
            return Ok(g);
        }
        if !self.configured {
            return Err(ChartError::NotConfigured);
        }
        g.push(self.axis_line());
        g.push(self.ticks());
        g.push(self.tick_labels()?);
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use axle_core::BoxAnchor;
    use kurbo::Line;

    use super::*;

    fn five_buckets(direction: Direction, spec: CategoryAxisSpec) -> CategoryAxis {
        let data = Dataset::new(vec![vec![10.0, 20.0, 30.0, 40.0, 50.0]]).unwrap();
        let mut axis = CategoryAxis::new(direction, spec);
        axis.set_position((50.0, 50.0), 150.0);
        axis.configure(&data).unwrap();
        axis
    }

    #[test]
    fn buckets_split_the_length_evenly() {
        let axis = five_buckets(Direction::X, CategoryAxisSpec::default());
        assert_eq!(axis.bucket_count(), 5);
        assert_eq!(axis.bucket_width(), 30.0);
        assert_eq!(axis.scale(0), (50.0, 30.0));
        assert_eq!(axis.scale(2), (110.0, 30.0));
    }

    #[test]
    fn vertical_axis_advances_y() {
        let axis = five_buckets(Direction::Y, CategoryAxisSpec::default());
        assert_eq!(axis.scale(1), (80.0, 30.0));
        let ticks = axis.ticks();
        let lines = ticks.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].line, Line::new((45.0, 50.0), (50.0, 50.0)));
        assert_eq!(lines[5].line, Line::new((45.0, 200.0), (50.0, 200.0)));
    }

    #[test]
    fn empty_dataset_uses_one_bucket_width() {
        let mut axis = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
        axis.set_position((0.0, 0.0), 80.0);
        axis.configure(&Dataset::default()).unwrap();
        assert_eq!(axis.bucket_count(), 0);
        assert_eq!(axis.bucket_width(), 80.0);
        assert_eq!(axis.ticks().len(), 1);
    }

    #[test]
    fn labels_are_centred_in_buckets() {
        let spec = CategoryAxisSpec::default().with_category_names(["a", "b", "c", "d", "e"]);
        let axis = five_buckets(Direction::X, spec);
        let g = axis.tick_labels().unwrap();
        let labels = g.labels();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].origin, Point::new(65.0, 50.0));
        assert_eq!(labels[4].origin, Point::new(185.0, 50.0));
        assert_eq!(labels[4].text, "e");
        assert_eq!(labels[0].style.box_anchor, BoxAnchor::N);
        assert_eq!(labels[0].style.dy, -5.0);
    }

    #[test]
    fn name_count_mismatch_is_an_error() {
        let spec = CategoryAxisSpec::default().with_category_names(["a", "b"]);
        let axis = five_buckets(Direction::X, spec);
        assert_eq!(
            axis.draw().unwrap_err(),
            ChartError::CategoryNameCount {
                expected: 5,
                found: 2
            }
        );
    }

    #[test]
    fn suppressed_ticks_and_invisible_axis() {
        let spec = CategoryAxisSpec::default().with_ticks(TickExtents::none());
        let axis = five_buckets(Direction::X, spec);
        assert!(axis.ticks().is_empty());
        assert_eq!(axis.draw().unwrap().lines().len(), 1);

        let axis = five_buckets(Direction::X, CategoryAxisSpec::default().with_visible(false));
        assert!(axis.draw().unwrap().is_empty());
    }

    #[test]
    fn drawing_requires_configuration() {
        let axis = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
        assert_eq!(axis.draw().unwrap_err(), ChartError::NotConfigured);
        assert_eq!(axis.coordinate(1.0).unwrap_err(), ChartError::NotConfigured);
    }
}
