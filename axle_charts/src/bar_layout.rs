// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped bar layout.
//!
//! Each category bucket holds one group of bars, one bar per series, side by side in
//! series order. The layout is computed in axis-relative terms: *across* runs along the
//! category axis and *along* runs along the value axis. [`Direction`] maps those back to
//! x and y, so vertical and horizontal bar charts share one algorithm.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::{
    CategoryAxis, ChartAxis, ChartError, ChartResult, Dataset, Direction, ValueAxis,
    ValueAxisState,
};

/// How bar dimensions relate to the category buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpacingMode {
    /// Bar width and spacings are proportions; each group is scaled to fill its bucket.
    #[default]
    Proportional,
    /// Bar width and spacings are drawing-plane units; buckets are ignored.
    Absolute,
}

/// Bar sizing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayoutSpec {
    /// Width of one bar.
    pub bar_width: f64,
    /// Space between groups. Half of it precedes the first bar of each group.
    pub group_spacing: f64,
    /// Space between adjacent bars of one group.
    pub bar_spacing: f64,
    /// Interpretation of the three sizes above.
    pub spacing: SpacingMode,
}

impl Default for BarLayoutSpec {
    fn default() -> Self {
        Self {
            bar_width: 10.0,
            group_spacing: 5.0,
            bar_spacing: 0.0,
            spacing: SpacingMode::Proportional,
        }
    }
}

impl BarLayoutSpec {
    /// Sets the bar width.
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Sets the group spacing.
    pub fn with_group_spacing(mut self, group_spacing: f64) -> Self {
        self.group_spacing = group_spacing;
        self
    }

    /// Sets the bar spacing.
    pub fn with_bar_spacing(mut self, bar_spacing: f64) -> Self {
        self.bar_spacing = bar_spacing;
        self
    }

    /// Sets the spacing mode.
    pub fn with_spacing(mut self, spacing: SpacingMode) -> Self {
        self.spacing = spacing;
        self
    }
}

/// The rectangle of one (series, category) cell.
///
/// `width` and `height` are signed: the size along the value axis is negative for bars
/// that extend from the baseline toward smaller values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    /// Series index.
    pub series: usize,
    /// Category index.
    pub category: usize,
    /// The datum drawn.
    pub value: f64,
    /// Left edge for vertical bars; baseline for horizontal bars.
    pub x: f64,
    /// Baseline for vertical bars; bottom edge for horizontal bars.
    pub y: f64,
    /// Extent along x (signed for horizontal bars).
    pub width: f64,
    /// Extent along y (signed for vertical bars).
    pub height: f64,
    /// Direction of the category axis.
    pub category_direction: Direction,
}

impl BarGeometry {
    /// The normalized rectangle covered by the bar.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height).abs()
    }

    /// Signed size along the value axis.
    pub fn value_extent(&self) -> f64 {
        match self.category_direction {
            Direction::X => self.height,
            Direction::Y => self.width,
        }
    }

    /// The middle of the bar's far end, pushed `nudge` further away from the baseline.
    ///
    /// A zero-size bar counts as pointing toward larger values.
    pub fn tip(&self, nudge: f64) -> Point {
        let extent = self.value_extent();
        let sign = if extent >= 0.0 { 1.0 } else { -1.0 };
        match self.category_direction {
            Direction::X => Point::new(
                self.x + 0.5 * self.width,
                self.y + self.height + sign * nudge,
            ),
            Direction::Y => Point::new(
                self.x + self.width + sign * nudge,
                self.y + 0.5 * self.height,
            ),
        }
    }
}

/// Bar rectangles for a whole dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    /// One entry per cell with a finite datum, series-major.
    pub bars: Vec<BarGeometry>,
    /// Value-axis coordinate all bars start from.
    pub baseline: f64,
    /// Scale applied to bar width and spacings (1 in absolute mode).
    pub factor: f64,
}

impl BarLayout {
    /// Lays out one bar per (series, category) cell.
    ///
    /// Both axes must be configured and run in different directions. Cells holding a
    /// non-finite datum get no bar, so a dataset without finite values yields an empty
    /// layout.
    pub fn compute(
        data: &Dataset,
        category_axis: &CategoryAxis,
        value_axis: &ValueAxis,
        spec: &BarLayoutSpec,
    ) -> ChartResult<Self> {
        let across = category_axis.direction();
        let along = value_axis.direction();
        if across == along {
            return Err(ChartError::FlavourMismatch {
                axis: across,
                other: along,
            });
        }
        if !category_axis.is_configured()
            || value_axis.state() == ValueAxisState::Unconfigured
        {
            return Err(ChartError::NotConfigured);
        }

        let series_count = data.series_count();
        let row_len = data.row_len();
        if data.extent().is_none() {
            tracing::debug!("bar layout skipped: dataset has no finite values");
            return Ok(Self {
                bars: Vec::new(),
                baseline: value_axis.position().start(along),
                factor: 1.0,
            });
        }

        let n = series_count as f64;
        let slot = spec.bar_width + spec.bar_spacing;
        let factor = match spec.spacing {
            SpacingMode::Absolute => 1.0,
            SpacingMode::Proportional => {
                let group_width =
                    spec.group_spacing + n * spec.bar_width + (n - 1.0) * spec.bar_spacing;
                if group_width == 0.0 {
                    return Err(ChartError::ZeroGroupWidth);
                }
                category_axis.bucket_width() / group_width
            }
        };
        let baseline = baseline(data, value_axis)?;
        tracing::debug!(
            series = series_count,
            points = row_len,
            factor,
            baseline,
            "bar layout"
        );

        let category_start = category_axis.position().start(across);
        let group_stride = n * spec.bar_width + n * spec.bar_spacing + spec.group_spacing;
        let bar_size = spec.bar_width * factor;

        let mut bars = Vec::with_capacity(series_count * row_len);
        for (s, values) in data.iter().enumerate() {
            for (c, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    continue;
                }
                let start = match spec.spacing {
                    SpacingMode::Absolute => {
                        let group = category_start
                            + group_stride * c as f64
                            + 0.5 * spec.group_spacing;
                        group + s as f64 * slot
                    }
                    SpacingMode::Proportional => {
                        let (offset, _) = category_axis.scale(c);
                        offset + factor * (0.5 * spec.group_spacing + s as f64 * slot)
                    }
                };
                let extent = value_axis.scale(value)? - baseline;
                let (x, y, width, height) = match across {
                    Direction::X => (start, baseline, bar_size, extent),
                    Direction::Y => (baseline, start, extent, bar_size),
                };
                bars.push(BarGeometry {
                    series: s,
                    category: c,
                    value,
                    x,
                    y,
                    width,
                    height,
                    category_direction: across,
                });
            }
        }
        Ok(Self {
            bars,
            baseline,
            factor,
        })
    }

    /// The bar for (`series`, `category`), if it was laid out.
    pub fn get(&self, series: usize, category: usize) -> Option<&BarGeometry> {
        self.bars
            .iter()
            .find(|b| b.series == series && b.category == category)
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns `true` if no bars were laid out.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// The value-axis coordinate bars grow from, chosen once per chart.
///
/// With both bounds automatic the smallest datum is used. Otherwise zero is used when the
/// range contains it, and the bound nearest zero when it does not.
fn baseline(data: &Dataset, value_axis: &ValueAxis) -> ChartResult<f64> {
    let (min, max) = match value_axis.state() {
        ValueAxisState::Unconfigured => return Err(ChartError::NotConfigured),
        ValueAxisState::Unresolved { missing } => {
            return Err(ChartError::UnresolvedRange { missing });
        }
        ValueAxisState::Configured { min, max, .. } => (min, max),
    };
    let spec = value_axis.spec();
    let at = if spec.min.is_none() && spec.max.is_none() {
        data.extent().map_or(min, |(lo, _)| lo)
    } else if min <= 0.0 && 0.0 <= max {
        0.0
    } else if min > 0.0 {
        min
    } else {
        max
    };
    value_axis.scale(at)
}
