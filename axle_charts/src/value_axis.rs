// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value axes: a linear mapping from a numeric range onto the axis length.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;

use axle_core::{Group, Label};

use crate::axis::{axis_line, tick_marks};
use crate::tick::tick_values;
use crate::{
    AxisPosition, AxisStyle, ChartAxis, ChartError, ChartResult, Dataset, Direction,
    LabelFormat, LabelStyles, TickExtents, next_round_number,
};

/// Configuration for a [`ValueAxis`].
#[derive(Clone, Debug)]
pub struct ValueAxisSpec {
    /// Whether the axis is drawn at all.
    pub visible: bool,
    /// Lower bound. `None` uses the smallest finite data value.
    pub min: Option<f64>,
    /// Upper bound. `None` uses the largest finite data value.
    pub max: Option<f64>,
    /// Tick step. `None` picks a round step from [`Self::minimum_tick_spacing`].
    pub step: Option<f64>,
    /// Explicit tick values, used verbatim instead of stepped ticks.
    pub tick_values: Option<Vec<f64>>,
    /// Smallest distance between automatic ticks, in drawing-plane units.
    pub minimum_tick_spacing: f64,
    /// Tick mark extents.
    pub ticks: TickExtents,
    /// Stroke styling.
    pub style: AxisStyle,
    /// Tick label styles. `None` uses [`LabelStyles::for_direction`].
    pub labels: Option<LabelStyles>,
    /// Tick label text. `None` draws no labels.
    pub label_format: Option<LabelFormat>,
}

impl Default for ValueAxisSpec {
    fn default() -> Self {
        Self {
            visible: true,
            min: None,
            max: None,
            step: None,
            tick_values: None,
            minimum_tick_spacing: 10.0,
            ticks: TickExtents::default(),
            style: AxisStyle::default(),
            labels: None,
            label_format: Some(LabelFormat::default()),
        }
    }
}

impl ValueAxisSpec {
    /// Shows or hides the axis.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets both bounds; `None` leaves a bound automatic.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the lower bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets an explicit tick step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Uses explicit tick values.
    pub fn with_tick_values(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.tick_values = Some(values.into());
        self
    }

    /// Sets the minimum automatic tick spacing.
    pub fn with_minimum_tick_spacing(mut self, spacing: f64) -> Self {
        self.minimum_tick_spacing = spacing;
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

    /// Sets the tick label format; `None` disables labels.
    pub fn with_label_format(mut self, format: Option<LabelFormat>) -> Self {
        self.label_format = format;
        self
    }
}

/// One end of a value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The lower bound.
    Min,
    /// The upper bound.
    Max,
}

impl core::fmt::Display for Bound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
        })
    }
}

/// Derived state of a [`ValueAxis`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueAxisState {
    /// Not configured since creation, a length change, or [`ValueAxis::reset`].
    Unconfigured,
    /// Configured, but an automatic bound had no finite data to resolve from.
    Unresolved {
        /// The bound that could not be resolved.
        missing: Bound,
    },
    /// Configured with a usable range.
    Configured {
        /// Resolved lower bound.
        min: f64,
        /// Resolved upper bound.
        max: f64,
        /// Resolved tick step; `None` when explicit tick values are used.
        step: Option<f64>,
        /// Drawing-plane units per data unit.
        factor: f64,
    },
}

/// A metric axis mapping `[min, max]` linearly onto its length.
#[derive(Clone, Debug)]
pub struct ValueAxis {
    direction: Direction,
    spec: ValueAxisSpec,
    labels: LabelStyles,
    position: AxisPosition,
    state: ValueAxisState,
    ticks: SmallVec<[f64; 16]>,
}

impl ValueAxis {
    /// Creates an unconfigured axis with placeholder geometry.
    pub fn new(direction: Direction, spec: ValueAxisSpec) -> Self {
        let labels = spec
            .labels
            .clone()
            .unwrap_or_else(|| LabelStyles::for_direction(direction));
        Self {
            direction,
            spec,
            labels,
            position: AxisPosition::default(),
            state: ValueAxisState::Unconfigured,
            ticks: SmallVec::new(),
        }
    }

    /// The axis configuration.
    pub fn spec(&self) -> &ValueAxisSpec {
        &self.spec
    }

    /// Sets the origin and length.
    ///
    /// Changing the length invalidates the scale, so the axis must be configured again.
    pub fn set_position(&mut self, origin: impl Into<Point>, length: f64) {
        self.reposition(AxisPosition::new(origin, length));
    }

    /// Drops all derived state.
    pub fn reset(&mut self) {
        self.state = ValueAxisState::Unconfigured;
        self.ticks.clear();
    }

    /// Current derived state.
    pub fn state(&self) -> ValueAxisState {
        self.state
    }

    /// Returns `true` if the axis has a usable range.
    pub fn is_configured(&self) -> bool {
        matches!(self.state, ValueAxisState::Configured { .. })
    }

    /// Resolved `(min, max)`, once configured.
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.state {
            ValueAxisState::Configured { min, max, .. } => Some((min, max)),
            _ => None,
        }
    }

    /// Resolved tick step, once configured without explicit tick values.
    pub fn step(&self) -> Option<f64> {
        match self.state {
            ValueAxisState::Configured { step, .. } => step,
            _ => None,
        }
    }

    /// Tick values, in data space. Empty until configured.
    pub fn tick_values(&self) -> &[f64] {
        &self.ticks
    }

    /// Maps a data value to its primary drawing-plane coordinate.
    pub fn scale(&self, value: f64) -> ChartResult<f64> {
        match self.state {
            ValueAxisState::Unconfigured => Err(ChartError::NotConfigured),
            ValueAxisState::Unresolved { missing } => {
                Err(ChartError::UnresolvedRange { missing })
            }
            ValueAxisState::Configured { min, factor, .. } => {
                Ok(self.position.start(self.direction) + factor * (value - min))
            }
        }
    }

    /// The axis line.
    pub fn axis_line(&self) -> Group {
        axis_line(self.direction, &self.position, &self.spec.style)
    }

    /// One tick mark per tick value. Empty for an unresolved axis.
    pub fn ticks(&self) -> ChartResult<Group> {
        let at = self.tick_coordinates()?;
        Ok(tick_marks(
            self.direction,
            &self.position,
            &self.spec.ticks,
            &self.spec.style,
            at,
        ))
    }

    /// One label per tick value. Empty for an unresolved axis or without a label format.
    pub fn tick_labels(&self) -> ChartResult<Group> {
        let mut g = Group::new();
        let at = self.tick_coordinates()?;
        let Some(format) = &self.spec.label_format else {
            return Ok(g);
        };
        let format = format.resolve()?;
        let cross = self.position.cross(self.direction);
        for (i, (value, primary)) in self.ticks.iter().zip(at).enumerate() {
            let origin = self.direction.point(primary, cross);
            let label = Label::new(origin, format.format(*value))
                .with_style(self.labels.get(i).clone());
            g.push(label);
        }
        Ok(g)
    }

    fn tick_coordinates(&self) -> ChartResult<SmallVec<[f64; 16]>> {
        match self.state {
            ValueAxisState::Unconfigured => Err(ChartError::NotConfigured),
            ValueAxisState::Unresolved { .. } => Ok(SmallVec::new()),
            ValueAxisState::Configured { .. } => {
                self.ticks.iter().map(|&t| self.scale(t)).collect()
            }
        }
    }

    fn resolve(&self, data: &Dataset) -> ChartResult<(ValueAxisState, SmallVec<[f64; 16]>)> {
        let extent = data.extent();
        let Some(min) = self.spec.min.or(extent.map(|e| e.0)) else {
            return Ok((ValueAxisState::Unresolved { missing: Bound::Min }, SmallVec::new()));
        };
        let Some(max) = self.spec.max.or(extent.map(|e| e.1)) else {
            return Ok((ValueAxisState::Unresolved { missing: Bound::Max }, SmallVec::new()));
        };
        if min.is_nan() || max.is_nan() || max <= min {
            return Err(ChartError::EmptyRange { min, max });
        }
        let length = self.position.length;
        let factor = length / (max - min);

        if let Some(values) = &self.spec.tick_values {
            let state = ValueAxisState::Configured {
                min,
                max,
                step: None,
                factor,
            };
            return Ok((state, values.iter().copied().collect()));
        }

        let step = match self.spec.step {
            Some(step) => step,
            None => next_round_number((max - min) * self.spec.minimum_tick_spacing / length),
        };
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidStep { step });
        }
        tracing::debug!(
            direction = ?self.direction,
            min,
            max,
            step,
            "value axis range resolved"
        );
        let state = ValueAxisState::Configured {
            min,
            max,
            step: Some(step),
            factor,
        };
        Ok((state, tick_values(min, max, step)))
    }
}

impl ChartAxis for ValueAxis {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn position(&self) -> AxisPosition {
        self.position
    }

    fn reposition(&mut self, position: AxisPosition) {
        if position.length != self.position.length {
            self.reset();
        }
        self.position = position;
    }

    fn configure(&mut self, data: &Dataset) -> ChartResult<()> {
        self.reset();
        let (state, ticks) = self.resolve(data)?;
        self.state = state;
        self.ticks = ticks;
        Ok(())
    }

    fn coordinate(&self, value: f64) -> ChartResult<f64> {
        self.scale(value)
    }

    fn draw(&self) -> ChartResult<Group> {
        let mut g = Group::new();
        if !self.spec.visible {
            return Ok(g);
        }
        let ticks = self.ticks()?;
        let labels = self.tick_labels()?;
        g.push(self.axis_line());
        g.push(ticks);
        g.push(labels);
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;

    use axle_core::BoxAnchor;
    use kurbo::Line;

    use super::*;

    fn configured(direction: Direction, spec: ValueAxisSpec, data: &Dataset) -> ValueAxis {
        let mut axis = ValueAxis::new(direction, spec);
        axis.set_position((50.0, 50.0), 300.0);
        axis.configure(data).unwrap();
        axis
    }

    #[test]
    fn explicit_range_and_step() {
        let data = Dataset::single(vec![13.0, 20.0]);
        let spec = ValueAxisSpec::default().with_min(0.0).with_max(60.0).with_step(15.0);
        let axis = configured(Direction::Y, spec, &data);
        assert_eq!(axis.tick_values(), [0.0, 15.0, 30.0, 45.0, 60.0]);
        assert_eq!(axis.step(), Some(15.0));
    }

    #[test]
    fn automatic_bounds_follow_the_data() {
        let data = Dataset::single(vec![10.0, 20.0, 30.0, 42.0]);
        let axis = configured(Direction::Y, ValueAxisSpec::default(), &data);
        assert_eq!(axis.range(), Some((10.0, 42.0)));
        // 32 units over 300 points with 10 point spacing: raw step 1.0666.. -> 2.
        assert_eq!(axis.step(), Some(2.0));
        assert_eq!(axis.tick_values().first(), Some(&10.0));
        assert_eq!(axis.tick_values().last(), Some(&42.0));
    }

    #[test]
    fn scale_maps_range_onto_length() {
        let data = Dataset::single(vec![0.0]);
        let spec = ValueAxisSpec::default().with_range(Some(-30.0), Some(-10.0));
        let axis = configured(Direction::X, spec, &data);
        assert_eq!(axis.scale(-30.0).unwrap(), 50.0);
        assert_eq!(axis.scale(-10.0).unwrap(), 350.0);
        assert_eq!(axis.scale(-20.0).unwrap(), 200.0);
    }

    #[test]
    fn scale_before_configure_fails() {
        let axis = ValueAxis::new(Direction::Y, ValueAxisSpec::default());
        assert_eq!(axis.scale(1.0).unwrap_err(), ChartError::NotConfigured);
        assert_eq!(axis.draw().unwrap_err(), ChartError::NotConfigured);
    }

    #[test]
    fn length_change_requires_reconfiguration() {
        let data = Dataset::single(vec![1.0, 2.0]);
        let mut axis = configured(Direction::Y, ValueAxisSpec::default(), &data);
        axis.set_position((0.0, 0.0), 300.0);
        assert!(axis.is_configured(), "moving the origin keeps the scale");
        assert_eq!(axis.scale(1.0).unwrap(), 0.0);

        axis.set_position((0.0, 0.0), 200.0);
        assert_eq!(axis.state(), ValueAxisState::Unconfigured);
        assert!(axis.tick_values().is_empty());
    }

    #[test]
    fn empty_data_with_automatic_bound_is_unresolved() {
        let data = Dataset::default();
        let axis = configured(Direction::Y, ValueAxisSpec::default().with_min(0.0), &data);
        assert_eq!(axis.state(), ValueAxisState::Unresolved { missing: Bound::Max });
        assert_eq!(
            axis.scale(0.0).unwrap_err(),
            ChartError::UnresolvedRange { missing: Bound::Max }
        );
        let g = axis.draw().unwrap();
        assert_eq!(g.lines().len(), 1, "only the axis line is drawn");
        assert!(g.labels().is_empty());
    }

    #[test]
    fn hidden_axis_draws_nothing_in_any_state() {
        let spec = ValueAxisSpec::default().with_visible(false);
        let unconfigured = ValueAxis::new(Direction::Y, spec.clone());
        assert!(unconfigured.draw().unwrap().is_empty());

        let data = Dataset::single(vec![0.0, 60.0]);
        let axis = configured(Direction::Y, spec, &data);
        assert!(axis.is_configured());
        assert!(axis.draw().unwrap().is_empty());
        assert!(!axis.ticks().unwrap().is_empty(), "ticks exist but are not drawn");
    }

    #[test]
    fn degenerate_ranges_and_steps_are_rejected() {
        let data = Dataset::single(vec![5.0, 5.0]);
        let mut axis = ValueAxis::new(Direction::Y, ValueAxisSpec::default());
        assert_eq!(
            axis.configure(&data).unwrap_err(),
            ChartError::EmptyRange { min: 5.0, max: 5.0 }
        );
        assert_eq!(axis.state(), ValueAxisState::Unconfigured);

        let spec = ValueAxisSpec::default().with_min(0.0).with_max(10.0).with_step(-1.0);
        let mut axis = ValueAxis::new(Direction::Y, spec);
        assert_eq!(
            axis.configure(&data).unwrap_err(),
            ChartError::InvalidStep { step: -1.0 }
        );
    }

    #[test]
    fn explicit_tick_values_bypass_stepping() {
        let data = Dataset::single(vec![0.0, 100.0]);
        let spec = ValueAxisSpec::default().with_tick_values([0.0, 33.0, 100.0]);
        let axis = configured(Direction::X, spec, &data);
        assert_eq!(axis.tick_values(), [0.0, 33.0, 100.0]);
        assert_eq!(axis.step(), None);
    }

    #[test]
    fn draw_places_ticks_and_formatted_labels() {
        let data = Dataset::single(vec![0.0]);
        let spec = ValueAxisSpec::default()
            .with_min(0.0)
            .with_max(60.0)
            .with_step(15.0)
            .with_label_format(Some(LabelFormat::pattern("%d%%")));
        let axis = configured(Direction::Y, spec, &data);
        let g = axis.draw().unwrap();

        let lines = g.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].line, Line::new((50.0, 50.0), (50.0, 350.0)));
        assert_eq!(lines[2].line, Line::new((45.0, 125.0), (50.0, 125.0)));

        let labels = g.labels();
        let texts: Vec<&String> = labels.iter().map(|l| &l.text).collect();
        assert_eq!(texts, ["0%", "15%", "30%", "45%", "60%"]);
        assert_eq!(labels[1].origin, Point::new(50.0, 125.0));
        assert_eq!(labels[1].style.box_anchor, BoxAnchor::E);
    }

    #[test]
    fn missing_label_format_draws_no_labels() {
        let data = Dataset::single(vec![0.0, 10.0]);
        let spec = ValueAxisSpec::default().with_label_format(None);
        let axis = configured(Direction::X, spec, &data);
        assert!(axis.tick_labels().unwrap().is_empty());
        assert!(!axis.ticks().unwrap().is_empty());
    }
}
