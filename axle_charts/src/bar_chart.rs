// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped bar charts.
//!
//! A [`BarChart`] owns a category axis and a value axis, positions both inside a frame
//! rectangle and emits the frame, the axes, one rectangle per datum and optional bar
//! labels as a single [`Group`].

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

use axle_core::{BoxAnchor, Group, Label, LabelStyle, RectShape, StrokeStyle};

use crate::{
    BarLayout, BarLayoutSpec, CategoryAxis, CategoryAxisSpec, ChartAxis, ChartError,
    ChartResult, Dataset, Direction, JoinMode, LabelFormat, ValueAxis, ValueAxisSpec,
};

/// Bar label styles: a shared default plus per-(series, category) overrides.
///
/// The box anchor of a bar label is always forced to [`BoxAnchor::C`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarLabelStyles {
    /// Style used for every bar without an override.
    pub default: LabelStyle,
    overrides: HashMap<(usize, usize), LabelStyle>,
}

impl BarLabelStyles {
    /// Uses `default` for every bar label.
    pub fn new(default: LabelStyle) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Overrides the style of the label on bar (`series`, `category`).
    pub fn with_override(mut self, series: usize, category: usize, style: LabelStyle) -> Self {
        self.overrides.insert((series, category), style);
        self
    }

    /// The effective style of the label on bar (`series`, `category`).
    pub fn get(&self, series: usize, category: usize) -> &LabelStyle {
        self.overrides
            .get(&(series, category))
            .unwrap_or(&self.default)
    }
}

/// Configuration for a [`BarChart`].
#[derive(Clone, Debug)]
pub struct BarChartSpec {
    /// Plot frame. The axes start at its lower-left corner.
    pub frame: Rect,
    /// Direction of the category axis: `X` gives vertical bars, `Y` horizontal bars.
    pub category_direction: Direction,
    /// Bar sizing.
    pub layout: BarLayoutSpec,
    /// Category axis configuration.
    pub category_axis: CategoryAxisSpec,
    /// Value axis configuration.
    pub value_axis: ValueAxisSpec,
    /// Bar fills, cycled per series. Empty leaves bars unfilled.
    pub fills: Vec<Brush>,
    /// Bar outline.
    pub bar_stroke: Option<StrokeStyle>,
    /// Frame outline.
    pub frame_stroke: Option<StrokeStyle>,
    /// Frame fill.
    pub frame_fill: Option<Brush>,
    /// Bar label styles.
    pub bar_labels: BarLabelStyles,
    /// Bar label text. `None` draws no bar labels.
    pub bar_label_format: Option<LabelFormat>,
    /// Distance from the bar tip to the label origin, away from the baseline.
    pub bar_label_nudge: f64,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            frame: Rect::new(0.0, 0.0, 200.0, 100.0),
            category_direction: Direction::X,
            layout: BarLayoutSpec::default(),
            category_axis: CategoryAxisSpec::default(),
            value_axis: ValueAxisSpec::default(),
            fills: vec![
                Brush::Solid(css::RED),
                Brush::Solid(css::GREEN),
                Brush::Solid(css::BLUE),
            ],
            bar_stroke: Some(StrokeStyle::default()),
            frame_stroke: None,
            frame_fill: None,
            bar_labels: BarLabelStyles::default(),
            bar_label_format: None,
            bar_label_nudge: 0.0,
        }
    }
}

impl BarChartSpec {
    /// A vertical bar chart in `frame`.
    pub fn vertical(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// A horizontal bar chart in `frame`.
    pub fn horizontal(frame: Rect) -> Self {
        Self {
            frame,
            category_direction: Direction::Y,
            ..Self::default()
        }
    }

    /// Sets the bar sizing.
    pub fn with_layout(mut self, layout: BarLayoutSpec) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the category axis configuration.
    pub fn with_category_axis(mut self, spec: CategoryAxisSpec) -> Self {
        self.category_axis = spec;
        self
    }

    /// Sets the value axis configuration.
    pub fn with_value_axis(mut self, spec: ValueAxisSpec) -> Self {
        self.value_axis = spec;
        self
    }

    /// Sets the series fills.
    pub fn with_fills(mut self, fills: impl Into<Vec<Brush>>) -> Self {
        self.fills = fills.into();
        self
    }

    /// Sets the bar outline.
    pub fn with_bar_stroke(mut self, stroke: Option<StrokeStyle>) -> Self {
        self.bar_stroke = stroke;
        self
    }

    /// Sets the frame outline and fill.
    pub fn with_frame_style(mut self, stroke: Option<StrokeStyle>, fill: Option<Brush>) -> Self {
        self.frame_stroke = stroke;
        self.frame_fill = fill;
        self
    }

    /// Sets the bar label styles.
    pub fn with_bar_labels(mut self, labels: BarLabelStyles) -> Self {
        self.bar_labels = labels;
        self
    }

    /// Sets the bar label format and nudge.
    pub fn with_bar_label_format(mut self, format: Option<LabelFormat>, nudge: f64) -> Self {
        self.bar_label_format = format;
        self.bar_label_nudge = nudge;
        self
    }
}

/// A grouped bar chart.
#[derive(Clone, Debug)]
pub struct BarChart {
    spec: BarChartSpec,
    category_axis: CategoryAxis,
    value_axis: ValueAxis,
    layout: Option<BarLayout>,
}

impl BarChart {
    /// Creates a chart; nothing is computed until [`Self::draw`].
    pub fn new(spec: BarChartSpec) -> Self {
        let across = spec.category_direction;
        let category_axis = CategoryAxis::new(across, spec.category_axis.clone());
        let value_axis = ValueAxis::new(across.other(), spec.value_axis.clone());
        Self {
            spec,
            category_axis,
            value_axis,
            layout: None,
        }
    }

    /// The chart configuration.
    pub fn spec(&self) -> &BarChartSpec {
        &self.spec
    }

    /// The category axis, as positioned by the last draw.
    pub fn category_axis(&self) -> &CategoryAxis {
        &self.category_axis
    }

    /// The value axis, as positioned by the last draw.
    pub fn value_axis(&self) -> &ValueAxis {
        &self.value_axis
    }

    /// The bar layout of the last successful draw.
    pub fn layout(&self) -> Option<&BarLayout> {
        self.layout.as_ref()
    }

    /// Positions and configures both axes, lays out the bars and renders everything.
    ///
    /// The value axis spans the frame along its direction. The category axis crosses it
    /// at zero when zero lies inside the frame, and at the frame edge otherwise.
    pub fn draw(&mut self, data: &Dataset) -> ChartResult<Group> {
        self.layout = None;
        let frame = self.spec.frame.abs();
        let across = self.spec.category_direction;
        let along = across.other();
        let (category_length, value_length) = match across {
            Direction::X => (frame.width(), frame.height()),
            Direction::Y => (frame.height(), frame.width()),
        };

        self.value_axis.set_position(frame.origin(), value_length);
        self.value_axis.configure(data)?;

        self.category_axis.set_position(frame.origin(), category_length);
        let lo = along.primary(frame.origin());
        let hi = lo + value_length;
        let mode = match self.value_axis.scale(0.0) {
            Ok(zero) if lo <= zero && zero <= hi => JoinMode::FixedValue(0.0),
            Ok(_) | Err(ChartError::UnresolvedRange { .. }) => JoinMode::Start,
            Err(e) => return Err(e),
        };
        self.category_axis.join_to(&self.value_axis, mode)?;
        self.category_axis.configure(data)?;

        let layout = BarLayout::compute(
            data,
            &self.category_axis,
            &self.value_axis,
            &self.spec.layout,
        )?;

        let mut g = Group::new();
        g.push(
            RectShape::new(frame)
                .with_fill(self.spec.frame_fill.clone())
                .with_stroke(self.spec.frame_stroke.clone()),
        );
        g.push(self.category_axis.draw()?);
        g.push(self.value_axis.draw()?);
        g.push(self.bars(&layout));
        g.push(self.bar_labels(&layout)?);

        tracing::trace!(bars = layout.len(), ?mode, "bar chart drawn");
        self.layout = Some(layout);
        Ok(g)
    }

    fn bars(&self, layout: &BarLayout) -> Group {
        let mut g = Group::new();
        let fills = &self.spec.fills;
        for bar in &layout.bars {
            let fill = if fills.is_empty() {
                None
            } else {
                Some(fills[bar.series % fills.len()].clone())
            };
            g.push(
                RectShape::new(bar.rect())
                    .with_fill(fill)
                    .with_stroke(self.spec.bar_stroke.clone()),
            );
        }
        g
    }

    fn bar_labels(&self, layout: &BarLayout) -> ChartResult<Group> {
        let mut g = Group::new();
        let Some(format) = &self.spec.bar_label_format else {
            return Ok(g);
        };
        let format = format.resolve()?;
        for bar in &layout.bars {
            let text = format.format(bar.value);
            if text.is_empty() {
                continue;
            }
            let style = self
                .spec
                .bar_labels
                .get(bar.series, bar.category)
                .clone()
                .with_box_anchor(BoxAnchor::C);
            g.push(Label::new(bar.tip(self.spec.bar_label_nudge), text).with_style(style));
        }
        Ok(g)
    }
}
