// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demos for `axle_charts`.
mod html;
mod svg;

use axle_charts::{
    AxisStyle, BarChart, BarChartSpec, BarLabelStyles, BarLayoutSpec, CategoryAxisSpec,
    ChartResult, Dataset, Direction, LabelFormat, LabelStyles, SpacingMode, TickExtents,
    ValueAxisSpec,
};
use axle_core::{BoxAnchor, LabelStyle, StrokeStyle};
use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;

const MONTHS: [&str; 8] = [
    "Jan-99", "Feb-99", "Mar-99", "Apr-99", "May-99", "Jun-99", "Jul-99", "Aug-99",
];

const PERIODS: [&str; 5] = [
    "Q3 2000",
    "Year to Date",
    "12 months",
    "Annualised\n3 years",
    "Since 07.10.99",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sections = vec![
        simple_demo()?,
        single_bar_demo()?,
        empty_series_demo()?,
        multi_series_demo()?,
        mixed_sign_demo(0.0, None)?,
        mixed_sign_demo(5.0, None)?,
        mixed_sign_demo(2.0, Some(LabelFormat::pattern("%0.2f")))?,
        hidden_value_axis_demo()?,
        value_range_demo(vec![13.0, 20.0], 0.0, 60.0)?,
        value_range_demo(vec![13.0, 20.0], -10.0, 60.0)?,
        value_range_demo(vec![13.0, 20.0], 10.0, 60.0)?,
        value_range_demo(vec![-13.0, -20.0], -30.0, -10.0)?,
        spacing_demo(SpacingMode::Proportional)?,
        spacing_demo(SpacingMode::Absolute)?,
        horizontal_demo()?,
        horizontal_mixed_sign_demo()?,
        automatic_range_demo()?,
    ];

    let html = html::render_report("Axle bar chart demo", &sections);
    std::fs::write("axle_charts_demo.html", html)?;
    tracing::info!(charts = sections.len(), "wrote axle_charts_demo.html");
    Ok(())
}

fn render_chart(
    title: &str,
    description: &str,
    spec: BarChartSpec,
    data: &Dataset,
) -> ChartResult<html::HtmlSection> {
    let mut chart = BarChart::new(spec);
    let group = chart.draw(data)?;
    tracing::debug!(
        title,
        bars = chart.layout().map_or(0, |l| l.len()),
        "rendered chart"
    );

    let mut scene = svg::SvgScene::new(400.0, 200.0);
    scene.draw(&group);
    Ok(html::HtmlSection {
        title: title.to_string(),
        description: description.to_string(),
        svg: scene.to_svg_string(),
    })
}

fn plot_frame() -> Rect {
    Rect::new(50.0, 50.0, 350.0, 175.0)
}

fn framed(spec: BarChartSpec) -> BarChartSpec {
    spec.with_frame_style(Some(StrokeStyle::default()), None)
}

fn fixed_range(min: f64, max: f64, step: f64) -> ValueAxisSpec {
    ValueAxisSpec::default()
        .with_min(min)
        .with_max(max)
        .with_step(step)
}

fn hanging_labels(dy: f64) -> LabelStyles {
    LabelStyles::new(
        LabelStyle::default()
            .with_box_anchor(BoxAnchor::N)
            .with_offset(0.0, dy),
    )
}

fn simple_demo() -> ChartResult<html::HtmlSection> {
    let labels = LabelStyles::new(
        LabelStyle::default()
            .with_box_anchor(BoxAnchor::NE)
            .with_offset(8.0, -2.0)
            .with_angle(30.0),
    );
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_value_axis(fixed_range(0.0, 60.0, 15.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(labels)
                .with_category_names(["Ying", "Yang"]),
        );
    render_chart(
        "Simple bar chart",
        "Two categories, fixed 0..60 range, rotated category labels.",
        spec,
        &Dataset::single(vec![13.0, 20.0]),
    )
}

fn single_bar_demo() -> ChartResult<html::HtmlSection> {
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_value_axis(fixed_range(0.0, 50.0, 15.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(hanging_labels(-5.0))
                .with_category_names(["Jan-99"]),
        );
    render_chart(
        "Single bar",
        "One category. The step does not divide the range; the last tick is 45.",
        spec,
        &Dataset::single(vec![42.0]),
    )
}

fn empty_series_demo() -> ChartResult<html::HtmlSection> {
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_value_axis(fixed_range(0.0, 60.0, 15.0));
    render_chart(
        "Empty series",
        "A series without values: frame and axes only.",
        spec,
        &Dataset::new(vec![Vec::new()])?,
    )
}

fn multi_series_demo() -> ChartResult<html::HtmlSection> {
    let data = Dataset::new(vec![
        vec![13.0, 5.0, 20.0, 22.0, 37.0, 45.0, 19.0, 4.0],
        vec![14.0, 6.0, 21.0, 23.0, 38.0, 46.0, 20.0, 5.0],
    ])?;
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_value_axis(fixed_range(0.0, 60.0, 15.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(hanging_labels(-5.0))
                .with_category_names(MONTHS),
        );
    render_chart(
        "Two series",
        "Eight categories, two bars per group.",
        spec,
        &data,
    )
}

fn mixed_sign_demo(
    bar_spacing: f64,
    bar_labels: Option<LabelFormat>,
) -> ChartResult<html::HtmlSection> {
    let data = Dataset::new(vec![
        vec![2.4, -5.7, 2.0, 5.0, 9.2],
        vec![0.6, -4.9, -3.0, 4.0, 6.8],
    ])?;
    let small = LabelStyle::default().with_font_size(8.0);
    let labelled = bar_labels.is_some();

    let spec = framed(BarChartSpec::vertical(Rect::new(50.0, 50.0, 350.0, 170.0)))
        .with_layout(
            BarLayoutSpec::default()
                .with_group_spacing(10.0)
                .with_bar_spacing(bar_spacing),
        )
        .with_value_axis(
            fixed_range(-15.0, 15.0, 5.0).with_labels(LabelStyles::new(
                small
                    .clone()
                    .with_box_anchor(BoxAnchor::E)
                    .with_offset(-5.0, 0.0),
            )),
        )
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(LabelStyles::new(
                    small
                        .with_box_anchor(BoxAnchor::N)
                        .with_offset(0.0, -60.0),
                ))
                .with_category_names(PERIODS),
        )
        .with_bar_labels(BarLabelStyles::new(
            LabelStyle::default().with_font_size(6.0),
        ))
        .with_bar_label_format(bar_labels, 10.0);

    let title = format!("Mixed signs, bar spacing {bar_spacing}");
    let description = if labelled {
        "Bars grow from the zero crossing; labels sit 10 units beyond each tip."
    } else {
        "The category axis crosses the value axis at zero."
    };
    render_chart(&title, description, spec, &data)
}

fn hidden_value_axis_demo() -> ChartResult<html::HtmlSection> {
    let data = Dataset::single(vec![-1.5, 0.3, 0.5, 1.0, 0.8, 0.7, 0.4, 0.1, 1.0, 0.3]);
    let names = [
        "Bond A", "Bond B", "Bond C", "Bond D", "Bond E", "Bond F", "Bond G", "Bond H", "Bond I",
        "Bond J",
    ];
    let spec = BarChartSpec::vertical(Rect::new(0.0, 0.0, 150.0, 100.0))
        .with_frame_style(None, Some(Brush::Solid(css::LIGHT_GREEN)))
        .with_fills([Brush::Solid(css::STEEL_BLUE)])
        .with_value_axis(fixed_range(-2.0, 2.0, 1.0).with_visible(false))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_ticks(TickExtents::none())
                .with_style(AxisStyle::uniform(StrokeStyle::solid(css::DIM_GRAY, 0.5)))
                .with_labels(LabelStyles::new(
                    LabelStyle::default()
                        .with_box_anchor(BoxAnchor::E)
                        .with_offset(0.0, -2.0)
                        .with_angle(90.0)
                        .with_font_size(6.0),
                ))
                .with_category_names(names),
        );
    render_chart(
        "Hidden value axis",
        "Filled frame, no ticks, vertical category labels.",
        spec,
        &data,
    )
}

fn value_range_demo(values: Vec<f64>, min: f64, max: f64) -> ChartResult<html::HtmlSection> {
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_value_axis(fixed_range(min, max, 15.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(hanging_labels(-5.0))
                .with_category_names(["Ying", "Yang"]),
        );
    render_chart(
        &format!("Value range {min}..{max}"),
        "Bars are clipped to the baseline chosen from the range.",
        spec,
        &Dataset::single(values),
    )
}

fn spacing_demo(spacing: SpacingMode) -> ChartResult<html::HtmlSection> {
    let data = Dataset::new(vec![
        vec![10.0, 60.0],
        vec![20.0, 50.0],
        vec![30.0, 40.0],
        vec![40.0, 30.0],
    ])?;
    let layout = match spacing {
        SpacingMode::Proportional => BarLayoutSpec::default()
            .with_bar_width(40.0)
            .with_group_spacing(20.0)
            .with_bar_spacing(10.0),
        SpacingMode::Absolute => BarLayoutSpec::default()
            .with_spacing(SpacingMode::Absolute)
            .with_bar_width(20.0)
            .with_group_spacing(20.0)
            .with_bar_spacing(10.0),
    };
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_layout(layout)
        .with_value_axis(fixed_range(0.0, 60.0, 15.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(hanging_labels(-5.0))
                .with_category_names(["Ying", "Yang"]),
        );
    render_chart(
        &format!("{spacing:?} spacing"),
        "Four series per group.",
        spec,
        &data,
    )
}

fn horizontal_demo() -> ChartResult<html::HtmlSection> {
    let data = Dataset::new(vec![
        vec![13.0, 5.0, 20.0, 22.0, 37.0, 45.0, 19.0, 4.0],
        vec![14.0, 6.0, 21.0, 23.0, 38.0, 46.0, 20.0, 5.0],
    ])?;
    let spec = framed(BarChartSpec::horizontal(plot_frame()))
        .with_value_axis(fixed_range(0.0, 60.0, 15.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(LabelStyles::for_direction(Direction::Y))
                .with_category_names(MONTHS),
        );
    render_chart(
        "Horizontal bars",
        "Categories run up the y axis.",
        spec,
        &data,
    )
}

fn horizontal_mixed_sign_demo() -> ChartResult<html::HtmlSection> {
    let data = Dataset::new(vec![
        vec![2.4, -5.7, 2.0, 5.0, 9.2],
        vec![0.6, -4.9, -3.0, 4.0, 6.8],
    ])?;
    let small = LabelStyle::default().with_font_size(8.0);
    let spec = framed(BarChartSpec::horizontal(Rect::new(80.0, 50.0, 380.0, 170.0)))
        .with_layout(BarLayoutSpec::default().with_group_spacing(10.0))
        .with_value_axis(
            fixed_range(-15.0, 15.0, 5.0).with_labels(LabelStyles::new(
                small
                    .clone()
                    .with_box_anchor(BoxAnchor::N)
                    .with_offset(0.0, -5.0),
            )),
        )
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(LabelStyles::new(
                    small
                        .with_box_anchor(BoxAnchor::E)
                        .with_offset(-150.0, 0.0),
                ))
                .with_category_names(PERIODS),
        );
    render_chart(
        "Horizontal, mixed signs",
        "The category axis crosses at zero; labels are pushed back to the left edge.",
        spec,
        &data,
    )
}

fn automatic_range_demo() -> ChartResult<html::HtmlSection> {
    let data = Dataset::new(vec![
        vec![123.0, 340.0, 87.0, 410.0],
        vec![150.0, 280.0, 95.0, 390.0],
    ])?;
    let spec = framed(BarChartSpec::vertical(plot_frame()))
        .with_value_axis(ValueAxisSpec::default().with_min(0.0).with_minimum_tick_spacing(20.0))
        .with_category_axis(
            CategoryAxisSpec::default()
                .with_labels(hanging_labels(-5.0))
                .with_category_names(["North", "South", "East", "West"]),
        );
    render_chart(
        "Automatic range",
        "Zero-based axis with the maximum and tick step picked from the data.",
        spec,
        &data,
    )
}
