// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for tick selection and value-axis scaling.

use axle_charts::{
    BarLayout, BarLayoutSpec, CategoryAxis, CategoryAxisSpec, ChartAxis, Dataset, Direction,
    ValueAxis, ValueAxisSpec, next_round_number,
};
use proptest::prelude::*;

fn is_round(v: f64) -> bool {
    let decade = v.log10().floor();
    let mantissa = v / 10_f64.powf(decade);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .any(|m| (mantissa - m).abs() <= 1e-9 * m)
}

proptest! {
    #[test]
    fn round_number_is_at_least_its_input(r in 1e-6_f64..1e9) {
        let n = next_round_number(r);
        prop_assert!(n >= r, "{n} < {r}");
        prop_assert!(n <= r * 5.0, "{n} is more than one rung above {r}");
        prop_assert!(is_round(n), "{n} is not a round number");
    }

    #[test]
    fn round_number_is_scale_invariant(r in 1e-4_f64..1e6) {
        let a = next_round_number(r);
        let b = next_round_number(r * 10.0) / 10.0;
        prop_assert!((a - b).abs() <= 1e-9 * a, "{a} != {b}");
    }

    #[test]
    fn ticks_stay_inside_the_range(
        min in -1e4_f64..1e4,
        span in 1e-2_f64..1e5,
        length in 10.0_f64..2000.0,
    ) {
        let max = min + span;
        let data = Dataset::single(vec![min, max]);
        let mut axis = ValueAxis::new(Direction::Y, ValueAxisSpec::default());
        axis.set_position((0.0, 0.0), length);
        axis.configure(&data).unwrap();

        let step = axis.step().unwrap();
        let slack = step * 1e-6;
        let ticks = axis.tick_values();
        prop_assert!(!ticks.is_empty() || step > span);
        for pair in ticks.windows(2) {
            prop_assert!((pair[1] - pair[0] - step).abs() <= slack);
        }
        for &t in ticks {
            prop_assert!(t >= min - slack && t <= max + slack, "{t} outside [{min}, {max}]");
        }
        // Automatic spacing keeps ticks at least the minimum spacing apart.
        prop_assert!(step * length / span >= 10.0 - 1e-6);
    }

    #[test]
    fn scale_maps_bounds_onto_the_axis_ends(
        min in -1e4_f64..1e4,
        span in 1e-2_f64..1e5,
        x in -500.0_f64..500.0,
        length in 10.0_f64..2000.0,
    ) {
        let spec = ValueAxisSpec::default().with_min(min).with_max(min + span);
        let mut axis = ValueAxis::new(Direction::X, spec);
        axis.set_position((x, 0.0), length);
        axis.configure(&Dataset::default()).unwrap();
        let lo = axis.scale(min).unwrap();
        let hi = axis.scale(min + span).unwrap();
        prop_assert!((lo - x).abs() <= 1e-9 * length);
        prop_assert!((hi - (x + length)).abs() <= 1e-6 * length);
    }

    #[test]
    fn proportional_groups_never_leave_their_bucket(
        series in 1_usize..6,
        buckets in 1_usize..12,
        bar_width in 0.5_f64..20.0,
        bar_spacing in 0.0_f64..5.0,
        group_spacing in 0.0_f64..10.0,
    ) {
        let data = Dataset::new(vec![vec![1.0; buckets]; series]).unwrap();
        let mut cat = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
        cat.set_position((0.0, 0.0), 300.0);
        cat.configure(&data).unwrap();
        let mut val = ValueAxis::new(Direction::Y, ValueAxisSpec::default().with_min(0.0));
        val.set_position((0.0, 0.0), 100.0);
        val.configure(&data).unwrap();

        let spec = BarLayoutSpec::default()
            .with_bar_width(bar_width)
            .with_bar_spacing(bar_spacing)
            .with_group_spacing(group_spacing);
        let layout = BarLayout::compute(&data, &cat, &val, &spec).unwrap();
        prop_assert_eq!(layout.len(), series * buckets);
        for bar in &layout.bars {
            let (start, width) = cat.scale(bar.category);
            prop_assert!(bar.x >= start - 1e-9);
            prop_assert!(bar.x + bar.width <= start + width + 1e-9);
        }
    }
}
