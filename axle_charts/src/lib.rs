// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axes and grouped bar layout for `axle_core`.
//!
//! This crate computes chart geometry and hands it to `axle_core` as groups of
//! lines, rectangles and labels:
//! - **Axes** (category and value, each horizontal or vertical) own a position and
//!   derive buckets, ranges, "nice" tick steps and tick labels from a [`Dataset`].
//! - **Joins** position one axis relative to a complementary axis.
//! - **Bar layout** turns a configured pair of axes and a dataset into one rectangle
//!   per (series, category) cell, honouring a shared baseline for mixed-sign data.
//! - **Bar charts** tie the above together inside a frame.
//!
//! The drawing plane is y-up. Text measurement and rendering are out of scope; labels
//! carry an origin, a box-anchor hint and an unshaped string.
//!
//! A typical flow is *spec → new → position → configure → draw*:
//!
//! ```
//! use axle_charts::{CategoryAxis, CategoryAxisSpec, ChartAxis, Dataset, Direction};
//!
//! let data = Dataset::new(vec![vec![10.0, 20.0, 30.0, 40.0, 50.0]]).unwrap();
//! let mut axis = CategoryAxis::new(Direction::X, CategoryAxisSpec::default());
//! axis.set_position((50.0, 50.0), 150.0);
//! axis.configure(&data).unwrap();
//! assert_eq!(axis.scale(2), (110.0, 30.0));
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
mod bar_chart;
mod bar_layout;
mod category_axis;
mod dataset;
mod error;
// Unit tests link `std`, whose inherent float methods take precedence.
#[cfg(all(not(feature = "std"), not(test)))]
mod float;
mod format;
mod join;
mod tick;
mod value_axis;

pub use axis::{AxisPosition, AxisStyle, ChartAxis, Direction, LabelStyles, TickExtents};
pub use bar_chart::{BarChart, BarChartSpec, BarLabelStyles};
pub use bar_layout::{BarGeometry, BarLayout, BarLayoutSpec, SpacingMode};
pub use category_axis::{CategoryAxis, CategoryAxisSpec};
pub use dataset::Dataset;
pub use error::{ChartError, ChartResult};
pub use format::LabelFormat;
pub use join::{JoinMode, join};
pub use tick::next_round_number;
pub use value_axis::{Bound, ValueAxis, ValueAxisSpec, ValueAxisState};
