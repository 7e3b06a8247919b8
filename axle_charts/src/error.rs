// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for axis configuration, axis joins and bar layout.
//!
//! Every failure is local and synchronous: it is reported to the immediate caller and
//! nothing is retried. Components build their output groups locally and only hand
//! them back on success, so a failed draw never leaves half a chart behind.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::{Bound, Direction};

/// Convenience alias for results produced by this crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while positioning, configuring or drawing chart components.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartError {
    /// A value was scaled (or drawn) before the axis was configured.
    #[error("axis cannot scale values before it is configured")]
    NotConfigured,

    /// The axis was configured, but neither the data nor the explicit bounds gave it a range.
    #[error("axis range could not be resolved: no data and no explicit {missing} bound")]
    UnresolvedRange {
        /// Which bound is missing.
        missing: Bound,
    },

    /// The resolved range has zero (or negative) width.
    #[error("axis range [{min}, {max}] is empty; max must be greater than min")]
    EmptyRange {
        /// Resolved minimum.
        min: f64,
        /// Resolved maximum.
        max: f64,
    },

    /// The tick step is not a positive finite number.
    #[error("tick step {step} must be positive and finite")]
    InvalidStep {
        /// The rejected step.
        step: f64,
    },

    /// An axis was joined to (or laid out against) an axis of the same direction.
    #[error("cannot connect a {axis:?} axis to a {other:?} axis; directions must differ")]
    FlavourMismatch {
        /// Direction of the axis being positioned.
        axis: Direction,
        /// Direction of the reference axis.
        other: Direction,
    },

    /// A fixed join mode was given both or neither of a data value and a literal position.
    #[error("fixed join modes need exactly one of `value` or `points`")]
    JoinReference,

    /// The number of category names does not match the number of buckets.
    #[error("expected {expected} category names but found {found}")]
    CategoryNameCount {
        /// Number of buckets.
        expected: usize,
        /// Number of names supplied.
        found: usize,
    },

    /// A dataset series does not have the same length as the first series.
    #[error("series {series} has {found} values but the first series has {expected}")]
    RaggedSeries {
        /// Index of the offending series.
        series: usize,
        /// Length of the first series.
        expected: usize,
        /// Length of the offending series.
        found: usize,
    },

    /// The notional group width of a proportional bar layout is zero.
    #[error("bar group has zero notional width; bar width and spacings cannot all be zero")]
    ZeroGroupWidth,

    /// A label format pattern could not be parsed.
    #[error("invalid label format pattern {pattern:?}: {reason}")]
    Format {
        /// The rejected pattern.
        pattern: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}
