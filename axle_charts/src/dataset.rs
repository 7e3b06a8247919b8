// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular multi-series datasets.

extern crate alloc;

use alloc::vec::Vec;

use crate::{ChartError, ChartResult};

/// An ordered list of equally long numeric series.
///
/// Series order is draw order (and fill order); the position inside a series is the
/// category index. Empty datasets and zero-length series are valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    series: Vec<Vec<f64>>,
}

impl Dataset {
    /// Creates a dataset, checking that every series has the first series' length.
    pub fn new(series: Vec<Vec<f64>>) -> ChartResult<Self> {
        let expected = series.first().map_or(0, Vec::len);
        for (i, s) in series.iter().enumerate().skip(1) {
            if s.len() != expected {
                return Err(ChartError::RaggedSeries {
                    series: i,
                    expected,
                    found: s.len(),
                });
            }
        }
        Ok(Self { series })
    }

    /// Creates a dataset holding a single series.
    pub fn single(values: Vec<f64>) -> Self {
        Self {
            series: alloc::vec![values],
        }
    }

    /// Number of series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Number of values per series (0 for a dataset without series).
    pub fn row_len(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the dataset holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.row_len() == 0
    }

    /// Returns series `index`, if present.
    pub fn series(&self, index: usize) -> Option<&[f64]> {
        self.series.get(index).map(Vec::as_slice)
    }

    /// Returns the value at (`series`, `category`), if present.
    pub fn get(&self, series: usize, category: usize) -> Option<f64> {
        self.series.get(series)?.get(category).copied()
    }

    /// Iterates over the series in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.series.iter().map(Vec::as_slice)
    }

    /// Observed `(min, max)` over all finite values, or `None` if there are none.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.series.iter().flatten().copied() {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}
