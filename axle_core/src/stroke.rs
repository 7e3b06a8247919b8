// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styling shared by lines and rectangle outlines.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked paths (axis lines, ticks, bar outlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in drawing-plane units.
    pub stroke_width: f64,
    /// Alternating dash/gap lengths. Empty means a solid stroke.
    pub dash_pattern: Vec<f64>,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash_pattern: Vec::new(),
        }
    }

    /// Sets the dash pattern.
    pub fn with_dash_pattern(mut self, dash_pattern: impl Into<Vec<f64>>) -> Self {
        self.dash_pattern = dash_pattern.into();
        self
    }

    /// Returns `true` if the stroke has no dash pattern.
    pub fn is_solid(&self) -> bool {
        self.dash_pattern.is_empty()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}
