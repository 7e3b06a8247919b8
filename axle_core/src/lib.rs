// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained drawing primitives for `axle` chart components.
//!
//! Chart components never paint anything themselves. They compute geometry and
//! hand it to this layer as a tree of [`Group`]s holding:
//! - [`LineShape`]s (axis lines, tick marks),
//! - [`RectShape`]s (bars, chart frames),
//! - [`Label`]s (an origin point, a string, and a [`BoxAnchor`] hint).
//!
//! Coordinates live in a y-up drawing plane (page coordinates). Renderers that
//! target a y-down surface flip the y axis themselves.
//!
//! Text measurement is out of scope; [`BoxAnchor::box_origin`] resolves a label
//! box once a caller has measured the text.

#![no_std]

extern crate alloc;

mod group;
mod label;
mod stroke;

pub use group::{Group, LineShape, Primitive, RectShape};
pub use label::{BoxAnchor, Label, LabelStyle};
pub use stroke::StrokeStyle;
