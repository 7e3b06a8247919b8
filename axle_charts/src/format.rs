// Copyright 2025 the Axle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick and bar label formatting.
//!
//! Labels are formatted either with a printf-style pattern containing exactly one value
//! conversion (`"%d"`, `"%.2f"`, `"%+d%%"`, ...) or with an arbitrary callable. Patterns
//! are parsed once per draw, before any label is produced.
//!
//! Supported conversions: `d`/`i` (truncates toward zero), `f`/`F`, `e`/`E`, `s`
//! (the shortest round-trip form, always with a decimal point or an exponent, so `15.0`
//! prints as `15.0` and `1e20` as `1e+20`), plus the `%%` escape. Flags `-`, `+`, space and `0`,
//! a field width and a `.precision` are honoured.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write;

#[cfg(all(not(feature = "std"), not(test)))]
use crate::float::FloatExt;

use crate::{ChartError, ChartResult};

/// How a numeric value becomes label text.
#[derive(Clone)]
pub enum LabelFormat {
    /// A printf-style pattern with exactly one value conversion.
    Pattern(String),
    /// An arbitrary formatting function.
    Callable(Arc<dyn Fn(f64) -> String>),
}

impl core::fmt::Debug for LabelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Self::Callable(_) => f.debug_tuple("Callable").finish_non_exhaustive(),
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::Pattern(String::from("%d"))
    }
}

impl From<&str> for LabelFormat {
    fn from(value: &str) -> Self {
        Self::Pattern(value.into())
    }
}

impl From<String> for LabelFormat {
    fn from(value: String) -> Self {
        Self::Pattern(value)
    }
}

impl LabelFormat {
    /// Creates a pattern format.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Creates a callable format.
    pub fn callable(f: impl Fn(f64) -> String + 'static) -> Self {
        Self::Callable(Arc::new(f))
    }

    /// Parses the format once so it can be applied to many values.
    pub(crate) fn resolve(&self) -> ChartResult<ResolvedFormat<'_>> {
        match self {
            Self::Pattern(p) => Ok(ResolvedFormat::Pattern(parse(p)?)),
            Self::Callable(f) => Ok(ResolvedFormat::Callable(f.as_ref())),
        }
    }

    /// Formats a single value.
    pub fn format(&self, value: f64) -> ChartResult<String> {
        Ok(self.resolve()?.format(value))
    }
}

/// A [`LabelFormat`] ready to format values.
pub(crate) enum ResolvedFormat<'a> {
    /// A parsed pattern.
    Pattern(Vec<Piece>),
    /// A borrowed formatting function.
    Callable(&'a dyn Fn(f64) -> String),
}

impl core::fmt::Debug for ResolvedFormat<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Self::Callable(_) => f.debug_tuple("Callable").finish_non_exhaustive(),
        }
    }
}

impl ResolvedFormat<'_> {
    /// Formats `value`.
    pub(crate) fn format(&self, value: f64) -> String {
        match self {
            Self::Callable(f) => f(value),
            Self::Pattern(pieces) => {
                let mut out = String::new();
                for piece in pieces {
                    match piece {
                        Piece::Literal(s) => out.push_str(s),
                        Piece::Value(conv) => conv.write(&mut out, value),
                    }
                }
                out
            }
        }
    }
}

/// One parsed piece of a pattern.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Piece {
    /// Text copied verbatim (with `%%` already unescaped).
    Literal(String),
    /// The value conversion.
    Value(Conversion),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Int,
    Fixed,
    Exp { upper: bool },
    Str,
}

/// A parsed `%...` conversion.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Conversion {
    kind: Kind,
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
}

impl Conversion {
    fn write(&self, out: &mut String, value: f64) {
        let (negative, body) = match self.kind {
            Kind::Str => {
                let mut s = shortest(value);
                if let Some(p) = self.precision {
                    s = s.chars().take(p).collect();
                }
                pad(out, "", &s, self.width, self.left, false);
                return;
            }
            _ if !value.is_finite() => {
                let s = if value.is_nan() {
                    "nan"
                } else if value > 0.0 {
                    "inf"
                } else {
                    "-inf"
                };
                pad(out, "", s, self.width, self.left, false);
                return;
            }
            Kind::Int => {
                let t = value.trunc();
                let mut digits = String::new();
                let _ = write!(digits, "{:.0}", t.abs());
                if let Some(p) = self.precision {
                    while digits.len() < p {
                        digits.insert(0, '0');
                    }
                }
                (t < 0.0, digits)
            }
            Kind::Fixed => {
                let mut digits = String::new();
                let _ = write!(digits, "{:.*}", self.precision.unwrap_or(6), value.abs());
                (value.is_sign_negative(), digits)
            }
            Kind::Exp { upper } => (
                value.is_sign_negative(),
                exponent(value.abs(), self.precision.unwrap_or(6), upper),
            ),
        };
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        pad(out, sign, &body, self.width, self.left, self.zero);
    }
}

/// Writes `sign` + `body` into `out`, padded to `width`.
fn pad(out: &mut String, sign: &str, body: &str, width: usize, left: bool, zero: bool) {
    let len = sign.len() + body.chars().count();
    let fill = width.saturating_sub(len);
    if left {
        out.push_str(sign);
        out.push_str(body);
        out.extend(core::iter::repeat_n(' ', fill));
    } else if zero {
        out.push_str(sign);
        out.extend(core::iter::repeat_n('0', fill));
        out.push_str(body);
    } else {
        out.extend(core::iter::repeat_n(' ', fill));
        out.push_str(sign);
        out.push_str(body);
    }
}

/// Shortest round-trip text for `value`.
///
/// Magnitudes below `1e-4` or from `1e16` up switch to scientific notation; integral
/// values keep a trailing `.0`.
fn shortest(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let mut raw = String::new();
        let _ = write!(raw, "{value:e}");
        let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let mut out = String::from(mantissa);
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        let _ = write!(out, "{:02}", exp.unsigned_abs());
        return out;
    }
    let mut out = value.to_string();
    if value == value.trunc() {
        out.push_str(".0");
    }
    out
}

/// Scientific notation with a signed, at least two-digit exponent (`1.500000e+01`).
fn exponent(value: f64, precision: usize, upper: bool) -> String {
    let mut raw = String::new();
    let _ = write!(raw, "{value:.precision$e}");
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let mut out = String::from(mantissa);
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exp < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exp.unsigned_abs());
    out
}

fn parse(pattern: &str) -> ChartResult<Vec<Piece>> {
    let err = |reason: &'static str| ChartError::Format {
        pattern: pattern.into(),
        reason,
    };

    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut seen_value = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }

        let mut conv = Conversion {
            kind: Kind::Int,
            left: false,
            plus: false,
            space: false,
            zero: false,
            width: 0,
            precision: None,
        };
        while let Some(&f) = chars.peek() {
            match f {
                '-' => conv.left = true,
                '+' => conv.plus = true,
                ' ' => conv.space = true,
                '0' => conv.zero = true,
                _ => break,
            }
            chars.next();
        }
        conv.width = digits(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            conv.precision = Some(digits(&mut chars));
        }
        conv.kind = match chars.next() {
            Some('d' | 'i') => Kind::Int,
            Some('f' | 'F') => Kind::Fixed,
            Some('e') => Kind::Exp { upper: false },
            Some('E') => Kind::Exp { upper: true },
            Some('s') => Kind::Str,
            Some(_) => return Err(err("unsupported conversion")),
            None => return Err(err("pattern ends inside a conversion")),
        };
        if seen_value {
            return Err(err("pattern has more than one conversion"));
        }
        seen_value = true;
        if !literal.is_empty() {
            pieces.push(Piece::Literal(core::mem::take(&mut literal)));
        }
        pieces.push(Piece::Value(conv));
    }

    if !seen_value {
        return Err(err("pattern has no conversion"));
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

fn digits(chars: &mut core::iter::Peekable<core::str::Chars<'_>>) -> usize {
    let mut n = 0_usize;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = n.saturating_mul(10).saturating_add(d as usize);
        chars.next();
    }
    n
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;

    use super::*;

    fn fmt(pattern: &str, v: f64) -> String {
        LabelFormat::pattern(pattern).format(v).unwrap()
    }

    #[test]
    fn integer_conversion_truncates_toward_zero() {
        assert_eq!(fmt("%d", 42.9), "42");
        assert_eq!(fmt("%d", -42.9), "-42");
        assert_eq!(fmt("%d", -0.4), "0");
        assert_eq!(fmt("%i", 7.0), "7");
    }

    #[test]
    fn fixed_and_exponent_conversions() {
        assert_eq!(fmt("%.2f", 3.14159), "3.14");
        assert_eq!(fmt("%f", 1.5), "1.500000");
        assert_eq!(fmt("%.1e", 15.0), "1.5e+01");
        assert_eq!(fmt("%.2E", 0.00123), "1.23E-03");
    }

    #[test]
    fn flags_width_and_literals() {
        assert_eq!(fmt("%5d", 42.0), "   42");
        assert_eq!(fmt("%-5d|", 42.0), "42   |");
        assert_eq!(fmt("%05d", -42.0), "-0042");
        assert_eq!(fmt("%+d%%", 12.0), "+12%");
        assert_eq!(fmt("% d", 3.0), " 3");
        assert_eq!(fmt("$%.3d", 5.0), "$005");
        assert_eq!(fmt("%s units", 2.5), "2.5 units");
    }

    #[test]
    fn string_conversion_keeps_float_form() {
        assert_eq!(fmt("%s", 15.0), "15.0");
        assert_eq!(fmt("%s", -0.0), "-0.0");
        assert_eq!(fmt("%s", 0.1), "0.1");
        assert_eq!(fmt("%s", 1e20), "1e+20");
        assert_eq!(fmt("%s", 1.5e-5), "1.5e-05");
        assert_eq!(fmt("%.3s", 15.0), "15.");
    }

    #[test]
    fn non_finite_values_are_spelled_out() {
        assert_eq!(fmt("%d", f64::NAN), "nan");
        assert_eq!(fmt("%.1f", f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        for (pattern, reason) in [
            ("no value", "pattern has no conversion"),
            ("%d and %d", "pattern has more than one conversion"),
            ("%q", "unsupported conversion"),
            ("%5", "pattern ends inside a conversion"),
        ] {
            let err = LabelFormat::pattern(pattern).resolve().unwrap_err();
            assert_eq!(
                err,
                ChartError::Format {
                    pattern: pattern.into(),
                    reason
                },
                "pattern {pattern:?}"
            );
        }
    }

    #[test]
    fn callable_formats_bypass_parsing() {
        let f = LabelFormat::callable(|v| format!("<{v}>"));
        assert_eq!(f.format(3.0).unwrap(), "<3>");
        assert_eq!(format!("{f:?}"), "Callable(..)");
    }

    #[test]
    fn resolved_pattern_is_reusable() {
        let f = LabelFormat::default();
        let resolved = f.resolve().unwrap();
        assert_eq!(resolved.format(10.0), "10");
        assert_eq!(resolved.format(25.0), "25");
    }
}
