//! Closed interval type and interval arithmetic
//!
//! This module provides the immutable [`Range`] value type representing a
//! closed interval `[lower, upper]`, together with operations that derive
//! new intervals from existing ones (expansion, combination, shifting,
//! scaling). No operation ever mutates an existing range.

use thiserror::Error;

/// Errors raised by range construction and arithmetic
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Lower bound was greater than the upper bound
    #[error("invalid range bounds: lower ({lower}) must be <= upper ({upper})")]
    InvertedBounds { lower: f64, upper: f64 },
    /// Scale factor was negative
    #[error("scale factor must be non-negative, got {factor}")]
    NegativeScaleFactor { factor: f64 },
}

/// An immutable closed interval `[lower, upper]`
///
/// Invariant: `lower <= upper`. NaN bounds are permitted (NaN is neither
/// greater nor less than anything, so the constructor guard never rejects
/// them) and propagate through comparisons per IEEE 754: `contains` and
/// `intersects` on a NaN-bearing range answer false for any query.
///
/// Equality is the derived field-wise comparison, so two ranges with NaN
/// bounds are never equal to each other; use [`Range::is_nan_range`] to
/// test for the all-NaN case explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// Create a new range
    ///
    /// # Errors
    /// Returns [`RangeError::InvertedBounds`] when `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, RangeError> {
        if lower > upper {
            return Err(RangeError::InvertedBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound of the range
    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the range
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Length of the range (`upper - lower`)
    ///
    /// Non-negative for any valid range; NaN when either bound is NaN.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the range
    pub fn central_value(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Check whether `value` lies within the closed interval
    ///
    /// Answers false whenever `value` or either bound is NaN.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check whether the closed interval `[lower, upper]` overlaps this range
    ///
    /// Answers false whenever either query bound or either stored bound
    /// is NaN.
    pub fn intersects(&self, lower: f64, upper: f64) -> bool {
        lower <= self.upper && upper >= self.lower
    }

    /// Check whether both bounds are NaN
    pub fn is_nan_range(&self) -> bool {
        self.lower.is_nan() && self.upper.is_nan()
    }

    /// Return the in-range value closest to `value`
    ///
    /// Values inside the range come back unchanged; values outside are
    /// pinned to the nearer bound.
    pub fn constrain(&self, value: f64) -> f64 {
        if self.contains(value) {
            value
        } else if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            value
        }
    }

    /// Expand a range to include `value`
    ///
    /// An absent range yields the degenerate range `[value, value]`. When
    /// `value` already lies inside, the result equals the input range.
    pub fn expand_to_include(range: Option<Range>, value: f64) -> Range {
        match range {
            None => Range {
                lower: value,
                upper: value,
            },
            Some(r) if value < r.lower => Range {
                lower: value,
                upper: r.upper,
            },
            Some(r) if value > r.upper => Range {
                lower: r.lower,
                upper: value,
            },
            Some(r) => r,
        }
    }

    /// Grow the range by a margin on each end
    ///
    /// Each margin is a fraction of the current length (`0.25` grows that
    /// end by a quarter of the length). If the adjusted bounds cross, the
    /// result collapses to their midpoint.
    pub fn expand(&self, lower_margin: f64, upper_margin: f64) -> Range {
        let length = self.length();
        let mut lower = self.lower - length * lower_margin;
        let mut upper = self.upper + length * upper_margin;
        if lower > upper {
            lower = lower / 2.0 + upper / 2.0;
            upper = lower;
        }
        Range { lower, upper }
    }

    /// Combine two optional ranges into the smallest range containing both
    ///
    /// Either side may be absent, in which case the other side is returned
    /// as-is; two absent sides yield an absent result.
    pub fn combine(range1: Option<Range>, range2: Option<Range>) -> Option<Range> {
        match (range1, range2) {
            (None, r2) => r2,
            (r1, None) => r1,
            (Some(r1), Some(r2)) => Some(Range {
                lower: r1.lower.min(r2.lower),
                upper: r1.upper.max(r2.upper),
            }),
        }
    }

    /// Combine two optional ranges, treating all-NaN ranges as absent
    ///
    /// A side whose bounds are both NaN counts as absent. When both sides
    /// are present the merge uses NaN-skipping min/max: a NaN bound on one
    /// side defers to the other side's bound, so a partially-NaN range
    /// still participates with its finite bound. A merge whose result is
    /// all-NaN collapses to an absent result.
    pub fn combine_ignoring_nan(range1: Option<Range>, range2: Option<Range>) -> Option<Range> {
        match (range1, range2) {
            (None, None) => None,
            (None, Some(r2)) => (!r2.is_nan_range()).then_some(r2),
            (Some(r1), None) => (!r1.is_nan_range()).then_some(r1),
            (Some(r1), Some(r2)) => {
                let lower = min_ignore_nan(r1.lower, r2.lower);
                let upper = max_ignore_nan(r1.upper, r2.upper);
                if lower.is_nan() && upper.is_nan() {
                    None
                } else {
                    Some(Range { lower, upper })
                }
            }
        }
    }

    /// Shift the range by `delta`, without allowing zero crossing
    ///
    /// Each bound moves by `delta` independently, but a bound that would
    /// cross zero is clamped to exactly 0.0 (a positive bound never goes
    /// negative and vice versa). A bound that is exactly zero moves
    /// freely. Shifting a fully negative range far enough to the right
    /// therefore collapses it to `[0, 0]`.
    pub fn shift(&self, delta: f64) -> Range {
        Range {
            lower: shift_bound_keeping_sign(self.lower, delta),
            upper: shift_bound_keeping_sign(self.upper, delta),
        }
    }

    /// Shift the range by `delta`, allowing bounds to cross zero
    pub fn shift_allowing_zero_crossing(&self, delta: f64) -> Range {
        Range {
            lower: self.lower + delta,
            upper: self.upper + delta,
        }
    }

    /// Scale the range by a non-negative factor
    ///
    /// # Errors
    /// Returns [`RangeError::NegativeScaleFactor`] when `factor < 0`.
    pub fn scale(&self, factor: f64) -> Result<Range, RangeError> {
        if factor < 0.0 {
            return Err(RangeError::NegativeScaleFactor { factor });
        }
        Ok(Range {
            lower: self.lower * factor,
            upper: self.upper * factor,
        })
    }
}

impl std::fmt::Display for Range {
    /// Format as `Range[<lower>,<upper>]`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Range[{},{}]",
            format_bound(self.lower),
            format_bound(self.upper)
        )
    }
}

/// Render a bound in shortest round-trippable decimal form
///
/// Integral finite values keep a trailing `.0` (`-50.0`, not `-50`), NaN
/// renders as `NaN` and infinities as `Infinity` / `-Infinity`.
fn format_bound(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    let mut s = format!("{}", value);
    if !s.contains('.') && !s.contains('e') && !s.contains('E') {
        s.push_str(".0");
    }
    s
}

/// Shift a single bound, clamping at zero when the shift changes its sign
fn shift_bound_keeping_sign(value: f64, delta: f64) -> f64 {
    if value > 0.0 {
        (value + delta).max(0.0)
    } else if value < 0.0 {
        (value + delta).min(0.0)
    } else {
        value + delta
    }
}

/// Minimum of two values where a NaN operand defers to the other
fn min_ignore_nan(d1: f64, d2: f64) -> f64 {
    if d1.is_nan() {
        d2
    } else if d2.is_nan() {
        d1
    } else {
        d1.min(d2)
    }
}

/// Maximum of two values where a NaN operand defers to the other
fn max_ignore_nan(d1: f64, d2: f64) -> f64 {
    if d1.is_nan() {
        d2
    } else if d2.is_nan() {
        d1
    } else {
        d1.max(d2)
    }
}
