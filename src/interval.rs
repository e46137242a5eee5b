use std::cmp::Ordering;
use std::fmt;
use std::ops::{RangeInclusive, Sub};

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::IntervalError;

/// A closed interval `[lower, upper]`, both endpoints included.
///
/// Intervals are plain values: they are compared and ordered structurally,
/// lower bound first, then upper bound.
///
/// # Invariants
/// `lower <= upper`. [`ClosedInterval::new`] only checks this in debug builds;
/// use [`ClosedInterval::try_new`] when the bounds come from untrusted input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<B> {
    lower: B,
    upper: B,
}

impl<B> ClosedInterval<B> {
    /// Creates the interval `[lower, upper]`.
    ///
    /// Building an interval with `lower > upper` is a caller error. Release
    /// builds do not detect it and every operation of this crate then gives
    /// unspecified (but memory-safe) results.
    ///
    /// ```
    /// use closed_interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(2, 7);
    /// assert_eq!(*iv.lower_bound(), 2);
    /// assert_eq!(*iv.upper_bound(), 7);
    /// ```
    #[inline]
    pub fn new(lower: B, upper: B) -> Self
    where
        B: PartialOrd,
    {
        debug_assert!(
            lower <= upper,
            "Invalid interval: lower bound must be less than or equal to upper bound"
        );
        Self { lower, upper }
    }

    /// Creates the interval `[lower, upper]`, rejecting inverted or
    /// incomparable bounds.
    ///
    /// ```
    /// use closed_interval::{ClosedInterval, IntervalError};
    ///
    /// assert!(ClosedInterval::try_new(1, 1).is_ok());
    /// assert_eq!(ClosedInterval::try_new(3, 1), Err(IntervalError::Inverted));
    /// assert_eq!(ClosedInterval::try_new(0.0, f64::NAN), Err(IntervalError::Unordered));
    /// ```
    pub fn try_new(lower: B, upper: B) -> Result<Self, IntervalError>
    where
        B: PartialOrd,
    {
        match lower.partial_cmp(&upper) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { lower, upper }),
            Some(Ordering::Greater) => Err(IntervalError::Inverted),
            None => Err(IntervalError::Unordered),
        }
    }

    #[inline]
    pub fn lower_bound(&self) -> &B {
        &self.lower
    }

    #[inline]
    pub fn upper_bound(&self) -> &B {
        &self.upper
    }

    /// Consumes the interval, returning `(lower, upper)`.
    #[inline]
    pub fn into_bounds(self) -> (B, B) {
        (self.lower, self.upper)
    }

    /// Returns `true` if `lower <= value <= upper`.
    #[inline]
    pub fn contains(&self, value: &B) -> bool
    where
        B: PartialOrd,
    {
        self.lower <= *value && *value <= self.upper
    }

    /// Returns `upper - lower`, which is zero for a single-point interval.
    ///
    /// Overflow follows the bound type's own subtraction.
    #[inline]
    pub fn length(&self) -> B
    where
        B: Sub<Output = B> + Clone,
    {
        self.upper.clone() - self.lower.clone()
    }

    /// Position of `value` inside the interval as a fraction, clamped into `[0, 1]`.
    ///
    /// The length is not guarded against zero: on a single-point interval the
    /// division yields NaN (returned as is) or an infinity (clamped to 0 or 1).
    ///
    /// ```
    /// use closed_interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(10.0, 20.0);
    /// assert_eq!(iv.progress(15.0), 0.5);
    /// assert_eq!(iv.progress(5.0), 0.0);
    /// assert_eq!(iv.progress(25.0), 1.0);
    /// ```
    pub fn progress(&self, value: B) -> B
    where
        B: Float,
    {
        let result = (value - self.lower) / self.length();
        if result < B::zero() {
            B::zero()
        } else if result > B::one() {
            B::one()
        } else {
            result
        }
    }
}

impl<B> fmt::Display for ClosedInterval<B>
where
    B: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<B> From<RangeInclusive<B>> for ClosedInterval<B>
where
    B: PartialOrd,
{
    #[inline]
    fn from(range: RangeInclusive<B>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl<B> From<ClosedInterval<B>> for RangeInclusive<B> {
    #[inline]
    fn from(interval: ClosedInterval<B>) -> Self {
        interval.lower..=interval.upper
    }
}

impl<B> TryFrom<(B, B)> for ClosedInterval<B>
where
    B: PartialOrd,
{
    type Error = IntervalError;

    fn try_from((lower, upper): (B, B)) -> Result<Self, Self::Error> {
        Self::try_new(lower, upper)
    }
}
