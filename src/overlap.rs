use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::interval::ClosedInterval;

/// How a tested interval relates to a reference interval.
///
/// Produced by [`ClosedInterval::overlap`], called on the reference.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The tested interval lies inside the reference (or equals it).
    Complete,
    /// No value is shared. Touching at a single bound is not disjoint.
    Disjoint,
    /// The tested interval starts inside the reference and runs past its upper bound.
    PartialLower,
    /// The tested interval starts below the reference and reaches into it.
    PartialUpper,
}

impl Overlap {
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self, Overlap::PartialLower | Overlap::PartialUpper)
    }
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Overlap::Complete => "complete",
            Overlap::Disjoint => "none",
            Overlap::PartialLower => "lower",
            Overlap::PartialUpper => "upper",
        };
        f.write_str(s)
    }
}

impl<B> ClosedInterval<B>
where
    B: PartialOrd,
{
    /// Returns `true` if `other` lies entirely within `self`, bounds included.
    ///
    /// ```
    /// use closed_interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::new(0, 5).completely_overlaps(&ClosedInterval::new(0, 3)));
    /// assert!(ClosedInterval::new(1, 1).completely_overlaps(&ClosedInterval::new(1, 1)));
    /// assert!(!ClosedInterval::new(0, 2).completely_overlaps(&ClosedInterval::new(1, 3)));
    /// ```
    #[inline]
    pub fn completely_overlaps(&self, other: &Self) -> bool {
        other.lower_bound() >= self.lower_bound() && other.upper_bound() <= self.upper_bound()
    }

    /// Returns `true` if `self` and `other` share no value at all.
    #[inline]
    pub fn has_no_shared_values(&self, other: &Self) -> bool {
        other.upper_bound() < self.lower_bound() || other.lower_bound() > self.upper_bound()
    }

    /// Classifies `other` against `self` as the reference interval.
    ///
    /// ```
    /// use closed_interval::{ClosedInterval, Overlap};
    ///
    /// let reference = ClosedInterval::new(3, 4);
    /// assert_eq!(reference.overlap(&ClosedInterval::new(3, 4)), Overlap::Complete);
    /// assert_eq!(reference.overlap(&ClosedInterval::new(4, 5)), Overlap::PartialLower);
    /// assert_eq!(reference.overlap(&ClosedInterval::new(2, 3)), Overlap::PartialUpper);
    /// assert_eq!(reference.overlap(&ClosedInterval::new(0, 1)), Overlap::Disjoint);
    /// ```
    pub fn overlap(&self, other: &Self) -> Overlap {
        if self.completely_overlaps(other) {
            Overlap::Complete
        } else if self.has_no_shared_values(other) {
            Overlap::Disjoint
        } else if other.lower_bound() >= self.lower_bound() {
            Overlap::PartialLower
        } else {
            Overlap::PartialUpper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lower: i32, upper: i32) -> ClosedInterval<i32> {
        ClosedInterval::new(lower, upper)
    }

    #[test]
    fn test_completely_overlaps() {
        assert!(iv(0, 5).completely_overlaps(&iv(0, 3)));
        assert!(iv(0, 5).completely_overlaps(&iv(0, 5)));
        assert!(!iv(0, 2).completely_overlaps(&iv(1, 3)));
        assert!(!iv(2, 5).completely_overlaps(&iv(1, 3)));
        assert!(iv(1, 1).completely_overlaps(&iv(1, 1)));
    }

    #[test]
    fn test_has_no_shared_values() {
        assert!(!iv(1, 1).has_no_shared_values(&iv(1, 1)));
        assert!(iv(0, 1).has_no_shared_values(&iv(10, 20)));
        assert!(iv(10, 20).has_no_shared_values(&iv(0, 1)));
        // Touching bounds share a value.
        assert!(!iv(0, 1).has_no_shared_values(&iv(1, 2)));
        assert!(!iv(1, 2).has_no_shared_values(&iv(0, 1)));
    }

    #[test]
    fn test_overlap_classification() {
        let reference = iv(2, 5);
        assert_eq!(reference.overlap(&iv(3, 4)), Overlap::Complete);
        assert_eq!(reference.overlap(&iv(2, 5)), Overlap::Complete);
        assert_eq!(reference.overlap(&iv(6, 9)), Overlap::Disjoint);
        assert_eq!(reference.overlap(&iv(-3, 1)), Overlap::Disjoint);
        assert_eq!(reference.overlap(&iv(5, 7)), Overlap::PartialLower);
        assert_eq!(reference.overlap(&iv(3, 6)), Overlap::PartialLower);
        assert_eq!(reference.overlap(&iv(1, 2)), Overlap::PartialUpper);
        assert_eq!(reference.overlap(&iv(0, 3)), Overlap::PartialUpper);
        // Starts below and runs past the upper bound.
        assert_eq!(reference.overlap(&iv(0, 9)), Overlap::PartialUpper);
    }

    #[test]
    fn test_overlap_on_floats() {
        let reference = ClosedInterval::new(0.5, 1.5);
        assert_eq!(
            reference.overlap(&ClosedInterval::new(1.5, 2.0)),
            Overlap::PartialLower
        );
        assert_eq!(
            reference.overlap(&ClosedInterval::new(1.5001, 2.0)),
            Overlap::Disjoint
        );
    }

    #[test]
    fn test_is_partial() {
        assert!(Overlap::PartialLower.is_partial());
        assert!(Overlap::PartialUpper.is_partial());
        assert!(!Overlap::Complete.is_partial());
        assert!(!Overlap::Disjoint.is_partial());
    }

    #[test]
    fn test_display() {
        assert_eq!(Overlap::Complete.to_string(), "complete");
        assert_eq!(Overlap::Disjoint.to_string(), "none");
        assert_eq!(Overlap::PartialLower.to_string(), "lower");
        assert_eq!(Overlap::PartialUpper.to_string(), "upper");
    }
}
