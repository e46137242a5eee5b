use std::ops::Sub;

use num_traits::Zero;

use crate::bearing::{BoundOf, IntervalBearing};
use crate::collapse::{collapse, CollapsedSet};
use crate::interval::ClosedInterval;
use crate::overlap::Overlap;

/// Queries over a collection of interval-bearing elements.
///
/// Implemented for slices, so it applies to `Vec`s and arrays as well.
/// Results that are lists of elements keep the input order.
///
/// ```
/// use closed_interval::{ClosedInterval, IntervalQuery, Overlap};
///
/// let slots = [0..=1, 1..=2, 4..=5];
/// assert_eq!(slots.lowest_bound(), Some(0));
/// assert_eq!(slots.highest_bound(), Some(5));
/// assert!(slots.contains_point(&4));
/// assert!(!slots.contains_point(&3));
///
/// let hits = slots.elements_overlapping(&ClosedInterval::new(2, 4));
/// assert_eq!(hits, vec![(Overlap::PartialUpper, &(1..=2)), (Overlap::PartialLower, &(4..=5))]);
/// ```
pub trait IntervalQuery {
    type Element: IntervalBearing;

    /// Smallest lower bound of all elements, `None` when there are none.
    fn lowest_bound(&self) -> Option<BoundOf<Self::Element>>;

    /// Largest upper bound of all elements, `None` when there are none.
    fn highest_bound(&self) -> Option<BoundOf<Self::Element>>;

    /// Elements whose interval lies entirely within `within`.
    fn elements_contained_completely(
        &self,
        within: &ClosedInterval<BoundOf<Self::Element>>,
    ) -> Vec<&Self::Element>;

    /// Elements sharing at least one value with `with`, tagged with how they
    /// relate to it. `with` is the reference of the classification.
    fn elements_overlapping(
        &self,
        with: &ClosedInterval<BoundOf<Self::Element>>,
    ) -> Vec<(Overlap, &Self::Element)>;

    /// Elements whose interval contains `value`.
    fn elements_containing(&self, value: &BoundOf<Self::Element>) -> Vec<&Self::Element>;

    /// Returns `true` if any element's interval contains `value`.
    fn contains_point(&self, value: &BoundOf<Self::Element>) -> bool;

    /// See [`collapse`].
    fn collapsed(&self) -> CollapsedSet<BoundOf<Self::Element>>;

    /// Measure of the union of all intervals.
    fn collapsed_length(&self) -> BoundOf<Self::Element>
    where
        BoundOf<Self::Element>: Zero + Sub<Output = BoundOf<Self::Element>> + Clone,
    {
        self.collapsed().total_length()
    }
}

impl<T> IntervalQuery for [T]
where
    T: IntervalBearing,
{
    type Element = T;

    fn lowest_bound(&self) -> Option<T::Bound> {
        self.iter()
            .map(|element| element.interval().into_bounds().0)
            .fold(None::<T::Bound>, |lowest, lower| match lowest {
                Some(lowest) if lowest <= lower => Some(lowest),
                _ => Some(lower),
            })
    }

    fn highest_bound(&self) -> Option<T::Bound> {
        self.iter()
            .map(|element| element.interval().into_bounds().1)
            .fold(None::<T::Bound>, |highest, upper| match highest {
                Some(highest) if highest >= upper => Some(highest),
                _ => Some(upper),
            })
    }

    fn elements_contained_completely(&self, within: &ClosedInterval<T::Bound>) -> Vec<&T> {
        self.iter()
            .filter(|element| within.completely_overlaps(&element.interval()))
            .collect()
    }

    fn elements_overlapping(&self, with: &ClosedInterval<T::Bound>) -> Vec<(Overlap, &T)> {
        self.iter()
            .filter_map(|element| match with.overlap(&element.interval()) {
                Overlap::Disjoint => None,
                overlap => Some((overlap, element)),
            })
            .collect()
    }

    fn elements_containing(&self, value: &T::Bound) -> Vec<&T> {
        self.iter()
            .filter(|element| element.interval().contains(value))
            .collect()
    }

    fn contains_point(&self, value: &T::Bound) -> bool {
        self.iter().any(|element| element.interval().contains(value))
    }

    fn collapsed(&self) -> CollapsedSet<T::Bound> {
        collapse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Labeled {
        label: char,
        span: ClosedInterval<i32>,
    }

    impl IntervalBearing for Labeled {
        type Bound = i32;

        fn interval(&self) -> ClosedInterval<i32> {
            self.span
        }
    }

    fn labeled(label: char, lower: i32, upper: i32) -> Labeled {
        Labeled {
            label,
            span: ClosedInterval::new(lower, upper),
        }
    }

    fn labels(found: &[&Labeled]) -> String {
        found.iter().map(|l| l.label).collect()
    }

    #[test]
    fn test_bounds() {
        let ranges = [labeled('a', 2, 3), labeled('b', 4, 5), labeled('c', 1, 4)];
        assert_eq!(ranges.lowest_bound(), Some(1));
        assert_eq!(ranges.highest_bound(), Some(5));

        let none: [Labeled; 0] = [];
        assert_eq!(none.lowest_bound(), None);
        assert_eq!(none.highest_bound(), None);
    }

    #[test]
    fn test_bounds_on_floats() {
        let ranges = vec![(0.5, 2.0), (-1.25, 0.0), (1.0, 3.5)];
        assert_eq!(ranges.lowest_bound(), Some(-1.25));
        assert_eq!(ranges.highest_bound(), Some(3.5));
    }

    #[test]
    fn test_elements_containing() {
        let ranges = [labeled('a', 0, 1), labeled('b', 1, 2), labeled('c', 5, 6)];
        assert_eq!(labels(&ranges.elements_containing(&1)), "ab");
        assert_eq!(labels(&ranges.elements_containing(&6)), "c");
        assert!(ranges.elements_containing(&3).is_empty());
    }

    #[test]
    fn test_contains_point() {
        let ranges = [labeled('a', 0, 1), labeled('b', 5, 6)];
        assert!(ranges.contains_point(&0));
        assert!(ranges.contains_point(&6));
        assert!(!ranges.contains_point(&3));

        let none: [Labeled; 0] = [];
        assert!(!none.contains_point(&0));
    }

    #[test]
    fn test_overlapping_keeps_input_order() {
        let ranges = [labeled('x', 8, 9), labeled('y', 0, 2), labeled('z', 1, 1)];
        let found: Vec<(Overlap, char)> = ranges
            .elements_overlapping(&ClosedInterval::new(1, 8))
            .into_iter()
            .map(|(overlap, element)| (overlap, element.label))
            .collect();
        assert_eq!(
            found,
            vec![
                (Overlap::PartialLower, 'x'),
                (Overlap::PartialUpper, 'y'),
                (Overlap::Complete, 'z'),
            ]
        );
    }

    #[test]
    fn test_collapsed_length() {
        let ranges = vec![labeled('a', 0, 4), labeled('b', 2, 6), labeled('c', 10, 11)];
        assert_eq!(
            ranges.collapsed().into_vec(),
            vec![ClosedInterval::new(0, 6), ClosedInterval::new(10, 11)]
        );
        assert_eq!(ranges.collapsed_length(), 7);
    }
}
