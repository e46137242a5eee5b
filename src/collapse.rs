use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;
use std::slice;
use std::vec;

use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bearing::{BoundOf, IntervalBearing};
use crate::interval::ClosedInterval;

/// The minimal set of disjoint intervals covering the same points as the
/// intervals it was collapsed from.
///
/// Entries are sorted by lower bound and no two of them overlap or touch.
/// Only [`collapse`] builds one.
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollapsedSet<B> {
    intervals: Vec<ClosedInterval<B>>,
}

impl<B> CollapsedSet<B> {
    #[inline]
    pub fn as_slice(&self) -> &[ClosedInterval<B>] {
        &self.intervals
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ClosedInterval<B>> {
        self.intervals.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<ClosedInterval<B>> {
        self.intervals
    }

    /// Sum of the lengths of the entries, i.e. the measure of the union of
    /// the original intervals.
    pub fn total_length(&self) -> B
    where
        B: Zero + Sub<Output = B> + Clone,
    {
        self.intervals
            .iter()
            .fold(B::zero(), |total, interval| total + interval.length())
    }
}

impl<B> fmt::Display for CollapsedSet<B>
where
    B: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

impl<B> IntoIterator for CollapsedSet<B> {
    type Item = ClosedInterval<B>;
    type IntoIter = vec::IntoIter<ClosedInterval<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, B> IntoIterator for &'a CollapsedSet<B> {
    type Item = &'a ClosedInterval<B>;
    type IntoIter = slice::Iter<'a, ClosedInterval<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Merges the intervals exposed by `elements` into the minimal disjoint set
/// covering the same points.
///
/// Intervals that overlap or merely touch (`next.lower == last.upper`) are
/// merged. The result only depends on the multiset of exposed intervals,
/// not on the order of `elements` nor on their payloads.
///
/// ```
/// use closed_interval::collapse;
///
/// let set = collapse([7..=9, 0..=3, 1..=2, 6..=9, 1..=1]);
/// assert_eq!(set.to_string(), "{[0, 3], [6, 9]}");
/// assert_eq!(set.total_length(), 6);
/// ```
pub fn collapse<I>(elements: I) -> CollapsedSet<BoundOf<I::Item>>
where
    I: IntoIterator,
    I::Item: IntervalBearing,
{
    let mut sorted: Vec<_> = elements.into_iter().map(|e| e.interval()).collect();
    // Stable, so equal lower bounds keep their input order.
    sorted.sort_by(|a, b| {
        a.lower_bound()
            .partial_cmp(b.lower_bound())
            .unwrap_or(Ordering::Equal)
    });

    let input_len = sorted.len();
    let intervals = sorted
        .into_iter()
        .enumerate()
        .fold(Vec::<ClosedInterval<BoundOf<I::Item>>>::new(), |mut acc, (i, next)| {
            let Some(last) = acc.pop() else {
                acc.push(next);
                return acc;
            };

            if next.lower_bound() <= last.upper_bound() {
                if next.upper_bound() <= last.upper_bound() {
                    log::trace!("interval #{} absorbed by entry #{}", i, acc.len());
                    acc.push(last);
                } else {
                    log::trace!("interval #{} extends entry #{}", i, acc.len());
                    let (lower, _) = last.into_bounds();
                    let (_, upper) = next.into_bounds();
                    acc.push(ClosedInterval::new(lower, upper));
                }
            } else {
                log::trace!("interval #{} opens entry #{}", i, acc.len() + 1);
                acc.push(last);
                acc.push(next);
            }
            acc
        });

    log::debug!(
        "collapsed {} intervals into {} disjoint intervals",
        input_len,
        intervals.len()
    );
    CollapsedSet { intervals }
}
