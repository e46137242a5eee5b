use std::ops::{RangeInclusive, Sub};

use num_traits::Float;

use crate::interval::ClosedInterval;

/// The bound type of the interval carried by `T`.
pub type BoundOf<T> = <T as IntervalBearing>::Bound;

/// Anything that exposes exactly one closed interval.
///
/// The collection algorithms of this crate only ever look at the exposed
/// intervals, so implementors can carry arbitrary data alongside:
///
/// ```
/// use closed_interval::{ClosedInterval, IntervalBearing};
///
/// struct Booking {
///     guest: &'static str,
///     nights: ClosedInterval<u32>,
/// }
///
/// impl IntervalBearing for Booking {
///     type Bound = u32;
///
///     fn interval(&self) -> ClosedInterval<u32> {
///         self.nights
///     }
/// }
///
/// let booking = Booking { guest: "ada", nights: ClosedInterval::new(3, 5) };
/// assert_eq!(booking.length(), 2);
/// ```
pub trait IntervalBearing {
    type Bound: PartialOrd;

    /// The interval carried by `self`. Must be the same on every call.
    fn interval(&self) -> ClosedInterval<Self::Bound>;

    /// Length of the carried interval, see [`ClosedInterval::length`].
    fn length(&self) -> Self::Bound
    where
        Self::Bound: Sub<Output = Self::Bound> + Clone,
    {
        self.interval().length()
    }

    /// Progress of `value` through the carried interval, see [`ClosedInterval::progress`].
    fn progress(&self, value: Self::Bound) -> Self::Bound
    where
        Self::Bound: Float,
    {
        self.interval().progress(value)
    }
}

impl<B> IntervalBearing for ClosedInterval<B>
where
    B: PartialOrd + Clone,
{
    type Bound = B;

    #[inline]
    fn interval(&self) -> ClosedInterval<B> {
        self.clone()
    }
}

impl<B> IntervalBearing for RangeInclusive<B>
where
    B: PartialOrd + Clone,
{
    type Bound = B;

    #[inline]
    fn interval(&self) -> ClosedInterval<B> {
        ClosedInterval::new(self.start().clone(), self.end().clone())
    }
}

/// A `(lower, upper)` pair.
impl<B> IntervalBearing for (B, B)
where
    B: PartialOrd + Clone,
{
    type Bound = B;

    #[inline]
    fn interval(&self) -> ClosedInterval<B> {
        ClosedInterval::new(self.0.clone(), self.1.clone())
    }
}

impl<T> IntervalBearing for &T
where
    T: IntervalBearing + ?Sized,
{
    type Bound = T::Bound;

    #[inline]
    fn interval(&self) -> ClosedInterval<T::Bound> {
        (**self).interval()
    }
}
