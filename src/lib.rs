//! Closed intervals ([`ClosedInterval`]) over any ordered bound type, and
//! algorithms over collections of values that carry one
//! ([`IntervalBearing`]). It provides a four-way overlap classification
//! between two intervals ([`Overlap`]), queries over collections
//! ("which elements are inside, overlap or contain a value?", see
//! [`IntervalQuery`]), and collapsing of overlapping intervals into the
//! minimal disjoint set covering the same points ([`collapse()`]).
//!
//! Lengths are available for bounds supporting subtraction, and progress
//! fractions for floating-point bounds. Everything is a pure function over
//! immutable inputs.
//!
//! ```
//! use closed_interval::{ClosedInterval, IntervalQuery};
//!
//! let busy = vec![ClosedInterval::new(7, 9), ClosedInterval::new(0, 3), ClosedInterval::new(1, 2)];
//! assert_eq!(busy.lowest_bound(), Some(0));
//! assert_eq!(busy.collapsed().into_vec(), vec![ClosedInterval::new(0, 3), ClosedInterval::new(7, 9)]);
//! assert_eq!(busy.collapsed_length(), 5);
//! ```

/// Types carrying an interval.
pub mod bearing;
/// Merging of overlapping intervals.
pub mod collapse;
mod error;
/// The closed interval value.
pub mod interval;
/// Pairwise overlap classification.
pub mod overlap;
/// Queries over collections of interval-bearing elements.
pub mod query;

pub use bearing::{BoundOf, IntervalBearing};
pub use collapse::{collapse, CollapsedSet};
pub use error::IntervalError;
pub use interval::ClosedInterval;
pub use overlap::Overlap;
pub use query::IntervalQuery;
