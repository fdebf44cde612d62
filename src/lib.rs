//! # boundsearch
//!
//! Three-way binary search over an integer index range.
//!
//! A caller-supplied [`Evaluator`] classifies any index as
//! [`TooLow`](Evaluation::TooLow), [`TooHigh`](Evaluation::TooHigh) or a
//! [`Hit`](Evaluation::Hit). In one logarithmic pass the search returns the
//! lowest hit, or, when nothing is an exact match, the highest too-low index,
//! or, when even that does not exist, a caller-chosen miss index.
//!
//! boundsearch owns no data. It never sorts, stores or allocates; indices mean
//! whatever the evaluator makes of them.
//!
//! # Quick Start
//!
//! ```rust
//! use boundsearch::{too_low_or_hit, Evaluation};
//!
//! let sorted = [2, 3, 5, 5, 5, 6, 7];
//! let evaluate = |target: i32| move |i: isize| Evaluation::from(sorted[i as usize].cmp(&target));
//!
//! // lowest index equal to 5
//! assert_eq!(too_low_or_hit(0, 7, -1, evaluate(5)), 2);
//! // no 4: highest index below it
//! assert_eq!(too_low_or_hit(0, 7, -1, evaluate(4)), 1);
//! // everything is above 1
//! assert_eq!(too_low_or_hit(0, 7, -1, evaluate(1)), -1);
//! ```
//!
//! # Checked searches
//!
//! [`search()`] validates the range up front and reports what it found along
//! with how many evaluator calls it took:
//!
//! ```rust
//! use boundsearch::Evaluation;
//!
//! let results = boundsearch::search()
//!     .range(100..200)
//!     .run(|i: isize| Evaluation::from((i * i).cmp(&20_000)))
//!     .unwrap();
//!
//! let found = results.found.unwrap();
//! assert_eq!(found.index, 141);
//! assert!(!found.is_hit());
//! assert!(results.stats.probes <= 8);
//! ```
//!
//! # Sorted slices
//!
//! The [`slice`] module wraps the common case of a sorted slice:
//!
//! ```rust
//! use boundsearch::slice;
//!
//! let v = [10, 20, 20, 30];
//! assert_eq!(slice::locate(&v, &20), Ok(1));
//! assert_eq!(slice::locate(&v, &25), Err(Some(2)));
//! assert_eq!(slice::locate(&v, &5), Err(None));
//! ```
//!
//! # Evaluators
//!
//! Any `FnMut(isize) -> Evaluation` closure is an [`Evaluator`]. Results are
//! only meaningful when the classifications form a run of `TooLow`, then
//! `Hit`, then `TooHigh`. A classifier breaking that order still gets a
//! search that terminates and never evaluates outside the range, but which
//! index comes back is unspecified.

#![forbid(unsafe_code)]

pub mod slice;

mod builder;
mod engine;
mod error;
mod evaluation;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use engine::{locate, too_low_or_hit};
pub use error::SearchError;
pub use evaluation::Evaluation;
pub use results::{Found, Results, SearchStats};
pub use traits::Evaluator;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a checked search.
///
/// # Example
///
/// ```rust
/// use boundsearch::{Evaluation, SearchError};
///
/// let results = boundsearch::search()
///     .first(-5)
///     .size(10)
///     .miss_index(isize::MIN)
///     .run(|i: isize| Evaluation::from(i.cmp(&0)))
///     .unwrap();
/// assert_eq!(results.index, 0);
///
/// let err = boundsearch::search().size(-1).run(|_: isize| Evaluation::Hit);
/// assert_eq!(err.unwrap_err(), SearchError::InvalidSize(-1));
/// ```
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}
