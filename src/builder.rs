use std::ops::Range;

use tracing::debug;

use crate::engine::locate_in;
use crate::error::SearchError;
use crate::results::{Results, SearchStats};
use crate::traits::{Counting, Evaluator};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a checked search.
///
/// Created via [`boundsearch::search()`](crate::search). Configure the range
/// and miss index with chained builder methods, then call
/// [`run()`](SearchBuilder::run) with an evaluator.
///
/// Unlike [`too_low_or_hit`](crate::too_low_or_hit), the builder rejects
/// negative sizes, reversed ranges and ranges that do not fit in `isize`
/// instead of quietly treating them as empty or clipping them, and it
/// reports how many evaluator calls the search made.
///
/// # Example
///
/// ```rust,ignore
/// let results = boundsearch::search()
///     .range(10..20)
///     .miss_index(-1)
///     .run(|i: isize| Evaluation::from(i.cmp(&14)))?;
/// ```
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    first:      isize,
    size:       isize,
    end:        Option<isize>,
    miss_index: isize,
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self {
            first:      0,
            size:       0,
            end:        None,
            miss_index: -1,
        }
    }
}

impl SearchBuilder {
    // ── Range ─────────────────────────────────────────────────────────────

    /// First index of the range. Defaults to `0`.
    ///
    /// Replaces a range set by [`range()`](SearchBuilder::range); the size
    /// then comes from [`size()`](SearchBuilder::size).
    pub fn first(mut self, first: isize) -> Self {
        self.first = first;
        self.end = None;
        self
    }

    /// Number of indices in the range. Defaults to `0`, an empty range.
    ///
    /// Replaces an end set by [`range()`](SearchBuilder::range).
    pub fn size(mut self, size: isize) -> Self {
        self.size = size;
        self.end = None;
        self
    }

    /// Search the half-open range `start..end`.
    ///
    /// Shorthand for `.first(start)` with the size taken from `end`.
    pub fn range(mut self, range: Range<isize>) -> Self {
        self.first = range.start;
        self.end = Some(range.end);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Value reported in [`Results::index`] when nothing in the range is a
    /// hit or too low. Defaults to `-1`.
    ///
    /// Pick a value outside the range if callers need to tell a miss apart
    /// from a located index by `index` alone; [`Results::found`] is
    /// unambiguous either way.
    pub fn miss_index(mut self, miss_index: isize) -> Self {
        self.miss_index = miss_index;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Validate the range and run the search.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidSize`] for a negative size.
    /// - [`SearchError::InvalidRange`] when `range()` was given an end before its start.
    /// - [`SearchError::RangeOverflow`] when the last index, `first + size - 1`, does not fit in `isize`.
    /// - [`SearchError::RangeTooLarge`] when `range()` spans more than `isize::MAX` indices.
    ///
    /// The evaluator is never called when validation fails.
    pub fn run<E: Evaluator>(self, evaluator: E) -> Result<Results, SearchError> {
        let size = self.validate().map_err(|err| {
            debug!(%err, "rejected search range");
            err
        })?;

        let mut counting = Counting::new(evaluator);
        let found = locate_in(self.first, size, &mut counting);
        let stats = SearchStats {
            probes: counting.probes,
            size:   size.unsigned_abs(),
        };

        debug!(
            first = self.first,
            size,
            probes = stats.probes,
            index = found.map(|f| f.index),
            "search finished"
        );

        Ok(Results {
            found,
            index: found.map_or(self.miss_index, |f| f.index),
            stats,
        })
    }

    /// Resolve the configured range to a size whose last index is representable.
    fn validate(&self) -> Result<isize, SearchError> {
        let first = self.first;
        let size = match self.end {
            Some(end) => {
                if end < first {
                    return Err(SearchError::InvalidRange { start: first, end });
                }
                end.checked_sub(first)
                    .ok_or(SearchError::RangeTooLarge { start: first, end })?
            }
            None => {
                if self.size < 0 {
                    return Err(SearchError::InvalidSize(self.size));
                }
                self.size
            }
        };

        if size > 0 && first.checked_add(size - 1).is_none() {
            return Err(SearchError::RangeOverflow { first, size });
        }
        Ok(size)
    }
}
