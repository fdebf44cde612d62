use tracing::trace;

use crate::evaluation::Evaluation;
use crate::results::Found;
use crate::traits::Evaluator;

// ---------------------------------------------------------------------------
// too_low_or_hit()
// ---------------------------------------------------------------------------

/// Binary search over the indices `first..first + size`.
///
/// - If some indices evaluate to [`Hit`](Evaluation::Hit), returns the lowest of them.
/// - Otherwise, returns the highest index that evaluates to
///   [`TooLow`](Evaluation::TooLow), if there is one.
/// - Otherwise, returns `miss_index`.
///
/// A zero or negative `size` returns `miss_index` without calling the
/// evaluator. The evaluator is never called with an index outside the range,
/// and is called O(log size) times.
///
/// Indices past `isize::MAX` do not exist: a range running beyond it is
/// searched up to and including `isize::MAX`.
///
/// # Example
///
/// ```rust
/// use boundsearch::{too_low_or_hit, Evaluation};
///
/// let sorted = [1.5, 2.0, 5.5, 5.5, 8.25];
/// let lowest_match = too_low_or_hit(0, sorted.len() as isize, -1, |i: isize| {
///     sorted[i as usize].partial_cmp(&5.5).map_or(Evaluation::TooHigh, Evaluation::from)
/// });
/// assert_eq!(lowest_match, 2);
///
/// let last_below = too_low_or_hit(0, sorted.len() as isize, -1, |i: isize| {
///     sorted[i as usize].partial_cmp(&3.0).map_or(Evaluation::TooHigh, Evaluation::from)
/// });
/// assert_eq!(last_below, 1);
/// ```
pub fn too_low_or_hit<E: Evaluator>(first: isize, size: isize, miss_index: isize, mut evaluator: E) -> isize {
    locate_in(first, size, &mut evaluator).map_or(miss_index, |found| found.index)
}

// ---------------------------------------------------------------------------
// locate()
// ---------------------------------------------------------------------------

/// Same search as [`too_low_or_hit`], reporting a miss as `None` and telling
/// an exact match apart from a last too-low index.
///
/// ```rust
/// use boundsearch::{locate, Evaluation};
///
/// let found = locate(10, 5, |i: isize| Evaluation::from(i.cmp(&12))).unwrap();
/// assert_eq!((found.index, found.kind), (12, Evaluation::Hit));
///
/// let found = locate(10, 5, |i: isize| Evaluation::from((2 * i).cmp(&25))).unwrap();
/// assert_eq!((found.index, found.kind), (12, Evaluation::TooLow));
///
/// assert!(locate(10, 5, |_: isize| Evaluation::TooHigh).is_none());
/// ```
pub fn locate<E: Evaluator>(first: isize, size: isize, mut evaluator: E) -> Option<Found> {
    locate_in(first, size, &mut evaluator)
}

/// The search itself. `a` only ever moves onto indices that evaluated
/// `TooLow`; `top + 1` only onto indices that evaluated `TooHigh` or `Hit`.
/// `top` is tracked instead of the exclusive upper bound so that a range
/// ending at `isize::MAX` stays representable. `top - a >= 1` holds at the
/// top of every iteration, so the probe lies strictly inside `(a, top + 1)`.
pub(crate) fn locate_in<E: Evaluator + ?Sized>(first: isize, size: isize, evaluator: &mut E) -> Option<Found> {
    // indices past isize::MAX do not exist
    let size = size.min(isize::MAX.saturating_sub(first).saturating_add(1));
    if size <= 1 {
        if size <= 0 {
            return None;
        }
        return match evaluator.evaluate(first) {
            Evaluation::TooHigh => miss(first, size),
            kind                => found(first, kind),
        };
    }

    let last = first + (size - 1);
    let (mut a, mut top) = (first, last);
    loop {
        let i = a + (top - a + 1) / 2;
        match evaluator.evaluate(i) {
            Evaluation::TooLow => {
                if i >= top {
                    if top < last && evaluator.evaluate(top + 1) == Evaluation::Hit {
                        return found(top + 1, Evaluation::Hit);
                    }
                    return found(i, Evaluation::TooLow);
                }
                a = i;
            }
            Evaluation::TooHigh => {
                if i - a <= 1 {
                    if a > first {
                        return found(a, Evaluation::TooLow);
                    }
                    // `first` has not been probed yet
                    return match evaluator.evaluate(first) {
                        Evaluation::TooHigh => miss(first, size),
                        kind                => found(first, kind),
                    };
                }
                top = i - 1;
            }
            Evaluation::Hit => {
                if i - a <= 1 {
                    if a >= i || evaluator.evaluate(a) == Evaluation::Hit {
                        return found(a, Evaluation::Hit);
                    }
                    return found(i, Evaluation::Hit);
                }
                top = i - 1;
            }
        }
    }
}

fn found(index: isize, kind: Evaluation) -> Option<Found> {
    trace!(index, ?kind, "boundary located");
    Some(Found { index, kind })
}

fn miss(first: isize, size: isize) -> Option<Found> {
    trace!(first, size, "every index is too high");
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MISS: isize = -12;

    /// Hit for offsets in `low..=high` from `first`, TooLow below, TooHigh
    /// above. Panics when called outside `first..first + size`.
    fn partition(first: isize, size: isize, low: isize, high: isize) -> impl FnMut(isize) -> Evaluation {
        move |index| {
            assert!(
                index >= first && index < first + size,
                "evaluated {index} outside {first}..{}",
                first + size
            );
            let offset = index - first;
            if offset < low {
                Evaluation::TooLow
            } else if offset <= high {
                Evaluation::Hit
            } else {
                Evaluation::TooHigh
            }
        }
    }

    fn constant(first: isize, size: isize, kind: Evaluation) -> impl FnMut(isize) -> Evaluation {
        move |index| {
            assert!(index >= first && index < first + size, "evaluated {index} out of range");
            kind
        }
    }

    #[test]
    fn non_positive_size_never_evaluates() {
        for first in -3..=3 {
            for size in -3..=0 {
                let result = too_low_or_hit(first, size, MISS, |_: isize| -> Evaluation {
                    panic!("evaluator called for first = {first}, size = {size}")
                });
                assert_eq!(result, MISS);
            }
        }
    }

    #[test]
    fn uniform_classification() {
        for size in 1..8 {
            for first in -3..=3 {
                let ctx = format!("first = {first}, size = {size}");
                assert_eq!(too_low_or_hit(first, size, MISS, constant(first, size, Evaluation::TooHigh)), MISS, "{ctx}");
                assert_eq!(too_low_or_hit(first, size, MISS, constant(first, size, Evaluation::TooLow)), first + size - 1, "{ctx}");
                assert_eq!(too_low_or_hit(first, size, MISS, constant(first, size, Evaluation::Hit)), first, "{ctx}");
            }
        }
    }

    #[test]
    fn too_low_then_too_high_returns_last_too_low() {
        for too_low in 1..8 {
            for too_high in 1..8 {
                let size = too_low + too_high;
                for first in -3..=3 {
                    // empty hit block: low > high
                    let e = partition(first, size, too_low, too_low - 1);
                    assert_eq!(
                        too_low_or_hit(first, size, MISS, e),
                        first + too_low - 1,
                        "first = {first}, too_low = {too_low}, too_high = {too_high}"
                    );
                }
            }
        }
    }

    #[test]
    fn hits_return_lowest_hit() {
        for too_low in 0..8 {
            for matches in 1..8 {
                for too_high in 0..8 {
                    let size = too_low + matches + too_high;
                    for first in -3..=3 {
                        let e = partition(first, size, too_low, too_low + matches - 1);
                        assert_eq!(
                            too_low_or_hit(first, size, MISS, e),
                            first + too_low,
                            "first = {first}, too_low = {too_low}, matches = {matches}, too_high = {too_high}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sorted_ints_against_target() {
        let cases: &[(&[i32], isize)] = &[
            (&[], -1),
            (&[5], 0),
            (&[5, 9], 0),
            (&[9], -1),
            (&[9, 10], -1),
            (&[4], 0),
            (&[4, 10], 0),
            (&[4, 5, 10], 1),
            (&[2, 3, 5, 6, 7], 2),
            (&[2, 3, 4, 5, 5, 6, 7], 3),
            (&[2, 3, 5, 5, 5, 6, 7], 2),
            (&[2, 3, 4, 5, 5, 5, 6, 7], 3),
            (&[1, 2, 3, 4], 3),
        ];
        for &(ints, expected) in cases {
            let result = too_low_or_hit(0, ints.len() as isize, -1, |i: isize| Evaluation::from(ints[i as usize].cmp(&5)));
            assert_eq!(result, expected, "{ints:?}");
        }
    }

    #[test]
    fn seven_index_scenario() {
        let e = partition(0, 7, 2, 4);
        assert_eq!(too_low_or_hit(0, 7, -1, e), 2);
        assert_eq!(too_low_or_hit(0, 7, -1, constant(0, 7, Evaluation::TooLow)), 6);
        assert_eq!(too_low_or_hit(0, 7, -1, constant(0, 7, Evaluation::TooHigh)), -1);
    }

    #[test]
    fn locate_reports_kind() {
        let hit = locate(0, 7, partition(0, 7, 2, 4)).unwrap();
        assert_eq!(hit, Found { index: 2, kind: Evaluation::Hit });

        let below = locate(0, 7, partition(0, 7, 3, 2)).unwrap();
        assert_eq!(below, Found { index: 2, kind: Evaluation::TooLow });

        let single = locate(4, 1, constant(4, 1, Evaluation::TooLow)).unwrap();
        assert_eq!(single, Found { index: 4, kind: Evaluation::TooLow });

        assert_eq!(locate(0, 7, constant(0, 7, Evaluation::TooHigh)), None);
        assert_eq!(locate(0, 0, constant(0, 0, Evaluation::Hit)), None);
    }

    #[test]
    fn range_ending_at_isize_max() {
        let first = isize::MAX - 2;

        let result = too_low_or_hit(first, 3, MISS, |i: isize| {
            assert!(i >= first, "evaluated {i} below {first}");
            Evaluation::from(i.cmp(&isize::MAX))
        });
        assert_eq!(result, isize::MAX);

        let result = too_low_or_hit(first, 3, MISS, |i: isize| {
            assert!(i >= first, "evaluated {i} below {first}");
            Evaluation::TooLow
        });
        assert_eq!(result, isize::MAX);

        let found = locate(isize::MAX, 1, |i: isize| {
            assert_eq!(i, isize::MAX);
            Evaluation::Hit
        });
        assert_eq!(found, Some(Found { index: isize::MAX, kind: Evaluation::Hit }));
    }

    #[test]
    fn hit_block_ending_at_isize_max() {
        for size in 2..=40isize {
            let first = isize::MAX - (size - 1);
            for hit in first..=isize::MAX {
                let result = too_low_or_hit(first, size, MISS, |i: isize| {
                    assert!(i >= first, "evaluated {i} below {first}");
                    if i < hit { Evaluation::TooLow } else { Evaluation::Hit }
                });
                assert_eq!(result, hit, "size = {size}");
            }
        }
    }

    #[test]
    fn size_beyond_isize_max_is_clamped() {
        let first = isize::MAX - 10;
        let result = too_low_or_hit(first, 20, MISS, |_: isize| Evaluation::TooLow);
        assert_eq!(result, isize::MAX);

        let result = too_low_or_hit(first, isize::MAX, MISS, |i: isize| Evaluation::from(i.cmp(&(first + 3))));
        assert_eq!(result, first + 3);
    }

    #[test]
    fn range_starting_at_isize_min() {
        let target = isize::MIN + 5;
        let result = too_low_or_hit(isize::MIN, isize::MAX, MISS, |i: isize| Evaluation::from(i.cmp(&target)));
        assert_eq!(result, target);
    }

    #[test]
    fn probe_count_is_logarithmic() {
        for size in 1..=200isize {
            for hit in 0..size {
                let mut calls = 0usize;
                let result = too_low_or_hit(0, size, MISS, |i: isize| {
                    calls += 1;
                    Evaluation::from(i.cmp(&hit))
                });
                assert_eq!(result, hit);
                let bound = (isize::BITS - size.leading_zeros()) as usize + 1;
                assert!(calls <= bound, "size = {size}: {calls} calls, bound {bound}");
            }
        }
    }
}
