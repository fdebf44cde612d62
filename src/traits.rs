use crate::evaluation::Evaluation;

/// Classifies an index against the target of a search.
///
/// Implement this to search anything addressable by an integer index:
/// sorted slices, records in a file, rows behind a cursor, or a purely
/// computed sequence. The search never hands out an index outside the range
/// it was given, so an evaluator may index its backing storage directly.
///
/// Every `FnMut(isize) -> Evaluation` closure is an evaluator, which is what
/// most callers will pass.
///
/// # Monotonicity
///
/// Results are only meaningful when the classifications over the searched
/// range are a run of `TooLow`, then `Hit`, then `TooHigh`. A classifier that
/// breaks this still gets a search that terminates and stays in range, but
/// the returned index is unspecified.
///
/// # Repeated calls
///
/// The same index may be evaluated more than once while the search resolves
/// its boundary, so evaluation should be free of side effects that matter.
///
/// # Example
///
/// ```rust
/// use boundsearch::{Evaluation, Evaluator};
///
/// /// Finds the largest `n` with `n * n <= target`.
/// struct Sqrt(isize);
///
/// impl Evaluator for Sqrt {
///     fn evaluate(&mut self, n: isize) -> Evaluation {
///         (n * n).cmp(&self.0).into()
///     }
/// }
///
/// assert_eq!(boundsearch::too_low_or_hit(0, 100, -1, Sqrt(50)), 7);
/// assert_eq!(boundsearch::too_low_or_hit(0, 100, -1, Sqrt(49)), 7);
/// ```
pub trait Evaluator {
    /// Classify `index` against the target.
    fn evaluate(&mut self, index: isize) -> Evaluation;
}

impl<F> Evaluator for F
where
    F: FnMut(isize) -> Evaluation,
{
    fn evaluate(&mut self, index: isize) -> Evaluation {
        self(index)
    }
}

/// Wraps an evaluator and counts how often it is called.
pub(crate) struct Counting<E> {
    pub inner:  E,
    pub probes: usize,
}

impl<E> Counting<E> {
    pub fn new(inner: E) -> Self {
        Self { inner, probes: 0 }
    }
}

impl<E: Evaluator> Evaluator for Counting<E> {
    fn evaluate(&mut self, index: isize) -> Evaluation {
        self.probes += 1;
        self.inner.evaluate(index)
    }
}
