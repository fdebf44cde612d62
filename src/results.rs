use crate::evaluation::Evaluation;

/// An index the search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Found {
    /// The located index.
    pub index: isize,

    /// How `index` evaluated: [`Evaluation::Hit`] for the lowest exact match,
    /// [`Evaluation::TooLow`] for the highest too-low index when nothing
    /// matched exactly. Never [`Evaluation::TooHigh`].
    pub kind: Evaluation,
}

impl Found {
    /// Whether this is an exact match rather than the last too-low index.
    pub fn is_hit(&self) -> bool {
        self.kind.is_hit()
    }
}

/// The output of a search run through [`SearchBuilder`](crate::SearchBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Results {
    /// What the search located, or `None` when every index was too high
    /// (or the range was empty).
    pub found: Option<Found>,

    /// The located index, or the configured miss index when `found` is `None`.
    pub index: isize,

    /// Search statistics.
    pub stats: SearchStats,
}

impl Results {
    /// `true` when nothing in the range was a hit or too low.
    pub fn is_miss(&self) -> bool {
        self.found.is_none()
    }
}

/// Statistics for a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Number of times the evaluator was called. Boundary indices evaluated
    /// again during termination count each time.
    pub probes: usize,

    /// Number of candidate indices in the searched range.
    pub size: usize,
}
