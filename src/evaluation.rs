use std::cmp::Ordering;

/// How a single index relates to the target of a search.
///
/// Classifications over a searched range are expected to form a monotonic
/// partition: a run of [`TooLow`](Evaluation::TooLow), then a run of
/// [`Hit`](Evaluation::Hit), then a run of [`TooHigh`](Evaluation::TooHigh).
/// Any of the three runs may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// The index is below the target. A hit, if there is one, lies higher.
    TooLow,

    /// The index is above the target. A hit, if there is one, lies lower.
    TooHigh,

    /// The index is an exact match.
    Hit,
}

impl Evaluation {
    /// Returns `true` for [`Evaluation::Hit`].
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }
}

/// Maps the ordering of a probed element *relative to the target* onto an
/// evaluation, the same orientation `slice::binary_search_by` closures use.
///
/// ```rust
/// use boundsearch::Evaluation;
///
/// assert_eq!(Evaluation::from(3.cmp(&5)), Evaluation::TooLow);
/// assert_eq!(Evaluation::from(7.cmp(&5)), Evaluation::TooHigh);
/// assert_eq!(Evaluation::from(5.cmp(&5)), Evaluation::Hit);
/// ```
impl From<Ordering> for Evaluation {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less    => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal   => Self::Hit,
        }
    }
}
