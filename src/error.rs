use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid range size {0}")]
    InvalidSize(isize),

    #[error("range end {end} is before its start {start}")]
    InvalidRange { start: isize, end: isize },

    #[error("range of {size} indices starting at {first} does not fit in isize")]
    RangeOverflow { first: isize, size: isize },

    #[error("range {start}..{end} holds more than isize::MAX indices")]
    RangeTooLarge { start: isize, end: isize },
}

impl SearchError {
    /// The first index of the rejected range, where one was given.
    pub fn first(&self) -> Option<isize> {
        match self {
            Self::InvalidRange { start: first, .. }
            | Self::RangeOverflow { first, .. }
            | Self::RangeTooLarge { start: first, .. } => Some(*first),
            Self::InvalidSize(_) => None,
        }
    }
}
