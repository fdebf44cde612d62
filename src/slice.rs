//! Searches over sorted slices.
//!
//! Each closure returns the ordering of a slice element *relative to the
//! target*, as with [`slice::binary_search_by`]. The slice must be sorted
//! consistently with that ordering.

use std::cmp::Ordering;

use crate::engine::locate_in;
use crate::evaluation::Evaluation;
use crate::results::Found;

/// Locate the lowest element equal to the target, or the last element below it.
///
/// Returns `Ok(index)` of the lowest match, `Err(Some(index))` of the last
/// element ordered below the target when nothing matches, and `Err(None)`
/// when every element is above the target or the slice is empty.
///
/// ```rust
/// use boundsearch::slice::locate_by;
///
/// let v = [1, 3, 3, 3, 8];
/// assert_eq!(locate_by(&v, |x| x.cmp(&3)), Ok(1));
/// assert_eq!(locate_by(&v, |x| x.cmp(&5)), Err(Some(3)));
/// assert_eq!(locate_by(&v, |x| x.cmp(&0)), Err(None));
/// ```
pub fn locate_by<T, F>(slice: &[T], mut f: F) -> Result<usize, Option<usize>>
where
    F: FnMut(&T) -> Ordering,
{
    // a slice of zero-sized values can be longer than isize::MAX
    let size = isize::try_from(slice.len()).unwrap_or(isize::MAX);
    let mut evaluate = |i: isize| Evaluation::from(f(&slice[i.unsigned_abs()]));
    match locate_in(0, size, &mut evaluate) {
        Some(Found { index, kind: Evaluation::Hit }) => Ok(index.unsigned_abs()),
        Some(Found { index, .. })                    => Err(Some(index.unsigned_abs())),
        None                                         => Err(None),
    }
}

/// [`locate_by`] comparing a key extracted from each element against `key`.
///
/// ```rust
/// use boundsearch::slice::locate_by_key;
///
/// let pairs = [(0, 'a'), (2, 'b'), (2, 'c'), (7, 'd')];
/// assert_eq!(locate_by_key(&pairs, &2, |&(k, _)| k), Ok(1));
/// assert_eq!(locate_by_key(&pairs, &5, |&(k, _)| k), Err(Some(2)));
/// ```
pub fn locate_by_key<T, B, F>(slice: &[T], key: &B, mut f: F) -> Result<usize, Option<usize>>
where
    F: FnMut(&T) -> B,
    B: Ord,
{
    locate_by(slice, |elem| f(elem).cmp(key))
}

/// [`locate_by`] for a slice of `Ord` elements sorted ascending.
pub fn locate<T: Ord>(slice: &[T], target: &T) -> Result<usize, Option<usize>> {
    locate_by(slice, |elem| elem.cmp(target))
}

/// The lowest index of an element equal to the target, or else the highest
/// index of an element below it; `None` when neither exists.
///
/// ```rust
/// use boundsearch::slice::too_low_or_hit_by;
///
/// let floats: [f64; 4] = [0.5, 2.25, 5.5, 9.0];
/// let i = too_low_or_hit_by(&floats, |x| x.total_cmp(&5.0));
/// assert_eq!(i, Some(1));
/// ```
pub fn too_low_or_hit_by<T, F>(slice: &[T], f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    match locate_by(slice, f) {
        Ok(index) | Err(Some(index)) => Some(index),
        Err(None)                    => None,
    }
}

/// [`too_low_or_hit_by`] for a slice of `Ord` elements sorted ascending.
pub fn too_low_or_hit<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    too_low_or_hit_by(slice, |elem| elem.cmp(target))
}
