use crate::NOT_FOUND;

/// Position of the first element equal to `target`.
#[inline]
pub fn find_index<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|x| x == target)
}

/// Like [`find_index`], but reports absence as [`NOT_FOUND`].
///
/// A position past `isize::MAX` (only reachable with zero-sized elements) is
/// also reported as [`NOT_FOUND`].
#[inline]
pub fn find_index_or_sentinel<T: PartialEq>(data: &[T], target: &T) -> isize {
    find_index(data, target)
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(NOT_FOUND)
}

#[inline]
pub fn contains<T: PartialEq>(data: &[T], target: &T) -> bool {
    find_index(data, target).is_some()
}
