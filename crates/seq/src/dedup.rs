use std::collections::HashSet;
use std::hash::Hash;

/// Order-preserving deduplication.
///
/// Each element is emitted the first time it is seen; later repeats are
/// dropped. The input is left untouched.
pub fn unique<T: Eq + Hash + Clone>(data: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(data.len());
    let mut out = Vec::with_capacity(data.len());
    for x in data {
        if seen.insert(x) {
            out.push(x.clone());
        }
    }
    tracing::trace!(input_len = data.len(), output_len = out.len(), "unique");
    out
}

/// Deduplicates on a derived key. `None` keys never match anything, so those
/// elements are always kept.
pub fn unique_by_key<T, K, F>(data: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
{
    let mut seen = HashSet::with_capacity(data.len());
    let mut out = Vec::with_capacity(data.len());
    for x in data {
        let keep = match key(x) {
            Some(k) => seen.insert(k),
            None => true,
        };
        if keep {
            out.push(x.clone());
        }
    }
    tracing::trace!(input_len = data.len(), output_len = out.len(), "unique_by_key");
    out
}

/// Hashable identity for floats that agrees with IEEE `==`.
pub trait FloatKey: Copy {
    /// `None` for NaN, which compares unequal to everything.
    fn float_key(self) -> Option<u64>;
}

impl FloatKey for f32 {
    #[inline]
    fn float_key(self) -> Option<u64> {
        if self.is_nan() {
            None
        } else if self == 0.0 {
            Some(0)
        } else {
            Some(u64::from(self.to_bits()))
        }
    }
}

impl FloatKey for f64 {
    #[inline]
    fn float_key(self) -> Option<u64> {
        if self.is_nan() {
            None
        } else if self == 0.0 {
            Some(0)
        } else {
            Some(self.to_bits())
        }
    }
}

/// [`unique`] for float slices: `0.0` and `-0.0` collapse, every NaN is kept.
pub fn unique_floats<F: FloatKey>(data: &[F]) -> Vec<F> {
    unique_by_key(data, |&x| x.float_key())
}
