//! A single-entry cache that recomputes only when its inputs change.

use std::sync::Arc;

/// Decides whether two memo inputs are the same input.
///
/// Shared data is compared by identity rather than by value: a snapshot that
/// hands out the same `Arc` has not changed.
pub trait MemoKey {
    /// Whether `self` and `other` are the same input.
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> MemoKey for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl MemoKey for f64 {
    fn same_as(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl<A: MemoKey, B: MemoKey> MemoKey for (A, B) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1)
    }
}

/// Remembers the last input and the value computed from it.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    name: &'static str,
    entry: Option<(K, V)>,
    recomputations: usize,
}

impl<K: MemoKey, V: Clone> Memo<K, V> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            entry: None,
            recomputations: 0,
        }
    }

    /// Return the cached value if `key` is the last input, otherwise compute,
    /// cache and return a new value.
    pub(crate) fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = &self.entry
            && cached_key.same_as(&key)
        {
            tracing::trace!(selector = self.name, "memo hit");
            return value.clone();
        }

        tracing::trace!(selector = self.name, "memo miss, recomputing");
        let value = compute();
        self.recomputations += 1;
        self.entry = Some((key, value.clone()));

        value
    }

    /// How many times the value has been computed.
    pub(crate) fn recomputations(&self) -> usize {
        self.recomputations
    }
}
