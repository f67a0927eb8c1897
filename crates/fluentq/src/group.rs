//! Key groups produced by [`Selector::group_by`](crate::Selector::group_by).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A key together with the elements that share it.
///
/// Values keep the relative order they had in the source sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group<K, V> {
    /// The extracted key.
    pub key: K,
    /// Elements sharing `key`, in source order.
    pub values: Vec<V>,
}

impl<K, V> Group<K, V> {
    /// Returns the group key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the grouped elements.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of elements in the group.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the group holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Splits the group into its key and values.
    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.values)
    }
}
