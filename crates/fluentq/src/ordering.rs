//! Sort direction and the stable sort used by `order_by*`.
//!
//! Descending order is defined as "sort ascending, then reverse the whole
//! sequence". Elements with equal keys therefore come out in the reverse of
//! their input order when sorted descending.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Ascending order, then reversed (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sorts `items` by an extracted key compared with `cmp`.
///
/// The ascending pass is stable. For [`Dir::Desc`] the sorted sequence is
/// reversed afterwards.
pub(crate) fn sort_by_key_with<T, K, F, C>(items: &mut [T], dir: Dir, mut key: F, mut cmp: C)
where
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    items.sort_by(|a, b| cmp(&key(a), &key(b)));
    if dir.is_desc() {
        items.reverse();
    }
}
