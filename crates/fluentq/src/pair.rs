//! Ordered two-element tuple produced by the join match step.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A matched `(left, right)` pair.
///
/// Pairs have no identity beyond their slot in the matched sequence. The same
/// shape carries `(representative-left, right-group)` entries produced by
/// [`JoinSelector::group_by_left`](crate::JoinSelector::group_by_left).
///
/// # Example
///
/// ```
/// use fluentq::Pair;
///
/// let pair = Pair::of("cat", 1);
/// assert_eq!(pair.left, "cat");
/// assert_eq!(pair.into_tuple(), ("cat", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<T, U> {
    /// Element taken from the left sequence.
    pub left: T,
    /// Element taken from the right sequence.
    pub right: U,
}

impl<T, U> Pair<T, U> {
    /// Creates a pair.
    pub fn of(left: T, right: U) -> Self {
        Pair { left, right }
    }

    /// Returns the left component.
    pub fn left(&self) -> &T {
        &self.left
    }

    /// Returns the right component.
    pub fn right(&self) -> &U {
        &self.right
    }

    /// Splits the pair into a tuple.
    pub fn into_tuple(self) -> (T, U) {
        (self.left, self.right)
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    fn from((left, right): (T, U)) -> Self {
        Pair { left, right }
    }
}

impl<T, U> From<Pair<T, U>> for (T, U) {
    fn from(pair: Pair<T, U>) -> Self {
        pair.into_tuple()
    }
}
