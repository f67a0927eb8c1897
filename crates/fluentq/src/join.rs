//! Dual-sequence (join) selector.
//!
//! A [`JoinSelector`] starts [`JoinState::Unjoined`]. Only [`JoinSelector::on`]
//! moves it to [`JoinState::Joined`]; every operation that consumes matched
//! pairs fails with [`QueryError::JoinNotApplied`] before that. A joined
//! selector with zero matches is a legitimate empty result, distinct from the
//! unjoined state.
//!
//! The match step is a literal nested loop over the caller's predicate:
//!
//! ```text
//! for t in left:            (left order)
//!     for u in right:       (right order)
//!         if predicate(t, u): emit (t, u)
//! ```
//!
//! Left elements with no match emit nothing (inner join).

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{QueryError, Result};
use crate::pair::Pair;
use crate::selector::{collect_unique, Selector};

/// Match state of a [`JoinSelector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinState<T, U> {
    /// No match step has run yet.
    Unjoined,
    /// Matched pairs, ordered by (left index, right index).
    Joined(Vec<Pair<T, U>>),
}

impl<T, U> JoinState<T, U> {
    /// Returns `true` once a match step has run.
    pub fn is_joined(&self) -> bool {
        matches!(self, JoinState::Joined(_))
    }
}

/// A chainable wrapper around a left and a right sequence.
///
/// # Example
///
/// ```
/// use fluentq::Q;
///
/// let pairs = Q::from(vec!["a", "b", "c"])
///     .join(vec!["a", "b"])
///     .on(|l, r| l == r)
///     .select(|p| format!("{}{}", p.left, p.right))?
///     .to_list();
///
/// // "c" has no match on the right and is dropped.
/// assert_eq!(pairs, vec!["aa", "bb"]);
/// # Ok::<(), fluentq::QueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSelector<T, U> {
    left: Vec<T>,
    right: Vec<U>,
    state: JoinState<T, U>,
}

impl<T, U> JoinSelector<T, U> {
    /// Creates an unjoined selector over `left` and `right`.
    pub fn new(left: Vec<T>, right: Vec<U>) -> Self {
        JoinSelector {
            left,
            right,
            state: JoinState::Unjoined,
        }
    }

    /// Runs the match step.
    ///
    /// Pairs every left element with every right element satisfying
    /// `predicate`, in (left, right) order. Calling it again recomputes the
    /// pairs from the original sequences and discards earlier matches.
    pub fn on<P>(mut self, mut predicate: P) -> Self
    where
        T: Clone,
        U: Clone,
        P: FnMut(&T, &U) -> bool,
    {
        let mut pairs = Vec::new();
        for t in &self.left {
            for u in &self.right {
                if predicate(t, u) {
                    pairs.push(Pair::of(t.clone(), u.clone()));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            left = self.left.len(),
            right = self.right.len(),
            pairs = pairs.len(),
            "join match step"
        );

        self.state = JoinState::Joined(pairs);
        self
    }

    /// Returns `true` once [`on`](Self::on) has run.
    pub fn is_joined(&self) -> bool {
        self.state.is_joined()
    }

    /// Returns the match state.
    pub fn state(&self) -> &JoinState<T, U> {
        &self.state
    }

    /// Returns the left sequence.
    pub fn left(&self) -> &[T] {
        &self.left
    }

    /// Returns the right sequence.
    pub fn right(&self) -> &[U] {
        &self.right
    }

    /// Borrows the matched pairs.
    pub fn pairs(&self) -> Result<&[Pair<T, U>]> {
        match &self.state {
            JoinState::Joined(pairs) => Ok(pairs),
            JoinState::Unjoined => Err(QueryError::JoinNotApplied),
        }
    }

    /// Number of matched pairs.
    pub fn count(&self) -> Result<usize> {
        self.pairs().map(|pairs| pairs.len())
    }

    /// Keeps the matched pairs satisfying `predicate`, in order.
    #[doc(alias = "where")]
    pub fn filter<P>(mut self, predicate: P) -> Result<Self>
    where
        P: FnMut(&Pair<T, U>) -> bool,
    {
        match &mut self.state {
            JoinState::Joined(pairs) => pairs.retain(predicate),
            JoinState::Unjoined => return Err(QueryError::JoinNotApplied),
        }
        Ok(self)
    }

    /// Groups right elements under the key of their left element.
    ///
    /// Groups are ordered by the first appearance of each key among the
    /// matched pairs. The left element of a group is the first one seen with
    /// that key.
    pub fn group_by_left<K, F>(self, key: F) -> Result<Selector<Pair<T, Vec<U>>>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        Ok(group_indexed(self.into_pairs()?, key))
    }

    /// Like [`group_by_left`](Self::group_by_left) for keys that only
    /// support equality. Keys are matched by a linear scan.
    pub fn group_by_left_eq<K, F>(self, key: F) -> Result<Selector<Pair<T, Vec<U>>>>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        Ok(group_scanned(self.into_pairs()?, key))
    }

    /// Projects every matched pair into a new [`Selector`].
    pub fn select<K, F>(self, func: F) -> Result<Selector<K>>
    where
        F: FnMut(Pair<T, U>) -> K,
    {
        Ok(Selector::new(
            self.into_pairs()?.into_iter().map(func).collect(),
        ))
    }

    /// Returns the matched pairs.
    pub fn to_list(self) -> Result<Vec<Pair<T, U>>> {
        self.into_pairs()
    }

    /// Builds a key to value mapping from the matched pairs.
    ///
    /// Fails with [`QueryError::DuplicateKey`] on the first key seen twice.
    pub fn to_map<K, V, FK, FV>(self, mut key: FK, mut value: FV) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        FK: FnMut(&Pair<T, U>) -> K,
        FV: FnMut(Pair<T, U>) -> V,
    {
        collect_unique(
            self.into_pairs()?
                .into_iter()
                .map(|pair| (key(&pair), value(pair))),
        )
    }

    fn into_pairs(self) -> Result<Vec<Pair<T, U>>> {
        match self.state {
            JoinState::Joined(pairs) => Ok(pairs),
            JoinState::Unjoined => Err(QueryError::JoinNotApplied),
        }
    }
}

impl<L, U> JoinSelector<Option<L>, U> {
    /// Groups by left key, skipping pairs whose left element is absent.
    pub fn group_by_present_left<K, F>(self, key: F) -> Result<Selector<Pair<L, Vec<U>>>>
    where
        K: Eq + Hash,
        F: FnMut(&L) -> K,
    {
        let present = self
            .into_pairs()?
            .into_iter()
            .filter_map(|pair| pair.left.map(|left| Pair::of(left, pair.right)));
        Ok(group_indexed(present, key))
    }
}

/// First-occurrence grouping backed by a key to position index.
fn group_indexed<T, U, K, F, I>(pairs: I, mut key: F) -> Selector<Pair<T, Vec<U>>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    I: IntoIterator<Item = Pair<T, U>>,
{
    let mut groups: Vec<Pair<T, Vec<U>>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for Pair { left, right } in pairs {
        match index.entry(key(&left)) {
            Entry::Occupied(slot) => groups[*slot.get()].right.push(right),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(Pair::of(left, vec![right]));
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(groups = groups.len(), "group_by_left");

    Selector::new(groups)
}

/// First-occurrence grouping by linear equality scan.
fn group_scanned<T, U, K, F, I>(pairs: I, mut key: F) -> Selector<Pair<T, Vec<U>>>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
    I: IntoIterator<Item = Pair<T, U>>,
{
    let mut groups: Vec<Pair<T, Vec<U>>> = Vec::new();
    let mut keys: Vec<K> = Vec::new();

    for Pair { left, right } in pairs {
        let k = key(&left);
        match keys.iter().position(|seen| *seen == k) {
            Some(idx) => groups[idx].right.push(right),
            None => {
                keys.push(k);
                groups.push(Pair::of(left, vec![right]));
            }
        }
    }

    Selector::new(groups)
}
