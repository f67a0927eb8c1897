//! Single-sequence selector.
//!
//! [`Selector`] owns one ordered sequence and exposes chainable,
//! order-preserving transformations. Every transformation consumes the
//! selector and returns one holding the newly derived sequence, so chains read
//! top to bottom without intermediate bindings.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::{QueryError, Result};
use crate::group::Group;
use crate::join::JoinSelector;
use crate::ordering::{sort_by_key_with, Dir};

/// A chainable wrapper around one ordered sequence.
///
/// # Example
///
/// ```
/// use fluentq::Q;
///
/// let names = Q::from(vec!["dog", "cat", "bird", "cat"])
///     .distinct(|s| *s)
///     .order_by(|s| *s)
///     .to_list();
///
/// assert_eq!(names, vec!["bird", "cat", "dog"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector<T> {
    items: Vec<T>,
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector { items: Vec::new() }
    }
}

impl<T> Selector<T> {
    /// Creates a selector owning `items`.
    pub fn new(items: Vec<T>) -> Self {
        Selector { items }
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Keeps the elements satisfying `predicate`, in their original order.
    #[doc(alias = "where")]
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
        self
    }

    /// Maps every element to a new value, one to one.
    pub fn select<K, F>(self, func: F) -> Selector<K>
    where
        F: FnMut(T) -> K,
    {
        Selector::new(self.items.into_iter().map(func).collect())
    }

    /// Maps every element to a sub-sequence and concatenates them in order.
    ///
    /// Flattens exactly one level.
    pub fn flat<R, I, F>(self, func: F) -> Selector<R>
    where
        F: FnMut(T) -> I,
        I: IntoIterator<Item = R>,
    {
        Selector::new(self.items.into_iter().flat_map(func).collect())
    }

    /// Stable ascending sort by an extracted key.
    pub fn order_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.order_by_dir(key, Dir::Asc)
    }

    /// Stable ascending sort by an extracted key compared with `cmp`.
    pub fn order_by_with<K, F, C>(mut self, key: F, cmp: C) -> Self
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        sort_by_key_with(&mut self.items, Dir::Asc, key, cmp);
        self
    }

    /// Sorts ascending by key, then reverses the sorted sequence.
    ///
    /// Elements with equal keys end up in the reverse of their input order.
    pub fn order_by_desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.order_by_dir(key, Dir::Desc)
    }

    /// Like [`order_by_desc`](Self::order_by_desc), comparing keys with `cmp`.
    pub fn order_by_desc_with<K, F, C>(mut self, key: F, cmp: C) -> Self
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        sort_by_key_with(&mut self.items, Dir::Desc, key, cmp);
        self
    }

    /// Sorts by key in the given direction.
    pub fn order_by_dir<K, F>(mut self, key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        sort_by_key_with(&mut self.items, dir, key, K::cmp);
        self
    }

    /// Keeps the first element for each distinct key, in source order.
    pub fn distinct<K, F>(mut self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.items.retain(|item| seen.insert(key(item)));
        self
    }

    /// Partitions the elements by key.
    ///
    /// Groups come out in no particular order. Inside a group, elements keep
    /// their source order.
    pub fn group_by<K, F>(self, mut key: F) -> Selector<Group<K, T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for item in self.items {
            groups.entry(key(&item)).or_default().push(item);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(groups = groups.len(), "group_by");

        Selector::new(
            groups
                .into_iter()
                .map(|(key, values)| Group { key, values })
                .collect(),
        )
    }

    /// Appends the elements of `other` after the current ones.
    ///
    /// Accepts another [`Selector`] or any sequence.
    pub fn concat<I>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(other);
        self
    }

    /// Applies `action` to every element in order. Mutation is allowed.
    #[doc(alias = "foreach")]
    pub fn for_each<F>(mut self, mut action: F) -> Self
    where
        F: FnMut(&mut T),
    {
        for item in &mut self.items {
            action(item);
        }
        self
    }

    /// Skips the first `n` elements.
    pub fn offset(mut self, n: usize) -> Self {
        let n = n.min(self.items.len());
        self.items.drain(..n);
        self
    }

    /// Keeps at most `n` elements.
    pub fn limit(mut self, n: usize) -> Self {
        self.items.truncate(n);
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|item| item == value)
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(|item| predicate(item))
    }

    /// Returns `true` if all elements satisfy `predicate`.
    ///
    /// An empty selector returns `true`.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(|item| predicate(item))
    }

    /// Returns `true` if every element's key equals the first element's key.
    ///
    /// Unlike [`all`](Self::all), an empty selector returns `false`.
    pub fn all_same<K, F>(&self, mut key: F) -> bool
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let Some(first) = self.items.first() else {
            return false;
        };
        let first_key = key(first);
        self.items.iter().all(|item| key(item) == first_key)
    }

    /// Counts the elements satisfying `predicate`.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(*item)).count()
    }

    /// Index of the first element satisfying `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// First element satisfying `predicate`, if any.
    pub fn first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    /// First element satisfying `predicate`, or `default`.
    pub fn first_or<P>(self, predicate: P, default: T) -> T
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().find(predicate).unwrap_or(default)
    }

    /// First element satisfying `predicate`, or `None` when nothing matches.
    ///
    /// Owned counterpart of [`first`](Self::first).
    pub fn first_or_default_by<P>(self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().find(predicate)
    }

    /// First element, or `None` when empty.
    pub fn first_or_default(self) -> Option<T> {
        self.items.into_iter().next()
    }

    /// First element satisfying `predicate`, or `error` returned as is.
    pub fn first_or_throw<E, P>(self, predicate: P, error: E) -> std::result::Result<T, E>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().find(predicate).ok_or(error)
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Sums `key(element)` as `f64`, left to right from `0.0`.
    pub fn sum_f64<F>(&self, mut key: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        self.items.iter().fold(0.0, |total, item| total + key(item))
    }

    /// Sums `key(element)` as `i64`, wrapping on overflow.
    pub fn sum_i64<F>(&self, mut key: F) -> i64
    where
        F: FnMut(&T) -> i64,
    {
        self.items
            .iter()
            .fold(0i64, |total, item| total.wrapping_add(key(item)))
    }

    /// Sums `key(element)` as `i32`, wrapping on overflow.
    pub fn sum_i32<F>(&self, mut key: F) -> i32
    where
        F: FnMut(&T) -> i32,
    {
        self.items
            .iter()
            .fold(0i32, |total, item| total.wrapping_add(key(item)))
    }

    /// Concatenates the string form of every projection, without separator.
    pub fn to_string_by<S, F>(&self, key: F) -> String
    where
        S: Display,
        F: FnMut(&T) -> S,
    {
        self.join_strings(key, "")
    }

    /// Joins the string form of every projection with `separator`.
    pub fn join_strings<S, F>(&self, mut key: F, separator: &str) -> String
    where
        S: Display,
        F: FnMut(&T) -> S,
    {
        let mut out = String::new();
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                out.push_str(separator);
            }
            out.push_str(&key(item).to_string());
        }
        out
    }

    // ========================================================================
    // Materialization
    // ========================================================================

    /// Number of held elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no elements are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the held sequence.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the held elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the held sequence.
    pub fn to_list(self) -> Vec<T> {
        self.items
    }

    /// Returns the held sequence as an owned contiguous buffer.
    pub fn to_array(self) -> Box<[T]> {
        self.items.into_boxed_slice()
    }

    /// Builds a key to value mapping.
    ///
    /// Fails with [`QueryError::DuplicateKey`] on the first key seen twice.
    pub fn to_map<K, V, FK, FV>(self, mut key: FK, mut value: FV) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + Debug,
        FK: FnMut(&T) -> K,
        FV: FnMut(T) -> V,
    {
        collect_unique(self.items.into_iter().map(|item| (key(&item), value(item))))
    }

    /// Pairs this sequence (left) with `other` (right), unjoined.
    pub fn join<U, I>(self, other: I) -> JoinSelector<T, U>
    where
        I: IntoIterator<Item = U>,
    {
        JoinSelector::new(self.items, other.into_iter().collect())
    }
}

/// Collects entries into a map, rejecting repeated keys.
pub(crate) fn collect_unique<K, V, I>(entries: I) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + Debug,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = HashMap::new();
    for (key, value) in entries {
        match map.entry(key) {
            Entry::Occupied(entry) => {
                return Err(QueryError::DuplicateKey {
                    key: format!("{:?}", entry.key()),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }
    Ok(map)
}

impl<T> From<Vec<T>> for Selector<T> {
    fn from(items: Vec<T>) -> Self {
        Selector::new(items)
    }
}

impl<T> FromIterator<T> for Selector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Selector::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Selector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Selector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Selector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
