//! Entry points for building selectors.

use crate::join::JoinSelector;
use crate::selector::Selector;

/// Static constructors that start a query chain.
///
/// # Example
///
/// ```
/// use fluentq::Q;
///
/// let evens = Q::from(1..=6).filter(|n| n % 2 == 0).to_list();
/// assert_eq!(evens, vec![2, 4, 6]);
///
/// let letters = ["a", "b"];
/// let upper = Q::from_slice(&letters).select(|s| s.to_uppercase()).to_list();
/// assert_eq!(upper, vec!["A", "B"]);
/// assert_eq!(letters, ["a", "b"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Q;

impl Q {
    /// Starts a chain over an owned sequence.
    pub fn from<I>(items: I) -> Selector<I::Item>
    where
        I: IntoIterator,
    {
        items.into_iter().collect()
    }

    /// Starts a chain over a copy of `items`.
    ///
    /// The selector never aliases the caller's storage.
    pub fn from_slice<T>(items: &[T]) -> Selector<T>
    where
        T: Clone,
    {
        Selector::new(items.to_vec())
    }

    /// Pairs two sequences in a [`JoinSelector`], unjoined.
    pub fn join<L, R>(left: L, right: R) -> JoinSelector<L::Item, R::Item>
    where
        L: IntoIterator,
        R: IntoIterator,
    {
        JoinSelector::new(left.into_iter().collect(), right.into_iter().collect())
    }
}
