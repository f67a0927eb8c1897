//! fluentq - Fluent query combinators for in-memory Rust collections.
//!
//! fluentq brings relational-query idioms (`where`, `select`, `join`,
//! `group by`) to ordinary sequences. It supports:
//!
//! - Filtering, projection and one-level flattening
//! - Stable ordering by key, with or without a custom comparator
//! - First-occurrence deduplication and key grouping
//! - Quantifiers, first-match lookups and numeric folds
//! - Nested-loop joins under an arbitrary matching predicate
//!
//! # Quick Start
//!
//! ```rust
//! use fluentq::Q;
//!
//! #[derive(Clone)]
//! struct Product {
//!     name: &'static str,
//!     category: u32,
//! }
//!
//! #[derive(Clone)]
//! struct Category {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let products = vec![
//!     Product { name: "Cat", category: 1 },
//!     Product { name: "dog", category: 2 },
//!     Product { name: "bird", category: 3 },
//! ];
//! let categories = vec![
//!     Category { id: 1, name: "cat" },
//!     Category { id: 2, name: "dog" },
//!     Category { id: 3, name: "bird" },
//! ];
//!
//! let names = Q::from(products)
//!     .join(categories)
//!     .on(|p, c| p.category == c.id)
//!     .select(|pair| (pair.left.name, pair.right.name))?
//!     .to_list();
//!
//! assert_eq!(names, vec![("Cat", "cat"), ("dog", "dog"), ("bird", "bird")]);
//! # Ok::<(), fluentq::QueryError>(())
//! ```
//!
//! # Evaluation
//!
//! Every operation is eager: it runs to completion and materializes its
//! result before returning. Selectors own their sequence and are moved
//! through the chain, so each step consumes the previous one.
//!
//! # Joins
//!
//! A [`JoinSelector`] must be matched with [`JoinSelector::on`] before any
//! pair is read. Reading pairs earlier fails with
//! [`QueryError::JoinNotApplied`] (code `JOIN_EX`):
//!
//! ```rust
//! use fluentq::{Q, QueryError};
//!
//! let err = Q::join(vec![1, 2], vec![2, 3]).to_list().unwrap_err();
//! assert_eq!(err, QueryError::JoinNotApplied);
//! assert_eq!(err.code(), "JOIN_EX");
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`Pair`], [`Group`] and [`Dir`] |
//! | `tracing` | `trace!` events from the join match step and grouping |

mod error;
mod facade;
mod group;
mod join;
mod ordering;
mod pair;
mod selector;

// Re-export public API
pub use error::{QueryError, Result};
pub use facade::Q;
pub use group::Group;
pub use join::{JoinSelector, JoinState};
pub use ordering::Dir;
pub use pair::Pair;
pub use selector::Selector;
