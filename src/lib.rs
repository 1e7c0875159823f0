//! Maximum of a selected value over a collection.
//!
//! A selector projects every element to a number (any primitive integer,
//! `f32`/`f64`, or with the `bigint` feature an arbitrary-precision integer),
//! and the largest projection is returned. Empty input yields `None`.
//!
//! NaN is not silently skipped: the maximum of a set containing an
//! unorderable value is itself unorderable, so NaN is returned instead.
//!
//! ```
//! use max_of::{max_of, MaxOfExt};
//!
//! struct Item {
//!     name: &'static str,
//!     count: u64,
//! }
//!
//! let inventory = [
//!     Item { name: "mustard", count: 2 },
//!     Item { name: "soy", count: 4 },
//!     Item { name: "tomato", count: 32 },
//! ];
//!
//! assert_eq!(Some(32), max_of(&inventory, |i| i.count));
//!
//! // Works on any iterator, too
//! let longest = inventory.iter().max_of(|i| i.name.len());
//! assert_eq!(Some(7), longest);
//!
//! // NaN poisons the result
//! let max = max_of(&[1.0, f64::NAN, 3.0], |x| *x);
//! assert!(max.is_some_and(f64::is_nan));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]

mod agg;
mod ext;
mod selectable;
mod slice;

pub use ext::MaxOfExt;
pub use selectable::Selectable;
pub use slice::{max_of, try_max_of};
