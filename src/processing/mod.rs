//! The map/reduce core.
//!
//! This layer is pure and synchronous: it enumerates a source collection's
//! entries in order, optionally maps each entry, and optionally folds the
//! mapped values into one accumulator. All behavior is driven by which
//! fields of a [`crate::transform::Transform`] are present.
//!
//! Currently implemented:
//!
//! - [`map()`]: per-entry mapping into a value sequence
//! - [`reduce()`]: ordered fold with an optional initial accumulator
//! - [`collect()`]: the dispatching entrypoint, including named pairs and
//!   result chaining
//!
//! ## Example: named pairs with chaining
//!
//! ```rust
//! use map_collect::{collect, CollectOptions, Transform, TransformSet, Value};
//!
//! let source = Value::seq([0, 1, 2]);
//! let transforms = TransformSet::named([
//!     (
//!         "incremented",
//!         Transform::new().with_map(|v, _k| Value::from(v.as_i64().unwrap_or(0) + 1)),
//!     ),
//!     (
//!         "total",
//!         Transform::new()
//!             .with_data("incremented")
//!             .with_reduce(|acc, v, _i| {
//!                 Value::from(acc.as_i64().unwrap_or(0) + v.as_i64().unwrap_or(0))
//!             })
//!             .with_init(0),
//!     ),
//! ]);
//!
//! let out = collect(&source, &transforms, &CollectOptions::default());
//! assert_eq!(out.get("incremented"), Some(&Value::seq([1, 2, 3])));
//! assert_eq!(out.get("total"), Some(&Value::Int64(6)));
//! ```

pub mod collect;
pub mod map;
pub mod reduce;

pub use collect::{collect, CollectOptions};
pub use map::map;
pub use reduce::reduce;
