//! `map-collect` is a small library for running map/reduce-style transforms
//! over in-memory collections: apply a per-entry transform ("map") to an
//! ordered sequence or a string-keyed record, and optionally fold the mapped
//! values into a single result ("reduce") from an initial accumulator.
//!
//! The primary entrypoint is [`collect`], which takes a source
//! [`types::Value`], a [`transform::TransformSet`], and [`CollectOptions`].
//! A single pair returns its computed value directly; named pairs return a
//! record of results and may chain, consuming an earlier pair's result as a
//! later pair's source or initial accumulator.
//!
//! ## Quick examples
//!
//! Map a sequence:
//!
//! ```rust
//! use map_collect::{collect, CollectOptions, Transform, TransformSet, Value};
//!
//! let source = Value::seq([0, 1, 2]);
//! let plus_one = Transform::new().with_map(|v, _k| Value::from(v.as_i64().unwrap_or(0) + 1));
//! let out = collect(&source, &TransformSet::single(plus_one), &CollectOptions::default());
//! assert_eq!(out, Value::seq([1, 2, 3]));
//! ```
//!
//! Map a record's keys and fold them:
//!
//! ```rust
//! use map_collect::{collect, CollectOptions, Transform, TransformSet, Value};
//!
//! let source = Value::record([("zero", 0), ("one", 1), ("two", 2)]);
//! let joined = Transform::new()
//!     .with_map(|_v, k| k.to_value())
//!     .with_reduce(|acc, v, _i| {
//!         Value::from(format!("{}{}", acc.as_str().unwrap_or(""), v.as_str().unwrap_or("")))
//!     })
//!     .with_init("");
//! let out = collect(&source, &TransformSet::single(joined), &CollectOptions::default());
//! assert_eq!(out, Value::from("zeroonetwo"));
//! ```
//!
//! Named pairs with chaining:
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
//! let out = collect(&source, &transforms, &CollectOptions::default());
//! assert_eq!(out.get("total"), Some(&Value::Int64(6)));
//! ```
//!
//! ## Behavior notes
//!
//! - An absent source ([`types::Value::Null`]), an empty sequence, and an
//!   empty record all return an empty record rather than an error.
//! - A `data`/string-`init` reference to a name that does not exist, or has
//!   not been computed yet, silently falls back to the original source or
//!   the literal init. No forward references, no cycles.
//! - `init: 0` (or `false`, or `""`) is a present initial accumulator; with
//!   no init at all, the fold seeds from the first element.
//! - The source collection is never mutated, and identical inputs with pure
//!   map/reduce functions produce identical results.
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Value`] model and ordered entry enumeration
//! - [`transform`]: map/reduce pair descriptions and dispatch
//! - [`processing`]: the pure map/reduce core and [`collect`]
//! - [`execution`]: an observed, metered engine over the same core
//! - [`json`]: JSON interchange for [`types::Value`]
//! - [`error`]: error types for the fallible surfaces

pub mod error;
pub mod execution;
pub mod json;
pub mod processing;
pub mod transform;
pub mod types;

pub use error::{CollectError, CollectResult};
pub use processing::{collect, CollectOptions};
pub use transform::{Transform, TransformSet};
pub use types::{Key, Value};
