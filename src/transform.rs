//! Transform descriptions: one map/reduce pair, and sets of named pairs.

use crate::types::{Key, Value};
use std::fmt;

/// Per-entry transform function.
///
/// Receives each entry's value and its index-or-name key, and returns the
/// mapped value.
pub type MapFn = dyn Fn(&Value, Key<'_>) -> Value;

/// Fold function.
///
/// Receives the accumulator, the current element, and the element's index in
/// the mapped sequence, and returns the new accumulator.
pub type ReduceFn = dyn Fn(Value, &Value, usize) -> Value;

/// One unit of work: an optional per-entry map, an optional fold, an optional
/// initial accumulator, and an optional named source.
///
/// Every field is optional and presence drives behavior:
///
/// | `map` | `reduce` | result |
/// |-------|----------|--------|
/// | no    | no       | the source collection, unchanged |
/// | yes   | no       | sequence of mapped values |
/// | no    | yes      | fold over the source's values in order |
/// | yes   | yes      | fold over the mapped values |
///
/// `init` seeds the fold; inside a [`TransformSet::Named`] run, a string
/// `init` naming an already-computed pair substitutes that pair's result.
/// `data` names an already-computed pair whose result replaces the original
/// source for this pair; it only has effect in the named form.
#[derive(Default)]
pub struct Transform {
    map: Option<Box<MapFn>>,
    reduce: Option<Box<ReduceFn>>,
    init: Option<Value>,
    data: Option<String>,
}

impl Transform {
    /// An empty transform: no map, no reduce, no init, no chained source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-entry map function.
    pub fn with_map<F>(mut self, map: F) -> Self
    where
        F: Fn(&Value, Key<'_>) -> Value + 'static,
    {
        self.map = Some(Box::new(map));
        self
    }

    /// Set the fold function.
    pub fn with_reduce<F>(mut self, reduce: F) -> Self
    where
        F: Fn(Value, &Value, usize) -> Value + 'static,
    {
        self.reduce = Some(Box::new(reduce));
        self
    }

    /// Set the initial accumulator for the fold.
    ///
    /// `0`, `false`, and `""` are all present values, distinct from no init.
    pub fn with_init(mut self, init: impl Into<Value>) -> Self {
        self.init = Some(init.into());
        self
    }

    /// Use the named pair's already-computed result as this pair's source.
    pub fn with_data(mut self, name: impl Into<String>) -> Self {
        self.data = Some(name.into());
        self
    }

    /// The map function, if set.
    pub fn map(&self) -> Option<&MapFn> {
        self.map.as_deref()
    }

    /// The fold function, if set.
    pub fn reduce(&self) -> Option<&ReduceFn> {
        self.reduce.as_deref()
    }

    /// The initial accumulator, if set.
    pub fn init(&self) -> Option<&Value> {
        self.init.as_ref()
    }

    /// The chained source name, if set.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("map", &self.map.is_some())
            .field("reduce", &self.reduce.is_some())
            .field("init", &self.init)
            .field("data", &self.data)
            .finish()
    }
}

/// What to run against a source collection: a single pair whose result is
/// returned directly, or named pairs whose results are returned as a record.
///
/// Named pairs are evaluated in order; later pairs may reference any earlier
/// pair's result through [`Transform::with_data`] or a string init.
#[derive(Debug)]
pub enum TransformSet {
    /// A single map/reduce pair.
    Single(Transform),
    /// Named pairs in evaluation order.
    Named(Vec<(String, Transform)>),
}

impl TransformSet {
    /// A set holding one pair.
    pub fn single(transform: Transform) -> Self {
        TransformSet::Single(transform)
    }

    /// A set of named pairs, evaluated in the given order.
    pub fn named<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Transform)>,
    {
        TransformSet::Named(pairs.into_iter().map(|(name, t)| (name.into(), t)).collect())
    }
}

impl From<Transform> for TransformSet {
    fn from(transform: Transform) -> Self {
        TransformSet::Single(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::{Transform, TransformSet};
    use crate::types::Value;

    #[test]
    fn builder_records_presence() {
        let t = Transform::new();
        assert!(t.map().is_none());
        assert!(t.reduce().is_none());
        assert!(t.init().is_none());
        assert!(t.data().is_none());

        let t = Transform::new()
            .with_map(|v, _k| v.clone())
            .with_reduce(|acc, _v, _i| acc)
            .with_init(0)
            .with_data("earlier");
        assert!(t.map().is_some());
        assert!(t.reduce().is_some());
        assert_eq!(t.init(), Some(&Value::Int64(0)));
        assert_eq!(t.data(), Some("earlier"));
    }

    #[test]
    fn falsy_inits_are_still_present() {
        assert_eq!(Transform::new().with_init(0).init(), Some(&Value::Int64(0)));
        assert_eq!(Transform::new().with_init(false).init(), Some(&Value::Bool(false)));
        assert_eq!(Transform::new().with_init("").init(), Some(&Value::Utf8(String::new())));
    }

    #[test]
    fn named_set_preserves_order() {
        let set = TransformSet::named([("b", Transform::new()), ("a", Transform::new())]);
        match set {
            TransformSet::Named(pairs) => {
                let names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["b", "a"]);
            }
            TransformSet::Single(_) => panic!("expected named set"),
        }
    }

    #[test]
    fn debug_shows_presence_not_closures() {
        let t = Transform::new().with_map(|v, _k| v.clone()).with_init(1);
        let dbg = format!("{t:?}");
        assert!(dbg.contains("map: true"));
        assert!(dbg.contains("reduce: false"));
    }
}
