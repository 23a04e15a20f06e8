//! Per-entry mapping over a collection-shaped [`Value`].

use crate::types::{Key, Value};

/// Apply `mapper` to every entry of `source`, producing a [`Value::Seq`] of
/// the mapped values in enumeration order.
///
/// Sequence entries arrive as `(value, Key::Index)`, record entries as
/// `(value, Key::Name)` in insertion order. Sources with no collection shape
/// have no entries and map to an empty sequence. `source` is never mutated.
pub fn map<F>(source: &Value, mapper: F) -> Value
where
    F: FnMut(&Value, Key<'_>) -> Value,
{
    Value::Seq(map_values(source, mapper))
}

pub(crate) fn map_values<F>(source: &Value, mut mapper: F) -> Vec<Value>
where
    F: FnMut(&Value, Key<'_>) -> Value,
{
    source.entries().map(|(key, value)| mapper(value, key)).collect()
}

#[cfg(test)]
mod tests {
    use super::map;
    use crate::types::{Key, Value};

    #[test]
    fn maps_sequence_values_with_indices() {
        let source = Value::seq([0, 1, 2]);
        let out = map(&source, |v, k| {
            Value::from(v.as_i64().unwrap_or(0) + k.as_index().unwrap_or(0) as i64)
        });
        assert_eq!(out, Value::seq([0, 2, 4]));

        // Original unchanged
        assert_eq!(source, Value::seq([0, 1, 2]));
    }

    #[test]
    fn maps_record_values_with_name_keys() {
        let source = Value::record([("zero", 0), ("one", 1), ("two", 2)]);
        let out = map(&source, |_v, k| k.to_value());
        assert_eq!(out, Value::seq(["zero", "one", "two"]));
    }

    #[test]
    fn record_values_keep_insertion_order() {
        let source = Value::record([("b", 1), ("a", 2)]);
        let out = map(&source, |v, _k| v.clone());
        assert_eq!(out, Value::seq([1, 2]));
    }

    #[test]
    fn scalar_source_maps_to_empty_sequence() {
        let called = std::cell::Cell::new(false);
        let out = map(&Value::Int64(9), |v, _k: Key<'_>| {
            called.set(true);
            v.clone()
        });
        assert_eq!(out, Value::Seq(Vec::new()));
        assert!(!called.get());
    }
}
