//! JSON interchange for [`Value`].
//!
//! A [`Value`] serializes as the matching JSON shape: scalars to scalars,
//! sequences to arrays, records to objects. Record key order is preserved in
//! both directions, so a parsed object enumerates its entries in document
//! order.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::CollectResult;
use crate::types::Value;

/// Parse a JSON document into a [`Value`].
///
/// Integers that fit `i64` become [`Value::Int64`]; everything else numeric
/// becomes [`Value::Float64`].
pub fn from_json_str(input: &str) -> CollectResult<Value> {
    Ok(serde_json::from_str(input)?)
}

/// Serialize a [`Value`] as a compact JSON string.
///
/// Non-finite floats serialize as JSON `null`, following serde_json.
pub fn to_json_string(value: &Value) -> CollectResult<String> {
    Ok(serde_json::to_string(value)?)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::Utf8(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a json-shaped value")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Int64(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
                if let Ok(v) = i64::try_from(v) {
                    Ok(Value::Int64(v))
                } else {
                    Ok(Value::Float64(v as f64))
                }
            }

            fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
                Ok(Value::Float64(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Value, E> {
                Ok(Value::Utf8(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Value, E> {
                Ok(Value::Utf8(v))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Seq(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    pairs.push((key, value));
                }
                Ok(Value::Record(pairs))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{from_json_str, to_json_string};
    use crate::types::Value;

    #[test]
    fn parses_scalars_arrays_and_objects() {
        assert_eq!(from_json_str("null").unwrap(), Value::Null);
        assert_eq!(from_json_str("true").unwrap(), Value::Bool(true));
        assert_eq!(from_json_str("3").unwrap(), Value::Int64(3));
        assert_eq!(from_json_str("2.5").unwrap(), Value::Float64(2.5));
        assert_eq!(from_json_str("\"hi\"").unwrap(), Value::from("hi"));
        assert_eq!(from_json_str("[0,1,2]").unwrap(), Value::seq([0, 1, 2]));
        assert_eq!(
            from_json_str(r#"{"zero":0,"one":1}"#).unwrap(),
            Value::record([("zero", 0), ("one", 1)])
        );
    }

    #[test]
    fn object_keys_keep_document_order() {
        let v = from_json_str(r#"{"b":1,"a":2,"c":3}"#).unwrap();
        let keys: Vec<String> = v.entries().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn round_trip_preserves_shape_and_order() {
        let input = r#"{"b":[1,2,{"x":null}],"a":"text","n":-4}"#;
        let v = from_json_str(input).unwrap();
        assert_eq!(to_json_string(&v).unwrap(), input);
    }

    #[test]
    fn large_unsigned_integers_fall_back_to_float() {
        let v = from_json_str("18446744073709551615").unwrap();
        assert_eq!(v, Value::Float64(u64::MAX as f64));
    }

    #[test]
    fn non_finite_floats_serialize_as_null() {
        assert_eq!(to_json_string(&Value::Float64(f64::NAN)).unwrap(), "null");
    }

    #[test]
    fn invalid_json_reports_error() {
        let err = from_json_str("{nope").unwrap_err();
        assert!(err.to_string().starts_with("json error"));
    }
}
