//! The `collect` entrypoint: input guards, dispatch, and named-pair chaining.

use crate::transform::{Transform, TransformSet};
use crate::types::Value;

use super::{map, reduce};

/// Options accepted by [`collect`].
///
/// No options are recognized yet; the parameter exists so call sites stay
/// stable as options are added.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {}

/// Run a set of map/reduce pairs against a source collection.
///
/// For [`TransformSet::Single`], the pair's computed value is returned
/// directly: the mapped sequence, the fold result, or the source unchanged
/// when the pair has neither function. For [`TransformSet::Named`], pairs
/// run in order against the same source and the results come back as a
/// [`Value::Record`] keyed by pair name; a later pair may consume an earlier
/// pair's result as its source ([`Transform::with_data`]) or as its initial
/// accumulator (a string init naming the earlier pair).
///
/// An absent ([`Value::Null`]) source, an empty sequence, and an empty
/// record all short-circuit to an empty record without error. References to
/// names that are not computed yet, or do not exist, silently fall back to
/// the original source or the literal init.
///
/// ```
/// use map_collect::{collect, CollectOptions, Transform, TransformSet, Value};
///
/// let source = Value::seq([0, 1, 2]);
/// let sum = Transform::new()
///     .with_map(|v, _k| Value::from(v.as_i64().unwrap_or(0) + 1))
///     .with_reduce(|acc, v, _i| Value::from(acc.as_i64().unwrap_or(0) + v.as_i64().unwrap_or(0)))
///     .with_init(0);
/// let out = collect(&source, &TransformSet::single(sum), &CollectOptions::default());
/// assert_eq!(out, Value::Int64(6));
/// ```
pub fn collect(source: &Value, transforms: &TransformSet, _options: &CollectOptions) -> Value {
    if is_empty_input(source) {
        return Value::Record(Vec::new());
    }

    match transforms {
        TransformSet::Single(pair) => eval_pair(source, pair, &[]).value,
        TransformSet::Named(pairs) => {
            let mut results: Vec<(String, Value)> = Vec::with_capacity(pairs.len());
            for (name, pair) in pairs {
                let eval = eval_pair(source, pair, &results);
                results.push((name.clone(), eval.value));
            }
            Value::Record(results)
        }
    }
}

/// True when the guard clause applies: absent source or a collection with
/// zero entries. Empty records short-circuit the same way empty sequences
/// do.
pub(crate) fn is_empty_input(source: &Value) -> bool {
    match source {
        Value::Null => true,
        Value::Seq(items) => items.is_empty(),
        Value::Record(pairs) => pairs.is_empty(),
        _ => false,
    }
}

/// Outcome of evaluating one pair, with enough detail for the observing
/// engine in [`crate::execution`] to report on.
pub(crate) struct PairEval {
    pub value: Value,
    pub entries_in: usize,
    pub reduced: bool,
    pub chained_data: bool,
    pub chained_init: bool,
}

/// Evaluate one pair against `source`, resolving `data`/`init` references
/// through the already-computed `computed` results.
///
/// `computed` only ever holds results of pairs that ran earlier, so forward
/// references and cycles cannot resolve and fall back by construction.
pub(crate) fn eval_pair(source: &Value, pair: &Transform, computed: &[(String, Value)]) -> PairEval {
    let chained = pair.data().and_then(|name| lookup(computed, name));
    let chained_data = chained.is_some();
    let data = chained.unwrap_or(source);
    let entries_in = data.entry_count();

    let Some(reducer) = pair.reduce() else {
        let value = match pair.map() {
            Some(mapper) => map::map(data, mapper),
            None => data.clone(),
        };
        return PairEval {
            value,
            entries_in,
            reduced: false,
            chained_data,
            chained_init: false,
        };
    };

    let values = match pair.map() {
        Some(mapper) => map::map_values(data, mapper),
        // No map: the fold input is the collection's values in enumeration
        // order.
        None => data.entries().map(|(_, value)| value.clone()).collect(),
    };

    let (init, chained_init) = resolve_init(pair.init(), computed);
    let value = reduce::reduce(&values, reducer, init);
    PairEval {
        value,
        entries_in,
        reduced: true,
        chained_data,
        chained_init,
    }
}

/// A string init naming an already-computed result substitutes that result;
/// anything else is used literally.
fn resolve_init(init: Option<&Value>, computed: &[(String, Value)]) -> (Option<Value>, bool) {
    match init {
        None => (None, false),
        Some(Value::Utf8(name)) => match lookup(computed, name) {
            Some(value) => (Some(value.clone()), true),
            None => (Some(Value::Utf8(name.clone())), false),
        },
        Some(other) => (Some(other.clone()), false),
    }
}

fn lookup<'a>(computed: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    computed.iter().find(|(k, _)| k == name).map(|(_, v)| v)
}
