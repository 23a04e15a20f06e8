//! Folding a sequence of values into a single accumulator.

use crate::types::Value;

/// Fold `values` in order, producing the final accumulator.
///
/// With an `init`, every element is folded starting from it. Without one,
/// the fold seeds from the first element and reduces the rest, so summing
/// `[0, 1, 2]` with no init still yields `3`; each element keeps its own
/// index either way. An empty input with no init yields [`Value::Null`].
pub fn reduce<F>(values: &[Value], mut reducer: F, init: Option<Value>) -> Value
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    let (mut acc, skip) = match init {
        Some(init) => (init, 0),
        None => {
            let Some(first) = values.first() else {
                return Value::Null;
            };
            (first.clone(), 1)
        }
    };

    for (index, value) in values.iter().enumerate().skip(skip) {
        acc = reducer(acc, value, index);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::types::Value;

    fn add(acc: Value, value: &Value, _index: usize) -> Value {
        Value::from(acc.as_i64().unwrap_or(0) + value.as_i64().unwrap_or(0))
    }

    #[test]
    fn folds_with_explicit_init() {
        let values = [Value::Int64(1), Value::Int64(2), Value::Int64(3)];
        assert_eq!(reduce(&values, add, Some(Value::Int64(0))), Value::Int64(6));
        assert_eq!(reduce(&values, add, Some(Value::Int64(10))), Value::Int64(16));
    }

    #[test]
    fn seeds_from_first_element_without_init() {
        let values = [Value::Int64(0), Value::Int64(1), Value::Int64(2)];
        assert_eq!(reduce(&values, add, None), Value::Int64(3));
    }

    #[test]
    fn indices_match_element_positions() {
        let values = [Value::Int64(5), Value::Int64(5), Value::Int64(5)];

        let seen = std::cell::RefCell::new(Vec::new());
        let _ = reduce(
            &values,
            |acc, _v, i| {
                seen.borrow_mut().push(i);
                acc
            },
            Some(Value::Null),
        );
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);

        seen.borrow_mut().clear();
        let _ = reduce(
            &values,
            |acc, _v, i| {
                seen.borrow_mut().push(i);
                acc
            },
            None,
        );
        // First element is the seed, so folding starts at index 1.
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn empty_input_without_init_is_null() {
        assert_eq!(reduce(&[], add, None), Value::Null);
    }

    #[test]
    fn empty_input_with_init_returns_init() {
        assert_eq!(reduce(&[], add, Some(Value::Int64(7))), Value::Int64(7));
    }
}
