use serde_json::{json, Number, Value as JsonValue};

use crate::count::Counts;
use crate::key::Key;
use crate::value::int::Int;
use crate::value::Value;

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Unit,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(Int::from(u))
                } else {
                    Value::from(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(values) => Value::List(values.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (Value::String(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Key> for JsonValue {
    fn from(value: &Key) -> Self {
        match value {
            Key::Unit => JsonValue::Null,
            Key::Bool(b) => json!(b),
            Key::Int(Int::Int64(i)) => json!(i),
            // Without arbitrary precision JSON can't hold these as numbers
            Key::Int(int @ Int::BigInt(_)) => JsonValue::String(int.to_string()),
            Key::Float(f) => {
                Number::from_f64(f.into_inner()).map_or(JsonValue::Null, JsonValue::Number)
            }
            Key::String(s) => json!(s),
            Key::Tuple(keys) => JsonValue::Array(keys.iter().map(JsonValue::from).collect()),
        }
    }
}

/// Renders counts as a JSON array of `{"value": .., "count": ..}` objects sorted by key.
///
/// An array is used instead of an object because JSON objects only have string keys, which
/// would make `1` and `"1"` collide.
#[must_use]
pub fn counts_to_json(counts: &Counts<Key>) -> JsonValue {
    JsonValue::Array(
        counts
            .sorted()
            .into_iter()
            .map(|(key, count)| json!({ "value": JsonValue::from(key), "count": count }))
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::counts_to_json;
    use crate::count::make_count_dictionary;
    use crate::value::Value;
    use num::BigInt;
    use serde_json::{json, Value as JsonValue};

    #[test]
    fn nested_json_becomes_values() {
        let json = json!([null, [1, "a"], {"k": 2.5}]);
        assert_eq!(
            Value::from(json),
            Value::List(vec![
                Value::Unit,
                Value::from(vec![Value::from(1), Value::from("a")]),
                Value::Map(vec![(Value::from("k"), Value::from(2.5))]),
            ])
        );
    }

    #[test]
    fn counts_render_as_sorted_pairs() {
        let values = vec![
            Value::from("1"),
            Value::from(1),
            Value::from("1"),
            Value::tuple([Value::from(true), Value::Unit]),
        ];
        let counts = make_count_dictionary(&values).unwrap();
        assert_eq!(
            counts_to_json(&counts),
            json!([
                { "value": 1, "count": 1 },
                { "value": "1", "count": 2 },
                { "value": [true, null], "count": 1 },
            ])
        );
    }

    #[test]
    fn big_ints_render_as_strings() {
        let big: BigInt = BigInt::from(u64::MAX) * 10u32;
        let counts = make_count_dictionary(&[Value::from(big.clone())]).unwrap();
        let json = counts_to_json(&counts);
        assert_eq!(json[0]["value"], JsonValue::String(big.to_string()));
    }
}
