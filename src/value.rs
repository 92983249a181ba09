use crate::value::int::Int;
use crate::value::num::{Number, NumberType};
use itertools::Itertools;
use ::num::BigInt;
use std::fmt;

pub mod int;
pub mod num;

/// Enumerates all the different kinds of elements a sequence being counted can hold.
///
/// `Map` keeps its entries as pairs because its keys are themselves values, which may not be
/// hashable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    Number(Number),
    String(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Unit => ValueType::Unit,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(n) => ValueType::Number(n.into()),
            Value::String(_) => ValueType::String,
            Value::Tuple(_) => ValueType::Tuple,
            Value::List(_) => ValueType::List,
            Value::Map(_) => ValueType::Map,
        }
    }

    #[must_use]
    pub fn tuple<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Tuple(values.into_iter().map(Into::into).collect())
    }
}

// -----------------------------------------------------
// Into value
// -----------------------------------------------------

impl From<()> for Value {
    fn from(_value: ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Self::Number(Number::Int(value.simplify()))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

// ValueType

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValueType {
    Unit,
    Bool,
    Number(NumberType),
    String,
    Tuple,
    List,
    Map,
}

impl From<&Value> for ValueType {
    fn from(value: &Value) -> Self {
        value.value_type()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "unit"),
            Self::Bool => write!(f, "bool"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String => write!(f, "string"),
            Self::Tuple => write!(f, "tuple"),
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "()"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Tuple(values) => write!(f, "({})", values.iter().join(", ")),
            Self::List(values) => write!(f, "[{}]", values.iter().join(", ")),
            Self::Map(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Value, ValueType};
    use crate::value::num::NumberType;

    #[test]
    fn display_quotes_strings_inside_containers() {
        let value = Value::from(vec![Value::from("a"), Value::from(1), Value::Unit]);
        assert_eq!(value.to_string(), r#"["a", 1, ()]"#);
    }

    #[test]
    fn display_map_and_tuple() {
        let value = Value::Map(vec![(Value::tuple([1, 2]), Value::from(true))]);
        assert_eq!(value.to_string(), "{(1, 2): true}");
    }

    #[test]
    fn value_type_names() {
        assert_eq!(Value::from(1.5).value_type(), ValueType::Number(NumberType::Float));
        assert_eq!(ValueType::Map.to_string(), "map");
        assert_eq!(Value::from(3).value_type().to_string(), "int");
    }
}
