use crate::value::int::Int;
use crate::value::num::Number;
use crate::value::{Value, ValueType};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::fmt;
use std::fmt::Formatter;

/// The hashable projection of a [`Value`].
///
/// Variants are ordered by declaration first and by contents second, which gives a total order
/// over keys of mixed types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Unit,
    Bool(bool),
    Int(Int),
    Float(OrderedFloat<f64>),
    String(String),
    Tuple(Vec<Key>),
}

#[derive(thiserror::Error, miette::Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unhashable type: '{value_type}'")]
#[diagnostic(
    code(tally::unhashable_key),
    help("only unit, bools, numbers, strings and tuples of those can be counted")
)]
pub struct UnhashableKeyError {
    pub value_type: ValueType,
}

impl UnhashableKeyError {
    fn of(value: &Value) -> Self {
        Self {
            value_type: value.value_type(),
        }
    }
}

impl TryFrom<&Value> for Key {
    type Error = UnhashableKeyError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Unit => Ok(Key::Unit),
            Value::Bool(b) => Ok(Key::Bool(*b)),
            Value::Number(Number::Int(i)) => Ok(Key::Int(i.clone())),
            Value::Number(Number::Float(f)) => Ok(Key::Float(OrderedFloat(*f))),
            Value::String(string) => Ok(Key::String(string.clone())),
            Value::Tuple(tuple) => {
                let keys = tuple
                    .iter()
                    .map(Key::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Key::Tuple(keys))
            }
            Value::List(_) | Value::Map(_) => Err(UnhashableKeyError::of(value)),
        }
    }
}

impl TryFrom<Value> for Key {
    type Error = UnhashableKeyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Unit => Ok(Self::Unit),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(Number::Int(i)) => Ok(Self::Int(i)),
            Value::Number(Number::Float(f)) => Ok(Self::Float(OrderedFloat(f))),
            Value::String(string) => Ok(Self::String(string)),
            Value::Tuple(tuple) => Ok(Self::Tuple(
                tuple
                    .into_iter()
                    .map(Key::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            value @ (Value::List(_) | Value::Map(_)) => Err(UnhashableKeyError::of(&value)),
        }
    }
}

impl From<&Key> for Value {
    fn from(value: &Key) -> Self {
        match value {
            Key::Unit => Value::Unit,
            Key::Bool(b) => Value::Bool(*b),
            Key::Int(i) => Value::from(i.clone()),
            Key::Float(f) => Value::from(f.into_inner()),
            Key::String(s) => Value::from(s.clone()),
            Key::Tuple(t) => Value::Tuple(t.iter().map(Value::from).collect()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(Int::from(value))
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(Int::from(value))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unit => write!(f, "()"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Float(n) => write!(f, "{}", Number::Float(n.into_inner())),
            Key::String(s) => write!(f, "{s:?}"),
            Key::Tuple(t) => write!(f, "({})", t.iter().join(", ")),
        }
    }
}
