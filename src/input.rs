use miette::SourceSpan;
use serde_json::Value as JsonValue;

use crate::value::{Value, ValueType};

#[derive(thiserror::Error, miette::Diagnostic, Debug)]
pub enum InputError {
    #[error("invalid JSON input: {cause}")]
    Json {
        cause: serde_json::Error,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("expected a JSON array but found a {0}")]
    #[diagnostic(help("wrap the values in [ and ]"))]
    NotAnArray(ValueType),
}

/// Reads the values to count from `input`.
///
/// Input that looks like JSON (starts with `[` or `{`) must be a JSON array. Anything else is
/// split on whitespace and every token is read with [`parse_token`].
///
/// # Errors
/// Fails if the input looks like JSON but isn't a valid JSON array.
pub fn parse_input(input: &str) -> Result<Vec<Value>, InputError> {
    let trimmed = input.trim_start();
    if trimmed.starts_with(['[', '{']) {
        log::debug!("reading input as a JSON array");
        return parse_json_array(input);
    }

    Ok(input.split_whitespace().map(parse_token).collect())
}

/// Parses `input` as a JSON array of values.
///
/// # Errors
/// Fails if `input` isn't valid JSON or if the top level value isn't an array.
pub fn parse_json_array(input: &str) -> Result<Vec<Value>, InputError> {
    let json = serde_json::from_str::<JsonValue>(input).map_err(|cause| InputError::Json {
        span: error_span(input, cause.line(), cause.column()),
        cause,
    })?;

    match Value::from(json) {
        Value::List(values) => Ok(values),
        value => Err(InputError::NotAnArray(value.value_type())),
    }
}

/// Reads a single token: valid JSON becomes the value it describes, anything else is taken as a
/// string.
#[must_use]
pub fn parse_token(token: &str) -> Value {
    match serde_json::from_str::<JsonValue>(token) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(token),
    }
}

// serde_json reports 1-based lines and columns, miette wants a byte offset
fn error_span(input: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = input
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(input.len());
    let length = usize::from(offset < input.len());

    (offset, length).into()
}

#[cfg(test)]
mod test {
    use super::{parse_input, parse_json_array, parse_token, InputError};
    use crate::value::{Value, ValueType};
    use num::BigInt;

    #[test]
    fn tokens_are_json_or_strings() {
        assert_eq!(parse_token("1"), Value::from(1));
        assert_eq!(parse_token("-2.5"), Value::from(-2.5));
        assert_eq!(parse_token("true"), Value::from(true));
        assert_eq!(parse_token("null"), Value::Unit);
        assert_eq!(parse_token("\"1\""), Value::from("1"));
        assert_eq!(parse_token("abc"), Value::from("abc"));
    }

    #[test]
    fn whitespace_separated_input() {
        let values = parse_input("a 1\n  a\t2").unwrap();
        assert_eq!(
            values,
            vec![
                Value::from("a"),
                Value::from(1),
                Value::from("a"),
                Value::from(2)
            ]
        );
    }

    #[test]
    fn json_array_input() {
        let values = parse_input(r#" ["a", 1, [2], {"k": null}, 18446744073709551615]"#).unwrap();
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], Value::from("a"));
        assert_eq!(values[2].value_type(), ValueType::List);
        assert_eq!(values[3].value_type(), ValueType::Map);
        assert_eq!(values[4], Value::from(BigInt::from(u64::MAX)));
    }

    #[test]
    fn empty_input_has_no_values() {
        assert!(parse_input("").unwrap().is_empty());
        assert!(parse_input("[]").unwrap().is_empty());
    }

    #[test]
    fn object_is_not_an_array() {
        let err = parse_input(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, InputError::NotAnArray(ValueType::Map)));
    }

    #[test]
    fn invalid_json_points_at_the_error() {
        let err = parse_json_array("[1,\n 2,,]").unwrap_err();
        let InputError::Json { span, .. } = &err else {
            panic!("expected a JSON error, got {err:?}");
        };
        // somewhere on the second line
        assert!((4..9).contains(&span.offset()), "{span:?}");
    }
}
