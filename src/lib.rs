#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod count;
pub mod hash_map;
pub mod input;
pub mod json;
pub mod key;
pub mod value;

pub use count::{count, make_count_dictionary, CountExt, Counts};
pub use key::{Key, UnhashableKeyError};
pub use value::Value;

use input::InputError;

#[derive(thiserror::Error, miette::Diagnostic, Debug)]
pub enum TallyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Unhashable(#[from] UnhashableKeyError),
}

/// Reads values from `input` and counts them.
///
/// # Errors
/// Fails when the input can't be read or contains a value that can't be counted.
pub fn run_str(input: &str) -> Result<Counts<Key>, TallyError> {
    let values = input::parse_input(input)?;
    Ok(make_count_dictionary(&values)?)
}
