use std::borrow::Borrow;
use std::cmp::Reverse;
use std::fmt;
use std::hash::Hash;

use itertools::Itertools;

use crate::hash_map::HashMap;
use crate::key::{Key, UnhashableKeyError};
use crate::value::Value;

/// Counts the occurrences of each distinct element in `values`.
///
/// Every element is converted into a [`Key`] and counted in a single pass. The first element
/// that can't be used as a key aborts the count.
///
/// # Errors
/// Returns [`UnhashableKeyError`] if `values` contains a list or a map, or a tuple that contains
/// one of those.
pub fn make_count_dictionary(values: &[Value]) -> Result<Counts<Key>, UnhashableKeyError> {
    let counts = values
        .iter()
        .map(Key::try_from)
        .collect::<Result<Counts<Key>, _>>()?;

    log::trace!(
        "counted {} values into {} distinct keys",
        values.len(),
        counts.len()
    );

    Ok(counts)
}

/// Counts the occurrences of each distinct item produced by `items`.
pub fn count<I>(items: I) -> Counts<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    items.into_iter().collect()
}

pub trait CountExt: Iterator {
    /// Consumes the iterator and counts how often each item occurs.
    fn tally(self) -> Counts<Self::Item>
    where
        Self: Sized,
        Self::Item: Hash + Eq,
    {
        count(self)
    }
}

impl<I: Iterator> CountExt for I {}

/// A mapping from distinct items to the number of times they were seen.
#[derive(Debug, Clone)]
pub struct Counts<K> {
    inner: HashMap<K, usize>,
}

impl<K> Counts<K> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The sum of all counts, which is the length of the counted input.
    #[must_use]
    pub fn total(&self) -> usize {
        self.inner.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.inner.iter().map(|(key, count)| (key, *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.keys()
    }

    #[must_use]
    pub fn into_inner(self) -> HashMap<K, usize> {
        self.inner
    }
}

impl<K: Hash + Eq> Counts<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Returns how often `key` was seen, which is 0 for keys that were never seen.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, key: K) {
        *self.inner.entry(key).or_insert(0) += 1;
    }
}

impl<K: Ord> Counts<K> {
    /// All entries sorted by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&K, usize)> {
        self.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)).collect()
    }

    /// Entries sorted from the highest count to the lowest, ties are broken by key. Limited to
    /// the first `n` entries when `n` is given.
    #[must_use]
    pub fn most_common(&self, n: Option<usize>) -> Vec<(&K, usize)> {
        let sorted = self
            .iter()
            .sorted_by_key(|(key, count)| (Reverse(*count), *key));

        match n {
            Some(n) => sorted.take(n).collect(),
            None => sorted.collect(),
        }
    }
}

impl<K: Hash + Eq> Default for Counts<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> PartialEq for Counts<K> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Hash + Eq> Eq for Counts<K> {}

impl<K: Hash + Eq> FromIterator<K> for Counts<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut counts = Self::new();
        counts.extend(iter);
        counts
    }
}

impl<K: Hash + Eq> Extend<K> for Counts<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<K> IntoIterator for Counts<K> {
    type Item = (K, usize);
    type IntoIter = std::collections::hash_map::IntoIter<K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<K: fmt::Display + Ord> fmt::Display for Counts<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.sorted()
                .into_iter()
                .map(|(key, count)| format!("{key}: {count}"))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod test {
    use super::{count, make_count_dictionary, CountExt, Counts};
    use crate::key::Key;
    use crate::value::{Value, ValueType};

    #[test]
    fn counts_strings() {
        let values = vec![
            Value::from("a"),
            Value::from("a"),
            Value::from("b"),
            Value::from("c"),
        ];
        let counts = make_count_dictionary(&values).unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&Key::from("a")), 2);
        assert_eq!(counts.get(&Key::from("b")), 1);
        assert_eq!(counts.get(&Key::from("c")), 1);
        assert_eq!(counts.to_string(), r#"{"a": 2, "b": 1, "c": 1}"#);
    }

    #[test]
    fn counts_mixed_types() {
        let values = vec![
            Value::from("a"),
            Value::from(1),
            Value::from("a"),
            Value::from(1),
            Value::from(2),
        ];
        let counts = make_count_dictionary(&values).unwrap();
        assert_eq!(counts.to_string(), r#"{1: 2, 2: 1, "a": 2}"#);
    }

    #[test]
    fn one_and_one_point_zero_are_different_keys() {
        let values = vec![Value::from(1), Value::from(1.0), Value::from("1")];
        let counts = make_count_dictionary(&values).unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn empty_input_gives_empty_counts() {
        let counts = make_count_dictionary(&[]).unwrap();
        assert!(counts.is_empty());
        assert_eq!(counts.to_string(), "{}");
    }

    #[test]
    fn unhashable_element_fails_the_whole_count() {
        let values = vec![Value::from("a"), Value::from(vec![1, 2]), Value::from("a")];
        let err = make_count_dictionary(&values).unwrap_err();
        assert_eq!(err.value_type, ValueType::List);
    }

    #[test]
    fn generic_count_over_borrowed_strs() {
        let counts = count(["x", "y", "x"]);
        assert_eq!(counts.get("x"), 2);
        assert_eq!(counts.get("y"), 1);
        assert_eq!(counts.get("z"), 0);
    }

    #[test]
    fn tally_on_iterator() {
        let counts = "mississippi".chars().tally();
        assert_eq!(counts.get(&'s'), 4);
        assert_eq!(counts.get(&'i'), 4);
        assert_eq!(counts.get(&'p'), 2);
        assert_eq!(counts.get(&'m'), 1);
        assert_eq!(counts.total(), 11);
    }

    #[test]
    fn most_common_breaks_ties_by_key() {
        let counts = count([3, 1, 3, 2, 1, 3]);
        assert_eq!(counts.most_common(None), vec![(&3, 3), (&1, 2), (&2, 1)]);
        assert_eq!(counts.most_common(Some(1)), vec![(&3, 3)]);

        let ties = count(["b", "a", "c"]);
        assert_eq!(ties.most_common(Some(2)), vec![(&"a", 1), (&"b", 1)]);
    }

    #[test]
    fn extend_keeps_counting() {
        let mut counts: Counts<i32> = [1, 2].into_iter().collect();
        counts.extend([2, 2]);
        assert_eq!(counts.get(&2), 3);
        assert_eq!(counts.sorted(), vec![(&1, 1), (&2, 3)]);
    }
}
