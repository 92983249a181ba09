use num::{BigInt, ToPrimitive};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// An integer that is stored inline while it fits in an `i64` and spills over into a `BigInt`
/// when it doesn't.
#[derive(Debug, Clone)]
pub enum Int {
    Int64(i64),
    BigInt(BigInt),
}

impl Int {
    fn to_bigint(&self) -> BigInt {
        match self {
            Int::Int64(i) => BigInt::from(*i),
            Int::BigInt(b) => b.clone(),
        }
    }

    /// Returns the value as an `i64` if it fits, regardless of how it is stored.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Int::Int64(i) => Some(*i),
            Int::BigInt(b) => b.to_i64(),
        }
    }

    /// Moves a `BigInt` that fits in an `i64` back into the inline representation.
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Int::BigInt(b) => match b.to_i64() {
                Some(i) => Int::Int64(i),
                None => Int::BigInt(b),
            },
            int @ Int::Int64(_) => int,
        }
    }
}

impl From<i32> for Int {
    fn from(value: i32) -> Self {
        Int::Int64(i64::from(value))
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Int::Int64(value)
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Int::Int64(i),
            Err(_) => Int::BigInt(BigInt::from(value)),
        }
    }
}

impl From<BigInt> for Int {
    fn from(value: BigInt) -> Self {
        Int::BigInt(value).simplify()
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Int::Int64(left), Int::Int64(right)) = (self, other) {
            return left.cmp(right);
        }

        self.to_bigint().cmp(&other.to_bigint())
    }
}

// Must agree with `Eq`, so an `i64` hashes the same whichever variant holds it
impl Hash for Int {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.to_i64() {
            Some(i) => {
                state.write_u8(1);
                i.hash(state);
            }
            None => {
                state.write_u8(2);
                self.to_bigint().hash(state);
            }
        }
    }
}

impl Display for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Int::Int64(i) => write!(f, "{i}"),
            Int::BigInt(b) => write!(f, "{b}"),
        }
    }
}
