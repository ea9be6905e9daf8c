//! Cache key construction from call arguments.
//!
//! A memoizing front turns the arguments of a call into a single hashable
//! fingerprint via [`create_key`]. Positional values come first, named values
//! follow a distinguished marker in caller order, and optional type tags make
//! otherwise-equal values of different kinds produce different keys. A lone
//! fast-hashable positional argument is used as the key directly; every other
//! shape is wrapped so its hash is computed exactly once.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// A single call-argument value, self-describing, ordered and hashable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arg {
    /// Absence of a value.
    Unit,
    Bool(bool),
    Int(i64),
    /// Floating point payload stored by bit pattern, see [`Arg::float`].
    Float(u64),
    Str(String),
    Bytes(Vec<u8>),
    /// An immutable, ordered set of values.
    Set(BTreeSet<Arg>),
}

impl Arg {
    /// Wraps a float by bit pattern so keys stay `Eq + Hash`.
    ///
    /// Bit equality is stricter than numeric equality: `0.0` and `-0.0` make
    /// different keys, and any two NaNs with the same payload make the same
    /// key.
    pub fn float(value: f64) -> Self {
        Arg::Float(value.to_bits())
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            Arg::Unit => TypeTag::Unit,
            Arg::Bool(_) => TypeTag::Bool,
            Arg::Int(_) => TypeTag::Int,
            Arg::Float(_) => TypeTag::Float,
            Arg::Str(_) => TypeTag::Str,
            Arg::Bytes(_) => TypeTag::Bytes,
            Arg::Set(_) => TypeTag::Set,
        }
    }

    /// Whether the value may stand alone as a key without wrapping.
    fn is_fast_hashable(&self) -> bool {
        matches!(self, Arg::Int(_) | Arg::Str(_) | Arg::Set(_) | Arg::Unit)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

/// Kind marker appended to composite keys when typing is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Unit,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    Set,
}

/// One element of a composite key sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum KeyPart {
    Value(Arg),
    Name(String),
    KwargMark,
    Type(TypeTag),
}

/// A composite key sequence whose hash is computed once, at construction.
#[derive(Clone, Debug)]
pub struct HashedSeq {
    parts: Vec<KeyPart>,
    hash: u64,
}

impl HashedSeq {
    fn new(parts: Vec<KeyPart>) -> Self {
        let mut hasher = DefaultHasher::new();
        parts.hash(&mut hasher);
        let hash = hasher.finish();
        Self { parts, hash }
    }
}

impl PartialEq for HashedSeq {
    fn eq(&self, other: &Self) -> bool {
        // Cheap reject on the cached hash before the element-wise walk.
        self.hash == other.hash && self.parts == other.parts
    }
}

impl Eq for HashedSeq {}

impl Hash for HashedSeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A cache key assembled from call arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Fast path: a lone fast-hashable argument stands as the key directly.
    Single(Arg),
    /// The general composite sequence.
    Seq(HashedSeq),
}

/// Builds a cache key from positional and named arguments.
///
/// Equal inputs produce equal, equally-hashing keys. Named arguments are
/// folded in the order given, so callers wanting order-insensitive keys sort
/// them first.
pub fn create_key(args: &[Arg], kwargs: &[(&str, Arg)], typed: bool) -> CacheKey {
    if !typed && kwargs.is_empty() && args.len() == 1 && args[0].is_fast_hashable() {
        return CacheKey::Single(args[0].clone());
    }

    let mut parts: Vec<KeyPart> = args.iter().cloned().map(KeyPart::Value).collect();
    if !kwargs.is_empty() {
        parts.push(KeyPart::KwargMark);
        for (name, value) in kwargs {
            parts.push(KeyPart::Name((*name).to_string()));
            parts.push(KeyPart::Value(value.clone()));
        }
    }
    if typed {
        for value in args {
            parts.push(KeyPart::Type(value.type_tag()));
        }
        for (_, value) in kwargs {
            parts.push(KeyPart::Type(value.type_tag()));
        }
    }
    CacheKey::Seq(HashedSeq::new(parts))
}
