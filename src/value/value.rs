//! Core value types: decoded scalars, lists and order-preserving records.

use std::fmt;

/// Value represents a decoded JSON/YAML value.
///
/// Records keep the key order of the source document, so two documents that
/// differ only in key order decode to unequal values.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Record(Record),
}

/// Pair represents a single key-value entry of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: Value,
    pub value: Value,
}

/// Record is an ordered sequence of key-value pairs.
///
/// Keys are compared by deep equality. Lookups return the first matching
/// pair, so a record built with duplicate keys behaves as if only the
/// earliest pair existed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pairs: Vec<Pair>,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns a short name of the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "map",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_bits(*a) == float_bits(*b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Canonical bit pattern of a float for equality and hashing: both zeros
/// share one pattern, as do all NaNs, so `Eq` stays reflexive.
fn float_bits(f: f64) -> u64 {
    if f == 0.0 {
        0.0f64.to_bits()
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => float_bits(*f).hash(state),
            Value::String(s) => s.hash(state),
            Value::List(l) => l.hash(state),
            Value::Record(r) => {
                for pair in r {
                    pair.key.hash(state);
                    pair.value.hash(state);
                }
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl Pair {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Pair {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Record {
    pub fn new() -> Self {
        Record { pairs: Vec::new() }
    }

    /// Creates a record from pairs, keeping their order as given.
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Record { pairs }
    }

    /// Appends a pair without checking for an existing key.
    pub fn push(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.pairs.push(Pair::new(key, value));
    }

    /// Returns the value of the first pair whose key equals `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.pairs.iter().find(|p| &p.key == key).map(|p| &p.value)
    }

    /// Returns the value of the first pair whose key is the string `key`.
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|p| p.key.as_str() == Some(key))
            .map(|p| &p.value)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Returns the keys in record order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.pairs.iter().map(|p| &p.key)
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.pairs
    }
}

impl FromIterator<Pair> for Record {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        Record {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(record) => write!(f, "{}", record),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        write!(f, "}}")
    }
}
