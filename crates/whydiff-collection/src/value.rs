//! Dynamic value model for containers and search items.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CollectionError, CollectionResult};

/// The shape of a [`Value`], used in type-mismatch messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    Char,
    Byte,
    Seq,
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Char => "char",
            Kind::Byte => "byte",
            Kind::Seq => "sequence",
            Kind::Map => "map",
        };
        f.write_str(name)
    }
}

/// A container or item passed to a collection diff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Char(char),
    Byte(u8),
    Seq(Vec<Value>),
    Map(MapValue),
}

impl Value {
    /// The shape of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Char(_) => Kind::Char,
            Value::Byte(_) => Kind::Byte,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Unquoted string form, used as the sort key for map keys.
    pub fn plain(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Char(c) => c.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Byte(b) => write!(f, "0x{b:02x}"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("map[")?;
                for (i, (k, v)) in map.sorted_entries().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A key/value map with a declared key type.
///
/// The key kind is kept separately from the entries so that an empty map
/// still knows which items are valid lookups. Entries keep insertion order;
/// `index` buckets entry positions by the key's [`Value::plain`] form so
/// lookups only compare keys that render the same.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "MapRepr", into = "MapRepr")]
pub struct MapValue {
    key_kind: Kind,
    entries: Vec<(Value, Value)>,
    index: BTreeMap<String, Vec<usize>>,
}

#[derive(Serialize, Deserialize)]
struct MapRepr {
    key_kind: Kind,
    entries: Vec<(Value, Value)>,
}

impl TryFrom<MapRepr> for MapValue {
    type Error = CollectionError;

    fn try_from(repr: MapRepr) -> CollectionResult<Self> {
        MapValue::from_pairs(repr.key_kind, repr.entries)
    }
}

impl From<MapValue> for MapRepr {
    fn from(map: MapValue) -> Self {
        MapRepr {
            key_kind: map.key_kind,
            entries: map.entries,
        }
    }
}

impl MapValue {
    /// An empty map whose keys are of `key_kind`.
    pub fn new(key_kind: Kind) -> Self {
        Self {
            key_kind,
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Build a map from pairs. A later pair replaces an earlier equal key.
    ///
    /// Fails on the first key whose kind is not `key_kind`.
    pub fn from_pairs<K, V, I>(key_kind: Kind, pairs: I) -> CollectionResult<Self>
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(key_kind);
        for (k, v) in pairs {
            map.insert(k.into(), v.into())?;
        }
        Ok(map)
    }

    /// Build a map from pairs whose keys are already unique and of
    /// `key_kind`, such as the entries of a Rust or JSON map.
    fn from_unique<K, V, I>(key_kind: Kind, pairs: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(key_kind);
        for (k, v) in pairs {
            map.push(k.into(), v.into());
        }
        map
    }

    /// Insert or replace an entry, returning the replaced value.
    pub fn insert(&mut self, key: Value, value: Value) -> CollectionResult<Option<Value>> {
        if key.kind() != self.key_kind {
            return Err(CollectionError::KeyKind {
                expected: self.key_kind,
                actual: key.kind(),
            });
        }
        match self.position(&key) {
            Some(i) => Ok(Some(std::mem::replace(&mut self.entries[i].1, value))),
            None => {
                self.push(key, value);
                Ok(None)
            }
        }
    }

    fn push(&mut self, key: Value, value: Value) {
        debug_assert_eq!(key.kind(), self.key_kind);
        self.index.entry(key.plain()).or_default().push(self.entries.len());
        self.entries.push((key, value));
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.index
            .get(&key.plain())?
            .iter()
            .copied()
            .find(|&i| self.entries[i].0 == *key)
    }

    /// Declared key type.
    pub fn key_kind(&self) -> Kind {
        self.key_kind
    }

    /// Look up a key by deep equality.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys sorted by their unquoted string form.
    pub fn sorted_keys(&self) -> Vec<&Value> {
        self.index
            .values()
            .flatten()
            .map(|&i| &self.entries[i].0)
            .collect()
    }

    /// Entries sorted by the string form of their key.
    pub fn sorted_entries(&self) -> Vec<(&Value, &Value)> {
        self.index
            .values()
            .flatten()
            .map(|&i| (&self.entries[i].0, &self.entries[i].1))
            .collect()
    }
}

// Entry order is not significant.
impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.key_kind == other.key_kind
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

/// Rust types that map to a single [`Kind`] when used as map keys.
pub trait KeyKind {
    const KIND: Kind;
}

macro_rules! key_kind {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(impl KeyKind for $ty { const KIND: Kind = $kind; })*
    };
}

key_kind! {
    bool => Kind::Bool,
    i32 => Kind::Int,
    i64 => Kind::Int,
    String => Kind::Str,
    &str => Kind::Str,
    char => Kind::Char,
    u8 => Kind::Byte,
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<u8> for Value {
    fn from(b: u8) -> Self {
        Value::Byte(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<K: KeyKind + Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(MapValue::from_unique(K::KIND, map))
    }
}

impl<K: KeyKind + Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Map(MapValue::from_unique(K::KIND, map))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect::<Vec<_>>().into(),
            Json::Object(fields) => Value::Map(MapValue::from_unique(Kind::Str, fields)),
        }
    }
}
