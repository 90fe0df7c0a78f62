use crate::{
    enums::EnumValue,
    serialize::{ParseError, SerializeError},
    temporal::{Date, Time, Timestamp},
};
use derive_more::From;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Tree
///
/// The generic nested mapping generated classes serialize into: string keys
/// to null, booleans, numbers, text, nested mappings, and ordered sequences.
/// `serde_json::Value` is not used here because its object representation
/// sorts keys; the wire contract requires declaration order.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum Tree {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Tree>),
    Map(TreeMap),
}

impl Tree {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric read; integers widen to float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Tree]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&TreeMap> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Encode to JSON text. Fails without partial output if the tree holds a
    /// value JSON cannot represent (non-finite number).
    pub fn to_json(&self) -> Result<String, SerializeError> {
        self.ensure_encodable("$")?;
        serde_json::to_string(self).map_err(|e| SerializeError::Encode(e.to_string()))
    }

    /// Decode from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(text)?)
    }

    fn ensure_encodable(&self, path: &str) -> Result<(), SerializeError> {
        match self {
            Self::Float(v) if !v.is_finite() => Err(SerializeError::NonFiniteNumber {
                path: path.to_string(),
            }),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    item.ensure_encodable(&format!("{path}[{index}]"))?;
                }
                Ok(())
            }
            Self::Map(map) => {
                for (key, value) in map.iter() {
                    value.ensure_encodable(&format!("{path}.{key}"))?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl From<&str> for Tree {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Tree {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

///
/// TreeMap
///
/// Insertion-ordered string-keyed mapping. Key order is the emission order:
/// attributes first, then references, collections, dynamic collections.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeMap {
    entries: Vec<(String, Tree)>,
}

impl TreeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; replacement keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tree>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // Lenient typed reads: absence and mistyped values degrade to None,
    // never an error.

    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Tree::as_bool)
    }

    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Tree::as_i64)
    }

    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Tree::as_f64)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Tree::as_str)
    }

    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get_str(key).map(str::to_string)
    }

    #[must_use]
    pub fn get_list(&self, key: &str) -> Option<&[Tree]> {
        self.get(key).and_then(Tree::as_list)
    }

    #[must_use]
    pub fn get_map(&self, key: &str) -> Option<&TreeMap> {
        self.get(key).and_then(Tree::as_map)
    }

    /// Raw non-null subtree for pass-through (list/mapping kind) attributes.
    #[must_use]
    pub fn get_tree(&self, key: &str) -> Option<Tree> {
        self.get(key).filter(|v| !v.is_null()).cloned()
    }

    #[must_use]
    pub fn get_date(&self, key: &str) -> Option<Date> {
        self.get_str(key).and_then(Date::parse)
    }

    #[must_use]
    pub fn get_time(&self, key: &str) -> Option<Time> {
        self.get_str(key).and_then(Time::parse)
    }

    #[must_use]
    pub fn get_timestamp(&self, key: &str) -> Option<Timestamp> {
        self.get_str(key).and_then(Timestamp::parse)
    }

    /// Enum read through the underlying string value; unrecognized raw
    /// values degrade to None.
    #[must_use]
    pub fn get_enum<E: EnumValue>(&self, key: &str) -> Option<E> {
        self.get_str(key).and_then(E::from_value)
    }
}

// ---- serde ----------------------------------------------------------------

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for TreeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = Tree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Tree, E> {
        Ok(Tree::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Tree, E> {
        Ok(Tree::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Tree, D::Error> {
        deserializer.deserialize_any(Self)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Tree, E> {
        Ok(Tree::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Tree, E> {
        Ok(Tree::Int(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Tree, E> {
        i64::try_from(value).map_or(Ok(Tree::Float(value as f64)), |v| Ok(Tree::Int(v)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Tree, E> {
        Ok(Tree::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Tree, E> {
        Ok(Tree::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Tree, E> {
        Ok(Tree::Text(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Tree, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Tree::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Tree, A::Error> {
        let mut map = TreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, Tree>()? {
            // duplicate keys: last one wins, position of the first is kept
            map.insert(key, value);
        }
        Ok(Tree::Map(map))
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TreeVisitor)
    }
}
