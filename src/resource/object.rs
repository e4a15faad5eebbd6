use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::SolveError;
use crate::resource::convert::convert;
use crate::resource::kind::ResourceKind;
use crate::resource::urn::ResourceId;

/// A single attribute value on a resource object.
///
/// Scalars mirror the JSON value; nested mappings are themselves converted
/// resource objects, so conversion is recursive all the way down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(SolveObject),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&SolveObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// A SolveBio API resource: an ordered attribute map tagged with the kind
/// selected by the server's `class_name` discriminator.
///
/// The kind tag is client-side state held outside the map and is never
/// serialized; everything the server sent lives in the map. Attribute order
/// is the natural key order, which makes the serialized form canonical.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveObject {
    kind: ResourceKind,
    attrs: BTreeMap<String, Value>,
}

impl SolveObject {
    /// Create an empty object of the given kind.
    pub fn new(kind: ResourceKind) -> Self {
        SolveObject {
            kind,
            attrs: BTreeMap::new(),
        }
    }

    /// Seed an object with the identifier a later refresh will resolve.
    pub fn from_id(kind: ResourceKind, id: ResourceId) -> Self {
        let mut object = SolveObject::new(kind);
        match id {
            ResourceId::Id(n) => {
                object.attrs.insert("id".to_string(), Value::Int(n));
            }
            ResourceId::Urn(urn) => {
                object.attrs.insert("urn".to_string(), Value::String(urn));
            }
        }
        object
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Server-assigned numeric ID, when present.
    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    /// Hierarchical URN, when present.
    pub fn urn(&self) -> Option<&str> {
        self.get("urn").and_then(Value::as_str)
    }

    /// The discriminator the server sent, when present.
    pub fn class_name(&self) -> Option<&str> {
        self.get("class_name").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.attrs.insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Canonical cross-reference key: the numeric ID when present, else the
    /// URN, else nothing.
    pub fn identity(&self) -> Option<ResourceId> {
        if let Some(id) = self.id() {
            return Some(ResourceId::Id(id));
        }
        self.urn().map(|urn| ResourceId::Urn(urn.to_string()))
    }

    /// Replace every attribute with the converted contents of `values`.
    ///
    /// The previous attribute set is discarded entirely — no merging —
    /// so the key set afterwards equals the source's key set. The kind tag
    /// is fixed at construction and survives the refresh.
    pub fn refresh_from(&mut self, values: serde_json::Map<String, serde_json::Value>) {
        self.attrs.clear();
        for (key, value) in values {
            self.attrs.insert(key, convert(value));
        }
    }

    /// URL addressing this specific instance: the collection URL suffixed
    /// by the numeric ID when present, else the URN.
    pub fn instance_url(&self) -> Result<String, SolveError> {
        let base = self.kind.collection_url()?;
        if self.kind == ResourceKind::User {
            // singleton: one instance, addressed by the collection URL itself
            return Ok(base);
        }
        match self.identity() {
            Some(id) => Ok(format!("{base}/{id}")),
            None => Err(SolveError::AddressUnknown {
                type_name: self.kind.type_name(),
                id: self.id(),
            }),
        }
    }
}

impl Serialize for SolveObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attrs.serialize(serializer)
    }
}

impl fmt::Display for SolveObject {
    /// Canonical JSON form of the attribute map, keys sorted, stable
    /// across calls.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
