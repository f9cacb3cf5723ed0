use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned rectangle in host surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Loosely typed property value as delivered by the query collaborator.
///
/// An absent property is modelled by the key missing from [`Entry`], not by a
/// variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyNamespace {
    Note,
    Formula,
    File,
}

/// Namespaced property identifier such as `note.score` or `file.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids without a recognized namespace are treated as note properties.
    #[must_use]
    pub fn namespace(&self) -> PropertyNamespace {
        self.split().0
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.split().1
    }

    /// Note and formula properties are the ones that can carry plotted values.
    #[must_use]
    pub fn is_plottable(&self) -> bool {
        matches!(self.0.split_once('.'), Some(("note" | "formula", _)))
    }

    fn split(&self) -> (PropertyNamespace, &str) {
        match self.0.split_once('.') {
            Some(("note", name)) => (PropertyNamespace::Note, name),
            Some(("formula", name)) => (PropertyNamespace::Formula, name),
            Some(("file", name)) => (PropertyNamespace::File, name),
            _ => (PropertyNamespace::Note, self.0.as_str()),
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PropertyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One row of a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    #[serde(default)]
    pub properties: IndexMap<PropertyId, PropertyValue>,
}

impl Entry {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            properties: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(
        mut self,
        property: impl Into<PropertyId>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// Final path segment, including the extension.
    #[must_use]
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    #[must_use]
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext,
            _ => "",
        }
    }

    #[must_use]
    pub fn folder(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(folder, _)| folder)
    }

    /// Looks up a property; `file.*` ids resolve against the entry path.
    ///
    /// Returns `None` when the property is absent.
    #[must_use]
    pub fn value(&self, property: &PropertyId) -> Option<PropertyValue> {
        if property.namespace() == PropertyNamespace::File {
            let builtin = match property.name() {
                "path" => Some(self.path.as_str()),
                "name" => Some(self.name()),
                "basename" => Some(self.basename()),
                "folder" => Some(self.folder()),
                "ext" => Some(self.extension()),
                _ => None,
            };
            if let Some(text) = builtin {
                return Some(PropertyValue::Text(text.to_owned()));
            }
        }
        self.properties.get(property).cloned()
    }
}

/// Bucket of entries sharing a grouping key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub key: Option<PropertyValue>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Group {
    #[must_use]
    pub fn ungrouped(entries: Vec<Entry>) -> Self {
        Self { key: None, entries }
    }

    #[must_use]
    pub fn keyed(key: impl Into<PropertyValue>, entries: Vec<Entry>) -> Self {
        Self {
            key: Some(key.into()),
            entries,
        }
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.key.as_ref().is_some_and(|key| !key.is_null())
    }
}

/// Materialized query result: always a sequence of groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl QueryResult {
    #[must_use]
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn flat(entries: Vec<Entry>) -> Self {
        Self {
            groups: vec![Group::ungrouped(entries)],
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }
}
