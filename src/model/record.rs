// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Geostory-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Geostory and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde_json::Value;

/// Name of the nested record that holds fallback attributes for plain
/// column paths.
pub const TABLE_CONTENT: &str = "tableContent";

/// Loosely-typed attribute value carried by a [`DataObject`].
///
/// Equality is exact: numbers compare as `f64` without tolerance, and no
/// coercion happens between variants (`Number(1.0)` never equals
/// `Text("1")`).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<AttrValue>),
    Record(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Named field of a [`AttrValue::Record`], `None` for every other
    /// variant.
    pub fn field(&self, name: &str) -> Option<&AttrValue> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Element of a [`AttrValue::List`], `None` for every other variant or
    /// out-of-range index.
    pub fn element(&self, index: usize) -> Option<&AttrValue> {
        match self {
            Self::List(elements) => elements.get(index),
            _ => None,
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(number) => number.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(value) => Self::Text(value),
            Value::Array(elements) => Self::List(elements.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Record(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// One record of a host dataset.
///
/// Identity is the stable `index`; attributes are read-only to the widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct DataObject {
    index: u32,
    attrs: BTreeMap<String, AttrValue>,
}

impl DataObject {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            attrs: BTreeMap::new(),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: AttrValue) {
        self.attrs.insert(name.into(), value);
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Fallback lookup inside the nested `tableContent` record.
    pub fn table_content_attr(&self, name: &str) -> Option<&AttrValue> {
        match self.attrs.get(TABLE_CONTENT) {
            Some(AttrValue::Record(fields)) => fields.get(name),
            _ => None,
        }
    }
}

/// One dataset slot of the host's dataset store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    objects: Vec<DataObject>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: DataObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[DataObject] {
        &self.objects
    }

    pub fn object_by_index(&self, index: u32) -> Option<&DataObject> {
        self.objects.iter().find(|object| object.index() == index)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Ownership-free reference to a data object: dataset slot plus stable
/// record index. Edges, highlight sets, and clusters all speak in handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle {
    pub dataset: usize,
    pub index: u32,
}

impl ObjectHandle {
    pub fn new(dataset: usize, index: u32) -> Self {
        Self { dataset, index }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AttrValue, DataObject};

    #[test]
    fn equality_is_strict_across_variants() {
        assert_ne!(AttrValue::Number(1.0), AttrValue::text("1"));
        assert_ne!(AttrValue::Bool(true), AttrValue::Number(1.0));
        assert_eq!(AttrValue::Null, AttrValue::Null);
    }

    #[test]
    fn json_values_convert_structurally() {
        let value = AttrValue::from(json!({
            "city": "Paris",
            "visits": [{"year": 1912}]
        }));
        let year = value
            .field("visits")
            .and_then(|visits| visits.element(0))
            .and_then(|visit| visit.field("year"));
        assert_eq!(year, Some(&AttrValue::Number(1912.0)));
        assert_eq!(value.field("city"), Some(&AttrValue::text("Paris")));
    }

    #[test]
    fn table_content_lookup_requires_a_record() {
        let mut object = DataObject::new(0);
        object.set_attr(super::TABLE_CONTENT, AttrValue::text("not a record"));
        assert_eq!(object.table_content_attr("city"), None);
    }
}
