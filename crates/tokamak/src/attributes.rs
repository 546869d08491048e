//! Element attributes as supplied by templates
//!
//! Values are either scalars or lists of strings. Only `class` may be a list;
//! its entries are joined with single spaces when the element is built.

use crate::{Error, Result};

/// Attribute value: a scalar, or a list (valid only for `class`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Scalar(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Scalar(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Scalar(value.clone())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        AttrValue::List(values)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> Self {
        AttrValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(values: [&str; N]) -> Self {
        AttrValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Ordered attribute list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute, keeping the original position on replace
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Flatten into `(name, value)` strings, rejecting list values on
    /// anything but `class`.
    pub(crate) fn resolve(&self) -> Result<Vec<(String, String)>> {
        self.entries
            .iter()
            .map(|(name, value)| match value {
                AttrValue::Scalar(v) => Ok((name.clone(), v.clone())),
                AttrValue::List(items) if name == "class" => Ok((name.clone(), items.join(" "))),
                AttrValue::List(_) => Err(Error::InvalidAttribute(name.clone())),
            })
            .collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in entries {
            attributes.insert(name, value);
        }
        attributes
    }
}
