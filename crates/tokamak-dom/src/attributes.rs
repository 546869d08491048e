//! Element Attributes
//!
//! Ordered attribute storage: get, set, remove, has.

use std::collections::HashMap;

/// Named node map (attribute collection), kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Set attribute; an existing attribute keeps its position
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(&index) = self.by_name.get(name) {
            let old = std::mem::replace(&mut self.attributes[index].value, value.to_string());
            Some(old)
        } else {
            self.by_name.insert(name.to_string(), self.attributes.len());
            self.attributes.push(Attr::new(name, value));
            None
        }
    }

    /// Remove attribute by name
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
