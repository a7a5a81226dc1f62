use std::collections::HashMap;

use super::AttrValue;

/// Identity attributes for one evaluation: caller-supplied facts about the
/// current user or request, keyed by attribute name.
///
/// Read-only during evaluation; build one per request and reuse it across any
/// number of segment checks.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    data: HashMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, builder-style.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Insert an attribute (mutable reference version).
    pub fn insert(&mut self, name: &str, value: AttrValue) {
        self.data.insert(name.to_owned(), value);
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.data.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Build an attribute map from a JSON object.
    ///
    /// Entries whose values are `null`, arrays, or objects are dropped: no
    /// operator can ever match them, so a rule naming one behaves exactly
    /// like a rule naming a missing attribute. A non-object input yields an
    /// empty map.
    #[must_use]
    pub fn from_json(attributes: &serde_json::Value) -> Self {
        let mut out = Self::new();
        if let Some(object) = attributes.as_object() {
            for (name, value) in object {
                if let Some(scalar) = AttrValue::from_json(value) {
                    out.insert(name, scalar);
                }
            }
        }
        out
    }
}
