//! Categories group transactions, e.g. "Groceries" or "Salary".

use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};

/// The key a transaction uses to refer to its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Maps category IDs to their display names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(HashMap<CategoryId, String>);

impl CategoryMap {
    /// Look up the display name for `id`, if the category is known.
    pub fn name_of(&self, id: &CategoryId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// The number of known categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no categories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CategoryMap
where
    K: Into<CategoryId>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        )
    }
}
