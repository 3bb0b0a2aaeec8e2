//! Ordered keyword → label tables.
//!
//! The persisted JSON stores these as objects, but classification is
//! first-match-in-declared-order, so the in-memory form is an explicit
//! sequence that keeps document order on both read and write.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single keyword and the canonical label it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: String,
    pub label: String,
}

impl KeywordEntry {
    #[must_use]
    pub fn new(keyword: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            label: label.into(),
        }
    }
}

/// Priority-ordered keyword table. Earlier entries win over later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable(Vec<KeywordEntry>);

impl KeywordTable {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry at the lowest priority. A keyword that is already
    /// present keeps its position and takes the new label, matching how a
    /// JSON object with a repeated key is read.
    pub fn push(&mut self, keyword: impl Into<String>, label: impl Into<String>) {
        let keyword = keyword.into();
        let label = label.into();
        if let Some(existing) = self.0.iter_mut().find(|e| e.keyword == keyword) {
            existing.label = label;
        } else {
            self.0.push(KeywordEntry { keyword, label });
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordEntry> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label of the first keyword in declared order satisfying `pred`.
    pub fn first_match<P>(&self, mut pred: P) -> Option<&KeywordEntry>
    where
        P: FnMut(&str) -> bool,
    {
        self.0.iter().find(|e| pred(&e.keyword))
    }
}

impl<K, L> FromIterator<(K, L)> for KeywordTable
where
    K: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (k, l) in iter {
            table.push(k, l);
        }
        table
    }
}

impl<'a> IntoIterator for &'a KeywordTable {
    type Item = &'a KeywordEntry;
    type IntoIter = std::slice::Iter<'a, KeywordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for KeywordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.keyword, &entry.label)?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = KeywordTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping keywords to labels")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = KeywordTable::new();
        while let Some((keyword, label)) = access.next_entry::<String, String>()? {
            table.push(keyword, label);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for KeywordTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}
