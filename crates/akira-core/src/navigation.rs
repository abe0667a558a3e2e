//! Navigation index over a committed document
//!
//! Entries are derived, never edited: one per operation, in `paths`
//! declaration order and then method declaration order. Their ids are the
//! endpoint identifiers external links point at, so the same input always
//! yields the same ids in the same order.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use crate::model::{Document, HttpMethod};
use serde::Serialize;

/// Kind of an addressable entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Endpoint,
}

/// One addressable row of the browsing index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Endpoint identifier, `<method>-<path>`
    pub id: String,
    /// Display label, `METHOD /path`
    pub label: String,
    pub kind: EntryKind,
    #[serde(serialize_with = "serialize_method")]
    pub method: HttpMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

fn serialize_method<S: serde::Serializer>(method: &HttpMethod, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(method.as_str())
}

/// Entries sharing a path, for the collapsible per-path view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathGroup<'a> {
    pub path: &'a str,
    pub entries: Vec<&'a NavigationEntry>,
}

/// Ordered, stable index of navigation entries
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NavigationIndex {
    entries: Vec<NavigationEntry>,
}

impl NavigationIndex {
    /// Build the index from a document
    pub fn build(document: &Document) -> Self {
        let entries = document
            .operations()
            .map(|op| NavigationEntry {
                id: op.id(),
                label: format!("{} {}", op.method, op.path),
                kind: EntryKind::Endpoint,
                method: op.method,
                path: op.path.clone(),
                summary: op.summary.clone(),
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Entry ids in display order
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry; unknown ids yield `None`
    pub fn find(&self, id: &str) -> Option<&NavigationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Display position of an id
    ///
    /// Selecting an id that is not in the index is a no-op for the caller,
    /// hence `None` rather than an error.
    pub fn select(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Entries grouped by path, in path declaration order
    pub fn groups(&self) -> Vec<PathGroup<'_>> {
        let mut groups: Vec<PathGroup<'_>> = Vec::new();
        for entry in &self.entries {
            match groups.last_mut() {
                Some(group) if group.path == entry.path => group.entries.push(entry),
                _ => groups.push(PathGroup {
                    path: &entry.path,
                    entries: vec![entry],
                }),
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a NavigationIndex {
    type Item = &'a NavigationEntry;
    type IntoIter = std::slice::Iter<'a, NavigationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
