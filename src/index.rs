use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A top-level documented API/controller entry in the doc index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Display rank, dense from 1 in source order.
    pub order: u32,
    /// Unique short identifier, doubles as the group's anchor target.
    pub alias: String,
    pub description: String,
    pub anchor_link: String,
    pub methods: Vec<Method>,
}

/// An individual documented endpoint/operation within a Group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Rank within the owning group, dense from 1.
    pub order: u32,
    /// Opaque anchor identifier, unique across the whole index.
    pub method_id: String,
    pub description: String,
}

/// The search index of a generated documentation page. Populated once
/// from the generator's JSON output and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocIndex {
    groups: Vec<Group>,
}

impl DocIndex {
    /// Build an index from groups, validating every invariant up front
    /// so filtering never sees a malformed entry.
    pub fn from_groups(groups: Vec<Group>) -> Result<Self> {
        validate_groups(&groups)?;
        Ok(Self { groups })
    }

    /// Load the index from a JSON file emitted by the documentation
    /// generator (an array of groups with camelCase keys).
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let groups: Vec<Group> = serde_json::from_str(&data)?;
        let index = Self::from_groups(groups)?;
        tracing::info!(
            "Loaded search index from {}: {} groups, {} methods",
            path.display(),
            index.groups.len(),
            index.method_count()
        );
        Ok(index)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn method_count(&self) -> usize {
        self.groups.iter().map(|g| g.methods.len()).sum()
    }
}

fn validate_groups(groups: &[Group]) -> Result<()> {
    let mut aliases = HashSet::new();
    let mut method_ids = HashSet::new();

    for (i, group) in groups.iter().enumerate() {
        let expected = (i + 1) as u32;
        if group.order != expected {
            return Err(Error::invalid_entry(format!(
                "group \"{}\": order {} out of sequence, expected {}",
                group.alias, group.order, expected
            )));
        }
        if group.alias.is_empty() {
            return Err(Error::invalid_entry(format!(
                "group at position {} has an empty alias",
                i + 1
            )));
        }
        if group.description.is_empty() {
            return Err(Error::invalid_entry(format!(
                "group \"{}\" has an empty description",
                group.alias
            )));
        }
        if !aliases.insert(group.alias.as_str()) {
            return Err(Error::invalid_entry(format!(
                "duplicate group alias \"{}\"",
                group.alias
            )));
        }

        for (j, method) in group.methods.iter().enumerate() {
            let expected = (j + 1) as u32;
            if method.order != expected {
                return Err(Error::invalid_entry(format!(
                    "group \"{}\": method order {} out of sequence, expected {}",
                    group.alias, method.order, expected
                )));
            }
            if method.method_id.is_empty() {
                return Err(Error::invalid_entry(format!(
                    "group \"{}\": method at position {} has an empty methodId",
                    group.alias,
                    j + 1
                )));
            }
            if method.description.is_empty() {
                return Err(Error::invalid_entry(format!(
                    "group \"{}\": method \"{}\" has an empty description",
                    group.alias, method.method_id
                )));
            }
            if !method_ids.insert(method.method_id.as_str()) {
                return Err(Error::invalid_entry(format!(
                    "duplicate methodId \"{}\"",
                    method.method_id
                )));
            }
        }
    }

    Ok(())
}
