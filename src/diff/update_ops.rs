//! The update-operation set a diff produces.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::path::Path;
use crate::value::Value;

/// Push is the payload of a single push operation.
///
/// Appending one element pushes the bare value; appending several pushes an
/// `$each` list so the whole append stays one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Push {
    One(Value),
    Each(Vec<Value>),
}

/// UpdateOps is the set of update operations produced by a diff.
///
/// Applying every operation to the old document yields the new one. Each
/// operator keys its targets by [`Path`], and a given path appears under at
/// most one operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOps {
    /// Fields written with their new value.
    pub set: BTreeMap<Path, Value>,
    /// Fields removed.
    pub unset: BTreeSet<Path>,
    /// Lists extended at the tail.
    pub push: BTreeMap<Path, Push>,
    /// Lists with one element value removed wherever it occurs.
    pub pull: BTreeMap<Path, Value>,
    /// Lists with several element values removed.
    pub pull_all: BTreeMap<Path, Vec<Value>>,
}

impl UpdateOps {
    pub fn new() -> Self {
        Default::default()
    }

    /// True when no operation was produced, i.e. the documents were equal.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
            && self.unset.is_empty()
            && self.push.is_empty()
            && self.pull.is_empty()
            && self.pull_all.is_empty()
    }

    /// Returns the total number of operations across all operators.
    pub fn len(&self) -> usize {
        self.set.len() + self.unset.len() + self.push.len() + self.pull.len() + self.pull_all.len()
    }

    /// Iterates over every path targeted by any operator.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.set
            .keys()
            .chain(self.unset.iter())
            .chain(self.push.keys())
            .chain(self.pull.keys())
            .chain(self.pull_all.keys())
    }

    /// Merges another operation set into this one, operator by operator.
    pub fn extend(&mut self, other: UpdateOps) {
        self.set.extend(other.set);
        self.unset.extend(other.unset);
        self.push.extend(other.push);
        self.pull.extend(other.pull);
        self.pull_all.extend(other.pull_all);
    }
}

impl Serialize for UpdateOps {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sections = [
            !self.set.is_empty(),
            !self.unset.is_empty(),
            !self.push.is_empty(),
            !self.pull.is_empty(),
            !self.pull_all.is_empty(),
        ]
        .iter()
        .filter(|present| **present)
        .count();

        let mut map = serializer.serialize_map(Some(sections))?;
        if !self.set.is_empty() {
            map.serialize_entry("$set", &self.set)?;
        }
        if !self.unset.is_empty() {
            // The wire form marks each unset path with 1.
            let markers: BTreeMap<&Path, u8> = self.unset.iter().map(|path| (path, 1)).collect();
            map.serialize_entry("$unset", &markers)?;
        }
        if !self.push.is_empty() {
            map.serialize_entry("$push", &self.push)?;
        }
        if !self.pull.is_empty() {
            map.serialize_entry("$pull", &self.pull)?;
        }
        if !self.pull_all.is_empty() {
            map.serialize_entry("$pullAll", &self.pull_all)?;
        }
        map.end()
    }
}

impl Serialize for Push {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Push::One(value) => value.serialize(serializer),
            Push::Each(values) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$each", values)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for UpdateOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no changes)");
        }
        if !self.set.is_empty() {
            writeln!(f, "$set:")?;
            for (path, value) in &self.set {
                writeln!(f, "  {}: {}", path, json(value)?)?;
            }
        }
        if !self.unset.is_empty() {
            writeln!(f, "$unset:")?;
            for path in &self.unset {
                writeln!(f, "  {}", path)?;
            }
        }
        if !self.push.is_empty() {
            writeln!(f, "$push:")?;
            for (path, push) in &self.push {
                match push {
                    Push::One(value) => writeln!(f, "  {}: {}", path, json(value)?)?,
                    Push::Each(values) => {
                        writeln!(f, "  {}: $each {}", path, json_list(values)?)?
                    }
                }
            }
        }
        if !self.pull.is_empty() {
            writeln!(f, "$pull:")?;
            for (path, value) in &self.pull {
                writeln!(f, "  {}: {}", path, json(value)?)?;
            }
        }
        if !self.pull_all.is_empty() {
            writeln!(f, "$pullAll:")?;
            for (path, values) in &self.pull_all {
                writeln!(f, "  {}: {}", path, json_list(values)?)?;
            }
        }
        Ok(())
    }
}

fn json(value: &Value) -> Result<String, fmt::Error> {
    serde_json::to_string(value).map_err(|_| fmt::Error)
}

fn json_list(values: &[Value]) -> Result<String, fmt::Error> {
    serde_json::to_string(values).map_err(|_| fmt::Error)
}
