//! Paths name field locations with the store's dot convention.

use std::fmt;

use serde::{Serialize, Serializer};

/// Path is the dot-joined location of a field inside a document.
///
/// The root document is the empty path. Descending into a field appends the
/// field name; descending into a list element appends the decimal index. So
/// the second element of the list at field `b` of sub-document `a` is
/// `a.b.1`. Field names are joined verbatim; the store forbids dots in field
/// names, so paths stay unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(String);

impl Path {
    /// Returns the path of the root document.
    pub fn root() -> Self {
        Path(String::new())
    }

    /// True for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path of a named field under this one.
    pub fn field(&self, name: &str) -> Path {
        if self.is_root() {
            Path(name.to_string())
        } else {
            Path(format!("{}.{}", self.0, name))
        }
    }

    /// Returns the path of a list element under this one.
    pub fn index(&self, index: usize) -> Path {
        if self.is_root() {
            Path(index.to_string())
        } else {
            Path(format!("{}.{}", self.0, index))
        }
    }

    /// Returns the dot-joined form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path(s.to_string())
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path(s)
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
