//! Opaque identifier values compared by canonical string form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Comparable is the capability a store-minted scalar kind implements so the
/// comparator can test identity without knowing the concrete type.
///
/// Two values of the same kind are equal exactly when their canonical forms
/// are equal. The canonical form must be stable: parsing a value from its
/// canonical form and asking again must return the same string.
pub trait Comparable {
    /// Returns the canonical string form that defines this value's identity.
    fn canonical_form(&self) -> String;
}

/// Identifier is an opaque scalar holding only a canonical form.
///
/// Constructed from any [`Comparable`] value; equality, ordering, and display
/// all go through the canonical string, so adding a new id kind never touches
/// comparison logic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    canonical: String,
}

impl Identifier {
    /// Captures the canonical form of any comparable value.
    pub fn of(value: &impl Comparable) -> Self {
        Identifier {
            canonical: value.canonical_form(),
        }
    }

    /// Wraps an already-canonical string.
    pub fn from_canonical(canonical: impl Into<String>) -> Self {
        Identifier {
            canonical: canonical.into(),
        }
    }

    /// Returns the canonical form.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl Comparable for Identifier {
    fn canonical_form(&self) -> String {
        self.canonical.clone()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

/// ObjectId is the store's 12-byte generated id.
///
/// The canonical form is the 24-character lowercase hex encoding of the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

/// ParseIdError represents a failure to parse an ObjectId from hex.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseIdError {
    #[error("expected 24 hex characters, got {length}")]
    InvalidLength { length: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl ObjectId {
    /// Creates an ObjectId from raw bytes.
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        ObjectId(bytes)
    }

    /// Parses an ObjectId from its 24-character hex form.
    ///
    /// Both hex cases are accepted; the canonical form is always lowercase.
    pub fn parse_str(s: &str) -> Result<Self, ParseIdError> {
        if s.len() != 24 {
            return Err(ParseIdError::InvalidLength { length: s.len() });
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(ObjectId(bytes))
    }

    /// Returns the canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the raw bytes.
    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }
}

impl Comparable for ObjectId {
    fn canonical_form(&self) -> String {
        self.to_hex()
    }
}

impl From<ObjectId> for Identifier {
    fn from(oid: ObjectId) -> Self {
        Identifier::of(&oid)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
    }
}
