//! Value module - In-memory representation of hierarchical documents.
//!
//! This module provides the document value model, identifier scalars, and
//! conversion to and from JSON/YAML wire forms.

mod convert;
mod id;
mod value;

pub use convert::*;
pub use id::*;
pub use value::*;
