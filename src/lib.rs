//! # Document Update Diff
//!
//! A library that compares two versions of a hierarchical document and
//! produces the update operations (set, unset, push, pull, pullAll) that
//! transform the old version into the new one.
//!
//! The operations use the document store's update conventions: paths are
//! dot-joined from the root, list tails are appended with push, removed list
//! values are pulled, and a field that changed kind is simply rewritten.
//! Applying the full operation set to the old document always rebuilds the
//! new document.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of documents, identifier scalars,
//!   and JSON/YAML conversion
//! - [`path`] - Dot-joined field locations inside a document
//! - [`diff`] - The walk that turns two document versions into operations

pub mod diff;
pub mod path;
pub mod value;

pub use diff::{diff, diff_with_options, DiffOptions, Push, UpdateOps};
pub use path::Path;
pub use value::{
    Comparable, ConvertError, DateTime, Document, Identifier, ObjectId, ParseIdError, Value,
};
