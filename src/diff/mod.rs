//! Diff module - Computing the update operations between two document
//! versions.
//!
//! [`diff`] walks an old and a new document in step and accumulates the
//! smallest practical set of update operations (set, unset, push, pull,
//! pullAll) that transforms the old into the new.

mod differ;
mod sequence;
mod update_ops;

pub use differ::*;
pub use update_ops::*;
