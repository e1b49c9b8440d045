//! The recursive walk that turns two documents into update operations.

use crate::path::Path;
use crate::value::{Document, Value};

use super::sequence;
use super::update_ops::UpdateOps;

/// Options controlling a diff walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Containers nested deeper than this many levels below the root are
    /// compared as opaque wholes instead of being descended into. The walk
    /// stays total: an unequal container at the limit becomes one set of the
    /// whole container.
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions { max_depth: 64 }
    }
}

/// Computes the update operations that transform `old` into `new`.
///
/// The returned operations are keyed by dot-joined [`Path`]s from the root,
/// and each path appears under at most one operator. An empty result means
/// the documents are equal. A caller holding only one side models the other
/// as an empty [`Document`]: every field then becomes a set or an unset.
pub fn diff(old: &Document, new: &Document) -> UpdateOps {
    diff_with_options(old, new, &DiffOptions::default())
}

/// Computes update operations with explicit [`DiffOptions`].
pub fn diff_with_options(old: &Document, new: &Document, options: &DiffOptions) -> UpdateOps {
    let mut ops = UpdateOps::new();
    diff_documents(old, new, &Path::root(), 0, options, &mut ops);
    ops
}

/// Walks one document level, accumulating operations into `ops`.
///
/// `depth` is the nesting level of the document being walked; the root
/// document is 0.
pub(super) fn diff_documents(
    old: &Document,
    new: &Document,
    prefix: &Path,
    depth: usize,
    options: &DiffOptions,
    ops: &mut UpdateOps,
) {
    for (key, _) in old.iter() {
        if !new.has(key) {
            ops.unset.insert(prefix.field(key));
        }
    }
    for (key, new_value) in new.iter() {
        let path = prefix.field(key);
        match old.get(key) {
            None => {
                ops.set.insert(path, new_value.clone());
            }
            Some(old_value) => diff_values(old_value, new_value, &path, depth, options, ops),
        }
    }
}

/// Compares one field value pair at `path`.
///
/// Equal values produce nothing. Unequal containers are descended into while
/// `depth` allows it; everything else becomes a set of the new value.
pub(super) fn diff_values(
    old: &Value,
    new: &Value,
    path: &Path,
    depth: usize,
    options: &DiffOptions,
    ops: &mut UpdateOps,
) {
    if old == new {
        return;
    }
    match (old, new) {
        (Value::Doc(old_doc), Value::Doc(new_doc)) if depth < options.max_depth => {
            diff_documents(old_doc, new_doc, path, depth + 1, options, ops);
        }
        (Value::List(old_list), Value::List(new_list)) if depth < options.max_depth => {
            sequence::diff_lists(old_list, new_list, path, depth + 1, options, ops);
        }
        _ => {
            ops.set.insert(path.clone(), new.clone());
        }
    }
}
