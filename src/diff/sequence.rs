//! How two versions of a list become operations.

use crate::path::Path;
use crate::value::Value;

use super::differ::{diff_documents, DiffOptions};
use super::update_ops::{Push, UpdateOps};

/// Diffs two unequal lists at `path`.
///
/// The strategy prefers, in order: a tail append when the old list is an
/// unchanged prefix of the new one; a pull when the new list is the old one
/// with some values removed; a positional patch touching only the indices
/// that changed. It falls back to one set replacing the whole list when the
/// list shrank in a way a pull cannot express, or when more than half of the
/// old elements changed.
pub(super) fn diff_lists(
    old: &[Value],
    new: &[Value],
    path: &Path,
    depth: usize,
    options: &DiffOptions,
    ops: &mut UpdateOps,
) {
    let old_len = old.len();
    let new_len = new.len();

    // Unchanged prefix with a new tail: append.
    if new_len > old_len && old == &new[..old_len] {
        let push = if new_len - old_len == 1 {
            Push::One(new[old_len].clone())
        } else {
            Push::Each(new[old_len..].to_vec())
        };
        ops.push.insert(path.clone(), push);
        return;
    }

    if new_len < old_len {
        if let Some(mut removed) = removed_for_subsequence(old, new) {
            // A pull removes every occurrence of a value, so it is only
            // faithful when no removed value survives in the new list.
            if removed.iter().all(|value| !new.contains(value)) {
                if removed.len() == 1 {
                    ops.pull.insert(path.clone(), removed.remove(0));
                } else {
                    ops.pull_all.insert(path.clone(), removed);
                }
                return;
            }
        }
        // A positional patch cannot shorten a list.
        ops.set.insert(path.clone(), Value::List(new.to_vec()));
        return;
    }

    // Same length, or longer with an edited prefix: patch the indices that
    // changed, then write the appended tail. When most of the old list
    // changed, one set of the whole list is smaller than the patch.
    let mut patch = UpdateOps::new();
    let mut changed = 0;
    for (index, (old_item, new_item)) in old.iter().zip(new).enumerate() {
        if old_item == new_item {
            continue;
        }
        changed += 1;
        match (old_item, new_item) {
            (Value::Doc(old_doc), Value::Doc(new_doc)) if depth < options.max_depth => {
                diff_documents(
                    old_doc,
                    new_doc,
                    &path.index(index),
                    depth + 1,
                    options,
                    &mut patch,
                );
            }
            _ => {
                patch.set.insert(path.index(index), new_item.clone());
            }
        }
    }
    if changed * 2 > old_len {
        ops.set.insert(path.clone(), Value::List(new.to_vec()));
        return;
    }
    for (index, item) in new.iter().enumerate().skip(old_len) {
        patch.set.insert(path.index(index), item.clone());
    }
    ops.extend(patch);
}

/// Returns the elements dropped from `old` when `new` is a subsequence of it,
/// matching retained elements left to right.
fn removed_for_subsequence(old: &[Value], new: &[Value]) -> Option<Vec<Value>> {
    let mut removed = Vec::with_capacity(old.len() - new.len());
    let mut kept = 0;
    for element in old {
        if kept < new.len() && *element == new[kept] {
            kept += 1;
        } else {
            removed.push(element.clone());
        }
    }
    (kept == new.len()).then_some(removed)
}
