//! Path module - Dot-joined field locations inside a document.

mod path;

pub use path::*;
