//! # note-core
//!
//! Parser, serializer, and structural operations for **Note**, a
//! recursive whitespace-indentation notation for ordered trees of named
//! values.
//!
//! A note is an ordered mapping from names to values; a value is a
//! string or numeric leaf, or a nested note. The notation writes one
//! entry per line, with one leading space per nesting level and the
//! name separated from its value by a single space. Parsing is total:
//! any input string produces a note, with stray indentation absorbed
//! into nearby structure rather than reported as an error.
//!
//! ## Quick start
//!
//! ```rust
//! use note_core::Note;
//!
//! let mut note = Note::parse("name Sam\nhome\n city Kent");
//! assert_eq!(note.get_str("home city"), Some("Kent"));
//!
//! note.set("home city", "Leeds");
//! assert_eq!(note.to_string(), "name Sam\nhome\n city Leeds\n");
//!
//! // diff produces the patch that turns one note into another
//! let target = Note::parse("name Pam\nhome\n city Kent");
//! let patch = note.diff(&target);
//! assert!(note.patch(&patch).equals(&target));
//! ```
//!
//! ## Modules
//!
//! - [`note`] — the [`Note`] tree and its [`Value`] entries
//! - [`parser`] — notation text → [`Note`] ([`Note::parse`])
//! - [`serializer`] — [`Note`] → canonical text (the `Display` impl)
//! - [`diff`] — the patch that transforms one note into another
//! - [`patch`] — in-place merge of a patch note, dual of diff
//! - [`retrieve`] — shape-driven subtree extraction
//! - [`union`] — structure shared across notes (an intersection)
//! - [`sort`] — sorted views by name or by a numeric sub-field
//! - [`json`] — JSON interop plus the serde impls
//! - [`error`] — error types for the JSON paths

pub mod diff;
pub mod error;
pub mod json;
pub mod note;
pub mod parser;
pub mod patch;
pub mod retrieve;
pub mod serializer;
pub mod sort;
pub mod union;

pub use error::{NoteError, Result};
pub use note::{Note, Value};
pub use union::union_single;
