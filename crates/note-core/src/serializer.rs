//! Canonical serializer: [`Note`] to notation text.
//!
//! One entry per line, names indented by one space per nesting level,
//! visible entries only, insertion order. Re-parsing the output
//! reproduces the note's visible structure (numeric leaves come back as
//! their decimal strings).
//!
//! Per entry at depth `d`:
//!
//! - subtree value: `name\n`, then the subtree at depth `d + 1`
//! - empty leaf: `name\n` (a bare name line, identical to an empty
//!   subtree; the two are indistinguishable on reparse)
//! - multi-line leaf: `name \n` (note the trailing space), then each
//!   value line at depth `d + 1`
//! - plain leaf: `name value\n`
//!
//! Nonempty output always ends with a newline; the empty note serializes
//! to the empty string.

use std::fmt;

use crate::note::{Note, Value};

/// `Display` is the serializer, so `to_string()` yields notation text.
///
/// ```
/// use note_core::Note;
///
/// let mut note = Note::parse("hello world");
/// note.insert("lines", "one\ntwo");
/// assert_eq!(note.to_string(), "hello world\nlines \n one\n two\n");
/// ```
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_note(self, 0, &mut out);
        f.write_str(&out)
    }
}

fn write_note(note: &Note, depth: usize, out: &mut String) {
    let indent = make_indent(depth);
    for (name, value) in note.iter() {
        out.push_str(&indent);
        out.push_str(name);
        match value {
            Value::Note(sub) => {
                out.push('\n');
                write_note(sub, depth + 1, out);
            }
            leaf => write_leaf(&leaf.to_string(), depth, out),
        }
    }
}

/// Emit the value part of a leaf line. The name and its indentation are
/// already written.
fn write_leaf(text: &str, depth: usize, out: &mut String) {
    if text.is_empty() {
        out.push('\n');
    } else if text.contains('\n') {
        out.push_str(" \n");
        let pad = make_indent(depth + 1);
        for line in text.split('\n') {
            out.push_str(&pad);
            out.push_str(line);
            out.push('\n');
        }
    } else {
        out.push(' ');
        out.push_str(text);
        out.push('\n');
    }
}

/// One space per nesting level.
fn make_indent(depth: usize) -> String {
    " ".repeat(depth)
}
