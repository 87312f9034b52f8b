//! Notation parser: text to [`Note`].
//!
//! The grammar is line-oriented. A document is a sequence of blocks
//! separated by every newline that is NOT followed by a space; a newline
//! followed by a space belongs to the current block as a continuation
//! line. Each block's first line decides its shape:
//!
//! - **Subtree block**: the first line is a bare name (no space). Every
//!   following line of the block loses one leading space and the remainder
//!   is parsed recursively as the subtree body.
//! - **Leaf block**: the first line is `name value...`. The value is the
//!   rest of the first line plus the continuation lines, each with one
//!   leading space of indentation stripped, newlines preserved. Multi-line
//!   values round-trip exactly, embedded blank lines included.
//!
//! # Key design decisions
//!
//! - **The parser is total**: malformed pieces (an empty block, a block
//!   whose name would be empty) are silently dropped rather than reported.
//!   Callers wanting strict validation layer it above this module.
//! - **Preprocessing runs per nesting level**: each subtree body goes
//!   through the same leading/trailing cleanup and newline normalization
//!   as the whole document, since the body of a block is itself a
//!   document.
//! - **Only the first run of blank lines collapses**: the cleanup step
//!   replaces the first sequence of 2+ consecutive newlines with one and
//!   leaves later runs alone. Serializer output never contains blank
//!   lines, so round-trips are unaffected; the quirk is pinned by tests
//!   rather than fixed because existing documents depend on it.

use crate::note::{Note, Value};

impl Note {
    /// Parse notation text into a note. Total: any input produces a note,
    /// the empty string produces an empty one.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let note = Note::parse("hello world");
    /// assert_eq!(note.get_str("hello"), Some("world"));
    /// ```
    pub fn parse(text: &str) -> Note {
        let mut note = Note::new();
        let text = preprocess(text);
        for block in split_blocks(&text) {
            let first_line = match block.find('\n') {
                Some(end) => &block[..end],
                None => block,
            };
            if first_line.is_empty() {
                continue;
            }
            match first_line.find(' ') {
                // Bare name: the rest of the block is a nested body.
                None => {
                    let body = block[first_line.len()..].replace("\n ", "\n");
                    note.insert(first_line, Value::Note(Note::parse(&body)));
                }
                // A space with no name before it matches neither shape.
                Some(0) => {}
                Some(split) => {
                    let value = &block[split + 1..];
                    let value = value.strip_prefix("\n ").unwrap_or(value);
                    note.insert(&first_line[..split], Value::Str(value.replace("\n ", "\n")));
                }
            }
        }
        note
    }
}

impl From<&str> for Note {
    fn from(text: &str) -> Note {
        Note::parse(text)
    }
}

/// Normalize a document before block splitting:
///
/// 1. strip the leading run of newlines and spaces (documents start on a
///    name),
/// 2. normalize `\n\r` and `\r\n` pairs to `\n`,
/// 3. strip the trailing run of newlines and spaces,
/// 4. collapse the first run of 2+ consecutive newlines to one.
fn preprocess(text: &str) -> String {
    let stripped = text.trim_start_matches(['\n', ' ']);
    let normalized = stripped.replace("\n\r", "\n").replace("\r\n", "\n");
    collapse_first_blank_run(normalized.trim_end_matches(['\n', ' ']))
}

fn collapse_first_blank_run(text: &str) -> String {
    let Some(start) = text.find("\n\n") else {
        return text.to_string();
    };
    let run_len = text[start..].bytes().take_while(|&b| b == b'\n').count();
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push('\n');
    out.push_str(&text[start + run_len..]);
    out
}

/// Split a document at every newline not followed by a space. The newline
/// is consumed; adjacent separators yield empty blocks, which the caller
/// drops.
fn split_blocks(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' && bytes.get(i + 1) != Some(&b' ') {
            blocks.push(&text[start..i]);
            start = i + 1;
        }
    }
    blocks.push(&text[start..]);
    blocks
}
