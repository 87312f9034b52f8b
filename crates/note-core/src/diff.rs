//! Structural diff between two notes.
//!
//! `a.diff(&b)` produces the patch note that transforms `a` into `b`
//! when applied with [`Note::patch`]. Deletion is encoded as an
//! empty-string leaf under the deleted name (a tombstone), so an empty
//! leaf value cannot be distinguished from a deletion by the patch
//! engine.
//!
//! # Key design decisions
//!
//! - Only visible entries on either side participate. Excluded names
//!   are carried through untouched and never generate tombstones.
//! - Leaves compare loosely: a numeric leaf equals the string leaf with
//!   the same rendering, so `Int(1)` vs `Str("1")` produces no change.
//! - A subtree replacing a leaf (or vice versa) is recorded wholesale,
//!   not descended into.

use crate::note::{Note, Value};

impl Note {
    /// The patch that turns `self` into `other`.
    ///
    /// Entries present here only, with `other`'s value (or a recursive
    /// diff when both sides hold subtrees under the same name). Entries
    /// absent from `other` become empty-string tombstones. An empty
    /// result means the two notes are loosely equal.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let a = Note::parse("length 12\nwidth 4");
    /// let b = Note::parse("length 12\nwidth 5");
    /// assert_eq!(a.diff(&b).to_string(), "width 5\n");
    /// ```
    pub fn diff(&self, other: &Note) -> Note {
        let mut patch = Note::new();
        for (name, value) in self.iter() {
            match other.visible_value(name) {
                None => {
                    // Deleted in `other`.
                    patch.insert(name, "");
                }
                Some(Value::Note(theirs)) => match value {
                    Value::Note(ours) => {
                        let sub = ours.diff(theirs);
                        if !sub.is_empty() {
                            patch.insert(name, sub);
                        }
                    }
                    // Leaf replaced by a subtree.
                    _ => {
                        patch.insert(name, theirs.visible_copy());
                    }
                },
                Some(theirs) => {
                    if !value.loosely_equals(theirs) {
                        patch.insert(name, theirs.clone());
                    }
                }
            }
        }
        for (name, value) in other.iter() {
            if self.visible_value(name).is_some() {
                continue;
            }
            match value {
                Value::Note(sub) => patch.insert(name, sub.visible_copy()),
                leaf => patch.insert(name, leaf.clone()),
            };
        }
        patch
    }
}
