//! Shared structure across notes.
//!
//! Despite the name, `union` keeps what the notes AGREE on, so it is an
//! intersection. The name is part of the notation's public vocabulary
//! and is kept as-is.
//!
//! Two entries agree when they share a name and either hold loosely
//! equal leaves or both hold subtrees (whose shared structure is kept
//! in turn, possibly empty). A name held as a leaf in one note and a
//! subtree in another agrees with nothing.

use crate::note::{Note, Value};

impl Note {
    /// Entries common to this note and every note in `others`, by
    /// loose leaf equality. Folds left with [`union_single`], stopping
    /// early once nothing is shared.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let a = Note::parse("maine me\nnew_york nyc\ncali ca");
    /// let b = Note::parse("maine me\nnew_york albany\nflorida fl");
    /// assert_eq!(a.union(&[&b]).to_string(), "maine me\n");
    /// ```
    pub fn union(&self, others: &[&Note]) -> Note {
        let mut shared = self.visible_copy();
        for other in others {
            shared = union_single(&shared, other);
            if shared.is_empty() {
                break;
            }
        }
        shared
    }
}

/// Entries common to `a` and `b`. Subtrees held under the same name on
/// both sides are kept with their own shared structure, even when that
/// comes out empty.
pub fn union_single(a: &Note, b: &Note) -> Note {
    let mut shared = Note::new();
    for (name, ours) in a.iter() {
        let Some(theirs) = b.visible_value(name) else {
            continue;
        };
        match (ours, theirs) {
            (Value::Note(left), Value::Note(right)) => {
                shared.insert(name, union_single(left, right));
            }
            (Value::Note(_), _) | (_, Value::Note(_)) => {}
            (left, right) => {
                if left.loosely_equals(right) {
                    shared.insert(name, left.clone());
                }
            }
        }
    }
    shared
}
