//! Shape queries: pull a sub-note matching a query's outline.
//!
//! The query note names the entries wanted; its own leaf values are
//! placeholders ("give me this whole field"), and a non-empty query
//! subtree descends instead of copying. The target is consulted name by
//! name: a falsy target value (empty string, numeric zero, NaN) counts
//! as absent and is never retrieved.

use crate::note::{Note, Value};

impl Note {
    /// Copy of this note shaped like `query`.
    ///
    /// For each visible query entry, the result carries this note's
    /// entry under the same name: the full value when the query holds a
    /// leaf or an empty subtree, or a recursive retrieval when both
    /// sides hold subtrees. Names missing here, holding a falsy value,
    /// or holding a leaf where the query expects structure are left
    /// out, so the result may be smaller than the query's outline.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let note = Note::parse("name Sam\nrole admin\nhome\n city Kent");
    /// let query = Note::parse("name 1\nhome 1");
    /// assert_eq!(note.retrieve(&query).to_string(), "name Sam\nhome\n city Kent\n");
    /// ```
    pub fn retrieve(&self, query: &Note) -> Note {
        let mut found = Note::new();
        for (name, wanted) in query.iter() {
            let Some(value) = self.visible_value(name) else {
                continue;
            };
            if is_falsy(value) {
                continue;
            }
            match wanted {
                Value::Note(shape) if !shape.is_empty() => {
                    if let Value::Note(target) = value {
                        found.insert(name, target.retrieve(shape));
                    }
                }
                _ => {
                    found.insert(name, value.clone());
                }
            }
        }
        found
    }
}

/// Absent-equivalent target values. A subtree is never falsy, even when
/// it has no entries.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Str(text) => text.is_empty(),
        Value::Int(i) => *i == 0,
        Value::Float(x) => *x == 0.0 || x.is_nan(),
        Value::Note(_) => false,
    }
}
