//! In-place patch application, the dual of [`Note::diff`].
//!
//! Applying `a.diff(&b)` to `a` makes it loosely equal to `b`. The
//! tombstone convention cuts both ways: an empty-string leaf in the
//! patch deletes, and so does an empty subtree, so neither value can be
//! installed through a patch.

use crate::note::{Note, Value};

impl Note {
    /// Merge `patch` into this note, entry by entry.
    ///
    /// - empty-string leaf: delete the named entry
    /// - other leaf: set the named entry to it
    /// - empty subtree: delete the named entry
    /// - subtree, over an existing subtree here: recurse
    /// - subtree, over a leaf or a missing name: replace wholesale
    ///
    /// Patch entries whose name is excluded here are ignored, so hidden
    /// state survives patching. Returns `self` for chaining.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let mut note = Note::parse("length 12\nwidth 4");
    /// note.patch(&Note::parse("width\nheight 2"));
    /// assert_eq!(note.to_string(), "length 12\nheight 2\n");
    /// ```
    pub fn patch(&mut self, patch: &Note) -> &mut Note {
        for (name, value) in patch.iter() {
            if !self.is_visible(name) {
                continue;
            }
            match value {
                Value::Str(text) if text.is_empty() => {
                    self.remove(name);
                }
                Value::Note(sub) if sub.is_empty() => {
                    self.remove(name);
                }
                Value::Note(sub) => {
                    if let Some(Value::Note(target)) = self.entry_mut(name) {
                        target.patch(sub);
                    } else {
                        self.insert(name, sub.visible_copy());
                    }
                }
                leaf => {
                    self.insert(name, leaf.clone());
                }
            }
        }
        self
    }

    /// Parse `text` and apply it as a patch.
    pub fn patch_text(&mut self, text: &str) -> &mut Note {
        self.patch(&Note::parse(text))
    }
}
