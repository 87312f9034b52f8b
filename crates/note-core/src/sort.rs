//! Sorted views: new notes with the same visible entries reordered.
//!
//! Views are plain notes built fresh, so they carry no exclusions of
//! their own. Both sorts are stable: entries that compare equal keep
//! their original relative order, in reverse mode too (the comparator
//! flips, the tie order does not).

use crate::note::{Note, Value};

impl Note {
    /// Visible entries reordered by name, ascending (or descending
    /// when `reverse` is set). Names are unique per level, so there are
    /// no ties to break.
    pub fn to_sorted_note(&self, reverse: bool) -> Note {
        let mut pairs: Vec<(&str, &Value)> = self.iter().collect();
        pairs.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        if reverse {
            pairs.reverse();
        }
        collect_note(pairs)
    }

    /// Visible entries reordered by the numeric value of the named
    /// sub-field of each entry, ascending (or descending when `reverse`
    /// is set).
    ///
    /// Entries whose value is a leaf, lacks the sub-field, or holds a
    /// non-numeric sub-field sort as zero.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let people = Note::parse("ben\n age 29\nmairi\n age 23\njack\n age 60");
    /// let by_age = people.to_sorted_note_by("age", false);
    /// let names: Vec<&str> = by_age.keys().collect();
    /// assert_eq!(names, ["mairi", "ben", "jack"]);
    /// ```
    pub fn to_sorted_note_by(&self, property: &str, reverse: bool) -> Note {
        let mut pairs: Vec<(&str, &Value, f64)> = self
            .iter()
            .map(|(name, value)| (name, value, sort_key(value, property)))
            .collect();
        if reverse {
            pairs.sort_by(|(_, _, a), (_, _, b)| b.total_cmp(a));
        } else {
            pairs.sort_by(|(_, _, a), (_, _, b)| a.total_cmp(b));
        }
        collect_note(pairs.into_iter().map(|(name, value, _)| (name, value)))
    }
}

/// Numeric sort key for one entry. Sub-field lookup is unfiltered, so
/// an excluded sub-field still drives the ordering.
fn sort_key(value: &Value, property: &str) -> f64 {
    let Value::Note(sub) = value else {
        return 0.0;
    };
    let key = match sub.raw_value(property) {
        Some(Value::Int(i)) => *i as f64,
        Some(Value::Float(x)) => *x,
        Some(Value::Str(text)) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    // NaN and negative zero would leak total_cmp artifacts into the
    // ordering.
    if key.is_nan() || key == 0.0 {
        0.0
    } else {
        key
    }
}

fn collect_note<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a Value)>) -> Note {
    let mut sorted = Note::new();
    for (name, value) in pairs {
        sorted.insert(name, value.clone());
    }
    sorted
}
