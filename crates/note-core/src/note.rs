//! The `Note` tree and its `Value` entries.
//!
//! A [`Note`] is an ordered mapping from string names to values, where a
//! value is either a scalar leaf or a nested `Note`. Insertion order is
//! significant: it is the canonical serialization order, and re-assigning
//! an existing name keeps its original position (last assignment wins).
//!
//! # Key design decisions
//!
//! - **Ordered storage**: entries live in an `IndexMap`, so iteration,
//!   serialization, and the order-sensitive accessors (`first`, `shift`,
//!   `next_name`) all see insertion order. Removal uses `shift_remove`,
//!   which preserves the relative order of the remaining entries.
//! - **Name visibility**: each instance carries a set of excluded names
//!   (see [`Note::exclude`]). Every structural traversal (length,
//!   iteration, serialization, diff, patch, retrieve, union, sorted views)
//!   filters through it, so bookkeeping entries can ride along without
//!   leaking into any structural result. The direct accessors
//!   ([`Note::get`] and friends) bypass the filter: they address instance
//!   data, not the structural view.
//! - **No `PartialEq`**: notation equality is loose (a numeric leaf equals
//!   its decimal string, insertion order is ignored) and not even
//!   symmetric in one corner, which is too coarse to pass off as `==`. It
//!   is exposed as [`Note::equals`] and [`Value::loosely_equals`] instead.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;

/// A single entry value: a scalar leaf or a nested subtree.
///
/// Numeric leaves keep their numeric type through `set` and `patch`, but
/// serialize via their decimal string form and compare loosely equal to it
/// (`1` equals `"1"`). Parsing notation text only ever produces `Str`
/// leaves, so numbers degrade to strings across a serialize/parse cycle.
#[derive(Debug, Clone)]
pub enum Value {
    /// String leaf, possibly multi-line, possibly empty.
    Str(String),
    /// Integer leaf.
    Int(i64),
    /// Floating-point leaf.
    Float(f64),
    /// Nested subtree.
    Note(Note),
}

impl Value {
    /// Returns the string slice if this is a `Str` leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value if this is an `Int` or `Float` leaf.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the nested note if this is a subtree.
    pub fn as_note(&self) -> Option<&Note> {
        match self {
            Value::Note(note) => Some(note),
            _ => None,
        }
    }

    /// Loose notation-level equality.
    ///
    /// Two leaves are equal when their display strings match, so `Int(1)`
    /// equals `Str("1")`. A subtree and a leaf are equal when the subtree's
    /// serialization matches the leaf's display string (which makes an
    /// empty subtree equal to an empty string leaf). Two subtrees are
    /// never loosely equal; compare them with [`Note::equals`] instead.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Note(_), Value::Note(_)) => false,
            _ => self.to_string() == other.to_string(),
        }
    }
}

/// The display string of a value is its notation form: leaves print their
/// scalar text, subtrees print their serialization. `-0.0` normalizes to
/// `0`, matching the serializer's number formatting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) if *x == 0.0 => f.write_str("0"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Note(note) => write!(f, "{note}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Note> for Value {
    fn from(note: Note) -> Self {
        Value::Note(note)
    }
}

/// An ordered tree of name/value pairs.
///
/// See the [module docs](self) for the representation. Construct one
/// empty, from notation text via [`Note::parse`], or from JSON via
/// [`Note::from_json`].
#[derive(Debug, Clone, Default)]
pub struct Note {
    entries: IndexMap<String, Value>,
    excluded: BTreeSet<String>,
}

impl Note {
    /// Creates an empty note.
    pub fn new() -> Note {
        Note::default()
    }

    /// Number of visible entries. Shallow.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when the note has no visible entries.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Visible entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries
            .iter()
            .filter(|(name, _)| !self.excluded.contains(name.as_str()))
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Visible entries in insertion order, values mutable.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> + '_ {
        let excluded = &self.excluded;
        self.entries
            .iter_mut()
            .filter(move |(name, _)| !excluded.contains(name.as_str()))
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Visible names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(name, _)| name)
    }

    /// First visible entry, if any.
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.iter().next()
    }

    /// Last visible entry, if any.
    pub fn last(&self) -> Option<(&str, &Value)> {
        self.iter().last()
    }

    /// Writes an entry. Re-assigning an existing name keeps its position;
    /// a new name appends. Returns `self` for chaining.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Note {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Removes an entry by name, preserving the order of the rest.
    /// Addresses instance data directly, so it can remove excluded entries.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Removes and returns the first visible entry.
    pub fn shift(&mut self) -> Option<(String, Value)> {
        let name = self.first().map(|(name, _)| name.to_string())?;
        self.entries.shift_remove_entry(&name)
    }

    /// Removes and returns the last visible entry.
    pub fn pop(&mut self) -> Option<(String, Value)> {
        let name = self.last().map(|(name, _)| name.to_string())?;
        self.entries.shift_remove_entry(&name)
    }

    /// Deletes all visible entries. Excluded entries stay. Returns `self`
    /// for chaining.
    pub fn clear(&mut self) -> &mut Note {
        let names: Vec<String> = self.keys().map(str::to_string).collect();
        for name in &names {
            self.entries.shift_remove(name);
        }
        self
    }

    /// Marks a name as bookkeeping: the entry (current or future) is
    /// hidden from iteration, serialization, and the structural
    /// operations, while staying reachable through [`Note::get`].
    pub fn exclude(&mut self, name: impl Into<String>) -> &mut Note {
        self.excluded.insert(name.into());
        self
    }

    /// True unless the name has been excluded via [`Note::exclude`].
    pub fn is_visible(&self, name: &str) -> bool {
        !self.excluded.contains(name)
    }

    /// Direct entry lookup, ignoring visibility.
    pub(crate) fn raw_value(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Entry lookup as the structural operations see it: present and
    /// not excluded.
    pub(crate) fn visible_value(&self, name: &str) -> Option<&Value> {
        if self.excluded.contains(name) {
            return None;
        }
        self.entries.get(name)
    }

    pub(crate) fn entry_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    /// Looks up a value by a space-delimited path of names.
    ///
    /// Returns `None` for the empty path, for any missing segment, and
    /// when a path tries to descend through a leaf. This is a direct
    /// accessor: it sees excluded entries.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let note = Note::parse("user\n name Ada\n stage\n  domain example.com");
    /// assert_eq!(note.get("user stage domain").and_then(|v| v.as_str()), Some("example.com"));
    /// assert!(note.get("user missing").is_none());
    /// ```
    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        let mut current = self;
        let mut segments = path.split(' ').peekable();
        loop {
            let name = segments.next()?;
            let value = current.raw_value(name)?;
            if segments.peek().is_none() {
                return Some(value);
            }
            match value {
                Value::Note(sub) => current = sub,
                _ => return None,
            }
        }
    }

    /// [`Note::get`] narrowed to string leaves.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// [`Note::get`] coerced to a number: numeric leaves convert directly,
    /// string leaves are parsed as decimal. `None` when the path misses,
    /// lands on a subtree, or the string does not parse.
    pub fn get_float(&self, path: &str) -> Option<f64> {
        match self.get(path)? {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Note(_) => None,
        }
    }

    /// [`Note::get`] narrowed to subtrees.
    pub fn get_note(&self, path: &str) -> Option<&Note> {
        self.get(path)?.as_note()
    }

    /// Mutable [`Note::get`]: a direct accessor for editing a value (or
    /// patching a subtree) in place.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        if path.is_empty() {
            return None;
        }
        match path.split_once(' ') {
            None => self.entry_mut(path),
            Some((head, rest)) => match self.entry_mut(head)? {
                Value::Note(sub) => sub.get_mut(rest),
                _ => None,
            },
        }
    }

    /// Sets a value at a space-delimited path, creating intermediate
    /// subtrees as needed.
    ///
    /// Built as a single-branch patch and applied via [`Note::patch`], so
    /// it inherits the patch rules: setting an empty string deletes the
    /// path, and setting a leaf over a subtree collapses the subtree.
    /// The empty path is a no-op.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Note {
        if path.is_empty() {
            return self;
        }
        let mut segments = path.split(' ').rev();
        let Some(mut name) = segments.next() else {
            return self;
        };
        let mut wrapped = value.into();
        for parent in segments {
            let mut branch = Note::new();
            branch.insert(name, wrapped);
            wrapped = Value::Note(branch);
            name = parent;
        }
        let mut patch = Note::new();
        patch.insert(name, wrapped);
        self.patch(&patch)
    }

    /// Deep copy of the visible structure: excluded entries are dropped
    /// and no exclusion markers survive, all the way down. This is the
    /// copy the structural operations graft into their results; `clone()`
    /// copies the full instance instead, bookkeeping included.
    pub fn visible_copy(&self) -> Note {
        let mut copy = Note::new();
        for (name, value) in self.iter() {
            let value = match value {
                Value::Note(sub) => Value::Note(sub.visible_copy()),
                leaf => leaf.clone(),
            };
            copy.insert(name, value);
        }
        copy
    }

    /// Structural equality on the visible entries: true when the diff
    /// from `self` to `other` is empty. Insertion order is ignored and
    /// leaf comparison is loose, so a numeric leaf equals its decimal
    /// string. An empty subtree here equals an empty string leaf in
    /// `other`, but not the other way around (the reverse diff records
    /// a change), so `equals` is not symmetric in that corner.
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let a = Note::parse("zips\n 1 123");
    /// let mut b = Note::new();
    /// let mut zips = Note::new();
    /// zips.insert("1", 123);
    /// b.insert("zips", zips);
    /// assert!(a.equals(&b));
    /// ```
    pub fn equals(&self, other: &Note) -> bool {
        self.diff(other).is_empty()
    }

    /// New note holding clones of the visible entries the predicate keeps.
    pub fn filtered<F>(&self, mut keep: F) -> Note
    where
        F: FnMut(&str, &Value) -> bool,
    {
        let mut out = Note::new();
        for (name, value) in self.iter() {
            if keep(name, value) {
                out.insert(name, value.clone());
            }
        }
        out
    }

    /// Recursive count of visible leaf values.
    pub fn leaf_count(&self) -> usize {
        self.iter()
            .map(|(_, value)| match value {
                Value::Note(sub) => sub.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    /// Recursive count of visible subtree values.
    pub fn note_count(&self) -> usize {
        self.iter()
            .map(|(_, value)| match value {
                Value::Note(sub) => 1 + sub.note_count(),
                _ => 0,
            })
            .sum()
    }

    /// Byte length of the serialization.
    pub fn serialized_len(&self) -> usize {
        self.to_string().len()
    }

    /// Name after `name` in insertion order, wrapping from the last
    /// visible entry back to the first. `None` when `name` is not a
    /// visible entry.
    pub fn next_name(&self, name: &str) -> Option<&str> {
        let names: Vec<&str> = self.keys().collect();
        let pos = names.iter().position(|n| *n == name)?;
        Some(names[(pos + 1) % names.len()])
    }

    /// Name before `name` in insertion order, wrapping from the first
    /// visible entry to the last. `None` when `name` is not a visible
    /// entry.
    pub fn prev_name(&self, name: &str) -> Option<&str> {
        let names: Vec<&str> = self.keys().collect();
        let pos = names.iter().position(|n| *n == name)?;
        Some(names[(pos + names.len() - 1) % names.len()])
    }
}
