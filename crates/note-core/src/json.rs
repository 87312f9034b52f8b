//! JSON interop: build notes from JSON values and render notes as JSON.
//!
//! The mapping is structural. JSON objects become subtrees, strings and
//! numbers become leaves, and the JSON-only shapes are coerced: booleans
//! to their text form, null to an empty subtree, arrays to subtrees
//! keyed `0`, `1`, ... by position. Going the other way only visible
//! entries are emitted, and a non-finite float leaf (which JSON cannot
//! carry) comes out as null.
//!
//! `Serialize` and `Deserialize` follow the same mapping, so a note can
//! sit inside any larger serde-driven structure.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{NoteError, Result};
use crate::note::{Note, Value};

impl Note {
    /// Parse a JSON document into a note.
    ///
    /// The root must be an object (or null, giving an empty note).
    ///
    /// ```
    /// use note_core::Note;
    ///
    /// let note = Note::from_json(r#"{"name": "Sam", "age": 29}"#)?;
    /// assert_eq!(note.to_string(), "name Sam\nage 29\n");
    /// # Ok::<(), note_core::NoteError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Note> {
        let value: JsonValue = serde_json::from_str(text)?;
        Note::from_json_value(&value)
    }

    /// Convert an in-memory JSON value into a note. The root must be an
    /// object or null; any other root is an error, since a note is
    /// always a mapping.
    pub fn from_json_value(value: &JsonValue) -> Result<Note> {
        match value {
            JsonValue::Object(entries) => {
                let mut note = Note::new();
                for (name, item) in entries {
                    note.insert(name.as_str(), convert_json(item));
                }
                Ok(note)
            }
            JsonValue::Null => Ok(Note::new()),
            other => Err(NoteError::NotAMapping(json_type_name(other))),
        }
    }

    /// Render the visible entries as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the visible entries as an in-memory JSON object.
    pub fn to_json_value(&self) -> JsonValue {
        let mut entries = serde_json::Map::new();
        for (name, value) in self.iter() {
            entries.insert(name.to_string(), json_of(value));
        }
        JsonValue::Object(entries)
    }
}

fn convert_json(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Note(Note::new()),
        JsonValue::Bool(flag) => Value::Str(flag.to_string()),
        JsonValue::Number(number) => convert_number(number),
        JsonValue::String(text) => Value::Str(text.clone()),
        JsonValue::Array(items) => {
            let mut sub = Note::new();
            for (index, item) in items.iter().enumerate() {
                sub.insert(index.to_string(), convert_json(item));
            }
            Value::Note(sub)
        }
        JsonValue::Object(entries) => {
            let mut sub = Note::new();
            for (name, item) in entries {
                sub.insert(name.as_str(), convert_json(item));
            }
            Value::Note(sub)
        }
    }
}

fn convert_number(number: &serde_json::Number) -> Value {
    if let Some(i) = number.as_i64() {
        Value::Int(i)
    } else if let Some(x) = number.as_f64() {
        Value::Float(x)
    } else {
        Value::Str(number.to_string())
    }
}

fn json_of(value: &Value) -> JsonValue {
    match value {
        Value::Str(text) => JsonValue::String(text.clone()),
        Value::Int(i) => JsonValue::Number((*i).into()),
        Value::Float(x) => {
            serde_json::Number::from_f64(*x).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::Note(sub) => sub.to_json_value(),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Str(text) => serializer.serialize_str(text),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Note(sub) => sub.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Note, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NoteVisitor)
    }
}

struct NoteVisitor;

impl<'de> Visitor<'de> for NoteVisitor {
    type Value = Note;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of names to values")
    }

    fn visit_unit<E>(self) -> std::result::Result<Note, E>
    where
        E: de::Error,
    {
        Ok(Note::new())
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Note, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut note = Note::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            note.insert(name, value);
        }
        Ok(note)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, null, sequence, or mapping")
    }

    fn visit_bool<E>(self, flag: bool) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(flag.to_string()))
    }

    fn visit_i64<E>(self, i: i64) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Int(i))
    }

    fn visit_u64<E>(self, i: u64) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(i64::try_from(i).map(Value::Int).unwrap_or(Value::Float(i as f64)))
    }

    fn visit_f64<E>(self, x: f64) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(x))
    }

    fn visit_str<E>(self, text: &str) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(text.to_owned()))
    }

    fn visit_string<E>(self, text: String) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(text))
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Note(Note::new()))
    }

    fn visit_map<A>(self, access: A) -> std::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        NoteVisitor.visit_map(access).map(Value::Note)
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut sub = Note::new();
        let mut index = 0usize;
        while let Some(item) = access.next_element::<Value>()? {
            sub.insert(index.to_string(), item);
            index += 1;
        }
        Ok(Value::Note(sub))
    }
}
