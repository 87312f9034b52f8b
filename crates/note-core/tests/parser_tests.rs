use note_core::{Note, Value};

// ============================================================================
// Simple Entries
// ============================================================================

#[test]
fn parse_single_entry() {
    let note = Note::parse("hello world");
    assert_eq!(note.len(), 1);
    assert_eq!(note.get_str("hello"), Some("world"));
}

#[test]
fn parse_multiple_entries() {
    let note = Note::parse("maine me\nnew_york nyc");
    assert_eq!(note.len(), 2);
    assert_eq!(note.get_str("maine"), Some("me"));
    assert_eq!(note.get_str("new_york"), Some("nyc"));
}

#[test]
fn parse_trailing_newline_is_equivalent() {
    let with = Note::parse("maine me\nnew_york nyc\n");
    let without = Note::parse("maine me\nnew_york nyc");
    assert!(with.equals(&without));
}

#[test]
fn parse_from_impl() {
    let note: Note = "hello world".into();
    assert_eq!(note.get_str("hello"), Some("world"));
}

#[test]
fn parse_value_keeps_inner_spaces() {
    let note = Note::parse("border 17px solid white");
    assert_eq!(note.get_str("border"), Some("17px solid white"));
}

#[test]
fn parse_value_keeps_extra_leading_space() {
    // The name ends at the first space; everything after it is the value.
    let note = Note::parse("k  v");
    assert_eq!(note.get_str("k"), Some(" v"));
}

#[test]
fn parse_yields_string_leaves() {
    let note = Note::parse("z-index 0");
    assert!(matches!(note.get("z-index"), Some(Value::Str(_))));
    assert_eq!(note.get_str("z-index"), Some("0"));
}

#[test]
fn parse_unicode_names_and_values() {
    let note = Note::parse("héllo wörld");
    assert_eq!(note.get_str("héllo"), Some("wörld"));
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn parse_nested_entry() {
    let note = Note::parse("john\n age 5");
    assert_eq!(note.len(), 1);
    assert_eq!(note.get_note("john").map(Note::len), Some(1));
    assert_eq!(note.get_str("john age"), Some("5"));
}

#[test]
fn parse_deep_nesting() {
    let note = Note::parse("user\n name Ada\n stage\n  domain example.com");
    assert_eq!(note.get_str("user stage domain"), Some("example.com"));
    assert_eq!(note.get_str("user name"), Some("Ada"));
}

#[test]
fn parse_bare_name_is_empty_subtree() {
    let note = Note::parse("colors\n blue\n red");
    let colors = note.get_note("colors").unwrap();
    assert_eq!(colors.len(), 2);
    assert!(note.get_note("colors blue").unwrap().is_empty());
    assert!(note.get_note("colors red").unwrap().is_empty());
}

#[test]
fn parse_lone_name() {
    let note = Note::parse("x");
    assert_eq!(note.len(), 1);
    assert!(note.get_note("x").unwrap().is_empty());
}

// ============================================================================
// Multi-line Values
// ============================================================================

#[test]
fn parse_multiline_value() {
    let note = Note::parse("text \n this is a string\n and more");
    assert_eq!(note.get_str("text"), Some("this is a string\nand more"));
}

#[test]
fn parse_nested_multiline_value() {
    let note = Note::parse("a\n text \n  this is a string\n  and more");
    assert_eq!(note.get_str("a text"), Some("this is a string\nand more"));
}

// ============================================================================
// Preprocessing
// ============================================================================

#[test]
fn parse_strips_leading_whitespace() {
    let note = Note::parse("   h 1");
    assert_eq!(note.to_string(), "h 1\n");
    assert_eq!(note.serialized_len(), 4);

    let note = Note::parse("\n\n  \nh 1");
    assert_eq!(note.to_string(), "h 1\n");
}

#[test]
fn parse_strips_trailing_whitespace() {
    let note = Note::parse("h 1\n\n  ");
    assert_eq!(note.len(), 1);
    assert_eq!(note.get_str("h"), Some("1"));
}

#[test]
fn parse_normalizes_crlf() {
    let note = Note::parse("a 1\r\nb 2");
    assert_eq!(note.len(), 2);
    assert_eq!(note.get_str("b"), Some("2"));
}

#[test]
fn parse_normalizes_newline_cr() {
    let note = Note::parse("a 1\n\rb 2");
    assert_eq!(note.len(), 2);
    assert_eq!(note.get_str("a"), Some("1"));
}

#[test]
fn parse_collapses_first_blank_run_in_value() {
    // The run of blank lines disappears from the first multi-line value.
    let note = Note::parse("k \n a\n\n b");
    assert_eq!(note.get_str("k"), Some("a\nb"));
}

#[test]
fn parse_collapses_only_the_first_blank_run() {
    // Later runs are not collapsed; they split the value instead of
    // merging into it.
    let note = Note::parse("k \n a\n\n b\nm \n c\n\n d");
    assert_eq!(note.get_str("k"), Some("a\nb"));
    assert_eq!(note.get_str("m"), Some("c"));
}

#[test]
fn parse_drops_blank_lines_between_entries() {
    let note = Note::parse("a 1\n\nb 2\n\nc 3");
    let names: Vec<&str> = note.keys().collect();
    assert_eq!(names, ["a", "b", "c"]);
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn parse_never_errors_on_blank_input() {
    for text in ["", " ", "\n", "   ", " \n \n", "\n\n\n"] {
        let note = Note::parse(text);
        assert_eq!(note.len(), 0, "input {text:?} should parse to an empty note");
        assert_eq!(note.to_string(), "");
    }
}
