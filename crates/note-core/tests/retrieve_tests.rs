use note_core::{Note, Value};

/// The user record from the notation's reference examples: profile
/// fields plus a domains branch several levels deep.
fn user_fixture() -> Note {
    Note::parse(
        "user\n name Aristotle\n admin false\n stage\n  name home\n  domain test.test.com\n pro false\n domains\n  test.test.com\n   images\n   blocks\n   users\n   stage home\n   pages\n    home\n     settings\n      data\n       title Hello, World\n     block1\n      content Hello world\n",
    )
}

// ============================================================================
// Shape Projection
// ============================================================================

#[test]
fn retrieve_projects_by_query_shape() {
    let target = user_fixture();
    let query =
        Note::parse("user\n name\n domains\n  test.test.com\n   pages\n    home\n     block1");
    let result = target.retrieve(&query);

    assert_eq!(result.len(), 1, "one root entry");
    assert_eq!(result.get_str("user name"), Some("Aristotle"));
    assert!(
        result.get("user pro").is_none(),
        "entries outside the query shape are not retrieved"
    );
    assert_eq!(
        result.get_str("user domains test.test.com pages home block1 content"),
        Some("Hello world")
    );
}

#[test]
fn query_leaf_pulls_the_whole_value() {
    let target = Note::parse("name Sam\nrole admin\nhome\n city Kent\n zip 12345");
    let query = Note::parse("name 1\nhome 1");
    let result = target.retrieve(&query);
    assert_eq!(result.to_string(), "name Sam\nhome\n city Kent\n zip 12345\n");
}

#[test]
fn query_empty_subtree_acts_like_a_leaf() {
    // A bare name in query text parses to an empty subtree; it still
    // means "give me this whole field".
    let target = Note::parse("home\n city Kent");
    let result = target.retrieve(&Note::parse("home"));
    assert_eq!(result.get_str("home city"), Some("Kent"));
}

#[test]
fn nonempty_query_subtree_requires_a_subtree_in_the_target() {
    let target = Note::parse("home small");
    let query = Note::parse("home\n city 1");
    assert!(target.retrieve(&query).is_empty());
}

#[test]
fn missing_names_are_skipped() {
    let target = Note::parse("a 1");
    let query = Note::parse("a 1\nb 1\nc\n d 1");
    let result = target.retrieve(&query);
    assert_eq!(result.len(), 1);
    assert_eq!(result.get_str("a"), Some("1"));
}

#[test]
fn retrieve_returns_an_independent_copy() {
    let target = Note::parse("home\n city Kent");
    let mut result = target.retrieve(&Note::parse("home"));
    result.set("home city", "Leeds");
    assert_eq!(target.get_str("home city"), Some("Kent"));
}

// ============================================================================
// Falsy Targets
// ============================================================================

#[test]
fn falsy_target_values_count_as_absent() {
    let mut target = Note::new();
    target.insert("empty", "");
    target.insert("zero", 0);
    target.insert("nan", f64::NAN);
    target.insert("zero_text", "0");
    target.insert("ok", "yes");

    let mut query = Note::new();
    for name in ["empty", "zero", "nan", "zero_text", "ok"] {
        query.insert(name, "1");
    }

    let result = target.retrieve(&query);
    assert!(result.get("empty").is_none());
    assert!(result.get("zero").is_none());
    assert!(result.get("nan").is_none());
    // The string "0" is a value like any other.
    assert_eq!(result.get_str("zero_text"), Some("0"));
    assert_eq!(result.get_str("ok"), Some("yes"));
}

#[test]
fn empty_target_subtree_is_not_falsy() {
    let mut target = Note::new();
    target.insert("pages", Note::new());
    let result = target.retrieve(&Note::parse("pages 1"));
    assert!(matches!(result.get("pages"), Some(Value::Note(sub)) if sub.is_empty()));
}

#[test]
fn falsy_query_values_still_select() {
    // The query's own leaf values are placeholders; only the target side
    // is tested for presence.
    let target = Note::parse("ok yes");
    let mut query = Note::new();
    query.insert("ok", 0);
    assert_eq!(target.retrieve(&query).get_str("ok"), Some("yes"));
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn hidden_target_entries_are_not_retrieved() {
    let mut target = Note::parse("id secret\nname Sam");
    target.exclude("id");
    let result = target.retrieve(&Note::parse("id 1\nname 1"));
    assert!(result.get("id").is_none());
    assert_eq!(result.get_str("name"), Some("Sam"));
}

#[test]
fn hidden_query_entries_do_not_select() {
    let target = Note::parse("a 1\nb 2");
    let mut query = Note::parse("a 1\nb 1");
    query.exclude("b");
    let result = target.retrieve(&query);
    assert_eq!(result.len(), 1);
    assert!(result.get("b").is_none());
}
