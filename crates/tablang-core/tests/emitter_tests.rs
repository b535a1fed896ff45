use tablang_core::{emit, emit_json, parse_str, Document, Table, TablangError, Value};

fn s(v: &str) -> Value {
    Value::String(v.to_string())
}

fn doc(entries: Vec<(&str, Value)>) -> Document {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn table(entries: Vec<(&str, Value)>) -> Table {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn assert_emit_error(doc: &Document, needle: &str) {
    match emit(doc) {
        Err(TablangError::Emit(msg)) => {
            assert!(msg.contains(needle), "message {msg:?} should mention {needle:?}")
        }
        other => panic!("expected an emit error, got {other:?}"),
    }
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn emit_full_document() {
    let d = doc(vec![
        ("name", s("John")),
        ("age", Value::Integer(25)),
        ("fruits", Value::Array(vec!["apple".into(), "orange".into()])),
        (
            "server",
            Value::Table(table(vec![("host", s("localhost")), ("port", Value::Integer(80))])),
        ),
        (
            "table",
            Value::Table(table(vec![("key1", s("value1")), ("key2", s("value2"))])),
        ),
    ]);
    assert_eq!(
        emit(&d).unwrap(),
        "name: John\n\
         age: 25\n\
         fruits: {apple.orange}\n\
         server: table([host=localhost, port=80])\n\
         table([\n  key1=value1,\n  key2=value2,\n])\n"
    );
}

#[test]
fn emitted_text_parses_back() {
    let d = doc(vec![
        ("motto", s("hello, world: again")),
        ("empty", Value::Array(vec![])),
        (
            "table",
            Value::Table(table(vec![
                ("list", Value::Array(vec!["a".into(), "b c".into()])),
                ("nested", Value::Table(table(vec![("deep", Value::Integer(1))]))),
                ("blank", s("")),
            ])),
        ),
        ("after", Value::Integer(0)),
    ]);
    let text = emit(&d).unwrap();
    assert_eq!(parse_str(&text).unwrap(), d);
}

#[test]
fn emit_json_keeps_json_key_order() {
    let text = emit_json(r#"{"z":1,"a":"x","m":{"k":"v"}}"#).unwrap();
    assert_eq!(text, "z: 1\na: x\nm: table([k=v])\n");
}

// ============================================================================
// Refusals
// ============================================================================

#[test]
fn refuses_negative_integers() {
    assert_emit_error(&doc(vec![("n", Value::Integer(-1))]), "negative");
}

#[test]
fn refuses_digit_only_strings() {
    assert_emit_error(&doc(vec![("zip", s("01234"))]), "digit-only");
}

#[test]
fn refuses_literal_lookalike_strings() {
    assert_emit_error(&doc(vec![("a", s("{x}"))]), "array literal");
    assert_emit_error(&doc(vec![("t", s("table([a=1])"))]), "table literal");
}

#[test]
fn refuses_whitespace_and_line_breaks() {
    assert_emit_error(&doc(vec![("a", s(" padded"))]), "whitespace");
    assert_emit_error(&doc(vec![("a", s("two\nlines"))]), "line breaks");
    assert_emit_error(&doc(vec![(" key", s("v"))]), "whitespace");
}

#[test]
fn refuses_bad_constant_keys() {
    assert_emit_error(&doc(vec![("a:b", s("v"))]), "`:`");
    assert_emit_error(&doc(vec![("table([x", s("v"))]), "table([");
}

#[test]
fn refuses_commas_inside_tables() {
    let d = doc(vec![("t", Value::Table(table(vec![("k", s("a,b"))])))]);
    assert_emit_error(&d, "`t.k`");
    let d = doc(vec![(
        "table",
        Value::Table(table(vec![("k", Value::Array(vec!["a,b".into()]))])),
    )]);
    assert_emit_error(&d, "`table.k`");
}

#[test]
fn refuses_bad_pair_keys() {
    let d = doc(vec![("t", Value::Table(table(vec![("a=b", s("v"))])))]);
    assert_emit_error(&d, "`=`");
}

#[test]
fn refuses_bad_array_elements() {
    assert_emit_error(&doc(vec![("a", Value::Array(vec!["x.y".into()]))]), "`.`");
    assert_emit_error(&doc(vec![("a", Value::Array(vec!["".into()]))]), "non-empty");
}

#[test]
fn refuses_multi_pair_table_inside_a_table() {
    let inner = table(vec![("a", Value::Integer(1)), ("b", Value::Integer(2))]);
    let d = doc(vec![("t", Value::Table(table(vec![("inner", Value::Table(inner))])))]);
    assert_emit_error(&d, "at most one pair");
}

#[test]
fn emit_json_rejects_invalid_json() {
    assert!(matches!(emit_json("{not json"), Err(TablangError::Json(_))));
}

#[test]
fn emit_json_rejects_unsupported_values() {
    assert!(matches!(emit_json(r#"{"a":null}"#), Err(TablangError::Emit(_))));
    assert!(matches!(emit_json("[1,2]"), Err(TablangError::Emit(_))));
}

// ============================================================================
// Accepted edge cases
// ============================================================================

#[test]
fn unusual_but_faithful_values_roundtrip() {
    let text = emit_json(r#"{"table":"flat","":"x","k":"",";c":"v","a":["x}"]}"#).unwrap();
    assert_eq!(text, "table: flat\n: x\nk:\n;c: v\na: {x}}\n");

    let d = doc(vec![
        ("table", s("flat")),
        ("", s("x")),
        ("k", s("")),
        (";c", s("v")),
        ("a", Value::Array(vec!["x}".into()])),
    ]);
    assert_eq!(parse_str(&text).unwrap(), d);
}

#[test]
fn empty_keys_and_strings_inside_tables_roundtrip() {
    let d = doc(vec![(
        "table",
        Value::Table(table(vec![("", s("v")), ("k", s("")), (";x", s("y"))])),
    )]);
    let text = emit(&d).unwrap();
    assert_eq!(parse_str(&text).unwrap(), d);
}
