mod common;
use common::*;

#[test]
fn test_input_stores_fields() {
    let mut s = Session::new();
    s.supply("3, HI");
    s.enter(r#"10 input a, b$"#);
    s.enter(r#"20 print a; b$"#);
    assert_eq!(s.enter(r#"run"#), "?  3 HI\n");
}

#[test]
fn test_input_prompt_forms() {
    let mut s = Session::new();
    s.supply("5");
    assert_eq!(s.enter(r#"input "AGE"; n : ? n"#), "AGE?  5 \n");
    s.supply("6");
    assert_eq!(s.enter(r#"input "AGE", n : ? n"#), "AGE 6 \n");
}

#[test]
fn test_reply_must_fill_every_field() {
    let mut s = Session::new();
    s.supply("1");
    s.enter(r#"10 input a, b"#);
    assert_eq!(s.enter(r#"run"#), "? BAD CONVERSION IN 10; NOT ENOUGH INPUT\n");
}

#[test]
fn test_numeric_fields_reject_words() {
    let mut s = Session::new();
    s.supply("abc");
    s.enter(r#"10 input n%"#);
    assert_eq!(s.enter(r#"run"#), "? BAD CONVERSION IN 10\n");
    s.supply("4.5");
    assert_eq!(s.enter(r#"input m%"#), "? BAD CONVERSION\n");
}

#[test]
fn test_input_without_a_reply_breaks() {
    let mut s = Session::new();
    s.enter(r#"10 input a$"#);
    assert_eq!(s.enter(r#"run"#), "? BREAK IN 10\n");
}

#[test]
fn test_lone_string_field_keeps_commas() {
    let mut s = Session::new();
    s.supply("a, b, c");
    s.enter(r#"10 input s$"#);
    s.enter(r#"20 print s$"#);
    assert_eq!(s.enter(r#"run"#), "? a, b, c\n");
}

#[test]
fn test_fields_split_on_commas() {
    let mut s = Session::new();
    s.supply("x, y");
    s.enter(r#"10 input a$, b$"#);
    s.enter(r#"20 print a$ + "/" + b$"#);
    assert_eq!(s.enter(r#"run"#), "? x/y\n");
}

#[test]
fn test_direct_input() {
    let mut s = Session::new();
    s.supply("42");
    assert_eq!(s.enter(r#"input n% : ? n%"#), "?  42 \n");
}

#[test]
fn test_leading_comma_turns_off_caps() {
    let mut s = Session::new();
    s.supply("mixed Case");
    s.enter(r#"10 input ,s$"#);
    s.enter(r#"20 print s$"#);
    assert_eq!(s.enter(r#"run"#), "? mixed Case\n");
}
