mod common;
use common::*;

#[test]
fn test_dim_bounds_are_inclusive() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 dim a(3)
        20 a(0) = 10 : a(3) = 30
        30 print a(0); a(3)
        "#,
    );
    assert_eq!(out, " 10  30 \n");
}

#[test]
fn test_subscript_past_the_bound() {
    let mut s = Session::new();
    s.enter(r#"10 dim a(5)"#);
    s.enter(r#"20 a(5) = 1"#);
    s.enter(r#"30 print a(6)"#);
    assert_eq!(s.enter(r#"run"#), "SUBSCRIPT OUT OF RANGE IN 30\n");
}

#[test]
fn test_first_touch_dimensions_to_ten() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"b(4) = 7 : ? b(4); b(10)"#), " 7  0 \n");
    assert_eq!(s.enter(r#"? b(11)"#), "SUBSCRIPT OUT OF RANGE\n");
}

#[test]
fn test_option_base_one() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 option base 1
        20 dim a(3)
        30 a(1) = 1
        40 a(0) = 1
        "#,
    );
    assert_eq!(out, "SUBSCRIPT OUT OF RANGE IN 40\n");
}

#[test]
fn test_redimension_is_an_error() {
    let mut s = Session::new();
    s.enter(r#"10 dim a(3)"#);
    s.enter(r#"20 dim a(5)"#);
    assert_eq!(s.enter(r#"run"#), "REDIMENSIONED ARRAY IN 20\n");
}

#[test]
fn test_multi_dimensional() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 dim g(2, 3)
        20 g(2, 3) = 5
        30 print g(2, 3); g(0, 0)
        "#,
    );
    assert_eq!(out, " 5  0 \n");
}

#[test]
fn test_subscript_arity_must_match() {
    let mut s = Session::new();
    s.enter(r#"10 dim g(2, 3)"#);
    s.enter(r#"20 print g(1)"#);
    assert_eq!(s.enter(r#"run"#), "SUBSCRIPT OUT OF RANGE IN 20\n");
}

#[test]
fn test_string_arrays() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 dim w$(2)
        20 w$(0) = "A" : w$(2) = "B"
        30 print w$(0) + w$(1) + w$(2)
        "#,
    );
    assert_eq!(out, "AB\n");
}

#[test]
fn test_scalar_and_array_share_a_name() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"a = 1 : a(2) = 3 : ? a; a(2)"#), " 1  3 \n");
}

#[test]
fn test_negative_subscript() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"c(0) = 0 : ? c(-1)"#), "SUBSCRIPT OUT OF RANGE\n");
}

#[test]
fn test_integer_array_rounds_subscripts() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"d(1.6) = 9 : ? d(2)"#), " 9 \n");
}
