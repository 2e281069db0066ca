mod common;
use common::*;

#[test]
fn test_precedence() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 2 + 3 * 4"#), " 14 \n");
    assert_eq!(s.enter(r#"? (2 + 3) * 4"#), " 20 \n");
    assert_eq!(s.enter(r#"? 10 - 3 - 2"#), " 5 \n");
    assert_eq!(s.enter(r#"? 2 ^ 3 ^ 2"#), " 512 \n");
    assert_eq!(s.enter(r#"? -2 ^ 2"#), "-4 \n");
    assert_eq!(s.enter(r#"? 1 + 2 < 4"#), "-1 \n");
}

#[test]
fn test_division_forms() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 7 / 2"#), " 3.5 \n");
    assert_eq!(s.enter(r#"? 10 / 5"#), " 2 \n");
    assert_eq!(s.enter(r#"? 7 \ 2"#), " 3 \n");
    assert_eq!(s.enter(r#"? 7.9 \ 2"#), " 4 \n");
    assert_eq!(s.enter(r#"? 7 mod 3"#), " 1 \n");
    assert_eq!(s.enter(r#"? -7 mod 3"#), "-1 \n");
}

#[test]
fn test_division_by_zero() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 1 / 0"#), "DIVISION BY ZERO\n");
    assert_eq!(s.enter(r#"? 1 \ 0"#), "DIVISION BY ZERO\n");
    assert_eq!(s.enter(r#"? 1 mod 0"#), "DIVISION BY ZERO\n");
}

#[test]
fn test_overflow_promotes_to_real() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 9223372036854775807 + 0"#), " 9223372036854775807 \n");
    assert_eq!(s.enter(r#"? 4000000000 * 4000000000"#), " 1.6E19 \n");
}

#[test]
fn test_power() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 2 ^ 10"#), " 1024 \n");
    assert_eq!(s.enter(r#"? 2.0 ^ 2"#), " 4 \n");
    assert_eq!(s.enter(r#"? 2 ^ -1"#), " 0.5 \n");
    assert_eq!(s.enter(r#"? 0 ^ -1"#), "DIVISION BY ZERO\n");
}

#[test]
fn test_relations() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 1 < 2; 2 < 1"#), "-1  0 \n");
    assert_eq!(s.enter(r#"? 2 <> 3; 2 >= 2; 3 <= 2"#), "-1 -1  0 \n");
    assert_eq!(s.enter(r#"? 1 = 1.0"#), "-1 \n");
    assert_eq!(s.enter(r#"? "A" < "B"; "B" < "A""#), "-1  0 \n");
}

#[test]
fn test_logic_is_bitwise() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 12 and 10; 12 or 2; 12 xor 10"#), " 8  14  6 \n");
    assert_eq!(s.enter(r#"? not 0; not -1"#), "-1  0 \n");
    assert_eq!(s.enter(r#"? -1 imp 0; 0 imp -1; 0 eqv 0"#), " 0 -1 -1 \n");
}

#[test]
fn test_string_concat() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? "FOO" + "BAR""#), "FOOBAR\n");
    assert_eq!(s.enter(r#"a$ = "AB" : a$ = a$ + a$ : ? a$; len(a$)"#), "ABAB 4 \n");
}

#[test]
fn test_type_mismatch() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? "A" * 2"#), "TYPE MISMATCH\n");
    assert_eq!(s.enter(r#"? 1 + "A""#), "TYPE MISMATCH\n");
    assert_eq!(s.enter(r#"? 1 < "A""#), "TYPE MISMATCH\n");
}

#[test]
fn test_integer_assignment_rounds() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"a% = 2.5 : ? a%"#), " 3 \n");
    assert_eq!(s.enter(r#"a% = -2.5 : ? a%"#), "-3 \n");
    assert_eq!(s.enter(r#"a% = 2.4 : ? a%"#), " 2 \n");
    assert_eq!(s.enter(r#"a% = 1e19"#), "OVERFLOW\n");
}

#[test]
fn test_real_formatting() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 0.1 + 0.2"#), " 0.30000000000000004 \n");
    assert_eq!(s.enter(r#"? 1 / 3"#), " 0.3333333333333333 \n");
    assert_eq!(s.enter(r#"? 2.5 + 2.5"#), " 5 \n");
    assert_eq!(s.enter(r#"? 1e2"#), " 100 \n");
    assert_eq!(s.enter(r#"? -0.5"#), "-0.5 \n");
}

#[test]
fn test_undeclared_identifier() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? zzz"#), "UNDECLARED IDENTIFIER\n");
}

#[test]
fn test_rnd_sequences_repeat_by_seed() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? rnd(0)"#), " 0 \n");
    assert_eq!(s.enter(r#"randomize 7 : a = rnd() : ? rnd(0) = a"#), "-1 \n");
    assert_eq!(s.enter(r#"randomize 7 : ? rnd() = a"#), "-1 \n");
}
