mod common;
use common::*;

#[test]
fn test_for_counts() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"for i = 1 to 3 : ? i; : next"#), " 1  2  3 \n");
}

#[test]
fn test_for_skips_a_finished_range() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"for i = 3 to 0 : ? i : next"#), "");
    assert_eq!(s.enter(r#"? i"#), " 3 \n");
}

#[test]
fn test_for_step() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"for i = 1 to 10 step 3 : ? i; : next"#), " 1  4  7  10 \n");
    assert_eq!(s.enter(r#"for i = 3 to 1 step -1 : ? i; : next"#), " 3  2  1 \n");
}

#[test]
fn test_for_real_counter() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"for x = 0 to 1 step 0.5 : ? x; : next"#), " 0  0.5  1 \n");
}

#[test]
fn test_nested_for() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 for i = 1 to 2
        20 for j = 1 to 2
        30 print i; j
        40 next j
        50 next i
        "#,
    );
    assert_eq!(out, " 1  1 \n 1  2 \n 2  1 \n 2  2 \n");
}

#[test]
fn test_next_name_must_match() {
    let mut s = Session::new();
    s.enter(r#"10 for i = 1 to 2"#);
    s.enter(r#"20 next j"#);
    assert_eq!(s.enter(r#"run"#), "NEXT WITHOUT FOR IN 20; MISMATCHED NEXT\n");
}

#[test]
fn test_for_without_next() {
    let mut s = Session::new();
    s.enter(r#"10 for i = 1 to 2"#);
    assert_eq!(s.enter(r#"run"#), "FOR WITHOUT NEXT IN 10\n");
}

#[test]
fn test_while_wend() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 i = 0
        20 while i < 3
        30 i = i + 1
        40 print i;
        50 wend
        "#,
    );
    assert_eq!(out, " 1  2  3 \n");
}

#[test]
fn test_while_false_never_enters() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 while 0
        20 print "x"
        30 wend
        40 print "after"
        "#,
    );
    assert_eq!(out, "after\n");
}

#[test]
fn test_do_loop_until() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 i = 0
        20 do
        30 i = i + 1
        40 loop until i >= 3
        50 print i
        "#,
    );
    assert_eq!(out, " 3 \n");
}

#[test]
fn test_do_while_guard_checks_before_entry() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 do while 0
        20 print "x"
        30 loop
        40 print "skipped"
        "#,
    );
    assert_eq!(out, "skipped\n");
}

#[test]
fn test_loop_while_guard_checks_after_body() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 do
        20 print "once"
        30 loop while 0
        "#,
    );
    assert_eq!(out, "once\n");
}

#[test]
fn test_do_until_guard() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 i = 9
        20 do until i = 9
        30 print "x"
        40 loop
        50 print "out"
        "#,
    );
    assert_eq!(out, "out\n");
}

#[test]
fn test_exit_do_leaves_innermost() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 i = 0
        20 do
        30 i = i + 1
        40 if i = 2 then exit do
        50 loop
        60 print i
        "#,
    );
    assert_eq!(out, " 2 \n");
}

#[test]
fn test_repeat_until() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 i = 0
        20 repeat
        30 i = i + 1
        40 until i = 3
        50 print i
        "#,
    );
    assert_eq!(out, " 3 \n");
}

#[test]
fn test_stray_loop_words() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"wend"#), "WEND WITHOUT WHILE\n");
    assert_eq!(s.enter(r#"loop"#), "LOOP WITHOUT DO\n");
    assert_eq!(s.enter(r#"until 1"#), "UNTIL WITHOUT REPEAT\n");
    assert_eq!(s.enter(r#"exit do"#), "EXIT DO WITHOUT DO\n");
    assert_eq!(s.enter(r#"next"#), "NEXT WITHOUT FOR\n");
}

#[test]
fn test_unclosed_loops_report_their_opener() {
    let mut s = Session::new();
    s.enter(r#"10 while 1"#);
    assert_eq!(s.enter(r#"run"#), "WHILE WITHOUT WEND IN 10\n");
    s.enter(r#"new"#);
    s.enter(r#"10 do"#);
    assert_eq!(s.enter(r#"run"#), "DO WITHOUT LOOP IN 10\n");
    s.enter(r#"new"#);
    s.enter(r#"10 repeat"#);
    assert_eq!(s.enter(r#"run"#), "REPEAT WITHOUT UNTIL IN 10\n");
}
