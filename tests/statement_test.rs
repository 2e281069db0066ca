mod common;
use common::*;

#[test]
fn test_print_zones() {
    let mut s = Session::new();
    let output = s.enter(r#"? "Item", 100, -2.5"#);
    let expected = concat!("Item", "          ", " 100 ", "         ", "-2.5 \n");
    assert_eq!(output, expected);
}

#[test]
fn test_print_trailing_comma_joins_lines() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 print 1,
        20 print 2
        "#,
    );
    assert_eq!(output, concat!(" 1 ", "           ", " 2 \n"));
}

#[test]
fn test_print_semicolons_run_together() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"? 1; 2; "a"; -3"#), " 1  2 a-3 \n");
    assert_eq!(s.enter("?"), "\n");
}

#[test]
fn test_goto_loops() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 i = 0
        20 i = i + 1
        30 if i < 3 then 20
        40 print i
        "#,
    );
    assert_eq!(output, " 3 \n");
}

#[test]
fn test_goto_direct_and_undefined() {
    let mut s = Session::new();
    assert_eq!(s.enter("goto 999"), "UNDEFINED LINE\n");
    s.enter(r#"10 print "x""#);
    assert_eq!(s.enter("goto 10"), "x\n");
    assert_eq!(s.enter("goto 999"), "UNDEFINED LINE\n");
}

#[test]
fn test_stored_undefined_line_reported_at_run() {
    let mut s = Session::new();
    s.enter("10 goto 99");
    assert_eq!(s.enter("run"), "UNDEFINED LINE IN 10\n");
}

#[test]
fn test_gosub_return() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 gosub 40
        20 print "back"
        30 end
        40 print "sub"
        50 return
        "#,
    );
    assert_eq!(output, "sub\nback\n");
}

#[test]
fn test_nested_gosub() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 gosub 30
        20 print "one" : end
        30 gosub 50
        40 print "two" : return
        50 print "three" : return
        "#,
    );
    assert_eq!(output, "three\ntwo\none\n");
}

#[test]
fn test_return_without_gosub() {
    let mut s = Session::new();
    assert_eq!(s.enter("return"), "RETURN WITHOUT GOSUB\n");
}

#[test]
fn test_on_goto_selects() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 n = 2
        20 on n goto 100, 200, 300
        100 print "one" : end
        200 print "two" : end
        300 print "three"
        "#,
    );
    assert_eq!(output, "two\n");
}

#[test]
fn test_on_gosub_returns() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 on 1 gosub 100
        20 print "back"
        30 end
        100 print "sub" : return
        "#,
    );
    assert_eq!(output, "sub\nback\n");
}

#[test]
fn test_on_out_of_range_falls_through() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 on 0 goto 100
        20 on -1 goto 100
        30 on 9 goto 100
        40 print "fell"
        50 end
        100 print "never"
        "#,
    );
    assert_eq!(output, "fell\n");
}

#[test]
fn test_stop_names_its_line() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 print "a"
        20 stop
        30 print "b"
        "#,
    );
    assert_eq!(output, "a\nBREAK IN 20\n");
}

#[test]
fn test_end_stops_silently() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 print "a" : end : print "b"
        20 print "c"
        "#,
    );
    assert_eq!(output, "a\n");
}

#[test]
fn test_clear_forgets_variables() {
    let mut s = Session::new();
    s.enter("a = 5");
    assert_eq!(s.enter("? a"), " 5 \n");
    assert_eq!(s.enter("clear"), "");
    assert_eq!(s.enter("? a"), "UNDECLARED IDENTIFIER\n");
    s.enter("a = 2");
    assert_eq!(s.enter("? a"), " 2 \n");
}

#[test]
fn test_new_erases_program() {
    let mut s = Session::new();
    s.enter("10 print 1");
    assert_eq!(s.enter("list"), "10 print 1\n");
    assert_eq!(s.enter("new"), "");
    assert_eq!(s.enter("list"), "");
    assert_eq!(s.enter("run"), "");
}

#[test]
fn test_list_ranges() {
    let mut s = Session::new();
    s.enter("10 print 1");
    s.enter("20 print 2");
    s.enter("30 print 3");
    assert_eq!(s.enter("list"), "10 print 1\n20 print 2\n30 print 3\n");
    assert_eq!(s.enter("list 20"), "20 print 2\n");
    assert_eq!(s.enter("list 20-"), "20 print 2\n30 print 3\n");
    assert_eq!(s.enter("list -20"), "10 print 1\n20 print 2\n");
    assert_eq!(s.enter("list 15-25"), "20 print 2\n");
}

#[test]
fn test_list_preserves_source() {
    let mut s = Session::new();
    s.enter(r#"20 PRINT "B""#);
    s.enter(r#"10 print "a""#);
    assert_eq!(s.enter("list"), "10 print \"a\"\n20 PRINT \"B\"\n");
}

#[test]
fn test_line_replace_and_delete() {
    let mut s = Session::new();
    s.enter("10 print 1");
    s.enter("10 print 2");
    assert_eq!(s.enter("list"), "10 print 2\n");
    assert_eq!(s.enter("run"), " 2 \n");
    s.enter("10");
    assert_eq!(s.enter("list"), "");
}

#[test]
fn test_remarks() {
    let mut s = Session::new();
    let output = s.run(
        r#"
        10 rem setup notes
        20 print 1 ' inline note
        30 goto 50
        40 print 2
        50 rem landing
        60 print 3
        "#,
    );
    assert_eq!(output, " 1 \n 3 \n");
    assert_eq!(s.enter("list 10"), "10 rem setup notes\n");
}

#[test]
fn test_run_from_line() {
    let mut s = Session::new();
    s.enter(r#"10 print "a""#);
    s.enter(r#"20 print "b""#);
    assert_eq!(s.enter("run 20"), "b\n");
    assert_eq!(s.enter("run"), "a\nb\n");
}

#[test]
fn test_save_load_round_trip() {
    let path = std::env::temp_dir().join(format!("sbasic_roundtrip_{}.bas", std::process::id()));
    let path = path.to_string_lossy().into_owned();
    let mut s = Session::new();
    s.enter(r#"10 print "hi""#);
    s.enter("20 print 2");
    assert_eq!(s.enter(&format!(r#"save "{}""#, path)), "");
    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, "10 print \"hi\"\n20 print 2\n");
    s.enter("new");
    assert_eq!(s.enter(&format!(r#"load "{}""#, path)), "");
    assert_eq!(s.enter("list"), "10 print \"hi\"\n20 print 2\n");
    assert_eq!(s.enter("run"), "hi\n 2 \n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_rejects_direct_lines() {
    let path = std::env::temp_dir().join(format!("sbasic_directline_{}.bas", std::process::id()));
    std::fs::write(&path, "10 print 1\nprint 2\n").unwrap();
    let mut s = Session::new();
    let command = format!(r#"load "{}""#, path.to_string_lossy());
    assert_eq!(s.enter(&command), "DIRECT STATEMENT IN FILE\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_missing_file() {
    let mut s = Session::new();
    assert_eq!(
        s.enter(r#"load "/no/such/dir/missing.bas""#),
        "FILE NOT FOUND\n"
    );
}

#[test]
fn test_save_unwritable_path() {
    let mut s = Session::new();
    s.enter("10 print 1");
    assert_eq!(
        s.enter(r#"save "/no/such/dir/out.bas""#),
        "FILE NOT FOUND; CANNOT WRITE\n"
    );
}

#[test]
fn test_line_buffer_overflow() {
    let mut s = Session::new();
    let long = format!(r#"? "{}""#, "A".repeat(300));
    assert_eq!(s.enter(&long), "LINE BUFFER OVERFLOW\n");
}

#[test]
fn test_colon_chains_and_let() {
    let mut s = Session::new();
    assert_eq!(s.enter("x = 1 : x = x + 2 : ? x"), " 3 \n");
    assert_eq!(s.enter("let y = 4 : ? y"), " 4 \n");
    assert_eq!(s.enter("x = 1 : y = 2 : z = x + y * 3 : ? z"), " 7 \n");
}

#[test]
fn test_statement_budget_breaks_runaway_loop() {
    use sbasic::mach::{Runtime, ScriptedConsole};
    use std::cell::RefCell;
    use std::rc::Rc;
    let console = Rc::new(RefCell::new(ScriptedConsole::new()));
    let mut runtime = Runtime::with_console(Box::new(Rc::clone(&console)));
    runtime.set_statement_budget(100);
    assert!(runtime.enter("10 goto 10").is_ok());
    let error = runtime.enter("run").expect_err("loop should trip the budget");
    assert_eq!(format!("{}", error), "BREAK IN 10");
}
