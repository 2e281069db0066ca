mod common;
use common::*;

#[test]
fn test_function_returns_named_value() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function area(r)
        20 area = 3 * r * r
        30 end function
        40 print area(2)
        "#,
    );
    assert_eq!(out, " 12 \n");
}

#[test]
fn test_function_may_be_defined_after_its_call() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 print double(4)
        20 function double(x)
        30 double = x * 2
        40 end function
        "#,
    );
    assert_eq!(out, " 8 \n");
}

#[test]
fn test_recursion() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function fib(n%)
        20 if n% < 2 then fib = n% : exit function
        30 fib = fib(n% - 1) + fib(n% - 2)
        40 end function
        50 print fib(10)
        "#,
    );
    assert_eq!(out, " 55 \n");
}

#[test]
fn test_locals_live_on_the_stack() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function tally(n%)
        20 local i%
        30 tally = 0
        40 for i% = 1 to n%
        50 tally = tally + i%
        60 next i%
        70 end function
        80 print tally(4)
        "#,
    );
    assert_eq!(out, " 10 \n");
}

#[test]
fn test_params_are_by_value() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function f(x)
        20 x = 99
        30 f = x
        40 end function
        50 a = 1
        60 b = f(a)
        70 print a; b
        "#,
    );
    assert_eq!(out, " 1  99 \n");
}

#[test]
fn test_zero_argument_function() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function five()
        20 five = 5
        30 end function
        40 print five(); five
        "#,
    );
    assert_eq!(out, " 5  5 \n");
}

#[test]
fn test_exit_function() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function pick(n)
        20 pick = 1 : if n > 0 then exit function
        30 pick = 2
        40 end function
        50 print pick(5); pick(-5)
        "#,
    );
    assert_eq!(out, " 1  2 \n");
}

#[test]
fn test_sub_runs_by_call() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 sub greet(name$)
        20 print "HELLO " + name$
        30 end sub
        40 call greet("WORLD")
        "#,
    );
    assert_eq!(out, "HELLO WORLD\n");
}

#[test]
fn test_exit_sub() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 sub report(n)
        20 if n < 0 then exit sub
        30 print n
        40 end sub
        50 call report(-1)
        60 call report(7)
        "#,
    );
    assert_eq!(out, " 7 \n");
}

#[test]
fn test_sub_has_no_return_value() {
    let mut s = Session::new();
    s.enter(r#"10 sub s()"#);
    s.enter(r#"20 s = 1"#);
    s.enter(r#"30 end sub"#);
    assert_eq!(s.enter(r#"run"#), "TYPE MISMATCH IN 20; SUB HAS NO RETURN VALUE\n");
}

#[test]
fn test_sub_is_not_a_value() {
    let mut s = Session::new();
    s.enter(r#"10 sub s()"#);
    s.enter(r#"20 end sub"#);
    s.enter(r#"30 print s()"#);
    assert_eq!(s.enter(r#"run"#), "VOID VALUE IN 30\n");
}

#[test]
fn test_argument_counts_are_checked() {
    let mut s = Session::new();
    s.enter(r#"10 function f(a, b)"#);
    s.enter(r#"20 f = a + b"#);
    s.enter(r#"30 end function"#);
    s.enter(r#"40 print f(1)"#);
    assert_eq!(s.enter(r#"run"#), "ILLEGAL FUNCTION CALL IN 40; TOO FEW ARGUMENTS\n");
    s.enter(r#"40 print f(1, 2, 3)"#);
    assert_eq!(s.enter(r#"run"#), "ILLEGAL FUNCTION CALL IN 40; TOO MANY ARGUMENTS\n");
    s.enter(r#"40 print f(1, 2)"#);
    assert_eq!(s.enter(r#"run"#), " 3 \n");
}

#[test]
fn test_runaway_recursion_stops() {
    let mut s = Session::new();
    let out = s.run(
        r#"
        10 function down(n)
        20 down = down(n + 1)
        30 end function
        40 print down(1)
        "#,
    );
    assert_eq!(out, "OUT OF MEMORY IN 20; CALL TOO DEEP\n");
}

#[test]
fn test_duplicate_parameter() {
    let mut s = Session::new();
    s.enter(r#"10 function f(a, a)"#);
    assert_eq!(s.enter(r#"run"#), "REDECLARED IDENTIFIER IN 10; DUPLICATE PARAMETER\n");
}

#[test]
fn test_definitions_are_not_direct_statements() {
    let mut s = Session::new();
    assert_eq!(s.enter(r#"function f()"#), "ILLEGAL DIRECT\n");
    assert_eq!(s.enter(r#"exit function"#), "EXIT FUNCTION WITHOUT FUNCTION\n");
}

#[test]
fn test_unclosed_definitions() {
    let mut s = Session::new();
    s.enter(r#"10 function f()"#);
    assert_eq!(s.enter(r#"run"#), "FUNCTION WITHOUT END FUNCTION IN 10\n");
    s.enter(r#"new"#);
    s.enter(r#"10 sub s()"#);
    assert_eq!(s.enter(r#"run"#), "SUB WITHOUT END SUB IN 10\n");
}

#[test]
fn test_direct_call_surfaces_compile_error() {
    let mut s = Session::new();
    s.enter("10 function f(x)");
    s.enter("20 f = x + 1");
    s.enter("30 end function");
    s.enter("40 goto 999");
    assert_eq!(s.enter("? f(1)"), "UNDEFINED LINE IN 40\n");
}
