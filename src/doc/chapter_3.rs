/*!
# Functions

Arguments are always passed in parentheses. A function that takes
none may be named bare: `PRINT TIMER` and `PRINT TIMER()` are the
same call. Numeric functions accept Integers and Reals
interchangeably; where it matters, both forms are described.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    An Integer stays an Integer, a Real stays a Real.
    ```text
    PRINT ABS(-0.123)
     0.123
    ```
    */
}

pub mod ASC {
    /*!
    ## `ASC(X$)` Returns the unicode value of the first character of X$.
    An empty string is an `?ILLEGAL FUNCTION CALL`.
    ```text
    PRINT ASC("A")
     65
    ```
    */
}

pub mod ATN {
    /*!
    ## `ATN(X)` Returns the arctangent of X.
    ```text
    PRINT ATN(3)
     1.2490457723982544
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns the character with unicode value X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    ```text
    PRINT COS(0)
     1
    ```
    */
}

pub mod DATE {
    /*!
    ## `DATE$()` Returns the date as "MM-DD-YYYY".
    ```text
    PRINT DATE$()
    08-22-2026
    ```
    */
}

pub mod ERL {
    /*!
    ## `ERL()` Returns the line number of the most recent error, or 0.
    Used inside an `ON ERROR GOTO` handler.
    */
}

pub mod ERR {
    /*!
    ## `ERR()` Returns the code of the most recent error, or 0.
    Used inside an `ON ERROR GOTO` handler. Appendix A lists the codes.
    ```text
    10 ON ERROR GOTO 100
    20 PRINT 1/0
    100 PRINT ERR()
    RUN
     11
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns e raised to the power of X.
    ```text
    PRINT EXP(1)
     2.718281828459045
    ```
    */
}

pub mod INSTR {
    /*!
    ## `INSTR([I,] X$, Y$)` Returns the position of Y$ within X$, or 0.
    Positions are counted from 1. The optional I starts the search
    partway in.
    ```text
    PRINT INSTR("HAYSTACK", "STACK")
     4
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest whole number not greater than X.
    `INT(-9.9)` is -10. An Integer passes through untouched.
    ```text
    PRINT INT(-9.9)
    -10
    ```
    */
}

pub mod LCASE {
    /*!
    ## `LCASE$(X$)` Returns X$ in lowercase.
    ```text
    PRINT LCASE$("Hello")
    hello
    ```
    */
}

pub mod LEFT {
    /*!
    ## `LEFT$(X$, N)` Returns the leftmost N characters of X$.
    ```text
    PRINT LEFT$("BASIC", 3)
    BAS
    ```
    */
}

pub mod LEN {
    /*!
    ## `LEN(X$)` Returns the number of characters in X$.
    ```text
    PRINT LEN("HELLO")
     5
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    X must be positive.
    ```text
    PRINT LOG(EXP(1))
     1
    ```
    */
}

pub mod MID {
    /*!
    ## `MID$(X$, I [, N])` Returns N characters of X$ starting at I.
    Positions count from 1. Without N, the rest of the string.
    ```text
    PRINT MID$("BASIC", 2, 3)
    ASI
    ```
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT$(X$, N)` Returns the rightmost N characters of X$.
    ```text
    PRINT RIGHT$("BASIC", 2)
    IC
    ```
    */
}

pub mod RND {
    /*!
    ## `RND([X])` Returns a random Real in 0 to 1, excluding 1.
    `RND()` and a positive X both advance the sequence. `RND(0)`
    repeats the last number. A negative X reseeds the sequence from X.
    ```text
    PRINT INT(RND() * 6) + 1 ' a die roll
    ```
    */
}

pub mod SGN {
    /*!
    ## `SGN(X)` Returns -1, 0, or 1 for negative, zero, or positive X.
    ```text
    PRINT SGN(-55)
    -1
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    ```text
    PRINT SIN(0)
     0
    ```
    */
}

pub mod SPACE {
    /*!
    ## `SPACE$(N)` Returns a string of N spaces.
    ```text
    PRINT "A"; SPACE$(3); "B"
    A   B
    ```
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    X must not be negative.
    ```text
    PRINT SQR(2)
     1.4142135623730951
    ```
    */
}

pub mod STR {
    /*!
    ## `STR$(X)` Returns X as a string, the way PRINT would show it.
    Positive numbers keep their leading space.
    ```text
    PRINT LEN(STR$(42))
     3
    ```
    */
}

pub mod STRING {
    /*!
    ## `STRING$(N, X)` Returns X repeated N times.
    X may be a character code or a string, whose first character is
    used.
    ```text
    PRINT STRING$(5, "AB")
    AAAAA
    ```
    */
}

pub mod TAB {
    /*!
    ## `TAB(N)` Returns spaces that carry printing to column N.
    Columns count from 1. If printing is already at or past N, returns
    an empty string. Only useful inside a `PRINT`.
    ```text
    PRINT "A"; TAB(5); "B"
    A   B
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X in radians.
    ```text
    PRINT TAN(0)
     0
    ```
    */
}

pub mod TIME {
    /*!
    ## `TIME$()` Returns the time as "HH:MM:SS".
    ```text
    PRINT TIME$()
    14:30:59
    ```
    */
}

pub mod TIMER {
    /*!
    ## `TIMER()` Returns seconds since midnight, with fractions.
    Handy for timing things.
    ```text
    T = TIMER()
    GOSUB 1000
    PRINT TIMER() - T; "SECONDS"
    ```
    */
}

pub mod UCASE {
    /*!
    ## `UCASE$(X$)` Returns X$ in uppercase.
    ```text
    PRINT UCASE$("hello")
    HELLO
    ```
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the number at the front of X$.
    Leading spaces are skipped and everything after the number is
    ignored. A string with no number is 0.
    ```text
    PRINT VAL("3.14 IS PI")
     3.14
    ```
    */
}
