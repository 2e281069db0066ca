/*!
# Expressions and Types

SBASIC supports three types of data. This data is stored in a variable.
Variables are simply names that refer to a data value. Variable names
consist of ASCII alphabetic characters followed by optional ASCII numeric
characters. No special characters, such as underbars (_), are valid.

A value is assigned to a variable with the `LET` statement. `LET` has a
shortcut which is that using the word `LET` is optional. If you are familiar
with other languages, it may look like an assignment operation without the
`LET` but there is technically no assignment operator in BASIC.

```text
LET PI = 3.14159
PI2 = 6.28319
```

There are two numeric types and the string type. Decorating the variable
name with "%" or "$" explicitly requests a type.

```text
LET A% = 5   ' Integer, signed 64-bit
LET A$ = "X" ' String
LET A = 1.5  ' Real, 64-bit floating point
```

An undecorated name is always a Real. `A`, `A%`, and `A$` are three
different variables that can all exist at once.

Literals are unchanging values included in your source code. For example,
"1.5" is a literal. A number without a decimal point or exponent is an
Integer if it fits in 64 bits; everything else is a Real.

```text
PRINT 2 + 2       ' Integer arithmetic
PRINT 2.0 + 2     ' Real arithmetic
PRINT 1E3         ' Real 1000
```

Integer arithmetic is always checked. When a result won't fit in 64 bits
it quietly becomes a Real rather than wrapping around or stopping your
program with an overflow error. Division with `/` always produces a Real,
even for two Integer operands. Use `\` for integer division and `MOD` for
the remainder; both coerce their operands to Integer and report
`?DIVISION BY ZERO` or `?OVERFLOW` when deserved.

```text
PRINT 10 / 3  '  3.333333333333333
PRINT 10 \ 3  '  3
PRINT 10 MOD 3 ' 1
PRINT 1 / 0   ' ?DIVISION BY ZERO
```

Strings are unicode. String literals are surrounded by quotation marks.
There is no escape sequence so getting quotation marks into your string
requires the use of a function. Source lines are limited to 255
characters.

```text
A1$ = "Hello"
A2$ = CHR$(34) + "HELLO" + CHR$(34)
```

Expressions are anything that evaluates to a value. The number `1` is an
expression; literals are a specific kind of expression. The variable `PI`
is also an expression. An expression may also perform arithmetic, compare
values, and call functions.

```text
A + PI
2 / (A + B)
CHR$(34)
```

SBASIC supports the following operators, listed in order of precedence.

| Precedence | Operators | Meaning |
|-|-|-|
| 9 | ^ | Raise to a power |
| 8 | - + | Unary negation and unity |
| 7 | * / \ MOD | Multiplication, division, integer division, remainder |
| 6 | + - | Addition and subtraction |
| 5 | = <> < <= > >= | Relational |
| 4 | NOT | Bitwise not, unary |
| 3 | AND | Bitwise and |
| 2 | OR XOR | Bitwise or, exclusive or |
| 1 | IMP EQV | Bitwise imp and eqv |

`^` is right associative, so `2 ^ 3 ^ 2` is `2 ^ 9`. Unary minus binds
tighter than multiplication but looser than `^`, so `-2 ^ 2` is `-(2 ^ 2)`
which is `-4`. Raising an Integer to a non-negative Integer power stays an
Integer when the result fits; everything else about `^` produces a Real.

Relational operators always return an Integer with a value of -1 for true
or 0 for false. All relational operators evaluate at the same precedence.
These are typically used with `IF` statements, but there are other uses if
you take advantage of the -1 and 0 value guarantee.

```text
IF 10 < 100 THEN PRINT "INDEED"
PRINT (A > B) * -1
```

Logical operators perform bit-level arithmetic on Integers, all 64 bits
at once. Because true is -1, which is all bits set, the same operators
serve for boolean logic and bit twiddling.

```text
IF A > 0 AND A < 10 THEN PRINT "SINGLE DIGIT"
PRINT 12 XOR 10  '  6
```

Arrays are an extension of variables. You can make single dimension
arrays (vectors) or multi dimensional arrays (matrices). Arrays are
dimensioned with `DIM` before they are used. If you use an array before
it is explicitly dimensioned, it is automatically given a bound of 10 in
each dimension. Subscripts start at 0 unless `OPTION BASE 1` says
otherwise, and every access is bounds checked; a subscript outside the
dimensioned range stops the program with `?SUBSCRIPT OUT OF RANGE`.

```text
10 DIM BOARD(8,8)
20 LET BOARD(5,5) = 12
30 PRINT BOARD(9,9)
RUN
SUBSCRIPT OUT OF RANGE IN 30
```

An array and a scalar of the same name are distinct, so `A` and `A(1)`
can coexist. Arrays of strings work the way you'd hope: `DIM NAME$(50)`.

The next two chapters of this manual are a reference for statements and
functions. Here's a program you can decipher with the reference to get a
feel for SBASIC.

```text
10 INPUT "How many bottles"; N
20 IF N < 1 THEN PRINT "None, then." : END
30 FOR B = N TO 1 STEP -1
40   SELECT CASE B
50     CASE 1
60       PRINT "One last bottle."
70     CASE IS < 10
80       PRINT B; "bottles left."
90     CASE ELSE
100      PRINT "Plenty:"; B
110  END SELECT
120 NEXT B
```

*/
