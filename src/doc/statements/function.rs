/*!
# `FUNCTION <name>[(<parameter>[,<parameter>...])] ... END FUNCTION`

## Purpose
Define a function that computes a value for use in expressions.

## Remarks
The function's return type comes from its name: `F` returns a Real,
`F%` an Integer, `F$` a string. Assign to the function name inside the
body to set the return value; it starts at zero or an empty string.
Parameters are passed by value and are local to the body, as is anything
named in a `LOCAL` statement. Every other variable is shared with the
rest of the program.

`EXIT FUNCTION` returns immediately. Definitions may not nest, and a
running program skips over the body, so definitions can sit anywhere.
Recursion works; runaway recursion stops with `?OUT OF MEMORY`.

A function is called with parentheses: `F(1)`. A function of no
parameters is called as `F()`, never bare `F`, which names the scalar
variable instead.

## Example
```text
10 FUNCTION FIB(N)
20   IF N < 2 THEN FIB = N : EXIT FUNCTION
30   FIB = FIB(N - 1) + FIB(N - 2)
40 END FUNCTION
50 PRINT FIB(10)
RUN
 55
```

*/
