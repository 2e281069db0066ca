/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign the value of an expression to a variable.

## Remarks
The word `LET` is optional. Assigning a Real to an Integer variable
rounds it; assigning a number to a string variable or the other way
around is a `?TYPE MISMATCH`.

## Example
```text
LET A = 42
B$ = "FORTY-TWO"
C%(2) = A
```

*/
