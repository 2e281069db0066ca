/*!
# `PRINT [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline. To suppress the newline, use a
semicolon (;) at the end. Separating expressions with a semicolon prints
them with nothing between, although numbers always carry a leading space
or minus sign and a trailing space. Output is divided into zones of 14
characters. A comma advances to the start of the next zone.

`?` is shorthand for `PRINT`.

## Example
```text
PRINT "Item",100,-2.5:?"Next";1;2
Item           100          -2.5
Next 1  2
```

*/
