/*!
# `LOCAL <variable>[,<variable>...]`

## Purpose
Declare variables private to the enclosing `FUNCTION` or `SUB`.

## Remarks
A local starts at zero or an empty string on every call and vanishes on
return, so recursive calls each get their own. Locals take effect for
the whole body no matter where the `LOCAL` line sits, though the top is
the customary place. Using `LOCAL` outside a definition is a syntax
error.

## Example
```text
10 FUNCTION SUM(N)
20   LOCAL I
30   FOR I = 1 TO N : SUM = SUM + I : NEXT I
40 END FUNCTION
```

*/
