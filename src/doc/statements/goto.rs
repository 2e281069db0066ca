/*!
# `GOTO <line>`

## Purpose
Branch unconditionally to a line.

## Remarks
The line must exist when the program is compiled or you get an
`?UNDEFINED LINE` error. `GO TO` with a space works too.

## Example
```text
10 PRINT "FOREVER ";
20 GOTO 10
```

*/
