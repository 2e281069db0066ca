/*!
# `DO [WHILE|UNTIL <expression>] ... LOOP [WHILE|UNTIL <expression>]`

## Purpose
The general purpose loop. Test at the top, at the bottom, both, or
neither.

## Remarks
`DO WHILE` and `DO UNTIL` test before each iteration; `LOOP WHILE` and
`LOOP UNTIL` test after. A bare `DO ... LOOP` repeats forever; leave it
with `EXIT DO`, which jumps to the statement after the `LOOP`. `EXIT DO`
leaves only the innermost enclosing `DO`.

## Example
```text
10 DO
20   INPUT "PASSWORD"; P$
30   IF P$ = "XYZZY" THEN EXIT DO
40   PRINT "NO."
50 LOOP
60 PRINT "WELCOME."
```

*/
