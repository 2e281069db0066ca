/*!
# `REPEAT ... UNTIL <expression>`

## Purpose
Repeat a group of statements until an expression becomes true.

## Remarks
The test is at the bottom, so the body always runs at least once.
`REPEAT ... UNTIL X` is the same as `DO ... LOOP UNTIL X`.

## Example
```text
10 REPEAT
20 INPUT "ANOTHER GAME (Y/N)"; A$
30 UNTIL A$ = "Y" OR A$ = "N"
```

*/
