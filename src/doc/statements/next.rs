/*!
# `NEXT [<variable>]`

## Purpose
Close a `FOR` loop, advancing the loop variable.

## Remarks
The variable is optional; a bare `NEXT` closes the innermost `FOR`. When
a variable is named it must match the loop being closed or you get a
`?NEXT WITHOUT FOR`. Unlike some BASICs, `NEXT I,J` is not accepted;
write one `NEXT` per `FOR`.

## Example
```text
10 FOR I = 1 TO 2
20 FOR J = 1 TO 2
30 PRINT I;J
40 NEXT J
50 NEXT I
```

*/
