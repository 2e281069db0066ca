/*!
# `READ <variable>[,<variable>...]`

## Purpose
Load the next `DATA` constants into variables.

## Remarks
Each variable consumes one datum. Reading a string datum into a numeric
variable is a `?TYPE MISMATCH`; numbers read into string variables the
same way. Use `RESTORE` to read the same data again.

## Example
```text
10 FOR I = 1 TO 3 : READ X : PRINT X * X; : NEXT I
20 DATA 1, 2, 3
RUN
 1  4  9
```

*/
