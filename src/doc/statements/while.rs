/*!
# `WHILE <expression> ... WEND`

## Purpose
Repeat a group of statements as long as an expression is true.

## Remarks
The expression is tested before every iteration, so the body may run
zero times. For a loop that tests at the bottom, see `DO` or `REPEAT`.

## Example
```text
10 N = 1
20 WHILE N < 100
30 N = N * 2
40 WEND
50 PRINT N
RUN
 128
```

*/
