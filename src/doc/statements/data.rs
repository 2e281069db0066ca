/*!
# `DATA <literal>[,<literal>...]`

## Purpose
Define a list of constants to be read in sequentially.

## Remarks
The `READ` statement loads the next datum into a variable. Reading past
the end is an `?OUT OF DATA` error. Literals may be numbers, optionally
signed, or quoted strings. `DATA` lines are collected in line order no
matter where they sit, and are never executed, so they may appear after
an `END`. `DATA` is only allowed in a program, not in direct mode.

## Example
```text
10 READ A$, N
20 PRINT A$; N
30 DATA "NUGGET", 3
RUN
NUGGET 3
```

*/
