/*!
# `RESTORE [<line>]`

## Purpose
Rewind the `DATA` pointer so constants can be read again.

## Remarks
A bare `RESTORE` rewinds to the first `DATA` in the program. With a
line number, reading resumes at the first `DATA` on or after that line.

## Example
```text
10 DATA 1, 2
20 READ A, B
30 RESTORE
40 READ C
50 PRINT A; B; C
RUN
 1  2  1
```

*/
