/*!
# `RUN [<line>]`

## Purpose
Execute the program in memory.

## Remarks
Variables are cleared and the `DATA` pointer rewinds before execution
begins at the lowest line number, or at the given line. A program with
an unclosed block or a branch to a missing line reports the problem
instead of running. `RUN` works inside a program too, restarting it.

## Example
```text
10 PRINT "ONCE MORE"
RUN 10
ONCE MORE
```

*/
