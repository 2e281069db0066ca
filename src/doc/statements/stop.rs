/*!
# `STOP`

## Purpose
Halt the program and report where.

## Remarks
`STOP` prints `BREAK IN <line>`, the same as pressing CTRL-C, which
makes it handy for debugging. Variables keep their values afterward, so
you can inspect them in direct mode.

## Example
```text
10 X = 99
20 STOP
RUN
BREAK IN 20
PRINT X
 99
```

*/
