/*!
# `SUB <name>[(<parameter>[,<parameter>...])] ... END SUB`

## Purpose
Define a subroutine, a function that returns no value.

## Remarks
Everything about `FUNCTION` applies except there is no return value:
assigning to the subroutine's name is a `?TYPE MISMATCH`, and using a
`SUB` inside an expression is a `?VOID VALUE` error. Invoke one with
`CALL` and leave early with `EXIT SUB`.

## Example
```text
10 SUB GREET(NAME$)
20   PRINT "HELLO, "; NAME$
30 END SUB
40 CALL GREET("WORLD")
RUN
HELLO, WORLD
```

*/
