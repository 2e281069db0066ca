/*!
# `CALL <name>[(<argument>[,<argument>...])]`

## Purpose
Invoke a `SUB`, or any function whose result you want to discard.

## Remarks
Arguments are passed by value. Calling with the wrong number of
arguments is an `?ILLEGAL FUNCTION CALL` naming too few or too many.
A `SUB` cannot be invoked by writing its name alone on a line; the
`CALL` is required.

## Example
```text
CALL SHUFFLE(DECK$)
CALL NOISY()
```

*/
