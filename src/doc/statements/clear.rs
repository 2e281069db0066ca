/*!
# `CLEAR`

## Purpose
Forget all variables and arrays.

## Remarks
The program itself is untouched, as are `FUNCTION` and `SUB`
definitions. The `DATA` pointer rewinds. Cleared names are gone
entirely; using one again is an `?UNDECLARED IDENTIFIER` until
something redeclares it. Other BASICs took options here to size
memory regions; there is nothing to size, so there are no options.

## Example
```text
A = 5
CLEAR
PRINT A
?UNDECLARED IDENTIFIER
```

*/
