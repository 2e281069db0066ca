/*!
# `ON <expression> <GOTO|GOSUB> <line>[,<line>...]`
Also `ON ERROR GOTO <line>`.

## Purpose
Branch to one of several lines based on the value of an expression, or
install an error handler.

## Remarks
The value 1 goes to the first line, 2 the second, and so on. A value
that names no line falls through to the next statement.

`ON ERROR GOTO <line>` makes runtime errors jump to the handler line
instead of stopping the program. Inside the handler, `ERR` holds the
error code and `ERL` the line it happened on. The handler disarms when
it fires; re-arm it before leaving if you want it again. `ON ERROR
GOTO 0` disarms it explicitly.

## Example
```text
10 ON ERROR GOTO 100
20 D = 0
30 PRINT 10 / D
40 END
100 PRINT "ERROR"; ERR; "IN"; ERL
110 END
```

*/
