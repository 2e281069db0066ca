/*!
# `GOSUB <line>`

## Purpose
Branch to a line, remembering where to come back to.

## Remarks
The subroutine ends with `RETURN`, which resumes at the statement after
the `GOSUB`. Subroutines may be nested. For new code, consider a `SUB`
with a name instead of a line number.

## Example
```text
10 GOSUB 100
20 GOSUB 100
30 END
100 PRINT "AND AGAIN"
110 RETURN
```

*/
