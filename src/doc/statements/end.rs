/*!
# `END`

## Purpose
Finish the program.

## Remarks
`END` is optional; running off the last line finishes too. It is most
useful for stopping the main program before subroutines. `END` also
opens the closers `END IF`, `END SELECT`, `END FUNCTION`, and `END SUB`,
which are covered with their blocks.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "DONE":RETURN
```

*/
