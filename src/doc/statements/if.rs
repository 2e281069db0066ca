/*!
# `IF <expression> THEN <statements> [ELSE <statements>]`
Also `IF <expression> GOTO <line>` and the block form below.

## Purpose
Do something contingent on a predicate.

## Remarks
In the single-line form, everything after `THEN` up to `ELSE` or the end
of the line runs when the predicate is true. `THEN <line>` and
`GOTO <line>` jump instead.

When nothing follows `THEN`, the `IF` opens a block that runs to a
matching `END IF`. A block may have any number of `ELSEIF` tests and one
final `ELSE`. `ELSEIF` and `ELSE` must be the first statement on their
line. An unclosed block stops the program from running and names the
line that opened it.

## Example
```text
10 INPUT A
20 IF A > 100 THEN
30   PRINT "BIG"
40 ELSEIF A > 10 THEN
50   PRINT "MEDIUM"
60 ELSE
70   PRINT "SMALL"
80 END IF
90 IF A = 42 THEN PRINT "THE ANSWER" ELSE PRINT "JUST A NUMBER"
```

*/
