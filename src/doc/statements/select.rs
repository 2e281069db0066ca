/*!
# `SELECT CASE <expression> ... END SELECT`

## Purpose
Choose one of several groups of statements based on the value of an
expression.

## Remarks
The subject expression is evaluated once. Each `CASE` names values to
match against it:

* `CASE 1, 2, 3` matches any listed value.
* `CASE 5 TO 9` matches an inclusive range.
* `CASE IS < 0` compares with a relational operator.
* `CASE ELSE` matches anything.

Forms may be mixed in one list, as in `CASE 1, 5 TO 9, IS > 100`. The
first matching `CASE` wins and execution continues after `END SELECT`.
When nothing matches, nothing runs. `SELECT CASE` must be the last
statement on its line. Comparing a string subject against a numeric
case is a `?TYPE MISMATCH`.

## Example
```text
10 INPUT "SCORE"; S
20 SELECT CASE S
30   CASE IS >= 90
40     PRINT "A"
50   CASE 80 TO 89
60     PRINT "B"
70   CASE ELSE
80     PRINT "SEE ME"
90 END SELECT
```

*/
