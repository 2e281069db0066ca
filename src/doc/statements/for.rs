/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.

## Purpose
Used with `NEXT` to repeat execution of statements while iterating over
a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 is assigned to variable I. Statements execute
until a `NEXT` statement. On subsequent iterations, the variable I gets
2 added to it. If the result exceeds 7 the loop ends. A negative `STEP`
counts down and the loop ends when the variable falls below the limit.

The limit and step are evaluated once, when the `FOR` executes. When the
variable starts past the limit the body is skipped entirely, so
`FOR I=1 TO 0` runs zero times. Older BASICs always ran the first
iteration; adjust old listings that depend on that.

## Example
```text
10 FOR I = 3 TO 1 STEP -1
20 PRINT I;
30 NEXT I
RUN
 3  2  1
```

*/
