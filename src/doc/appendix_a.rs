/*!
# Error Messages

When something goes wrong, SBASIC prints a message with a leading `?`.
Errors in a stored program carry the line number, as in
`?DIVISION BY ZERO IN 30`. Errors sometimes carry an extra hint after
a semicolon, as in `?SYNTAX ERROR IN 10; EXPECTED THEN`.

A program can intercept runtime errors with `ON ERROR GOTO`; inside the
handler, `ERR()` returns the code below and `ERL()` the line.

| Code | Message | Meaning |
|-|-|-|
| 1 | NEXT WITHOUT FOR | `NEXT` with no open loop, or the wrong variable |
| 2 | SYNTAX ERROR | The statement could not be understood |
| 3 | RETURN WITHOUT GOSUB | `RETURN` with no pending `GOSUB` |
| 4 | OUT OF DATA | `READ` past the last `DATA` |
| 5 | ILLEGAL FUNCTION CALL | An argument a function cannot accept |
| 6 | OVERFLOW | A result too large for its type |
| 7 | OUT OF MEMORY | Calls nested too deeply |
| 8 | UNDEFINED LINE | A branch to a line that doesn't exist |
| 9 | SUBSCRIPT OUT OF RANGE | An array index outside the `DIM` bounds |
| 10 | REDIMENSIONED ARRAY | A second `DIM` of the same array |
| 11 | DIVISION BY ZERO | Including `\` and `MOD` with zero |
| 12 | ILLEGAL DIRECT | A statement only allowed inside a program |
| 13 | TYPE MISMATCH | Strings where numbers belong, or the reverse |
| 22 | MISSING EXPRESSION | An expression was expected and absent |
| 23 | LINE BUFFER OVERFLOW | An input line longer than 255 characters |
| 24 | UNDECLARED IDENTIFIER | A name used before anything defined it |
| 25 | REDECLARED IDENTIFIER | A name reused in a conflicting way |
| 26 | FOR WITHOUT NEXT | A `FOR` left open |
| 27 | VOID VALUE | A `SUB` used where a value was needed |
| 28 | BAD CONVERSION | `INPUT` text that would not parse |
| 29 | WHILE WITHOUT WEND | A `WHILE` left open |
| 30 | WEND WITHOUT WHILE | A stray `WEND` |
| 31 | IF WITHOUT END IF | A block `IF` left open |
| 32 | END IF WITHOUT IF | A stray `END IF` |
| 33 | ELSE WITHOUT IF | A stray `ELSE` or `ELSEIF` |
| 34 | DO WITHOUT LOOP | A `DO` left open |
| 35 | LOOP WITHOUT DO | A stray `LOOP` |
| 36 | REPEAT WITHOUT UNTIL | A `REPEAT` left open |
| 37 | UNTIL WITHOUT REPEAT | A stray `UNTIL` |
| 38 | SELECT WITHOUT END SELECT | A `SELECT CASE` left open |
| 39 | CASE WITHOUT SELECT | A stray `CASE` |
| 40 | END SELECT WITHOUT SELECT | A stray `END SELECT` |
| 41 | FUNCTION WITHOUT END FUNCTION | A definition left open |
| 42 | END FUNCTION WITHOUT FUNCTION | A stray `END FUNCTION` |
| 43 | SUB WITHOUT END SUB | A definition left open |
| 44 | END SUB WITHOUT SUB | A stray `END SUB` |
| 45 | EXIT DO WITHOUT DO | `EXIT DO` outside any `DO` |
| 46 | EXIT FUNCTION WITHOUT FUNCTION | `EXIT FUNCTION` outside a body |
| 47 | BREAK | CTRL-C, a cancelled `INPUT`, or `STOP` |
| 48 | END OF PROGRAM | Normal completion; never printed |
| 51 | INTERNAL ERROR | A bug in SBASIC, do report it |
| 53 | FILE NOT FOUND | `LOAD` or `SAVE` could not reach the file |
| 66 | DIRECT STATEMENT IN FILE | A loaded file has a line with no number |

The numbering follows Microsoft BASIC where a message exists there,
which is why it has gaps; `ERR()` values in old listings keep their
meaning.

*/
