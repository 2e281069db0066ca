/*!
# `INPUT [,]["<prompt>" <;|,>] <variable>[,<variable>...]`

## Purpose
Ask the operator for values and store them in variables.

## Remarks
A quoted prompt followed by a semicolon prints with "? " appended; a
comma prints it bare. Without a prompt you get the classic "? ".

The terminal capitalizes letters as you type a reply. A comma
immediately after INPUT turns that off, for when case matters.

The reply is split on commas, one field per variable. String variables
take their field as typed, with surrounding blanks trimmed; the last
string variable keeps any leftover commas. Numeric fields must parse or
the statement stops with `?BAD CONVERSION`, as does a reply with too few
fields. CTRL-C at the prompt cancels with a `?BREAK`.

## Example
```text
10 INPUT "NAME, AGE"; N$, A%
20 PRINT N$; A%
RUN
NAME, AGE? BO, 7
BO 7
```

*/
