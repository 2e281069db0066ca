/*!
# `LIST [<line>][-<line>]`

## Purpose
Display the program in memory.

## Remarks
A single line number lists one line. A range like `LIST 100-200` lists
every line in it; either end may be left off, so `LIST -100` is
everything up to 100 and `LIST 100-` everything from it.

## Example
```text
LIST 10-30
```

*/
