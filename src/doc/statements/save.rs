/*!
# `SAVE <filename>`

## Purpose
Write the program in memory to a file.

## Remarks
The listing is saved as plain text, one numbered line per row, so it
can be edited elsewhere and brought back with `LOAD`. Saving to a place
you can't write is a `?FILE NOT FOUND; CANNOT WRITE`.

## Example
```text
SAVE "MASTERPIECE.BAS"
```

*/
