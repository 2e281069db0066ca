/*!
# `LOAD <filename>`

## Purpose
Replace the program in memory with one from a file or the web.

## Remarks
The filename is any string expression. Names beginning with `http://`
or `https://` are fetched from the web; anything else is read from
disk. Whatever was in memory is erased first, variables included. Every
line in the file must carry a line number or the load stops with
`DIRECT STATEMENT IN FILE`. A missing file or a failed fetch is a
`?FILE NOT FOUND`.

## Example
```text
LOAD "ADVENTURE.BAS"
LOAD "https://example.com/games/wumpus.bas"
RUN
```

*/
