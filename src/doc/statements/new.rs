/*!
# `NEW`

## Purpose
Erase the program and all variables for a fresh start.

## Remarks
There is no undo. `SAVE` first if you care.

*/
