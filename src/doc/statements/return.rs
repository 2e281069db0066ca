/*!
# `RETURN`

## Purpose
Resume execution after the most recent `GOSUB`.

## Remarks
A `RETURN` without a pending `GOSUB` is a `?RETURN WITHOUT GOSUB` error.
Returning from inside a `FOR` loop abandons that loop.

*/
