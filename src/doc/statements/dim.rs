/*!
# `DIM <variable>(<subscripts>)[,<variable>(<subscripts>)...]`

## Purpose
Declare an array and set its upper bounds.

## Remarks
`DIM A(10)` makes eleven elements, numbered 0 to 10, unless
`OPTION BASE 1` moves the floor. Bounds may be any non-negative
expressions. Dimensioning an array twice is a `?REDIMENSIONED ARRAY`
error; use a fresh `RUN` or `CLEAR` to start over. An array used
without a `DIM` gets a bound of 10 in each dimension.

## Example
```text
10 DIM B(7), GRID(20, 20), NAME$(50)
```

*/
