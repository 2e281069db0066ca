/*!
# `OPTION BASE <0|1>`

## Purpose
Set the lowest subscript for arrays.

## Remarks
The default base is 0. Set it before any array exists; arrays already
dimensioned keep the base they were built with. Anything other than 0
or 1 is an `?ILLEGAL FUNCTION CALL`.

## Example
```text
10 OPTION BASE 1
20 DIM A(10) ' elements 1 through 10
```

*/
