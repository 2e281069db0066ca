/*!
# `REM <anything>`

## Purpose
Insert a remark. The rest of the line is ignored.

## Remarks
An apostrophe (') starts a remark anywhere on a line.

## Example
```text
10 REM WRITTEN ON A RAINY TUESDAY
20 PRINT "HI" ' THE BUSINESS END
```

*/
