/*!
# `RANDOMIZE [<expression>]`

## Purpose
Seed the random number generator.

## Remarks
With an expression, the generator is seeded from its value so the same
seed replays the same sequence. Without one, the generator is seeded
from system entropy, which is also how it starts up, so programs get
fresh numbers without ever asking.

## Example
```text
RANDOMIZE 37
PRINT RND()
```

*/
