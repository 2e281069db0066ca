/*!
# Statements
*/

#[path = "statements/call.rs"]
#[allow(non_snake_case)]
pub mod CALL;

#[path = "statements/clear.rs"]
#[allow(non_snake_case)]
pub mod CLEAR;

#[path = "statements/data.rs"]
#[allow(non_snake_case)]
pub mod DATA;

#[path = "statements/dim.rs"]
#[allow(non_snake_case)]
pub mod DIM;

#[path = "statements/do.rs"]
#[allow(non_snake_case)]
pub mod DO;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/function.rs"]
#[allow(non_snake_case)]
pub mod FUNCTION;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/local.rs"]
#[allow(non_snake_case)]
pub mod LOCAL;

#[path = "statements/new.rs"]
#[allow(non_snake_case)]
pub mod NEW;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/on.rs"]
#[allow(non_snake_case)]
pub mod ON;

#[path = "statements/option.rs"]
#[allow(non_snake_case)]
pub mod OPTION;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/randomize.rs"]
#[allow(non_snake_case)]
pub mod RANDOMIZE;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/repeat.rs"]
#[allow(non_snake_case)]
pub mod REPEAT;

#[path = "statements/restore.rs"]
#[allow(non_snake_case)]
pub mod RESTORE;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/select.rs"]
#[allow(non_snake_case)]
pub mod SELECT;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;

#[path = "statements/sub.rs"]
#[allow(non_snake_case)]
pub mod SUB;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;
