/*!
## Machine Module

This module is the interpreter proper: a three-pass machine that
walks the token stream of a BASIC program. Every program (and every
directly typed line) is walked by DECLARE, then COMPILE, then
INTERPRET, with a single statement dispatcher branching on the pass.

*/

pub const MAX_LINE_LEN: usize = 255;

mod builtin;
mod compile;
mod eval;
mod frame;
mod global;
mod program;
mod runtime;
mod stack;
mod statement;
mod value;
mod var;

pub use frame::{CallStack, ReturnFrame, Slot};
pub use global::{Global, Symbol};
pub use program::Program;
pub use runtime::{Console, Runtime, ScriptedConsole};
pub use stack::Stack;
pub use value::{Type, Value};
pub use var::Var;

/// Which walk over the token stream is in progress. DECLARE and
/// COMPILE run arithmetic in non-calc mode; only INTERPRET has
/// side effects.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Pass {
    Declare,
    Compile,
    Interpret,
}

/// A resumable position in the token stream: which stored line and
/// which token on it. Copied freely; jump targets, return addresses
/// and error-handler continuations are all plain `Pc` values.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pc {
    pub line: usize,
    pub token: usize,
}

impl Pc {
    pub fn new(line: usize, token: usize) -> Pc {
        Pc { line, token }
    }

    pub fn advance(&mut self) {
        self.token += 1;
    }
}
