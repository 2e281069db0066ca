/*!
# Language Module

Lexical analysis for the BASIC language: tokens with operator
metadata, the line lexer, and the crate-wide error type.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use token::{Ident, Literal, Operator, Token, Word};

/// Line numbers are optional; `None` marks a direct-mode line.
pub type LineNumber = Option<u16>;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        65529
    }
}
