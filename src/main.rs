//! # SBASIC
//!
//! Structured BASIC for the terminal.

mod lang;
mod mach;
mod term;

fn main() {
    term::main()
}
