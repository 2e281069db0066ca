//! # SBASIC
//!
//! Structured BASIC for the terminal.
//!
//! SBASIC keeps the feel of a classic line-numbered BASIC, with the
//! `READY.` prompt, direct mode, `GOTO`, and `GOSUB`, and adds the
//! structure that came later: block `IF`, `SELECT CASE`, `DO` and
//! `REPEAT` loops, and named functions and subroutines with local
//! variables.
//!
//! Begin by opening a terminal and running the executable. If you get
//! the following, you have achieved success.
//! ```text
//! SBASIC
//! READY.
//! █
//! ```
//!
//! Programs load from disk or straight off the web with
//! `LOAD "https://..."`, then run with `RUN`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
