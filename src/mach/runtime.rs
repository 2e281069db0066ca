use super::compile::Block;
use super::frame::CallStack;
use super::global::Global;
use super::program::Program;
use super::{Pass, Pc, Value, MAX_LINE_LEN};
use crate::error;
use crate::lang::{Error, Line, Operator, Token};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Where PRINT text lands and INPUT replies come from. The REPL
/// wires this to the terminal; tests use `ScriptedConsole`. An
/// `input` of None means the user gave up rather than answered.
/// `caps` asks the console to capitalize typed letters, which only
/// a real terminal can honor.
pub trait Console {
    fn print(&mut self, text: &str);
    fn input(&mut self, prompt: &str, caps: bool) -> Option<String>;
}

/// ## Runtime
///
/// One `Runtime` owns the stored program, the symbol table, and the
/// activation stack, and runs every pass over the shared token
/// stream. Entering a numbered line only marks the program dirty;
/// the passes rerun lazily when the next direct line arrives.

pub struct Runtime {
    pub(super) program: Program,
    pub(super) global: Global,
    pub(super) stack: CallStack,
    pub(super) pass: Pass,
    pub(super) scopes: Vec<Rc<str>>,
    pub(super) blocks: Vec<Block>,
    pub(super) selects: Vec<Option<Value>>,
    pub(super) pending_elseif: Option<Pc>,
    pub(super) on_error: Option<Pc>,
    pub(super) last_error: Option<Error>,
    pub(super) run_request: Option<Pc>,
    pub(super) data_index: usize,
    pub(super) data_pos: Option<Pc>,
    pub(super) depth: usize,
    pub(super) print_col: usize,
    console: Box<dyn Console>,
    rng: StdRng,
    last_rnd: f64,
    interrupt: Arc<AtomicBool>,
    statement_budget: Option<u64>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::with_console(Box::new(ScriptedConsole::default()))
    }

    pub fn with_console(console: Box<dyn Console>) -> Runtime {
        Runtime {
            program: Program::new(),
            global: Global::new(),
            stack: CallStack::new(),
            pass: Pass::Interpret,
            scopes: Vec::new(),
            blocks: Vec::new(),
            selects: Vec::new(),
            pending_elseif: None,
            on_error: None,
            last_error: None,
            run_request: None,
            data_index: 0,
            data_pos: None,
            depth: 0,
            print_col: 0,
            console,
            rng: StdRng::from_entropy(),
            last_rnd: 0.0,
            interrupt: Arc::new(AtomicBool::new(false)),
            statement_budget: None,
        }
    }

    /// Shared flag a ctrl-c handler can set; the next statement
    /// boundary turns it into a BREAK.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Cap the number of statements this runtime will ever execute.
    /// Statement `limit + 1` raises BREAK exactly as ctrl-c does.
    pub fn set_statement_budget(&mut self, limit: u64) {
        self.statement_budget = Some(limit);
    }

    /// Numbered lines of the stored program, rendered back to source.
    pub fn listing(&self) -> Vec<(u16, String)> {
        self.program
            .lines()
            .iter()
            .filter_map(|line| line.number().map(|number| (number, line.to_string())))
            .collect()
    }

    pub(super) fn interrupt_check(&mut self) -> Result<()> {
        if self.interrupt.swap(false, Ordering::Relaxed) {
            return Err(error!(Break));
        }
        if let Some(remaining) = self.statement_budget.as_mut() {
            if *remaining == 0 {
                return Err(error!(Break));
            }
            *remaining -= 1;
        }
        Ok(())
    }

    pub(super) fn token(&self, pc: Pc) -> Option<&Token> {
        self.program.token(pc)
    }

    /// True when expressions should produce values rather than
    /// placeholder zeros.
    pub(super) fn calc(&self) -> bool {
        self.pass == Pass::Interpret
    }

    /// Accept one line of input. A numbered line is stored for
    /// later; a direct line is compiled and run immediately, after
    /// recompiling the stored program if it changed.
    pub fn enter(&mut self, source: &str) -> Result<()> {
        if source.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::from_str(source);
        if !self.program.enter(line) {
            return Ok(());
        }
        if self.program.is_dirty() {
            self.compile_program(false);
        }
        self.direct()
    }

    fn direct(&mut self) -> Result<()> {
        let declared = self.direct_passes();
        self.pass = Pass::Interpret;
        if let Err(error) = declared {
            self.blocks.clear();
            self.scopes.clear();
            return Err(error);
        }
        let result = match self.execute(self.program.direct_pc()) {
            Err(error) => {
                if error.is_halted() {
                    Ok(())
                } else {
                    Err(error)
                }
            }
            Ok(()) => Ok(()),
        };
        // A trailing ; or , leaves the cursor mid-line; finish the
        // line so whatever comes next starts at column zero.
        if self.print_col > 0 {
            self.print_text("\n");
        }
        result
    }

    /// The direct line gets the same two declaration passes as a
    /// stored program, scoped to its own tokens.
    fn direct_passes(&mut self) -> Result<()> {
        for pass in &[Pass::Declare, Pass::Compile] {
            self.pass = *pass;
            let mut pc = self.program.direct_pc();
            while !self.program.end_of_line(pc) {
                self.statement(&mut pc)?;
            }
            if let Some(error) = self.unclosed_block() {
                return Err(error);
            }
        }
        Ok(())
    }

    /// Interpret from `start` until something stops the program.
    /// Ending is reported as an error sentinel, so the only normal
    /// exits here are Err; RUN restarts and armed error handlers
    /// are absorbed. An error nothing catches unwinds whatever the
    /// run left on the stack.
    fn execute(&mut self, start: Pc) -> Result<()> {
        let mut pc = start;
        loop {
            if let Err(error) = self.step_line(&mut pc) {
                if error.is_halted() {
                    if let Some(target) = self.run_request.take() {
                        self.reset_run_state();
                        pc = target;
                        continue;
                    }
                    return Err(error);
                }
                if error.is_break() {
                    return Err(error);
                }
                if let Some(handler) = self.on_error.take() {
                    self.last_error = Some(error);
                    pc = handler;
                    continue;
                }
                return Err(self.stack.frame_to_error(error));
            }
        }
    }

    fn step_line(&mut self, pc: &mut Pc) -> Result<()> {
        if !self.program.is_direct_pc(*pc) && !self.program.line_exists(pc.line) {
            return Err(error!(Halted));
        }
        self.run_statements(pc)?;
        if self.program.end_of_line(*pc) {
            if self.program.is_direct_pc(*pc) {
                return Err(error!(Halted));
            }
            *pc = Pc::new(pc.line + 1, 0);
        }
        Ok(())
    }

    /// Run statements until the cursor leaves the current line,
    /// naming the line in whatever goes wrong on it.
    fn run_statements(&mut self, pc: &mut Pc) -> Result<()> {
        let entry = pc.line;
        while pc.line == entry && !self.program.end_of_line(*pc) {
            self.interrupt_check()
                .map_err(|error| self.locate_error(error, entry))?;
            if let Err(error) = self.statement(pc) {
                return Err(self.locate_error(error, entry));
            }
        }
        Ok(())
    }

    fn locate_error(&self, error: Error, line: usize) -> Error {
        if error.is_direct() {
            error.in_line_number(self.program.line_number(Pc::new(line, 0)))
        } else {
            error
        }
    }

    /// A restart wipes everything the old run accumulated but keeps
    /// the program and its compiled tables.
    fn reset_run_state(&mut self) {
        self.stack.clear();
        self.selects.clear();
        self.blocks.clear();
        self.scopes.clear();
        self.pending_elseif = None;
        self.depth = 0;
        self.data_index = 0;
        self.data_pos = None;
        self.on_error = None;
        self.last_error = None;
        self.global.clear_vars();
    }

    pub(super) fn print_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.print_col = 0;
            } else {
                self.print_col += 1;
            }
        }
        self.console.print(text);
    }

    pub(super) fn console_input(&mut self, prompt: &str, caps: bool) -> Result<String> {
        match self.console.input(prompt, caps) {
            Some(reply) => {
                self.print_col = 0;
                Ok(reply)
            }
            None => Err(error!(Break)),
        }
    }

    /// Walk to the next DATA item. The cursor rests after the item
    /// just read, or on the next DATA statement once one runs out.
    pub(super) fn next_datum(&mut self) -> Result<Value> {
        let mut pc = match self.data_pos.take() {
            Some(pc) => pc,
            None => {
                let site = match self.program.data_at(self.data_index) {
                    Some(site) => site,
                    None => return Err(error!(OutOfData)),
                };
                self.data_index += 1;
                Pc::new(site.line, site.token + 1)
            }
        };
        let negate = match self.program.token(pc) {
            Some(Token::Operator(Operator::Minus)) => {
                pc.advance();
                true
            }
            Some(Token::Operator(Operator::Plus)) => {
                pc.advance();
                false
            }
            _ => false,
        };
        let value = match self.program.token(pc) {
            Some(Token::Literal(literal)) => Value::from(literal),
            _ => return Err(error!(InternalError; "BAD DATA")),
        };
        pc.advance();
        let value = if negate {
            value.unary(Operator::Minus, true)?
        } else {
            value
        };
        if let Some(Token::Comma) = self.program.token(pc) {
            pc.advance();
            self.data_pos = Some(pc);
        }
        Ok(value)
    }

    /// MS flavor: a zero argument repeats the last number, a
    /// negative one reseeds from the argument first.
    pub(super) fn random(&mut self, arg: Option<f64>) -> f64 {
        match arg {
            Some(n) if n == 0.0 => self.last_rnd,
            Some(n) if n < 0.0 => {
                self.rng = StdRng::seed_from_u64(n.to_bits());
                self.advance_rnd()
            }
            _ => self.advance_rnd(),
        }
    }

    fn advance_rnd(&mut self) -> f64 {
        self.last_rnd = self.rng.gen::<f64>();
        self.last_rnd
    }

    pub(super) fn reseed(&mut self, seed: Option<i64>) {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
    }

    pub(super) fn fetch_source(&mut self, name: &str) -> Result<String> {
        if name.starts_with("http://") || name.starts_with("https://") {
            let response = match reqwest::blocking::get(name) {
                Ok(response) => response,
                Err(_) => return Err(error!(FileNotFound)),
            };
            if !response.status().is_success() {
                return Err(error!(FileNotFound));
            }
            match response.text() {
                Ok(text) => Ok(text),
                Err(_) => Err(error!(FileNotFound)),
            }
        } else {
            match std::fs::read_to_string(name) {
                Ok(text) => Ok(text),
                Err(_) => Err(error!(FileNotFound)),
            }
        }
    }

    pub(super) fn save_source(&mut self, name: &str, text: &str) -> Result<()> {
        match std::fs::write(name, text) {
            Ok(()) => Ok(()),
            Err(_) => Err(error!(FileNotFound; "CANNOT WRITE")),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

/// Canned console: INPUT answers come from a queue, PRINT output
/// accumulates for inspection.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new() -> ScriptedConsole {
        ScriptedConsole::default()
    }

    pub fn supply(&mut self, reply: &str) {
        self.replies.push_back(reply.to_string());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn drain(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn input(&mut self, prompt: &str, _caps: bool) -> Option<String> {
        self.output.push_str(prompt);
        self.replies.pop_front()
    }
}

impl Console for Rc<RefCell<ScriptedConsole>> {
    fn print(&mut self, text: &str) {
        self.borrow_mut().print(text);
    }

    fn input(&mut self, prompt: &str, caps: bool) -> Option<String> {
        self.borrow_mut().input(prompt, caps)
    }
}
