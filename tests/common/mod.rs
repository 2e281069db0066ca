use sbasic::mach::{Console, Runtime, ScriptedConsole};
use std::cell::RefCell;
use std::rc::Rc;

/// A runtime wired to a scripted console. Output accumulates until
/// the next `enter` drains it, with errors folded in as lines.
pub struct Session {
    runtime: Runtime,
    console: Rc<RefCell<ScriptedConsole>>,
}

impl Session {
    pub fn new() -> Session {
        let console = Rc::new(RefCell::new(ScriptedConsole::new()));
        let mut runtime = Runtime::with_console(Box::new(Rc::clone(&console)));
        // A runaway loop should fail a test with BREAK, not hang it.
        runtime.set_statement_budget(1_000_000);
        Session { runtime, console }
    }

    /// Queue a reply for the next INPUT.
    #[allow(dead_code)]
    pub fn supply(&mut self, reply: &str) {
        self.console.borrow_mut().supply(reply);
    }

    /// Enter one line and collect everything it printed.
    pub fn enter(&mut self, source: &str) -> String {
        if let Err(error) = self.runtime.enter(source) {
            self.console.borrow_mut().print(&format!("{}\n", error));
        }
        self.console.borrow_mut().drain()
    }

    /// Enter every line of a program, then RUN it.
    #[allow(dead_code)]
    pub fn run(&mut self, program: &str) -> String {
        for line in program.lines() {
            let line = line.trim();
            if !line.is_empty() {
                self.enter(line);
            }
        }
        self.enter("run")
    }
}
