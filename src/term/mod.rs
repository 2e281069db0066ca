extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Console, Runtime};
use ansi_term::Style;
use linefeed::{
    Command, Completer, Completion, DefaultTerminal, Function, Interface, Prompter, ReadResult,
    Signal, Terminal,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> std::io::Result<()> {
    let command = Arc::new(Interface::new("sbasic")?);
    let input_full = Arc::new(Interface::new("input")?);
    input_full.set_report_signal(Signal::Interrupt, true);
    let input_caps = Arc::new(Interface::new("INPUT")?);
    input_caps.set_report_signal(Signal::Interrupt, true);
    CapsKeys::install(&input_caps);
    let mut runtime = Runtime::with_console(Box::new(TermConsole {
        command: Arc::clone(&command),
        input_full: Arc::clone(&input_full),
        input_caps: Arc::clone(&input_caps),
    }));
    let interrupted = runtime.interrupt_flag();
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    command.write_fmt(format_args!("SBASIC\nREADY.\n"))?;

    loop {
        let saved_completer = command.completer();
        command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        command.set_completer(saved_completer);
        // Discard any interrupt that arrived while sitting at the prompt.
        interrupted.store(false, Ordering::SeqCst);
        let result = runtime.enter(&string);
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
        if let Err(error) = result {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(format!("?{}", error))
            ))?;
        }
    }
    Ok(())
}

struct TermConsole {
    command: Arc<Interface<DefaultTerminal>>,
    input_full: Arc<Interface<DefaultTerminal>>,
    input_caps: Arc<Interface<DefaultTerminal>>,
}

impl Console for TermConsole {
    fn print(&mut self, text: &str) {
        let _ = self.command.write_fmt(format_args!("{}", text));
    }

    fn input(&mut self, prompt: &str, caps: bool) -> Option<String> {
        let input = if caps {
            &self.input_caps
        } else {
            &self.input_full
        };
        if input.set_prompt(prompt).is_err() {
            return None;
        }
        match input.read_line() {
            Ok(ReadResult::Input(string)) => {
                if !string.trim().is_empty() {
                    input.add_history_unique(string.clone());
                }
                Some(string)
            }
            Ok(ReadResult::Signal(Signal::Interrupt)) => {
                // Interrupting leaves the reader mid-line; cancel it so
                // the next prompt draws cleanly.
                let _ = input.set_buffer("");
                let _ = input.lock_reader().cancel_read_line();
                None
            }
            _ => None,
        }
    }
}

/// Rebinds the letter keys so typed replies insert upper-case.
struct CapsKeys;

impl CapsKeys {
    fn install<T: Terminal>(interface: &Interface<T>) {
        interface.define_function("caps-keys", Arc::new(CapsKeys));
        for ch in 'a'..='z' {
            interface.bind_sequence(ch.to_string(), Command::from_str("caps-keys"));
        }
    }
}

impl<Term: Terminal> Function<Term> for CapsKeys {
    fn execute(&self, prompter: &mut Prompter<Term>, count: i32, ch: char) -> std::io::Result<()> {
        prompter.insert(count as usize, ch.to_ascii_uppercase())
    }
}

struct LineCompleter {
    listing: Vec<(u16, String)>,
}

impl LineCompleter {
    fn new(listing: Vec<(u16, String)>) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(number) = prompter.buffer().parse::<u16>() {
            if let Some((_, source)) = self.listing.iter().find(|(n, _)| *n == number) {
                let mut comp_list = Vec::new();
                let mut comp = Completion::simple(source.clone());
                comp.suffix = linefeed::complete::Suffix::None;
                comp_list.push(comp);
                return Some(comp_list);
            }
        }
        None
    }
}
