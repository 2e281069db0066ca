use super::{Pc, MAX_LINE_LEN};
use crate::error;
use crate::lang::{Error, Line, LineNumber, Token};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

// The direct line is addressed far away from the stored lines so
// that walking off the end of the program can never wander into it.
const DIRECT_INDEX: usize = usize::max_value() / 2;

/// ## Program store
///
/// Stored lines in number order, plus one transient direct line.
/// Compilation attaches side tables keyed by `Pc`: patched jump
/// targets, block exit targets, FOR variable positions, and the
/// DATA registry. Editing any stored line invalidates all of them
/// until the next compile.

#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
    direct: Option<Line>,
    dirty: bool,
    runnable: bool,
    error: Option<Error>,
    line_index: BTreeMap<u16, usize>,
    jumps: HashMap<Pc, Pc>,
    exits: HashMap<Pc, Pc>,
    for_vars: HashMap<Pc, Pc>,
    data: Vec<Pc>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        *self = Program::default();
    }

    /// Accept an edited or typed line. Returns true when the line
    /// is direct and should be compiled and run immediately.
    pub fn enter(&mut self, line: Line) -> bool {
        if line.is_direct() {
            self.direct = Some(line);
            return true;
        }
        self.dirty = true;
        self.runnable = false;
        self.error = None;
        let number = line.number();
        match self
            .lines
            .binary_search_by(|probe| probe.number().cmp(&number))
        {
            Ok(i) => {
                if line.is_empty() {
                    self.lines.remove(i);
                } else {
                    self.lines[i] = line;
                }
            }
            Err(i) => {
                if !line.is_empty() {
                    self.lines.insert(i, line);
                }
            }
        }
        false
    }

    /// Loading from a file accepts only numbered lines.
    pub fn load_str(&mut self, source: &str) -> Result<()> {
        if source.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::from_str(source);
        if line.is_direct() {
            if line.is_empty() {
                return Ok(());
            }
            return Err(error!(DirectStatementInFile));
        }
        self.enter(line);
        Ok(())
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn first_pc(&self) -> Pc {
        Pc::new(0, 0)
    }

    pub fn direct_pc(&self) -> Pc {
        Pc::new(DIRECT_INDEX, 0)
    }

    pub fn is_direct_pc(&self, pc: Pc) -> bool {
        pc.line >= DIRECT_INDEX
    }

    pub fn clear_direct(&mut self) {
        self.direct = None;
    }

    fn line(&self, index: usize) -> Option<&Line> {
        if index == DIRECT_INDEX {
            self.direct.as_ref()
        } else {
            self.lines.get(index)
        }
    }

    pub fn token(&self, pc: Pc) -> Option<&Token> {
        self.line(pc.line)?.tokens().get(pc.token)
    }

    pub fn line_exists(&self, index: usize) -> bool {
        self.line(index).is_some()
    }

    pub fn end_of_line(&self, pc: Pc) -> bool {
        match self.line(pc.line) {
            Some(line) => pc.token >= line.tokens().len(),
            None => true,
        }
    }

    /// Line number for error context. Direct lines have none.
    pub fn line_number(&self, pc: Pc) -> LineNumber {
        self.line(pc.line).and_then(|line| line.number())
    }

    pub fn line_pc(&self, number: u16) -> Result<Pc> {
        match self.line_index.get(&number) {
            Some(index) => Ok(Pc::new(*index, 0)),
            None => Err(error!(UndefinedLine)),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_runnable(&self) -> bool {
        self.runnable
    }

    pub fn mark_compiled(&mut self, result: Result<()>) {
        self.dirty = false;
        match result {
            Ok(()) => {
                self.runnable = true;
                self.error = None;
            }
            Err(e) => {
                self.runnable = false;
                self.error = Some(e);
            }
        }
    }

    /// The compile error held back until a direct line actually
    /// needs the program.
    pub fn stashed_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Drop everything a previous compilation attached and rebuild
    /// the line number index.
    pub fn clear_compiled(&mut self) {
        self.runnable = false;
        self.error = None;
        self.jumps.clear();
        self.exits.clear();
        self.for_vars.clear();
        self.data.clear();
        self.line_index.clear();
        for (index, line) in self.lines.iter().enumerate() {
            if let Some(number) = line.number() {
                self.line_index.insert(number, index);
            }
        }
    }

    pub fn set_jump(&mut self, site: Pc, target: Pc) {
        self.jumps.insert(site, target);
    }

    pub fn jump(&self, site: Pc) -> Option<Pc> {
        self.jumps.get(&site).copied()
    }

    pub fn set_exit(&mut self, site: Pc, target: Pc) {
        self.exits.insert(site, target);
    }

    pub fn exit(&self, site: Pc) -> Option<Pc> {
        self.exits.get(&site).copied()
    }

    pub fn set_for_var(&mut self, next_site: Pc, var_pc: Pc) {
        self.for_vars.insert(next_site, var_pc);
    }

    pub fn for_var(&self, next_site: Pc) -> Option<Pc> {
        self.for_vars.get(&next_site).copied()
    }

    pub fn push_data(&mut self, pc: Pc) {
        self.data.push(pc);
    }

    pub fn data_at(&self, index: usize) -> Option<Pc> {
        self.data.get(index).copied()
    }

    /// First DATA item on or after a stored line, for RESTORE.
    pub fn data_index_at(&self, line: usize) -> usize {
        self.data
            .iter()
            .position(|pc| pc.line >= line)
            .unwrap_or_else(|| self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(program: &mut Program, source: &str) -> bool {
        program.enter(Line::from_str(source))
    }

    #[test]
    fn test_enter_keeps_order() {
        let mut program = Program::new();
        enter(&mut program, "30 print 3");
        enter(&mut program, "10 print 1");
        enter(&mut program, "20 print 2");
        let numbers: Vec<_> = program.lines().iter().map(|l| l.number()).collect();
        assert_eq!(numbers, vec![Some(10), Some(20), Some(30)]);
        enter(&mut program, "20 print 22");
        assert_eq!(program.line_count(), 3);
        enter(&mut program, "10");
        let numbers: Vec<_> = program.lines().iter().map(|l| l.number()).collect();
        assert_eq!(numbers, vec![Some(20), Some(30)]);
    }

    #[test]
    fn test_direct_line_is_separate() {
        let mut program = Program::new();
        enter(&mut program, "10 print 1");
        assert!(enter(&mut program, "print 2"));
        assert!(program.token(program.direct_pc()).is_some());
        // Walking past the end of the program finds nothing.
        assert!(program.token(Pc::new(1, 0)).is_none());
        assert!(!program.line_exists(1));
        program.clear_direct();
        assert!(program.token(program.direct_pc()).is_none());
    }

    #[test]
    fn test_line_pc() {
        let mut program = Program::new();
        enter(&mut program, "10 print 1");
        enter(&mut program, "20 print 2");
        program.clear_compiled();
        assert_eq!(program.line_pc(20).unwrap(), Pc::new(1, 0));
        assert!(program.line_pc(15).is_err());
    }

    #[test]
    fn test_dirty_and_runnable() {
        let mut program = Program::new();
        enter(&mut program, "10 print 1");
        assert!(program.is_dirty());
        assert!(!program.is_runnable());
        program.mark_compiled(Ok(()));
        assert!(!program.is_dirty());
        assert!(program.is_runnable());
        enter(&mut program, "20 print 2");
        assert!(program.is_dirty());
        assert!(!program.is_runnable());
        program.mark_compiled(Err(error!(SyntaxError)));
        assert!(!program.is_dirty());
        assert!(!program.is_runnable());
        assert!(program.stashed_error().is_some());
    }

    #[test]
    fn test_load_str() {
        let mut program = Program::new();
        program.load_str("10 print 1").unwrap();
        program.load_str("").unwrap();
        assert!(program.load_str("print 1").is_err());
        let long = format!("10 print \"{}\"", "x".repeat(300));
        assert!(program.load_str(&long).is_err());
        assert_eq!(program.line_count(), 1);
    }

    #[test]
    fn test_side_tables() {
        let mut program = Program::new();
        let site = Pc::new(2, 1);
        let target = Pc::new(5, 0);
        program.set_jump(site, target);
        assert_eq!(program.jump(site), Some(target));
        assert_eq!(program.jump(Pc::new(2, 2)), None);
        program.set_exit(site, target);
        assert_eq!(program.exit(site), Some(target));
        program.set_for_var(site, Pc::new(1, 1));
        assert_eq!(program.for_var(site), Some(Pc::new(1, 1)));
    }

    #[test]
    fn test_data_registry() {
        let mut program = Program::new();
        program.push_data(Pc::new(1, 1));
        program.push_data(Pc::new(1, 3));
        program.push_data(Pc::new(4, 1));
        assert_eq!(program.data_at(1), Some(Pc::new(1, 3)));
        assert_eq!(program.data_at(3), None);
        assert_eq!(program.data_index_at(0), 0);
        assert_eq!(program.data_index_at(2), 2);
        assert_eq!(program.data_index_at(9), 3);
    }

    #[test]
    fn test_edit_invalidates() {
        let mut program = Program::new();
        enter(&mut program, "10 goto 10");
        program.clear_compiled();
        program.set_jump(Pc::new(0, 0), Pc::new(0, 0));
        program.mark_compiled(Ok(()));
        enter(&mut program, "20 print");
        assert!(!program.is_runnable());
        program.clear_compiled();
        assert_eq!(program.jump(Pc::new(0, 0)), None);
    }
}
