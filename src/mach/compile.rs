use super::runtime::Runtime;
use super::{Pass, Pc, Type};
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Block tracking
///
/// Multi-line constructs open a `Block` when their keyword is seen
/// and close it at the matching end keyword, which patches the
/// opener's forward jump now that the target is known. The stack
/// nests naturally; a closer that finds the wrong kind on top is
/// stray. Whatever is still open when a pass finishes is reported
/// against the line that opened it.

#[derive(Debug)]
pub(super) enum Block {
    If { site: Pc, exits: Vec<Pc> },
    Else { site: Pc, exits: Vec<Pc> },
    For { site: Pc, body: Pc },
    While { site: Pc },
    Do { site: Pc, exits: Vec<Pc> },
    Repeat { site: Pc },
    Select { site: Pc, chain: Pc, exits: Vec<Pc>, ty: Type },
    Function { site: Pc, name: Rc<str>, sub: bool },
}

impl Runtime {
    /// Rebuild the side tables and symbol declarations for the
    /// stored program. `clear_globals` wipes the symbol table first,
    /// for when the whole program was replaced rather than edited.
    /// The outcome is stashed on the program either way; the
    /// interpreter pass is restored before returning.
    pub(super) fn compile_program(&mut self, clear_globals: bool) {
        if clear_globals {
            self.global.clear();
        }
        self.program.clear_compiled();
        self.global.clear_functions();
        let result = self.run_passes();
        self.blocks.clear();
        self.scopes.clear();
        self.pass = Pass::Interpret;
        self.program.mark_compiled(result);
    }

    fn run_passes(&mut self) -> Result<()> {
        for pass in &[Pass::Declare, Pass::Compile] {
            self.pass = *pass;
            let mut pc = self.program.first_pc();
            while self.program.line_exists(pc.line) {
                let line = pc.line;
                while !self.program.end_of_line(pc) {
                    if let Err(error) = self.statement(&mut pc) {
                        if error.is_direct() {
                            let number = self.program.line_number(Pc::new(line, 0));
                            return Err(error.in_line_number(number));
                        }
                        return Err(error);
                    }
                }
                pc = Pc::new(line + 1, 0);
            }
            if let Some(error) = self.unclosed_block() {
                return Err(error);
            }
        }
        Ok(())
    }

    /// Error for the innermost still-open block, clearing the rest.
    pub(super) fn unclosed_block(&mut self) -> Option<Error> {
        let (error, site) = match self.blocks.last() {
            None => return None,
            Some(Block::If { site, .. }) | Some(Block::Else { site, .. }) => {
                (error!(StrayIf), *site)
            }
            Some(Block::For { site, .. }) => (error!(StrayFor), *site),
            Some(Block::While { site }) => (error!(StrayWhile), *site),
            Some(Block::Do { site, .. }) => (error!(StrayDo), *site),
            Some(Block::Repeat { site }) => (error!(StrayRepeat), *site),
            Some(Block::Select { site, .. }) => (error!(StraySelect), *site),
            Some(Block::Function { site, sub: false, .. }) => (error!(StrayFunction), *site),
            Some(Block::Function { site, sub: true, .. }) => (error!(StraySub), *site),
        };
        self.blocks.clear();
        self.scopes.clear();
        Some(error.in_line_number(self.program.line_number(site)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::runtime::Runtime;
    use crate::lang::Line;

    fn load(runtime: &mut Runtime, lines: &[&str]) {
        for source in lines {
            runtime.program.enter(Line::from_str(source));
        }
        runtime.compile_program(false);
    }

    #[test]
    fn test_compiles_clean_program() {
        let mut runtime = Runtime::new();
        load(
            &mut runtime,
            &["10 X = 1", "20 IF X THEN", "30 PRINT X", "40 END IF"],
        );
        assert!(runtime.program.is_runnable());
        assert!(runtime.program.stashed_error().is_none());
    }

    #[test]
    fn test_unclosed_if_is_stray() {
        let mut runtime = Runtime::new();
        load(&mut runtime, &["10 IF 1 THEN", "20 PRINT 1"]);
        assert!(!runtime.program.is_runnable());
        let error = runtime.program.stashed_error().map(|e| e.to_string());
        assert_eq!(Some(String::from("IF WITHOUT END IF IN 10")), error);
        assert!(runtime.blocks.is_empty());
        assert!(runtime.scopes.is_empty());
    }

    #[test]
    fn test_false_branch_jump_is_patched() {
        let mut runtime = Runtime::new();
        load(
            &mut runtime,
            &["10 IF 0 THEN", "20 PRINT 1", "30 END IF", "40 PRINT 2"],
        );
        assert!(runtime.program.is_runnable());
        let site = crate::mach::Pc::new(0, 0);
        let target = runtime.program.jump(site);
        assert_eq!(Some(crate::mach::Pc::new(2, 1)), target);
    }

    #[test]
    fn test_next_without_for() {
        let mut runtime = Runtime::new();
        load(&mut runtime, &["10 NEXT"]);
        let error = runtime.program.stashed_error().map(|e| e.to_string());
        assert_eq!(Some(String::from("NEXT WITHOUT FOR IN 10")), error);
    }

    #[test]
    fn test_undefined_goto_target() {
        let mut runtime = Runtime::new();
        load(&mut runtime, &["10 GOTO 100"]);
        let error = runtime.program.stashed_error().map(|e| e.to_string());
        assert_eq!(Some(String::from("UNDEFINED LINE IN 10")), error);
    }
}
