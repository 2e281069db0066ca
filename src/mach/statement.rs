use super::compile::Block;
use super::frame::FrameKind;
use super::global::{ident_type, FuncDef};
use super::runtime::Runtime;
use super::{Pass, Pc, Type, Value, Var};
use crate::error;
use crate::lang::{Error, LineNumber, Literal, Operator, Token, Word};
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Columns per PRINT comma zone.
const ZONE_WIDTH: usize = 14;

impl Runtime {
    /// Execute one statement, advancing `pc` past its tokens. The
    /// same dispatch runs in every pass; handlers branch internally
    /// on `self.pass`. A bare colon is an empty statement.
    pub(super) fn statement(&mut self, pc: &mut Pc) -> Result<()> {
        let site = *pc;
        let word = match self.token(*pc) {
            Some(Token::Word(word)) => *word,
            Some(Token::Ident(_)) => return self.st_let(pc),
            Some(Token::Colon) => {
                pc.advance();
                return Ok(());
            }
            _ => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        pc.advance();
        match word {
            Word::Call => self.st_call(pc),
            Word::Case => self.st_case(pc, site),
            Word::Clear => self.st_clear(),
            Word::Data => self.st_data(pc, site),
            Word::Dim => self.st_dim(pc),
            Word::Do => self.st_do(pc, site),
            Word::Else => self.st_else(pc, site),
            Word::ElseIf => self.st_elseif(pc, site),
            Word::End => match self.pass {
                Pass::Interpret => Err(error!(Halted)),
                _ => Ok(()),
            },
            Word::EndFunction => self.st_end_function(pc, site, false),
            Word::EndIf => self.st_end_if(pc, site),
            Word::EndSelect => self.st_end_select(pc, site),
            Word::EndSub => self.st_end_function(pc, site, true),
            Word::Exit => match self.token(*pc) {
                Some(Token::Word(Word::Sub)) => {
                    pc.advance();
                    self.st_exit_function(pc)
                }
                _ => Err(error!(SyntaxError; "EXPECTED DO, FUNCTION OR SUB")),
            },
            Word::ExitDo => self.st_exit_do(pc, site),
            Word::ExitFunction => self.st_exit_function(pc),
            Word::For => self.st_for(pc, site),
            Word::Function => self.st_function(pc, site, false),
            Word::Gosub => self.st_gosub(pc, site),
            Word::Goto => self.st_goto(pc, site),
            Word::If => self.st_if(pc, site),
            Word::Input => self.st_input(pc),
            Word::Let => self.st_let(pc),
            Word::List => self.st_list(pc),
            Word::Load => self.st_load(pc),
            Word::Local => self.st_local(pc),
            Word::Loop => self.st_loop(pc, site),
            Word::New => self.st_new(),
            Word::Next => self.st_next(pc, site),
            Word::On => self.st_on(pc, site),
            Word::Option => self.st_option(pc),
            Word::Print => self.st_print(pc),
            Word::Randomize => self.st_randomize(pc),
            Word::Read => self.st_read(pc),
            Word::Rem => {
                while !self.program.end_of_line(*pc) {
                    pc.advance();
                }
                Ok(())
            }
            Word::Repeat => self.st_repeat(site),
            Word::Restore => self.st_restore(pc),
            Word::Return => self.st_return(pc),
            Word::Run => self.st_run(pc),
            Word::Save => self.st_save(pc),
            Word::Select => self.st_select(pc, site),
            Word::Stop => match self.pass {
                Pass::Interpret => Err(error!(Break)),
                _ => Ok(()),
            },
            Word::Sub => self.st_function(pc, site, true),
            Word::Until => self.st_until(pc, site),
            Word::Wend => self.st_wend(pc, site),
            Word::While => self.st_while(pc, site),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn jump_target(&self, site: Pc) -> Result<Pc> {
        match self.program.jump(site) {
            Some(target) => Ok(target),
            None => Err(error!(InternalError; "MISSING JUMP TARGET")),
        }
    }

    fn exit_target(&self, site: Pc) -> Result<Pc> {
        match self.program.exit(site) {
            Some(target) => Ok(target),
            None => Err(error!(InternalError; "MISSING EXIT TARGET")),
        }
    }

    fn expect_word(&self, pc: &mut Pc, word: Word, message: &'static str) -> Result<()> {
        match self.token(*pc) {
            Some(Token::Word(found)) if *found == word => {
                pc.advance();
                Ok(())
            }
            _ => Err(error!(SyntaxError; message)),
        }
    }

    fn line_number(&self, pc: &mut Pc) -> Result<u16> {
        let number = match self.token(*pc) {
            Some(token) => LineNumber::try_from(token)?,
            None => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        };
        pc.advance();
        match number {
            Some(number) => Ok(number),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn at_line_number(&self, pc: Pc) -> bool {
        matches!(
            self.token(pc),
            Some(Token::Literal(Literal::Integer(_)))
        )
    }

    /// Typed lines reaching into a stored program surface any
    /// compile error the lazy recompilation stashed away.
    pub(super) fn check_runnable(&self, site: Pc) -> Result<()> {
        if self.pass == Pass::Interpret
            && self.program.is_direct_pc(site)
            && !self.program.is_runnable()
        {
            if let Some(error) = self.program.stashed_error() {
                return Err(error.clone());
            }
        }
        Ok(())
    }

    fn st_let(&mut self, pc: &mut Pc) -> Result<()> {
        let lvalue = self.resolve_lvalue(pc)?;
        match self.token(*pc) {
            Some(Token::Operator(Operator::Equal)) => pc.advance(),
            _ => return Err(error!(SyntaxError; "EXPECTED =")),
        }
        let value = self.evaluate(pc, Some("EXPRESSION"))?;
        self.store(&lvalue, value)
    }

    fn st_call(&mut self, pc: &mut Pc) -> Result<()> {
        self.call_function(pc)?;
        Ok(())
    }

    fn st_print(&mut self, pc: &mut Pc) -> Result<()> {
        let mut newline = true;
        loop {
            match self.token(*pc) {
                Some(Token::Semicolon) => {
                    pc.advance();
                    newline = false;
                }
                Some(Token::Comma) => {
                    pc.advance();
                    newline = false;
                    if self.pass == Pass::Interpret {
                        let col = self.print_col;
                        let pad = ZONE_WIDTH - col % ZONE_WIDTH;
                        self.print_text(&" ".repeat(pad));
                    }
                }
                Some(token) if token.is_expression_start() => {
                    let value = self.evaluate(pc, Some("EXPRESSION"))?;
                    newline = true;
                    if self.pass == Pass::Interpret {
                        let text = Self::format_value(&value);
                        self.print_text(&text);
                    }
                }
                _ => break,
            }
        }
        if newline && self.pass == Pass::Interpret {
            self.print_text("\n");
        }
        Ok(())
    }

    /// PRINT formatting: numbers render as they display, with a
    /// trailing space appended; strings render verbatim.
    pub(super) fn format_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Nil | Value::Void => String::new(),
            number => format!("{} ", number),
        }
    }

    fn st_if(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let condition = self.evaluate(pc, Some("CONDITION"))?;
        let taken = condition.is_true()?;
        if let Some(Token::Word(Word::Goto)) = self.token(*pc) {
            pc.advance();
            return self.if_jump(pc, taken);
        }
        self.expect_word(pc, Word::Then, "EXPECTED THEN")?;
        if self.program.end_of_line(*pc) {
            // Block form: THEN ends the line, body follows on the
            // next lines until ELSEIF, ELSE or END IF.
            match self.pass {
                Pass::Interpret => {
                    if !taken {
                        self.branch_false(pc, site)?;
                    }
                    Ok(())
                }
                _ => {
                    self.blocks.push(Block::If {
                        site,
                        exits: Vec::new(),
                    });
                    Ok(())
                }
            }
        } else if self.at_line_number(*pc) {
            self.if_jump(pc, taken)
        } else if self.pass == Pass::Interpret && !taken {
            self.skip_to_else(pc)
        } else {
            Ok(())
        }
    }

    /// IF's jump shorthand: `IF X THEN 100` or `IF X GOTO 100`.
    fn if_jump(&mut self, pc: &mut Pc, taken: bool) -> Result<()> {
        let number = self.line_number(pc)?;
        match self.pass {
            Pass::Interpret => {
                if taken {
                    *pc = self.program.line_pc(number)?;
                    Ok(())
                } else {
                    self.skip_to_else(pc)
                }
            }
            _ => {
                self.program.line_pc(number)?;
                Ok(())
            }
        }
    }

    /// A failed single-line IF skips ahead to just after the ELSE
    /// belonging to it, or to end of line. ELSE binds the nearest
    /// IF, so nested single-line IFs consume one ELSE each.
    fn skip_to_else(&mut self, pc: &mut Pc) -> Result<()> {
        let mut depth = 0;
        while !self.program.end_of_line(*pc) {
            match self.token(*pc) {
                Some(Token::Word(Word::If)) => depth += 1,
                Some(Token::Word(Word::Else)) => {
                    if depth == 0 {
                        pc.advance();
                        if self.at_line_number(*pc) {
                            let number = self.line_number(pc)?;
                            *pc = self.program.line_pc(number)?;
                        }
                        return Ok(());
                    }
                    depth -= 1;
                }
                _ => {}
            }
            pc.advance();
        }
        Ok(())
    }

    /// Take a block IF's false branch. When the target is an ELSEIF
    /// its arrival is marked so the handler knows to test rather
    /// than exit.
    fn branch_false(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let target = self.jump_target(site)?;
        if let Some(Token::Word(Word::ElseIf)) = self.token(target) {
            self.pending_elseif = Some(target);
        }
        *pc = target;
        Ok(())
    }

    fn st_else(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        if site.token == 0 {
            // Block form: only ever executed when the branch above
            // it ran, so skip past END IF.
            match self.pass {
                Pass::Interpret => {
                    *pc = self.exit_target(site)?;
                    Ok(())
                }
                _ => match self.blocks.pop() {
                    Some(Block::If { site: prev, mut exits }) => {
                        self.program.set_jump(prev, *pc);
                        exits.push(site);
                        self.blocks.push(Block::Else { site, exits });
                        Ok(())
                    }
                    other => {
                        if let Some(block) = other {
                            self.blocks.push(block);
                        }
                        Err(error!(StrayElse))
                    }
                },
            }
        } else {
            // Single-line form: the true branch ran into it, so the
            // rest of the line belongs to the false branch.
            match self.pass {
                Pass::Interpret => {
                    while !self.program.end_of_line(*pc) {
                        pc.advance();
                    }
                    Ok(())
                }
                _ => {
                    if self.at_line_number(*pc) {
                        let number = self.line_number(pc)?;
                        self.program.line_pc(number)?;
                    }
                    Ok(())
                }
            }
        }
    }

    fn st_elseif(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        if site.token != 0 {
            return Err(error!(SyntaxError; "EXPECTED END OF STATEMENT"));
        }
        match self.pass {
            Pass::Interpret => {
                if self.pending_elseif.take() == Some(site) {
                    let condition = self.evaluate(pc, Some("CONDITION"))?;
                    self.expect_word(pc, Word::Then, "EXPECTED THEN")?;
                    if !condition.is_true()? {
                        self.branch_false(pc, site)?;
                    }
                    Ok(())
                } else {
                    *pc = self.exit_target(site)?;
                    Ok(())
                }
            }
            _ => {
                let condition = self.evaluate(pc, Some("CONDITION"))?;
                condition.is_true()?;
                self.expect_word(pc, Word::Then, "EXPECTED THEN")?;
                if !self.program.end_of_line(*pc) {
                    return Err(error!(SyntaxError; "EXPECTED END OF LINE"));
                }
                match self.blocks.pop() {
                    Some(Block::If { site: prev, mut exits }) => {
                        self.program.set_jump(prev, site);
                        exits.push(site);
                        self.blocks.push(Block::If { site, exits });
                        Ok(())
                    }
                    other => {
                        if let Some(block) = other {
                            self.blocks.push(block);
                        }
                        Err(error!(StrayElse))
                    }
                }
            }
        }
    }

    fn st_end_if(&mut self, pc: &mut Pc, _site: Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => Ok(()),
            _ => {
                let after = *pc;
                match self.blocks.pop() {
                    Some(Block::If { site: prev, exits }) => {
                        self.program.set_jump(prev, after);
                        for exit in exits {
                            self.program.set_exit(exit, after);
                        }
                        Ok(())
                    }
                    Some(Block::Else { exits, .. }) => {
                        for exit in exits {
                            self.program.set_exit(exit, after);
                        }
                        Ok(())
                    }
                    other => {
                        if let Some(block) = other {
                            self.blocks.push(block);
                        }
                        Err(error!(StrayEndIf))
                    }
                }
            }
        }
    }

    fn st_for(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let lvalue = self.resolve_lvalue(pc)?;
        match self.token(*pc) {
            Some(Token::Operator(Operator::Equal)) => pc.advance(),
            _ => return Err(error!(SyntaxError; "EXPECTED =")),
        }
        let from = self.evaluate(pc, Some("EXPRESSION"))?;
        self.expect_word(pc, Word::To, "EXPECTED TO")?;
        let limit = self.evaluate(pc, Some("LIMIT"))?;
        let step = match self.token(*pc) {
            Some(Token::Word(Word::Step)) => {
                pc.advance();
                self.evaluate(pc, Some("STEP"))?
            }
            _ => Value::Integer(1),
        };
        let ty = self.lvalue_type(&lvalue)?;
        if ty == Type::String {
            return Err(error!(TypeMismatch));
        }
        match self.pass {
            Pass::Interpret => {
                self.store(&lvalue, from)?;
                let mut limit_var = Var::scalar(ty);
                limit_var.assign(limit.clone())?;
                let mut step_var = Var::scalar(ty);
                step_var.assign(step.clone())?;
                self.stack.push_arg(limit_var)?;
                self.stack.push_arg(step_var)?;
                let current = self.fetch(&lvalue)?;
                if Self::for_done(&current, &limit, &step)? {
                    self.stack.pop_value()?;
                    self.stack.pop_value()?;
                    *pc = self.exit_target(site)?;
                }
                Ok(())
            }
            _ => {
                from.retype(ty)?;
                limit.retype(ty)?;
                step.retype(ty)?;
                self.blocks.push(Block::For { site, body: *pc });
                Ok(())
            }
        }
    }

    fn for_done(current: &Value, limit: &Value, step: &Value) -> Result<bool> {
        let current = current.clone().to_real()?;
        let limit = limit.clone().to_real()?;
        let step = step.clone().to_real()?;
        Ok(if step >= 0.0 {
            current > limit
        } else {
            current < limit
        })
    }

    fn st_next(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let named = match self.token(*pc) {
            Some(Token::Ident(ident)) => {
                let ident = ident.clone();
                pc.advance();
                Some(ident)
            }
            _ => None,
        };
        match self.pass {
            Pass::Interpret => {
                let for_site = match self.program.for_var(site) {
                    Some(for_site) => for_site,
                    None => return Err(error!(NextWithoutFor)),
                };
                let mut var_pc = Pc::new(for_site.line, for_site.token + 1);
                let lvalue = self.resolve_lvalue(&mut var_pc)?;
                let (limit, step) = match self.stack.top_two() {
                    Some((limit, step)) => (limit.value()?.clone(), step.value()?.clone()),
                    None => return Err(error!(NextWithoutFor)),
                };
                let next = self
                    .fetch(&lvalue)?
                    .binary(Operator::Plus, step.clone(), true)?;
                if Self::for_done(&next, &limit, &step)? {
                    self.stack.pop_value()?;
                    self.stack.pop_value()?;
                } else {
                    self.store(&lvalue, next)?;
                    *pc = self.jump_target(site)?;
                }
                Ok(())
            }
            _ => match self.blocks.pop() {
                Some(Block::For { site: for_site, body }) => {
                    if let Some(named) = named {
                        let var_pc = Pc::new(for_site.line, for_site.token + 1);
                        match self.token(var_pc) {
                            Some(Token::Ident(ident)) if ident.name() == named.name() => {}
                            _ => return Err(error!(NextWithoutFor; "MISMATCHED NEXT")),
                        }
                    }
                    self.program.set_jump(site, body);
                    self.program.set_for_var(site, for_site);
                    self.program.set_exit(for_site, *pc);
                    Ok(())
                }
                other => {
                    if let Some(block) = other {
                        self.blocks.push(block);
                    }
                    Err(error!(NextWithoutFor))
                }
            },
        }
    }

    fn st_while(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let condition = self.evaluate(pc, Some("CONDITION"))?;
        match self.pass {
            Pass::Interpret => {
                if !condition.is_true()? {
                    *pc = self.exit_target(site)?;
                }
                Ok(())
            }
            _ => {
                condition.is_true()?;
                self.blocks.push(Block::While { site });
                Ok(())
            }
        }
    }

    fn st_wend(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => {
                *pc = self.jump_target(site)?;
                Ok(())
            }
            _ => match self.blocks.pop() {
                Some(Block::While { site: while_site }) => {
                    self.program.set_jump(site, while_site);
                    self.program.set_exit(while_site, *pc);
                    Ok(())
                }
                other => {
                    if let Some(block) = other {
                        self.blocks.push(block);
                    }
                    Err(error!(StrayWend))
                }
            },
        }
    }

    /// DO and LOOP both take an optional WHILE/UNTIL guard.
    fn loop_guard(&mut self, pc: &mut Pc) -> Result<Option<(bool, Value)>> {
        match self.token(*pc) {
            Some(Token::Word(Word::While)) => {
                pc.advance();
                Ok(Some((true, self.evaluate(pc, Some("CONDITION"))?)))
            }
            Some(Token::Word(Word::Until)) => {
                pc.advance();
                Ok(Some((false, self.evaluate(pc, Some("CONDITION"))?)))
            }
            _ => Ok(None),
        }
    }

    fn st_do(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let guard = self.loop_guard(pc)?;
        match self.pass {
            Pass::Interpret => {
                if let Some((sense, value)) = guard {
                    if value.is_true()? != sense {
                        *pc = self.exit_target(site)?;
                    }
                }
                Ok(())
            }
            _ => {
                if let Some((_, value)) = guard {
                    value.is_true()?;
                }
                self.blocks.push(Block::Do {
                    site,
                    exits: Vec::new(),
                });
                Ok(())
            }
        }
    }

    fn st_loop(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let guard = self.loop_guard(pc)?;
        match self.pass {
            Pass::Interpret => {
                let repeat = match guard {
                    None => true,
                    Some((sense, value)) => value.is_true()? == sense,
                };
                if repeat {
                    *pc = self.jump_target(site)?;
                }
                Ok(())
            }
            _ => {
                if let Some((_, value)) = guard {
                    value.is_true()?;
                }
                match self.blocks.pop() {
                    Some(Block::Do { site: do_site, exits }) => {
                        self.program.set_jump(site, do_site);
                        let after = *pc;
                        self.program.set_exit(do_site, after);
                        for exit in exits {
                            self.program.set_exit(exit, after);
                        }
                        Ok(())
                    }
                    other => {
                        if let Some(block) = other {
                            self.blocks.push(block);
                        }
                        Err(error!(StrayLoop))
                    }
                }
            }
        }
    }

    fn st_exit_do(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => {
                *pc = self.exit_target(site)?;
                Ok(())
            }
            _ => {
                for block in self.blocks.iter_mut().rev() {
                    if let Block::Do { exits, .. } = block {
                        exits.push(site);
                        return Ok(());
                    }
                }
                Err(error!(StrayExitDo))
            }
        }
    }

    fn st_repeat(&mut self, site: Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => Ok(()),
            _ => {
                self.blocks.push(Block::Repeat { site });
                Ok(())
            }
        }
    }

    fn st_until(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        let condition = self.evaluate(pc, Some("CONDITION"))?;
        match self.pass {
            Pass::Interpret => {
                if !condition.is_true()? {
                    *pc = self.jump_target(site)?;
                }
                Ok(())
            }
            _ => {
                condition.is_true()?;
                match self.blocks.pop() {
                    Some(Block::Repeat { site: repeat_site }) => {
                        let body = Pc::new(repeat_site.line, repeat_site.token + 1);
                        self.program.set_jump(site, body);
                        Ok(())
                    }
                    other => {
                        if let Some(block) = other {
                            self.blocks.push(block);
                        }
                        Err(error!(StrayUntil))
                    }
                }
            }
        }
    }

    fn st_select(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        self.expect_word(pc, Word::Case, "EXPECTED CASE")?;
        let value = self.evaluate(pc, Some("EXPRESSION"))?;
        if !self.program.end_of_line(*pc) {
            return Err(error!(SyntaxError; "EXPECTED END OF LINE"));
        }
        match self.pass {
            Pass::Interpret => {
                self.selects.push(Some(value));
                *pc = self.jump_target(site)?;
                Ok(())
            }
            _ => {
                self.blocks.push(Block::Select {
                    site,
                    chain: site,
                    exits: Vec::new(),
                    ty: value.ty(),
                });
                Ok(())
            }
        }
    }

    fn st_case(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => {
                let subject = match self.selects.last() {
                    Some(Some(value)) => Some(value.clone()),
                    Some(None) => None,
                    None => return Err(error!(StrayCase)),
                };
                match subject {
                    Some(subject) => {
                        if self.case_matches(pc, &subject)? {
                            if let Some(slot) = self.selects.last_mut() {
                                *slot = None;
                            }
                        } else {
                            *pc = self.jump_target(site)?;
                        }
                        Ok(())
                    }
                    None => {
                        // A taken branch ran into the next CASE.
                        self.selects.pop();
                        *pc = self.exit_target(site)?;
                        Ok(())
                    }
                }
            }
            _ => {
                let subject = match self.blocks.last() {
                    Some(Block::Select { ty, .. }) => ty.zero(),
                    _ => return Err(error!(StrayCase)),
                };
                self.case_matches(pc, &subject)?;
                match self.blocks.pop() {
                    Some(Block::Select {
                        site: select_site,
                        chain,
                        mut exits,
                        ty,
                    }) => {
                        self.program.set_jump(chain, site);
                        exits.push(site);
                        self.blocks.push(Block::Select {
                            site: select_site,
                            chain: site,
                            exits,
                            ty,
                        });
                        Ok(())
                    }
                    other => {
                        if let Some(block) = other {
                            self.blocks.push(block);
                        }
                        Err(error!(StrayCase))
                    }
                }
            }
        }
    }

    /// Parse one CASE's selector list, reporting whether any item
    /// matches the subject. All items are consumed even after a
    /// match so the cursor lands past the statement.
    fn case_matches(&mut self, pc: &mut Pc, subject: &Value) -> Result<bool> {
        if let Some(Token::Word(Word::Else)) = self.token(*pc) {
            pc.advance();
            return Ok(true);
        }
        if let Some(Token::Word(Word::Is)) = self.token(*pc) {
            pc.advance();
            let op = match self.token(*pc) {
                Some(Token::Operator(op)) if op.is_relation() => *op,
                _ => return Err(error!(SyntaxError; "EXPECTED RELATION")),
            };
            pc.advance();
            let rhs = self.evaluate(pc, Some("EXPRESSION"))?;
            return subject.clone().binary(op, rhs, self.calc())?.is_true();
        }
        let mut matched = false;
        loop {
            let item = self.evaluate(pc, Some("EXPRESSION"))?;
            let hit = if let Some(Token::Word(Word::To)) = self.token(*pc) {
                pc.advance();
                let high = self.evaluate(pc, Some("EXPRESSION"))?;
                let ge = subject
                    .clone()
                    .binary(Operator::GreaterEqual, item, self.calc())?
                    .is_true()?;
                let le = subject
                    .clone()
                    .binary(Operator::LessEqual, high, self.calc())?
                    .is_true()?;
                ge && le
            } else {
                subject
                    .clone()
                    .binary(Operator::Equal, item, self.calc())?
                    .is_true()?
            };
            matched = matched || hit;
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                _ => break,
            }
        }
        Ok(matched)
    }

    fn st_end_select(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => {
                self.selects.pop();
                Ok(())
            }
            _ => match self.blocks.pop() {
                Some(Block::Select { chain, exits, .. }) => {
                    self.program.set_jump(chain, site);
                    let after = *pc;
                    for exit in exits {
                        self.program.set_exit(exit, after);
                    }
                    Ok(())
                }
                other => {
                    if let Some(block) = other {
                        self.blocks.push(block);
                    }
                    Err(error!(StrayEndSelect))
                }
            },
        }
    }

    fn st_goto(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        self.check_runnable(site)?;
        let number = self.line_number(pc)?;
        match self.pass {
            Pass::Interpret => {
                *pc = self.program.line_pc(number)?;
                Ok(())
            }
            Pass::Compile => {
                self.program.line_pc(number)?;
                Ok(())
            }
            Pass::Declare => Ok(()),
        }
    }

    fn st_gosub(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        self.check_runnable(site)?;
        let number = self.line_number(pc)?;
        match self.pass {
            Pass::Interpret => {
                let target = self.program.line_pc(number)?;
                self.stack
                    .push_frame(FrameKind::Gosub, *pc, self.stack.len(), 0, None, None)?;
                *pc = target;
                Ok(())
            }
            Pass::Compile => {
                self.program.line_pc(number)?;
                Ok(())
            }
            Pass::Declare => Ok(()),
        }
    }

    fn st_return(&mut self, pc: &mut Pc) -> Result<()> {
        match self.pass {
            Pass::Interpret => {
                let frame = self.stack.pop_frame()?;
                *pc = frame.pc;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn st_on(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        if let Some(Token::Word(Word::Error)) = self.token(*pc) {
            pc.advance();
            self.expect_word(pc, Word::Goto, "EXPECTED GOTO")?;
            let number = self.line_number(pc)?;
            match self.pass {
                Pass::Interpret => {
                    self.on_error = if number == 0 {
                        None
                    } else {
                        Some(self.program.line_pc(number)?)
                    };
                    Ok(())
                }
                Pass::Compile => {
                    if number != 0 {
                        self.program.line_pc(number)?;
                    }
                    Ok(())
                }
                Pass::Declare => Ok(()),
            }
        } else {
            self.check_runnable(site)?;
            let selector = self.evaluate(pc, Some("EXPRESSION"))?;
            let gosub = match self.token(*pc) {
                Some(Token::Word(Word::Goto)) => false,
                Some(Token::Word(Word::Gosub)) => true,
                _ => return Err(error!(SyntaxError; "EXPECTED GOTO OR GOSUB")),
            };
            pc.advance();
            let mut numbers = Vec::new();
            loop {
                numbers.push(self.line_number(pc)?);
                match self.token(*pc) {
                    Some(Token::Comma) => pc.advance(),
                    _ => break,
                }
            }
            match self.pass {
                Pass::Interpret => {
                    let chosen = selector.to_integer()?;
                    if chosen >= 1 && chosen as usize <= numbers.len() {
                        let target = self.program.line_pc(numbers[chosen as usize - 1])?;
                        if gosub {
                            self.stack.push_frame(
                                FrameKind::Gosub,
                                *pc,
                                self.stack.len(),
                                0,
                                None,
                                None,
                            )?;
                        }
                        *pc = target;
                    }
                    Ok(())
                }
                Pass::Compile => {
                    for number in numbers {
                        self.program.line_pc(number)?;
                    }
                    Ok(())
                }
                Pass::Declare => Ok(()),
            }
        }
    }

    fn st_function(&mut self, pc: &mut Pc, site: Pc, sub: bool) -> Result<()> {
        if self.program.is_direct_pc(site) {
            return Err(error!(IllegalDirect));
        }
        let ident = match self.token(*pc) {
            Some(Token::Ident(ident)) => ident.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED FUNCTION NAME")),
        };
        pc.advance();
        let mut params: Vec<(Rc<str>, Type)> = Vec::new();
        if let Some(Token::LParen) = self.token(*pc) {
            pc.advance();
            if let Some(Token::RParen) = self.token(*pc) {
                pc.advance();
            } else {
                loop {
                    let param = match self.token(*pc) {
                        Some(Token::Ident(param)) => param.clone(),
                        _ => return Err(error!(SyntaxError; "EXPECTED PARAMETER")),
                    };
                    pc.advance();
                    if params.iter().any(|(name, _)| &**name == param.name()) {
                        return Err(error!(Redeclaration; "DUPLICATE PARAMETER"));
                    }
                    params.push((Rc::from(param.name()), ident_type(&param)));
                    match self.token(*pc) {
                        Some(Token::Comma) => pc.advance(),
                        Some(Token::RParen) => {
                            pc.advance();
                            break;
                        }
                        _ => return Err(error!(SyntaxError; "EXPECTED )")),
                    }
                }
            }
        }
        if !self.program.end_of_line(*pc) {
            return Err(error!(SyntaxError; "EXPECTED END OF LINE"));
        }
        if !self.scopes.is_empty() {
            return Err(error!(SyntaxError; "NESTED FUNCTION"));
        }
        match self.pass {
            Pass::Declare => {
                let ret = if sub { None } else { Some(ident_type(&ident)) };
                let body = Pc::new(site.line + 1, 0);
                let def = FuncDef {
                    ret,
                    params,
                    locals: Vec::new(),
                    body,
                    end: body,
                };
                self.global.declare_function(&ident, def)?;
                self.blocks.push(Block::Function {
                    site,
                    name: Rc::from(ident.name()),
                    sub,
                });
                self.scopes.push(Rc::from(ident.name()));
                Ok(())
            }
            Pass::Compile => {
                self.blocks.push(Block::Function {
                    site,
                    name: Rc::from(ident.name()),
                    sub,
                });
                self.scopes.push(Rc::from(ident.name()));
                Ok(())
            }
            Pass::Interpret => {
                // Normal flow skips over the definition.
                let end = self.global.function(ident.name())?.end;
                *pc = Pc::new(end.line, end.token + 1);
                Ok(())
            }
        }
    }

    fn st_end_function(&mut self, _pc: &mut Pc, site: Pc, sub: bool) -> Result<()> {
        let stray = || {
            if sub {
                error!(StrayEndSub)
            } else {
                error!(StrayEndFunction)
            }
        };
        match self.pass {
            Pass::Interpret => Err(stray()),
            _ => match self.blocks.pop() {
                Some(Block::Function {
                    name,
                    sub: opened_sub,
                    ..
                }) => {
                    if opened_sub != sub {
                        self.scopes.pop();
                        return Err(stray());
                    }
                    if self.pass == Pass::Declare {
                        self.global.function_mut(&name)?.end = site;
                    }
                    self.scopes.pop();
                    Ok(())
                }
                other => {
                    if let Some(block) = other {
                        self.blocks.push(block);
                    }
                    Err(stray())
                }
            },
        }
    }

    fn st_exit_function(&mut self, pc: &mut Pc) -> Result<()> {
        match self.scopes.last().cloned() {
            None => Err(error!(StrayExitFunction)),
            Some(scope) => match self.pass {
                Pass::Interpret => {
                    *pc = self.global.function(&scope)?.end;
                    Ok(())
                }
                _ => Ok(()),
            },
        }
    }

    fn st_local(&mut self, pc: &mut Pc) -> Result<()> {
        let scope = match self.scopes.last().cloned() {
            Some(scope) => scope,
            None => return Err(error!(SyntaxError; "LOCAL OUTSIDE FUNCTION")),
        };
        loop {
            let ident = match self.token(*pc) {
                Some(Token::Ident(ident)) => ident.clone(),
                _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
            };
            pc.advance();
            if self.pass == Pass::Declare {
                let def = self.global.function_mut(&scope)?;
                let taken = def
                    .params
                    .iter()
                    .chain(def.locals.iter())
                    .any(|(name, _)| &**name == ident.name());
                if taken {
                    return Err(error!(Redeclaration; "DUPLICATE LOCAL"));
                }
                def.locals.push((Rc::from(ident.name()), ident_type(&ident)));
            }
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                _ => return Ok(()),
            }
        }
    }

    fn st_dim(&mut self, pc: &mut Pc) -> Result<()> {
        loop {
            let ident = match self.token(*pc) {
                Some(Token::Ident(ident)) => ident.clone(),
                _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
            };
            pc.advance();
            match self.token(*pc) {
                Some(Token::LParen) => {}
                _ => return Err(error!(SyntaxError; "EXPECTED (")),
            }
            let extents = self.arguments(pc, "SUBSCRIPT")?;
            if extents.is_empty() {
                return Err(error!(SyntaxError; "EXPECTED SUBSCRIPT"));
            }
            self.global.declare_array(&ident, extents.len())?;
            match self.pass {
                Pass::Interpret => {
                    let mut bounds = Vec::with_capacity(extents.len());
                    for extent in extents {
                        bounds.push(extent.to_integer()?);
                    }
                    self.global.dimension_array(ident.name(), &bounds)?;
                }
                _ => {
                    for extent in extents {
                        extent.retype(Type::Integer)?;
                    }
                }
            }
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                _ => return Ok(()),
            }
        }
    }

    fn st_option(&mut self, pc: &mut Pc) -> Result<()> {
        self.expect_word(pc, Word::Base, "EXPECTED BASE")?;
        let base = match self.token(*pc) {
            Some(Token::Literal(Literal::Integer(n))) => *n,
            _ => return Err(error!(SyntaxError; "EXPECTED 0 OR 1")),
        };
        pc.advance();
        match self.pass {
            Pass::Interpret => self.global.set_base(base),
            _ => {
                if base == 0 || base == 1 {
                    Ok(())
                } else {
                    Err(error!(IllegalFunctionCall; "EXPECTED 0 OR 1"))
                }
            }
        }
    }

    fn st_data(&mut self, pc: &mut Pc, site: Pc) -> Result<()> {
        if self.program.is_direct_pc(site) {
            return Err(error!(IllegalDirect));
        }
        if self.pass == Pass::Declare {
            self.program.push_data(site);
        }
        loop {
            match self.token(*pc) {
                Some(Token::Operator(Operator::Plus)) | Some(Token::Operator(Operator::Minus)) => {
                    pc.advance();
                    match self.token(*pc) {
                        Some(Token::Literal(Literal::Integer(_)))
                        | Some(Token::Literal(Literal::Real(_))) => pc.advance(),
                        _ => return Err(error!(SyntaxError; "EXPECTED DATUM")),
                    }
                }
                Some(Token::Literal(_)) => pc.advance(),
                _ => return Err(error!(SyntaxError; "EXPECTED DATUM")),
            }
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                _ => return Ok(()),
            }
        }
    }

    fn st_read(&mut self, pc: &mut Pc) -> Result<()> {
        loop {
            let lvalue = self.resolve_lvalue(pc)?;
            if self.pass == Pass::Interpret {
                let value = self.next_datum()?;
                self.store(&lvalue, value)?;
            }
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                _ => return Ok(()),
            }
        }
    }

    fn st_restore(&mut self, pc: &mut Pc) -> Result<()> {
        if self.at_line_number(*pc) {
            let number = self.line_number(pc)?;
            match self.pass {
                Pass::Interpret => {
                    let target = self.program.line_pc(number)?;
                    self.data_index = self.program.data_index_at(target.line);
                    self.data_pos = None;
                }
                Pass::Compile => {
                    self.program.line_pc(number)?;
                }
                Pass::Declare => {}
            }
        } else if self.pass == Pass::Interpret {
            self.data_index = 0;
            self.data_pos = None;
        }
        Ok(())
    }

    fn st_input(&mut self, pc: &mut Pc) -> Result<()> {
        // A comma right after INPUT turns off the terminal's
        // capitalization of typed letters.
        let mut caps = true;
        if let Some(Token::Comma) = self.token(*pc) {
            pc.advance();
            caps = false;
        }
        let mut prompt = String::from("? ");
        if let Some(Token::Literal(Literal::String(text))) = self.token(*pc) {
            let text = text.clone();
            pc.advance();
            match self.token(*pc) {
                Some(Token::Semicolon) => {
                    pc.advance();
                    prompt = format!("{}? ", text);
                }
                Some(Token::Comma) => {
                    pc.advance();
                    prompt = text;
                }
                _ => return Err(error!(SyntaxError; "EXPECTED ; OR ,")),
            }
        }
        let mut lvalues = Vec::new();
        loop {
            lvalues.push(self.resolve_lvalue(pc)?);
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                _ => break,
            }
        }
        if self.pass != Pass::Interpret {
            return Ok(());
        }
        let reply = self.console_input(&prompt, caps)?;
        let fields: Vec<&str> = reply.splitn(lvalues.len(), ',').collect();
        if fields.len() < lvalues.len() {
            return Err(error!(BadConversion; "NOT ENOUGH INPUT"));
        }
        for (lvalue, field) in lvalues.iter().zip(fields) {
            let field = field.trim();
            let value = match self.lvalue_type(lvalue)? {
                Type::String => Value::String(field.to_string()),
                Type::Integer => match field.parse::<i64>() {
                    Ok(n) => Value::Integer(n),
                    Err(_) => return Err(error!(BadConversion)),
                },
                _ => match field.parse::<f64>() {
                    Ok(n) => Value::Real(n),
                    Err(_) => return Err(error!(BadConversion)),
                },
            };
            self.store(lvalue, value)?;
        }
        Ok(())
    }

    fn st_randomize(&mut self, pc: &mut Pc) -> Result<()> {
        let seed = self.evaluate(pc, None)?;
        if self.pass == Pass::Interpret {
            match seed {
                Value::Nil => self.reseed(None),
                value => self.reseed(Some(value.to_integer()?)),
            }
        }
        Ok(())
    }

    fn st_clear(&mut self) -> Result<()> {
        if self.pass == Pass::Interpret {
            self.global.clear_vars();
            self.data_index = 0;
            self.data_pos = None;
        }
        Ok(())
    }

    fn st_new(&mut self) -> Result<()> {
        if self.pass == Pass::Interpret {
            self.program.clear();
            self.global.clear();
            self.stack.clear();
            self.selects.clear();
            self.pending_elseif = None;
            self.data_index = 0;
            self.data_pos = None;
            self.on_error = None;
            self.last_error = None;
            return Err(error!(Halted));
        }
        Ok(())
    }

    fn st_run(&mut self, pc: &mut Pc) -> Result<()> {
        let start = if self.at_line_number(*pc) {
            let number = self.line_number(pc)?;
            match self.pass {
                Pass::Declare => None,
                _ => Some(self.program.line_pc(number)?),
            }
        } else {
            Some(self.program.first_pc())
        };
        match self.pass {
            Pass::Interpret => {
                if !self.program.is_runnable() {
                    if let Some(error) = self.program.stashed_error() {
                        return Err(error.clone());
                    }
                }
                match start {
                    Some(start) => {
                        self.run_request = Some(start);
                        Err(error!(Halted))
                    }
                    None => Err(error!(InternalError; "MISSING RUN TARGET")),
                }
            }
            _ => Ok(()),
        }
    }

    fn st_list(&mut self, pc: &mut Pc) -> Result<()> {
        let mut from = 0u16;
        let mut to = u16::max_value();
        let mut ranged = false;
        if self.at_line_number(*pc) {
            from = self.line_number(pc)?;
            to = from;
        }
        if let Some(Token::Operator(Operator::Minus)) = self.token(*pc) {
            pc.advance();
            ranged = true;
            to = u16::max_value();
        }
        if ranged && self.at_line_number(*pc) {
            to = self.line_number(pc)?;
        }
        if self.pass != Pass::Interpret {
            return Ok(());
        }
        let mut texts: Vec<String> = Vec::new();
        for line in self.program.lines() {
            if let Some(number) = line.number() {
                if number >= from && number <= to {
                    texts.push(format!("{}\n", line));
                }
            }
        }
        for text in texts {
            self.print_text(&text);
        }
        Ok(())
    }

    fn st_load(&mut self, pc: &mut Pc) -> Result<()> {
        let name = self.evaluate(pc, Some("FILENAME"))?;
        match self.pass {
            Pass::Interpret => {
                let name = name.into_string()?;
                let source = self.fetch_source(&name)?;
                self.program.clear();
                self.stack.clear();
                self.selects.clear();
                self.pending_elseif = None;
                self.data_index = 0;
                self.data_pos = None;
                self.on_error = None;
                self.last_error = None;
                for line in source.lines() {
                    self.program.load_str(line)?;
                }
                self.compile_program(true);
                Err(error!(Halted))
            }
            _ => {
                name.retype(Type::String)?;
                Ok(())
            }
        }
    }

    fn st_save(&mut self, pc: &mut Pc) -> Result<()> {
        let name = self.evaluate(pc, Some("FILENAME"))?;
        match self.pass {
            Pass::Interpret => {
                let name = name.into_string()?;
                let mut text = String::new();
                for line in self.program.lines() {
                    text.push_str(&format!("{}\n", line));
                }
                self.save_source(&name, &text)
            }
            _ => {
                name.retype(Type::String)?;
                Ok(())
            }
        }
    }
}
