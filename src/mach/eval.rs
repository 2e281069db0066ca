use super::builtin::BuiltinDef;
use super::frame::FrameKind;
use super::global::{ident_type, FuncDef, Symbol};
use super::runtime::Runtime;
use super::{Pass, Pc, Type, Value, Var};
use crate::error;
use crate::lang::{Error, Token};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Recursion guard for user function calls. Each call nests the
/// interpreter, so the limit keeps runaway recursion on the BASIC
/// stack instead of the host stack.
const MAX_CALL_DEPTH: usize = 256;

/// A resolved assignment target. Carries enough to reach storage
/// later, so the right-hand side can be evaluated before the store
/// happens. During DECLARE and COMPILE no storage exists; `store`
/// then only checks the value against the declared type.
#[derive(Debug)]
pub enum Lvalue {
    Global(Rc<str>),
    Element(Rc<str>, Vec<i64>),
    Local(usize),
    Ret,
}

impl Runtime {
    /// Evaluate one expression starting at `pc`, advancing it past
    /// the consumed tokens. When no expression is present, a
    /// description makes that an error naming what was expected;
    /// without one absence is fine and yields Nil. On failure `pc`
    /// is left at the start of the failing subexpression.
    pub(super) fn evaluate(
        &mut self,
        pc: &mut Pc,
        description: Option<&'static str>,
    ) -> Result<Value> {
        let present = match self.token(*pc) {
            Some(token) => token.is_expression_start(),
            None => false,
        };
        if !present {
            return match description {
                Some(what) => Err(error!(MissingExpression; what)),
                None => Ok(Value::Nil),
            };
        }
        self.expression(pc, 0)
    }

    /// Precedence climbing. Folds binary operators of at least
    /// `floor` priority; the right operand climbs one level higher,
    /// except for right-associative operators.
    fn expression(&mut self, pc: &mut Pc, floor: u8) -> Result<Value> {
        let start = *pc;
        let mut lhs = self.operand(pc)?;
        loop {
            let op = match self.token(*pc) {
                Some(Token::Operator(op)) => *op,
                _ => break,
            };
            let priority = match op.binary_priority() {
                Some(priority) if priority >= floor => priority,
                _ => break,
            };
            pc.advance();
            let climb = if op.right_associative() {
                priority
            } else {
                priority + 1
            };
            let rhs = self.expression(pc, climb)?;
            lhs = match lhs.binary(op, rhs, self.calc()) {
                Ok(value) => value,
                Err(error) => {
                    *pc = start;
                    return Err(error);
                }
            };
        }
        Ok(lhs)
    }

    /// A primary expression with any prefix operators applied.
    fn operand(&mut self, pc: &mut Pc) -> Result<Value> {
        let start = *pc;
        if let Some(Token::Operator(op)) = self.token(*pc) {
            let op = *op;
            if let Some(priority) = op.unary_priority() {
                pc.advance();
                let value = self.expression(pc, priority + 1)?;
                return match value.unary(op, self.calc()) {
                    Ok(value) => Ok(value),
                    Err(error) => {
                        *pc = start;
                        Err(error)
                    }
                };
            }
        }
        self.primary(pc)
    }

    fn primary(&mut self, pc: &mut Pc) -> Result<Value> {
        let start = *pc;
        match self.token(*pc).cloned() {
            Some(Token::Literal(literal)) => {
                pc.advance();
                Ok(Value::from(&literal))
            }
            Some(Token::LParen) => {
                pc.advance();
                let value = self.expression(pc, 0)?;
                match self.token(*pc) {
                    Some(Token::RParen) => {
                        pc.advance();
                        Ok(value)
                    }
                    _ => {
                        *pc = start;
                        Err(error!(SyntaxError; "EXPECTED )"))
                    }
                }
            }
            Some(Token::Ident(_)) => self.identifier(pc),
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    /// An identifier used as a value: local slot, global scalar,
    /// array element, or a call. Locals win over globals, except
    /// that calling the enclosing function's own name is recursion.
    /// A Void result is rejected here since a SUB call is not a
    /// value; the cursor moves back to the identifier.
    fn identifier(&mut self, pc: &mut Pc) -> Result<Value> {
        let start = *pc;
        let ident = match self.token(*pc) {
            Some(Token::Ident(ident)) => ident.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        };
        pc.advance();
        let paren = matches!(self.token(*pc), Some(Token::LParen));
        if let Some(scope) = self.scopes.last().cloned() {
            if !paren && &*scope == ident.name() {
                let def = self.global.function(&scope)?.clone();
                return match def.ret {
                    Some(ty) => match self.pass {
                        Pass::Interpret => Ok(self.stack.ret_mut()?.value()?.clone()),
                        _ => Ok(ty.zero()),
                    },
                    None => {
                        *pc = start;
                        Err(error!(VoidValue))
                    }
                };
            }
            if !paren {
                let def = self.global.function(&scope)?.clone();
                if let Some((index, ty)) = Self::scope_slot(&def, ident.name()) {
                    return match self.pass {
                        Pass::Interpret => Ok(self.stack.local(index)?.value()?.clone()),
                        _ => Ok(ty.zero()),
                    };
                }
            }
        }
        match self.global.find(ident.name(), paren) {
            None => match self.pass {
                Pass::Declare => {
                    // Possibly a function declared further down;
                    // the COMPILE pass settles it.
                    if paren {
                        self.arguments(pc, "ARGUMENT")?;
                    }
                    Ok(ident_type(&ident).zero())
                }
                _ => {
                    *pc = start;
                    Err(error!(UndeclaredIdentifier))
                }
            },
            Some(Symbol::Var(var)) => match self.pass {
                Pass::Interpret => Ok(var.value()?.clone()),
                _ => Ok(var.ty().zero()),
            },
            Some(Symbol::Array { var, .. }) => {
                let ty = var.ty();
                let dimensions = var.dimensions();
                let subscripts = self.arguments(pc, "SUBSCRIPT")?;
                if subscripts.is_empty() {
                    *pc = start;
                    return Err(error!(SyntaxError; "EXPECTED SUBSCRIPT"));
                }
                if subscripts.len() != dimensions {
                    *pc = start;
                    return Err(error!(SubscriptOutOfRange));
                }
                match self.pass {
                    Pass::Interpret => {
                        let mut indexes = Vec::with_capacity(subscripts.len());
                        for value in subscripts {
                            indexes.push(value.to_integer()?);
                        }
                        let var = self.global.array_mut(ident.name())?;
                        match var.offset(&indexes) {
                            Ok(offset) => Ok(var.value_at(offset)?.clone()),
                            Err(error) => {
                                *pc = start;
                                Err(error)
                            }
                        }
                    }
                    _ => {
                        for value in subscripts {
                            if let Err(error) = value.retype(Type::Integer) {
                                *pc = start;
                                return Err(error);
                            }
                        }
                        Ok(ty.zero())
                    }
                }
            }
            Some(Symbol::Builtin(chain)) => {
                let chain = chain.clone();
                self.call_builtin(pc, start, &chain, paren)
            }
            Some(Symbol::Function(def)) => {
                let def = def.clone();
                let value = self.call_user(pc, start, ident.name(), &def, paren)?;
                match value {
                    Value::Void => {
                        *pc = start;
                        Err(error!(VoidValue))
                    }
                    value => Ok(value),
                }
            }
        }
    }

    /// Explicit call syntax, for the CALL statement. Unlike an
    /// expression, a Void result is welcome here.
    pub(super) fn call_function(&mut self, pc: &mut Pc) -> Result<Value> {
        let start = *pc;
        let ident = match self.token(*pc) {
            Some(Token::Ident(ident)) => ident.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED SUB OR FUNCTION")),
        };
        pc.advance();
        let paren = matches!(self.token(*pc), Some(Token::LParen));
        match self.global.find(ident.name(), paren) {
            Some(Symbol::Builtin(chain)) => {
                let chain = chain.clone();
                self.call_builtin(pc, start, &chain, paren)
            }
            Some(Symbol::Function(def)) => {
                let def = def.clone();
                self.call_user(pc, start, ident.name(), &def, paren)
            }
            None => match self.pass {
                Pass::Declare => {
                    if paren {
                        self.arguments(pc, "ARGUMENT")?;
                    }
                    Ok(Value::Void)
                }
                _ => {
                    *pc = start;
                    Err(error!(UndeclaredIdentifier))
                }
            },
            Some(_) => {
                *pc = start;
                Err(error!(TypeMismatch; "NOT CALLABLE"))
            }
        }
    }

    /// Parse a parenthesized, comma-separated expression list.
    /// `pc` must sit on the opening parenthesis.
    pub(super) fn arguments(&mut self, pc: &mut Pc, what: &'static str) -> Result<Vec<Value>> {
        let start = *pc;
        debug_assert!(matches!(self.token(*pc), Some(Token::LParen)));
        pc.advance();
        let mut values = Vec::new();
        if let Some(Token::RParen) = self.token(*pc) {
            pc.advance();
            return Ok(values);
        }
        loop {
            values.push(self.evaluate(pc, Some(what))?);
            match self.token(*pc) {
                Some(Token::Comma) => pc.advance(),
                Some(Token::RParen) => {
                    pc.advance();
                    return Ok(values);
                }
                _ => {
                    *pc = start;
                    return Err(error!(SyntaxError; "EXPECTED )"));
                }
            }
        }
    }

    /// Pick from an overload chain. A candidate whose parameter
    /// types equal the argument types exactly wins outright, so a
    /// chain can keep Integer and Real renditions apart; otherwise
    /// the first candidate the arguments convert to is used, tried
    /// in registration order. The last candidate's complaint stands
    /// for the whole chain.
    fn select_overload(chain: &[BuiltinDef], args: &[Value]) -> Result<BuiltinDef> {
        let exact = chain.iter().find(|def| {
            def.params.len() == args.len()
                && args
                    .iter()
                    .zip(def.params.iter())
                    .all(|(value, ty)| value.ty() == *ty)
        });
        if let Some(def) = exact {
            return Ok(*def);
        }
        for (i, def) in chain.iter().enumerate() {
            match Self::overload_mismatch(def, args) {
                None => return Ok(*def),
                Some(error) => {
                    if i + 1 == chain.len() {
                        return Err(error);
                    }
                }
            }
        }
        Err(error!(InternalError; "EMPTY OVERLOAD CHAIN"))
    }

    fn overload_mismatch(def: &BuiltinDef, args: &[Value]) -> Option<Error> {
        if args.len() < def.params.len() {
            return Some(error!(IllegalFunctionCall; "TOO FEW ARGUMENTS"));
        }
        if args.len() > def.params.len() {
            return Some(error!(IllegalFunctionCall; "TOO MANY ARGUMENTS"));
        }
        for (value, ty) in args.iter().zip(def.params.iter()) {
            if !converts(value.ty(), *ty) {
                return Some(error!(TypeMismatch));
            }
        }
        None
    }

    fn call_builtin(
        &mut self,
        pc: &mut Pc,
        start: Pc,
        chain: &[BuiltinDef],
        paren: bool,
    ) -> Result<Value> {
        let args = if paren {
            self.arguments(pc, "ARGUMENT")?
        } else {
            Vec::new()
        };
        let def = match Self::select_overload(chain, &args) {
            Ok(def) => def,
            Err(error) => {
                *pc = start;
                return Err(error);
            }
        };
        if self.pass != Pass::Interpret {
            return Ok(def.ret.zero());
        }
        let mut retyped = Vec::with_capacity(args.len());
        for (value, ty) in args.into_iter().zip(def.params.iter()) {
            retyped.push(value.retype(*ty)?);
        }
        (def.call)(self, retyped)
    }

    /// Call a user FUNCTION or SUB. Pushes the return slot and one
    /// slot per argument as the argument list parses; every push is
    /// undone exactly once whether the call completes, fails in the
    /// body, or is abandoned by a parse error mid-argument-list.
    fn call_user(
        &mut self,
        pc: &mut Pc,
        start: Pc,
        name: &str,
        def: &FuncDef,
        paren: bool,
    ) -> Result<Value> {
        if self.depth >= MAX_CALL_DEPTH {
            *pc = start;
            return Err(error!(OutOfMemory; "CALL TOO DEEP"));
        }
        self.check_runnable(start)?;
        let mark = self.stack.len();
        if let Err(error) = self.push_call_args(pc, start, def, paren) {
            self.stack.truncate(mark);
            return Err(error);
        }
        if self.pass != Pass::Interpret {
            self.stack.truncate(mark);
            return Ok(match def.ret {
                Some(ty) => ty.zero(),
                None => Value::Void,
            });
        }
        let on_error = self.on_error.take();
        if let Err(error) = self.stack.push_frame(
            FrameKind::Call,
            *pc,
            mark,
            def.params.len(),
            def.ret,
            on_error,
        ) {
            self.stack.truncate(mark);
            return Err(error);
        }
        self.depth += 1;
        self.scopes.push(Rc::from(name));
        let run = self.run_body(def);
        self.scopes.pop();
        self.depth -= 1;
        match (run, self.stack.func_return()) {
            (Ok(()), Ok((value, frame))) => {
                self.on_error = frame.on_error;
                Ok(value)
            }
            (Err(error), Ok((_, frame))) => {
                self.on_error = frame.on_error;
                Err(error)
            }
            (Err(error), Err(_)) | (Ok(()), Err(error)) => Err(error),
        }
    }

    fn push_call_args(
        &mut self,
        pc: &mut Pc,
        start: Pc,
        def: &FuncDef,
        paren: bool,
    ) -> Result<()> {
        if let Some(ty) = def.ret {
            self.stack.push_arg(Var::scalar(ty))?;
        }
        if !paren {
            if def.params.is_empty() {
                return Ok(());
            }
            *pc = start;
            return Err(error!(IllegalFunctionCall; "TOO FEW ARGUMENTS"));
        }
        pc.advance();
        let mut count = 0;
        if let Some(Token::RParen) = self.token(*pc) {
            pc.advance();
        } else {
            loop {
                if count == def.params.len() {
                    *pc = start;
                    return Err(error!(IllegalFunctionCall; "TOO MANY ARGUMENTS"));
                }
                let value = self.evaluate(pc, Some("ARGUMENT"))?;
                let mut var = Var::scalar(def.params[count].1);
                if let Err(error) = var.assign(value) {
                    *pc = start;
                    return Err(error);
                }
                self.stack.push_arg(var)?;
                count += 1;
                match self.token(*pc) {
                    Some(Token::Comma) => pc.advance(),
                    Some(Token::RParen) => {
                        pc.advance();
                        break;
                    }
                    _ => {
                        *pc = start;
                        return Err(error!(SyntaxError; "EXPECTED )"));
                    }
                }
            }
        }
        if count < def.params.len() {
            *pc = start;
            return Err(error!(IllegalFunctionCall; "TOO FEW ARGUMENTS"));
        }
        Ok(())
    }

    /// Run a function body with its frame already on the stack.
    /// Statements execute until the END FUNCTION position; an armed
    /// error handler inside the body catches failures here.
    fn run_body(&mut self, def: &FuncDef) -> Result<()> {
        for (_, ty) in &def.locals {
            self.stack.push_arg(Var::scalar(*ty))?;
        }
        let mut pc = def.body;
        loop {
            if pc == def.end {
                return Ok(());
            }
            if self.program.end_of_line(pc) {
                pc = Pc::new(pc.line + 1, 0);
                if !self.program.line_exists(pc.line) {
                    return Err(error!(StrayFunction));
                }
                continue;
            }
            self.interrupt_check()?;
            if let Err(error) = self.statement(&mut pc) {
                if error.is_break() || error.is_halted() {
                    return Err(error);
                }
                let error = if error.is_direct() {
                    error.in_line_number(self.program.line_number(pc))
                } else {
                    error
                };
                match self.on_error.take() {
                    Some(handler) => {
                        self.last_error = Some(error);
                        pc = handler;
                    }
                    None => return Err(error),
                }
            }
        }
    }

    /// Resolve an assignment target. INTERPRET validates subscripts
    /// against the array geometry here, before any store; the
    /// compile passes only check that subscripts are numeric.
    pub(super) fn resolve_lvalue(&mut self, pc: &mut Pc) -> Result<Lvalue> {
        let start = *pc;
        let ident = match self.token(*pc) {
            Some(Token::Ident(ident)) => ident.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        pc.advance();
        let paren = matches!(self.token(*pc), Some(Token::LParen));
        if let Some(scope) = self.scopes.last().cloned() {
            if !paren {
                let def = self.global.function(&scope)?.clone();
                if &*scope == ident.name() {
                    return match def.ret {
                        Some(_) => Ok(Lvalue::Ret),
                        None => {
                            *pc = start;
                            Err(error!(TypeMismatch; "SUB HAS NO RETURN VALUE"))
                        }
                    };
                }
                if let Some((index, _)) = Self::scope_slot(&def, ident.name()) {
                    return Ok(Lvalue::Local(index));
                }
            }
        }
        if !paren {
            self.global.declare_var(&ident)?;
            return Ok(Lvalue::Global(Rc::from(ident.name())));
        }
        let subscripts = self.arguments(pc, "SUBSCRIPT")?;
        if subscripts.is_empty() {
            *pc = start;
            return Err(error!(SyntaxError; "EXPECTED SUBSCRIPT"));
        }
        if let Err(error) = self.global.declare_array(&ident, subscripts.len()) {
            *pc = start;
            return Err(error);
        }
        match self.pass {
            Pass::Interpret => {
                let mut indexes = Vec::with_capacity(subscripts.len());
                for value in subscripts {
                    indexes.push(value.to_integer()?);
                }
                let name: Rc<str> = Rc::from(ident.name());
                let var = self.global.array_mut(&name)?;
                if let Err(error) = var.offset(&indexes) {
                    *pc = start;
                    return Err(error);
                }
                Ok(Lvalue::Element(name, indexes))
            }
            _ => {
                for value in subscripts {
                    if let Err(error) = value.retype(Type::Integer) {
                        *pc = start;
                        return Err(error);
                    }
                }
                Ok(Lvalue::Element(Rc::from(ident.name()), Vec::new()))
            }
        }
    }

    /// Store through a resolved target. DECLARE stores nothing,
    /// COMPILE checks the value against the declared type, and
    /// INTERPRET writes into live storage.
    pub(super) fn store(&mut self, lvalue: &Lvalue, value: Value) -> Result<()> {
        match self.pass {
            Pass::Declare => Ok(()),
            Pass::Compile => {
                value.retype(self.lvalue_type(lvalue)?)?;
                Ok(())
            }
            Pass::Interpret => match lvalue {
                Lvalue::Global(name) => self.global.var_mut(name)?.assign(value),
                Lvalue::Element(name, subscripts) => {
                    let var = self.global.array_mut(name)?;
                    let offset = var.offset(subscripts)?;
                    var.assign_at(offset, value)
                }
                Lvalue::Local(index) => self.stack.local_mut(*index)?.assign(value),
                Lvalue::Ret => self.stack.ret_mut()?.assign(value),
            },
        }
    }

    pub(super) fn fetch(&mut self, lvalue: &Lvalue) -> Result<Value> {
        match self.pass {
            Pass::Interpret => match lvalue {
                Lvalue::Global(name) => Ok(self.global.var(name)?.value()?.clone()),
                Lvalue::Element(name, subscripts) => {
                    let var = self.global.array_mut(name)?;
                    let offset = var.offset(subscripts)?;
                    Ok(var.value_at(offset)?.clone())
                }
                Lvalue::Local(index) => Ok(self.stack.local(*index)?.value()?.clone()),
                Lvalue::Ret => Ok(self.stack.ret_mut()?.value()?.clone()),
            },
            _ => Ok(self.lvalue_type(lvalue)?.zero()),
        }
    }

    pub(super) fn lvalue_type(&self, lvalue: &Lvalue) -> Result<Type> {
        match lvalue {
            Lvalue::Global(name) => Ok(self.global.var(name)?.ty()),
            Lvalue::Element(name, _) => match self.global.find(name, true) {
                Some(Symbol::Array { var, .. }) => Ok(var.ty()),
                _ => Err(error!(UndeclaredIdentifier)),
            },
            Lvalue::Local(index) => {
                let scope = match self.scopes.last() {
                    Some(scope) => scope,
                    None => return Err(error!(InternalError; "NO SCOPE")),
                };
                let def = self.global.function(scope)?;
                match def.params.iter().chain(def.locals.iter()).nth(*index) {
                    Some((_, ty)) => Ok(*ty),
                    None => Err(error!(InternalError; "BAD LOCAL SLOT")),
                }
            }
            Lvalue::Ret => {
                let scope = match self.scopes.last() {
                    Some(scope) => scope,
                    None => return Err(error!(InternalError; "NO SCOPE")),
                };
                match self.global.function(scope)?.ret {
                    Some(ty) => Ok(ty),
                    None => Err(error!(TypeMismatch; "SUB HAS NO RETURN VALUE")),
                }
            }
        }
    }

    /// Frame slot index and declared type for a parameter or local
    /// name. Parameters come first, matching the frame layout.
    fn scope_slot(def: &FuncDef, name: &str) -> Option<(usize, Type)> {
        def.params
            .iter()
            .chain(def.locals.iter())
            .enumerate()
            .find(|(_, (n, _))| &**n == name)
            .map(|(index, (_, ty))| (index, *ty))
    }
}

fn converts(from: Type, to: Type) -> bool {
    if from == to {
        return true;
    }
    matches!(
        (from, to),
        (Type::Integer, Type::Real) | (Type::Real, Type::Integer)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Line;

    // The leading colon keeps a digit-leading expression from
    // lexing as a line number; the cursor starts just past it.
    fn eval(source: &str) -> Result<Value> {
        let mut runtime = Runtime::new();
        runtime.pass = Pass::Interpret;
        runtime.program.enter(Line::from_str(&format!(": {}", source)));
        let mut pc = runtime.program.direct_pc();
        pc.advance();
        runtime.evaluate(&mut pc, Some("TEST"))
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), Value::Integer(14));
        assert_eq!(eval("10 - 3 - 2").unwrap(), Value::Integer(5));
        assert_eq!(eval("(2 + 3) * 4").unwrap(), Value::Integer(20));
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(eval("2 ^ 3 ^ 2").unwrap(), Value::Integer(512));
        assert_eq!(eval("-2 ^ 2").unwrap(), Value::Integer(-4));
    }

    #[test]
    fn test_unary_and_relational() {
        assert_eq!(eval("NOT 1 = 2").unwrap(), Value::Integer(-1));
        assert_eq!(eval("1 < 2 AND 2 < 3").unwrap(), Value::Integer(-1));
        assert_eq!(eval("- - 3").unwrap(), Value::Integer(3));
    }

    #[test]
    fn test_string_concat() {
        assert_eq!(
            eval("\"AB\" + \"CD\"").unwrap(),
            Value::String("ABCD".to_string())
        );
    }

    #[test]
    fn test_division_by_zero() {
        let error = eval("5 / 0").unwrap_err();
        assert_eq!(error.code(), crate::lang::ErrorCode::DivisionByZero as u16);
    }

    #[test]
    fn test_missing_expression() {
        let error = eval("").unwrap_err();
        assert_eq!(
            error.code(),
            crate::lang::ErrorCode::MissingExpression as u16
        );
        assert_eq!(error.to_string(), "MISSING EXPRESSION; TEST");
    }

    #[test]
    fn test_absent_expression_is_nil() {
        let mut runtime = Runtime::new();
        runtime.pass = Pass::Interpret;
        runtime.program.enter(Line::from_str(""));
        let mut pc = runtime.program.direct_pc();
        assert_eq!(runtime.evaluate(&mut pc, None).unwrap(), Value::Nil);
    }

    #[test]
    fn test_missing_paren_restores_cursor() {
        let mut runtime = Runtime::new();
        runtime.pass = Pass::Interpret;
        runtime.program.enter(Line::from_str("(1 + 2"));
        let mut pc = runtime.program.direct_pc();
        let start = pc;
        assert!(runtime.evaluate(&mut pc, Some("TEST")).is_err());
        assert_eq!(pc, start);
    }

    #[test]
    fn test_undeclared_identifier() {
        let error = eval("NOWHERE").unwrap_err();
        assert_eq!(
            error.code(),
            crate::lang::ErrorCode::UndeclaredIdentifier as u16
        );
    }

    #[test]
    fn test_builtin_overload_arity() {
        // One and two argument forms both exist; three is reported
        // against the last overload in the chain.
        assert_eq!(eval("INSTR(\"HELLO\", \"LL\")").unwrap(), Value::Integer(3));
        let error = eval("ABS(1, 2)").unwrap_err();
        assert_eq!(
            error.code(),
            crate::lang::ErrorCode::IllegalFunctionCall as u16
        );
    }

    #[test]
    fn test_non_calc_type_checks_without_computing() {
        let mut runtime = Runtime::new();
        runtime.pass = Pass::Compile;
        runtime.program.enter(Line::from_str(": 5 / 0 + 1"));
        let mut pc = runtime.program.direct_pc();
        pc.advance();
        // No divide check without calc, but the type is still Real.
        assert_eq!(
            runtime.evaluate(&mut pc, Some("TEST")).unwrap(),
            Value::Real(0.0)
        );
        runtime.program.enter(Line::from_str("\"A\" * 2"));
        let mut pc = runtime.program.direct_pc();
        assert!(runtime.evaluate(&mut pc, Some("TEST")).is_err());
    }
}
