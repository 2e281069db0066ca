use super::builtin::BuiltinDef;
use super::{Pc, Type, Value, Var};
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Default type of an identifier, decided by its sigil.
pub fn ident_type(ident: &Ident) -> Type {
    match ident {
        Ident::Plain(_) => Type::Real,
        Ident::String(_) => Type::String,
        Ident::Integer(_) => Type::Integer,
    }
}

/// A name binding. BASIC keeps scalars and arrays in separate
/// namespaces, so `A` and `A(1)` may both exist.
#[derive(Debug)]
pub enum Symbol {
    Var(Var),
    Array { var: Var, dimensioned: bool },
    Builtin(Vec<BuiltinDef>),
    Function(FuncDef),
}

/// Compiled shape of a user FUNCTION or SUB. `ret` is None for a
/// SUB, whose calls produce Void.
#[derive(Debug, Clone)]
pub struct FuncDef {
    pub ret: Option<Type>,
    pub params: Vec<(Rc<str>, Type)>,
    pub locals: Vec<(Rc<str>, Type)>,
    pub body: Pc,
    pub end: Pc,
}

#[derive(Debug, Default)]
struct NameSlots {
    scalar: Option<Symbol>,
    indexed: Option<Symbol>,
}

/// ## Global symbol table
///
/// Whether a lookup wants the scalar or the indexed slot is decided
/// by the token after the identifier: a `(` selects the indexed
/// slot, falling back to a callable in the scalar slot since call
/// and subscript syntax look alike. Built-in overloads for one name
/// form a chain tried in registration order.

#[derive(Debug)]
pub struct Global {
    symbols: HashMap<Rc<str>, NameSlots>,
    base: usize,
}

impl Global {
    pub fn new() -> Global {
        let mut global = Global {
            symbols: HashMap::new(),
            base: 0,
        };
        super::builtin::register(&mut global);
        global
    }

    pub fn clear(&mut self) {
        *self = Global::new();
    }

    /// Drop variables and arrays, keeping callables. OPTION BASE
    /// survives since redimensioning uses it.
    pub fn clear_vars(&mut self) {
        for slots in self.symbols.values_mut() {
            if let Some(Symbol::Var(_)) = slots.scalar {
                slots.scalar = None;
            }
            if let Some(Symbol::Array { .. }) = slots.indexed {
                slots.indexed = None;
            }
        }
    }

    /// Drop user FUNCTION and SUB symbols so a fresh DECLARE pass
    /// can re-declare them without tripping duplicate detection.
    pub fn clear_functions(&mut self) {
        for slots in self.symbols.values_mut() {
            if let Some(Symbol::Function(_)) = slots.scalar {
                slots.scalar = None;
            }
        }
    }

    pub fn find(&self, name: &str, paren: bool) -> Option<&Symbol> {
        let slots = self.symbols.get(name)?;
        if paren {
            if slots.indexed.is_some() {
                return slots.indexed.as_ref();
            }
            match slots.scalar {
                Some(Symbol::Builtin(_)) | Some(Symbol::Function(_)) => slots.scalar.as_ref(),
                _ => None,
            }
        } else {
            slots.scalar.as_ref()
        }
    }

    fn reserved(&self, name: &str) -> bool {
        match self.symbols.get(name) {
            Some(slots) => matches!(slots.scalar, Some(Symbol::Builtin(_))),
            None => false,
        }
    }

    /// Declare a global scalar. Idempotent across passes; only a
    /// conflicting kind is an error.
    pub fn declare_var(&mut self, ident: &Ident) -> Result<()> {
        if self.reserved(ident.name()) {
            return Err(error!(Redeclaration; "RESERVED FOR BUILT-IN"));
        }
        let ty = ident_type(ident);
        let slots = self.symbols.entry(Rc::from(ident.name())).or_default();
        match slots.scalar {
            None => {
                slots.scalar = Some(Symbol::Var(Var::scalar(ty)));
                Ok(())
            }
            Some(Symbol::Var(_)) => Ok(()),
            Some(_) => Err(error!(Redeclaration)),
        }
    }

    /// Declare a global array of known arity. Storage is not
    /// allocated until DIM executes or the first element is
    /// touched.
    pub fn declare_array(&mut self, ident: &Ident, arity: usize) -> Result<()> {
        if self.reserved(ident.name()) {
            return Err(error!(Redeclaration; "RESERVED FOR BUILT-IN"));
        }
        let ty = ident_type(ident);
        let base = self.base;
        let slots = self.symbols.entry(Rc::from(ident.name())).or_default();
        match &slots.indexed {
            None => {
                let placeholder = Var::array(ty, base, &vec![base as i64; arity])?;
                slots.indexed = Some(Symbol::Array {
                    var: placeholder,
                    dimensioned: false,
                });
                Ok(())
            }
            Some(Symbol::Array { var, .. }) => {
                if var.dimensions() == arity {
                    Ok(())
                } else {
                    Err(error!(SubscriptOutOfRange))
                }
            }
            Some(_) => Err(error!(Redeclaration)),
        }
    }

    /// Give a declared array its real geometry. Executing DIM over
    /// storage that already exists is an error.
    pub fn dimension_array(&mut self, name: &str, bounds: &[i64]) -> Result<()> {
        let base = self.base;
        match self.symbols.get_mut(name).and_then(|s| s.indexed.as_mut()) {
            Some(Symbol::Array { var, dimensioned }) => {
                if *dimensioned {
                    return Err(error!(RedimensionedArray));
                }
                *var = Var::array(var.ty(), base, bounds)?;
                *dimensioned = true;
                Ok(())
            }
            _ => Err(error!(InternalError; "UNDECLARED ARRAY")),
        }
    }

    pub fn declare_function(&mut self, ident: &Ident, def: FuncDef) -> Result<()> {
        if self.reserved(ident.name()) {
            return Err(error!(Redeclaration; "RESERVED FOR BUILT-IN"));
        }
        let slots = self.symbols.entry(Rc::from(ident.name())).or_default();
        match slots.scalar {
            None => {
                slots.scalar = Some(Symbol::Function(def));
                Ok(())
            }
            Some(_) => Err(error!(Redeclaration)),
        }
    }

    pub fn function(&self, name: &str) -> Result<&FuncDef> {
        match self.symbols.get(name).and_then(|s| s.scalar.as_ref()) {
            Some(Symbol::Function(def)) => Ok(def),
            _ => Err(error!(UndeclaredIdentifier)),
        }
    }

    pub fn function_mut(&mut self, name: &str) -> Result<&mut FuncDef> {
        match self.symbols.get_mut(name).and_then(|s| s.scalar.as_mut()) {
            Some(Symbol::Function(def)) => Ok(def),
            _ => Err(error!(UndeclaredIdentifier)),
        }
    }

    pub fn var(&self, name: &str) -> Result<&Var> {
        match self.symbols.get(name).and_then(|s| s.scalar.as_ref()) {
            Some(Symbol::Var(var)) => Ok(var),
            _ => Err(error!(UndeclaredIdentifier)),
        }
    }

    pub fn var_mut(&mut self, name: &str) -> Result<&mut Var> {
        match self.symbols.get_mut(name).and_then(|s| s.scalar.as_mut()) {
            Some(Symbol::Var(var)) => Ok(var),
            _ => Err(error!(UndeclaredIdentifier)),
        }
    }

    /// Array storage for element access. An array that was never
    /// explicitly dimensioned materializes here with bounds of 10
    /// per dimension.
    pub fn array_mut(&mut self, name: &str) -> Result<&mut Var> {
        let base = self.base;
        match self.symbols.get_mut(name).and_then(|s| s.indexed.as_mut()) {
            Some(Symbol::Array { var, dimensioned }) => {
                if !*dimensioned {
                    *var = Var::array(var.ty(), base, &vec![10; var.dimensions()])?;
                    *dimensioned = true;
                }
                Ok(var)
            }
            _ => Err(error!(UndeclaredIdentifier)),
        }
    }

    pub fn set_base(&mut self, base: i64) -> Result<()> {
        if base == 0 || base == 1 {
            self.base = base as usize;
            Ok(())
        } else {
            Err(error!(IllegalFunctionCall))
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub(crate) fn builtin(&mut self, name: &str, def: BuiltinDef) {
        let slots = self.symbols.entry(Rc::from(name)).or_default();
        match &mut slots.scalar {
            Some(Symbol::Builtin(chain)) => chain.push(def),
            None => slots.scalar = Some(Symbol::Builtin(vec![def])),
            Some(_) => debug_assert!(false, "builtin name in use"),
        }
    }
}

impl Default for Global {
    fn default() -> Self {
        Global::new()
    }
}
