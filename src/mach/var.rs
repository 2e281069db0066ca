use super::{Type, Value};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

const MAX_ELEMENTS: usize = 1 << 20;

/// ## Variable storage
///
/// A scalar is a `Var` with no geometry and a single element. An
/// array has per-dimension bounds and a flat row-major element
/// buffer. Elements hold the variable's declared type; assignment
/// retypes the incoming value or fails with TYPE MISMATCH.

#[derive(Debug, Clone)]
pub struct Var {
    ty: Type,
    base: usize,
    geometry: Vec<usize>,
    values: Vec<Value>,
}

impl Var {
    pub fn scalar(ty: Type) -> Var {
        Var {
            ty,
            base: 0,
            geometry: vec![],
            values: vec![ty.zero()],
        }
    }

    /// An array over inclusive upper bounds, `base..=bound` valid
    /// per dimension. `DIM A(5)` under OPTION BASE 0 holds six
    /// elements.
    pub fn array(ty: Type, base: usize, bounds: &[i64]) -> Result<Var> {
        debug_assert!(base <= 1);
        if bounds.is_empty() {
            return Err(error!(SubscriptOutOfRange));
        }
        let mut geometry: Vec<usize> = Vec::with_capacity(bounds.len());
        let mut size: usize = 1;
        for bound in bounds {
            if *bound < base as i64 {
                return Err(error!(SubscriptOutOfRange));
            }
            let extent = *bound as usize - base + 1;
            geometry.push(*bound as usize);
            size = match size.checked_mul(extent) {
                Some(s) if s <= MAX_ELEMENTS => s,
                _ => return Err(error!(OutOfMemory; "ARRAY TOO LARGE")),
            };
        }
        Ok(Var {
            ty,
            base,
            geometry,
            values: vec![ty.zero(); size],
        })
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn is_array(&self) -> bool {
        !self.geometry.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.geometry.len()
    }

    /// Flat row-major offset of a subscript list, bounds checked
    /// against the geometry.
    pub fn offset(&self, subscripts: &[i64]) -> Result<usize> {
        if self.geometry.is_empty() || subscripts.len() != self.geometry.len() {
            return Err(error!(SubscriptOutOfRange));
        }
        let mut offset = 0;
        for (sub, bound) in subscripts.iter().zip(&self.geometry) {
            if *sub < self.base as i64 || *sub > *bound as i64 {
                return Err(error!(SubscriptOutOfRange));
            }
            let extent = bound - self.base + 1;
            offset = offset * extent + (*sub as usize - self.base);
        }
        Ok(offset)
    }

    pub fn value_at(&self, offset: usize) -> Result<&Value> {
        match self.values.get(offset) {
            Some(v) => Ok(v),
            None => Err(error!(InternalError; "VAR OFFSET")),
        }
    }

    pub fn value_at_mut(&mut self, offset: usize) -> Result<&mut Value> {
        match self.values.get_mut(offset) {
            Some(v) => Ok(v),
            None => Err(error!(InternalError; "VAR OFFSET")),
        }
    }

    pub fn assign_at(&mut self, offset: usize, value: Value) -> Result<()> {
        let value = value.retype(self.ty)?;
        *self.value_at_mut(offset)? = value;
        Ok(())
    }

    /// Scalar read.
    pub fn value(&self) -> Result<&Value> {
        self.value_at(0)
    }

    /// Scalar write, retyping to the declared type.
    pub fn assign(&mut self, value: Value) -> Result<()> {
        self.assign_at(0, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_scalar_retypes_on_assign() {
        let mut v = Var::scalar(Type::Integer);
        assert_eq!(*v.value().unwrap(), Value::Integer(0));
        v.assign(Value::Real(2.6)).unwrap();
        assert_eq!(*v.value().unwrap(), Value::Integer(3));
        let e = v.assign(Value::String("X".to_string())).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
    }

    #[test]
    fn test_array_bounds() {
        let mut a = Var::array(Type::Real, 0, &[5]).unwrap();
        a.assign_at(a.offset(&[5]).unwrap(), Value::Integer(1)).unwrap();
        let e = a.offset(&[6]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SubscriptOutOfRange as u16);
        let e = a.offset(&[-1]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SubscriptOutOfRange as u16);
    }

    #[test]
    fn test_option_base_one() {
        let a = Var::array(Type::Real, 1, &[3]).unwrap();
        assert!(a.offset(&[0]).is_err());
        assert_eq!(a.offset(&[1]).unwrap(), 0);
        assert_eq!(a.offset(&[3]).unwrap(), 2);
    }

    #[test]
    fn test_row_major_layout() {
        let mut a = Var::array(Type::Integer, 0, &[2, 3]).unwrap();
        for i in 0..=2 {
            for j in 0..=3 {
                let offset = a.offset(&[i, j]).unwrap();
                a.assign_at(offset, Value::Integer(i * 10 + j)).unwrap();
            }
        }
        assert_eq!(a.offset(&[0, 0]).unwrap(), 0);
        assert_eq!(a.offset(&[0, 3]).unwrap(), 3);
        assert_eq!(a.offset(&[1, 0]).unwrap(), 4);
        let offset = a.offset(&[2, 1]).unwrap();
        assert_eq!(*a.value_at(offset).unwrap(), Value::Integer(21));
    }

    #[test]
    fn test_arity_mismatch() {
        let a = Var::array(Type::Real, 0, &[5, 5]).unwrap();
        assert!(a.offset(&[1]).is_err());
        assert!(a.offset(&[1, 1, 1]).is_err());
        let s = Var::scalar(Type::Real);
        assert!(s.offset(&[0]).is_err());
    }

    #[test]
    fn test_too_large() {
        let e = Var::array(Type::Real, 0, &[i64::max_value()]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory as u16);
        assert!(Var::array(Type::Real, 0, &[-1]).is_err());
    }
}
