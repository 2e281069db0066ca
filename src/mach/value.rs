use crate::error;
use crate::lang::{Error, Literal, Operator};

type Result<T> = std::result::Result<T, Error>;

/// The type tag of a `Value`. Operand pairs resolve to a result
/// type through `Type::common`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Type {
    Integer,
    Real,
    String,
    Nil,
    Void,
}

const COMMON_TYPE: [[Option<Type>; 5]; 5] = [
    // Integer            Real              String              Nil   Void
    [Some(Type::Integer), Some(Type::Real), None, None, None], // Integer
    [Some(Type::Real), Some(Type::Real), None, None, None],    // Real
    [None, None, Some(Type::String), None, None],              // String
    [None, None, None, None, None],                            // Nil
    [None, None, None, None, None],                            // Void
];

impl Type {
    /// Result type of a binary operation over a pair of operand
    /// types. `None` for pairs with no defined arithmetic.
    pub fn common(self, other: Type) -> Option<Type> {
        COMMON_TYPE[self as usize][other as usize]
    }

    /// The zero of this type. Fresh variables and non-calc
    /// placeholder results start here.
    pub fn zero(self) -> Value {
        match self {
            Type::Integer => Value::Integer(0),
            Type::Real => Value::Real(0.0),
            Type::String => Value::String(String::new()),
            Type::Nil => Value::Nil,
            Type::Void => Value::Void,
        }
    }
}

/// ## Runtime values
///
/// Every expression produces a `Value`. The arithmetic entry points
/// are gated by a `calc` flag: true computes, false only checks the
/// operand types and returns a zero of the result type. DECLARE and
/// COMPILE walk entire programs with `calc` false, which is how a
/// program is fully type checked before anything runs.

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
    Nil,
    Void,
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(i) => Value::Integer(*i),
            Literal::Real(r) => Value::Real(*r),
            Literal::String(s) => Value::String(s.clone()),
        }
    }
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Integer(_) => Type::Integer,
            Value::Real(_) => Type::Real,
            Value::String(_) => Type::String,
            Value::Nil => Type::Nil,
            Value::Void => Type::Void,
        }
    }

    fn from_bool(b: bool) -> Value {
        if b {
            Value::Integer(-1)
        } else {
            Value::Integer(0)
        }
    }

    /// Convert between numeric types following BASIC coercion:
    /// Integer widens exactly, Real narrows by rounding. String
    /// never converts to or from a numeric type.
    pub fn retype(self, to: Type) -> Result<Value> {
        if self.ty() == to {
            return Ok(self);
        }
        match (self, to) {
            (Value::Integer(n), Type::Real) => Ok(Value::Real(n as f64)),
            (Value::Real(n), Type::Integer) => {
                let r = n.round();
                if r >= -9_223_372_036_854_775_808.0 && r < 9_223_372_036_854_775_808.0 {
                    Ok(Value::Integer(r as i64))
                } else {
                    Err(error!(Overflow))
                }
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn to_integer(self) -> Result<i64> {
        if let Value::Integer(n) = self.retype(Type::Integer)? {
            Ok(n)
        } else {
            Err(error!(InternalError; "RETYPE"))
        }
    }

    pub fn to_real(self) -> Result<f64> {
        if let Value::Real(n) = self.retype(Type::Real)? {
            Ok(n)
        } else {
            Err(error!(InternalError; "RETYPE"))
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Truth of a condition. Any nonzero number is true.
    pub fn is_true(&self) -> Result<bool> {
        match self {
            Value::Integer(n) => Ok(*n != 0),
            Value::Real(n) => Ok(*n != 0.0),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Apply a binary operator, gated by `calc`.
    pub fn binary(self, op: Operator, rhs: Value, calc: bool) -> Result<Value> {
        use Operator::*;
        match op {
            Caret => self.power(rhs, calc),
            Multiply => self.multiply(rhs, calc),
            Divide => self.divide(rhs, calc),
            DivideInt => self.integral(rhs, calc, |l, r| l.checked_div(r)),
            Modulo => self.integral(rhs, calc, |l, r| l.checked_rem(r)),
            Plus => self.sum(rhs, calc),
            Minus => self.subtract(rhs, calc),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                self.relate(op, rhs, calc)
            }
            And => self.bitwise(rhs, calc, |l, r| l & r),
            Or => self.bitwise(rhs, calc, |l, r| l | r),
            Xor => self.bitwise(rhs, calc, |l, r| l ^ r),
            Eqv => self.bitwise(rhs, calc, |l, r| !(l ^ r)),
            Imp => self.bitwise(rhs, calc, |l, r| !l | r),
            Not => Err(error!(InternalError; "NOT IS UNARY")),
        }
    }

    /// Apply a prefix operator, gated by `calc`.
    pub fn unary(self, op: Operator, calc: bool) -> Result<Value> {
        use Operator::*;
        match op {
            Plus => match self {
                Value::Integer(_) | Value::Real(_) => Ok(self),
                _ => Err(error!(TypeMismatch)),
            },
            Minus => self.negate(calc),
            Not => {
                let n = self.to_integer()?;
                Ok(Value::Integer(if calc { !n } else { 0 }))
            }
            _ => Err(error!(InternalError; "NOT A UNARY OPERATOR")),
        }
    }

    fn common_pair(self, rhs: Value) -> Result<(Value, Value)> {
        match self.ty().common(rhs.ty()) {
            Some(t) => Ok((self.retype(t)?, rhs.retype(t)?)),
            None => Err(error!(TypeMismatch)),
        }
    }

    fn negate(self, calc: bool) -> Result<Value> {
        match self {
            Value::Integer(n) => Ok(if !calc {
                Value::Integer(0)
            } else {
                match n.checked_neg() {
                    Some(i) => Value::Integer(i),
                    None => Value::Real(-(n as f64)),
                }
            }),
            Value::Real(n) => Ok(Value::Real(if calc { -n } else { 0.0 })),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn sum(self, rhs: Value, calc: bool) -> Result<Value> {
        match self.common_pair(rhs)? {
            (Value::Integer(l), Value::Integer(r)) => Ok(if !calc {
                Value::Integer(0)
            } else {
                match l.checked_add(r) {
                    Some(i) => Value::Integer(i),
                    None => Value::Real(l as f64 + r as f64),
                }
            }),
            (Value::Real(l), Value::Real(r)) => Ok(Value::Real(if calc { l + r } else { 0.0 })),
            (Value::String(mut l), Value::String(r)) => Ok(Value::String(if calc {
                l.push_str(&r);
                l
            } else {
                String::new()
            })),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn subtract(self, rhs: Value, calc: bool) -> Result<Value> {
        match self.common_pair(rhs)? {
            (Value::Integer(l), Value::Integer(r)) => Ok(if !calc {
                Value::Integer(0)
            } else {
                match l.checked_sub(r) {
                    Some(i) => Value::Integer(i),
                    None => Value::Real(l as f64 - r as f64),
                }
            }),
            (Value::Real(l), Value::Real(r)) => Ok(Value::Real(if calc { l - r } else { 0.0 })),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn multiply(self, rhs: Value, calc: bool) -> Result<Value> {
        match self.common_pair(rhs)? {
            (Value::Integer(l), Value::Integer(r)) => Ok(if !calc {
                Value::Integer(0)
            } else {
                match l.checked_mul(r) {
                    Some(i) => Value::Integer(i),
                    None => Value::Real(l as f64 * r as f64),
                }
            }),
            (Value::Real(l), Value::Real(r)) => Ok(Value::Real(if calc { l * r } else { 0.0 })),
            _ => Err(error!(TypeMismatch)),
        }
    }

    // `/` always produces a Real, even for two Integer operands.
    fn divide(self, rhs: Value, calc: bool) -> Result<Value> {
        let l = self.to_real()?;
        let r = rhs.to_real()?;
        if !calc {
            return Ok(Value::Real(0.0));
        }
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Value::Real(l / r))
    }

    // `\` and MOD coerce both operands to Integer first.
    fn integral(self, rhs: Value, calc: bool, op: fn(i64, i64) -> Option<i64>) -> Result<Value> {
        let l = self.to_integer()?;
        let r = rhs.to_integer()?;
        if !calc {
            return Ok(Value::Integer(0));
        }
        if r == 0 {
            return Err(error!(DivisionByZero));
        }
        match op(l, r) {
            Some(i) => Ok(Value::Integer(i)),
            None => Err(error!(Overflow)),
        }
    }

    fn power(self, rhs: Value, calc: bool) -> Result<Value> {
        match self.common_pair(rhs)? {
            (Value::Integer(l), Value::Integer(r)) => {
                if !calc {
                    return Ok(Value::Integer(0));
                }
                if r < 0 {
                    if l == 0 {
                        return Err(error!(DivisionByZero));
                    }
                    return Ok(Value::Real((l as f64).powf(r as f64)));
                }
                match checked_ipow(l, r) {
                    Some(i) => Ok(Value::Integer(i)),
                    None => Ok(Value::Real((l as f64).powf(r as f64))),
                }
            }
            (Value::Real(l), Value::Real(r)) => {
                if !calc {
                    return Ok(Value::Real(0.0));
                }
                if l == 0.0 && r < 0.0 {
                    return Err(error!(DivisionByZero));
                }
                Ok(Value::Real(l.powf(r)))
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn relate(self, op: Operator, rhs: Value, calc: bool) -> Result<Value> {
        use std::cmp::Ordering;
        let ord = match self.common_pair(rhs)? {
            (Value::Integer(l), Value::Integer(r)) => l.partial_cmp(&r),
            (Value::Real(l), Value::Real(r)) => l.partial_cmp(&r),
            (Value::String(l), Value::String(r)) => l.partial_cmp(&r),
            _ => return Err(error!(TypeMismatch)),
        };
        if !calc {
            return Ok(Value::Integer(0));
        }
        let truth = match op {
            Operator::Equal => ord == Some(Ordering::Equal),
            Operator::NotEqual => ord != Some(Ordering::Equal),
            Operator::Less => ord == Some(Ordering::Less),
            Operator::LessEqual => {
                ord == Some(Ordering::Less) || ord == Some(Ordering::Equal)
            }
            Operator::Greater => ord == Some(Ordering::Greater),
            Operator::GreaterEqual => {
                ord == Some(Ordering::Greater) || ord == Some(Ordering::Equal)
            }
            _ => return Err(error!(InternalError; "NOT RELATIONAL")),
        };
        Ok(Value::from_bool(truth))
    }

    // NOT AND OR XOR EQV IMP operate bitwise on Integer operands.
    fn bitwise(self, rhs: Value, calc: bool, op: fn(i64, i64) -> i64) -> Result<Value> {
        let l = self.to_integer()?;
        let r = rhs.to_integer()?;
        Ok(Value::Integer(if calc { op(l, r) } else { 0 }))
    }
}

fn checked_ipow(base: i64, exp: i64) -> Option<i64> {
    debug_assert!(exp >= 0);
    let mut result: i64 = 1;
    let mut base = base;
    let mut exp = exp as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Integer(n) => {
                if *n < 0 {
                    write!(f, "{}", n)
                } else {
                    write!(f, " {}", n)
                }
            }
            Value::Real(n) => {
                let s = format_real(*n);
                if s.starts_with('-') {
                    write!(f, "{}", s)
                } else {
                    write!(f, " {}", s)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Nil | Value::Void => Ok(()),
        }
    }
}

// Whole reals print without a fraction; very large and very small
// magnitudes switch to exponent form.
fn format_real(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n == n.trunc() && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else if n.abs() >= 1e10 || n.abs() < 1e-4 {
        format!("{:E}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }
    fn real(n: f64) -> Value {
        Value::Real(n)
    }
    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_common_type() {
        assert_eq!(Type::Integer.common(Type::Integer), Some(Type::Integer));
        assert_eq!(Type::Integer.common(Type::Real), Some(Type::Real));
        assert_eq!(Type::Real.common(Type::Integer), Some(Type::Real));
        assert_eq!(Type::String.common(Type::String), Some(Type::String));
        assert_eq!(Type::Integer.common(Type::String), None);
        assert_eq!(Type::Nil.common(Type::Integer), None);
        assert_eq!(Type::Void.common(Type::Void), None);
    }

    #[test]
    fn test_static_type_matches_runtime_type() {
        use Operator::*;
        let cases: &[(Value, Operator, Value)] = &[
            (int(2), Plus, int(3)),
            (int(2), Minus, real(0.5)),
            (real(1.5), Multiply, int(4)),
            (int(7), Divide, int(2)),
            (int(7), DivideInt, int(2)),
            (int(7), Modulo, int(2)),
            (int(2), Caret, int(10)),
            (string("A"), Plus, string("B")),
            (int(2), Less, int(3)),
            (int(6), And, int(3)),
        ];
        for (lhs, op, rhs) in cases {
            let checked = lhs.clone().binary(*op, rhs.clone(), false).unwrap();
            let computed = lhs.clone().binary(*op, rhs.clone(), true).unwrap();
            assert_eq!(checked.ty(), computed.ty(), "{:?} {:?} {:?}", lhs, op, rhs);
        }
    }

    #[test]
    fn test_type_mismatch() {
        let e = int(1).binary(Operator::Plus, string("X"), true).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
        let e = string("X").binary(Operator::Minus, string("Y"), false).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
        let e = Value::Nil.binary(Operator::Plus, int(1), false).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
    }

    #[test]
    fn test_divide() {
        assert_eq!(int(7).binary(Operator::Divide, int(2), true).unwrap(), real(3.5));
        let e = int(5).binary(Operator::Divide, int(0), true).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero as u16);
        // Only checks types before the INTERPRET pass.
        assert_eq!(int(5).binary(Operator::Divide, int(0), false).unwrap(), real(0.0));
    }

    #[test]
    fn test_integral_ops() {
        assert_eq!(int(7).binary(Operator::DivideInt, int(2), true).unwrap(), int(3));
        assert_eq!(int(7).binary(Operator::Modulo, int(2), true).unwrap(), int(1));
        assert_eq!(real(7.4).binary(Operator::DivideInt, int(2), true).unwrap(), int(3));
        let e = int(7).binary(Operator::Modulo, int(0), true).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero as u16);
    }

    #[test]
    fn test_overflow_promotes_to_real() {
        let max = i64::max_value();
        let v = int(max).binary(Operator::Plus, int(1), true).unwrap();
        assert_eq!(v.ty(), Type::Real);
        let v = int(max).binary(Operator::Multiply, int(2), true).unwrap();
        assert_eq!(v.ty(), Type::Real);
        let v = int(i64::min_value()).unary(Operator::Minus, true).unwrap();
        assert_eq!(v.ty(), Type::Real);
    }

    #[test]
    fn test_retype_round_trip() {
        let v = int(5).retype(Type::Real).unwrap();
        assert_eq!(v, real(5.0));
        assert_eq!(v.retype(Type::Integer).unwrap(), int(5));
        assert_eq!(real(2.6).retype(Type::Integer).unwrap(), int(3));
        assert_eq!(real(-2.6).retype(Type::Integer).unwrap(), int(-3));
        let e = real(1e300).retype(Type::Integer).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow as u16);
        let e = string("5").retype(Type::Integer).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
    }

    #[test]
    fn test_relational() {
        assert_eq!(int(2).binary(Operator::Less, int(3), true).unwrap(), int(-1));
        assert_eq!(int(3).binary(Operator::Less, int(3), true).unwrap(), int(0));
        assert_eq!(int(3).binary(Operator::LessEqual, int(3), true).unwrap(), int(-1));
        assert_eq!(int(2).binary(Operator::Equal, real(2.0), true).unwrap(), int(-1));
        assert_eq!(string("A").binary(Operator::Less, string("B"), true).unwrap(), int(-1));
        assert_eq!(string("A").binary(Operator::NotEqual, string("A"), true).unwrap(), int(0));
        let e = string("A").binary(Operator::Equal, int(1), true).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
    }

    #[test]
    fn test_bitwise_logic() {
        assert_eq!(int(6).binary(Operator::And, int(3), true).unwrap(), int(2));
        assert_eq!(int(6).binary(Operator::Or, int(3), true).unwrap(), int(7));
        assert_eq!(int(6).binary(Operator::Xor, int(3), true).unwrap(), int(5));
        assert_eq!(int(0).binary(Operator::Eqv, int(0), true).unwrap(), int(-1));
        assert_eq!(int(-1).binary(Operator::Imp, int(0), true).unwrap(), int(0));
        assert_eq!(int(0).unary(Operator::Not, true).unwrap(), int(-1));
        assert_eq!(int(-1).unary(Operator::Not, true).unwrap(), int(0));
        // Reals round before the bit operation.
        assert_eq!(real(0.4).unary(Operator::Not, true).unwrap(), int(-1));
    }

    #[test]
    fn test_power() {
        assert_eq!(int(2).binary(Operator::Caret, int(10), true).unwrap(), int(1024));
        assert_eq!(int(2).binary(Operator::Caret, int(-1), true).unwrap(), real(0.5));
        let e = int(0).binary(Operator::Caret, int(-1), true).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero as u16);
        let v = int(2).binary(Operator::Caret, int(64), true).unwrap();
        assert_eq!(v.ty(), Type::Real);
        assert_eq!(real(2.0).binary(Operator::Caret, int(2), true).unwrap(), real(4.0));
    }

    #[test]
    fn test_concat() {
        assert_eq!(
            string("HELLO, ").binary(Operator::Plus, string("WORLD"), true).unwrap(),
            string("HELLO, WORLD")
        );
    }

    #[test]
    fn test_is_true() {
        assert_eq!(int(0).is_true().unwrap(), false);
        assert_eq!(int(-1).is_true().unwrap(), true);
        assert_eq!(real(0.25).is_true().unwrap(), true);
        assert!(string("X").is_true().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", int(7)), " 7");
        assert_eq!(format!("{}", int(-7)), "-7");
        assert_eq!(format!("{}", real(2.5)), " 2.5");
        assert_eq!(format!("{}", real(4.0)), " 4");
        assert_eq!(format!("{}", string("HI")), "HI");
    }
}
