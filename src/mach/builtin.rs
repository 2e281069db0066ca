use super::global::Global;
use super::runtime::Runtime;
use super::{Type, Value};
use crate::error;
use crate::lang::Error;
use chrono::{Local, Timelike};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in functions
///
/// Each name owns a chain of `BuiltinDef` tried in registration
/// order. Arguments arrive already retyped to the chosen overload's
/// parameter types, so the bodies match on exact variants.

#[derive(Debug, Clone, Copy)]
pub struct BuiltinDef {
    pub params: &'static [Type],
    pub ret: Type,
    pub call: fn(&mut Runtime, Vec<Value>) -> Result<Value>,
}

pub(crate) fn register(global: &mut Global) {
    use Type::{Integer, Real, String as Str};
    type Call = fn(&mut Runtime, Vec<Value>) -> Result<Value>;
    let mut def = |name: &str, params: &'static [Type], ret: Type, call: Call| {
        global.builtin(name, BuiltinDef { params, ret, call });
    };
    def("ABS", &[Integer], Integer, abs_integer);
    def("ABS", &[Real], Real, abs_real);
    def("ASC", &[Str], Integer, asc);
    def("ATN", &[Real], Real, atn);
    def("CHR$", &[Integer], Str, chr);
    def("COS", &[Real], Real, cos);
    def("DATE$", &[], Str, date);
    def("ERL", &[], Integer, erl);
    def("ERR", &[], Integer, err);
    def("EXP", &[Real], Real, exp);
    def("INSTR", &[Str, Str], Integer, instr_2);
    def("INSTR", &[Integer, Str, Str], Integer, instr_3);
    def("INT", &[Integer], Integer, int_integer);
    def("INT", &[Real], Real, int_real);
    def("LCASE$", &[Str], Str, lcase);
    def("LEFT$", &[Str, Integer], Str, left);
    def("LEN", &[Str], Integer, len);
    def("LOG", &[Real], Real, log);
    def("MID$", &[Str, Integer], Str, mid_2);
    def("MID$", &[Str, Integer, Integer], Str, mid_3);
    def("RIGHT$", &[Str, Integer], Str, right);
    def("RND", &[], Real, rnd_0);
    def("RND", &[Real], Real, rnd_1);
    def("SGN", &[Integer], Integer, sgn_integer);
    def("SGN", &[Real], Integer, sgn_real);
    def("SIN", &[Real], Real, sin);
    def("SPACE$", &[Integer], Str, space);
    def("SQR", &[Real], Real, sqr);
    def("STR$", &[Integer], Str, str_integer);
    def("STR$", &[Real], Str, str_real);
    def("STRING$", &[Integer, Integer], Str, string_code);
    def("STRING$", &[Integer, Str], Str, string_text);
    def("TAB", &[Integer], Str, tab);
    def("TAN", &[Real], Real, tan);
    def("TIME$", &[], Str, time);
    def("TIMER", &[], Real, timer);
    def("UCASE$", &[Str], Str, ucase);
    def("VAL", &[Str], Real, val);
}

fn int_arg(args: &[Value], index: usize) -> Result<i64> {
    match args.get(index) {
        Some(Value::Integer(n)) => Ok(*n),
        _ => Err(error!(InternalError; "BAD ARGUMENT")),
    }
}

fn real_arg(args: &[Value], index: usize) -> Result<f64> {
    match args.get(index) {
        Some(Value::Real(n)) => Ok(*n),
        _ => Err(error!(InternalError; "BAD ARGUMENT")),
    }
}

fn str_arg(args: &[Value], index: usize) -> Result<&str> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(error!(InternalError; "BAD ARGUMENT")),
    }
}

fn abs_integer(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let n = int_arg(&args, 0)?;
    Ok(match n.checked_abs() {
        Some(n) => Value::Integer(n),
        None => Value::Real((n as f64).abs()),
    })
}

fn abs_real(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.abs()))
}

fn asc(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    match str_arg(&args, 0)?.chars().next() {
        Some(ch) => Ok(Value::Integer(ch as i64)),
        None => Err(error!(IllegalFunctionCall; "EMPTY STRING")),
    }
}

fn atn(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.atan()))
}

fn chr(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let code = int_arg(&args, 0)?;
    let ch = match u32::try_from(code).ok().and_then(std::char::from_u32) {
        Some(ch) => ch,
        None => return Err(error!(IllegalFunctionCall)),
    };
    Ok(Value::String(ch.to_string()))
}

fn cos(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.cos()))
}

fn date(_: &mut Runtime, _args: Vec<Value>) -> Result<Value> {
    Ok(Value::String(Local::now().format("%m-%d-%Y").to_string()))
}

fn erl(runtime: &mut Runtime, _args: Vec<Value>) -> Result<Value> {
    let line = match &runtime.last_error {
        Some(error) => match error.line_number() {
            Some(number) => i64::from(number),
            None => 0,
        },
        None => 0,
    };
    Ok(Value::Integer(line))
}

fn err(runtime: &mut Runtime, _args: Vec<Value>) -> Result<Value> {
    let code = match &runtime.last_error {
        Some(error) => i64::from(error.code()),
        None => 0,
    };
    Ok(Value::Integer(code))
}

fn exp(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.exp()))
}

// Position of needle in haystack, one-based, zero when absent.
fn instr(haystack: &str, needle: &str, start: i64) -> Result<i64> {
    if start < 1 {
        return Err(error!(IllegalFunctionCall));
    }
    let chars = haystack.chars().count() as i64;
    if start > chars {
        return Ok(0);
    }
    if needle.is_empty() {
        return Ok(start);
    }
    let from = match haystack.char_indices().nth(start as usize - 1) {
        Some((byte, _)) => byte,
        None => return Ok(0),
    };
    match haystack[from..].find(needle) {
        Some(offset) => {
            let position = haystack[..from + offset].chars().count() as i64;
            Ok(position + 1)
        }
        None => Ok(0),
    }
}

fn instr_2(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let position = instr(str_arg(&args, 0)?, str_arg(&args, 1)?, 1)?;
    Ok(Value::Integer(position))
}

fn instr_3(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let start = int_arg(&args, 0)?;
    let position = instr(str_arg(&args, 1)?, str_arg(&args, 2)?, start)?;
    Ok(Value::Integer(position))
}

fn int_integer(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Integer(int_arg(&args, 0)?))
}

fn int_real(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.floor()))
}

fn lcase(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::String(str_arg(&args, 0)?.to_lowercase()))
}

fn left(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let count = int_arg(&args, 1)?;
    if count < 0 {
        return Err(error!(IllegalFunctionCall));
    }
    let text: String = str_arg(&args, 0)?.chars().take(count as usize).collect();
    Ok(Value::String(text))
}

fn len(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Integer(str_arg(&args, 0)?.chars().count() as i64))
}

fn log(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let n = real_arg(&args, 0)?;
    if n <= 0.0 {
        return Err(error!(IllegalFunctionCall));
    }
    Ok(Value::Real(n.ln()))
}

fn mid(text: &str, start: i64, count: Option<i64>) -> Result<String> {
    if start < 1 {
        return Err(error!(IllegalFunctionCall));
    }
    let skipped = text.chars().skip(start as usize - 1);
    Ok(match count {
        None => skipped.collect(),
        Some(count) if count < 0 => return Err(error!(IllegalFunctionCall)),
        Some(count) => skipped.take(count as usize).collect(),
    })
}

fn mid_2(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let text = mid(str_arg(&args, 0)?, int_arg(&args, 1)?, None)?;
    Ok(Value::String(text))
}

fn mid_3(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let text = mid(str_arg(&args, 0)?, int_arg(&args, 1)?, Some(int_arg(&args, 2)?))?;
    Ok(Value::String(text))
}

fn right(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let count = int_arg(&args, 1)?;
    if count < 0 {
        return Err(error!(IllegalFunctionCall));
    }
    let text = str_arg(&args, 0)?;
    let chars = text.chars().count();
    let skip = chars.saturating_sub(count as usize);
    Ok(Value::String(text.chars().skip(skip).collect()))
}

fn rnd_0(runtime: &mut Runtime, _args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(runtime.random(None)))
}

fn rnd_1(runtime: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(runtime.random(Some(real_arg(&args, 0)?))))
}

fn sgn_integer(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Integer(int_arg(&args, 0)?.signum()))
}

fn sgn_real(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let n = real_arg(&args, 0)?;
    Ok(Value::Integer(if n > 0.0 {
        1
    } else if n < 0.0 {
        -1
    } else {
        0
    }))
}

fn sin(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.sin()))
}

fn space(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let count = int_arg(&args, 0)?;
    if count < 0 {
        return Err(error!(IllegalFunctionCall));
    }
    Ok(Value::String(" ".repeat(count as usize)))
}

fn sqr(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let n = real_arg(&args, 0)?;
    if n < 0.0 {
        return Err(error!(IllegalFunctionCall));
    }
    Ok(Value::Real(n.sqrt()))
}

fn str_integer(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let value = Value::Integer(int_arg(&args, 0)?);
    Ok(Value::String(Runtime::format_value(&value).trim_end().to_string()))
}

fn str_real(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let value = Value::Real(real_arg(&args, 0)?);
    Ok(Value::String(Runtime::format_value(&value).trim_end().to_string()))
}

fn string_code(runtime: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let count = int_arg(&args, 0)?;
    let filler = chr(runtime, vec![Value::Integer(int_arg(&args, 1)?)])?;
    repeat_first(count, filler.into_string()?.as_str())
}

fn string_text(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let count = int_arg(&args, 0)?;
    repeat_first(count, str_arg(&args, 1)?)
}

fn repeat_first(count: i64, text: &str) -> Result<Value> {
    if count < 0 {
        return Err(error!(IllegalFunctionCall));
    }
    match text.chars().next() {
        Some(ch) => Ok(Value::String(ch.to_string().repeat(count as usize))),
        None => Err(error!(IllegalFunctionCall; "EMPTY STRING")),
    }
}

/// Spaces forward to a one-based print column; already past it
/// yields nothing.
fn tab(runtime: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let column = int_arg(&args, 0)?;
    if column < 1 {
        return Err(error!(IllegalFunctionCall));
    }
    let target = column as usize - 1;
    let col = runtime.print_col;
    Ok(Value::String(if col < target {
        " ".repeat(target - col)
    } else {
        String::new()
    }))
}

fn tan(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::Real(real_arg(&args, 0)?.tan()))
}

fn time(_: &mut Runtime, _args: Vec<Value>) -> Result<Value> {
    Ok(Value::String(Local::now().format("%H:%M:%S").to_string()))
}

fn timer(_: &mut Runtime, _args: Vec<Value>) -> Result<Value> {
    let now = Local::now();
    let seconds = f64::from(now.num_seconds_from_midnight());
    let nanos = f64::from(now.nanosecond()) / 1e9;
    Ok(Value::Real(seconds + nanos))
}

fn ucase(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    Ok(Value::String(str_arg(&args, 0)?.to_uppercase()))
}

/// Numeric value of the longest leading number, zero when none.
fn val(_: &mut Runtime, args: Vec<Value>) -> Result<Value> {
    let text = str_arg(&args, 0)?.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits {
            end = exp_end;
        }
    }
    let number = match text[..end].parse::<f64>() {
        Ok(number) => number,
        Err(_) => 0.0,
    };
    Ok(Value::Real(number))
}
