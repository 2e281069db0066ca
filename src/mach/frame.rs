use super::{Pc, Stack, Type, Value, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FrameKind {
    Gosub,
    Call,
}

/// State saved when control transfers out and restored when it
/// comes back. GOSUB frames only need the resume point; function
/// call frames also restore the caller's frame pointer and error
/// handler.
#[derive(Debug, Clone)]
pub struct ReturnFrame {
    pub kind: FrameKind,
    pub fp: Option<usize>,
    pub frame_size: usize,
    pub pc: Pc,
    pub nparams: usize,
    pub ret: Option<Type>,
    pub on_error: Option<Pc>,
}

#[derive(Debug)]
pub enum Slot {
    Var(Var),
    Return(ReturnFrame),
}

/// ## Activation stack
///
/// One stack serves function calls, GOSUB, and FOR. A call pushes
/// a return slot when the callee has one, then argument slots, the
/// frame, then local slots:
///
/// ```text
/// [ret] [arg0 .. argN] [Frame] [local0 .. localN]
///                       ^ fp
/// ```
///
/// FOR pushes its limit and step as two bare value slots; NEXT
/// reads them back from the top. Every push for a call is matched
/// by exactly one pop when the call returns, fails, or is
/// abandoned mid-argument-list.

#[derive(Debug)]
pub struct CallStack {
    stack: Stack<Slot>,
    fp: Option<usize>,
}

impl CallStack {
    pub fn new() -> CallStack {
        CallStack {
            stack: Stack::new("STACK OVERFLOW"),
            fp: None,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.fp = None;
    }

    /// Abandon slots pushed for a call that never completed.
    pub fn truncate(&mut self, len: usize) {
        self.stack.truncate(len);
    }

    /// Unwind everything on the way out of a failed run.
    pub fn frame_to_error(&mut self, error: Error) -> Error {
        self.clear();
        error
    }

    pub fn push_arg(&mut self, var: Var) -> Result<()> {
        self.stack.push(Slot::Var(var))
    }

    pub fn pop_value(&mut self) -> Result<Var> {
        match self.stack.pop()? {
            Slot::Var(var) => Ok(var),
            Slot::Return(_) => Err(error!(InternalError; "POPPED FRAME")),
        }
    }

    /// The two topmost slots when both hold values, in push order.
    pub fn top_two(&self) -> Option<(&Var, &Var)> {
        let n = self.stack.len();
        if n < 2 {
            return None;
        }
        match (self.stack.get(n - 2), self.stack.get(n - 1)) {
            (Some(Slot::Var(a)), Some(Slot::Var(b))) => Some((a, b)),
            _ => None,
        }
    }

    pub fn push_frame(
        &mut self,
        kind: FrameKind,
        pc: Pc,
        frame_size: usize,
        nparams: usize,
        ret: Option<Type>,
        on_error: Option<Pc>,
    ) -> Result<()> {
        let index = self.stack.len();
        self.stack.push(Slot::Return(ReturnFrame {
            kind,
            fp: self.fp,
            frame_size,
            pc,
            nparams,
            ret,
            on_error,
        }))?;
        if kind == FrameKind::Call {
            self.fp = Some(index);
        }
        Ok(())
    }

    fn active_frame(&self) -> Result<(usize, &ReturnFrame)> {
        let fp = match self.fp {
            Some(fp) => fp,
            None => return Err(error!(InternalError; "NO ACTIVE FRAME")),
        };
        match self.stack.get(fp) {
            Some(Slot::Return(frame)) => Ok((fp, frame)),
            _ => Err(error!(InternalError; "BAD FRAME POINTER")),
        }
    }

    /// Slot for parameter or local `index` of the active call.
    /// Parameters sit below the frame, locals above.
    fn local_index(&self) -> Result<(usize, usize)> {
        let (fp, frame) = self.active_frame()?;
        Ok((fp, frame.nparams))
    }

    pub fn local(&self, index: usize) -> Result<&Var> {
        let (fp, nparams) = self.local_index()?;
        let at = if index < nparams {
            fp - nparams + index
        } else {
            fp + 1 + index - nparams
        };
        match self.stack.get(at) {
            Some(Slot::Var(var)) => Ok(var),
            _ => Err(error!(InternalError; "BAD LOCAL SLOT")),
        }
    }

    pub fn local_mut(&mut self, index: usize) -> Result<&mut Var> {
        let (fp, nparams) = self.local_index()?;
        let at = if index < nparams {
            fp - nparams + index
        } else {
            fp + 1 + index - nparams
        };
        match self.stack.get_mut(at) {
            Some(Slot::Var(var)) => Ok(var),
            _ => Err(error!(InternalError; "BAD LOCAL SLOT")),
        }
    }

    /// Return slot of the active call, where assignment to the
    /// function's own name lands.
    pub fn ret_mut(&mut self) -> Result<&mut Var> {
        let (_, frame) = self.active_frame()?;
        if frame.ret.is_none() {
            return Err(error!(InternalError; "SUB HAS NO RETURN SLOT"));
        }
        let at = frame.frame_size;
        match self.stack.get_mut(at) {
            Some(Slot::Var(var)) => Ok(var),
            _ => Err(error!(InternalError; "MISSING RETURN SLOT")),
        }
    }

    /// Finish the active call: read the return value, pop exactly
    /// the slots the call pushed, restore the caller's frame.
    pub fn func_return(&mut self) -> Result<(Value, ReturnFrame)> {
        let (_, frame) = self.active_frame()?;
        if frame.kind != FrameKind::Call {
            return Err(error!(InternalError; "NO ACTIVE CALL"));
        }
        let frame = frame.clone();
        let value = match frame.ret {
            Some(_) => match self.stack.get(frame.frame_size) {
                Some(Slot::Var(var)) => var.value()?.clone(),
                _ => return Err(error!(InternalError; "MISSING RETURN SLOT")),
            },
            None => Value::Void,
        };
        self.stack.truncate(frame.frame_size);
        self.fp = frame.fp;
        Ok((value, frame))
    }

    /// Pop back to the nearest GOSUB frame, discarding anything
    /// pushed above it. Never crosses the active call boundary.
    pub fn pop_frame(&mut self) -> Result<ReturnFrame> {
        let floor = match self.fp {
            Some(fp) => fp + 1,
            None => 0,
        };
        let mut i = self.stack.len();
        while i > floor {
            i -= 1;
            if let Some(Slot::Return(frame)) = self.stack.get(i) {
                if frame.kind == FrameKind::Gosub {
                    let frame = frame.clone();
                    self.stack.truncate(i);
                    return Ok(frame);
                }
                break;
            }
        }
        Err(error!(ReturnWithoutGosub))
    }
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new()
    }
}
