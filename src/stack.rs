use crate::errors::*;
use crate::funcs::{self, AngleMode};
use crate::value::*;

#[derive(Clone, Debug)]
pub(crate) enum Entry {
    Val(f64),
    Op(String, i32, bool),
    OpenB,
    Func(String),
}

/// Shunting-yard evaluator: operators are reordered through `queue` into the
/// RPN `output`, then reduced over `values`. Purely a function of the pushed
/// tokens and the angle mode.
pub(crate) struct Stack {
    pub(crate) queue: Vec<Entry>,
    pub(crate) output: Vec<Entry>,
    values: Vec<f64>,
    mode: AngleMode,
}

const PRI_IMMEDIATE: i32 = 99;
pub(crate) const FACTORIAL: &str = "!!!";
pub(crate) const UNARY_MINUS: &str = "---";

impl Stack {
    fn priority(op: &str) -> (i32, bool) {
        match op {
            FACTORIAL => (PRI_IMMEDIATE, false), // immediate - factorial
            UNARY_MINUS => (20, true),           // negate
            "**" => (17, true),                  // power
            "*" | "/" | "%" => (12, false),      // mult, div, mod
            "+" | "-" => (8, false),             // add, sub
            _ => (0, false),                     // invalid op
        }
    }

    pub(crate) fn is_func(&self, s: &str) -> bool {
        funcs::is_func(s)
    }

    // move operators from the queue to output while the top operator in the
    // queue has equal or greater priority
    fn pop_while_priority(&mut self, priority: i32) {
        loop {
            if self.queue.is_empty() {
                return;
            }
            // queue is not empty, so unwrap is OK
            let e = self.queue.pop().unwrap();
            match &e {
                Entry::OpenB => {
                    self.queue.push(e);
                    return;
                }
                Entry::Func(..) => {
                    self.output.push(e);
                }
                Entry::Op(_, p, right) => {
                    if *p > priority || (*p == priority && !*right) {
                        self.output.push(e);
                    } else {
                        self.queue.push(e);
                        return;
                    }
                }
                _ => return, // unreachable
            }
        }
    }

    // move operators from the queue to output until the first open bracket
    fn pop_until_bracket(&mut self) -> CalcErrorResult {
        loop {
            if self.queue.is_empty() {
                return Err(CalcError::ClosingBracketMismatch);
            }

            // unwrap is ok - vector is not empty
            let e = self.queue.pop().unwrap();
            match &e {
                Entry::Val(..) | Entry::Op(..) | Entry::Func(..) => self.output.push(e),
                Entry::OpenB => return Ok(()),
            }
        }
    }

    // move functions from the queue to output
    fn pop_functions(&mut self) {
        loop {
            if self.queue.is_empty() {
                return;
            }

            // unwrap is ok - vector is not empty
            let e = self.queue.pop().unwrap();
            match &e {
                Entry::Func(..) => self.output.push(e),
                _ => {
                    self.queue.push(e);
                    return;
                }
            }
        }
    }

    // move all operators from queue to output
    // Must be called only after the expression ends.
    fn pop_all(&mut self) -> CalcErrorResult {
        while let Some(v) = self.queue.pop() {
            match &v {
                Entry::OpenB => return Err(CalcError::OpenBracketMismatch),
                Entry::Op(..) => self.output.push(v),
                Entry::Func(..) => self.output.push(v),
                _ => return Err(CalcError::Unreachable),
            }
        }
        Ok(())
    }

    // ------------ PUBLIC -----------------

    pub(crate) fn new(mode: AngleMode) -> Self {
        Stack {
            queue: Vec::new(),
            output: Vec::new(),
            values: Vec::new(),
            mode,
        }
    }

    pub(crate) fn push(&mut self, op: &str, val: Option<f64>) -> CalcErrorResult {
        if op.is_empty() {
            if let Some(v) = val {
                self.output.push(Entry::Val(v))
            } else {
                return Err(CalcError::EmptyValue);
            }
            return Ok(());
        }

        if self.is_func(op) {
            self.queue.push(Entry::Func(op.to_owned()));
            return Ok(());
        }

        if op == "(" {
            self.queue.push(Entry::OpenB);
            return Ok(());
        }

        if op == ")" {
            return self.pop_until_bracket();
        }

        let (pri, right_assoc) = Stack::priority(op);
        if pri == 0 {
            return Err(CalcError::InvalidOp(op.to_owned()));
        }

        if pri == PRI_IMMEDIATE {
            self.pop_functions();
            self.output.push(Entry::Op(op.to_owned(), pri, false));
            return Ok(());
        }

        self.pop_while_priority(pri);
        self.queue.push(Entry::Op(op.to_owned(), pri, right_assoc));

        Ok(())
    }

    pub(crate) fn calculate(&mut self) -> CalcResult {
        self.pop_all()?;
        if self.output.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        self.values = Vec::new();

        for i in 0..self.output.len() {
            let o = self.output[i].clone();
            match o {
                Entry::Val(v) => {
                    self.values.push(v);
                }
                Entry::Op(op, ..) => {
                    self.process_operator(&op)?;
                }
                Entry::Func(fname) => {
                    self.process_function(&fname)?;
                }
                _ => return Err(CalcError::Unreachable),
            }
        }

        if self.values.len() != 1 {
            return Err(CalcError::InsufficientOps);
        }

        // values is never empty after calculation - unwrap is fine
        Ok(self.values.pop().unwrap())
    }

    fn pop_one(&mut self) -> CalcResult {
        match self.values.pop() {
            Some(v) => Ok(v),
            None => Err(CalcError::TooManyOps),
        }
    }

    fn pop_two(&mut self) -> Result<(f64, f64), CalcError> {
        if self.values.len() < 2 {
            return Err(CalcError::TooManyOps);
        }
        // length checked above - unwraps are fine
        let v2 = self.values.pop().unwrap();
        let v1 = self.values.pop().unwrap();
        Ok((v1, v2))
    }

    fn process_operator(&mut self, op: &str) -> CalcErrorResult {
        let v = match op {
            "+" => {
                let (v1, v2) = self.pop_two()?;
                v1 + v2
            }
            "-" => {
                let (v1, v2) = self.pop_two()?;
                v1 - v2
            }
            "*" => {
                let (v1, v2) = self.pop_two()?;
                v1 * v2
            }
            "/" => {
                let (v1, v2) = self.pop_two()?;
                // structural check: a zero denominator is an error, never
                // a silent infinity
                if v2 == 0.0 {
                    return Err(CalcError::DividedByZero);
                }
                v1 / v2
            }
            "%" => {
                let (v1, v2) = self.pop_two()?;
                if v2 == 0.0 {
                    return Err(CalcError::DividedByZero);
                }
                v1 % v2
            }
            "**" => {
                let (v1, v2) = self.pop_two()?;
                v1.powf(v2)
            }
            UNARY_MINUS => -self.pop_one()?,
            FACTORIAL => {
                let v = self.pop_one()?;
                fact(v)?
            }
            _ => return Err(CalcError::InvalidOp(op.to_string())),
        };
        self.values.push(v);
        Ok(())
    }

    fn process_function(&mut self, fname: &str) -> CalcErrorResult {
        let v = self.pop_one()?;
        let v = funcs::apply(fname, v, self.mode)?;
        self.values.push(v);
        Ok(())
    }
}
