use crate::canon;
use crate::errors::*;
use crate::funcs::AngleMode;
use crate::parse;
use crate::value::{fact, format_f64, str_to_f64};

/// One interactive calculator session.
///
/// Owns all mutable state: the expression buffer being edited, the text of
/// the result field, the memory and last-answer registers, the angle mode and
/// the finished flag. Evaluation itself is pure; every error is absorbed here
/// and turned into display text, nothing panics or propagates further.
///
/// The finished flag marks that the buffer holds a completed result: the next
/// digit or opening bracket then starts a fresh expression, while an operator
/// continues editing the result.
pub struct Calculator {
    expr: String,
    result: String,
    memory: f64,
    last_ans: f64,
    mode: AngleMode,
    finished: bool,
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator {
            expr: String::new(),
            result: String::new(),
            memory: 0.0,
            last_ans: 0.0,
            mode: AngleMode::default(),
            finished: false,
        }
    }
}

/// Maps an evaluation error onto its user-visible message. Errors outside
/// the mapped classes surface their own text verbatim.
fn error_message(err: &CalcError) -> String {
    match err {
        CalcError::DividedByZero => "division by zero".to_string(),
        CalcError::NotInteger(..) | CalcError::StrToFloat(..) => "invalid input".to_string(),
        CalcError::ExpressionTooLong(..) => "expression too long".to_string(),
        CalcError::ParseFailed(..)
        | CalcError::EmptyValue
        | CalcError::InvalidOp(..)
        | CalcError::TooManyOps
        | CalcError::OpenBracketMismatch
        | CalcError::ClosingBracketMismatch
        | CalcError::InsufficientOps
        | CalcError::IdentUndefined(..) => "invalid expression".to_string(),
        other => format!("{}", other),
    }
}

impl Calculator {
    pub fn new() -> Self {
        Default::default()
    }

    /// Content of the expression field.
    pub fn expression(&self) -> &str {
        &self.expr
    }

    /// Content of the result field: a formatted number, an error message,
    /// or empty.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn last_answer(&self) -> f64 {
        self.last_ans
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.mode
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Appends an input token to the expression buffer. After a completed
    /// calculation a digit or opening bracket starts over; any other token
    /// continues editing the displayed result.
    pub fn append(&mut self, token: &str) {
        if self.finished {
            let starts_over = token
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_digit() || c == '(');
            if starts_over {
                self.expr.clear();
                self.result.clear();
            }
            self.finished = false;
        }
        self.expr.push_str(token);
    }

    /// Removes the last character of the buffer. A no-op on an empty buffer.
    pub fn delete_last(&mut self) {
        self.expr.pop();
    }

    pub fn clear_all(&mut self) {
        self.expr.clear();
        self.result.clear();
        self.finished = false;
    }

    /// Evaluates the buffer. Success updates the last answer and replaces
    /// the buffer with the canonical result; failure shows the mapped
    /// message and empties the buffer, leaving the registers untouched.
    pub fn evaluate(&mut self) {
        let outcome = canon::canonicalize(&self.expr, self.last_ans)
            .and_then(|canonical| parse::eval(&canonical, self.mode));
        match outcome {
            Ok(v) => {
                self.last_ans = v;
                self.result = format_f64(v);
                self.expr = self.result.clone();
                self.finished = true;
            }
            Err(e) => {
                self.result = error_message(&e);
                self.expr.clear();
                self.finished = false;
            }
        }
    }

    /// Adds the buffer, read as a plain number, to the memory register and
    /// shows the register. The buffer is consumed either way.
    pub fn memory_add(&mut self) {
        match str_to_f64(&self.expr) {
            Ok(v) => {
                self.memory += v;
                self.result = format_f64(self.memory);
            }
            Err(..) => self.result = "invalid input".to_string(),
        }
        self.expr.clear();
        self.finished = true;
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
        self.result = "0".to_string();
        self.expr.clear();
        self.finished = true;
    }

    /// Types the memory register into the buffer.
    pub fn memory_recall(&mut self) {
        let text = format_f64(self.memory);
        self.append(&text);
    }

    pub fn toggle_angle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Factorial of the buffer read as a single number. Negative input gives
    /// NaN; fractional input is reported as invalid.
    pub fn factorial(&mut self) {
        match str_to_f64(&self.expr).and_then(fact) {
            Ok(v) => {
                self.last_ans = v;
                self.result = format_f64(v);
                self.expr = self.result.clone();
                self.finished = true;
            }
            Err(e) => {
                self.result = error_message(&e);
                self.expr.clear();
                self.finished = false;
            }
        }
    }
}
