use std::fmt;

/// Everything that can go wrong between a raw expression buffer and a number.
///
/// The variants are granular so tests and callers can tell failures apart;
/// the calculator session maps them onto the few user-visible messages.
#[derive(Clone, PartialEq)]
pub enum CalcError {
    StrToFloat(String),
    DividedByZero,
    NotInteger(f64),

    EmptyValue,
    InvalidOp(String),
    TooManyOps,
    OpenBracketMismatch,
    ClosingBracketMismatch,
    EmptyExpression,
    InsufficientOps,
    IdentUndefined(String),
    ExpressionTooLong(usize),

    ParseFailed(String),

    Unreachable,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToFloat(s) => write!(f, "Failed to convert '{}' to a number", s),
            CalcError::DividedByZero => write!(f, "Divided by zero"),
            CalcError::NotInteger(v) => write!(f, "{} is not an integer", v),

            CalcError::EmptyValue => write!(f, "Nor value neither operator found"),
            CalcError::InvalidOp(s) => write!(f, "Invalid operator '{}'", s),
            CalcError::TooManyOps => write!(f, "Too many operators"),
            CalcError::ClosingBracketMismatch => write!(f, "Mismatched closing bracket"),
            CalcError::OpenBracketMismatch => write!(f, "Mismatched opening bracket"),
            CalcError::EmptyExpression => write!(f, "Nothing to calculate"),
            CalcError::InsufficientOps => write!(f, "Too many numbers"),
            CalcError::IdentUndefined(s) => write!(f, "Unknown name '{}'", s),
            CalcError::ExpressionTooLong(l) => write!(f, "Expression is too long: {} characters", l),

            CalcError::ParseFailed(s) => write!(f, "Failed to parse expression: {}", s),

            CalcError::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl fmt::Debug for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
