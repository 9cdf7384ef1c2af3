use pest::Parser;

use crate::errors::*;
use crate::funcs::{self, AngleMode};
use crate::stack::{Stack, FACTORIAL, UNARY_MINUS};
use crate::value::*;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

macro_rules! process_value {
    ($stack: ident, $last_value: ident, $last_func: ident, $val: expr) => {
        if $last_func {
            $stack.push("(", None)?;
        } else if $last_value {
            $stack.push("*", None)?;
        }
        $stack.push("", Some($val))?;
        if $last_func {
            $stack.push(")", None)?;
        }
        $last_value = true;
        $last_func = false;
    };
}

/// Evaluates a canonicalized expression and returns either the result or an
/// error. The walk keeps track of the previous token to support unary
/// plus/minus, postfix factorial, implicit multiplication (`(3+2)(4-9)`,
/// `2pi`) and bracketless function application (`sin cos 2`).
pub fn eval(expr: &str, mode: AngleMode) -> CalcResult {
    let pairs = match CalcParser::parse(Rule::expr, expr) {
        Ok(p) => p,
        // own error instead of the detailed pest one
        Err(..) => return Err(CalcError::ParseFailed("invalid expression".to_string())),
    };

    let mut is_last_value = false;
    let mut is_last_func = false;

    let mut stk = Stack::new(mode);
    for pair in pairs {
        let rule = pair.as_rule();
        let val = pair.as_span().as_str().to_lowercase();
        match rule {
            Rule::int | Rule::float => {
                let v = str_to_f64(&val)?;
                process_value!(stk, is_last_value, is_last_func, v);
            }
            Rule::open_b => {
                if is_last_value {
                    stk.push("*", None)?;
                }
                stk.push("(", None)?;
                is_last_value = false;
                is_last_func = false;
            }
            Rule::close_b => {
                stk.push(")", None)?;
                is_last_value = true;
                is_last_func = false;
            }
            Rule::operator => {
                if val == "+" && !is_last_value {
                    is_last_value = false;
                    is_last_func = false;
                } else if val == "-" && (!is_last_value || is_last_func) {
                    if is_last_func {
                        stk.push("(", None)?;
                        stk.push(")", None)?;
                        stk.push("-", None)?;
                    } else {
                        stk.push(UNARY_MINUS, None)?;
                    }
                    is_last_value = false;
                    is_last_func = false;
                } else if val == "!" && is_last_value {
                    stk.push(FACTORIAL, None)?;
                    is_last_value = true;
                    is_last_func = false;
                } else {
                    stk.push(&val, None)?;
                    is_last_value = false;
                    is_last_func = false;
                }
            }
            Rule::ident => {
                if stk.is_func(&val) {
                    if is_last_value {
                        stk.push("*", None)?;
                    }
                    stk.push(&val, None)?;
                    is_last_value = false;
                    is_last_func = true;
                } else if let Some(v) = funcs::constant(&val) {
                    process_value!(stk, is_last_value, is_last_func, v);
                } else {
                    return Err(CalcError::IdentUndefined(val));
                }
            }
            _ => return Err(CalcError::Unreachable),
        }
    }
    stk.calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_expr() {
        let v = eval("2+3", AngleMode::Radians);
        assert_eq!(v, Ok(5.0));
        let v = eval("3+4*2", AngleMode::Radians);
        assert_eq!(v, Ok(11.0));
        let v = eval("(3+4)*2", AngleMode::Radians);
        assert_eq!(v, Ok(14.0));
        let v = eval("(3+2)(4-9)", AngleMode::Radians);
        assert_eq!(v, Ok(-25.0));
        let v = eval("2**3**2", AngleMode::Radians);
        assert_eq!(v, Ok(512.0));
        let v = eval("10+--5!/10", AngleMode::Radians);
        assert_eq!(v, Ok(22.0));
        let v = eval("2pi", AngleMode::Radians);
        assert_eq!(v, Ok(2.0 * PI));
        let v = eval("1e3+1", AngleMode::Radians);
        assert_eq!(v, Ok(1001.0));
        let v = eval("10%4", AngleMode::Radians);
        assert_eq!(v, Ok(2.0));
    }

    #[test]
    fn test_division() {
        assert_eq!(eval("5/0", AngleMode::Radians), Err(CalcError::DividedByZero));
        // the zero denominator is found structurally, after reduction
        assert_eq!(eval("5/(3-3)", AngleMode::Radians), Err(CalcError::DividedByZero));
        // a denominator that merely starts with '0' is not a false positive
        assert_eq!(eval("10/05", AngleMode::Radians), Ok(2.0));
        assert_eq!(eval("0/5", AngleMode::Radians), Ok(0.0));
    }

    #[test]
    fn test_functions() {
        let v = eval("sin(30)", AngleMode::Degrees).unwrap();
        assert!((v - 0.5).abs() < 1e-12);
        let v = eval("sin(30)", AngleMode::Radians).unwrap();
        assert!((v - 30.0f64.sin()).abs() < 1e-12);
        // bracketless application nests right to left
        let v = eval("sin cos 2", AngleMode::Radians).unwrap();
        assert!((v - 2.0f64.cos().sin()).abs() < 1e-12);
        let v = eval("(3+9)sin(1)", AngleMode::Radians).unwrap();
        assert!((v - 12.0 * 1.0f64.sin()).abs() < 1e-12);
        let v = eval("asin(0.5)", AngleMode::Degrees).unwrap();
        assert!((v - 30.0).abs() < 1e-9);
        let v = eval("log10(100)+exp(0)", AngleMode::Radians).unwrap();
        assert!((v - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_results() {
        assert!(eval("sqrt(0-1)", AngleMode::Radians).unwrap().is_nan());
        assert!(eval("pow10(400)", AngleMode::Radians).unwrap().is_infinite());
        assert!(eval("ln(0-3)", AngleMode::Radians).unwrap().is_nan());
    }

    #[test]
    fn test_errors() {
        assert_eq!(eval("", AngleMode::Radians), Err(CalcError::EmptyExpression));
        assert_eq!(
            eval("foo(3)", AngleMode::Radians),
            Err(CalcError::IdentUndefined("foo".to_string()))
        );
        assert_eq!(eval("2+3)", AngleMode::Radians), Err(CalcError::ClosingBracketMismatch));
        assert_eq!(
            eval("2 # 3", AngleMode::Radians),
            Err(CalcError::ParseFailed("invalid expression".to_string()))
        );
        assert_eq!(eval("2+", AngleMode::Radians), Err(CalcError::TooManyOps));
        assert_eq!(eval("2.5!", AngleMode::Radians), Err(CalcError::NotInteger(2.5)));
    }

    #[test]
    fn test_unclosed_brackets() {
        assert_eq!(eval("2*(3+4", AngleMode::Radians), Err(CalcError::OpenBracketMismatch));
        assert_eq!(eval("2*(3+(4", AngleMode::Radians), Err(CalcError::OpenBracketMismatch));
        assert_eq!(eval("(", AngleMode::Radians), Err(CalcError::OpenBracketMismatch));
        assert_eq!(eval("2*(3+4)", AngleMode::Radians), Ok(14.0));
    }
}
