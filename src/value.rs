use std::f64::EPSILON;
use std::str;

use dtoa;

use crate::errors::*;

/// Expression calculation result: either a 64-bit float or an error.
///
/// NaN and the infinities are valid results (e.g. `sqrt(-1)`, `pow10(400)`),
/// not errors, and they format literally.
pub type CalcResult = Result<f64, CalcError>;
pub(crate) type CalcErrorResult = Result<(), CalcError>;

/// Above this the iterative product overflows f64 anyway, so skip the loop.
const FACT_MAX_ARG: f64 = 170.0;

const F64_BUF_LEN: usize = 48;

/// Canonical rendering of a result: shortest round-trippable form for finite
/// values, literal `NaN`/`Infinity` otherwise.
pub fn format_f64(g: f64) -> String {
    if g.is_nan() {
        return "NaN".to_string();
    }
    if g.is_infinite() {
        return if g > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    // integral results read as integers: "120", not "120.0"
    if g.fract() == 0.0 && g.abs() < 1e15 {
        return format!("{}", g as i64);
    }
    let mut buf = [b'\0'; F64_BUF_LEN];
    match dtoa::write(&mut buf[..], g) {
        Ok(len) => match str::from_utf8(&buf[..len]) {
            Ok(s) => s.to_string(),
            Err(..) => format!("{}", g),
        },
        Err(..) => format!("{}", g),
    }
}

pub(crate) fn f64_equal(f1: f64, f2: f64) -> bool {
    (f1 - f2).abs() <= EPSILON
}

pub(crate) fn str_to_f64(s: &str) -> CalcResult {
    if let Ok(f) = s.trim().parse::<f64>() {
        Ok(f)
    } else {
        Err(CalcError::StrToFloat(s.to_owned()))
    }
}

/// Factorial by iterative product.
///
/// Negative input yields NaN (a displayable result). Fractional input is
/// rejected: the iterative definition is meaningless for it and silently
/// truncating would surprise the user.
pub fn fact(v: f64) -> CalcResult {
    if v < 0.0 {
        return Ok(std::f64::NAN);
    }
    if v.fract() != 0.0 {
        return Err(CalcError::NotInteger(v));
    }
    if v > FACT_MAX_ARG {
        return Ok(std::f64::INFINITY);
    }
    let mut f = 1.0f64;
    let mut i = v;
    while i > 1.0 {
        f *= i;
        i -= 1.0;
    }
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_f64(0.5), "0.5");
        assert_eq!(format_f64(120.0), "120");
        assert_eq!(format_f64(-3.0), "-3");
        assert_eq!(format_f64(std::f64::NAN), "NaN");
        assert_eq!(format_f64(std::f64::INFINITY), "Infinity");
        assert_eq!(format_f64(std::f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_fact() {
        assert_eq!(fact(5.0), Ok(120.0));
        assert_eq!(fact(0.0), Ok(1.0));
        assert_eq!(fact(1.0), Ok(1.0));
        assert!(fact(-3.0).unwrap().is_nan());
        assert_eq!(fact(2.5), Err(CalcError::NotInteger(2.5)));
        assert!(fact(200.0).unwrap().is_infinite());
    }

    #[test]
    fn test_str_to_f64() {
        assert_eq!(str_to_f64("7"), Ok(7.0));
        assert_eq!(str_to_f64(" 2.5 "), Ok(2.5));
        assert!(str_to_f64("2+3").is_err());
        assert!(str_to_f64("").is_err());
    }
}
