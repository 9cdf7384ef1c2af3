use std::f64::consts::{E, PI};

use lazy_static::lazy_static;

use crate::errors::*;
use crate::value::CalcResult;

/// How trigonometric arguments and inverse-trigonometric results are
/// interpreted. Affects nothing else.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AngleMode {
    Degrees,
    Radians,
}

impl Default for AngleMode {
    fn default() -> AngleMode {
        AngleMode::Degrees
    }
}

impl AngleMode {
    pub fn toggled(self) -> AngleMode {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }

    /// Indicator label for the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Returns a constant value by its canonical name. Name is case-insensitive.
pub fn constant(name: &str) -> Option<f64> {
    let a = name.to_lowercase();
    match a.as_str() {
        "e" => Some(E),
        "pi" => Some(PI),
        // a substituted `ans` can carry a non-finite value; keep it parseable
        "nan" => Some(std::f64::NAN),
        "infinity" => Some(std::f64::INFINITY),
        _ => None,
    }
}

lazy_static! {
    pub(crate) static ref STD_FUNCS: Vec<&'static str> = [
        "sin", "cos", "tan", "asin", "acos", "atan", "ln", "log10", "sqrt", "pow10", "exp",
    ]
    .to_vec();
}

pub fn is_func(name: &str) -> bool {
    for fname in STD_FUNCS.iter() {
        if *fname == name {
            return true;
        }
    }
    false
}

/// Applies a registered unary function to its argument.
///
/// In `Degrees` mode the forward trigonometric functions convert their
/// argument from degrees, and the inverse ones convert their result to
/// degrees. Domain misses (`sqrt(-1)`, `asin(5)`) yield NaN.
pub fn apply(name: &str, arg: f64, mode: AngleMode) -> CalcResult {
    let fwd = |v: f64| match mode {
        AngleMode::Degrees => deg_to_rad(v),
        AngleMode::Radians => v,
    };
    let inv = |v: f64| match mode {
        AngleMode::Degrees => rad_to_deg(v),
        AngleMode::Radians => v,
    };
    match name {
        "sin" => Ok(fwd(arg).sin()),
        "cos" => Ok(fwd(arg).cos()),
        "tan" => Ok(fwd(arg).tan()),
        "asin" => Ok(inv(arg.asin())),
        "acos" => Ok(inv(arg.acos())),
        "atan" => Ok(inv(arg.atan())),
        "ln" => Ok(arg.ln()),
        "log10" => Ok(arg.log10()),
        "sqrt" => Ok(arg.sqrt()),
        "pow10" => Ok(10.0f64.powf(arg)),
        "exp" => Ok(arg.exp()),
        _ => Err(CalcError::IdentUndefined(name.to_string())),
    }
}
