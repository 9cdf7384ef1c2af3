//! Rewrites the surface syntax of the expression buffer into the canonical
//! grammar the evaluator understands.
//!
//! All substitutions are word-matched: a name is replaced only when it stands
//! alone as a full identifier, so names that merely contain a constant's
//! letter (`exp`, `mean`) are never corrupted. Substituted text is emitted
//! directly and never re-scanned.

use crate::errors::*;
use crate::value::format_f64;

/// Upper bound on the raw buffer. Evaluation is iterative, so this is also
/// the time and memory bound for a single evaluation.
pub const MAX_EXPR_LEN: usize = 256;

/// Produces the canonical form of a raw expression buffer:
///
/// * `π` becomes the constant name `pi`;
/// * `ans` becomes the current last-answer value, parenthesized so adjacent
///   operators keep their grouping;
/// * `^` becomes the power operator `**`;
/// * surface function names are rewritten to registry primitives
///   (`arcsin` → `asin`, `log` → `log10`, `powE` → `exp`, ...);
/// * identifiers are lowercased, everything else passes through.
pub fn canonicalize(raw: &str, ans: f64) -> Result<String, CalcError> {
    if raw.len() > MAX_EXPR_LEN {
        return Err(CalcError::ExpressionTooLong(raw.len()));
    }

    let mut out = String::with_capacity(raw.len() + 8);
    let mut it = raw.chars().peekable();
    while let Some(&c) = it.peek() {
        if c.is_ascii_alphabetic() || c == '_' {
            let mut word = String::new();
            while let Some(&w) = it.peek() {
                if w.is_ascii_alphanumeric() || w == '_' {
                    word.push(w);
                    it.next();
                } else {
                    break;
                }
            }
            out.push_str(&rewrite_word(&word, ans));
        } else if c == 'π' {
            it.next();
            out.push_str("pi");
        } else if c == '^' {
            it.next();
            out.push_str("**");
        } else {
            it.next();
            out.push(c);
        }
    }
    Ok(out)
}

fn rewrite_word(word: &str, ans: f64) -> String {
    let low = word.to_lowercase();
    match low.as_str() {
        "ans" => format!("({})", format_f64(ans)),
        "arcsin" => "asin".to_string(),
        "arccos" => "acos".to_string(),
        "arctan" => "atan".to_string(),
        "log" => "log10".to_string(),
        "powe" => "exp".to_string(),
        _ => low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(canonicalize("3+4*2", 0.0), Ok("3+4*2".to_string()));
        assert_eq!(canonicalize("10/05", 0.0), Ok("10/05".to_string()));
        assert_eq!(canonicalize("(3+4)*2", 0.0), Ok("(3+4)*2".to_string()));
    }

    #[test]
    fn test_constants_word_matched() {
        assert_eq!(canonicalize("π+pi*2", 0.0), Ok("pi+pi*2".to_string()));
        assert_eq!(canonicalize("2e", 0.0), Ok("2e".to_string()));
        // names containing the constant's letter must never be mangled
        assert_eq!(canonicalize("exp(2)", 0.0), Ok("exp(2)".to_string()));
        assert_eq!(canonicalize("mean(3)", 0.0), Ok("mean(3)".to_string()));
        assert_eq!(canonicalize("e+mean(e)", 0.0), Ok("e+mean(e)".to_string()));
    }

    #[test]
    fn test_ans_substitution() {
        assert_eq!(canonicalize("ans*3", 4.0), Ok("(4)*3".to_string()));
        assert_eq!(canonicalize("2-ans", -1.5), Ok("2-(-1.5)".to_string()));
        // only the standalone word is substituted
        assert_eq!(canonicalize("answer", 4.0), Ok("answer".to_string()));
    }

    #[test]
    fn test_power_symbol() {
        assert_eq!(canonicalize("2^3^2", 0.0), Ok("2**3**2".to_string()));
        assert_eq!(canonicalize("2**3", 0.0), Ok("2**3".to_string()));
    }

    #[test]
    fn test_function_aliases() {
        assert_eq!(canonicalize("arcsin(0.5)", 0.0), Ok("asin(0.5)".to_string()));
        assert_eq!(canonicalize("arctan(1)+arccos(0)", 0.0), Ok("atan(1)+acos(0)".to_string()));
        assert_eq!(canonicalize("log(100)", 0.0), Ok("log10(100)".to_string()));
        assert_eq!(canonicalize("powE(1)", 0.0), Ok("exp(1)".to_string()));
        assert_eq!(canonicalize("LN(2)+SQRT(4)", 0.0), Ok("ln(2)+sqrt(4)".to_string()));
        assert_eq!(canonicalize("pow10(2)", 0.0), Ok("pow10(2)".to_string()));
    }

    #[test]
    fn test_length_guard() {
        let long = "1+".repeat(MAX_EXPR_LEN);
        assert_eq!(canonicalize(&long, 0.0), Err(CalcError::ExpressionTooLong(long.len())));
    }
}
