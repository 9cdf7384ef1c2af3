//! # Interactive scientific calculator engine
//!
//! The crate implements the whole engine of a button-driven scientific
//! calculator: an expression buffer that is edited one token at a time, a
//! memory register, a last-answer register, degree/radian angle modes, and a
//! real expression evaluator. Nothing is ever executed as code: the buffer is
//! normalized into a closed grammar and reduced by a shunting-yard stack, so
//! no text a user types can reach anything but the arithmetic below.
//!
//! Evaluation is plain 64-bit floating point. `NaN` and the infinities are
//! ordinary results: `sqrt(0-1)` shows `NaN`, `pow10(400)` shows `Infinity`.
//! A zero denominator is an error, not a silent infinity, and it is detected
//! structurally during reduction, so `5/(3-3)` fails the same way `5/0` does
//! while `10/05` quietly evaluates to `2`.
//!
//! Operators (starting from highest priority):
//! * `!` - factorial (when used after a number or closing bracket)
//! * `-` - unary minus
//! * `**` (or `^` on the surface) - power, right associative
//! * `*`, `/`, `%` - multiplication, division, remainder
//! * `+`, `-` - addition, subtraction
//!
//! The list of supported functions:
//! * trigonometric functions (including inverted ones): sin, cos, tan,
//!   arcsin, arccos, arctan - they honor the session's angle mode
//! * logarithms: ln, log (base 10)
//! * square root: sqrt
//! * fixed-base powers: pow10 (10^x) and powE (e^x)
//!
//! Predefined constants:
//! * `pi` (also the glyph `π`) - 3.14159...
//! * `e` - 2.71828...
//! * `ans` - the result of the last successful calculation
//!
//! A value standing right before a bracket or a function multiplies
//! implicitly: `(3+2)(4-9)` is `-25`, `2pi` is `6.28...`.
//!
//! The [`Calculator`](session::Calculator) session owns all the state and is
//! what an input layer drives:
//!
//! ```
//! use scicalc_lib::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.append("2+2");
//! calc.evaluate();
//! assert_eq!(calc.result(), "4");
//! calc.clear_all();
//! calc.append("ans*3");
//! calc.evaluate();
//! assert_eq!(calc.result(), "12");
//! ```

#[macro_use]
extern crate pest_derive;

pub mod canon;
pub mod errors;
pub mod funcs;
pub mod parse;
pub mod session;
pub mod stack;
pub mod value;

pub use crate::errors::CalcError;
pub use crate::funcs::AngleMode;
pub use crate::parse::eval;
pub use crate::session::Calculator;
pub use crate::value::CalcResult;
