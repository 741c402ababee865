use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates an integer arithmetic operation.
///
/// All operations are checked: a zero right operand of `/` or `%` is
/// reported instead of trapping, and results that do not fit into `i64`
/// (including `i64::MIN / -1`) are reported as `Overflow`. Division and
/// modulo truncate toward zero.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use intscript::{
///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mod, -7, 3, 1), Ok(-1));
///
/// let result = eval_binary(BinaryOperator::Div, 1, 0, 1);
/// assert_eq!(result, Err(RuntimeError::DivisionByZero { line: 1 }));
/// ```
///
/// # Errors
/// `DivisionByZero`, `ModuloByZero` or `Overflow`.
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            left.checked_div(right)
        },
        Mod => {
            if right == 0 {
                return Err(RuntimeError::ModuloByZero { line });
            }
            left.checked_rem(right)
        },
    };

    result.ok_or(RuntimeError::Overflow { line })
}
