use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalNotice,
};

/// The result of evaluating one input line.
///
/// Pairs the computed value with any non-fatal notices raised along the way.
/// A division by zero produces a notice and a `0.0` substitute for the
/// affected sub-expression, so `value` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value of the expression.
    pub value:   f64,
    /// Non-fatal notices raised during evaluation, in source order.
    pub notices: Vec<EvalNotice>,
}

impl std::fmt::Display for Evaluation {
    /// Formats the result line exactly as printed by the command-line tool:
    /// the value with two decimal places behind a fixed label.
    ///
    /// ## Example
    /// ```
    /// use calcline::evaluate_line;
    ///
    /// let evaluation = evaluate_line("1 + 2 * 3").unwrap();
    /// assert_eq!(evaluation.to_string(), "Resultado: 7.00");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Resultado: {:.2}", self.value)
    }
}

/// Walks an expression tree and computes its value.
///
/// The evaluator holds no state between lines except the notices collected
/// for the expression currently being evaluated. Create one per line, call
/// [`eval`](Self::eval), then take the notices with
/// [`into_notices`](Self::into_notices).
pub struct Evaluator {
    notices: Vec<EvalNotice>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates a new evaluator with no recorded notices.
    #[must_use]
    pub const fn new() -> Self {
        Self { notices: Vec::new() }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Dispatches on the expression variant: literals evaluate to themselves,
    /// binary operations evaluate both operands left to right and then apply
    /// the operator. Nothing here is fatal; division by zero is recorded as a
    /// notice and the sub-expression evaluates to `0.0`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval(&mut self, expr: &Expr) -> f64 {
        match expr {
            Expr::Literal { value, .. } => *value,
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                let left = self.eval(left);
                let right = self.eval(right);
                self.eval_binary_op(*op, left, right, *column)
            },
        }
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// Division checks the right operand against exactly `0.0`; a zero
    /// divisor raises a [`EvalNotice::DivisionByZero`] and yields `0.0` so
    /// that evaluation of the enclosing expression continues.
    fn eval_binary_op(&mut self, op: BinaryOperator, left: f64, right: f64, column: usize) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => {
                if right == 0.0 {
                    debug!("division by zero at column {column}, substituting 0.0");
                    self.notices.push(EvalNotice::DivisionByZero { column });
                    0.0
                } else {
                    left / right
                }
            },
        }
    }

    /// Consumes the evaluator and returns the notices it collected.
    #[must_use]
    pub fn into_notices(self) -> Vec<EvalNotice> {
        self.notices
    }
}
