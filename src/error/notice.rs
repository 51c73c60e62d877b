#[derive(Debug, Clone, PartialEq, Eq)]
/// A non-fatal condition reported while evaluating an expression.
///
/// Notices do not abort evaluation: the affected sub-expression is given a
/// substitute value and the surrounding expression continues to evaluate.
/// They are surfaced next to the final value so the caller can print them
/// before the result line.
pub enum EvalNotice {
    /// The right-hand operand of `/` evaluated to exactly `0.0`.
    /// The quotient is replaced with `0.0`.
    DivisionByZero {
        /// The column of the `/` operator in the input line.
        column: usize,
    },
}

impl std::fmt::Display for EvalNotice {
    /// Renders the notice as the exact line printed by the command-line tool.
    ///
    /// ## Example
    /// ```
    /// use calcline::error::EvalNotice;
    ///
    /// let notice = EvalNotice::DivisionByZero { column: 4 };
    /// assert_eq!(notice.to_string(), "Error: Division by zero at column 4.");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error: Division by zero at column {column}.")
            },
        }
    }
}

impl std::error::Error for EvalNotice {}
