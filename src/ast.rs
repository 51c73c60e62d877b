/// A binary arithmetic operator.
///
/// Covers the four operators understood by the calculator. Addition and
/// subtraction share the lowest precedence level; multiplication and division
/// share the highest. All four are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Sub,
    /// Multiplication, `*`.
    Mul,
    /// Division, `/`.
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Sub => f.write_str("-"),
            Self::Mul => f.write_str("*"),
            Self::Div => f.write_str("/"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Expressions are either numeric literals or binary operations; parenthesized
/// groups are folded away by the parser and leave no node of their own. Every
/// node records the 1-based source column it originated from, which error
/// notices use to point back into the input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The literal's value.
        value:  f64,
        /// 1-based column of the literal in the input line.
        column: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// 1-based column of the operator in the input line.
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    ///
    /// ## Example
    /// ```
    /// use calcline::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:  5.0,
    ///                            column: 3, };
    ///
    /// assert_eq!(expr.column(), 3);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. } | Self::BinaryOp { column, .. } => *column,
        }
    }
}
