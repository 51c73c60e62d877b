/// The lexer module tokenizes one input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line text and produces a sequence of
/// tokens, each corresponding to a meaningful element: numeric literals,
/// the four arithmetic operators, and parentheses. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Skips spaces and tabs between tokens.
/// - Reports lexical errors for unrecognized characters and malformed
///   numeric literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that reflects operator precedence and associativity,
/// with one recursive-descent function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into structured [`Expr`](crate::ast::Expr) nodes.
/// - Enforces the grammar, reporting errors with column info.
/// - Rejects leftover tokens after a complete expression.
pub mod parser;
/// The evaluator module computes the numeric result of a parsed expression.
///
/// The evaluator walks the AST and reduces it to a single `f64`. Division by
/// zero is not fatal: it is recorded as a notice and the affected
/// sub-expression evaluates to `0.0`, letting the surrounding expression
/// finish.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Collects non-fatal notices alongside the computed value.
/// - Formats the final result line.
pub mod evaluator;
