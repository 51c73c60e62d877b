use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one complete input line.
///
/// This is the entry point for parsing: it parses a full expression and then
/// requires the token sequence to be exhausted, so inputs like `1 2` or
/// `1 + 2)` are rejected rather than silently truncated.
///
/// Grammar: `line := expression <end of tokens>`
///
/// # Parameters
/// - `tokens`: The tokens of one line, each with its source column.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - [`ParseError::TrailingTokens`] if tokens remain after the expression.
/// - Propagates any errors from expression parsing.
pub fn parse_line(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some((token, column)) => Err(ParseError::TrailingTokens { token:  token.to_string(),
                                                                  column: *column, }),
        None => {
            trace!("parsed expression: {expr:?}");
            Ok(expr)
        },
    }
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition/subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `3 - 2 - 1`
/// parses as `(3 - 2) - 1`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column: *column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column: *column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a factor, the tightest-binding grammar production.
///
/// A factor is either a numeric literal or a parenthesized expression, which
/// may appear anywhere a factor is expected, recursively.
///
/// Grammar: `factor := NUMBER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor; a parenthesized group returns the inner expression
/// as-is (no wrapper node).
///
/// # Errors
/// - [`ParseError::ExpectedClosingParen`] if a group is never closed.
/// - [`ParseError::UnexpectedToken`] for a token that cannot start a factor.
/// - [`ParseError::UnexpectedEndOfInput`] if the line ends mid-expression.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), column)) => Ok(Expr::Literal { value:  *value,
                                                                   column: *column, }),

        Some((Token::LParen, column)) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { column: *column }),
            }
        },

        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   column: *column, }),

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// arithmetic operators, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use calcline::{ast::BinaryOperator,
///                interpreter::{lexer::Token, parser::token_to_binary_operator}};
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
