use log::trace;
use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// The rule deliberately accepts any dot/digit run that starts with a
    /// digit; runs that do not parse as a finite float (e.g. `1.2.3`) are
    /// reported as [`ParseError::InvalidNumber`] by [`tokenize`].
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Ignored => f.write_str(" "),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid, finite float.
/// - `None`: If the slice is not a valid float (e.g. multiple dots).
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

/// Tokenizes one input line.
///
/// Produces the full token sequence for the line, each token paired with its
/// 1-based source column. The end of the sequence stands for the end of the
/// line's input; no explicit end marker token is emitted.
///
/// # Parameters
/// - `source`: The raw text of one input line.
///
/// # Returns
/// The tokens of the line with their columns, in source order.
///
/// # Errors
/// - [`ParseError::InvalidNumber`] if a digit/dot run fails to parse as a
///   finite float. Tokenization of the line stops at the offending run.
/// - [`ParseError::UnexpectedCharacter`] for any character matching no token
///   rule. Tokenization of the line stops at the offending character.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 1), (Token::Plus, 3), (Token::Number(2.0), 5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(ParseError::InvalidNumber { literal: slice.to_string(),
                                                           column });
                }
                return Err(ParseError::UnexpectedCharacter { found: slice.to_string(),
                                                             column });
            },
        }
    }

    trace!("tokenized {} tokens from {source:?}", tokens.len());
    Ok(tokens)
}
