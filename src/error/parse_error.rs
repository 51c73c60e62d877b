#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Each variant renders as a single message line starting with `Error: `,
/// which is the exact line the command-line tool prints for a failed input.
/// Columns are 1-based positions in the input line.
pub enum ParseError {
    /// Found a character that matches no token rule.
    UnexpectedCharacter {
        /// The offending character.
        found:  String,
        /// The column where the character occurred.
        column: usize,
    },
    /// A numeric-literal-looking run failed to parse as a finite float.
    InvalidNumber {
        /// The offending substring, e.g. `1.2.3`.
        literal: String,
        /// The column where the literal starts.
        column:  usize,
    },
    /// Found a token that cannot appear at this point in the grammar.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token occurred.
        column: usize,
    },
    /// Reached the end of the line in the middle of an expression.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the unmatched opening parenthesis.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first leftover token.
        token:  String,
        /// The column where the leftover token occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error: Unexpected character '{found}' at column {column}.")
            },

            Self::InvalidNumber { literal, column } => {
                write!(f, "Error: Invalid number '{literal}' at column {column}.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error: Unexpected token '{token}' at column {column}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error: Expected closing parenthesis ')' for the group opened at column {column}."),

            Self::TrailingTokens { token, column } => write!(f,
                                                             "Error: Unexpected trailing token '{token}' at column {column}."),
        }
    }
}

impl std::error::Error for ParseError {}
