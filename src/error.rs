/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, malformed
/// numeric literals, unexpected tokens, and unbalanced parentheses. A parse
/// error discards the current line; the read loop continues with the next one.
pub mod parse_error;
/// Evaluation notices.
///
/// Contains the non-fatal conditions that can be reported while evaluating an
/// expression. Notices accompany a successfully computed value rather than
/// replacing it; division by zero is the only notice the calculator raises.
pub mod notice;

pub use notice::EvalNotice;
pub use parse_error::ParseError;
