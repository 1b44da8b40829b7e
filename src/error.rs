/// Lexing errors.
///
/// Defines the error raised when the lexer meets a character outside the
/// accepted input alphabet.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence.
/// Parse errors include unexpected tokens, missing parentheses or commas,
/// unrecognized identifiers, and trailing input after a complete expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while evaluating a tree.
/// Arithmetic edge cases are not errors; they follow floating-point
/// semantics.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Any failure the expression pipeline can produce.
///
/// Lexing, parsing, and evaluation each have their own error type; this enum
/// carries whichever of the three occurred so that a failure propagates to
/// the rendering boundary untouched. No intermediate layer catches or
/// retries; the boundary reports the error and aborts the pass.
pub enum Error {
    /// The input string failed to tokenize.
    Lex(LexError),
    /// The token sequence failed to parse.
    Parse(ParseError),
    /// The tree failed to evaluate.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
