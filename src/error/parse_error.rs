#[derive(Debug)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// The source column where the error occurred.
        position: usize,
    },
    /// Reached the end of the input unexpectedly.
    UnexpectedEndOfInput {
        /// The source column where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source column where the error occurred.
        position: usize,
    },
    /// A function identifier was not followed by an opening parenthesis.
    ExpectedOpeningParen {
        /// The name of the function.
        name:     String,
        /// The source column where the error occurred.
        position: usize,
    },
    /// A comma between function arguments was expected but not found.
    ExpectedComma {
        /// The source column where the error occurred.
        position: usize,
    },
    /// An identifier matched none of the symbol tables.
    UnrecognizedIdentifier {
        /// The unknown identifier.
        name:     String,
        /// The source column where the error occurred.
        position: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// The source column where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at column {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at column {position}: Unexpected end of expression.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at column {position}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedOpeningParen { name, position } => write!(f,
                                                                    "Error at column {position}: Expected opening parenthesis '(' after function '{name}'."),

            Self::ExpectedComma { position } => write!(f,
                                                       "Error at column {position}: Expected comma ',' between function arguments."),

            Self::UnrecognizedIdentifier { name, position } => {
                write!(f, "Error at column {position}: Unrecognized identifier '{name}'.")
            },

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at column {position}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
