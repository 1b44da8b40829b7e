#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raised when the lexer meets a character outside the accepted alphabet.
///
/// The accepted alphabet is limited to digits, lowercase ASCII letters, the
/// operator and punctuation set, and the space character. Uppercase letters
/// and underscores are deliberately rejected.
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// The 1-based source column of the character.
    pub position:  usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { character, position } = self;
        write!(f, "Error at column {position}: Unrecognized character '{character}'.")
    }
}

impl std::error::Error for LexError {}
