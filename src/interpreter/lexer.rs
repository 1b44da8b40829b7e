use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in an expression string.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5`, or `1.`.
    ///
    /// A literal is a digit run containing at most one decimal point; a
    /// second point ends the literal and is not consumed.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable, constant, or function names such as `x`
    /// or `cos`. Lowercase-initial, greedy over lowercase letters and
    /// digits. Uppercase letters and underscores never lex.
    #[regex(r"[a-z][a-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Spaces between tokens. Only the space character is skipped; tabs and
    /// all other whitespace are lexical errors.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression string.
///
/// Tokens are produced in left-to-right order as `(Token, column)` pairs,
/// where the column is the 1-based position of the token's first character.
/// Spaces are skipped and never emitted.
///
/// # Errors
/// Returns a [`LexError`] carrying the offending character and its column
/// when a character outside the accepted alphabet is encountered.
///
/// # Example
/// ```
/// use vecfield::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("1 + x").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 1),
///                 (Token::Plus, 3),
///                 (Token::Identifier("x".to_string()), 5)]);
/// ```
pub fn lex(input: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start + 1)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError { character,
                                      position: lexer.span().start + 1, });
            },
        }
    }

    Ok(tokens)
}
