use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_binary, unary::parse_unary},
        symbols::Symbols,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete expression from a token sequence.
///
/// This is the entry point for parsing. The entire sequence must form a
/// single expression: tokens left over after a complete expression are an
/// error, not ignored.
///
/// # Parameters
/// - `tokens`: Token sequence with column information, as produced by the
///   lexer.
/// - `symbols`: Symbol tables identifiers are resolved against.
///
/// # Returns
/// The root node of the parsed expression tree.
///
/// # Errors
/// - `UnexpectedTrailingTokens` when input remains after a complete
///   expression.
/// - Propagates any error from expression parsing.
///
/// # Example
/// ```
/// use vecfield::interpreter::{lexer::lex, parser::core::parse, symbols::Symbols};
///
/// let symbols = Symbols::standard();
/// let tokens = lex("1 + 2 * 3").unwrap();
///
/// assert!(parse(&tokens, &symbols).is_ok());
/// ```
pub fn parse(tokens: &[(Token, usize)], symbols: &Symbols) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, symbols)?;

    match iter.peek() {
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    format!("{token:?}"),
                                                       position: *position, })
        },
        None => Ok(expr),
    }
}

/// Parses a full expression.
///
/// A unary-prefixed operand is parsed first, then binary operators are
/// folded in by precedence climbing starting from the weakest binding
/// strength.
///
/// Grammar: `expression := unary binary*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `symbols`: Symbol tables identifiers are resolved against.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, symbols: &Symbols) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_unary(tokens, symbols)?;
    parse_binary(tokens, 0, lhs, symbols)
}
