use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
        symbols::Symbols,
    },
};

/// Binding strength of a binary operator token.
///
/// `^` binds tightest at 3, then `*` and `/` at 2, then `+` and `-` at 1.
/// Any other token reports -1, which stops binary folding; the end of input
/// behaves the same way.
///
/// # Example
/// ```
/// use vecfield::interpreter::{lexer::Token, parser::binary::precedence};
///
/// assert_eq!(precedence(&Token::Caret), 3);
/// assert_eq!(precedence(&Token::Star), 2);
/// assert_eq!(precedence(&Token::Comma), -1);
/// ```
#[must_use]
pub const fn precedence(token: &Token) -> i8 {
    match token {
        Token::Caret => 3,
        Token::Star | Token::Slash => 2,
        Token::Plus | Token::Minus => 1,
        _ => -1,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the five
/// binary operators, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Example
/// ```
/// use vecfield::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Folds binary operators into `lhs` by precedence climbing.
///
/// The loop consumes every operator whose precedence is at least `min_prec`.
/// After each operator a unary-prefixed operand is parsed, and any
/// immediately following operator that binds tighter is absorbed into the
/// right-hand side recursively before folding. `+`, `-`, `*`, and `/` are
/// left-associative; `^` is right-associative, so an equally tight `^` is
/// absorbed into the right-hand side as well and `2 ^ 3 ^ 2` groups as
/// `2 ^ (3 ^ 2)`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `min_prec`: Weakest binding strength this call may consume.
/// - `lhs`: Already-parsed left operand.
/// - `symbols`: Symbol tables identifiers are resolved against.
///
/// # Returns
/// A binary expression tree combining `lhs` with everything consumed.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_prec: i8,
                           mut lhs: Expr,
                           symbols: &Symbols)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        if let Some((token, position)) = tokens.peek()
           && precedence(token) >= min_prec
           && let Some(op) = token_to_binary_operator(token)
        {
            let prec = precedence(token);
            let position = *position;
            tokens.next();

            let mut rhs = parse_unary(tokens, symbols)?;

            while let Some((next, _)) = tokens.peek() {
                let next_prec = precedence(next);
                if next_prec > prec {
                    rhs = parse_binary(tokens, prec + 1, rhs, symbols)?;
                } else if next_prec == prec && matches!(next, Token::Caret) {
                    rhs = parse_binary(tokens, prec, rhs, symbols)?;
                } else {
                    break;
                }
            }

            lhs = Expr::BinaryOp { left: Box::new(lhs),
                                   op,
                                   right: Box::new(rhs),
                                   position };
            continue;
        }
        break;
    }
    Ok(lhs)
}
