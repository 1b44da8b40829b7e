use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        symbols::Symbols,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators:
/// - `-` (numeric negation)
/// - `+` (identity)
///
/// Unary operators may be chained, so `--x` parses as `-(-x)`. A unary
/// operator binds only its unary-then-primary operand; binary folding
/// resumes on the result, so `-5^2` parses as `(-5)^2`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `symbols`: Symbol tables identifiers are resolved against.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, symbols: &Symbols) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens, symbols)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else if let Some((Token::Plus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_unary(tokens, symbols)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Identity,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_primary(tokens, symbols)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - parenthesized sub-expressions
/// - identifiers, resolved against the symbol tables
///
/// This function does not handle unary or binary operators.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
///              | identifier
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `symbols`: Symbol tables identifiers are resolved against.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   symbols: &Symbols)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Number { value:    *value,
                                                                    position: *position, }),

        Some((Token::LParen, position)) => {
            let expr = parse_expression(tokens, symbols)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { position: *position }),
            }
        },

        Some((Token::Identifier(name), position)) => {
            parse_identifier(tokens, name, *position, symbols)
        },

        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                              position: *position, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Resolves an identifier against the symbol tables.
///
/// Resolution order is fixed: variable table first, then constants, then
/// functions. A function identifier must be followed by a parenthesized
/// argument list, which is consumed here. An identifier matching none of
/// the three tables is an error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the identifier.
/// - `name`: The identifier's text.
/// - `position`: Source column of the identifier.
/// - `symbols`: Symbol tables the name is resolved against.
///
/// # Returns
/// - [`Expr::Variable`] for a registered variable,
/// - [`Expr::Constant`] for a registered constant,
/// - [`Expr::FunctionCall`] for a registered function.
///
/// # Errors
/// - `UnrecognizedIdentifier` when the name matches no table.
/// - `ExpectedOpeningParen` when a function name is not followed by `(`.
/// - `ExpectedClosingParen` when the argument list is not closed by `)`.
/// - Propagates argument-list errors.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           position: usize,
                           symbols: &Symbols)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if symbols.is_variable(name) {
        return Ok(Expr::Variable { name: name.to_string(),
                                   position });
    }
    if symbols.constant(name).is_some() {
        return Ok(Expr::Constant { name: name.to_string(),
                                   position });
    }

    let function = match symbols.function(name) {
        Some(function) => function,
        None => {
            return Err(ParseError::UnrecognizedIdentifier { name: name.to_string(),
                                                            position });
        },
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => {
            return Err(ParseError::ExpectedOpeningParen { name: name.to_string(),
                                                          position });
        },
    }

    let arguments = parse_arguments(tokens, function.arity, symbols)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::FunctionCall { name: name.to_string(),
                                                            arguments,
                                                            position }),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a function's comma-separated argument list.
///
/// Exactly `arity` expressions are consumed, separated by commas. The
/// closing parenthesis is left for the caller, so an over-long list fails
/// there while an under-long list fails here on the missing comma. A
/// zero-arity function consumes nothing.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first argument or at the
///   closing parenthesis for a zero-arity function.
/// - `arity`: Number of arguments to parse.
/// - `symbols`: Symbol tables identifiers are resolved against.
///
/// # Returns
/// A vector of exactly `arity` parsed argument expressions.
fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                          arity: usize,
                          symbols: &Symbols)
                          -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::with_capacity(arity);

    for i in 0..arity {
        arguments.push(parse_expression(tokens, symbols)?);

        if i + 1 >= arity {
            break;
        }

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((_, position)) => {
                return Err(ParseError::ExpectedComma { position: *position });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
        }
    }

    Ok(arguments)
}
