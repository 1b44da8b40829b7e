//! # vecfield
//!
//! vecfield compiles user-entered math expressions such as
//! `cos(y + (pi / 2))^2` into an abstract syntax tree and evaluates that
//! tree at arbitrary variable bindings, driving a 2D vector-field
//! visualization. One tree per field component is built per parse; during a
//! render pass each tree is evaluated once per grid point with a fresh
//! environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{lexer::lex, parser::core::parse, symbols::Symbols},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all grammar constructs.
/// - Attaches source columns to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// evaluating an expression. Errors carry enough context (offending
/// character or token, source column) for precise reporting, and an
/// aggregate type lets any of them propagate to the rendering boundary
/// unchanged.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches source columns and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Samples a vector field over a rectangular grid.
///
/// This module owns the render-pass math: it walks a fixed grid over a
/// rectangular domain, evaluates both component expressions at every point
/// with a fresh environment, and normalizes each result into a unit
/// direction for drawing.
///
/// # Responsibilities
/// - Compiles the two component expressions of a field.
/// - Produces one normalized sample per grid point, in row-major order.
/// - Aborts the whole pass on the first failure.
pub mod field;
/// Orchestrates expression compilation and evaluation.
///
/// This module ties together the lexer, parser, evaluator, and symbol
/// tables. Data flows one direction: string to tokens, tokens to tree, tree
/// plus environment to number.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, symbols.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Compiles an expression string into an evaluatable tree.
///
/// This runs the lexer and the parser. The resulting tree is immutable and
/// can be evaluated any number of times against fresh environments; it is
/// discarded and rebuilt whenever the source string changes.
///
/// # Errors
/// Returns an error if the input fails to lex or parse. Nothing is caught
/// in between; the first failure propagates to the caller.
///
/// # Examples
/// ```
/// use vecfield::{
///     compile,
///     interpreter::{
///         evaluator::{Environment, evaluate},
///         symbols::Symbols,
///     },
/// };
///
/// let symbols = Symbols::standard();
/// let expr = compile("x + y", &symbols).unwrap();
///
/// let result = evaluate(&expr, &Environment::xy(2.0, 3.0), &symbols).unwrap();
/// assert_eq!(result, 5.0);
///
/// // A malformed expression fails to compile.
/// assert!(compile("1 +", &symbols).is_err());
/// ```
pub fn compile(source: &str, symbols: &Symbols) -> Result<Expr, Error> {
    let tokens = lex(source)?;
    let expr = parse(&tokens, symbols)?;
    Ok(expr)
}
