use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::symbols::Symbols,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Variable bindings for a single evaluation.
///
/// An environment maps variable names to numeric values. It is built fresh
/// for every evaluation call and discarded afterwards; it is the only
/// per-call state, so evaluations of the same tree with the same environment
/// are independent of each other.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Creates an environment binding the render pass variables `x` and `y`.
    ///
    /// # Example
    /// ```
    /// use vecfield::interpreter::evaluator::Environment;
    ///
    /// let env = Environment::xy(1.0, 2.0);
    ///
    /// assert_eq!(env.get("x"), Some(1.0));
    /// assert_eq!(env.get("y"), Some(2.0));
    /// ```
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        let mut env = Self::new();
        env.bind("x", x);
        env.bind("y", y);
        env
    }

    /// Binds a variable to a value, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: f64) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Looks up a variable binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }
}

/// Evaluates an expression tree to a number.
///
/// The walk is post-order: children are evaluated first, then the node's
/// operation is applied. Variables are looked up in the environment,
/// constants and functions in the symbol tables. Arithmetic follows
/// IEEE 754, so `1 / 0` yields infinity rather than an error. Nothing is
/// memoized or short-circuited; every visit evaluates fully, and a
/// `random()` call produces a fresh value at every occurrence.
///
/// # Parameters
/// - `expr`: Expression tree to evaluate.
/// - `env`: Variable bindings for this evaluation.
/// - `symbols`: Symbol tables constants and functions are resolved against.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `UnknownVariable` when the environment does not bind a referenced
///   variable.
/// - `UnknownConstant`, `UnknownFunction`, and `ArgumentCountMismatch` for
///   trees that do not match the given symbol tables; a tree the parser
///   built against the same tables never triggers these.
///
/// # Example
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
/// let expr = compile("2 ^ 3 ^ 2", &symbols).unwrap();
///
/// let result = evaluate(&expr, &Environment::new(), &symbols).unwrap();
/// assert_eq!(result, 512.0);
/// ```
pub fn evaluate(expr: &Expr, env: &Environment, symbols: &Symbols) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),

        Expr::Variable { name, position } => {
            env.get(name)
               .ok_or_else(|| EvalError::UnknownVariable { name:     name.clone(),
                                                           position: *position, })
        },

        Expr::Constant { name, position } => {
            symbols.constant(name)
                   .ok_or_else(|| EvalError::UnknownConstant { name:     name.clone(),
                                                               position: *position, })
        },

        Expr::UnaryOp { op, expr, .. } => {
            let value = evaluate(expr, env, symbols)?;
            Ok(match op {
                UnaryOperator::Negate => -value,
                UnaryOperator::Identity => value,
            })
        },

        Expr::BinaryOp { left, op, right, .. } => {
            let lhs = evaluate(left, env, symbols)?;
            let rhs = evaluate(right, env, symbols)?;
            Ok(match op {
                BinaryOperator::Add => lhs + rhs,
                BinaryOperator::Sub => lhs - rhs,
                BinaryOperator::Mul => lhs * rhs,
                BinaryOperator::Div => lhs / rhs,
                BinaryOperator::Pow => lhs.powf(rhs),
            })
        },

        Expr::FunctionCall { name,
                             arguments,
                             position, } => {
            let function = match symbols.function(name) {
                Some(function) => function,
                None => {
                    return Err(EvalError::UnknownFunction { name:     name.clone(),
                                                            position: *position, });
                },
            };

            if arguments.len() != function.arity {
                return Err(EvalError::ArgumentCountMismatch { name:     name.clone(),
                                                              expected: function.arity,
                                                              found:    arguments.len(),
                                                              position: *position, });
            }

            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                args.push(evaluate(argument, env, symbols)?);
            }

            Ok((function.func)(&args))
        },
    }
}
