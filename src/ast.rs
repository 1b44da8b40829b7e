/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers every construct the expression grammar can produce: numeric
/// literals, variable and constant references, unary and binary operations,
/// and calls to registered functions. A tree is built once per parse and is
/// read-only afterwards; each node is exclusively owned by its parent, so the
/// tree has no sharing and no cycles.
///
/// Every node records the source column of the token it was built from for
/// error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.5`.
    Number {
        /// The literal value.
        value:    f64,
        /// Source column of the literal.
        position: usize,
    },
    /// Reference to a variable bound by the evaluation environment.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Source column of the identifier.
        position: usize,
    },
    /// Reference to a registered named constant such as `pi`.
    Constant {
        /// Name of the constant.
        name:     String,
        /// Source column of the identifier.
        position: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Source column of the operator.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Source column of the operator.
        position: usize,
    },
    /// A call to a registered function (e.g. `cos(x)`).
    ///
    /// The argument count always equals the function's registered arity when
    /// the tree was produced by the parser.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
        /// Source column of the function identifier.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use vecfield::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::Constant { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover the four arithmetic operations and exponentiation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Identity (e.g. `+x`); evaluates to its operand unchanged.
    Identity,
}
