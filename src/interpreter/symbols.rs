/// Type alias for native function implementations.
///
/// A native receives its evaluated arguments in call order and returns the
/// computed value. The evaluator checks the slice length against the
/// registered arity before dispatching, so implementations index their
/// arguments directly.
pub type NativeFn = fn(&[f64]) -> f64;

/// A named native function together with its fixed arity.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    /// Name under which the function is callable.
    pub name:  &'static str,
    /// Exact number of arguments the function accepts.
    pub arity: usize,
    /// Implementation invoked with the evaluated arguments.
    pub func:  NativeFn,
}

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the operation.
///
/// The macro produces:
/// - `FUNCTION_TABLE` (the table the standard symbols expose),
/// - `FUNCTION_NAMES` (public list of function names).
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Native functions available through [`Symbols::standard`].
        pub const FUNCTION_TABLE: &[Function] = &[
            $(
                Function { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every native function, in registration order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "abs"    => { arity: 1, func: |args| args[0].abs() },
    "acos"   => { arity: 1, func: |args| args[0].acos() },
    "acosh"  => { arity: 1, func: |args| args[0].acosh() },
    "asin"   => { arity: 1, func: |args| args[0].asin() },
    "asinh"  => { arity: 1, func: |args| args[0].asinh() },
    "atan2"  => { arity: 2, func: |args| args[0].atan2(args[1]) },
    "atan"   => { arity: 1, func: |args| args[0].atan() },
    "atanh"  => { arity: 1, func: |args| args[0].atanh() },
    "ceil"   => { arity: 1, func: |args| args[0].ceil() },
    "cos"    => { arity: 1, func: |args| args[0].cos() },
    "floor"  => { arity: 1, func: |args| args[0].floor() },
    "ln"     => { arity: 1, func: |args| args[0].ln() },
    "log2"   => { arity: 1, func: |args| args[0].log2() },
    "log"    => { arity: 1, func: |args| args[0].log10() },
    "max"    => { arity: 2, func: |args| args[0].max(args[1]) },
    "min"    => { arity: 2, func: |args| args[0].min(args[1]) },
    "random" => { arity: 0, func: |_| rand::random::<f64>() },
    "round"  => { arity: 1, func: |args| args[0].round() },
    "sin"    => { arity: 1, func: |args| args[0].sin() },
    "sqrt"   => { arity: 1, func: |args| args[0].sqrt() },
    "tan"    => { arity: 1, func: |args| args[0].tan() },
}

/// Variables the render pass binds at every grid point.
pub const VARIABLES: &[&str] = &["x", "y"];

/// Named constants and their values.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Immutable symbol tables shared by the parser and the evaluator.
///
/// The tables are built once and never mutated; parser and evaluator receive
/// them by reference rather than reaching for ambient globals, so tests can
/// supply alternate tables.
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    /// Names the evaluation environment is expected to bind.
    pub variables: &'static [&'static str],
    /// Name-to-value constant table.
    pub constants: &'static [(&'static str, f64)],
    /// Native function table.
    pub functions: &'static [Function],
}

impl Symbols {
    /// Returns the standard symbol tables: variables `x` and `y`, constants
    /// `pi` and `e`, and the native function set.
    ///
    /// # Example
    /// ```
    /// use vecfield::interpreter::symbols::Symbols;
    ///
    /// let symbols = Symbols::standard();
    ///
    /// assert!(symbols.is_variable("x"));
    /// assert_eq!(symbols.constant("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(symbols.function("atan2").unwrap().arity, 2);
    /// ```
    #[must_use]
    pub const fn standard() -> Self {
        Self { variables: VARIABLES,
               constants: CONSTANTS,
               functions: FUNCTION_TABLE, }
    }

    /// Tests whether `name` is a registered variable.
    #[must_use]
    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains(&name)
    }

    /// Looks up a constant by name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| *value)
    }

    /// Looks up a native function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name == name)
    }
}
