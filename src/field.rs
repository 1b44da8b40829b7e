use crate::{
    ast::Expr,
    compile,
    error::Error,
    interpreter::{
        evaluator::{Environment, evaluate},
        symbols::Symbols,
    },
};

/// Rectangular region of the plane a field is sampled over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Left edge.
    pub x0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y0: f64,
    /// Top edge.
    pub y1: f64,
}

/// A 2D vector field described by one compiled expression per component.
///
/// Both trees are immutable once compiled; a field is rebuilt whenever
/// either source string changes.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    /// Expression for the x component.
    pub xfunc: Expr,
    /// Expression for the y component.
    pub yfunc: Expr,
}

impl VectorField {
    /// Compiles both component expressions.
    ///
    /// # Errors
    /// Returns the first lexing or parsing failure from either component.
    ///
    /// # Example
    /// ```
    /// use vecfield::{field::VectorField, interpreter::symbols::Symbols};
    ///
    /// let symbols = Symbols::standard();
    /// let field = VectorField::compile("cos(y + (pi / 2))^2", "sin(x)^2", &symbols);
    ///
    /// assert!(field.is_ok());
    /// ```
    pub fn compile(xsrc: &str, ysrc: &str, symbols: &Symbols) -> Result<Self, Error> {
        Ok(Self { xfunc: compile(xsrc, symbols)?,
                  yfunc: compile(ysrc, symbols)?, })
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// X coordinate of the grid point.
    pub x:         f64,
    /// Y coordinate of the grid point.
    pub y:         f64,
    /// X component of the normalized direction. Zero when the raw vector is
    /// zero.
    pub dx:        f64,
    /// Y component of the normalized direction. Zero when the raw vector is
    /// zero.
    pub dy:        f64,
    /// Magnitude of the raw, unnormalized vector.
    pub magnitude: f64,
}

/// Samples a vector field over a `(steps + 1)` by `(steps + 1)` grid.
///
/// Grid points are visited in row-major order starting from `(x0, y0)`. For
/// each point a fresh environment binding `x` and `y` is built, both
/// component expressions are evaluated, and the resulting vector is
/// normalized to a unit direction. A zero vector keeps a zero direction.
///
/// Cells are independent; the ordering is deterministic but carries no
/// meaning beyond presentation.
///
/// # Parameters
/// - `field`: Compiled component expressions.
/// - `domain`: Rectangular sample region.
/// - `steps`: Number of grid steps along each axis; must be nonzero.
/// - `symbols`: Symbol tables the expressions were compiled against.
///
/// # Returns
/// All `(steps + 1) * (steps + 1)` samples.
///
/// # Errors
/// The first evaluation failure aborts the whole pass; no partial grid is
/// returned.
///
/// # Example
/// ```
/// use vecfield::{
///     field::{Domain, VectorField, sample},
///     interpreter::symbols::Symbols,
/// };
///
/// let symbols = Symbols::standard();
/// let field = VectorField::compile("1", "0", &symbols).unwrap();
/// let domain = Domain { x0: 0.0,
///                       x1: 1.0,
///                       y0: 0.0,
///                       y1: 1.0, };
///
/// let samples = sample(&field, &domain, 1, &symbols).unwrap();
///
/// assert_eq!(samples.len(), 4);
/// assert_eq!(samples[0].dx, 1.0);
/// ```
pub fn sample(field: &VectorField,
              domain: &Domain,
              steps: u32,
              symbols: &Symbols)
              -> Result<Vec<Sample>, Error> {
    let width = domain.x1 - domain.x0;
    let height = domain.y1 - domain.y0;
    let divisions = f64::from(steps);

    let side = steps as usize + 1;
    let mut samples = Vec::with_capacity(side * side);

    for row in 0..=steps {
        for col in 0..=steps {
            let x = (width / divisions) * f64::from(col) + domain.x0;
            let y = (height / divisions) * f64::from(row) + domain.y0;
            let env = Environment::xy(x, y);

            let vx = evaluate(&field.xfunc, &env, symbols)?;
            let vy = evaluate(&field.yfunc, &env, symbols)?;

            let magnitude = (vx * vx + vy * vy).sqrt();
            let (dx, dy) = if magnitude == 0.0 {
                (0.0, 0.0)
            } else {
                (vx / magnitude, vy / magnitude)
            };

            samples.push(Sample { x,
                                  y,
                                  dx,
                                  dy,
                                  magnitude });
        }
    }

    Ok(samples)
}
