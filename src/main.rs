use clap::Parser;
use vecfield::{
    error::Error,
    field::{Domain, Sample, VectorField, sample},
    interpreter::symbols::Symbols,
};

/// Renders a 2D vector field described by two math expressions, one per
/// component, sampled over a rectangular domain.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression for the x component of the field.
    #[arg(long, default_value = "cos(y + (pi / 2))^2")]
    xfunc: String,

    /// Expression for the y component of the field.
    #[arg(long, default_value = "sin(x)^2")]
    yfunc: String,

    /// Left edge of the domain.
    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    x0: f64,

    /// Right edge of the domain.
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    x1: f64,

    /// Bottom edge of the domain.
    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    y0: f64,

    /// Top edge of the domain.
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    y1: f64,

    /// Number of grid steps along each axis.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,

    /// Print the registered variables, constants, and functions, then exit.
    #[arg(long)]
    symbols: bool,
}

fn main() {
    let args = Args::parse();
    let symbols = Symbols::standard();

    if args.symbols {
        print_symbols(&symbols);
        return;
    }

    if let Err(e) = run(&args, &symbols) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Compiles both expressions, samples the grid, and prints it as rows of
/// direction glyphs.
fn run(args: &Args, symbols: &Symbols) -> Result<(), Error> {
    let field = VectorField::compile(&args.xfunc, &args.yfunc, symbols)?;
    let domain = Domain { x0: args.x0,
                          x1: args.x1,
                          y0: args.y0,
                          y1: args.y1, };

    let samples = sample(&field, &domain, args.steps, symbols)?;

    // Samples arrive bottom row first; the terminal prints top-down.
    let side = args.steps as usize + 1;
    for row in (0..side).rev() {
        let mut line = String::with_capacity(side * 2);
        for col in 0..side {
            line.push(glyph(&samples[row * side + col]));
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }

    Ok(())
}

/// Picks a glyph for a sample: one of eight arrows matching the direction's
/// octant, or a dot for a zero vector.
fn glyph(sample: &Sample) -> char {
    const ARROWS: [char; 8] = ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'];

    if sample.dx == 0.0 && sample.dy == 0.0 {
        return '·';
    }

    let angle = sample.dy.atan2(sample.dx);
    let octant = (angle / (std::f64::consts::PI / 4.0)).round().rem_euclid(8.0) as usize;
    ARROWS[octant % 8]
}

/// Prints the names the parser accepts: variables, constants, and
/// functions.
fn print_symbols(symbols: &Symbols) {
    println!("variables: {}", symbols.variables.join(", "));

    let constants = symbols.constants
                           .iter()
                           .map(|(name, _)| *name)
                           .collect::<Vec<_>>();
    println!("constants: {}", constants.join(", "));

    let functions = symbols.functions
                           .iter()
                           .map(|function| function.name)
                           .collect::<Vec<_>>();
    println!("functions: {}", functions.join(", "));
}
