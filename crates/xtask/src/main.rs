//! This program is a development tool to be used by agents, human or otherwise.
//!
//! It evaluates the shader-numeric builtins from the command line, which is
//! handy for poking at ties, NaNs and signed zeros without writing a test.

use std::{
    num::{ParseFloatError, ParseIntError},
    str::FromStr,
};

use clap::Parser;
use shader_numeric::common::{
    clamp, fma, fract, mix, modf, modulo, round, round_even, scalbn, smoothstep, Float,
    ModfResult, NumericBuiltinClamp, NumericBuiltinFma, NumericBuiltinFract, NumericBuiltinMix,
    NumericBuiltinModf, NumericBuiltinModulo, NumericBuiltinRound, NumericBuiltinRoundEven,
    NumericBuiltinScalbn, NumericBuiltinSmoothstep,
};
use snafu::prelude::*;

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display(
        "Unknown function '{name}'.\nRun 'cargo xtask functions' to see available functions."
    ))]
    UnknownFunction { name: String },

    #[snafu(display("'{function}' takes {expected} argument(s), but {given} were given"))]
    Arity {
        function: &'static str,
        expected: usize,
        given: usize,
    },

    #[snafu(display("Could not parse '{input}' as a number: {source}"))]
    ParseNumber {
        input: String,
        source: ParseFloatError,
    },

    #[snafu(display("Could not parse '{input}' as an integer exponent: {source}"))]
    ParseExponent {
        input: String,
        source: ParseIntError,
    },

    #[snafu(display("A table needs at least one step"))]
    EmptyTable,
}

#[derive(clap::Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Precision {
    F32,
    F64,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the available functions and their parameters
    Functions,
    /// Evaluate a function on scalar arguments
    Eval {
        /// Function name, spelled as in shading languages (e.g. "roundEven",
        /// "mod")
        function: String,
        /// Arguments in order. Negative numbers are accepted as is; pass
        /// `-inf` or `-NaN` after a `--` separator.
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        #[arg(long, value_enum, default_value_t = Precision::F64)]
        precision: Precision,
    },
    /// Sample a function over an interval of its first argument
    Table {
        /// Function name, spelled as in shading languages
        function: String,
        #[arg(long, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, allow_hyphen_values = true)]
        end: f64,
        /// Number of samples, including both ends of the interval
        #[arg(long, default_value_t = 11)]
        steps: usize,
        /// The remaining arguments, held fixed. Negative numbers are accepted
        /// as is; pass `-inf` or `-NaN` after a `--` separator.
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        #[arg(long, value_enum, default_value_t = Precision::F64)]
        precision: Precision,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Function {
    Clamp,
    Fract,
    Round,
    RoundEven,
    Mod,
    Modf,
    Mix,
    Smoothstep,
    Fma,
    Scalbn,
}

impl Function {
    const ALL: [Function; 10] = [
        Function::Clamp,
        Function::Fract,
        Function::Round,
        Function::RoundEven,
        Function::Mod,
        Function::Modf,
        Function::Mix,
        Function::Smoothstep,
        Function::Fma,
        Function::Scalbn,
    ];

    fn name(self) -> &'static str {
        match self {
            Function::Clamp => "clamp",
            Function::Fract => "fract",
            Function::Round => "round",
            Function::RoundEven => "roundEven",
            Function::Mod => "mod",
            Function::Modf => "modf",
            Function::Mix => "mix",
            Function::Smoothstep => "smoothstep",
            Function::Fma => "fma",
            Function::Scalbn => "scalbn",
        }
    }

    fn params(self) -> &'static [&'static str] {
        match self {
            Function::Clamp => &["e", "low", "high"],
            Function::Fract | Function::Round | Function::RoundEven | Function::Modf => &["e"],
            Function::Mod => &["x", "y"],
            Function::Mix => &["x", "y", "t"],
            Function::Smoothstep => &["x", "edge0", "edge1"],
            Function::Fma => &["a", "b", "c"],
            Function::Scalbn => &["x", "exp"],
        }
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .context(UnknownFunctionSnafu { name })
    }
}

/// A float precision the tool can evaluate at.
trait Scalar:
    Float
    + NumericBuiltinClamp
    + NumericBuiltinFract
    + NumericBuiltinRound
    + NumericBuiltinRoundEven
    + NumericBuiltinModulo
    + NumericBuiltinModf
    + NumericBuiltinMix
    + NumericBuiltinSmoothstep
    + NumericBuiltinFma
    + NumericBuiltinScalbn<i32>
    + FromStr<Err = ParseFloatError>
{
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self;
    fn to_bits_hex(self) -> String;
}

macro_rules! impl_scalar {
    ($ty:ty, $name:literal) => {
        impl Scalar for $ty {
            const NAME: &'static str = $name;

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn to_bits_hex(self) -> String {
                let width = 2 + 2 * std::mem::size_of::<$ty>();
                format!("{:#0width$x}", self.to_bits())
            }
        }
    };
}
impl_scalar!(f32, "f32");
impl_scalar!(f64, "f64");

fn parse_float<T: Scalar>(input: &str) -> Result<T, Error> {
    input.trim().parse::<T>().context(ParseNumberSnafu { input })
}

fn parse_exponent(input: &str) -> Result<i32, Error> {
    input
        .trim()
        .parse::<i32>()
        .context(ParseExponentSnafu { input })
}

/// Evaluates `function` with `first` as its first argument and `rest` parsed
/// as the remaining ones.
///
/// Returns the labelled outputs: one for most functions, two for `modf`.
fn evaluate<T: Scalar>(
    function: Function,
    first: T,
    rest: &[String],
) -> Result<Vec<(&'static str, T)>, Error> {
    let expected = function.params().len();
    ensure!(
        rest.len() + 1 == expected,
        AritySnafu {
            function: function.name(),
            expected,
            given: rest.len() + 1,
        }
    );
    let arg = |i: usize| parse_float::<T>(&rest[i - 1]);

    let result = match function {
        Function::Clamp => clamp(first, arg(1)?, arg(2)?),
        Function::Fract => fract(first),
        Function::Round => round(first),
        Function::RoundEven => round_even(first),
        Function::Mod => modulo(first, arg(1)?),
        Function::Modf => {
            let ModfResult {
                integral,
                fractional,
            } = modf(first);
            return Ok(vec![("integral", integral), ("fractional", fractional)]);
        }
        Function::Mix => mix(first, arg(1)?, arg(2)?),
        Function::Smoothstep => smoothstep(first, arg(1)?, arg(2)?),
        Function::Fma => fma(first, arg(1)?, arg(2)?),
        Function::Scalbn => scalbn(first, parse_exponent(&rest[0])?),
    };
    Ok(vec![("result", result)])
}

fn warn_on_nan<T: Scalar>(function: Function, outputs: &[(&'static str, T)]) {
    for (label, value) in outputs {
        if value.is_nan() {
            log::warn!("{}: {label} is NaN", function.name());
        }
    }
}

fn list_functions() {
    for function in Function::ALL {
        println!("{}({})", function.name(), function.params().join(", "));
    }
}

fn run_eval<T: Scalar>(function: &str, args: &[String]) -> Result<(), Error> {
    let function: Function = function.parse()?;
    log::debug!("eval {}{:?} at {}", function.name(), args, T::NAME);

    let (first, rest) = args.split_first().context(AritySnafu {
        function: function.name(),
        expected: function.params().len(),
        given: 0usize,
    })?;
    let outputs = evaluate(function, parse_float::<T>(first)?, rest)?;
    warn_on_nan(function, &outputs);

    for (label, value) in outputs {
        println!("{label}: {value:?} ({})", value.to_bits_hex());
    }
    Ok(())
}

fn run_table<T: Scalar>(
    function: &str,
    start: f64,
    end: f64,
    steps: usize,
    args: &[String],
) -> Result<(), Error> {
    let function: Function = function.parse()?;
    ensure!(steps > 0, EmptyTableSnafu);
    log::info!(
        "sampling {} over [{start}, {end}] with {steps} step(s) at {}",
        function.name(),
        T::NAME
    );

    for i in 0..steps {
        let x = if steps == 1 {
            start
        } else {
            start + (end - start) * i as f64 / (steps - 1) as f64
        };
        let x = T::from_f64(x);
        let outputs = evaluate(function, x, args)?;
        warn_on_nan(function, &outputs);

        if i == 0 {
            let labels: Vec<_> = outputs.iter().map(|(label, _)| *label).collect();
            println!("{}\t{}", function.params()[0], labels.join("\t"));
        }
        let values: Vec<_> = outputs.iter().map(|(_, value)| format!("{value:?}")).collect();
        println!("{x:?}\t{}", values.join("\t"));
    }
    Ok(())
}

fn main() {
    env_logger::builder().init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Functions => {
            list_functions();
            Ok(())
        }
        Commands::Eval {
            function,
            args,
            precision,
        } => match precision {
            Precision::F32 => run_eval::<f32>(&function, &args),
            Precision::F64 => run_eval::<f64>(&function, &args),
        },
        Commands::Table {
            function,
            start,
            end,
            steps,
            args,
            precision,
        } => match precision {
            Precision::F32 => run_table::<f32>(&function, start, end, steps, &args),
            Precision::F64 => run_table::<f64>(&function, start, end, steps, &args),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
