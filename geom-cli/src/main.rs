use anyhow::{Context, Result};
use clap::{AppSettings, Args, Parser, Subcommand};
use grid_geom::Vector2;
use log::{debug, info, LevelFilter};

/// Tool for integer-grid geometry. Points are written as JSON arrays, e.g. '[3,-4]'.
#[derive(Parser, Debug)]
#[clap(version, global_setting(AppSettings::AllowNegativeNumbers))]
struct GridCli {
    /// Raises the log level (may be repeated).
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: u64,
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    Line(LineArgs),
    Angle(PairArgs),
    Distance(PairArgs),
    FromAngle(FromAngleArgs),
    Multiply(MultiplyArgs),
}

/// Rasterizes the line between two points.
#[derive(Args, Debug)]
struct LineArgs {
    /// The start point.
    from: String,
    /// The end point.
    to: String,
    /// Always cover both end points, walking the dominant axis in ascending order.
    #[clap(long)]
    exact: bool,
}

/// Measures between two points.
#[derive(Args, Debug)]
struct PairArgs {
    /// The source point.
    from: String,
    /// The other point.
    to: String,
}

/// Creates a unit vector from an angle.
#[derive(Args, Debug)]
struct FromAngleArgs {
    /// The angle in degrees.
    degrees: f64,
}

/// Multiplies a point with a factor.
#[derive(Args, Debug)]
struct MultiplyArgs {
    /// The point.
    point: String,
    /// The factor. Factors with a fraction or exponent are applied as floating-point values (truncating the result).
    factor: String,
}

/// A scale factor.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Factor {
    Int(i32),
    Float(f32),
}

fn parse_point(text: &str) -> Result<Vector2<i32>> {
    serde_json::from_str(text).with_context(|| format!("Invalid point '{}'.", text))
}

fn parse_factor(text: &str) -> Result<Factor> {
    let text = text.trim();
    if text.contains(&['.', 'e', 'E'][..]) {
        let value: f32 = text.parse().with_context(|| format!("Invalid factor '{}'.", text))?;
        Ok(Factor::Float(value))
    } else {
        let value: i32 = text.parse().with_context(|| format!("Invalid factor '{}'.", text))?;
        Ok(Factor::Int(value))
    }
}

fn parse_pair(args: &PairArgs) -> Result<(Vector2<i32>, Vector2<i32>)> {
    Ok((parse_point(&args.from)?, parse_point(&args.to)?))
}

/// Executes a command and returns its output.
fn run(command: &CliCommand) -> Result<String> {
    let output = match command {
        CliCommand::Line(args) => {
            let from = parse_point(&args.from)?;
            let to = parse_point(&args.to)?;
            let points: Vec<_> = if args.exact {
                grid_geom::line_exact(from, to).collect()
            } else {
                grid_geom::line(from, to).collect()
            };
            info!("Rasterized {:?} to {:?} into {} points.", from, to, points.len());
            if points.is_empty() {
                debug!("The segment runs right-to-left; use --exact to rasterize it.");
            }
            serde_json::to_string(&points)?
        }
        CliCommand::Angle(args) => {
            let (from, to) = parse_pair(args)?;
            from.angle(to).to_string()
        }
        CliCommand::Distance(args) => {
            let (from, to) = parse_pair(args)?;
            from.distance(to).to_string()
        }
        CliCommand::FromAngle(args) => {
            let vector = Vector2::from_angle(args.degrees);
            if vector.x.is_finite() && vector.y.is_finite() {
                serde_json::to_string(&vector)?
            } else {
                // JSON has no representation for these, so print them as-is instead of `null`
                debug!("The angle {} produced non-finite components.", args.degrees);
                format!("[{},{}]", vector.x, vector.y)
            }
        }
        CliCommand::Multiply(args) => {
            let point = parse_point(&args.point)?;
            let factor = parse_factor(&args.factor)?;
            debug!("Multiplying {:?} with {:?}.", point, factor);
            let product = match factor {
                Factor::Int(value) => point * value,
                Factor::Float(value) => point * value,
            };
            serde_json::to_string(&product)?
        }
    };

    Ok(output)
}

fn log_level(verbose: u64) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() -> Result<()> {
    let cli_args: GridCli = GridCli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level(env!("CARGO_CRATE_NAME"), log_level(cli_args.verbose))
        .init()?;

    println!("{}", run(&cli_args.command)?);

    Ok(())
}

#[cfg(test)]
mod test_cli {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli_args = GridCli::try_parse_from(std::iter::once("grid-geom-cli").chain(args.iter().copied()))?;
        run(&cli_args.command)
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(Vector2::new(3, -4), parse_point("[3,-4]").unwrap());
        assert!(parse_point("[3]").is_err());
        assert!(parse_point("3,4").is_err());
    }

    #[test]
    fn test_parse_factor() {
        assert_eq!(Factor::Int(-2), parse_factor("-2").unwrap());
        assert_eq!(Factor::Float(0.5), parse_factor("0.5").unwrap());
        assert_eq!(Factor::Float(20.0), parse_factor("2e1").unwrap());
        assert!(parse_factor("two").is_err());
    }

    #[test]
    fn test_line() {
        assert_eq!("[[0,0],[1,0],[2,0]]", run_args(&["line", "[0,0]", "[2,0]"]).unwrap());
        assert_eq!("[]", run_args(&["line", "[2,0]", "[0,0]"]).unwrap());
        assert_eq!("[[0,0],[1,0],[2,0]]", run_args(&["line", "--exact", "[2,0]", "[0,0]"]).unwrap());
    }

    #[test]
    fn test_measure() {
        assert_eq!("5", run_args(&["distance", "[1,2]", "[4,6]"]).unwrap());
        assert_eq!("90", run_args(&["angle", "[0,0]", "[0,-3]"]).unwrap());
    }

    #[test]
    fn test_from_angle() {
        assert_eq!("[1.0,-0.0]", run_args(&["from-angle", "0"]).unwrap());
        assert!(run_args(&["from-angle", "-90"]).is_ok());
    }

    #[test]
    fn test_from_angle_non_finite() {
        assert_eq!("[NaN,NaN]", run_args(&["from-angle", "inf"]).unwrap());
        assert_eq!("[NaN,NaN]", run_args(&["from-angle", "NaN"]).unwrap());
    }

    #[test]
    fn test_multiply() {
        assert_eq!("[6,6]", run_args(&["multiply", "[3,3]", "2"]).unwrap());
        assert_eq!("[1,1]", run_args(&["multiply", "[3,3]", "0.5"]).unwrap());
        assert_eq!("[-6,-6]", run_args(&["multiply", "[3,3]", "-2"]).unwrap());
    }

    #[test]
    fn test_invalid_point() {
        let err = run_args(&["distance", "[1]", "[4,6]"]).unwrap_err();
        assert!(err.to_string().contains("Invalid point '[1]'"));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(LevelFilter::Warn, log_level(0));
        assert_eq!(LevelFilter::Info, log_level(1));
        assert_eq!(LevelFilter::Debug, log_level(5));
    }
}
