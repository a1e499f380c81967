//! Command-line front end: builds a boundary or band and prints its
//! segments as `x0 y0 x1 y1` lines.
//!
//! ```text
//! stitchwork -v x --width 6 --height 4 boundary
//! stitchwork -v + --width 6 --height 4 band -o -
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use stitchwork::math::Point;
use stitchwork::{BoundaryParams, MakeBand, MakeBoundary, Orientation, Segment, Suture, Variant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "stitchwork")]
#[command(version, about = "Generate suture boundaries and stitch bands")]
struct Cli {
    /// The initial X coordinate
    #[arg(short = 'x', default_value_t = 0, allow_negative_numbers = true)]
    x: i64,

    /// The initial Y coordinate
    #[arg(short = 'y', default_value_t = 0, allow_negative_numbers = true)]
    y: i64,

    /// The width of the stitch boundary
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    width: i64,

    /// The height of the stitch boundary
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    height: i64,

    /// The length of the sutures in the stitch boundary
    #[arg(short = 'l', long, default_value_t = 1, allow_negative_numbers = true)]
    suture_len: i64,

    /// The variant of stitch object to make (plus, +, cross, x)
    #[arg(short, long)]
    variant: Variant,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sutures only
    Boundary,

    /// Sutures plus the inner and outer curves threading them
    Band {
        /// Winding of the curves (positive, +, negative, -)
        #[arg(short, long, default_value = "+", allow_hyphen_values = true)]
        orientation: Orientation,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let params = BoundaryParams::new(cli.x, cli.y, cli.width, cli.height, cli.suture_len);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Boundary => {
            let boundary = MakeBoundary::new(params, cli.variant).execute()?;
            write_sutures(&mut out, boundary.sutures())?;
        }
        Commands::Band { orientation } => {
            let band = MakeBand::new(params, cli.variant, orientation).execute()?;
            writeln!(out, "# sutures")?;
            write_sutures(&mut out, band.sutures())?;
            writeln!(out, "# inner")?;
            write_segments(&mut out, band.inner_curve())?;
            writeln!(out, "# outer")?;
            write_segments(&mut out, band.outer_curve())?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Builds the log filter from a `RUST_LOG` value, falling back to `warn`
/// when it is unset or unparsable.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn write_pair(out: &mut impl Write, a: &Point, b: &Point) -> io::Result<()> {
    writeln!(out, "{} {} {} {}", a.x, a.y, b.x, b.y)
}

fn write_sutures(out: &mut impl Write, sutures: &[Suture]) -> io::Result<()> {
    for s in sutures {
        write_pair(out, &s.outer, &s.inner)?;
    }
    Ok(())
}

fn write_segments(out: &mut impl Write, segments: &[Segment]) -> io::Result<()> {
    for s in segments {
        write_pair(out, &s.start, &s.end)?;
    }
    Ok(())
}
