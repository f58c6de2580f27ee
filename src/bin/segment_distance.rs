//! Segment Distance Tool
//!
//! Reads the endpoints of two 3D line segments and prints the minimal
//! distance between them. Points come either from the command line or, when
//! `--points` is absent, from interactive prompts on standard input.
//!
//! Usage:
//!   cargo run --bin segment_distance -- [--json] [--verbose] [--points X1 Y1 Z1 ... X4 Y4 Z4]

use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use segdist::input::{point_from_slice, read_points};
use segdist::{DistanceCalculator, DistanceReport, Point3D, SegdistError};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Segment Distance Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes the minimal distance between two line segments in 3D space",
    long_about = None
)]
struct Args {
    /// Endpoints p1 p2 p3 p4 as twelve numbers; the segments are [p1, p2] and [p3, p4]
    #[arg(
        short,
        long,
        num_args = 12,
        value_names = ["X1", "Y1", "Z1", "X2", "Y2", "Z2", "X3", "Y3", "Z3", "X4", "Y4", "Z4"],
        allow_negative_numbers = true
    )]
    points: Option<Vec<f64>>,

    /// Print the result as JSON
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Also print how the segments relate to each other
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Collects the four endpoints from the arguments or from standard input
fn gather_points(args: &Args) -> Result<[Point3D; 4]> {
    match &args.points {
        Some(coords) => {
            let mut points = [Point3D::ORIGIN; 4];
            for (point, chunk) in points.iter_mut().zip(coords.chunks(3)) {
                *point = point_from_slice(chunk)?;
            }
            Ok(points)
        }
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            let points = read_points(&mut reader, &mut io::stdout(), &mut io::stderr())?;
            Ok(points)
        }
    }
}

/// Prints the result in the requested format
fn display_report(report: &DistanceReport, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if args.verbose {
        println!("First segment:  {}", report.first);
        println!("Second segment: {}", report.second);
        println!("Relation:       {}", report.relation);
    }
    println!("Minimal distance: {}", report.distance);
    Ok(())
}

fn run(args: &Args) -> Result<ExitCode> {
    let [p1, p2, p3, p4] = gather_points(args)?;

    match DistanceCalculator::new(p1, p2, p3, p4).report() {
        Ok(report) => {
            display_report(&report, args)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ SegdistError::DegenerateSegment { .. }) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    run(&args)
}
