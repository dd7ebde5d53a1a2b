//! Ephemeris Table Query Tool
//!
//! This binary loads an ephemeris table structure from a JSON file and prints
//! the interpolated state of the body at one or more times.
//!
//! Usage:
//!   cargo run --bin ephem_query -- table.json --time 2458864.5 --time 2458870.0 [--velocity]

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ephemtable::units::{velocity_from_au_per_day, DistanceUnit, TimeUnit};
use ephemtable::EphemerisTable;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Ephemeris Table Query Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Interpolates body positions and velocities from a tabulated ephemeris",
    long_about = None
)]
struct Args {
    /// JSON file holding the ephemeris structure (`data`, `distanceUnits`, ...)
    table: PathBuf,

    /// Query time in days, in the table's time scale (repeatable)
    #[arg(short, long = "time", required = true, allow_negative_numbers = true)]
    times: Vec<f64>,

    /// Also print interpolated velocities
    #[arg(short, long, action = ArgAction::SetTrue)]
    velocity: bool,

    /// Distance unit for printed positions and velocities
    #[arg(long, default_value = "au")]
    distance_units: DistanceUnit,

    /// Time unit for the denominator of printed velocities
    #[arg(long, default_value = "day")]
    time_units: TimeUnit,

    /// Skip the table summary
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{}: {}", name, value);
}

/// Displays the table layout, span and settings
fn display_summary(table: &EphemerisTable) {
    print_section_header("Ephemeris Table");
    print_named_value("Type", table.ephemeris_type());
    print_named_value("Records", table.len());
    print_named_value(
        "Span",
        format!(
            "{} .. {} ({:.3} days)",
            table.start_time(),
            table.end_time(),
            table.end_time() - table.start_time()
        ),
    );
    print_named_value(
        "Declared units",
        format!("{} / {}", table.units().distance, table.units().time),
    );
    print_named_value(
        "Interpolation",
        format!(
            "{} (order {})",
            table.interpolation_type(),
            table.interpolation_order()
        ),
    );
    print_section_header("States");
}

fn run(args: Args) -> Result<()> {
    let text = std::fs::read_to_string(&args.table)
        .map_err(|e| format!("failed to read {}: {}", args.table.display(), e))?;
    let table = EphemerisTable::from_json(&text)?;

    if !args.quiet {
        display_summary(&table);
    }

    for &t in &args.times {
        let state = table.state_at_time(t);
        let p = state.position.map(|c| args.distance_units.au_to_unit(c));
        let mut line = format!("{} {:.16e} {:.16e} {:.16e}", t, p.x, p.y, p.z);

        if args.velocity {
            let v = state
                .velocity
                .map(|c| velocity_from_au_per_day(c, args.distance_units, args.time_units));
            line.push_str(&format!(" {:.16e} {:.16e} {:.16e}", v.x, v.y, v.z));
        }

        if t < table.start_time() || t > table.end_time() {
            line.push_str(" clamped");
        }
        println!("{}", line);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
