//! # Pool Calculator CLI
//!
//! Thin terminal front-end over `pool_core`.
//!
//! Usage:
//! - `pool_cli` with no arguments runs an interactive demo of the volume and
//!   capacity calculators.
//! - `pool_cli <file.json>` reads a tagged `CalculatorInput` from the file
//!   and prints the result as pretty JSON. Pass `-` to read from stdin.
//!
//! Errors are printed as structured JSON on stderr with a non-zero exit.

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use pool_core::calculators::capacity::{
    self, ActivityLevel, AgeGroup, CapacityInput, ComfortLevel, SupervisionRatio,
};
use pool_core::calculators::volume::{self, VolumeInput};
use pool_core::calculators::{run, CalculatorInput};
use pool_core::geometry::ShapeDimensions;
use pool_core::units::{Length, LengthUnit};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    match args.next() {
        None => demo(),
        Some(path) => dispatch(&path),
    }
}

/// Read a tagged input record, run it, and print the result
fn dispatch(path: &str) -> ExitCode {
    let raw = if path == "-" {
        let mut buf = String::new();
        match io::stdin().read_to_string(&mut buf) {
            Ok(_) => buf,
            Err(err) => {
                eprintln!("error reading stdin: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!("error reading {path}: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    let input: CalculatorInput = match serde_json::from_str(&raw) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("invalid input JSON: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&input) {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error serializing result: {err}");
                ExitCode::FAILURE
            }
        },
        Err(calc_err) => {
            eprintln!("Error: {calc_err}");
            if let Ok(json) = serde_json::to_string_pretty(&calc_err) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Prompt for a round pool's dimensions, then run the volume and capacity
/// calculators against it
fn demo() -> ExitCode {
    println!("Pool Calculator Suite");
    println!("=====================");
    println!();
    println!("No input file given. Running interactive demo...");
    println!("(pass a JSON file with a tagged \"calculator\" field, or - for stdin)");
    println!();

    let diameter_ft = prompt_f64("Enter pool diameter (ft) [8.0]: ", 8.0);
    let depth_ft = prompt_f64("Enter water depth (ft) [1.5]: ", 1.5);
    println!();

    let dims = ShapeDimensions::Round {
        diameter: Length::new(diameter_ft, LengthUnit::Feet),
    };
    let depth = Length::new(depth_ft, LengthUnit::Feet);

    let volume_input = VolumeInput { dims, depth };
    let volume_result = match volume::calculate(&volume_input) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Volume:");
    println!("  {:.1} cubic feet", volume_result.cubic_feet);
    println!(
        "  {:.0} gallons ({:.0} liters)",
        volume_result.gallons, volume_result.liters
    );
    println!(
        "  Fill time: {:.0} minutes from a garden hose",
        volume_result.fill_time_minutes
    );
    println!("  Water cost: ${:.2} per fill", volume_result.water_cost_usd);
    println!();

    let capacity_input = CapacityInput {
        dims,
        depth,
        age_group: AgeGroup::Children,
        comfort: ComfortLevel::Comfortable,
        activity: ActivityLevel::Moderate,
        supervision: SupervisionRatio::High,
    };
    match capacity::calculate(&capacity_input) {
        Ok(result) => {
            println!("Capacity (school-age children, comfortable spacing):");
            println!("  Recommended: {:.0}", result.capacity.recommended);
            println!("  Absolute maximum: {:.0}", result.capacity.extreme);
            for note in &result.safety_notes {
                println!("  - {note}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&volume_result) {
        println!("{json}");
    }

    ExitCode::SUCCESS
}
