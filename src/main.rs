use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use projectile_animation::core::ballistics::{
    FlightSample, LaunchInputs, flight_time_and_range, sample_flight,
};
use projectile_animation::core::constants::SINGLE_SHOT_DT_S;
use projectile_animation::core::error::{BallisticsError, InputError, parse_number};
use projectile_animation::core::log::{
    LogLevel, log_debug, log_error, log_info, log_warning, set_log_level,
};
use projectile_animation::core::window::fixed_ratio_axis_window;
use thiserror::Error;

const MAX_FLIGHT_S: f64 = 600.0;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Ballistics(#[from] BallisticsError),
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("input ended unexpectedly (EOF)")]
    Eof,
    #[error("could not draw plot '{}': {message}", path.display())]
    Plot { path: PathBuf, message: String },
}

#[derive(Debug, Default)]
struct Args {
    numbers: Vec<String>,
    plot: Option<PathBuf>,
    help: bool,
    verbose: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut iter = raw.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => args.help = true,
            "-v" | "--verbose" => args.verbose = true,
            "--plot" => {
                let path = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--plot needs a file name.".to_string()))?;
                args.plot = Some(PathBuf::from(path));
            }
            _ => args.numbers.push(arg.clone()),
        }
    }
    Ok(args)
}

fn read_f64(prompt: &str, field: &'static str) -> Result<f64, CliError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(CliError::Eof);
        }

        match parse_number(field, &line) {
            Ok(v) => return Ok(v),
            Err(err) => log_warning(&format!("{err} Please enter e.g. 45 or 12.5.")),
        }
    }
}

fn get_inputs_from_user() -> Result<LaunchInputs, CliError> {
    Ok(LaunchInputs::new(
        read_f64("Angle (degrees): ", "angle")?,
        read_f64("Velocity (m/s): ", "velocity")?,
        read_f64("Height (m): ", "height")?,
    ))
}

fn get_inputs_from_args(numbers: &[String]) -> Result<LaunchInputs, CliError> {
    let [angle, speed, height] = numbers else {
        return Err(CliError::Usage(
            "Expected exactly 3 numbers: <angle_deg> <velocity_mps> <height_m>.".to_string(),
        ));
    };

    Ok(LaunchInputs::new(
        parse_number("angle", angle)?,
        parse_number("velocity", speed)?,
        parse_number("height", height)?,
    ))
}

fn plot_flight(path: &Path, flight: &FlightSample) -> Result<(), CliError> {
    let plot_err = |message: String| CliError::Plot {
        path: path.to_path_buf(),
        message,
    };

    let (x_span, y_span) = fixed_ratio_axis_window(flight.range_m.max(0.0), flight.apex_m);
    let root = SVGBackend::new(path, (960, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Projectile trajectory", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..x_span, 0f64..y_span)
        .map_err(|e| plot_err(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| plot_err(e.to_string()))?;

    let above_ground = flight.points.iter().copied().filter(|&(_, y)| y >= 0.0);
    chart
        .draw_series(LineSeries::new(above_ground, &BLUE))
        .map_err(|e| plot_err(e.to_string()))?;

    root.present().map_err(|e| plot_err(e.to_string()))?;
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--plot FILE.svg] [--verbose]");
    println!("  {program} <angle_deg> <velocity_mps> <height_m> [--plot FILE.svg] [--verbose]");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 45 40 2 --plot flight.svg");
}

fn run() -> Result<(), CliError> {
    let raw: Vec<String> = env::args().collect();
    let args = parse_args(&raw)?;

    if args.verbose {
        set_log_level(LogLevel::Debug);
    }

    if args.help {
        print_usage(&raw[0]);
        return Ok(());
    }

    let inputs = if args.numbers.is_empty() {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&args.numbers)?
    };

    log_debug(&format!(
        "Inputs: angle {} deg, velocity {} m/s, height {} m",
        inputs.angle_deg, inputs.speed_mps, inputs.height_m
    ));

    let (time, distance) = flight_time_and_range(inputs)?;
    let flight = sample_flight(inputs, SINGLE_SHOT_DT_S, MAX_FLIGHT_S);
    log_debug(&format!(
        "Sampled {} points every {} s (limit {} s)",
        flight.points.len(),
        SINGLE_SHOT_DT_S,
        MAX_FLIGHT_S
    ));

    println!("\nTime of flight: {:.4} s", time);
    println!("Horizontal distance: {:.4} m", distance);
    println!(
        "Stepped at {:.0} Hz: lands after {:.2} s at {:.4} m, apex {:.4} m",
        1.0 / SINGLE_SHOT_DT_S,
        flight.flight_time_s,
        flight.range_m,
        flight.apex_m
    );

    if let Some(path) = args.plot.as_deref() {
        plot_flight(path, &flight)?;
        log_info(&format!("Wrote trajectory plot to {}", path.display()));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        log_error(&format!("Error: {err}"));
        print_usage("cargo run --bin projectile_animation --");
        std::process::exit(1);
    }
}
