use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ascent_sim::config::{load_run, SearchSpec};
use ascent_sim::guidance::{find_pitchover_angle, SearchMethod, SearchResult};
use ascent_sim::io::{csv, json};
use ascent_sim::sim::{self, time_to_apogee, AscentOutcome};
use ascent_sim::vehicle::{presets, VehicleConfig};

#[derive(Parser)]
#[command(name = "ascent-sim")]
#[command(about = "2D powered-ascent simulator and pitchover angle search")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the pitchover angle that reaches a target apogee
    Search {
        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Altitude at which the vehicle pitches over, m
        #[arg(long)]
        pitchover_altitude: Option<f64>,

        /// Apogee to reach, m
        #[arg(long)]
        target_apogee: Option<f64>,

        /// Angle grid spacing, deg
        #[arg(long)]
        angle_step: Option<f64>,

        /// Upper (exclusive) bound of the angle scan, deg
        #[arg(long)]
        max_angle: Option<f64>,

        /// Scan strategy
        #[arg(long, value_enum)]
        method: Option<MethodArg>,

        /// Write a JSON summary to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Fly a single ascent with a fixed pitchover angle
    Simulate {
        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Pitchover angle, deg from horizontal
        #[arg(long)]
        angle: f64,

        /// Altitude at which the vehicle pitches over, m
        #[arg(long)]
        pitchover_altitude: Option<f64>,

        /// Write the full trajectory as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write a JSON summary to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Args)]
struct VehicleArgs {
    /// TOML run file with a [vehicle] table and optional [search] table
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in vehicle (rox, rs112)
    #[arg(long, default_value = "rox")]
    preset: String,
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum MethodArg {
    Linear,
    Bisection,
}

impl From<MethodArg> for SearchMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Linear => SearchMethod::Linear,
            MethodArg::Bisection => SearchMethod::Bisection,
        }
    }
}

/// Exit status when the search exhausts the angle range.
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            vehicle,
            pitchover_altitude,
            target_apogee,
            angle_step,
            max_angle,
            method,
            json: json_path,
        } => {
            let (config, mut spec) = resolve_vehicle(&vehicle)?;
            if let Some(v) = pitchover_altitude { spec.pitchover_altitude = v; }
            if let Some(v) = target_apogee { spec.target_apogee = v; }
            if let Some(v) = angle_step { spec.angle_step_deg = v; }
            if let Some(v) = max_angle { spec.max_angle_deg = v; }
            if let Some(m) = method { spec.method = m.into(); }

            run_search(&config, &spec, json_path)
        }
        Commands::Simulate {
            vehicle,
            angle,
            pitchover_altitude,
            csv: csv_path,
            json: json_path,
        } => {
            let (config, spec) = resolve_vehicle(&vehicle)?;
            let pitch_alt = pitchover_altitude.unwrap_or(spec.pitchover_altitude);
            run_simulate(&config, pitch_alt, angle, csv_path, json_path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_vehicle(args: &VehicleArgs) -> anyhow::Result<(VehicleConfig, SearchSpec)> {
    match &args.config {
        Some(path) => {
            let run = load_run(path)
                .with_context(|| format!("loading run file {}", path.display()))?;
            Ok((run.vehicle, run.search))
        }
        None => {
            let vehicle = presets::by_name(&args.preset).ok_or_else(|| {
                anyhow!(
                    "unknown preset '{}' (available: {})",
                    args.preset,
                    presets::NAMES.join(", ")
                )
            })?;
            Ok((vehicle, SearchSpec::default()))
        }
    }
}

fn run_search(
    config: &VehicleConfig,
    spec: &SearchSpec,
    json_path: Option<PathBuf>,
) -> anyhow::Result<ExitCode> {
    println!(
        "Searching pitchover angle for {} (pitchover at {:.1} m, target apogee {:.0} m) ...",
        config.name, spec.pitchover_altitude, spec.target_apogee
    );
    print_vehicle(config);

    let result = find_pitchover_angle(
        config,
        spec.pitchover_altitude,
        spec.target_apogee,
        &spec.options(),
    )?;

    let code = match &result {
        SearchResult::Found(solution) => {
            println!("  Pitchover angle:   {:>10.3} deg", solution.pitchover_angle_deg);
            println!("  Predicted apogee:  {:>10.1} m", solution.predicted_apogee);
            print_cutoff(&solution.outcome);
            println!("  Trials:            {:>10}", solution.trials);
            ExitCode::SUCCESS
        }
        SearchResult::Exhausted { trials, best_apogee, best_angle_deg } => {
            println!(
                "  No pitchover angle below {:.3} deg reaches {:.0} m",
                spec.max_angle_deg, spec.target_apogee
            );
            println!("  Best apogee:       {:>10.1} m at {:.3} deg", best_apogee, best_angle_deg);
            println!("  Trials:            {:>10}", trials);
            ExitCode::from(EXIT_NOT_FOUND)
        }
    };

    if let Some(path) = json_path {
        let summary =
            json::SearchSummary::new(config, spec.pitchover_altitude, spec.target_apogee, &result);
        json::write_summary_file(&path, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Exported: {}", path.display());
    }

    Ok(code)
}

fn run_simulate(
    config: &VehicleConfig,
    pitchover_altitude: f64,
    angle_deg: f64,
    csv_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!(
        "Simulating {} (pitchover to {:.3} deg at {:.1} m) ...",
        config.name, angle_deg, pitchover_altitude
    );
    print_vehicle(config);

    let trajectory = sim::simulate_trajectory(config, pitchover_altitude, angle_deg.to_radians());
    let outcome = &trajectory.outcome;

    println!("  Predicted apogee:  {:>10.1} m", sim::predict_apogee(outcome));
    print_cutoff(outcome);

    if let Some(path) = csv_path {
        csv::write_trajectory_file(&path, config, &trajectory.states)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Exported: {}", path.display());
    }
    if let Some(path) = json_path {
        let summary = json::AscentSummary::from_outcome(config, outcome);
        json::write_summary_file(&path, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Exported: {}", path.display());
    }
    Ok(())
}

fn print_vehicle(config: &VehicleConfig) {
    println!(
        "  Wet/dry mass:      {:>10.0} / {:.0} kg, liftoff TWR {:.2}, burn {:.1} s at {} Hz",
        config.wet_mass,
        config.dry_mass,
        config.liftoff_twr(),
        config.burn_duration,
        config.update_frequency
    );
}

fn print_cutoff(outcome: &AscentOutcome) {
    let s = &outcome.state;
    if let Some(t) = outcome.impact_time() {
        println!("  Hit ground at t+   {:>10.2} s", t);
        return;
    }
    println!("  Cutoff altitude:   {:>10.1} m", s.altitude());
    println!(
        "  Cutoff velocity:   {:>10.1} m/s (vertical {:.1}, horizontal {:.1})",
        s.speed(),
        s.vertical_velocity(),
        s.horizontal_velocity()
    );
    println!("  Time to apogee:    {:>10.1} s", time_to_apogee(s));
}
