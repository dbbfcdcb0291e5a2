//! Command-line orrery
//!
//! Drives the ephemeris library the way a rendering host would: loads the
//! body catalog (built-in or from a JSON override), evaluates every body's
//! state at a chosen instant and speed multiplier, and prints the result
//! as a table. With `--ticks` it runs a simulated clock instead, printing
//! the accelerated timestamp and Earth's position once per second.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use log::info;
use nalgebra::Vector3;

use ephemeris::{
    BodyId, BodyState, Catalog, CatalogConfig, DisplayMode, SimClock, SolarScene, SpeedMultiplier,
};

#[derive(Parser, Debug)]
#[command(
    name = "orrery",
    about = "Prints solar system body states from the ephemeris catalog",
    long_about = None
)]
struct Args {
    /// Query instant as RFC 3339 (e.g. 2018-06-01T00:00:00Z); defaults to now
    #[arg(long)]
    time: Option<String>,

    /// Simulated-time acceleration factor
    #[arg(long, value_enum, default_value = "real")]
    speed: SpeedArg,

    /// Body sizing scheme for display radii
    #[arg(long, value_enum, default_value = "artistic")]
    mode: ModeArg,

    /// JSON file overriding the built-in catalog tables
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Run a simulated clock for this many one-second ticks instead of a
    /// single query
    #[arg(long)]
    ticks: Option<u32>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SpeedArg {
    /// Real time
    Real,
    /// One hour per second
    Hour,
    /// One day per second
    Day,
    /// Ten days per second
    TenDays,
    /// Thirty days per second
    ThirtyDays,
    /// One year per second
    Year,
}

impl From<SpeedArg> for SpeedMultiplier {
    fn from(arg: SpeedArg) -> Self {
        match arg {
            SpeedArg::Real => SpeedMultiplier::RealTime,
            SpeedArg::Hour => SpeedMultiplier::HourPerSecond,
            SpeedArg::Day => SpeedMultiplier::DayPerSecond,
            SpeedArg::TenDays => SpeedMultiplier::TenDaysPerSecond,
            SpeedArg::ThirtyDays => SpeedMultiplier::ThirtyDaysPerSecond,
            SpeedArg::Year => SpeedMultiplier::YearPerSecond,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeArg {
    Artistic,
    Physical,
}

impl From<ModeArg> for DisplayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Artistic => DisplayMode::Artistic,
            ModeArg::Physical => DisplayMode::Physical,
        }
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path.display()))?;
            let config: CatalogConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing catalog file {}", path.display()))?;
            let catalog = Catalog::from_config(&config)
                .with_context(|| format!("validating catalog file {}", path.display()))?;
            info!("loaded catalog override from {}", path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn parse_time(arg: Option<&str>) -> Result<DateTime<Utc>> {
    match arg {
        Some(text) => {
            let parsed = DateTime::parse_from_rfc3339(text)
                .with_context(|| format!("parsing --time value '{text}'"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn print_table(states: &[BodyState], time: DateTime<Utc>, multiplier: SpeedMultiplier) {
    println!("Query time: {}  Speed: {}", time.format("%Y-%m-%d %H:%M:%S"), multiplier);
    println!();
    println!(
        "{:<9} {:>10} {:>22} {:>9} {:>13} {:>13}",
        "Body", "Angle", "Position (x, y, z)", "Radius", "Orbit rad/s", "Spin rad/s"
    );
    println!("{:-<80}", "");

    for state in states {
        println!(
            "{:<9} {:>9.3}\u{00b0} ({:>6.3}, {:>2.0}, {:>6.3}) {:>9.4} {:>13.3e} {:>13.3e}",
            state.body.name(),
            state.orbit_angle_rad.to_degrees(),
            state.position.x,
            state.position.y,
            state.position.z,
            state.display_radius,
            state.orbit_rate_rad_s,
            state.spin_rate_rad_s,
        );
    }
}

fn run_ticks(scene: &SolarScene, start: DateTime<Utc>, multiplier: SpeedMultiplier, ticks: u32) {
    let mut clock = SimClock::new(start, multiplier);
    println!("Ticking {ticks} s of real time at {multiplier}");

    for _ in 0..ticks {
        let states = scene.snapshot(clock.now(), clock.multiplier());
        let earth = &states[BodyId::Earth.index()];
        println!(
            "{}  earth at {:>7.3}\u{00b0} ({:>6.3}, 0, {:>6.3})",
            clock.now().format("%Y/%m/%d %H:%M:%S"),
            earth.orbit_angle_rad.to_degrees(),
            earth.position.x,
            earth.position.z,
        );
        std::thread::sleep(Duration::from_secs(1));
        clock.advance(Duration::from_secs(1));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = load_catalog(args.catalog.as_ref())?;
    let time = parse_time(args.time.as_deref())?;
    let multiplier = SpeedMultiplier::from(args.speed);
    let scene = SolarScene::new(catalog, Vector3::zeros(), DisplayMode::from(args.mode));

    match args.ticks {
        Some(ticks) => run_ticks(&scene, time, multiplier, ticks),
        None => {
            let states = scene.snapshot(time, multiplier);
            print_table(&states, time, multiplier);
        }
    }

    Ok(())
}
