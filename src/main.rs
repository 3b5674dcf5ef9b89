use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use holesim::config::{FileConfig, PhysicsConfig};
use holesim::course::{Hole, load_course, pebble::pebble_beach_8};
use holesim::domain::{Club, SurfaceLabel};
use holesim::play::{GameSession, ShotContext, ShotIntent, ShotParameters, ShotReport, Wind};

/// Play shots over a golf hole and report where each one ends up
///
/// Examples:
///   # Drive 250 yards straight at the pin on the built-in hole
///   holesim --shot 250:0
///
///   # Driver, then a 7-iron pushed 5 degrees right, into a breeze
///   holesim --shot 250:0:driver --shot 160:-5:7i --wind-speed 10 --wind-dir 180
///
///   # Play hole 3 of a GeoJSON course and print JSON
///   holesim --course links.geojson --hole 3 --shot 230:0 --json
#[derive(Parser, Debug)]
#[command(name = "holesim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches holesim.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// GeoJSON course file (defaults to the built-in Pebble Beach 8th)
    #[arg(long)]
    course: Option<PathBuf>,

    /// Hole number to play from a multi-hole course file
    #[arg(long)]
    hole: Option<u32>,

    /// Club for shots that don't name one
    #[arg(long, value_enum, default_value = "driver")]
    club: Club,

    /// Shot as DISTANCE:DIRECTION[:CLUB], direction in degrees off the pin line
    #[arg(long = "shot", allow_hyphen_values = true)]
    shots: Vec<ShotPlan>,

    /// Wind speed in mph
    #[arg(long)]
    wind_speed: Option<f64>,

    /// Direction the wind blows toward, degrees (0 = east, 90 = north)
    #[arg(long, allow_hyphen_values = true)]
    wind_dir: Option<f64>,

    /// Print shot reports as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// One `--shot` argument
#[derive(Debug, Clone, Copy, PartialEq)]
struct ShotPlan {
    params: ShotParameters,
    club: Option<Club>,
}

impl FromStr for ShotPlan {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(distance), Some(direction)) = (parts.next(), parts.next()) else {
            return Err(format!("expected DISTANCE:DIRECTION[:CLUB], got '{}'", s));
        };
        let distance: f64 = distance
            .trim()
            .parse()
            .map_err(|_| format!("invalid distance '{}'", distance))?;
        let direction: f64 = direction
            .trim()
            .parse()
            .map_err(|_| format!("invalid direction '{}'", direction))?;
        let club = parts
            .next()
            .map(|c| <Club as clap::ValueEnum>::from_str(c.trim(), true))
            .transpose()?;
        if parts.next().is_some() {
            return Err(format!("too many fields in '{}'", s));
        }

        Ok(Self {
            params: ShotParameters::new(distance, direction),
            club,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let json = args.json || file_config.as_ref().map(|c| c.json).unwrap_or(false);
    init_logging(verbose);

    let course = args
        .course
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.course.clone()));
    let hole_number = args
        .hole
        .or_else(|| file_config.as_ref().and_then(|c| c.hole));
    let wind = Wind::new(
        args.wind_speed
            .or_else(|| file_config.as_ref().map(|c| c.wind_speed_mph))
            .unwrap_or(0.0),
        args.wind_dir
            .or_else(|| file_config.as_ref().map(|c| c.wind_dir_deg))
            .unwrap_or(0.0),
    );
    let physics = file_config
        .as_ref()
        .and_then(|c| c.physics.clone())
        .unwrap_or_default();

    let hole = match course {
        Some(ref path) => load_course(path, hole_number)
            .context(format!("Failed to load course: {}", path.display()))?,
        None => pebble_beach_8().context("Failed to load built-in hole")?,
    };

    if !json {
        println!("holesim - Golf Hole Simulator");
        println!("=============================");
        println!();
        print_hole(&hole, course.is_some());
        if verbose {
            print_physics(&physics, wind);
        }
    }

    let mut session = GameSession::with_physics(hole, physics);
    let mut reports = Vec::new();

    for (i, plan) in args.shots.iter().enumerate() {
        if session.is_finished() {
            tracing::warn!(
                remaining = args.shots.len() - i,
                "hole finished, ignoring remaining shots"
            );
            break;
        }

        let intent = ShotIntent::new(plan.club.unwrap_or(args.club))
            .with_wind(wind)
            .with_aim(plan.params.direction);
        let mut source =
            |_: &ShotContext| -> holesim::error::Result<ShotParameters> { Ok(plan.params) };
        let report = session
            .take_shot(&intent, &mut source)
            .context(format!("Shot {} failed", i + 1))?;

        if !json {
            print_report(&report, verbose);
        }
        reports.push(report);
    }

    if json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to encode shot reports")?;
        println!("{}", out);
        return Ok(());
    }

    if args.shots.is_empty() {
        println!("No shots given. Try: holesim --shot 250:0");
        return Ok(());
    }

    let ball = session.ball();
    println!();
    if session.is_finished() {
        println!(
            "On the green in {} ({} penalty). {:.0} yards to the pin.",
            ball.stroke_count,
            session.penalty_strokes(),
            session.distance_to_pin()
        );
    } else {
        println!(
            "Lying {} in the {:?}, {:.0} yards to the pin.",
            ball.stroke_count,
            ball.lie,
            session.distance_to_pin()
        );
    }
    if verbose {
        println!("Done in {:.3}s", total_start.elapsed().as_secs_f32());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "holesim=debug" } else { "holesim=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_hole(hole: &Hole, from_file: bool) {
    let name = match hole.number {
        Some(n) => format!("Hole {}", n),
        None => "Hole".to_string(),
    };
    let source = if from_file { "course file" } else { "built-in" };
    println!("{} ({})", name, source);
    if let Some(par) = hole.par {
        println!("  Par: {}", par);
    }
    match hole.yards {
        Some(yards) => println!(
            "  Length: {} yards ({:.0} straight line)",
            yards,
            hole.straight_yards()
        ),
        None => println!("  Length: {:.0} yards straight line", hole.straight_yards()),
    }
    println!("  Tee: {}", hole.tee);
    println!("  Pin: {}", hole.pin);
    let counts: Vec<String> = [
        SurfaceLabel::Fairway,
        SurfaceLabel::Green,
        SurfaceLabel::Bunker,
        SurfaceLabel::Water,
        SurfaceLabel::Ob,
    ]
    .into_iter()
    .filter(|&label| hole.surfaces.count(label) > 0)
    .map(|label| format!("{} {}", hole.surfaces.count(label), label))
    .collect();
    println!("  Surfaces: {}", counts.join(", "));
    println!();
}

fn print_physics(physics: &PhysicsConfig, wind: Wind) {
    println!("Physics:");
    println!("  Time step: {}s", physics.time_step_s);
    println!("  Drag: {}", physics.drag);
    println!("  Gravity: {} m/s^2", physics.gravity_mps2);
    println!("  Full-power speed: {} mph", physics.max_speed_mph);
    println!("  Step bound: {}", physics.max_steps);
    println!(
        "  Wind: {} mph toward {} deg",
        wind.speed_mph, wind.direction_deg
    );
    println!();
}

fn print_report(report: &ShotReport, verbose: bool) {
    println!(
        "Shot {}: {} from the {:?} -> {}",
        report.stroke, report.club, report.played_from, report.outcome
    );
    println!("  Landed: {}", report.landing);
    if let Some(apex) = report.flight.apex() {
        println!(
            "  Flight: {} steps, apex {:.1}m",
            report.flight.len(),
            apex.altitude
        );
    }
    if let Some(entry) = report.boundary_entry {
        println!(
            "  Out of bounds: dropped at {} (+{} stroke)",
            entry, report.penalty_strokes
        );
    }
    println!("  To pin: {:.0} yards", report.distance_to_pin_yards);
    if verbose {
        println!("  Target: {}", report.target);
        println!("  Phases: {:?}", report.phases);
    }
}
