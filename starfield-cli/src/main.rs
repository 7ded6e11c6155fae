mod viewer;

use clap::{Parser, Subcommand};
use eframe::egui;
use starfield_core::diagnostics::format_scenario_error;
use starfield_core::{run_scenario, Scenario};
use std::fs;
use std::path::{Path, PathBuf};
use viewer::ViewerApp;

#[derive(Parser)]
#[command(name = "starfield")]
#[command(about = "Starfield - gravitating, colliding bodies in a 2D arena", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a scenario without a window and print the final bodies
    Run {
        /// Scenario file (YAML). Uses the built-in two-star scenario when omitted
        file: Option<PathBuf>,

        /// Number of steps to simulate
        #[arg(short, long, default_value_t = 1000)]
        steps: u64,
    },
    /// Open a window and animate a scenario
    View {
        /// Scenario file (YAML), reloaded whenever it changes on disk
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { file, steps } => run_file(file.as_deref(), steps),
        Commands::View { file } => view_file(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load(file: Option<&Path>) -> Result<Scenario, Box<dyn std::error::Error>> {
    let Some(path) = file else {
        return Ok(Scenario::default());
    };

    let source = fs::read_to_string(path)?;
    Scenario::from_yaml(&source).map_err(|e| format_scenario_error(&e, &source).into())
}

fn run_file(file: Option<&Path>, steps: u64) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load(file)?;
    let result = run_scenario(&scenario, steps)?;

    for body in &result.bodies {
        println!(
            "body {}: pos=({:.3}, {:.3}) vel=({:.3}, {:.3}) r={:.2}",
            body.index,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.radius
        );
    }
    println!(
        "{} steps, {} with collisions",
        result.steps, result.collisions
    );

    Ok(())
}

fn view_file(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load(file.as_deref())?;
    let arena = scenario.config.arena;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([arena.width, arena.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Starfield",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(file, scenario, cc)))),
    )?;

    Ok(())
}
