//! Terminal front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifegame::{
    config::{CliOverrides, OutputFormat, Settings},
    life::{Board, Pattern, PATTERNS},
    utils::{BoardRenderer, ColorOutput},
};
use serde::Serialize;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "lifegame")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Board rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Generations to advance (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Live density for the random seed, in [0, 1] (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// RNG seed for a reproducible board
        #[arg(short, long)]
        seed: Option<u64>,

        /// Toroidal wrap on or off (overrides config)
        #[arg(short, long)]
        wrap: Option<bool>,

        /// Start from a named pattern instead of a random board
        #[arg(short, long)]
        pattern: Option<String>,

        /// Render every generation with a delay between frames
        #[arg(long)]
        show_evolution: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create default configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the built-in seed patterns
    Patterns,
}

#[derive(Serialize)]
struct RunSummary {
    cols: usize,
    rows: usize,
    wrap: bool,
    generations: usize,
    population: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            cols,
            rows,
            generations,
            density,
            seed,
            wrap,
            pattern,
            show_evolution,
            verbose,
        } => {
            let overrides = CliOverrides {
                cols,
                rows,
                wrap,
                generations,
                density,
                seed,
            };
            run_command(config, overrides, pattern, show_evolution, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Patterns => patterns_command(),
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    pattern: Option<String>,
    show_evolution: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Board: {}x{}", settings.board.cols, settings.board.rows);
        println!("  Topology: {:?}", settings.board.topology);
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Density: {}", settings.simulation.density);
        println!("  Seed: {:?}", settings.simulation.seed);
        println!();
    }

    let mut board = match settings.simulation.seed {
        Some(seed) => Board::with_seed(
            settings.board.cols,
            settings.board.rows,
            settings.board.topology,
            seed,
        )?,
        None => Board::new(
            settings.board.cols,
            settings.board.rows,
            settings.board.topology,
        )?,
    };

    match pattern {
        Some(ref name) => {
            let pattern = Pattern::by_name(name).with_context(|| {
                let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
                format!("Unknown pattern '{}', expected one of: {}", name, known.join(", "))
            })?;
            board.stamp(pattern);
        }
        None => board.randomize(settings.simulation.density)?,
    }

    let generations = settings.simulation.generations;
    let delay = Duration::from_millis(settings.simulation.step_delay_ms);

    if show_evolution {
        println!("{}", BoardRenderer::frame(&board, 0));
        for generation in 1..=generations {
            thread::sleep(delay);
            board.step();
            println!("{}", BoardRenderer::frame(&board, generation));
        }
    } else {
        for _ in 0..generations {
            board.step();
        }
        println!("{}", BoardRenderer::frame(&board, generations));
    }

    match settings.output.format {
        OutputFormat::Text => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Advanced {} generation(s), {} cells alive",
                    generations,
                    board.population()
                ))
            );
        }
        OutputFormat::Json => {
            let (cols, rows) = board.dimensions();
            let summary = RunSummary {
                cols,
                rows,
                wrap: board.topology().wraps(),
                generations,
                population: board.population(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
            );
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // A quick deterministic run on a small board.
    let mut quick = Settings::default();
    quick.board.cols = 20;
    quick.board.rows = 15;
    quick.simulation.generations = 10;
    quick.simulation.seed = Some(1);
    quick.to_file(&examples_dir.join("quick.yaml"))?;

    // Hard-edged board, sparse seeding.
    let mut clipped = Settings::default();
    clipped.board.topology = lifegame::Topology::Clipped;
    clipped.simulation.density = 0.1;
    clipped.to_file(&examples_dir.join("clipped.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml --show-evolution");

    Ok(())
}

fn patterns_command() -> Result<()> {
    for pattern in PATTERNS {
        println!(
            "{} ({}x{}, {} cells)",
            ColorOutput::info(pattern.name),
            pattern.width(),
            pattern.height(),
            pattern.cells.len()
        );
        println!("{}", BoardRenderer::pattern_preview(pattern));
    }
    Ok(())
}
