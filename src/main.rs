//! Main CLI application for the Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    build_engine,
    config::{CliOverrides, Settings},
    playback::{PlaybackDriver, PATTERNS},
    utils::{ColorOutput, FrameRenderer, CLEAR_SCREEN, CURSOR_HOME},
};
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life terminal simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the simulation as a terminal animation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Preset pattern to seed the board with
        #[arg(short, long)]
        pattern: Option<String>,

        /// Maximum generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Milliseconds between steps (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Print the live-cell export list when the run ends
        #[arg(long)]
        export: bool,
    },

    /// Advance the board without animation and print the result
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Preset pattern to seed the board with
        #[arg(short, long)]
        pattern: Option<String>,

        /// Number of generations to advance
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,

        /// Suppress the grid drawing, print only the export list
        #[arg(long)]
        quiet: bool,
    },

    /// List the preset pattern catalog
    Patterns,

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            generations,
            interval,
            export,
        } => run_command(config, pattern, generations, interval, export),
        Commands::Step {
            config,
            pattern,
            count,
            quiet,
        } => step_command(config, pattern, count, quiet),
        Commands::Patterns => patterns_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from the config file, falling back to defaults when it
/// does not exist.
fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    pattern: Option<String>,
    generations: Option<u64>,
    interval: Option<u64>,
    export: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        interval_ms: interval,
        generations,
        ..Default::default()
    });
    settings
        .validate()
        .context("Configuration validation failed")?;

    let engine = build_engine(&settings, pattern.as_deref())?;
    let renderer = FrameRenderer::new(&settings.display);
    let mut driver = PlaybackDriver::new(
        engine,
        Duration::from_millis(settings.playback.interval_ms),
    );
    driver.play();

    let mut stdout = std::io::stdout();
    print!("{}", CLEAR_SCREEN);
    while driver.engine().generation() < settings.playback.max_generations {
        driver.tick(Instant::now());
        // Redraw every poll; the renderer tolerates unchanged grids.
        print!("{}{}", CURSOR_HOME, renderer.render(driver.engine()));
        stdout.flush().context("Failed to flush frame")?;
        thread::sleep(Duration::from_millis(15));
    }
    driver.pause();

    println!();
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Stopped after {} generations with {} live cells",
            driver.engine().generation(),
            driver.engine().live_count()
        ))
    );

    if export {
        let json = driver
            .engine()
            .export_json()
            .context("Failed to serialize export")?;
        println!("{}", json);
    }

    Ok(())
}

fn step_command(
    config_path: PathBuf,
    pattern: Option<String>,
    count: u64,
    quiet: bool,
) -> Result<()> {
    let settings = load_settings(&config_path)?;
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut engine = build_engine(&settings, pattern.as_deref())?;
    for _ in 0..count {
        engine.step();
    }

    if !quiet {
        let renderer = FrameRenderer::new(&settings.display);
        println!("{}", renderer.render(&engine));
    }

    let json = engine.export_json().context("Failed to serialize export")?;
    println!("{}", json);

    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("{}", ColorOutput::info("Preset patterns:"));
    for pattern in PATTERNS {
        println!("  {:<18} {:>3} cells", pattern.name, pattern.cells.len());
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
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

    println!("{}", ColorOutput::success("Setup complete"));
    println!("Next: cargo run -- run --pattern glider --config config/default.yaml");

    Ok(())
}
