//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, DisplayStyle, OutputFormat, Settings},
    game_of_life::Pattern,
    session::{survey_patterns, Session},
    utils::{ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a fixed, hard-edged board")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path (defaults are used when it does not exist)
    #[arg(short, long, global = true, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct BoardArgs {
    /// Board rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a board and evolve it
    Run {
        /// Pattern to load (Glider, Blinker, Block, Beacon, Pulsar)
        #[arg(short, long, conflicts_with = "random")]
        pattern: Option<String>,

        /// Start from a random board
        #[arg(short, long)]
        random: bool,

        /// Random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Probability of a cell starting alive (overrides config)
        #[arg(long)]
        probability: Option<f64>,

        #[command(flatten)]
        board: BoardArgs,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Print every generation instead of only the last one
        #[arg(long)]
        show_evolution: bool,

        /// Pace frames by the tick interval, like the play button
        #[arg(long, requires = "show_evolution")]
        play: bool,

        /// Tick interval in milliseconds (overrides config)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Print row and column numbers around the board
        #[arg(long)]
        coords: bool,
    },

    /// List the built-in patterns
    Patterns,

    /// Classify every built-in pattern
    Survey {
        #[command(flatten)]
        board: BoardArgs,

        /// Generations to examine per pattern
        #[arg(short, long, default_value_t = 32)]
        generations: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_failure(&err));
            ExitCode::FAILURE
        }
    }
}

/// Render a command failure with its full context chain
fn format_failure(err: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {:#}", err))
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            pattern,
            random,
            seed,
            probability,
            board,
            generations,
            show_evolution,
            play,
            interval_ms,
            coords,
        } => {
            let overrides = CliOverrides {
                rows: board.rows,
                cols: board.cols,
                generations,
                interval_ms,
                alive_probability: probability,
                seed,
                style: coords.then_some(DisplayStyle::Coordinates),
                format: None,
            };
            let settings = load_settings(&cli.config, &overrides)?;
            run_command(&settings, pattern.as_deref(), random, show_evolution, play)
        }
        Commands::Patterns => patterns_command(),
        Commands::Survey {
            board,
            generations,
            json,
        } => {
            let overrides = CliOverrides {
                rows: board.rows,
                cols: board.cols,
                format: json.then_some(OutputFormat::Json),
                ..Default::default()
            };
            let settings = load_settings(&cli.config, &overrides)?;
            survey_command(&settings, generations)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    tracing::debug!(?settings, "configuration loaded");
    Ok(settings)
}

fn run_command(
    settings: &Settings,
    pattern: Option<&str>,
    random: bool,
    show_evolution: bool,
    play: bool,
) -> Result<()> {
    let mut session = Session::new(settings).context("Failed to create session")?;

    if let Some(name) = pattern {
        session
            .load_pattern(name)
            .with_context(|| format!("Failed to load pattern {}", name))?;
        println!("{}", ColorOutput::info(&format!("Loaded {}", name)));
    } else if random {
        session.randomize().context("Failed to randomize board")?;
        println!("{}", ColorOutput::info("Random board"));
    } else {
        println!("{}", ColorOutput::warning("No pattern or --random given, starting from an empty board"));
    }

    let style = settings.output.style;
    let generations = settings.simulation.generations;
    let start_time = Instant::now();

    if show_evolution {
        print_frame(&session, style);
        if play {
            session.play();
        }
        for _ in 0..generations {
            if session.is_running() {
                std::thread::sleep(session.interval());
            }
            session.step();
            print_frame(&session, style);
        }
        session.pause();
    } else {
        session.run_for(generations);
        print_frame(&session, style);
    }

    tracing::info!(
        generations,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "run finished"
    );

    if session.grid().is_empty() {
        println!("{}", ColorOutput::warning("Board is empty"));
    } else {
        println!(
            "{}",
            ColorOutput::success(&format!("{} cells alive", session.grid().population()))
        );
    }

    Ok(())
}

fn print_frame(session: &Session, style: DisplayStyle) {
    println!("{}", GridFormatter::format_grid(session.grid(), style));
    println!(
        "{}",
        ColorOutput::highlight(&GridFormatter::format_status(session.generation(), session.grid()))
    );
}

fn patterns_command() -> Result<()> {
    println!("{}", ColorOutput::info("Built-in patterns:"));
    for pattern in Pattern::ALL {
        println!("  {:8} {:3} cells", pattern.name(), pattern.cells().len());
    }
    Ok(())
}

fn survey_command(settings: &Settings, generations: usize) -> Result<()> {
    let entries = survey_patterns(settings.board.rows, settings.board.cols, generations)
        .context("Failed to survey patterns")?;

    match settings.output.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).context("Failed to serialize survey")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                ColorOutput::info(&format!(
                    "Survey on {}x{} board, up to {} generations",
                    settings.board.rows, settings.board.cols, generations
                ))
            );
            print!("{}", GridFormatter::format_survey(&entries));
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Next: cargo run -- run --pattern Glider --show-evolution");

    Ok(())
}
