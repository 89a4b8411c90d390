//! Drape CLI — headless simulation and input validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "Drape — position-based cloth simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless cloth-drop scenario.
    Simulate {
        /// Path to simulation config (TOML). Defaults are used if omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// Pin the two top corners of the cloth in place.
        #[arg(long)]
        pin_corners: bool,
    },

    /// Validate a config (.toml) or mesh (.json) file.
    Validate {
        /// Path to the file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            pin_corners,
        } => commands::simulate(config.as_deref(), frames, pin_corners),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
