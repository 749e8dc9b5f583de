use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "dondeconsigo")]
#[command(about = "Dónde Consigo - points, levels and badges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.dondeconsigo/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the state database (defaults to ~/.dondeconsigo/gamification.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, level progress, badges and streak for a user
    Status {
        #[arg(short, long)]
        user: String,
    },

    /// Award points for an action
    Award {
        #[arg(short, long)]
        user: String,

        /// Action key, e.g. sharePromo
        action: String,

        /// Award exactly this many points instead of the configured amount
        #[arg(long)]
        points: Option<u32>,
    },

    /// Unlock a badge
    Unlock {
        #[arg(short, long)]
        user: String,

        /// Badge id, e.g. firstPhoto
        badge: String,
    },

    /// Record today's login and update the streak
    Login {
        #[arg(short, long)]
        user: String,
    },

    /// Print the level table, action prices and badges
    Levels,

    /// Write the default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Award a few achievements and play their toasts in real time
    Demo {
        #[arg(short, long, default_value = "demo")]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let paths = cli::Paths {
        config: cli.config,
        db: cli.db,
    };

    match cli.command {
        Commands::Status { user } => cli::status::status_command(&paths, &user)?,
        Commands::Award {
            user,
            action,
            points,
        } => cli::award::award_command(&paths, &user, &action, points)?,
        Commands::Unlock { user, badge } => cli::award::unlock_command(&paths, &user, &badge)?,
        Commands::Login { user } => cli::login::login_command(&paths, &user)?,
        Commands::Levels => cli::status::levels_command(&paths)?,
        Commands::Init { force } => cli::init::init_command(&paths, force)?,
        Commands::Demo { user } => cli::demo::demo_command(&paths, &user).await?,
    }

    Ok(())
}
