use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "edupal", version, about = "EduPal assistant suggestions CLI")]
struct Cli {
    /// Use this config file instead of ~/.config/edupal/config.toml
    #[arg(long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the suggestion to show right now
    Suggest(commands::suggest::SuggestArgs),
    /// List every reminder candidate for a route
    Reminders(commands::reminders::RemindersArgs),
    /// Inspect the static reminder tables
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Updates backend token: login / logout / status
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Poll for suggestions like the portal UI does
    Watch(commands::watch::WatchArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config_file = cli.config_file.as_deref();
    let result = match cli.command {
        Commands::Suggest(args) => commands::suggest::run(args, config_file).await,
        Commands::Reminders(args) => commands::reminders::run(args),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action, config_file),
        Commands::Watch(args) => commands::watch::run(args, config_file).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
