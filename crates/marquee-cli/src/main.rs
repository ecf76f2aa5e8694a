use anyhow::Result;
use clap::Parser;

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog endpoint URL (default: from config, falling back to the built-in endpoint)
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Fetch the movie list and print it
    ///
    /// Runs one fetch cycle against the catalog endpoint:
    ///
    /// - GETs the endpoint and normalizes either backend payload shape
    ///   (a 'results' episode array, or a key-to-movie mapping)
    /// - Prints the movies as a table, in remote response order
    /// - Prints the error message in place of content when the cycle fails
    ///
    /// Any non-success HTTP status is reported with one generic message;
    /// transport failures are reported with the underlying error text.
    List,
    /// Submit a new movie to the catalog
    ///
    /// POSTs the given fields as JSON to the catalog endpoint. The local
    /// list is not updated by a submission; run 'marquee list' afterwards
    /// to observe the new record.
    Add {
        /// Movie title
        title: String,

        /// Opening text / synopsis
        #[arg(long, default_value = "")]
        opening_text: String,

        /// Release date, as the backend expects it (e.g. 1977-05-25)
        #[arg(long, default_value = "")]
        release_date: String,
    },
    /// Browse the movie list interactively
    Browse,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print a config value, or the whole config file
    Get { key: Option<String> },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = marquee_api::Config::load_with_endpoint(cli.endpoint)?;

    match cli.command {
        Commands::List => {
            commands::run_list(&config).await?;
        }
        Commands::Add {
            title,
            opening_text,
            release_date,
        } => {
            commands::run_add(&config, title, opening_text, release_date).await?;
        }
        Commands::Browse => {
            tui::run_tui(&config).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Get { key } => commands::config::get_config(key)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
