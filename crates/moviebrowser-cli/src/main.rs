use clap::{ArgAction, Parser, Subcommand};
use commands::{config, home, movie, wishlist};
use movie_catalog_config::PathManager;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "moviebrowser")]
#[command(about = "MovieBrowser - Browse movie categories and keep a wishlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to the daily-rotated log file instead of stderr
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every movie category side by side
    #[command(long_about = "Load the popular, top rated and upcoming listings concurrently. Each category is shown as soon as it loads; a failing category does not affect the others.")]
    Home,

    /// Show full details for one movie
    Movie {
        /// Movie ID as used by the catalog
        id: String,

        /// Category the movie was reached from (popular, top-rated, upcoming)
        #[arg(long)]
        category: Option<String>,

        /// Add the movie to the wishlist, or remove it if already present
        #[arg(long, action = ArgAction::SetTrue)]
        toggle_wishlist: bool,
    },

    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        cmd: Option<WishlistCommands>,
    },

    /// Manage configuration and the catalog API key
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub(crate) enum WishlistCommands {
    /// List wishlist entries grouped by category
    List,

    /// Add a movie by ID
    Add {
        id: u64,

        /// Category to file the movie under
        #[arg(long, default_value = "popular")]
        category: String,
    },

    /// Remove a movie by ID
    Remove { id: u64 },

    /// Remove every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },

    /// Print the number of entries
    Count,
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },

    /// Store the catalog API key
    #[command(long_about = "Store the TMDB API key in the credentials file. The TMDB_API_KEY environment variable takes precedence over the stored key.")]
    ApiKey {
        /// API key (if not provided, will prompt)
        #[arg(long)]
        key: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_file = cli.log_file.then(|| PathManager::default().log_file());
    logging::init_logging_with_file(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Home => home::run_home(&output).await,
        Commands::Movie {
            id,
            category,
            toggle_wishlist,
        } => movie::run_movie(&id, category.as_deref(), toggle_wishlist, &output).await,
        Commands::Wishlist { cmd } => {
            let cmd = cmd.unwrap_or(WishlistCommands::List);
            wishlist::run_wishlist(cmd, &output).await
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output).await
        }
    }
}
