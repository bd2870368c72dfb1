mod capture;
mod detect;
mod registry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use plcap_core::{Environment, Field};
use plcap_session::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "plcap")]
#[command(about = "Capture production locations from business pages and submit them to Open Supply Hub")]
struct Cli {
    /// Store file (defaults to PLCAP_STORE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run location detection once over a saved page
    Detect {
        /// URL the page was loaded from
        url: String,
        /// Saved HTML of the page
        #[arg(long)]
        html: PathBuf,
        /// Print the result without storing it
        #[arg(long)]
        dry_run: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-run detection on the retry schedule; reads `scroll`, `click`,
    /// `about` and `nav <url>` lines from stdin
    Watch {
        url: String,
        /// Saved HTML of the page, re-read on every attempt
        #[arg(long)]
        html: PathBuf,
    },
    /// Save text into one field of one location
    Capture {
        /// Selection menu item id, e.g. os-hub-address-loc-1
        #[arg(long)]
        menu_id: Option<String>,
        #[arg(long, required_unless_present = "menu_id")]
        field: Option<Field>,
        #[arg(long, default_value_t = 0)]
        index: usize,
        text: String,
    },
    /// Print the selection menu for the detected location count
    Menu,
    /// Show the captured locations
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Point the review form at another location
    Select { index: usize },
    /// Edit a field of the current location
    Edit { field: Field, value: String },
    /// Show or change the registry environment
    Env { environment: Option<Environment> },
    /// Save the API key for an environment (defaults to the selected one)
    Key {
        key: String,
        #[arg(long)]
        environment: Option<Environment>,
    },
    /// Search parent companies by name
    Lookup { query: String },
    /// Submit the current location, or every location with --all
    Submit {
        #[arg(long)]
        all: bool,
    },
    /// Discard every captured location
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = plcap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path.clone());
    let store = JsonFileStore::open(&store_path)?;

    match cli.command {
        Some(Commands::Detect {
            url,
            html,
            dry_run,
            json,
        }) => detect::run_detect(store, &config, &url, &html, dry_run, json)?,
        Some(Commands::Watch { url, html }) => detect::run_watch(store, &config, url, html).await?,
        Some(Commands::Capture {
            menu_id,
            field,
            index,
            text,
        }) => capture::run_capture(store, &config, menu_id.as_deref(), field, index, &text)?,
        Some(Commands::Menu) => capture::run_menu(store)?,
        Some(Commands::Show { json }) => capture::run_show(store, json)?,
        Some(Commands::Select { index }) => capture::run_select(store, index)?,
        Some(Commands::Edit { field, value }) => capture::run_edit(store, field, &value)?,
        Some(Commands::Env { environment }) => registry::run_env(store, environment)?,
        Some(Commands::Key { key, environment }) => registry::run_key(store, environment, &key)?,
        Some(Commands::Lookup { query }) => registry::run_lookup(&store, &config, &query).await?,
        Some(Commands::Submit { all }) => registry::run_submit(store, &config, all).await?,
        Some(Commands::Reset) => capture::run_reset(store)?,
        None => println!("store: {}", store_path.display()),
    }

    Ok(())
}
