//! Parcelport CLI - shipment order tools.
//!
//! # Usage
//!
//! ```bash
//! # Volume and volumetric weight of a 30x20x5 cm package weighing 0.4 kg
//! pp-cli cbm 30 20 5 --weight 0.4
//!
//! # Postal code guidance
//! pp-cli postal japan 100-0001
//!
//! # Sign in as a corporate account, then bulk import and submit
//! pp-cli login --account CORP-0042 --name "Acme Co." --corporate
//! pp-cli import items.csv
//! pp-cli submit order.yaml --items items.csv
//! ```
//!
//! # Commands
//!
//! - `cbm` - CBM, volumetric weight and ratio class for one package
//! - `postal` - Postal code guide and format check
//! - `import` - Parse a bulk line-item file (corporate accounts)
//! - `validate` - Compliance and submission checks for an order document
//! - `submit` - Validate and submit an order through the simulated backend
//! - `login` / `logout` / `whoami` - Session management

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parcelport_cli::commands;
use parcelport_cli::{App, CliError, PortalConfig};
use parcelport_core::Country;
use parcelport_core::measure::Dimensions;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pp-cli")]
#[command(author, version, about = "Parcelport shipment order tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Volume (CBM) and volumetric weight for one package
    #[command(allow_negative_numbers = true)]
    Cbm {
        /// Width in centimeters
        width: Decimal,
        /// Height in centimeters
        height: Decimal,
        /// Depth in centimeters
        depth: Decimal,
        /// Actual weight in kilograms, to classify the volumetric ratio
        #[arg(short, long)]
        weight: Option<Decimal>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Postal code guide for a destination
    Postal {
        /// Destination (`japan`, `south_korea`, ... or an ISO code)
        country: Country,
        /// Postal code to check against the destination's pattern
        code: Option<String>,
    },
    /// Parse a bulk line-item CSV file
    Import {
        /// CSV file with a header row
        file: PathBuf,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Check an order document without submitting it
    Validate {
        /// YAML order document
        file: PathBuf,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and submit an order
    Submit {
        /// YAML order document
        file: PathBuf,
        /// Replace the document's items with those from a CSV file
        #[arg(long)]
        items: Option<PathBuf>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign in and remember the session
    Login {
        /// Account code
        #[arg(short, long)]
        account: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Corporate account (enables bulk import)
        #[arg(long)]
        corporate: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn init_tracing(json: bool) {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "parcelport_cli=info,parcelport_core=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = PortalConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.log_json));

    let result = match config {
        Ok(config) => run(cli, &App::new(config)).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, app: &App) -> Result<(), CliError> {
    match cli.command {
        Commands::Cbm {
            width,
            height,
            depth,
            weight,
            json,
        } => commands::measure::run(Dimensions::new(width, height, depth), weight, json)?,
        Commands::Postal { country, code } => commands::postal::run(country, code.as_deref())?,
        Commands::Import { file, json } => commands::import::run(app, &file, json).await?,
        Commands::Validate { file, json } => commands::order::validate(app, &file, json).await?,
        Commands::Submit { file, items, json } => {
            commands::order::submit(app, &file, items.as_deref(), json).await?;
        }
        Commands::Login {
            account,
            name,
            corporate,
        } => {
            commands::session::login(app, &account, &name, corporate).await?;
        }
        Commands::Logout => commands::session::logout(app).await?,
        Commands::Whoami => commands::session::whoami(app).await?,
    }
    Ok(())
}
