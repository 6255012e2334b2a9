//! SotaOG CLI - Command-line access to the SotaOG operations API.

mod commands;
mod observability;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::ConnectionArgs;
use observability::{init_tracing, LogFormat, TracingConfig};
use sotaog_client::{DEFAULT_ASSET_KIND, DEFAULT_STRAPPING_KIND};

/// SotaOG - Oil and gas operations data from the command line.
#[derive(Parser)]
#[command(name = "sotaog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List assets, optionally filtered by facility and asset type
    Assets {
        /// Asset collection (assets, wells, tanks, ...)
        #[arg(short, long, default_value = DEFAULT_ASSET_KIND)]
        kind: String,

        /// Keep assets at this facility
        #[arg(short, long)]
        facility: Option<String>,

        /// Keep assets of this type
        #[arg(short, long)]
        asset_type: Option<String>,
    },

    /// Show one asset
    Asset {
        /// Asset ID
        id: String,

        /// Asset collection (assets, wells, tanks, ...)
        #[arg(short, long, default_value = DEFAULT_ASSET_KIND)]
        kind: String,
    },

    /// List facilities
    Facilities,

    /// List SWD networks, optionally only those serving a facility
    SwdNetworks {
        /// Keep networks serving this facility
        #[arg(short, long)]
        facility: Option<String>,
    },

    /// Print a tank strapping table as level,volume rows
    Strapping {
        /// Asset ID
        id: String,

        /// Asset collection
        #[arg(short, long, default_value = DEFAULT_STRAPPING_KIND)]
        kind: String,
    },

    /// List daily well production
    WellProduction {
        /// Well ID (repeatable)
        #[arg(short, long = "well-id")]
        well_ids: Vec<String>,

        /// Facility ID (repeatable)
        #[arg(short, long = "facility-id")]
        facility_ids: Vec<String>,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },

    /// List truck tickets
    TruckTickets {
        /// Facility the tickets belong to
        #[arg(short, long)]
        facility: Option<String>,

        /// Ticket type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Earliest ticket timestamp
        #[arg(long)]
        start_ts: Option<i64>,

        /// Latest ticket timestamp
        #[arg(long)]
        end_ts: Option<i64>,

        /// List automatically captured tickets instead
        #[arg(long)]
        auto: bool,
    },

    /// Upload the scanned image of a truck ticket
    UploadTicketImage {
        /// Truck ticket ID
        id: String,

        /// Truck ticket timestamp
        timestamp: i64,

        /// Path to the image file
        file: String,

        /// Content type (guessed from the file extension when omitted)
        #[arg(short, long)]
        content_type: Option<String>,
    },
}

fn setup_logging(verbosity: u8) -> Result<()> {
    // Check for explicit log format override, otherwise auto-detect
    let log_format = std::env::var("SOTAOG_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse::<LogFormat>().ok())
        .unwrap_or_else(|| {
            if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
                LogFormat::Pretty
            } else {
                LogFormat::Compact
            }
        });

    let log_filter = observability::resolve_filter(
        verbosity,
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("RUST_LOG").ok(),
    );

    let config = TracingConfig::builder()
        .log_format(log_format)
        .log_filter(log_filter)
        .build();

    init_tracing(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let client = cli.connection.connect()?;

    match cli.command {
        Commands::Assets {
            kind,
            facility,
            asset_type,
        } => commands::assets::list(&client, &kind, facility.as_deref(), asset_type.as_deref()),
        Commands::Asset { id, kind } => commands::assets::show(&client, &id, &kind),
        Commands::Facilities => commands::facilities::list(&client),
        Commands::SwdNetworks { facility } => {
            commands::facilities::swd_networks(&client, facility.as_deref())
        }
        Commands::Strapping { id, kind } => commands::assets::strapping(&client, &id, &kind),
        Commands::WellProduction {
            well_ids,
            facility_ids,
            start_date,
            end_date,
        } => commands::wells::production(
            &client,
            sotaog_client::WellQuery {
                well_ids,
                facility_ids,
                start_date,
                end_date,
            },
        ),
        Commands::TruckTickets {
            facility,
            kind,
            start_ts,
            end_ts,
            auto,
        } => commands::truck_tickets::list(
            &client,
            sotaog_client::TruckTicketQuery {
                facility,
                kind,
                start_ts,
                end_ts,
            },
            auto,
        ),
        Commands::UploadTicketImage {
            id,
            timestamp,
            file,
            content_type,
        } => commands::truck_tickets::upload_image(
            &client,
            &id,
            timestamp,
            &file,
            content_type.as_deref(),
        ),
    }
}
