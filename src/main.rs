//! Concierge CLI entry point.

use clap::{Parser, Subcommand};
use concierge::{Config, DomainToggles};
use tracing_subscriber::EnvFilter;

mod cli;

/// Concierge: unified calendar engine for the hotel back-office dashboard
#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project the unified calendar into day/week/month cells
    View {
        /// Path to a JSON file holding the five record collections
        #[arg(short, long)]
        records: String,
        /// View granularity: day, week or month
        #[arg(short, long, default_value = "month")]
        granularity: String,
        /// Reference date YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Exclude agenda entries
        #[arg(long)]
        no_agenda: bool,
        /// Exclude spa bookings
        #[arg(long)]
        no_spa: bool,
        /// Exclude CRM leads
        #[arg(long)]
        no_leads: bool,
        /// Exclude tasks
        #[arg(long)]
        no_tasks: bool,
        /// Exclude group stays
        #[arg(long)]
        no_stays: bool,
    },
    /// Dry-run a drag reschedule: print the domain update it would issue
    Move {
        /// Path to a JSON file holding the five record collections
        #[arg(short, long)]
        records: String,
        /// The (usually prefixed) event id being moved
        id: String,
        /// Target date YYYY-MM-DD
        date: String,
        /// Target hour (0-23); minutes are always zeroed by a drop
        hour: u32,
    },
    /// Timeline statistics
    Stats {
        /// Path to a JSON file holding the five record collections
        #[arg(short, long)]
        records: String,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match args.command {
        Command::View {
            records,
            granularity,
            date,
            no_agenda,
            no_spa,
            no_leads,
            no_tasks,
            no_stays,
        } => {
            let toggles = DomainToggles {
                agenda: !no_agenda,
                spa: !no_spa,
                leads: !no_leads,
                tasks: !no_tasks,
                stays: !no_stays,
            };
            cli::run_view(
                config,
                &records,
                cli::parse_granularity(&granularity)?,
                cli::parse_date(date.as_deref())?,
                toggles,
                args.json,
            )
        }
        Command::Move {
            records,
            id,
            date,
            hour,
        } => cli::run_move(
            config,
            &records,
            &id,
            cli::parse_date(Some(date.as_str()))?,
            hour,
            args.json,
        ),
        Command::Stats { records } => {
            cli::run_stats(config, &records, DomainToggles::default(), args.json)
        }
    }
}
