//! Application configuration.

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: &str = env!("GIT_COMMIT");
const BUILD_DATE: &str = env!("BUILD_DATE");

/// CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "taskdash")]
#[command(about = "ECS task protection dashboard for container instance fleets")]
#[command(version = const_format::formatcp!(
    "{} (commit: {}, build date: {})",
    VERSION, COMMIT, BUILD_DATE
))]
pub struct Args {
    /// Task store base address (e.g. http://localhost:8080)
    #[arg(short, long, env = "TASKDASH_ENDPOINT")]
    pub endpoint: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "TASKDASH_LOG_LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch the cluster snapshot and render the dashboard (default)
    View {
        /// Offer the protection controls in a prompt after rendering
        #[arg(short, long)]
        interactive: bool,
    },
    /// Enable scale-in protection for one task
    Protect {
        task_arn: String,

        /// Protection window in minutes (store default when omitted)
        #[arg(short, long)]
        minutes: Option<i64>,
    },
    /// Disable scale-in protection for one task
    Unprotect { task_arn: String },
    /// Fetch and render a single task card
    Show { task_arn: String },
}

/// Application configuration derived from CLI args.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            endpoint: args.endpoint.clone(),
            log_level: args.log_level.clone(),
        }
    }
}
