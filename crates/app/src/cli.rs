//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

/// Marquee event marketplace client.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
pub struct Cli {
    /// Base origin of the marketplace backend.
    #[arg(
        long,
        env = "MARQUEE_BASE_URL",
        default_value = "http://localhost:3001/"
    )]
    pub base_url: Url,

    /// Directory for persisted client state (defaults to the platform's
    /// user data directory).
    #[arg(long, env = "MARQUEE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and persist the session token.
    Login {
        /// Account email address.
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Register a new account and persist the session token.
    Register {
        /// Account email address.
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Clear the session token.
    Logout,
    /// Show whether a session token is persisted.
    Whoami,
    /// Event operations.
    Events {
        /// Event subcommand to run.
        #[command(subcommand)]
        command: EventsCommand,
    },
}

/// Event subcommands.
#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List all events.
    List,
    /// Create an event.
    Create {
        /// Display title.
        title: String,
        /// Free-text description.
        description: String,
        /// Ticket price; must be a finite number.
        price: String,
    },
    /// Update an event.
    Update {
        /// Event identifier.
        id: String,
        /// New title.
        title: String,
        /// New description.
        description: String,
        /// New price, forwarded to the backend as given.
        price: String,
    },
    /// Delete an event.
    Delete {
        /// Event identifier.
        id: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_events_create() {
        let cli = Cli::try_parse_from([
            "marquee",
            "--base-url",
            "http://localhost:3001",
            "events",
            "create",
            "Title",
            "Desc",
            "12.50",
        ])
        .unwrap();

        match cli.command {
            Command::Events {
                command: EventsCommand::Create { price, .. },
            } => assert_eq!(price, "12.50"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
