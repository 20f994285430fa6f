//! Marquee - CLI entry point
//!
//! Wires the infrastructure adapters (reqwest transport, file token
//! storage, tracing navigator) into the gateway and dispatches the parsed
//! command.

mod cli;

use std::sync::Arc;

use clap::Parser;
use marquee_application::ports::TokenStorage;
use marquee_application::{ClientContext, Gateway, TokenStore};
use marquee_domain::{Credentials, Event};
use marquee_infrastructure::{
    FileTokenStorage, ReqwestHttpClient, TracingNavigator, UnavailableStorage,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, EventsCommand};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let storage = token_storage(&cli);
    let tokens = TokenStore::new(storage);
    let context = ClientContext::new(tokens, Arc::new(TracingNavigator::new()));
    let transport = Arc::new(ReqwestHttpClient::new()?);
    let gateway = Gateway::new(cli.base_url.clone(), transport, context);

    run(&gateway, cli.command).await
}

fn token_storage(cli: &Cli) -> Arc<dyn TokenStorage> {
    let file = cli.data_dir.clone().map_or_else(
        FileTokenStorage::in_user_data_dir,
        |dir| Some(FileTokenStorage::new(dir.join("token"))),
    );

    match file {
        Some(storage) => Arc::new(storage),
        None => {
            warn!("no user data directory available, session will not persist");
            Arc::new(UnavailableStorage)
        }
    }
}

async fn run(
    gateway: &Gateway<ReqwestHttpClient>,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Login { email, password } => {
            gateway.login(&Credentials::new(email, password)).await?;
            println!("Logged in.");
        }
        Command::Register { email, password } => {
            gateway.register(&Credentials::new(email, password)).await?;
            println!("Registered and logged in.");
        }
        Command::Logout => {
            gateway.logout();
            println!("Logged out.");
        }
        Command::Whoami => {
            if gateway.tokens().is_logged_in() {
                println!("Logged in.");
            } else {
                println!("Not logged in.");
            }
        }
        Command::Events { command } => run_events(gateway, command).await?,
    }
    Ok(())
}

async fn run_events(
    gateway: &Gateway<ReqwestHttpClient>,
    command: EventsCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        EventsCommand::List => {
            let events = gateway.list_events().await?;
            if events.is_empty() {
                println!("No events found.");
            }
            for event in &events {
                print_event(event);
            }
        }
        EventsCommand::Create {
            title,
            description,
            price,
        } => {
            let event = gateway.create_event(&title, &description, &price).await?;
            println!("Created:");
            print_event(&event);
        }
        EventsCommand::Update {
            id,
            title,
            description,
            price,
        } => {
            let event = gateway
                .update_event(&id, &title, &description, &price)
                .await?;
            println!("Updated:");
            print_event(&event);
        }
        EventsCommand::Delete { id } => {
            let confirmation = gateway.delete_event(&id).await?;
            match confirmation.message {
                Some(message) => println!("{message}"),
                None => println!("Deleted {id}."),
            }
        }
    }
    Ok(())
}

fn print_event(event: &Event) {
    let created = event
        .created_at
        .map_or_else(String::new, |ts| format!("  {}", ts.format("%Y-%m-%d")));
    println!(
        "{}  {}  ${:.2}{}\n    {}",
        event.id, event.title, event.price, created, event.description
    );
}
