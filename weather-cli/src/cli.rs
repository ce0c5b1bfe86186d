use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_core::{Config, ProxyClient, ViewEvent, ViewState};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather & clothing guide")]
pub struct Cli {
    /// Weather server to query, e.g. "http://127.0.0.1:3000".
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the server URL.
    Configure,

    /// Show weather and clothing advice for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Search cities interactively until cancelled.
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { server, command } = self;

        match command {
            Command::Configure => configure()?,
            Command::Show { city } => {
                let client = proxy_client(server)?;
                let state = ViewState::new().next(ViewEvent::Input(city)).0;
                let state = submit(&client, state).await;
                println!("{}", render::outcome(&state));
            }
            Command::Search => search(&proxy_client(server)?).await?,
        }

        Ok(())
    }
}

/// Client for `--server`, falling back to the configured URL.
fn proxy_client(server: Option<String>) -> anyhow::Result<ProxyClient> {
    let server_url = match server {
        Some(url) => url,
        None => Config::load()?.client.server_url,
    };
    Ok(ProxyClient::new(server_url))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Used by weather-server; OPENWEATHER_API_KEY takes precedence")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.is_empty() {
        config.set_api_key(api_key);
    }

    config.client.server_url = Text::new("Weather server URL:")
        .with_default(&config.client.server_url)
        .prompt()
        .context("Failed to read server URL")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn search(client: &ProxyClient) -> anyhow::Result<()> {
    let mut state = ViewState::new();

    loop {
        let input = match Text::new("City:").with_placeholder("Enter city...").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to read city"),
        };

        state = submit(client, state.next(ViewEvent::Input(input)).0).await;
        if !state.input().is_empty() {
            println!("{}", render::outcome(&state));
        }
    }
}

/// Submit the current input and wait for the outcome.
async fn submit(client: &ProxyClient, state: ViewState) -> ViewState {
    let (state, fetch) = state.next(ViewEvent::Submit);
    let Some(fetch) = fetch else {
        return state;
    };

    println!("{}", render::loading());
    let event = client.fetch_event(&fetch.city).await;
    state.next(event).0
}
