//! Fetches one ticket and prints who requested it.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZENDESK_DOMAIN`: Subdomain (`acme`) or full base URL
//! - `ZENDESK_USERNAME`: Agent email, with `/token` appended for API tokens
//! - `ZENDESK_PASSWORD`: Password or API token
//!
//! # Usage
//!
//! ```bash
//! cargo run --example get_ticket -- 42
//! RUST_LOG=zendesk=debug cargo run --example get_ticket -- 42
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use zendesk::config::Config;
use zendesk::ZendeskClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zendesk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ticket_id: i64 = std::env::args()
        .nth(1)
        .context("usage: get_ticket <ticket-id>")?
        .parse()
        .context("ticket id must be a number")?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("Configuration loaded, base_url: {}", config.base_url);

    let client = ZendeskClient::from_config(&config).context("Failed to create Zendesk client")?;

    let ticket = client
        .show_ticket(ticket_id)
        .await
        .with_context(|| format!("Failed to fetch ticket {}", ticket_id))?;

    println!(
        "#{} {:?} requested by {:?}",
        ticket_id,
        ticket.subject.unwrap_or_default(),
        ticket.requester_id
    );

    Ok(())
}
