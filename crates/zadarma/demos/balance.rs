//! Balance example
//!
//! Reads credentials from the environment (or a `.env` file), calls
//! `/v1/info/balance/` and prints the status and raw body.
//!
//! ## Prerequisites
//!
//! ```bash
//! export ZADARMA_API_KEY=your-key
//! export ZADARMA_API_SECRET=your-secret
//! # Optional: talk to the sandbox
//! export ZADARMA_SANDBOX=true
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example balance --features trace
//!
//! # Any other GET endpoint without parameters
//! cargo run --example balance --features trace -- /v1/info/timezone/
//! ```

use zadarma::{Client, ClientConfig, Method, ParameterSet};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/v1/info/balance/".to_string());

    let config = ClientConfig::from_env()?;
    println!("Base URL: {}", config.resolved_base_url());

    let client = Client::from_config(config)?;
    let response = client.call(Method::GET, &path, ParameterSet::new()).await?;

    println!("Status:   {}", response.status());
    println!("Elapsed:  {:?}", response.elapsed());
    println!("{}", response.text()?);

    Ok(())
}
