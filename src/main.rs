use std::io;

use livingston_leads::configuration::Settings;
use livingston_leads::startup::Application;
use livingston_leads::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("livingston-leads".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config()?;

    // Build the application and serve requests until it is stopped
    let application = Application::build(config)?;
    tracing::info!("Listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
