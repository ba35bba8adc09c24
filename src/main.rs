use aceest_fitness::configuration::get_configurations;
use aceest_fitness::startup::engine::Engine;
use aceest_fitness::startup::prepare::Kits;
use aceest_fitness::telemetry::{get_subscriber, init_subscriber, LoggerOutbound};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load Configurations
    let config = get_configurations()?;

    // Init Logger
    let log_subscriber = get_subscriber(
        "aceest_fitness".into(),
        "info".into(),
        config.application.logger_format,
        LoggerOutbound::new(std::io::stderr),
    );
    init_subscriber(log_subscriber)?;

    let kits = Kits::prepare(&config)?;
    Engine::build(config, kits)?.spinup().await?;

    Ok(())
}
