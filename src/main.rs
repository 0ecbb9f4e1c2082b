use anyhow::Context;
use env_logger::Env;
use places_poller::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    if let Err(e) = run(configuration).await {
        log::error!("Polling stopped: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
