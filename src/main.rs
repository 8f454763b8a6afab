use std::{env::args, sync::Arc};

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use activity_signup::{config, domain::seed, web::run};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut config = config::load().context("Failed to load configuration")?;
    config.override_port(args().nth(1))?;

    let store = match &config.seed_file {
        Some(path) => seed::load(path)?,
        None => seed::activities(),
    };
    log::info!("Loaded {} activities", store.len());

    run(config.addr()?, Arc::new(Mutex::new(store))).await
}
