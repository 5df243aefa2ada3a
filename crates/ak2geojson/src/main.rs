use crate::prelude::{println, *};
use clap::Parser;

mod config;
mod error;
mod fetch;
mod prelude;
mod publish;

use config::{App, Config};
use fetch::ActionKitClient;

/// Log progress at `info` (or `debug` with `--verbose`) unless RUST_LOG says otherwise
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_default_env()
        .init();
}

async fn run(config: &Config) -> Result<()> {
    log::info!(
        "Converting events from ActionKit campaign {} to GeoJSON at {}",
        config.campaign_id,
        config.destination
    );

    let client = ActionKitClient::new(config)?;
    let collection =
        fetch::fetch_features(&client, &config.actionkit_url, config.campaign_id).await?;

    if config.dry_run {
        let body = publish::encode(&collection)?;
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    let s3_client = publish::create_s3_client(config.region.as_deref()).await;
    publish::publish(&s3_client, &config.destination, &collection).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logging(app.verbose);

    let config = Config::from_app(app)?;
    run(&config).await
}
