mod api;
mod logging;
mod models;


use log::{error, info};
use models::config::Config;
use models::context::{Context, ContextPointer};
use rocket::{Build, Rocket};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("server failed to launch")]
    Launch,
}

fn build_rocket(context: ContextPointer) -> Rocket<Build> {
    let config = context.config();
    let figment = rocket::Config::figment()
        .merge(("address", config.address().clone()))
        .merge(("port", *config.port()));

    let schema = api::build_schema(context.clone());

    rocket::custom(figment)
        .manage(context)
        .manage(schema)
        .mount("/", api::routes())
}

#[rocket::main]
async fn main() -> Result<(), StartupError> {
    let config = Config::load()?;
    logging::init(config.log_level())?;

    info!(
        "Serving popular movies of {} from {}",
        config.popular_year(),
        config.omdb_url()
    );

    let context = Arc::new(Context::new(config));
    if let Err(err) = build_rocket(context).launch().await {
        error!("Rocket failed: {}", err);
        return Err(StartupError::Launch);
    }

    Ok(())
}
