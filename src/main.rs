#![deny(warnings)]

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use user_service::security::PasswordHasher;
use user_service::{config, database, logging, router};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    logging::init(&config.observability);

    ::tracing::info!(
        name = %config.app.name,
        environment = %config.app.environment,
        "Starting service"
    );

    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    let hasher = PasswordHasher::from_config(&config.auth)
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {}", e))?;

    let db = Data::new(db);
    let hasher = Data::new(hasher);
    let auth = Data::new(config.auth.clone());
    let cors = config.security.cors.clone();
    let api = config.api.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(cors.middleware())
            .wrap(Logger::default())
            .app_data(db.clone())
            .app_data(hasher.clone())
            .app_data(auth.clone())
            .configure(router::route)
            .configure(router::docs(&api))
    })
    .shutdown_timeout(config.app.shutdown_timeout);

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let address = config.server.address();
    ::tracing::info!(host = %address.0, port = address.1, "Listening");

    server
        .bind(address)
        .context("Failed to bind server address")?
        .run()
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
