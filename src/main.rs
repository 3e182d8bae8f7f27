use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use clap::Parser;
use diesel::{
    r2d2::{ConnectionManager, Pool},
    SqliteConnection,
};

mod api;
mod config;
mod persistent;
mod status;
mod view;

#[cfg(test)]
mod testing;

use config::Args;
use view::View;

type DbPool = Pool<ConnectionManager<SqliteConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let config = args.config.unwrap_or_default();

    // Delete existing database
    if args.flush_data {
        log::info!("Flushing persistent data");
        match std::fs::remove_file(&config.database_url) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => return Err(err),
            _ => {}
        }
    }

    let pool = persistent::establish_pool(&config.database_url, config.pool_size).map_err(|err| {
        log::error!("Failed to set up database {}: {err}", config.database_url);
        std::io::Error::other(err)
    })?;

    // No fallback rendering path, so broken templates stop us here
    let view = View::load(&config.template_dir).map_err(|err| {
        log::error!("Failed to load templates from {}: {err}", config.template_dir.display());
        std::io::Error::other(err)
    })?;

    let pool = Data::new(pool);
    let view = Data::new(view);
    let bind = (config.server.bind_address.clone(), config.server.bind_port);
    let config = Data::new(config);

    log::info!("Listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(pool.clone())
            .app_data(view.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
