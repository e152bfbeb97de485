use crate::app::App;
use crate::config::Config;
use crate::listings::HttpListingSource;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use log::{error, info};

mod app;
mod config;
mod errors;
mod listings;
mod logger;
mod map;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = logger::setup_logger() {
        eprintln!("Logger setup failed: {e}");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let source = match HttpListingSource::new(config.listings_url.clone(), config.fetch_timeout) {
        Ok(source) => source,
        Err(e) => {
            error!("Listings client setup failed: {e}");
            std::process::exit(1);
        }
    };
    info!("Listings endpoint: {}", source.url());

    let app = App::new(Box::new(source));

    info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
