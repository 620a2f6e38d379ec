use std::net::TcpListener;

use env_logger::Env;
use eco_products::{configuration::get_configuration, services::HttpFetcher, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().map_err(std::io::Error::other)?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    let fetcher = HttpFetcher::new(&configuration.scraper).map_err(std::io::Error::other)?;

    log::info!("Serving products scraped from {} on {}", fetcher.url(), address);

    run(listener, fetcher)?.await
}
