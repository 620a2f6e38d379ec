use env_logger::Env;
use eco_products::{
    configuration::{get_configuration, ScraperSettings},
    services::{scrape_products, HttpFetcher},
};

// Runs a single scrape and prints every record, one JSON object per line.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = match get_configuration() {
        Ok(configuration) => configuration.scraper,
        Err(e) => {
            log::warn!("No usable configuration ({}), using scraper defaults", e);
            ScraperSettings::default()
        }
    };

    let fetcher = HttpFetcher::new(&settings)?;
    let products = scrape_products(&fetcher).await;

    for product in products.iter() {
        println!("{}", serde_json::to_string(product)?);
    }

    if products.iter().all(|p| p.is_sample()) {
        log::warn!("Live scrape produced nothing, printed sample data");
    }

    Ok(())
}
