pub mod page_fetcher;
pub mod product_scraper;

pub use page_fetcher::*;
pub use product_scraper::*;
