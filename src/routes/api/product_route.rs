use actix_web::{web, HttpResponse};

use crate::services::{scrape_products, PageFetcher};

pub const PRODUCTS_PATH: &str = "/api/products";

/// Scrapes the listing on every call. Always answers 200, with sample
/// products when the live page gives nothing.
pub async fn get_products<F: PageFetcher + 'static>(fetcher: web::Data<F>) -> HttpResponse {
    let products = scrape_products(fetcher.get_ref()).await;

    HttpResponse::Ok().json(products)
}
