use std::net::TcpListener;

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use eco_products::{
    configuration::ScraperSettings,
    domain::{sample_products, Product, LIVE_SOURCE},
    services::HttpFetcher,
    startup::run,
};

const LISTING_HTML: &str = r#"
<html>
  <body>
    <div class="boost-pfs-filter-products">
      <div class="boost-pfs-filter-product-item">
        <a href="/products/organic-cotton-tote">
          <img class="boost-pfs-filter-product-item-flip-image"
               data-src="//cdn.earthhero.com/tote.jpg" alt="Organic Cotton Tote">
        </a>
        <a class="boost-pfs-filter-product-title" href="/products/organic-cotton-tote">Organic Cotton Tote</a>
        <span class="boost-pfs-filter-product-vendor">EcoBags</span>
        <span class="boost-pfs-filter-product-item-sale-price">$24.99</span>
      </div>
      <div class="boost-pfs-filter-product-item">
        <a href="/products/steel-straw">
          <img class="boost-pfs-filter-product-item-flip-image" src="//cdn.earthhero.com/straw.jpg" alt="Steel Straw Set">
        </a>
        <span class="boost-pfs-filter-product-item-sale-price">$9.50</span>
      </div>
      <div class="boost-pfs-filter-product-item">
        <span class="boost-pfs-filter-product-vendor">Unknown Maker</span>
      </div>
    </div>
  </body>
</html>
"#;

struct StorefrontPage {
    status: StatusCode,
    body: String,
}

async fn listing(page: web::Data<StorefrontPage>) -> HttpResponse {
    HttpResponse::build(page.status)
        .content_type("text/html; charset=utf-8")
        .body(page.body.clone())
}

fn spawn_storefront(status: StatusCode, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let page = web::Data::new(StorefrontPage {
        status,
        body: body.to_string(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(page.clone())
            .route("/collections/all", web::get().to(listing))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to start storefront")
    .run();
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}/collections/all", port)
}

fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{}/collections/all", port)
}

fn spawn_app(target_url: String) -> String {
    let settings = ScraperSettings {
        target_url,
        timeout_secs: 5,
        ..ScraperSettings::default()
    };
    let fetcher = HttpFetcher::new(&settings).expect("Failed to build fetcher");

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let server = run(listener, fetcher).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

async fn get_products(app_address: &str) -> (u16, Vec<Product>) {
    let response = reqwest::Client::new()
        .get(format!("{}/api/products", app_address))
        .header("Origin", "http://localhost:8080")
        .send()
        .await
        .expect("Failed to execute request.");

    let status = response.status().as_u16();
    let products: Vec<Product> = response.json().await.expect("Body is not a product array");

    (status, products)
}

#[tokio::test]
async fn serves_live_products_from_storefront() {
    let storefront = spawn_storefront(StatusCode::OK, LISTING_HTML);
    let app = spawn_app(storefront);

    let response = reqwest::Client::new()
        .get(format!("{}/api/products", app))
        .header("Origin", "http://localhost:8080")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:8080")
    );

    let products: Vec<Product> = response.json().await.expect("Body is not a product array");

    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p.source == LIVE_SOURCE));

    assert_eq!(products[0].title, "Organic Cotton Tote");
    assert_eq!(products[0].price, 24.99);
    assert_eq!(products[0].brand, "EcoBags");
    assert_eq!(products[0].url, "/products/organic-cotton-tote");

    assert_eq!(products[1].title, "Steel Straw Set");
    assert_eq!(products[1].brand, "No brand");
    assert_eq!(products[1].image.as_deref(), Some("//cdn.earthhero.com/straw.jpg"));

    assert_eq!(products[2].title, "Untitled Product #3");
    assert_eq!(products[2].price, 0.0);
}

#[tokio::test]
async fn error_status_body_is_still_parsed() {
    let storefront = spawn_storefront(StatusCode::SERVICE_UNAVAILABLE, LISTING_HTML);
    let app = spawn_app(storefront);

    let (status, products) = get_products(&app).await;

    assert_eq!(status, 200);
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p.source == LIVE_SOURCE));
}

#[tokio::test]
async fn serves_sample_products_when_storefront_is_down() {
    let app = spawn_app(unreachable_url());

    let (status, products) = get_products(&app).await;

    assert_eq!(status, 200);
    assert_eq!(products, sample_products());
}

#[tokio::test]
async fn serves_sample_products_when_page_has_no_cards() {
    let storefront = spawn_storefront(StatusCode::NOT_FOUND, "<html><body>Not found</body></html>");
    let app = spawn_app(storefront);

    let (_, products) = get_products(&app).await;

    assert_eq!(products, sample_products());
}
