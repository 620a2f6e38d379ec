use anyhow::{anyhow, bail};
use scraper::{ElementRef, Html, Selector};

use crate::domain::{parse_price, sample_products, PriceText, Product, LIVE_SOURCE, NO_BRAND};

use super::PageFetcher;

const CARD_SELECTOR: &str = ".boost-pfs-filter-product-item";
const IMAGE_SELECTOR: &str = ".boost-pfs-filter-product-item-flip-image";
const TITLE_SELECTOR: &str = ".boost-pfs-filter-product-title";
const PRICE_SELECTOR: &str = ".boost-pfs-filter-product-item-sale-price";
const VENDOR_SELECTOR: &str = ".boost-pfs-filter-product-vendor";
const LINK_SELECTOR: &str = "a";

const BODY_SNIPPET_LEN: usize = 500;

struct CardSelectors {
    card: Selector,
    image: Selector,
    title: Selector,
    price: Selector,
    vendor: Selector,
    link: Selector,
}

impl CardSelectors {
    fn new() -> anyhow::Result<Self> {
        Ok(CardSelectors {
            card: compile(CARD_SELECTOR)?,
            image: compile(IMAGE_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            price: compile(PRICE_SELECTOR)?,
            vendor: compile(VENDOR_SELECTOR)?,
            link: compile(LINK_SELECTOR)?,
        })
    }
}

fn compile(selector: &str) -> anyhow::Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid selector {}: {}", selector, e))
}

/// Fetches the listing page and extracts its products.
///
/// Never comes back empty: when the fetch fails, the page cannot be parsed
/// or no card yields a product, the sample set is returned instead.
pub async fn scrape_products<F: PageFetcher>(fetcher: &F) -> Vec<Product> {
    let products = match fetcher.fetch().await {
        Ok(page) => {
            log::info!("Status code: {}", page.status);
            log::debug!(
                "First {} chars of HTML: {}",
                BODY_SNIPPET_LEN,
                page.body.chars().take(BODY_SNIPPET_LEN).collect::<String>()
            );

            match parse_products(&page.body) {
                Ok(products) => products,
                Err(e) => {
                    log::error!("Failed to parse product listing: {:?}", e);
                    vec![]
                }
            }
        }
        Err(e) => {
            log::error!("Scraping failed: {:?}", e);
            vec![]
        }
    };

    let products = match products.is_empty() {
        true => {
            log::warn!("No products scraped. Returning fallback sample products.");
            sample_products().to_vec()
        }
        false => products,
    };

    log::info!("Total products returned: {}", products.len());
    products
}

/// Walks every product card in `html`. A card that fails to extract is
/// logged and skipped; the rest keep their page order.
pub fn parse_products(html: &str) -> anyhow::Result<Vec<Product>> {
    let selectors = CardSelectors::new()?;
    let document = Html::parse_document(html);

    let mut products: Vec<Product> = Vec::new();

    for card in document.select(&selectors.card) {
        log::debug!("Found a product card");

        match extract_card(card, &selectors, products.len()) {
            Ok(product) => {
                log::info!(
                    "Parsed product: title={}, price={}, brand={}, img={:?}, url={}",
                    product.title,
                    product.price,
                    product.brand,
                    product.image,
                    product.url
                );
                products.push(product);
            }
            Err(e) => log::warn!("Error parsing product: {:?}", e),
        }
    }

    Ok(products)
}

fn extract_card(
    card: ElementRef,
    selectors: &CardSelectors,
    produced: usize,
) -> anyhow::Result<Product> {
    let image_tag = card.select(&selectors.image).next();

    let image = image_tag.and_then(|tag| {
        non_empty_attr(tag, "data-src")
            .or_else(|| non_empty_attr(tag, "src"))
            .map(|src| src.to_string())
    });

    let title = match card.select(&selectors.title).next() {
        Some(tag) => element_text(tag),
        None => image_tag
            .and_then(|tag| non_empty_attr(tag, "alt"))
            .map(|alt| alt.to_string())
            .unwrap_or_else(|| format!("Untitled Product #{}", produced + 1)),
    };

    let price = match card.select(&selectors.price).next() {
        Some(tag) => {
            let text = element_text(tag);
            match parse_price(&text) {
                PriceText::Amount(amount) => amount,
                PriceText::Missing => 0.0,
                PriceText::Invalid(amount) => {
                    bail!("Price label {:?} is not a valid amount ({})", text, amount)
                }
            }
        }
        None => 0.0,
    };

    let brand = card
        .select(&selectors.vendor)
        .next()
        .map(element_text)
        .unwrap_or_else(|| NO_BRAND.to_string());

    let url = card
        .select(&selectors.link)
        .next()
        .and_then(|tag| tag.value().attr("href"))
        .unwrap_or("")
        .to_string();

    Ok(Product {
        title,
        price,
        brand,
        materials: vec![],
        description: String::new(),
        url,
        image,
        badges: vec![],
        source: LIVE_SOURCE.to_string(),
    })
}

fn element_text(tag: ElementRef) -> String {
    tag.text().collect::<String>().trim().to_string()
}

fn non_empty_attr<'a>(tag: ElementRef<'a>, name: &str) -> Option<&'a str> {
    tag.value()
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
