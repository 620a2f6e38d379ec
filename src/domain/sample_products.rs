use std::sync::LazyLock;

use super::product::{Product, SAMPLE_SOURCE};

static SAMPLE_PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        sample(
            "Organic Cotton T-Shirt",
            24.99,
            "EcoWear",
            &["100% organic cotton", "water-based dyes"],
            "Soft, sustainable, and stylish.",
            "https://example.com/organic-cotton-tshirt",
            "https://images.unsplash.com/photo-1586363104862-3a5e2ab60d99?w=500&q=80",
            &["Fair Trade"],
        ),
        sample(
            "Reusable Glass Water Bottle",
            28.50,
            "GreenHydro",
            &["Sustainable glass", "silicone grip"],
            "Stay hydrated sustainably.",
            "https://example.com/reusable-glass-bottle",
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=500&q=80",
            &["Carbon Neutral"],
        ),
        sample(
            "Biodegradable Phone Case",
            27.50,
            "EcoTech",
            &["Biodegradable bioplastic", "plant fibers"],
            "Protect your phone and the planet.",
            "https://example.com/biodegradable-phone-case",
            "https://images.unsplash.com/photo-1609252924198-30b8cb324d2f?w=500&q=80",
            &["Plastic Free"],
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn sample(
    title: &str,
    price: f64,
    brand: &str,
    materials: &[&str],
    description: &str,
    url: &str,
    image: &str,
    badges: &[&str],
) -> Product {
    Product {
        title: title.to_string(),
        price,
        brand: brand.to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        description: description.to_string(),
        url: url.to_string(),
        image: Some(image.to_string()),
        badges: badges.iter().map(|b| b.to_string()).collect(),
        source: SAMPLE_SOURCE.to_string(),
    }
}

/// The fixed set served whenever live scraping yields nothing.
pub fn sample_products() -> &'static [Product] {
    &SAMPLE_PRODUCTS
}
