pub mod product;
pub mod sample_products;

pub use product::*;
pub use sample_products::*;
