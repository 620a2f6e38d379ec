pub mod product_route;
