use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::product_route::{self, PRODUCTS_PATH},
    services::HttpFetcher,
};

pub fn run(listener: TcpListener, fetcher: HttpFetcher) -> Result<Server, std::io::Error> {
    let fetcher = web::Data::new(fetcher);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .route(
                PRODUCTS_PATH,
                web::get().to(product_route::get_products::<HttpFetcher>),
            )
            .app_data(fetcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
