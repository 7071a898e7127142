use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use lensbook_backend::UpstreamClient;
use lensbook_backend::cache::{CacheConfig, ResponseCache};
use lensbook_backend::client::DEFAULT_TIMEOUT;
use lensbook_backend::directory::store::DirectoryStore;
use lensbook_backend::handlers;
use lensbook_backend::inquiries::InquiryBook;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let base_url = std::env::var("UPSTREAM_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3001".to_string());
    let timeout = std::env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    let client = UpstreamClient::new(&base_url, timeout);

    // The collection is fetched once here and held read-only; only the
    // reconciliation path ever replaces it.
    let store = DirectoryStore::load(client)
        .await
        .expect("Failed to load the photographer collection");
    let count = store.len().await;
    tracing::info!(upstream = %base_url, count, "Photographer directory ready");
    let store_data = web::Data::new(store);

    let cache_data = web::Data::new(ResponseCache::new(CacheConfig::from_env()));
    let inquiries_data = web::Data::new(InquiryBook::new());

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(store_data.clone())
            .app_data(cache_data.clone())
            .app_data(inquiries_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
