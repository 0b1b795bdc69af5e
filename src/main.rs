use actix_web::HttpServer;
use merchant_api::create_base_app;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Structured logging; control verbosity with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("merchant-api listening on http://{bind_addr}");

    HttpServer::new(create_base_app).bind(&bind_addr)?.run().await
}
