//! Binary entry point: build the route table and serve it on port 8080.

use env_logger::Env;
use log::info;

use nairobi_api::routes;
use nairobi_api::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Startup lines should be visible without RUST_LOG set
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let server = HttpServer::new(ServerConfig::default(), routes::router());

    info!("Server starting...");
    info!("Visit: http://localhost:8080");
    info!("API:   http://localhost:8080/api");
    info!("About: http://localhost:8080/about");
    info!("Time:  http://localhost:8080/time");

    server.start().await?;

    Ok(())
}
