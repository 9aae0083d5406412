//! Ludo World room and turn server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin ludo-server -- --port 8000
//! ```

use clap::Parser;
use ludo_server::ServerConfig;
use ludo_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = ludo_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
