//! Campus entry server.
//!
//! Serves the guest API and relays approval decisions to the connected
//! department head over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin campus-entry-server
//! cargo run --bin campus-entry-server -- --port 3000 --department "7=Computer Science"
//! ```

use std::sync::Arc;

use campus_entry_server::{
    app::build_app_state,
    config::{DEFAULT_UTC_OFFSET_MINUTES, ServerConfig},
    ui::Server,
};
use campus_entry_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "campus-entry-server")]
#[command(about = "Guest approval API with real-time department head notifications", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Campus time zone as minutes east of UTC (default: IST)
    #[arg(long, env = "CAMPUS_UTC_OFFSET_MINUTES", default_value_t = DEFAULT_UTC_OFFSET_MINUTES, allow_hyphen_values = true)]
    utc_offset_minutes: i32,

    /// Department as ID=NAME (repeatable)
    #[arg(short = 'd', long = "department")]
    departments: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let config = match ServerConfig::new(
        args.host,
        args.port,
        args.utc_offset_minutes,
        &args.departments,
    ) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = build_app_state(&config, Arc::new(SystemClock));
    let server = Server::new(state);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
