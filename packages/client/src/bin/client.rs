//! Department-head notification watcher.
//!
//! Registers as the head of one department and prints guest approvals and
//! rejections as they happen. Reconnects (by default max 5 consecutive
//! attempts, 5 second interval; `--max-attempts 0` never gives up) and
//! registers again after every drop.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin campus-entry-client -- --department-id 7
//! cargo run --bin campus-entry-client -- -d 7 -u ws://127.0.0.1:3000/ws
//! cargo run --bin campus-entry-client -- -d 7 --max-attempts 0
//! ```

use clap::Parser;

use campus_entry_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "campus-entry-client")]
#[command(about = "Watch guest decisions for one department", long_about = None)]
struct Args {
    /// Department to register as head of
    #[arg(short = 'd', long)]
    department_id: u32,

    /// WebSocket server URL
    #[arg(short = 'u', long, env = "CAMPUS_ENTRY_URL", default_value = "ws://127.0.0.1:3000/ws")]
    url: String,

    /// Consecutive reconnect attempts before giving up (0 = unlimited)
    #[arg(short = 'm', long, default_value_t = 5)]
    max_attempts: u32,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) =
        campus_entry_client::run_client(args.url, args.department_id, args.max_attempts).await
    {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
