//! Department-head notification watcher.
//!
//! Connects to the campus entry server, registers as the head of one
//! department and prints every guest decision relayed for it.

mod domain;
mod error;
mod formatter;
mod runner;
mod session;

pub use error::ClientError;
pub use runner::run_client;
