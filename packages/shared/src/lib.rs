//! Utilities shared by the Campus Entry server and client.

pub mod logger;
pub mod time;
