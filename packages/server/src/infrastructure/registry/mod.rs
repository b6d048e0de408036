//! Connection Registry の実装
//!
//! - `inmemory`: プロセス内 HashMap による実装

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
