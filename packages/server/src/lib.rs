//! Campus entry server library.
//!
//! Guest-visit records plus a real-time relay that tells a department head
//! when one of the department's guests is approved or rejected.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod app;
pub mod config;
