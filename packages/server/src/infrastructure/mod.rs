//! Infrastructure layer: in-memory stores, the WebSocket pusher and DTOs.

pub mod dto;
pub mod message_pusher;
pub mod registry;
pub mod repository;
