//! Request handlers.

mod guest;
mod http;
mod websocket;

pub use guest::{
    add_guest, get_guest, get_unread_count, list_department_guests, mark_all_read,
    update_guest_status,
};
pub use http::{debug_registry_state, health_check, list_departments};
pub use websocket::websocket_handler;
