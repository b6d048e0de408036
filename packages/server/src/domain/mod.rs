//! Domain layer: guest records, the connection registry contract and the
//! notification pusher contract.

pub mod connection_registry;
pub mod entity;
pub mod error;
pub mod notification_pusher;
pub mod repository;
pub mod value_object;

pub use connection_registry::ConnectionRegistry;
pub use entity::{
    Department, Guest, GuestDecision, GuestStatus, GuestStatusNotification, NewGuest,
    RegistryEntry,
};
pub use error::{GuestStatusError, PushError, RepositoryError, ValueObjectError};
pub use notification_pusher::{NotificationPusher, PusherChannel};
pub use repository::{DepartmentRepository, GuestRepository};
pub use value_object::{
    ConnectionId, ConnectionIdFactory, ContactNumber, DepartmentId, EnterTime, GuestId, GuestName,
    Timestamp, VisitDate, VisitPurpose,
};
