//! Conversion logic between DTOs and domain entities.

use chrono::FixedOffset;

use campus_entry_shared::time::{timestamp_to_locale_date, timestamp_to_rfc3339};

use crate::domain::{
    DepartmentId, ValueObjectError,
    entity::{Department, Guest, GuestStatusNotification, RegistryEntry},
};
use crate::infrastructure::dto::{http, websocket};

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<websocket::RawDepartmentId> for DepartmentId {
    type Error = ValueObjectError;

    fn try_from(raw: websocket::RawDepartmentId) -> Result<Self, Self::Error> {
        match raw {
            websocket::RawDepartmentId::Number(value) => DepartmentId::try_from(value),
            websocket::RawDepartmentId::Text(value) => DepartmentId::try_from(value.as_str()),
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl http::GuestDto {
    /// Render a guest with its timestamps in the campus offset
    pub fn from_entity(guest: &Guest, offset: FixedOffset) -> Self {
        Self {
            g_id: guest.id.value(),
            d_id: guest.department_id.value(),
            guest_name: guest.name.as_str().to_string(),
            contact: guest.contact.as_str().to_string(),
            visit_purpose: guest.purpose.as_str().to_string(),
            visit_date: guest.visit_date.value().format("%Y-%m-%d").to_string(),
            enter_time: guest.enter_time.as_str().to_string(),
            out_time: guest.out_time.clone(),
            status: guest.status.as_str().to_string(),
            is_read: guest.is_read,
            created_at: timestamp_to_rfc3339(guest.created_at.value(), offset),
            updated_at: timestamp_to_rfc3339(guest.updated_at.value(), offset),
        }
    }
}

impl From<Department> for http::DepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            dept_id: department.id.value(),
            dept_name: department.name,
        }
    }
}

impl From<RegistryEntry> for http::RegistryEntryDto {
    fn from(entry: RegistryEntry) -> Self {
        Self {
            department_id: entry.department_id.value(),
            connection_id: entry.connection_id.into_string(),
        }
    }
}

impl websocket::GuestStatusUpdateMessage {
    /// Render the decision date as a locale date in the campus offset
    pub fn from_notification(notification: &GuestStatusNotification, offset: FixedOffset) -> Self {
        Self {
            r#type: websocket::MessageType::GuestStatusUpdate,
            guest_name: notification.guest_name.clone(),
            status: notification.status.as_str().to_string(),
            date: timestamp_to_locale_date(notification.decided_at.value(), offset),
        }
    }
}
