//! Domain entities: guest visit records and departments.

use super::{
    error::{GuestStatusError, ValueObjectError},
    value_object::{
        ConnectionId, ContactNumber, DepartmentId, EnterTime, GuestId, GuestName, Timestamp,
        VisitDate, VisitPurpose,
    },
};

/// Approval state of a guest visit.
///
/// `Pending` is the only non-terminal state; `Approved` and `Rejected` are
/// reached from `Pending` exactly once and never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestStatus {
    Pending,
    Approved,
    Rejected,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Pending => "Pending",
            GuestStatus::Approved => "Approved",
            GuestStatus::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuestStatus::Pending)
    }

    /// Apply an approval decision, returning the resulting status.
    pub fn decide(self, decision: GuestDecision) -> Result<GuestStatus, GuestStatusError> {
        if self.is_terminal() {
            return Err(GuestStatusError::AlreadyDecided(self));
        }
        Ok(decision.into())
    }
}

/// The two values accepted by the status-update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestDecision {
    Approved,
    Rejected,
}

impl TryFrom<&str> for GuestDecision {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Approved" => Ok(GuestDecision::Approved),
            "Rejected" => Ok(GuestDecision::Rejected),
            other => Err(ValueObjectError::InvalidStatus(other.to_string())),
        }
    }
}

impl From<GuestDecision> for GuestStatus {
    fn from(decision: GuestDecision) -> Self {
        match decision {
            GuestDecision::Approved => GuestStatus::Approved,
            GuestDecision::Rejected => GuestStatus::Rejected,
        }
    }
}

/// Validated fields of a guest registration, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub department_id: DepartmentId,
    pub name: GuestName,
    pub contact: ContactNumber,
    pub purpose: VisitPurpose,
    pub visit_date: VisitDate,
    pub enter_time: EnterTime,
    pub out_time: Option<String>,
}

/// A guest visit record, the authoritative state the relay hints about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub department_id: DepartmentId,
    pub name: GuestName,
    pub contact: ContactNumber,
    pub purpose: VisitPurpose,
    pub visit_date: VisitDate,
    pub enter_time: EnterTime,
    pub out_time: Option<String>,
    pub status: GuestStatus,
    /// Seen by the university admin. Only the bulk "mark all read" sets it.
    pub is_read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Guest {
    /// Create a Pending, unread guest from a validated registration.
    pub fn register(id: GuestId, new_guest: NewGuest, now: Timestamp) -> Self {
        Self {
            id,
            department_id: new_guest.department_id,
            name: new_guest.name,
            contact: new_guest.contact,
            purpose: new_guest.purpose,
            visit_date: new_guest.visit_date,
            enter_time: new_guest.enter_time,
            out_time: new_guest.out_time,
            status: GuestStatus::Pending,
            is_read: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_unread_pending(&self) -> bool {
        self.status == GuestStatus::Pending && !self.is_read
    }

    /// Notification describing this guest's current status.
    pub fn status_notification(&self) -> GuestStatusNotification {
        GuestStatusNotification {
            guest_name: self.name.as_str().to_string(),
            status: self.status,
            decided_at: self.updated_at,
        }
    }
}

/// A department, as listed for the department-head dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl Department {
    pub fn new(id: DepartmentId, name: String) -> Self {
        Self { id, name }
    }
}

/// Payload pushed to a department head when a guest is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestStatusNotification {
    pub guest_name: String,
    pub status: GuestStatus,
    pub decided_at: Timestamp,
}

/// One row of the connection registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub department_id: DepartmentId,
    pub connection_id: ConnectionId,
}
