//! InMemory Repository 実装

pub mod department;
pub mod guest;

pub use department::InMemoryDepartmentRepository;
pub use guest::InMemoryGuestRepository;
