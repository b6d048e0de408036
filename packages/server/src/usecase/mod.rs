//! UseCase 層
//!
//! - 接続のライフサイクル: `OpenConnectionUseCase` / `RegisterDepartmentHeadUseCase` /
//!   `CloseConnectionUseCase`
//! - 通知リレー: `UpdateGuestStatusUseCase`
//! - ゲスト記録: 登録・取得・一覧・未読管理
//! - デバッグ: `GetRegistryStateUseCase`

pub mod close_connection;
pub mod error;
pub mod get_guest;
pub mod get_registry_state;
pub mod list_department_guests;
pub mod list_departments;
pub mod open_connection;
pub mod register_department_head;
pub mod register_guest;
pub mod unread_guests;
pub mod update_guest_status;

pub use close_connection::CloseConnectionUseCase;
pub use error::{GetGuestError, RegisterGuestError, UpdateGuestStatusError};
pub use get_guest::GetGuestUseCase;
pub use get_registry_state::GetRegistryStateUseCase;
pub use list_department_guests::ListDepartmentGuestsUseCase;
pub use list_departments::ListDepartmentsUseCase;
pub use open_connection::OpenConnectionUseCase;
pub use register_department_head::RegisterDepartmentHeadUseCase;
pub use register_guest::{RegisterGuestInput, RegisterGuestUseCase};
pub use unread_guests::{CountUnreadGuestsUseCase, MarkAllGuestsReadUseCase};
pub use update_guest_status::{GuestStatusChange, NotificationDelivery, UpdateGuestStatusUseCase};
