//! Shared application state.

use std::sync::Arc;

use chrono::FixedOffset;

use crate::usecase::{
    CloseConnectionUseCase, CountUnreadGuestsUseCase, GetGuestUseCase, GetRegistryStateUseCase,
    ListDepartmentGuestsUseCase, ListDepartmentsUseCase, MarkAllGuestsReadUseCase,
    OpenConnectionUseCase, RegisterDepartmentHeadUseCase, RegisterGuestUseCase,
    UpdateGuestStatusUseCase,
};

/// ハンドラから参照するユースケース一式
pub struct AppState {
    /// 接続受付（送信チャンネルの登録）
    pub open_connection_usecase: Arc<OpenConnectionUseCase>,
    /// `register-hod` の処理
    pub register_department_head_usecase: Arc<RegisterDepartmentHeadUseCase>,
    /// 切断時の後始末
    pub close_connection_usecase: Arc<CloseConnectionUseCase>,
    /// ステータス更新と学科長への通知
    pub update_guest_status_usecase: Arc<UpdateGuestStatusUseCase>,
    pub register_guest_usecase: Arc<RegisterGuestUseCase>,
    pub get_guest_usecase: Arc<GetGuestUseCase>,
    pub list_department_guests_usecase: Arc<ListDepartmentGuestsUseCase>,
    pub count_unread_guests_usecase: Arc<CountUnreadGuestsUseCase>,
    pub mark_all_guests_read_usecase: Arc<MarkAllGuestsReadUseCase>,
    pub list_departments_usecase: Arc<ListDepartmentsUseCase>,
    /// デバッグ用
    pub get_registry_state_usecase: Arc<GetRegistryStateUseCase>,
    /// API レスポンスの日時を表示するオフセット
    pub utc_offset: FixedOffset,
}
