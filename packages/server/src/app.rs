//! Composition root: wires repositories, the registry and the pusher into
//! use cases.

use std::sync::Arc;

use campus_entry_shared::time::Clock;

use crate::{
    config::ServerConfig,
    infrastructure::{
        message_pusher::WebSocketNotificationPusher,
        registry::InMemoryConnectionRegistry,
        repository::{InMemoryDepartmentRepository, InMemoryGuestRepository},
    },
    ui::state::AppState,
    usecase::{
        CloseConnectionUseCase, CountUnreadGuestsUseCase, GetGuestUseCase,
        GetRegistryStateUseCase, ListDepartmentGuestsUseCase, ListDepartmentsUseCase,
        MarkAllGuestsReadUseCase, OpenConnectionUseCase, RegisterDepartmentHeadUseCase,
        RegisterGuestUseCase, UpdateGuestStatusUseCase,
    },
};

/// Build the shared state
///
/// Dependencies are created in order:
/// 1. Repositories
/// 2. Connection Registry
/// 3. NotificationPusher
/// 4. UseCases
pub fn build_app_state(config: &ServerConfig, clock: Arc<dyn Clock>) -> Arc<AppState> {
    // 1. Repositories (in-memory database)
    let guest_repository = Arc::new(InMemoryGuestRepository::new());
    let department_repository =
        Arc::new(InMemoryDepartmentRepository::new(config.departments.clone()));
    tracing::info!("{} department(s) configured", config.departments.len());

    // 2. Connection Registry (department -> department head connection)
    let registry = Arc::new(InMemoryConnectionRegistry::new());

    // 3. NotificationPusher (WebSocket implementation)
    let pusher = Arc::new(WebSocketNotificationPusher::new(config.utc_offset));

    // 4. UseCases
    Arc::new(AppState {
        open_connection_usecase: Arc::new(OpenConnectionUseCase::new(pusher.clone())),
        register_department_head_usecase: Arc::new(RegisterDepartmentHeadUseCase::new(
            registry.clone(),
        )),
        close_connection_usecase: Arc::new(CloseConnectionUseCase::new(
            registry.clone(),
            pusher.clone(),
        )),
        update_guest_status_usecase: Arc::new(UpdateGuestStatusUseCase::new(
            guest_repository.clone(),
            registry.clone(),
            pusher,
            clock.clone(),
        )),
        register_guest_usecase: Arc::new(RegisterGuestUseCase::new(
            guest_repository.clone(),
            clock,
            config.utc_offset,
        )),
        get_guest_usecase: Arc::new(GetGuestUseCase::new(guest_repository.clone())),
        list_department_guests_usecase: Arc::new(ListDepartmentGuestsUseCase::new(
            guest_repository.clone(),
        )),
        count_unread_guests_usecase: Arc::new(CountUnreadGuestsUseCase::new(
            guest_repository.clone(),
        )),
        mark_all_guests_read_usecase: Arc::new(MarkAllGuestsReadUseCase::new(guest_repository)),
        list_departments_usecase: Arc::new(ListDepartmentsUseCase::new(department_repository)),
        get_registry_state_usecase: Arc::new(GetRegistryStateUseCase::new(registry)),
        utc_offset: config.utc_offset,
    })
}
