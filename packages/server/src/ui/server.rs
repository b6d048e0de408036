//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::{
    handler::{
        add_guest, debug_registry_state, get_guest, get_unread_count, health_check,
        list_department_guests, list_departments, mark_all_read, update_guest_status,
        websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Campus entry relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state);
/// server.run("127.0.0.1".to_string(), 3000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Build the router (WebSocket + HTTP API)
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/departments", get(list_departments))
            .route("/api/guest/add", post(add_guest))
            .route("/api/guest/unreadCount", get(get_unread_count))
            .route("/api/guest/markAllRead", put(mark_all_read))
            .route("/api/guest/byDepartment/{d_id}", get(list_department_guests))
            .route("/api/guest/updateStatus/{g_id}", put(update_guest_status))
            .route("/api/guest/{g_id}", get(get_guest))
            .route("/debug/registry", get(debug_registry_state))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Campus entry server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        // Registry はプロセスと共に破棄される
        let remaining = self.state.get_registry_state_usecase.execute().await;
        for entry in &remaining {
            tracing::info!(
                "Dropping registration: department {} -> connection '{}'",
                entry.department_id,
                entry.connection_id
            );
        }
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
