//! UseCase: Connection Registry のスナップショット（デバッグ用）

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, RegistryEntry};

pub struct GetRegistryStateUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl GetRegistryStateUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self) -> Vec<RegistryEntry> {
        self.registry.entries().await
    }
}
