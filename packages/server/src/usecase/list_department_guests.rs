//! UseCase: 学科ごとのゲスト一覧（学科長ダッシュボード用、新しい順）

use std::sync::Arc;

use crate::domain::{DepartmentId, Guest, GuestRepository};

pub struct ListDepartmentGuestsUseCase {
    repository: Arc<dyn GuestRepository>,
}

impl ListDepartmentGuestsUseCase {
    pub fn new(repository: Arc<dyn GuestRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, department_id: DepartmentId) -> Vec<Guest> {
        self.repository.list_by_department(department_id).await
    }
}
