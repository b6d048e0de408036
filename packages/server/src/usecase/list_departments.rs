//! UseCase: 学科一覧（学科長ログイン画面の選択肢）

use std::sync::Arc;

use crate::domain::{Department, DepartmentRepository};

pub struct ListDepartmentsUseCase {
    repository: Arc<dyn DepartmentRepository>,
}

impl ListDepartmentsUseCase {
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Vec<Department> {
        self.repository.list_departments().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DepartmentId;
    use crate::infrastructure::repository::InMemoryDepartmentRepository;

    #[tokio::test]
    async fn test_list_departments_sorted_by_id() {
        // テスト項目: 設定された学科が ID 順で返る
        // given (前提条件):
        let repository = Arc::new(InMemoryDepartmentRepository::new(vec![
            Department::new(DepartmentId::new(8).unwrap(), "Physics".to_string()),
            Department::new(DepartmentId::new(7).unwrap(), "Computer Science".to_string()),
        ]));
        let usecase = ListDepartmentsUseCase::new(repository);

        // when (操作):
        let departments = usecase.execute().await;

        // then (期待する結果):
        let ids: Vec<u32> = departments.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![7, 8]);
    }
}
