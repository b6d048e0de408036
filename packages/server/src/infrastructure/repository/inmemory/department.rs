//! InMemory Department Repository 実装
//!
//! 学科一覧は起動時の設定から与えられ、実行中は変化しない。

use async_trait::async_trait;

use crate::domain::{Department, DepartmentRepository};

pub struct InMemoryDepartmentRepository {
    departments: Vec<Department>,
}

impl InMemoryDepartmentRepository {
    pub fn new(mut departments: Vec<Department>) -> Self {
        departments.sort_by_key(|department| department.id);
        departments.dedup_by_key(|department| department.id);
        Self { departments }
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn list_departments(&self) -> Vec<Department> {
        self.departments.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DepartmentId;

    #[tokio::test]
    async fn test_list_departments_sorted_and_deduplicated() {
        // テスト項目: 学科一覧は ID 順で、重複 ID は最初のものだけ残る
        // given (前提条件):
        let departments = vec![
            Department::new(DepartmentId::new(2).unwrap(), "Physics".to_string()),
            Department::new(DepartmentId::new(1).unwrap(), "Computer Science".to_string()),
            Department::new(DepartmentId::new(2).unwrap(), "Duplicate".to_string()),
        ];
        let repo = InMemoryDepartmentRepository::new(departments);

        // when (操作):
        let result = repo.list_departments().await;

        // then (期待する結果):
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Computer Science");
        assert_eq!(result[1].name, "Physics");
    }
}
