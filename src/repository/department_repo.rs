// ==========================================
// 工单排产系统 - 部门数据仓储
// ==========================================
// 部门为静态参考数据, 核心计算只读
// ==========================================

use crate::domain::department::Department;
use crate::repository::error::RepositoryResult;
use std::sync::Arc;

// ==========================================
// Trait: DepartmentRepository
// ==========================================
pub trait DepartmentRepository: Send + Sync {
    /// 全部部门 (保持录入顺序)
    fn list(&self) -> RepositoryResult<Vec<Department>>;
}

// ==========================================
// InMemoryDepartmentRepository - 内存部门仓储
// ==========================================
pub struct InMemoryDepartmentRepository {
    departments: Arc<Vec<Department>>,
}

impl InMemoryDepartmentRepository {
    pub fn new(departments: Vec<Department>) -> Self {
        Self {
            departments: Arc::new(departments),
        }
    }
}

impl DepartmentRepository for InMemoryDepartmentRepository {
    fn list(&self) -> RepositoryResult<Vec<Department>> {
        Ok(self.departments.as_ref().clone())
    }
}
