// ==========================================
// 工单排产系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽存储细节
// 约束: 引擎与 API 只依赖 trait, 便于替换持久化实现
// ==========================================

pub mod department_repo;
pub mod error;
pub mod work_order_repo;

// 重导出核心仓储
pub use department_repo::{DepartmentRepository, InMemoryDepartmentRepository};
pub use error::{RepositoryError, RepositoryResult};
pub use work_order_repo::{InMemoryWorkOrderRepository, WorkOrderRepository};
