// ==========================================
// 工单排产系统 - 工单数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 说明: 当前为内存实现, trait 保留替换为持久化实现的接缝
// ==========================================

use crate::domain::work_order::{WorkOrder, WorkOrderPatch};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// Trait: WorkOrderRepository
// ==========================================
pub trait WorkOrderRepository: Send + Sync {
    /// 全部工单 (保持录入顺序)
    fn list(&self) -> RepositoryResult<Vec<WorkOrder>>;

    /// 按ID查询
    ///
    /// # 返回
    /// - Ok(Some): 找到
    /// - Ok(None): 未找到
    fn find_by_id(&self, id: &str) -> RepositoryResult<Option<WorkOrder>>;

    /// 新增工单, ID 重复返回 UniqueConstraintViolation
    fn insert(&self, work_order: WorkOrder) -> RepositoryResult<()>;

    /// 部分更新 (整体替换), 未找到返回 NotFound
    fn update(&self, id: &str, patch: &WorkOrderPatch) -> RepositoryResult<WorkOrder>;
}

// ==========================================
// InMemoryWorkOrderRepository - 内存工单仓储
// ==========================================
pub struct InMemoryWorkOrderRepository {
    orders: Arc<Mutex<Vec<WorkOrder>>>,
}

impl InMemoryWorkOrderRepository {
    pub fn new() -> Self {
        Self::with_work_orders(Vec::new())
    }

    pub fn with_work_orders(work_orders: Vec<WorkOrder>) -> Self {
        Self {
            orders: Arc::new(Mutex::new(work_orders)),
        }
    }

    /// 从共享存储创建仓储实例
    pub fn from_shared(orders: Arc<Mutex<Vec<WorkOrder>>>) -> Self {
        Self { orders }
    }

    fn get_store(&self) -> RepositoryResult<MutexGuard<'_, Vec<WorkOrder>>> {
        self.orders
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl Default for InMemoryWorkOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkOrderRepository for InMemoryWorkOrderRepository {
    fn list(&self) -> RepositoryResult<Vec<WorkOrder>> {
        Ok(self.get_store()?.clone())
    }

    fn find_by_id(&self, id: &str) -> RepositoryResult<Option<WorkOrder>> {
        Ok(self.get_store()?.iter().find(|wo| wo.id == id).cloned())
    }

    fn insert(&self, work_order: WorkOrder) -> RepositoryResult<()> {
        let mut store = self.get_store()?;
        if store.iter().any(|wo| wo.id == work_order.id) {
            return Err(RepositoryError::UniqueConstraintViolation(format!(
                "work_order.id={}",
                work_order.id
            )));
        }
        store.push(work_order);
        Ok(())
    }

    fn update(&self, id: &str, patch: &WorkOrderPatch) -> RepositoryResult<WorkOrder> {
        let mut store = self.get_store()?;
        let slot = store
            .iter_mut()
            .find(|wo| wo.id == id)
            .ok_or_else(|| RepositoryError::work_order_not_found(id))?;

        // read-modify-write: 先在副本上合并, 再整体替换
        let mut updated = slot.clone();
        patch.apply_to(&mut updated);
        *slot = updated.clone();
        Ok(updated)
    }
}
