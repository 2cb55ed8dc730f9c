// ==========================================
// 工单排产系统 - 工单优先级排序
// ==========================================
// 职责: 决定工单占用部门工时的先后顺序
// 输入: 待排产工单列表
// 输出: 排序后的工单列表 (稳定排序)
// ==========================================

use crate::domain::work_order::WorkOrder;
use chrono::NaiveDate;
use std::cmp::Ordering;


// ==========================================
// WorkOrderSorter - 工单排序器
// ==========================================
pub struct WorkOrderSorter {
    // 无状态引擎,不需要注入依赖
}

impl WorkOrderSorter {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排产顺序
    ///
    /// 排序键:
    /// 1) 优先级降序 (urgent > high > medium > low)
    /// 2) created_at 升序 (先建先排)
    pub fn sort_for_scheduling<'a>(&self, mut work_orders: Vec<&'a WorkOrder>) -> Vec<&'a WorkOrder> {
        work_orders.sort_by(|a, b| self.compare_for_scheduling(a, b));
        work_orders
    }

    /// 优化器顺序
    ///
    /// 排序键:
    /// 1) 优先级降序
    /// 2) due_date 升序, 无交期排在有交期之后
    pub fn sort_for_optimization<'a>(
        &self,
        mut work_orders: Vec<&'a WorkOrder>,
    ) -> Vec<&'a WorkOrder> {
        work_orders.sort_by(|a, b| self.compare_for_optimization(a, b));
        work_orders
    }

    // ==========================================
    // 比较方法
    // ==========================================

    /// Ordering::Less 表示 a 先于 b
    pub fn compare_for_scheduling(&self, a: &WorkOrder, b: &WorkOrder) -> Ordering {
        match self.compare_priority(a, b) {
            Ordering::Equal => a.created_at.cmp(&b.created_at),
            other => other,
        }
    }

    /// Ordering::Less 表示 a 先于 b
    pub fn compare_for_optimization(&self, a: &WorkOrder, b: &WorkOrder) -> Ordering {
        match self.compare_priority(a, b) {
            Ordering::Equal => {
                let due_a = a.due_date.unwrap_or(NaiveDate::MAX);
                let due_b = b.due_date.unwrap_or(NaiveDate::MAX);
                due_a.cmp(&due_b)
            }
            other => other,
        }
    }

    /// 优先级降序
    fn compare_priority(&self, a: &WorkOrder, b: &WorkOrder) -> Ordering {
        b.priority.weight().cmp(&a.priority.weight())
    }
}

impl Default for WorkOrderSorter {
    fn default() -> Self {
        Self::new()
    }
}
