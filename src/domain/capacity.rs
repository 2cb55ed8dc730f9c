// ==========================================
// 工单排产系统 - 部门产能快照
// ==========================================
// 派生数据: 每次调用重新计算, 不缓存不落库
// ==========================================

use crate::domain::department::{CapacityProfile, Department};
use serde::{Deserialize, Serialize};

// ==========================================
// CapacityData - 部门产能快照
// ==========================================
// 不变式:
// - used_capacity = min(负荷, total_capacity)
// - utilization_percentage = 负荷 / total_capacity * 100 (可超过 100)
// - backlog_hours = max(0, 负荷 - available_hours)
// - backlog_days = backlog_hours / 日产能
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityData {
    pub department_id: String,
    pub department_name: String,
    pub total_capacity: f64,         // 周总产能 (小时)
    pub used_capacity: f64,          // 已占用 (封顶 total_capacity)
    pub utilization_percentage: f64, // 利用率 (%)
    pub backlog_hours: f64,          // 积压工时
    pub backlog_days: f64,           // 积压天数
}

impl CapacityData {
    /// 由部门与原始负荷派生
    pub fn derive(department: &Department, workload_hours: f64, working_days_per_week: f64) -> Self {
        Self {
            department_id: department.id.clone(),
            department_name: department.name.clone(),
            total_capacity: department.total_capacity_hours,
            used_capacity: workload_hours.min(department.total_capacity_hours),
            utilization_percentage: department.utilization_percentage(workload_hours),
            backlog_hours: department.backlog_hours(workload_hours),
            backlog_days: department.backlog_days(workload_hours, working_days_per_week),
        }
    }

    /// 是否超产能 (利用率达到阈值)
    pub fn is_over_capacity(&self, threshold_pct: f64) -> bool {
        self.utilization_percentage >= threshold_pct
    }
}
