// ==========================================
// 工单排产系统 - 部门产能汇总引擎
// ==========================================
// 职责: 按部门汇总未完成工单的工序工时
// 输入: 工单列表 + 部门列表
// 输出: 每个部门一条 CapacityData
// ==========================================
// 规则: 工序按工单状态整体计入或整体排除, 不做进度折算
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::capacity::CapacityData;
use crate::domain::department::Department;
use crate::domain::work_order::WorkOrder;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// CapacityAggregator - 产能汇总引擎
// ==========================================
pub struct CapacityAggregator {
    working_days_per_week: f64,
}

impl CapacityAggregator {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            working_days_per_week: config.working_days_per_week,
        }
    }

    /// 计算各部门产能快照 (输出顺序与部门列表一致)
    #[instrument(skip_all, fields(
        work_orders_count = work_orders.len(),
        departments_count = departments.len()
    ))]
    pub fn compute(&self, work_orders: &[WorkOrder], departments: &[Department]) -> Vec<CapacityData> {
        let workload = self.workload_by_department(work_orders);

        departments
            .iter()
            .map(|dept| {
                let hours = workload.get(dept.id.as_str()).copied().unwrap_or(0.0);
                CapacityData::derive(dept, hours, self.working_days_per_week)
            })
            .collect()
    }

    /// 未完成工单的部门原始负荷 (小时)
    pub fn workload_by_department<'a>(&self, work_orders: &'a [WorkOrder]) -> HashMap<&'a str, f64> {
        let mut workload: HashMap<&str, f64> = HashMap::new();
        for work_order in work_orders.iter().filter(|wo| wo.is_open()) {
            for step in &work_order.steps {
                *workload.entry(step.department_id.as_str()).or_insert(0.0) += step.estimated_hours;
            }
        }
        workload
    }
}

impl Default for CapacityAggregator {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}
