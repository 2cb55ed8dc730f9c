// ==========================================
// 工单排产系统 - 部门领域模型
// ==========================================
// 部门 = 产能池 (小时/周)
// 红线: 核心计算不回写部门记录
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Department - 部门
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,                 // 部门ID
    pub name: String,               // 部门名称
    pub total_capacity_hours: f64,  // 周总产能 (小时)
    pub available_hours: f64,       // 当前可用工时 (小时)
}

impl Department {
    pub fn new(id: &str, name: &str, total_capacity_hours: f64, available_hours: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            total_capacity_hours,
            available_hours,
        }
    }
}

// ==========================================
// Trait: CapacityProfile
// ==========================================
// 用途: 产能汇总、排产、日历投影共用的产能换算
pub trait CapacityProfile {
    /// 日产能 = 周总产能 / 每周工作日
    fn hours_per_day(&self, working_days_per_week: f64) -> f64;

    /// 是否具备可换算的正产能
    fn has_capacity(&self) -> bool;

    /// 利用率 (%)，可超过 100；零产能时为 0
    fn utilization_percentage(&self, workload_hours: f64) -> f64;

    /// 积压工时 = max(0, 负荷 - 可用工时)
    fn backlog_hours(&self, workload_hours: f64) -> f64;

    /// 积压天数 = 积压工时 / 日产能；零产能时为 0
    fn backlog_days(&self, workload_hours: f64, working_days_per_week: f64) -> f64;
}

impl CapacityProfile for Department {
    fn hours_per_day(&self, working_days_per_week: f64) -> f64 {
        if working_days_per_week <= 0.0 {
            return 0.0;
        }
        self.total_capacity_hours / working_days_per_week
    }

    fn has_capacity(&self) -> bool {
        self.total_capacity_hours.is_finite() && self.total_capacity_hours > 0.0
    }

    fn utilization_percentage(&self, workload_hours: f64) -> f64 {
        if !self.has_capacity() {
            return 0.0;
        }
        workload_hours / self.total_capacity_hours * 100.0
    }

    fn backlog_hours(&self, workload_hours: f64) -> f64 {
        (workload_hours - self.available_hours).max(0.0)
    }

    fn backlog_days(&self, workload_hours: f64, working_days_per_week: f64) -> f64 {
        let per_day = self.hours_per_day(working_days_per_week);
        if per_day <= 0.0 {
            return 0.0;
        }
        self.backlog_hours(workload_hours) / per_day
    }
}
