// ==========================================
// 工单排产系统 - 排期优化建议
// ==========================================
// 优化建议仅为预览, 由调用方显式提交
// ==========================================

use crate::domain::types::{ChangeImpact, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ChangeReason - 调整原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeReason {
    Unscheduled,     // 尚未排期
    UrgentAdvance,   // 紧急单提前
    DueDateConflict, // 交期冲突
    WorkloadBalance, // 负荷均衡
    MinorAdjustment, // 微调
}

impl ChangeReason {
    /// 面向用户的说明文案
    pub fn message(&self) -> &'static str {
        match self {
            ChangeReason::Unscheduled => "No scheduled date - assigning optimal slot",
            ChangeReason::UrgentAdvance => {
                "Urgent priority - moving earlier to meet critical deadline"
            }
            ChangeReason::DueDateConflict => "Due date conflict - rescheduling to meet deadline",
            ChangeReason::WorkloadBalance => {
                "Better resource utilization - moving to balance workload"
            }
            ChangeReason::MinorAdjustment => "Minor adjustment for optimal scheduling",
        }
    }

    /// 默认影响等级
    pub fn impact(&self) -> ChangeImpact {
        match self {
            ChangeReason::UrgentAdvance | ChangeReason::DueDateConflict => ChangeImpact::High,
            ChangeReason::Unscheduled | ChangeReason::WorkloadBalance => ChangeImpact::Medium,
            ChangeReason::MinorAdjustment => ChangeImpact::Low,
        }
    }
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

// ==========================================
// OptimizedSchedule - 单工单排期建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedSchedule {
    pub work_order_id: String,
    pub work_order_number: String,
    pub title: String,
    pub priority: Priority,
    pub current_scheduled_date: Option<NaiveDate>,
    pub optimized_scheduled_date: NaiveDate,
    pub days_difference: Option<i64>, // optimized - current, 未排期为 None
    pub reason: ChangeReason,
    pub impact: ChangeImpact,
}

impl OptimizedSchedule {
    pub fn reason_message(&self) -> &'static str {
        self.reason.message()
    }
}

// ==========================================
// OptimizationSummary - 按影响等级汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl OptimizationSummary {
    pub fn from_changes(changes: &[OptimizedSchedule]) -> Self {
        let mut summary = Self {
            total: changes.len(),
            ..Default::default()
        };
        for change in changes {
            match change.impact {
                ChangeImpact::High => summary.high += 1,
                ChangeImpact::Medium => summary.medium += 1,
                ChangeImpact::Low => summary.low += 1,
            }
        }
        summary
    }
}
