// ==========================================
// 工单排产系统 - 排产结果与日排程
// ==========================================
// 派生数据: 每次调用从零重算, 调用方视为当次快照
// ==========================================

use crate::domain::types::{DayLoadLevel, Priority};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// StepSchedule - 工序排期
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSchedule {
    pub step_id: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime, // 不含 (半开区间)
    pub days: i64,               // 占用日历天数
}

// ==========================================
// SchedulingResult - 工单排产结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    pub work_order_id: String,
    pub estimated_start_date: NaiveDateTime,
    pub estimated_completion_date: NaiveDateTime,
    pub total_days: i64,
    pub step_schedules: Vec<StepSchedule>,
}

// ==========================================
// DailyStepEntry - 日排程中的工序条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStepEntry {
    pub work_order_id: String,
    pub work_order_title: String,
    pub step_name: String,
    pub department_name: String,
    pub hours: f64,
    pub priority: Priority,
}

// ==========================================
// DailySchedule - 日排程
// ==========================================
// 不变式: variance = available_hours - scheduled_hours (每次累加后重算)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub date: NaiveDate, // 序列化为 YYYY-MM-DD
    pub scheduled_hours: f64,
    pub available_hours: f64,
    pub variance: f64,
    pub work_order_steps: Vec<DailyStepEntry>,
}

impl DailySchedule {
    pub fn empty(date: NaiveDate, available_hours: f64) -> Self {
        Self {
            date,
            scheduled_hours: 0.0,
            available_hours,
            variance: available_hours,
            work_order_steps: Vec::new(),
        }
    }

    /// 记入一条工序工时
    pub fn record(&mut self, entry: DailyStepEntry) {
        self.scheduled_hours += entry.hours;
        self.variance = self.available_hours - self.scheduled_hours;
        self.work_order_steps.push(entry);
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// 负荷等级
    ///
    /// # 参数
    /// - `high_utilization_ratio`: 余量低于 scheduled * ratio 视为高负荷
    pub fn load_level(&self, high_utilization_ratio: f64) -> DayLoadLevel {
        if self.scheduled_hours == 0.0 {
            DayLoadLevel::Idle
        } else if self.variance < 0.0 {
            DayLoadLevel::Over
        } else if self.variance < self.scheduled_hours * high_utilization_ratio {
            DayLoadLevel::High
        } else {
            DayLoadLevel::Normal
        }
    }
}
