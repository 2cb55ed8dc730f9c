// ==========================================
// 工单排产系统 - 驾驶舱 API
// ==========================================
// 职责: 驾驶舱统计卡片、月度日历
// 架构: API 层 → SchedulingApi (产能汇总 / 日排程投影)
// ==========================================

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::scheduling_api::SchedulingApi;
use crate::domain::schedule::DailySchedule;
use crate::domain::types::{DayLoadLevel, WorkOrderStatus};
use crate::domain::work_order::WorkOrderFilter;

// ==========================================
// DashboardStats - 驾驶舱统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub on_hold: usize,
    pub total_backlog_days: f64,
    pub over_capacity_departments: usize,
}

// ==========================================
// CalendarDay - 日历单元格
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    #[serde(flatten)]
    pub schedule: DailySchedule,
    pub load_level: DayLoadLevel,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 内部委托给 SchedulingApi, 自身不访问仓储
pub struct DashboardApi {
    scheduling_api: Arc<SchedulingApi>,
}

impl DashboardApi {
    pub fn new(scheduling_api: Arc<SchedulingApi>) -> Self {
        Self { scheduling_api }
    }

    /// 统计卡片
    ///
    /// 工单计数、积压与超负荷部门统一基于筛选后的工单
    pub fn get_stats(&self, filter: &WorkOrderFilter) -> ApiResult<DashboardStats> {
        let config = self.scheduling_api.config()?;
        let work_orders = self.scheduling_api.list_work_orders(filter)?;
        let capacity = self.scheduling_api.get_capacity_data(filter)?;

        let mut stats = DashboardStats {
            total: work_orders.len(),
            ..Default::default()
        };
        for work_order in &work_orders {
            match work_order.status {
                WorkOrderStatus::Pending => stats.pending += 1,
                WorkOrderStatus::InProgress => stats.in_progress += 1,
                WorkOrderStatus::Completed => stats.completed += 1,
                WorkOrderStatus::OnHold => stats.on_hold += 1,
            }
        }
        stats.total_backlog_days = capacity.iter().map(|c| c.backlog_days).sum();
        stats.over_capacity_departments = capacity
            .iter()
            .filter(|c| c.is_over_capacity(config.over_capacity_threshold_pct))
            .count();

        Ok(stats)
    }

    pub fn get_calendar_month(
        &self,
        filter: &WorkOrderFilter,
        year: i32,
        month: u32,
    ) -> ApiResult<Vec<CalendarDay>> {
        self.get_calendar_month_at(filter, year, month, Local::now().naive_local())
    }

    /// 月度日历: 投影窗口中落在指定月份的日期
    ///
    /// # 参数
    /// - year / month: 目标月份 (month 为 1..=12)
    /// - now: 投影起点
    pub fn get_calendar_month_at(
        &self,
        filter: &WorkOrderFilter,
        year: i32,
        month: u32,
        now: NaiveDateTime,
    ) -> ApiResult<Vec<CalendarDay>> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ApiError::InvalidInput(format!(
                "无效月份: {}-{}",
                year, month
            )));
        }

        let config = self.scheduling_api.config()?;
        let days = self.scheduling_api.get_daily_schedules_at(filter, now)?;

        Ok(days
            .into_iter()
            .filter(|d| d.date.year() == year && d.date.month() == month)
            .map(|schedule| CalendarDay {
                load_level: schedule.load_level(config.high_utilization_ratio),
                schedule,
            })
            .collect())
    }
}
