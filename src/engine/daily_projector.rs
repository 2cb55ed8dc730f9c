// ==========================================
// 工单排产系统 - 日排程投影引擎
// ==========================================
// 职责: 把排产结果展开为固定窗口的逐日排程
// 输入: 排产结果 + 工单列表 + 部门列表 + 今天
// 输出: [today, today + window) 内每天一条 DailySchedule
// ==========================================
// 规则:
// 1) 每日可用工时 = Σ 部门日产能
// 2) 工序工时在其占用天数内平均分摊
// 3) 落在窗口外的分摊量直接丢弃 (不顺延, 不报错)
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::department::{CapacityProfile, Department};
use crate::domain::schedule::{DailySchedule, DailyStepEntry, SchedulingResult};
use crate::domain::types::MissingReferencePolicy;
use crate::domain::work_order::WorkOrder;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::reference::handle_missing;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

// ==========================================
// DailyScheduleProjector - 日排程投影引擎
// ==========================================
pub struct DailyScheduleProjector {
    working_days_per_week: f64,
    missing_reference_policy: MissingReferencePolicy,
}

impl DailyScheduleProjector {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            working_days_per_week: config.working_days_per_week,
            missing_reference_policy: config.missing_reference_policy,
        }
    }

    /// 投影日排程
    ///
    /// # 参数
    /// - `results`: 排产引擎输出
    /// - `work_orders`: 工单列表 (用于解析标题/工序/优先级)
    /// - `departments`: 部门列表
    /// - `today`: 窗口首日 (含)
    /// - `window_days`: 窗口天数
    ///
    /// # 返回
    /// 按日期升序的日排程
    #[instrument(skip(self, results, work_orders, departments), fields(
        results_count = results.len()
    ))]
    pub fn project(
        &self,
        results: &[SchedulingResult],
        work_orders: &[WorkOrder],
        departments: &[Department],
        today: NaiveDate,
        window_days: u32,
    ) -> EngineResult<Vec<DailySchedule>> {
        let available_hours: f64 = departments
            .iter()
            .map(|d| d.hours_per_day(self.working_days_per_week))
            .sum();

        // 1. 初始化窗口
        let mut days: BTreeMap<NaiveDate, DailySchedule> = BTreeMap::new();
        for offset in 0..i64::from(window_days) {
            let date = today + Duration::days(offset);
            days.insert(date, DailySchedule::empty(date, available_hours));
        }

        let work_order_index: HashMap<&str, &WorkOrder> =
            work_orders.iter().map(|wo| (wo.id.as_str(), wo)).collect();
        let department_index: HashMap<&str, &Department> =
            departments.iter().map(|d| (d.id.as_str(), d)).collect();

        // 2. 分摊工序工时
        let mut dropped_entries = 0usize;
        for result in results {
            let Some(work_order) = work_order_index.get(result.work_order_id.as_str()) else {
                handle_missing(
                    self.missing_reference_policy,
                    EngineError::UnknownWorkOrder {
                        work_order_id: result.work_order_id.clone(),
                    },
                )?;
                continue;
            };

            for step_schedule in &result.step_schedules {
                let Some(step) = work_order.find_step(&step_schedule.step_id) else {
                    handle_missing(
                        self.missing_reference_policy,
                        EngineError::UnknownStep {
                            work_order_id: work_order.id.clone(),
                            step_id: step_schedule.step_id.clone(),
                        },
                    )?;
                    continue;
                };
                let Some(department) = department_index.get(step.department_id.as_str()) else {
                    handle_missing(
                        self.missing_reference_policy,
                        EngineError::UnknownDepartment {
                            work_order_id: work_order.id.clone(),
                            step_id: Some(step.id.clone()),
                            department_id: step.department_id.clone(),
                        },
                    )?;
                    continue;
                };

                if step_schedule.days <= 0 {
                    continue;
                }
                let hours_per_day = step.estimated_hours / step_schedule.days as f64;
                let start_day = step_schedule.start_date.date();

                // 只遍历与窗口相交的天, 其余计入丢弃
                let first = (today - start_day).num_days().clamp(0, step_schedule.days);
                let last = (today - start_day)
                    .num_days()
                    .saturating_add(i64::from(window_days))
                    .clamp(first, step_schedule.days);
                dropped_entries += (step_schedule.days - (last - first)) as usize;

                for offset in first..last {
                    let date = start_day + Duration::days(offset);
                    if let Some(day) = days.get_mut(&date) {
                        day.record(DailyStepEntry {
                            work_order_id: work_order.id.clone(),
                            work_order_title: work_order.title.clone(),
                            step_name: step.name.clone(),
                            department_name: department.name.clone(),
                            hours: hours_per_day,
                            priority: work_order.priority,
                        });
                    }
                }
            }
        }

        if dropped_entries > 0 {
            debug!(dropped_entries, "窗口外分摊已丢弃");
        }

        Ok(days.into_values().collect())
    }
}

impl Default for DailyScheduleProjector {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}
