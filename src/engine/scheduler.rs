// ==========================================
// 工单排产系统 - 工单排产引擎
// ==========================================
// 职责: 贪心地为每个待排产工单的工序分配起止时间
// 输入: 工单列表 + 部门列表 + 当前时刻
// 输出: 每个待排产工单一条 SchedulingResult
// ==========================================
// 规则:
// 1) 仅 pending 工单参与, 其余不出现在结果中
// 2) 工单按 优先级降序 + created_at 升序 占用部门工时
// 3) 每个部门一个游标, 初始为 now, 工序结束后推进
// 4) 工期 = ceil(工时 / 日产能) 个日历天 (不识别周末与节假日)
// 5) 结束日期超出 chrono 可表示范围时返回 ScheduleOverflow
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::department::{CapacityProfile, Department};
use crate::domain::schedule::{SchedulingResult, StepSchedule};
use crate::domain::types::MissingReferencePolicy;
use crate::domain::work_order::WorkOrder;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::priority::WorkOrderSorter;
use crate::engine::reference::handle_missing;
use chrono::{Days, NaiveDateTime};
use std::collections::HashMap;
use tracing::{debug, instrument};


const SECONDS_PER_DAY: f64 = 86_400.0;

// ==========================================
// WorkOrderScheduler - 工单排产引擎
// ==========================================
pub struct WorkOrderScheduler {
    working_days_per_week: f64,
    missing_reference_policy: MissingReferencePolicy,
    sorter: WorkOrderSorter,
}

impl WorkOrderScheduler {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            working_days_per_week: config.working_days_per_week,
            missing_reference_policy: config.missing_reference_policy,
            sorter: WorkOrderSorter::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排产
    ///
    /// # 参数
    /// - `work_orders`: 全部工单 (非 pending 自动排除)
    /// - `departments`: 部门列表
    /// - `now`: 所有部门游标的起点
    ///
    /// # 返回
    /// 按排产顺序排列的结果; 同样输入与 now 结果相同
    #[instrument(skip(self, work_orders, departments), fields(
        work_orders_count = work_orders.len(),
        departments_count = departments.len()
    ))]
    pub fn schedule(
        &self,
        work_orders: &[WorkOrder],
        departments: &[Department],
        now: NaiveDateTime,
    ) -> EngineResult<Vec<SchedulingResult>> {
        let department_index: HashMap<&str, &Department> =
            departments.iter().map(|d| (d.id.as_str(), d)).collect();

        // 1. 部门游标全部初始化为 now
        let mut cursors: HashMap<&str, NaiveDateTime> =
            departments.iter().map(|d| (d.id.as_str(), now)).collect();

        // 2. 待排产工单排序
        let pending: Vec<&WorkOrder> = work_orders.iter().filter(|wo| wo.is_pending()).collect();
        let sorted = self.sorter.sort_for_scheduling(pending);

        // 3. 逐工单逐工序放置
        let mut results = Vec::with_capacity(sorted.len());
        for work_order in sorted {
            let result = self.schedule_work_order(work_order, &department_index, &mut cursors, now)?;
            results.push(result);
        }

        debug!(results_count = results.len(), "排产完成");
        Ok(results)
    }

    /// 单工单放置, 推进共享游标
    fn schedule_work_order<'a>(
        &self,
        work_order: &WorkOrder,
        department_index: &HashMap<&'a str, &'a Department>,
        cursors: &mut HashMap<&'a str, NaiveDateTime>,
        now: NaiveDateTime,
    ) -> EngineResult<SchedulingResult> {
        let mut step_schedules: Vec<StepSchedule> = Vec::new();

        for step in work_order.ordered_steps() {
            let Some((&dept_key, department)) = department_index.get_key_value(step.department_id.as_str())
            else {
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

            let hours_per_day = department.hours_per_day(self.working_days_per_week);
            if !department.has_capacity() || hours_per_day <= 0.0 {
                handle_missing(
                    self.missing_reference_policy,
                    EngineError::ZeroCapacityDepartment {
                        work_order_id: work_order.id.clone(),
                        department_id: department.id.clone(),
                    },
                )?;
                continue;
            }

            let step_start = cursors.get(dept_key).copied().unwrap_or(now);
            let days_needed = (step.estimated_hours / hours_per_day).ceil().max(0.0) as i64;
            let step_end = step_start
                .checked_add_days(Days::new(days_needed as u64))
                .ok_or_else(|| EngineError::ScheduleOverflow {
                    work_order_id: work_order.id.clone(),
                    step_id: Some(step.id.clone()),
                })?;

            debug!(
                work_order_id = %work_order.id,
                step_id = %step.id,
                department_id = %department.id,
                %step_start,
                days_needed,
                "工序已放置"
            );

            cursors.insert(dept_key, step_end);
            step_schedules.push(StepSchedule {
                step_id: step.id.clone(),
                start_date: step_start,
                end_date: step_end,
                days: days_needed,
            });
        }

        let estimated_start_date = step_schedules.first().map_or(now, |s| s.start_date);
        let estimated_completion_date = step_schedules.last().map_or(now, |s| s.end_date);
        let elapsed_seconds = (estimated_completion_date - estimated_start_date).num_seconds() as f64;
        let total_days = (elapsed_seconds / SECONDS_PER_DAY).ceil() as i64;

        Ok(SchedulingResult {
            work_order_id: work_order.id.clone(),
            estimated_start_date,
            estimated_completion_date,
            total_days,
            step_schedules,
        })
    }
}

impl Default for WorkOrderScheduler {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}
