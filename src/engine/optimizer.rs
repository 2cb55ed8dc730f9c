// ==========================================
// 工单排产系统 - 排期优化引擎
// ==========================================
// 职责: 为待排产工单给出建议排期日期, 与现有排期对比分类
// 输入: 工单列表 + 部门列表 + 今天
// 输出: 有变化的工单建议 (无变化不输出)
// ==========================================
// 规则:
// 1) 部门工时池共享, 初始为 available_hours, 全程消耗
// 2) 每天每部门最多分配 daily_hour_cap 小时
// 3) 跨天时工时池低于上限则补到 min(available_hours, cap)
// 4) 与排产引擎相互独立, 两者结果不要求一致
// 5) 建议日期超出 chrono 可表示范围时返回 ScheduleOverflow
// ==========================================

use crate::config::SchedulingConfig;
use crate::domain::department::Department;
use crate::domain::optimization::{ChangeReason, OptimizedSchedule};
use crate::domain::types::{MissingReferencePolicy, Priority};
use crate::domain::work_order::WorkOrder;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::priority::WorkOrderSorter;
use crate::engine::reference::handle_missing;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// ScheduleOptimizer - 排期优化引擎
// ==========================================
pub struct ScheduleOptimizer {
    daily_hour_cap: f64,
    significant_shift_days: i64,
    missing_reference_policy: MissingReferencePolicy,
    sorter: WorkOrderSorter,
}

impl ScheduleOptimizer {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            daily_hour_cap: config.optimizer_daily_hour_cap,
            significant_shift_days: config.optimizer_significant_shift_days,
            missing_reference_policy: config.missing_reference_policy,
            sorter: WorkOrderSorter::new(),
        }
    }

    /// 生成排期建议
    ///
    /// # 参数
    /// - `work_orders`: 全部工单 (仅 pending 参与)
    /// - `departments`: 部门列表
    /// - `today`: 建议日期的起点
    ///
    /// # 返回
    /// 按优化顺序排列的变更建议
    #[instrument(skip(self, work_orders, departments), fields(
        work_orders_count = work_orders.len()
    ))]
    pub fn optimize(
        &self,
        work_orders: &[WorkOrder],
        departments: &[Department],
        today: NaiveDate,
    ) -> EngineResult<Vec<OptimizedSchedule>> {
        // 部门工时池 (按部门 id)
        let mut pools: HashMap<&str, f64> = departments
            .iter()
            .map(|d| (d.id.as_str(), d.available_hours))
            .collect();

        let pending: Vec<&WorkOrder> = work_orders.iter().filter(|wo| wo.is_pending()).collect();
        let sorted = self.sorter.sort_for_optimization(pending);

        let mut changes = Vec::new();
        for work_order in sorted {
            let Some(department) = resolve_department(departments, &work_order.department) else {
                handle_missing(
                    self.missing_reference_policy,
                    EngineError::UnknownDepartment {
                        work_order_id: work_order.id.clone(),
                        step_id: None,
                        department_id: work_order.department.clone(),
                    },
                )?;
                continue;
            };

            let Some(optimal_date) = self.find_optimal_date(work_order, department, &mut pools, today)?
            else {
                continue;
            };

            if let Some(change) = self.classify(work_order, optimal_date) {
                changes.push(change);
            }
        }

        debug!(changes_count = changes.len(), "优化建议生成完成");
        Ok(changes)
    }

    /// 消耗部门工时池, 求建议日期; 部门无可用工时时按缺失策略处理 (None = 跳过)
    ///
    /// 首日可用 min(池, 上限); 之后每天补池后可用量恒为 min(available_hours, 上限),
    /// 因此跨天部分按整除直接求出天数与剩余池, 不逐日推进
    fn find_optimal_date<'a>(
        &self,
        work_order: &WorkOrder,
        department: &'a Department,
        pools: &mut HashMap<&'a str, f64>,
        today: NaiveDate,
    ) -> EngineResult<Option<NaiveDate>> {
        let mut remaining = work_order.steps_total_hours();

        if remaining > 0.0 && (department.available_hours <= 0.0 || self.daily_hour_cap <= 0.0) {
            handle_missing(
                self.missing_reference_policy,
                EngineError::ZeroCapacityDepartment {
                    work_order_id: work_order.id.clone(),
                    department_id: department.id.clone(),
                },
            )?;
            return Ok(None);
        }

        let pool = pools.entry(department.id.as_str()).or_insert(department.available_hours);

        // 1. 首日
        let available_today = pool.min(self.daily_hour_cap);
        if available_today > 0.0 {
            let consumed = remaining.min(available_today);
            remaining -= consumed;
            *pool -= consumed;
        }
        if remaining <= 0.0 {
            return Ok(Some(today));
        }

        // 2. 后续每天
        let daily = department.available_hours.min(self.daily_hour_cap);
        let pool_on_day_one = if *pool < self.daily_hour_cap { daily } else { *pool };
        let extra_days = (remaining / daily).ceil();
        let full_days = extra_days - 1.0;
        let pool_on_last_day = (pool_on_day_one - full_days * daily).max(daily);
        *pool = pool_on_last_day - (remaining - full_days * daily);

        let optimal_date = today
            .checked_add_days(Days::new(extra_days as u64))
            .ok_or_else(|| EngineError::ScheduleOverflow {
                work_order_id: work_order.id.clone(),
                step_id: None,
            })?;
        Ok(Some(optimal_date))
    }

    /// 与现有排期对比分类; 日期不变返回 None
    fn classify(&self, work_order: &WorkOrder, optimal_date: NaiveDate) -> Option<OptimizedSchedule> {
        let (reason, days_difference) = match work_order.scheduled_date {
            None => (ChangeReason::Unscheduled, None),
            Some(current) => {
                let diff = (optimal_date - current).num_days();
                if diff == 0 {
                    return None;
                }
                let reason = if work_order.priority == Priority::Urgent && diff < 0 {
                    ChangeReason::UrgentAdvance
                } else if optimal_date > current && work_order.due_date.is_some_and(|due| due < current) {
                    ChangeReason::DueDateConflict
                } else if diff.abs() > self.significant_shift_days {
                    ChangeReason::WorkloadBalance
                } else {
                    ChangeReason::MinorAdjustment
                };
                (reason, Some(diff))
            }
        };

        Some(OptimizedSchedule {
            work_order_id: work_order.id.clone(),
            work_order_number: work_order.work_order_number.clone(),
            title: work_order.title.clone(),
            priority: work_order.priority,
            current_scheduled_date: work_order.scheduled_date,
            optimized_scheduled_date: optimal_date,
            days_difference,
            reason,
            impact: reason.impact(),
        })
    }
}

impl Default for ScheduleOptimizer {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}

/// 部门解析: 先按 id, 再按名称
fn resolve_department<'a>(departments: &'a [Department], key: &str) -> Option<&'a Department> {
    departments
        .iter()
        .find(|d| d.id == key)
        .or_else(|| departments.iter().find(|d| d.name == key))
}
