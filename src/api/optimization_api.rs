// ==========================================
// 工单排产系统 - 排期优化 API
// ==========================================
// 职责: 优化指标、生成排期建议 (预览)、提交建议
// 说明: 生成建议不写入仓储, 只有 commit 才回写 scheduled_date
// ==========================================

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::optimization::OptimizedSchedule;
use crate::domain::types::Priority;
use crate::domain::work_order::{WorkOrderFilter, WorkOrderPatch};
use crate::engine::ScheduleOptimizer;
use crate::repository::department_repo::DepartmentRepository;
use crate::repository::work_order_repo::WorkOrderRepository;

// ==========================================
// OptimizationMetrics - 优化页指标
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationMetrics {
    pub total_pending: usize,
    pub urgent_pending: usize,
    pub overdue_pending: usize, // 交期早于今天
}

// ==========================================
// OptimizationApi - 排期优化 API
// ==========================================
pub struct OptimizationApi {
    work_order_repo: Arc<dyn WorkOrderRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
    config_manager: Arc<ConfigManager>,
}

impl OptimizationApi {
    pub fn new(
        work_order_repo: Arc<dyn WorkOrderRepository>,
        department_repo: Arc<dyn DepartmentRepository>,
        config_manager: Arc<ConfigManager>,
    ) -> Self {
        Self {
            work_order_repo,
            department_repo,
            config_manager,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    pub fn get_metrics(&self, filter: &WorkOrderFilter) -> ApiResult<OptimizationMetrics> {
        self.get_metrics_at(filter, Local::now().date_naive())
    }

    /// 待排产工单指标
    pub fn get_metrics_at(
        &self,
        filter: &WorkOrderFilter,
        today: NaiveDate,
    ) -> ApiResult<OptimizationMetrics> {
        let work_orders = filter.apply(self.work_order_repo.list()?);

        let mut metrics = OptimizationMetrics::default();
        for work_order in work_orders.iter().filter(|wo| wo.is_pending()) {
            metrics.total_pending += 1;
            if work_order.priority == Priority::Urgent {
                metrics.urgent_pending += 1;
            }
            if work_order.is_overdue(today) {
                metrics.overdue_pending += 1;
            }
        }
        Ok(metrics)
    }

    /// 生成排期建议 (以今天为起点)
    pub fn generate_optimized_schedule(
        &self,
        filter: &WorkOrderFilter,
    ) -> ApiResult<Vec<OptimizedSchedule>> {
        self.generate_optimized_schedule_at(filter, Local::now().date_naive())
    }

    /// 生成排期建议 (预览, 不写入)
    #[instrument(skip(self, filter))]
    pub fn generate_optimized_schedule_at(
        &self,
        filter: &WorkOrderFilter,
        today: NaiveDate,
    ) -> ApiResult<Vec<OptimizedSchedule>> {
        let config = self.config_manager.current()?;
        let work_orders = filter.apply(self.work_order_repo.list()?);
        let departments = self.department_repo.list()?;

        let changes = ScheduleOptimizer::new(&config).optimize(&work_orders, &departments, today)?;
        info!(changes_count = changes.len(), "排期建议已生成");
        Ok(changes)
    }

    // ==========================================
    // 提交接口
    // ==========================================

    /// 按顺序回写建议日期
    ///
    /// # 返回
    /// - Ok(n): 全部写入, n 为写入条数
    /// - Err(OptimizationCommitFailed): 中途失败, 已写入部分保留
    pub fn commit_optimizations(&self, changes: &[OptimizedSchedule]) -> ApiResult<usize> {
        let mut applied = 0usize;
        for change in changes {
            let patch = WorkOrderPatch::with_scheduled_date(change.optimized_scheduled_date);
            if let Err(e) = self.work_order_repo.update(&change.work_order_id, &patch) {
                error!(
                    work_order_id = %change.work_order_id,
                    applied,
                    total = changes.len(),
                    error = %e,
                    "排期建议提交中断"
                );
                return Err(ApiError::OptimizationCommitFailed(format!(
                    "已写入 {}/{} 条",
                    applied,
                    changes.len()
                )));
            }
            applied += 1;
        }

        info!(applied, "排期建议已提交");
        Ok(applied)
    }
}
