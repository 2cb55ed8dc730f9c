// ==========================================
// 工单排产系统 - 排产 API
// ==========================================
// 职责: 工单查询与维护、产能汇总、排产、日排程投影
// 架构: API 层 → Engine 层 (纯计算) + Repository 层 (读写)
// 说明: 每次调用重新读取仓储并重算, 不缓存派生数据
// ==========================================

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, SchedulingConfig};
use crate::domain::capacity::CapacityData;
use crate::domain::department::Department;
use crate::domain::schedule::{DailySchedule, SchedulingResult};
use crate::domain::types::WorkOrderStatus;
use crate::domain::work_order::{
    NewWorkOrder, ProcessStep, WorkOrder, WorkOrderFilter, WorkOrderPatch,
};
use crate::engine::error::EngineError;
use crate::engine::reference::handle_missing;
use crate::engine::{CapacityAggregator, DailyScheduleProjector, WorkOrderScheduler};
use crate::repository::department_repo::DepartmentRepository;
use crate::repository::error::RepositoryError;
use crate::repository::work_order_repo::WorkOrderRepository;

// ==========================================
// BatchUpdateReport - 批量更新结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchUpdateReport {
    pub updated: Vec<String>,
    pub skipped: Vec<String>, // 未找到的工单ID
}

// ==========================================
// SchedulingApi - 排产 API
// ==========================================

/// 排产API
///
/// 职责：
/// 1. 工单查询、新增、部分更新、批量更新
/// 2. 部门产能汇总
/// 3. 排产与日排程投影
pub struct SchedulingApi {
    work_order_repo: Arc<dyn WorkOrderRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
    config_manager: Arc<ConfigManager>,
}

impl SchedulingApi {
    /// 创建新的SchedulingApi实例
    ///
    /// # 参数
    /// - work_order_repo: 工单仓储
    /// - department_repo: 部门仓储
    /// - config_manager: 配置管理器 (每次调用读取当前配置)
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

    /// 查询工单列表 (保持录入顺序)
    pub fn list_work_orders(&self, filter: &WorkOrderFilter) -> ApiResult<Vec<WorkOrder>> {
        let work_orders = self.work_order_repo.list()?;
        Ok(filter.apply(work_orders))
    }

    /// 按ID查询工单
    pub fn get_work_order(&self, id: &str) -> ApiResult<Option<WorkOrder>> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidInput("工单ID不能为空".to_string()));
        }
        Ok(self.work_order_repo.find_by_id(id)?)
    }

    pub fn list_departments(&self) -> ApiResult<Vec<Department>> {
        Ok(self.department_repo.list()?)
    }

    /// 各部门产能快照 (负荷只统计筛选后的工单)
    pub fn get_capacity_data(&self, filter: &WorkOrderFilter) -> ApiResult<Vec<CapacityData>> {
        let config = self.config_manager.current()?;
        let (work_orders, departments) = self.load(filter)?;

        Ok(CapacityAggregator::new(&config).compute(&work_orders, &departments))
    }

    // ==========================================
    // 排产接口
    // ==========================================

    /// 排产 (以当前本地时间为起点)
    pub fn schedule_work_orders(&self, filter: &WorkOrderFilter) -> ApiResult<Vec<SchedulingResult>> {
        self.schedule_work_orders_at(filter, Local::now().naive_local())
    }

    /// 排产 (指定起点)
    #[instrument(skip(self, filter))]
    pub fn schedule_work_orders_at(
        &self,
        filter: &WorkOrderFilter,
        now: NaiveDateTime,
    ) -> ApiResult<Vec<SchedulingResult>> {
        let config = self.config_manager.current()?;
        let (work_orders, departments) = self.load(filter)?;

        let results = WorkOrderScheduler::new(&config).schedule(&work_orders, &departments, now)?;
        info!(results_count = results.len(), "排产完成");
        Ok(results)
    }

    /// 日排程投影 (以当前本地时间为起点)
    pub fn get_daily_schedules(&self, filter: &WorkOrderFilter) -> ApiResult<Vec<DailySchedule>> {
        self.get_daily_schedules_at(filter, Local::now().naive_local())
    }

    /// 日排程投影: 先排产, 再展开为 [today, today + window) 的逐日排程
    #[instrument(skip(self, filter))]
    pub fn get_daily_schedules_at(
        &self,
        filter: &WorkOrderFilter,
        now: NaiveDateTime,
    ) -> ApiResult<Vec<DailySchedule>> {
        let config = self.config_manager.current()?;
        let (work_orders, departments) = self.load(filter)?;

        let results = WorkOrderScheduler::new(&config).schedule(&work_orders, &departments, now)?;
        let days = DailyScheduleProjector::new(&config).project(
            &results,
            &work_orders,
            &departments,
            now.date(),
            config.projection_window_days,
        )?;
        Ok(days)
    }

    pub fn estimated_completion(
        &self,
        work_order_id: &str,
        filter: &WorkOrderFilter,
    ) -> ApiResult<Option<NaiveDateTime>> {
        self.estimated_completion_at(work_order_id, filter, Local::now().naive_local())
    }

    /// 单个工单的预计完工时间
    ///
    /// # 返回
    /// - Some: 工单参与排产
    /// - None: 工单不存在或非 pending
    pub fn estimated_completion_at(
        &self,
        work_order_id: &str,
        filter: &WorkOrderFilter,
        now: NaiveDateTime,
    ) -> ApiResult<Option<NaiveDateTime>> {
        let results = self.schedule_work_orders_at(filter, now)?;
        Ok(results
            .into_iter()
            .find(|r| r.work_order_id == work_order_id)
            .map(|r| r.estimated_completion_date))
    }

    // ==========================================
    // 维护接口
    // ==========================================

    /// 新增工单 (ID 与创建时间由系统生成)
    pub fn add_work_order(&self, new_work_order: NewWorkOrder) -> ApiResult<WorkOrder> {
        self.add_work_order_at(new_work_order, Local::now().naive_local())
    }

    pub fn add_work_order_at(
        &self,
        new_work_order: NewWorkOrder,
        created_at: NaiveDateTime,
    ) -> ApiResult<WorkOrder> {
        validate_new_work_order(&new_work_order)?;

        let work_order = new_work_order.into_work_order(Uuid::new_v4().to_string(), created_at);
        self.work_order_repo.insert(work_order.clone())?;

        info!(
            work_order_id = %work_order.id,
            work_order_number = %work_order.work_order_number,
            "工单已新增"
        );
        Ok(work_order)
    }

    /// 部分更新工单
    ///
    /// # 返回
    /// - Ok(Some): 更新后的工单
    /// - Ok(None): 工单不存在, 按缺失引用策略跳过
    /// - Err(NotFound): 工单不存在且策略为 fail
    pub fn update_work_order(
        &self,
        id: &str,
        patch: &WorkOrderPatch,
    ) -> ApiResult<Option<WorkOrder>> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidInput("工单ID不能为空".to_string()));
        }
        validate_patch(patch)?;

        match self.work_order_repo.update(id, patch) {
            Ok(updated) => {
                debug!(work_order_id = %id, "工单已更新");
                Ok(Some(updated))
            }
            Err(RepositoryError::NotFound { .. }) => {
                let config = self.config_manager.current()?;
                handle_missing(
                    config.missing_reference_policy,
                    EngineError::UnknownWorkOrder {
                        work_order_id: id.to_string(),
                    },
                )
                .map_err(|e| ApiError::NotFound(e.to_string()))?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 更新工单状态
    pub fn update_work_order_status(
        &self,
        id: &str,
        status: WorkOrderStatus,
    ) -> ApiResult<Option<WorkOrder>> {
        self.update_work_order(id, &WorkOrderPatch::with_status(status))
    }

    /// 批量更新: 逐条独立写入, 不存在的工单计入 skipped
    ///
    /// 策略为 fail 时遇到第一个不存在的工单即返回 NotFound;
    /// 此前已写入的工单保留, 不回滚, 也不返回部分结果
    pub fn batch_update_work_orders(
        &self,
        ids: &[String],
        patch: &WorkOrderPatch,
    ) -> ApiResult<BatchUpdateReport> {
        if patch.is_empty() {
            return Err(ApiError::InvalidInput("批量更新内容不能为空".to_string()));
        }

        let mut report = BatchUpdateReport::default();
        for id in ids {
            match self.update_work_order(id, patch)? {
                Some(_) => report.updated.push(id.clone()),
                None => report.skipped.push(id.clone()),
            }
        }

        if !report.skipped.is_empty() {
            warn!(skipped = ?report.skipped, "批量更新存在未找到的工单");
        }
        info!(
            updated = report.updated.len(),
            skipped = report.skipped.len(),
            "批量更新完成"
        );
        Ok(report)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 当前配置副本
    pub fn config(&self) -> ApiResult<SchedulingConfig> {
        Ok(self.config_manager.current()?)
    }

    fn load(&self, filter: &WorkOrderFilter) -> ApiResult<(Vec<WorkOrder>, Vec<Department>)> {
        let work_orders = filter.apply(self.work_order_repo.list()?);
        let departments = self.department_repo.list()?;
        Ok((work_orders, departments))
    }
}

/// 新建工单校验
fn validate_new_work_order(new_work_order: &NewWorkOrder) -> ApiResult<()> {
    if new_work_order.title.trim().is_empty() {
        return Err(ApiError::InvalidInput("工单标题不能为空".to_string()));
    }
    validate_total_hours(new_work_order.total_hours)?;
    validate_steps(&new_work_order.steps)
}

/// 部分更新校验: 只校验补丁中出现的字段, 规则与新建一致
fn validate_patch(patch: &WorkOrderPatch) -> ApiResult<()> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(ApiError::InvalidInput("工单标题不能为空".to_string()));
        }
    }
    if let Some(total_hours) = patch.total_hours {
        validate_total_hours(total_hours)?;
    }
    if let Some(steps) = &patch.steps {
        validate_steps(steps)?;
    }
    Ok(())
}

fn validate_total_hours(total_hours: f64) -> ApiResult<()> {
    if !total_hours.is_finite() || total_hours < 0.0 {
        return Err(ApiError::ValidationError(format!("总工时非法: {}", total_hours)));
    }
    Ok(())
}

/// 工序工时有限且非负, 工序ID不重复
fn validate_steps(steps: &[ProcessStep]) -> ApiResult<()> {
    let mut step_ids = HashSet::new();
    for step in steps {
        if !step.estimated_hours.is_finite() || step.estimated_hours < 0.0 {
            return Err(ApiError::ValidationError(format!(
                "工序工时非法: step={}, hours={}",
                step.id, step.estimated_hours
            )));
        }
        if !step_ids.insert(step.id.as_str()) {
            return Err(ApiError::ValidationError(format!("工序ID重复: {}", step.id)));
        }
    }
    Ok(())
}
