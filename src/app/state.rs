// ==========================================
// 工单排产系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{DashboardApi, OptimizationApi, SchedulingApi};
use crate::app::seed;
use crate::config::{ConfigManager, CONFIG_PATH_ENV};
use crate::domain::department::Department;
use crate::domain::work_order::WorkOrder;
use crate::repository::department_repo::{DepartmentRepository, InMemoryDepartmentRepository};
use crate::repository::work_order_repo::{InMemoryWorkOrderRepository, WorkOrderRepository};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,

    /// 排产API
    pub scheduling_api: Arc<SchedulingApi>,

    /// 排期优化API
    pub optimization_api: Arc<OptimizationApi>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,

    /// 工单仓储 (API 之间共享同一份存储)
    pub work_order_repo: Arc<dyn WorkOrderRepository>,

    /// 部门仓储
    pub department_repo: Arc<dyn DepartmentRepository>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config_manager: 配置管理器
    /// - departments: 部门参考数据
    /// - work_orders: 初始工单
    pub fn new(
        config_manager: Arc<ConfigManager>,
        departments: Vec<Department>,
        work_orders: Vec<WorkOrder>,
    ) -> Self {
        tracing::info!(
            departments = departments.len(),
            work_orders = work_orders.len(),
            "初始化AppState"
        );

        // ==========================================
        // 初始化Repository层
        // ==========================================

        // 共享工单存储
        let store = Arc::new(Mutex::new(work_orders));
        let work_order_repo: Arc<dyn WorkOrderRepository> =
            Arc::new(InMemoryWorkOrderRepository::from_shared(store));
        let department_repo: Arc<dyn DepartmentRepository> =
            Arc::new(InMemoryDepartmentRepository::new(departments));

        // ==========================================
        // 初始化API层
        // ==========================================

        let scheduling_api = Arc::new(SchedulingApi::new(
            work_order_repo.clone(),
            department_repo.clone(),
            config_manager.clone(),
        ));
        let optimization_api = Arc::new(OptimizationApi::new(
            work_order_repo.clone(),
            department_repo.clone(),
            config_manager.clone(),
        ));
        let dashboard_api = Arc::new(DashboardApi::new(scheduling_api.clone()));

        tracing::info!("AppState初始化完成");

        Self {
            config_manager,
            scheduling_api,
            optimization_api,
            dashboard_api,
            work_order_repo,
            department_repo,
        }
    }

    /// 使用示例数据创建 (演示场景)
    pub fn with_sample_data(config_manager: Arc<ConfigManager>) -> Self {
        Self::new(
            config_manager,
            seed::sample_departments(),
            seed::sample_work_orders(),
        )
    }
}

/// 获取默认配置文件路径
///
/// 优先级: 环境变量 > 用户配置目录 > 当前目录
pub fn get_default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(config_dir) => config_dir.join("production-scheduling").join("config.json"),
        None => PathBuf::from("./production_scheduling.json"),
    }
}
