// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 用内存仓储组装 AppState
// ==========================================

#![allow(dead_code)]

use std::sync::Arc;

use production_scheduling::app::AppState;
use production_scheduling::config::{ConfigManager, SchedulingConfig};
use production_scheduling::domain::department::Department;
use production_scheduling::domain::types::MissingReferencePolicy;
use production_scheduling::domain::work_order::WorkOrder;

/// 默认配置的 AppState
pub fn create_state(departments: Vec<Department>, work_orders: Vec<WorkOrder>) -> AppState {
    AppState::new(Arc::new(ConfigManager::new()), departments, work_orders)
}

/// 指定配置的 AppState
pub fn create_state_with_config(
    config: SchedulingConfig,
    departments: Vec<Department>,
    work_orders: Vec<WorkOrder>,
) -> AppState {
    let manager = ConfigManager::with_config(config).expect("测试配置非法");
    AppState::new(Arc::new(manager), departments, work_orders)
}

/// 缺失引用策略为 fail 的 AppState
pub fn create_strict_state(departments: Vec<Department>, work_orders: Vec<WorkOrder>) -> AppState {
    create_state_with_config(
        SchedulingConfig {
            missing_reference_policy: MissingReferencePolicy::Fail,
            ..Default::default()
        },
        departments,
        work_orders,
    )
}
