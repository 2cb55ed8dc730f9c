// ==========================================
// 工单排产系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + chrono + tracing
// 系统定位: 决策支持系统 (排期建议由人工提交)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 排产规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组装与演示数据
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ChangeImpact, DayLoadLevel, MissingReferencePolicy, Priority, WorkOrderStatus, WorkType,
};

// 领域实体
pub use domain::{
    CapacityData, DailySchedule, Department, OptimizedSchedule, ProcessStep, SchedulingResult,
    WorkOrder,
};

// 引擎
pub use engine::{
    CapacityAggregator, DailyScheduleProjector, ScheduleOptimizer, WorkOrderScheduler,
    WorkOrderSorter,
};

// API
pub use api::{DashboardApi, OptimizationApi, SchedulingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工单排产系统";
