// ==========================================
// 工单排产系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 组合仓储与引擎
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod optimization_api;
pub mod scheduling_api;

// 重导出核心类型
pub use dashboard_api::{CalendarDay, DashboardApi, DashboardStats};
pub use error::{ApiError, ApiResult};
pub use optimization_api::{OptimizationApi, OptimizationMetrics};
pub use scheduling_api::{BatchUpdateReport, SchedulingApi};
