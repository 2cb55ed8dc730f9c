// ==========================================
// 工单排产系统 - 应用层
// ==========================================
// 职责: 组装仓储/API, 提供演示场景数据
// ==========================================

pub mod seed;
pub mod state;

// 重导出
pub use state::{get_default_config_path, AppState};
