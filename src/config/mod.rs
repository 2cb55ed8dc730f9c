// ==========================================
// 工单排产系统 - 配置层
// ==========================================
// 职责: 排产参数管理, 支持文件加载与按键覆写
// 存储: JSON 配置文件 + 内存
// ==========================================

pub mod config_manager;
pub mod scheduling_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult, CONFIG_PATH_ENV};
pub use scheduling_config::SchedulingConfig;
