// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::SchedulingConfig;

/// 初始化日志系统 (默认级别 info, 文本输出)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（优先于配置）
///   例如: RUST_LOG=debug 或 RUST_LOG=production_scheduling=trace
///
/// # 示例
/// ```no_run
/// use production_scheduling::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with("info", false);
}

/// 按配置初始化日志系统
pub fn init_from_config(config: &SchedulingConfig) {
    init_with(&config.log_level, config.log_json);
}

/// 初始化日志系统
///
/// # 参数
/// - default_level: RUST_LOG 未设置时使用的级别
/// - json: 是否输出 JSON 格式
pub fn init_with(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    // 重复初始化时忽略
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
