// ==========================================
// 工单排产系统 - 演示入口
// ==========================================
// 加载配置 → 初始化日志 → 装载示例场景 → 输出 JSON 快照
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use serde_json::json;

use production_scheduling::app::{get_default_config_path, AppState};
use production_scheduling::config::ConfigManager;
use production_scheduling::domain::optimization::OptimizationSummary;
use production_scheduling::domain::work_order::WorkOrderFilter;

fn main() -> anyhow::Result<()> {
    let config_path = get_default_config_path();
    let config_manager = ConfigManager::load_or_default(Some(config_path.as_path()))
        .with_context(|| format!("无法加载配置: {}", config_path.display()))?;
    let config = config_manager.current()?;

    production_scheduling::logging::init_from_config(&config);

    tracing::info!("==================================================");
    tracing::info!("{}", production_scheduling::APP_NAME);
    tracing::info!("系统版本: {}", production_scheduling::VERSION);
    tracing::info!(
        config_source = ?config_manager.source_path(),
        "配置已加载"
    );
    tracing::info!("==================================================");

    let state = AppState::with_sample_data(Arc::new(config_manager));
    let filter = WorkOrderFilter::all();
    let now = Local::now().naive_local();
    let today = now.date();

    let stats = state.dashboard_api.get_stats(&filter)?;
    let capacity = state.scheduling_api.get_capacity_data(&filter)?;
    let schedule = state.scheduling_api.schedule_work_orders_at(&filter, now)?;
    let daily = state.scheduling_api.get_daily_schedules_at(&filter, now)?;
    let metrics = state.optimization_api.get_metrics_at(&filter, today)?;
    let changes = state
        .optimization_api
        .generate_optimized_schedule_at(&filter, today)?;

    let snapshot = json!({
        "generated_at": now,
        "stats": stats,
        "capacity": capacity,
        "schedule": schedule,
        "daily_schedules": daily,
        "optimization": {
            "metrics": metrics,
            "summary": OptimizationSummary::from_changes(&changes),
            "changes": changes,
        },
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("快照序列化失败")?
    );
    Ok(())
}
