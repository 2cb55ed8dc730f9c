use crate::domain::types::MissingReferencePolicy;
use serde::{Deserialize, Serialize};

/// 排产参数（持久化对象）
///
/// 存储位置：JSON 配置文件，缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// 每周工作日（日产能 = 周产能 / 该值）
    pub working_days_per_week: f64,

    /// 日排程投影窗口（天，含今天）
    pub projection_window_days: u32,

    /// 优化器单日排产上限（小时）
    pub optimizer_daily_hour_cap: f64,

    /// 优化器"显著调整"阈值（天）
    pub optimizer_significant_shift_days: i64,

    /// 日历高负荷判定比例（余量 < 已排 * 比例）
    pub high_utilization_ratio: f64,

    /// 超产能判定阈值（利用率 %）
    pub over_capacity_threshold_pct: f64,

    /// 缺失引用（部门/工单/工序）处理策略
    pub missing_reference_policy: MissingReferencePolicy,

    /// 默认日志级别（RUST_LOG 未设置时生效）
    pub log_level: String,

    /// 是否输出 JSON 格式日志
    pub log_json: bool,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            working_days_per_week: 5.0,
            projection_window_days: 30,
            optimizer_daily_hour_cap: 8.0,
            optimizer_significant_shift_days: 3,
            high_utilization_ratio: 0.2,
            over_capacity_threshold_pct: 100.0,
            missing_reference_policy: MissingReferencePolicy::Skip,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl SchedulingConfig {
    /// 参数校验
    ///
    /// # 返回
    /// - Ok(()): 全部合法
    /// - Err((key, message)): 第一个非法字段
    pub fn validate(&self) -> Result<(), (&'static str, String)> {
        use crate::config::config_manager::config_keys as keys;

        if !(self.working_days_per_week.is_finite() && self.working_days_per_week > 0.0) {
            return Err((keys::WORKING_DAYS_PER_WEEK, "必须为正数".to_string()));
        }
        if self.projection_window_days == 0 {
            return Err((keys::PROJECTION_WINDOW_DAYS, "必须大于 0".to_string()));
        }
        if !(self.optimizer_daily_hour_cap.is_finite() && self.optimizer_daily_hour_cap > 0.0) {
            return Err((keys::OPTIMIZER_DAILY_HOUR_CAP, "必须为正数".to_string()));
        }
        if self.optimizer_significant_shift_days < 0 {
            return Err((keys::OPTIMIZER_SIGNIFICANT_SHIFT_DAYS, "不能为负数".to_string()));
        }
        if !(0.0..=1.0).contains(&self.high_utilization_ratio) {
            return Err((keys::HIGH_UTILIZATION_RATIO, "必须在 [0, 1] 区间".to_string()));
        }
        if !(self.over_capacity_threshold_pct.is_finite() && self.over_capacity_threshold_pct > 0.0) {
            return Err((keys::OVER_CAPACITY_THRESHOLD_PCT, "必须为正数".to_string()));
        }
        Ok(())
    }
}
