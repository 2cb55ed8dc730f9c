// ==========================================
// 工单排产系统 - 配置管理器
// ==========================================
// 职责: 配置加载、按键查询、覆写管理、快照
// 存储: JSON 文件 (可选) + 内存
// ==========================================

use crate::config::scheduling_config::SchedulingConfig;
use crate::domain::types::MissingReferencePolicy;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "PRODUCTION_SCHEDULING_CONFIG";

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const WORKING_DAYS_PER_WEEK: &str = "working_days_per_week";
    pub const PROJECTION_WINDOW_DAYS: &str = "projection_window_days";
    pub const OPTIMIZER_DAILY_HOUR_CAP: &str = "optimizer_daily_hour_cap";
    pub const OPTIMIZER_SIGNIFICANT_SHIFT_DAYS: &str = "optimizer_significant_shift_days";
    pub const HIGH_UTILIZATION_RATIO: &str = "high_utilization_ratio";
    pub const OVER_CAPACITY_THRESHOLD_PCT: &str = "over_capacity_threshold_pct";
    pub const MISSING_REFERENCE_POLICY: &str = "missing_reference_policy";
    pub const LOG_LEVEL: &str = "log_level";
    pub const LOG_JSON: &str = "log_json";

    pub const ALL: [&str; 9] = [
        WORKING_DAYS_PER_WEEK,
        PROJECTION_WINDOW_DAYS,
        OPTIMIZER_DAILY_HOUR_CAP,
        OPTIMIZER_SIGNIFICANT_SHIFT_DAYS,
        HIGH_UTILIZATION_RATIO,
        OVER_CAPACITY_THRESHOLD_PCT,
        MISSING_REFERENCE_POLICY,
        LOG_LEVEL,
        LOG_JSON,
    ];
}

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("未知配置键: {0}")]
    UnknownKey(String),

    #[error("配置值非法 (key={key}): {message}")]
    InvalidValue { key: String, message: String },

    #[error("配置锁获取失败: {0}")]
    LockError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: RwLock<SchedulingConfig>,
    source_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用默认配置创建
    pub fn new() -> Self {
        Self {
            config: RwLock::new(SchedulingConfig::default()),
            source_path: None,
        }
    }

    /// 使用给定配置创建（会先校验）
    pub fn with_config(config: SchedulingConfig) -> ConfigResult<Self> {
        Self::validate(&config)?;
        Ok(Self {
            config: RwLock::new(config),
            source_path: None,
        })
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径，缺省字段取默认值
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: SchedulingConfig = serde_json::from_str(&raw)?;
        Self::validate(&config)?;

        tracing::info!("已加载配置文件: {}", path.display());
        Ok(Self {
            config: RwLock::new(config),
            source_path: Some(path.to_path_buf()),
        })
    }

    /// 按环境变量 / 默认路径加载，都不存在时使用默认配置
    ///
    /// 查找顺序:
    /// 1. 环境变量 PRODUCTION_SCHEDULING_CONFIG
    /// 2. default_path (存在时)
    pub fn load_or_default(default_path: Option<&Path>) -> ConfigResult<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Self::load_from_file(Path::new(trimmed));
            }
        }

        match default_path {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => {
                tracing::debug!("未找到配置文件，使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 配置来源文件
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// 当前配置副本
    pub fn current(&self) -> ConfigResult<SchedulingConfig> {
        self.config
            .read()
            .map(|c| c.clone())
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    /// 按键读取配置值（字符串形式）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 未知键
    pub fn get_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let config = self.current()?;
        let value = match key {
            config_keys::WORKING_DAYS_PER_WEEK => config.working_days_per_week.to_string(),
            config_keys::PROJECTION_WINDOW_DAYS => config.projection_window_days.to_string(),
            config_keys::OPTIMIZER_DAILY_HOUR_CAP => config.optimizer_daily_hour_cap.to_string(),
            config_keys::OPTIMIZER_SIGNIFICANT_SHIFT_DAYS => {
                config.optimizer_significant_shift_days.to_string()
            }
            config_keys::HIGH_UTILIZATION_RATIO => config.high_utilization_ratio.to_string(),
            config_keys::OVER_CAPACITY_THRESHOLD_PCT => {
                config.over_capacity_threshold_pct.to_string()
            }
            config_keys::MISSING_REFERENCE_POLICY => config.missing_reference_policy.to_string(),
            config_keys::LOG_LEVEL => config.log_level,
            config_keys::LOG_JSON => config.log_json.to_string(),
            _ => return Ok(None),
        };
        Ok(Some(value))
    }

    /// 按键更新配置值
    ///
    /// 先在副本上修改并校验，校验通过后整体替换
    pub fn update_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let mut next = self.current()?;
        let value = value.trim();

        match key {
            config_keys::WORKING_DAYS_PER_WEEK => {
                next.working_days_per_week = parse_value(key, value)?
            }
            config_keys::PROJECTION_WINDOW_DAYS => {
                next.projection_window_days = parse_value(key, value)?
            }
            config_keys::OPTIMIZER_DAILY_HOUR_CAP => {
                next.optimizer_daily_hour_cap = parse_value(key, value)?
            }
            config_keys::OPTIMIZER_SIGNIFICANT_SHIFT_DAYS => {
                next.optimizer_significant_shift_days = parse_value(key, value)?
            }
            config_keys::HIGH_UTILIZATION_RATIO => {
                next.high_utilization_ratio = parse_value(key, value)?
            }
            config_keys::OVER_CAPACITY_THRESHOLD_PCT => {
                next.over_capacity_threshold_pct = parse_value(key, value)?
            }
            config_keys::MISSING_REFERENCE_POLICY => {
                next.missing_reference_policy = value
                    .parse::<MissingReferencePolicy>()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message,
                    })?
            }
            config_keys::LOG_LEVEL => next.log_level = value.to_string(),
            config_keys::LOG_JSON => next.log_json = parse_value(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }

        Self::validate(&next)?;

        let mut guard = self
            .config
            .write()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;
        *guard = next;
        tracing::info!(key, value, "配置已更新");
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let config = self.current()?;
        Ok(serde_json::to_string(&config)?)
    }

    /// 从快照恢复配置
    pub fn restore_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<()> {
        let config: SchedulingConfig = serde_json::from_str(snapshot_json)?;
        Self::validate(&config)?;

        let mut guard = self
            .config
            .write()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;
        *guard = config;
        Ok(())
    }

    fn validate(config: &SchedulingConfig) -> ConfigResult<()> {
        config
            .validate()
            .map_err(|(key, message)| ConfigError::InvalidValue {
                key: key.to_string(),
                message,
            })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_value<T>(key: &str, value: &str) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
