// ==========================================
// 工单排产系统 - 领域类型定义
// ==========================================
// 职责: 优先级、工单状态、工单类型、调整影响等枚举
// 序列化格式: 与前端一致的小写字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 工单优先级 (Priority)
// ==========================================
// 顺序: Low < Medium < High < Urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,    // 低
    Medium, // 中
    High,   // 高
    Urgent, // 紧急
}

impl Priority {
    /// 排序权重 (urgent=4, high=3, medium=2, low=1)
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("未知优先级: {}", other)),
        }
    }
}

// ==========================================
// 工单状态 (Work Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,    // 待排产
    InProgress, // 进行中
    Completed,  // 已完成
    OnHold,     // 挂起
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkOrderStatus::Pending => write!(f, "pending"),
            WorkOrderStatus::InProgress => write!(f, "in_progress"),
            WorkOrderStatus::Completed => write!(f, "completed"),
            WorkOrderStatus::OnHold => write!(f, "on_hold"),
        }
    }
}

impl FromStr for WorkOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(WorkOrderStatus::Pending),
            "in_progress" => Ok(WorkOrderStatus::InProgress),
            "completed" => Ok(WorkOrderStatus::Completed),
            "on_hold" => Ok(WorkOrderStatus::OnHold),
            other => Err(format!("未知工单状态: {}", other)),
        }
    }
}

// ==========================================
// 工单类型 (Work Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    Contractual, // 合同内
    NonContract, // 合同外
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkType::Contractual => write!(f, "contractual"),
            WorkType::NonContract => write!(f, "non-contract"),
        }
    }
}

// ==========================================
// 排期调整影响 (Change Impact)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeImpact {
    Low,
    Medium,
    High,
}

impl fmt::Display for ChangeImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeImpact::Low => write!(f, "low"),
            ChangeImpact::Medium => write!(f, "medium"),
            ChangeImpact::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 日负荷等级 (Day Load Level)
// ==========================================
// 用途: 日历视图着色
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLoadLevel {
    Idle,   // 无排产
    Normal, // 正常
    High,   // 高负荷
    Over,   // 超产能
}

impl fmt::Display for DayLoadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLoadLevel::Idle => write!(f, "idle"),
            DayLoadLevel::Normal => write!(f, "normal"),
            DayLoadLevel::High => write!(f, "high"),
            DayLoadLevel::Over => write!(f, "over"),
        }
    }
}

// ==========================================
// 缺失引用处理策略 (Missing Reference Policy)
// ==========================================
// 适用: 部门/工单/工序查找失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReferencePolicy {
    #[default]
    Skip, // 静默跳过
    Warn, // 跳过并告警
    Fail, // 返回错误
}

impl fmt::Display for MissingReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReferencePolicy::Skip => write!(f, "skip"),
            MissingReferencePolicy::Warn => write!(f, "warn"),
            MissingReferencePolicy::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for MissingReferencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MissingReferencePolicy::Skip),
            "warn" => Ok(MissingReferencePolicy::Warn),
            "fail" => Ok(MissingReferencePolicy::Fail),
            other => Err(format!("未知缺失引用策略: {}", other)),
        }
    }
}
