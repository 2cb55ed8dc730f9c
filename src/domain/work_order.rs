// ==========================================
// 工单排产系统 - 工单领域模型
// ==========================================
// 工单拥有工序, 工序无独立生命周期
// 工单只做整体替换更新, 不删除
// ==========================================

use crate::domain::types::{Priority, WorkOrderStatus, WorkType};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ProcessStep - 工序
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub name: String,
    pub department_id: String,  // 所属部门ID
    pub estimated_hours: f64,   // 预计工时
    pub order: i32,             // 工单内执行顺序
}

impl ProcessStep {
    pub fn new(id: &str, name: &str, department_id: &str, estimated_hours: f64, order: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            department_id: department_id.to_string(),
            estimated_hours,
            order,
        }
    }
}

// ==========================================
// WorkOrder - 工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    // ===== 标识 =====
    pub id: String,
    pub work_order_number: String,   // 工单号
    pub repair_order_number: String, // 维修单号
    pub customer_name: String,

    // ===== 描述 =====
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,

    // ===== 排产属性 =====
    pub priority: Priority,
    pub status: WorkOrderStatus,
    pub department: String, // 主责部门 (名称)
    pub work_type: WorkType,
    pub total_hours: f64,

    // ===== 时间 =====
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,

    // ===== 工序 =====
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

impl WorkOrder {
    pub fn is_pending(&self) -> bool {
        self.status == WorkOrderStatus::Pending
    }

    /// 未完成 (计入产能负荷)
    pub fn is_open(&self) -> bool {
        self.status != WorkOrderStatus::Completed
    }

    /// 按 order 升序的工序视图 (稳定排序, 同序保持录入顺序)
    pub fn ordered_steps(&self) -> Vec<&ProcessStep> {
        let mut steps: Vec<&ProcessStep> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
    }

    /// 工序工时合计
    pub fn steps_total_hours(&self) -> f64 {
        self.steps.iter().map(|s| s.estimated_hours).sum()
    }

    pub fn find_step(&self, step_id: &str) -> Option<&ProcessStep> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// 待排产且交期早于 today
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date.map_or(false, |d| d < today)
    }
}

// ==========================================
// NewWorkOrder - 新建工单请求
// ==========================================
// id / created_at 由仓储侧生成
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkOrder {
    pub work_order_number: String,
    pub repair_order_number: String,
    pub customer_name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: WorkOrderStatus,
    pub department: String,
    pub work_type: WorkType,
    pub total_hours: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

impl NewWorkOrder {
    pub fn into_work_order(self, id: String, created_at: NaiveDateTime) -> WorkOrder {
        WorkOrder {
            id,
            work_order_number: self.work_order_number,
            repair_order_number: self.repair_order_number,
            customer_name: self.customer_name,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            department: self.department,
            work_type: self.work_type,
            total_hours: self.total_hours,
            created_at,
            due_date: self.due_date,
            scheduled_date: self.scheduled_date,
            steps: self.steps,
        }
    }
}

// ==========================================
// WorkOrderPatch - 工单部分更新
// ==========================================
// 仅 Some 字段生效
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderPatch {
    #[serde(default)]
    pub work_order_number: Option<String>,
    #[serde(default)]
    pub repair_order_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<WorkOrderStatus>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub steps: Option<Vec<ProcessStep>>,
}

impl WorkOrderPatch {
    pub fn with_status(status: WorkOrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_scheduled_date(date: NaiveDate) -> Self {
        Self {
            scheduled_date: Some(date),
            ..Default::default()
        }
    }

    pub fn with_priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.work_order_number.is_none()
            && self.repair_order_number.is_none()
            && self.customer_name.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.department.is_none()
            && self.work_type.is_none()
            && self.total_hours.is_none()
            && self.due_date.is_none()
            && self.scheduled_date.is_none()
            && self.steps.is_none()
    }

    /// 合并到工单 (read-modify-write 的 modify 部分)
    pub fn apply_to(&self, work_order: &mut WorkOrder) {
        if let Some(v) = &self.work_order_number {
            work_order.work_order_number = v.clone();
        }
        if let Some(v) = &self.repair_order_number {
            work_order.repair_order_number = v.clone();
        }
        if let Some(v) = &self.customer_name {
            work_order.customer_name = v.clone();
        }
        if let Some(v) = &self.title {
            work_order.title = v.clone();
        }
        if let Some(v) = &self.description {
            work_order.description = Some(v.clone());
        }
        if let Some(v) = self.priority {
            work_order.priority = v;
        }
        if let Some(v) = self.status {
            work_order.status = v;
        }
        if let Some(v) = &self.department {
            work_order.department = v.clone();
        }
        if let Some(v) = self.work_type {
            work_order.work_type = v;
        }
        if let Some(v) = self.total_hours {
            work_order.total_hours = v;
        }
        if let Some(v) = self.due_date {
            work_order.due_date = Some(v);
        }
        if let Some(v) = self.scheduled_date {
            work_order.scheduled_date = Some(v);
        }
        if let Some(v) = &self.steps {
            work_order.steps = v.clone();
        }
    }
}

// ==========================================
// WorkOrderFilter - 工单筛选
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderFilter {
    #[serde(default)]
    pub department: Option<String>,       // 主责部门名称
    #[serde(default)]
    pub status: Option<WorkOrderStatus>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>, // 日历下钻
}

impl WorkOrderFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn department(name: &str) -> Self {
        Self {
            department: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn matches(&self, work_order: &WorkOrder) -> bool {
        if let Some(dept) = &self.department {
            if &work_order.department != dept {
                return false;
            }
        }
        if let Some(status) = self.status {
            if work_order.status != status {
                return false;
            }
        }
        if let Some(date) = self.scheduled_date {
            if work_order.scheduled_date != Some(date) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, work_orders: Vec<WorkOrder>) -> Vec<WorkOrder> {
        work_orders.into_iter().filter(|wo| self.matches(wo)).collect()
    }
}
