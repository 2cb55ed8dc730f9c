// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use production_scheduling::domain::department::Department;
use production_scheduling::domain::types::{Priority, WorkOrderStatus, WorkType};
use production_scheduling::domain::work_order::{NewWorkOrder, ProcessStep, WorkOrder};

/// 测试基准时刻 2024-09-02 08:00
pub fn base_now() -> NaiveDateTime {
    base_today().and_hms_opt(8, 0, 0).unwrap()
}

pub fn base_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

/// base_today 偏移若干天
pub fn day(offset: i64) -> NaiveDate {
    base_today() + chrono::Duration::days(offset)
}

// ==========================================
// Department 构建
// ==========================================

/// 两个部门: Fire-ex 40h/周 (8h/天), Oxygen 80h/周 (16h/天)
pub fn two_departments() -> Vec<Department> {
    vec![
        Department::new("1", "Fire-ex", 40.0, 40.0),
        Department::new("2", "Oxygen", 80.0, 80.0),
    ]
}

// ==========================================
// WorkOrder 构建器
// ==========================================

pub struct WorkOrderBuilder {
    id: String,
    priority: Priority,
    status: WorkOrderStatus,
    department: String,
    created_at: NaiveDateTime,
    due_date: Option<NaiveDate>,
    scheduled_date: Option<NaiveDate>,
    steps: Vec<ProcessStep>,
}

impl WorkOrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            priority: Priority::Medium,
            status: WorkOrderStatus::Pending,
            department: "Fire-ex".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 8, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            due_date: None,
            scheduled_date: None,
            steps: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn status(mut self, status: WorkOrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    /// 创建日期 2024-08-{day}
    pub fn created_on(mut self, day: u32) -> Self {
        self.created_at = NaiveDate::from_ymd_opt(2024, 8, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn scheduled(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// 追加工序, id 为 "{工单id}-{序号}"
    pub fn step(mut self, department_id: &str, hours: f64) -> Self {
        let order = self.steps.len() as i32 + 1;
        let step_id = format!("{}-{}", self.id, order);
        self.steps.push(ProcessStep::new(
            &step_id,
            &format!("Step {}", order),
            department_id,
            hours,
            order,
        ));
        self
    }

    pub fn build(self) -> WorkOrder {
        WorkOrder {
            work_order_number: format!("WO-{}", self.id),
            repair_order_number: format!("RO-{}", self.id),
            customer_name: "Test Customer".to_string(),
            title: format!("Work order {}", self.id),
            description: None,
            priority: self.priority,
            status: self.status,
            department: self.department,
            work_type: WorkType::Contractual,
            total_hours: self.steps.iter().map(|s| s.estimated_hours).sum(),
            created_at: self.created_at,
            due_date: self.due_date,
            scheduled_date: self.scheduled_date,
            steps: self.steps,
            id: self.id,
        }
    }
}

/// 新建工单请求
pub fn new_work_order(title: &str, steps: Vec<ProcessStep>) -> NewWorkOrder {
    NewWorkOrder {
        work_order_number: "WO-NEW".to_string(),
        repair_order_number: "RO-NEW".to_string(),
        customer_name: "New Customer".to_string(),
        title: title.to_string(),
        description: None,
        priority: Priority::High,
        status: WorkOrderStatus::Pending,
        department: "Fire-ex".to_string(),
        work_type: WorkType::NonContract,
        total_hours: steps.iter().map(|s| s.estimated_hours).sum(),
        due_date: None,
        scheduled_date: None,
        steps,
    }
}
