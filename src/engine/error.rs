// ==========================================
// 工单排产系统 - 引擎层错误类型
// ==========================================
// 缺失引用类错误仅在策略为 fail 时向上返回
// 日期溢出总是向上返回
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("未知部门: work_order={work_order_id}, step={step_id:?}, department={department_id}")]
    UnknownDepartment {
        work_order_id: String,
        step_id: Option<String>,
        department_id: String,
    },

    #[error("未知工单: work_order={work_order_id}")]
    UnknownWorkOrder { work_order_id: String },

    #[error("未知工序: work_order={work_order_id}, step={step_id}")]
    UnknownStep {
        work_order_id: String,
        step_id: String,
    },

    #[error("部门产能为零, 无法排产: work_order={work_order_id}, department={department_id}")]
    ZeroCapacityDepartment {
        work_order_id: String,
        department_id: String,
    },

    #[error("排期日期超出可表示范围: work_order={work_order_id}, step={step_id:?}")]
    ScheduleOverflow {
        work_order_id: String,
        step_id: Option<String>,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
