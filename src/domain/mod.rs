// ==========================================
// 工单排产系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、派生值对象、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod capacity;
pub mod department;
pub mod optimization;
pub mod schedule;
pub mod types;
pub mod work_order;

// 重导出核心类型
pub use capacity::CapacityData;
pub use department::{CapacityProfile, Department};
pub use optimization::{ChangeReason, OptimizationSummary, OptimizedSchedule};
pub use schedule::{DailySchedule, DailyStepEntry, SchedulingResult, StepSchedule};
pub use types::{
    ChangeImpact, DayLoadLevel, MissingReferencePolicy, Priority, WorkOrderStatus, WorkType,
};
pub use work_order::{NewWorkOrder, ProcessStep, WorkOrder, WorkOrderFilter, WorkOrderPatch};
