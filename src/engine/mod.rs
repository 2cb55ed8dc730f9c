// ==========================================
// 工单排产系统 - 引擎层
// ==========================================
// 职责: 纯计算, 输入值对象, 输出值对象, 不持有状态
// 红线: 引擎不读写仓储, 所有结果按需重算不缓存
// ==========================================

pub mod capacity_aggregator;
pub mod daily_projector;
pub mod error;
pub mod optimizer;
pub mod priority;
pub mod reference;
pub mod scheduler;

// 重导出核心引擎
pub use capacity_aggregator::CapacityAggregator;
pub use daily_projector::DailyScheduleProjector;
pub use error::{EngineError, EngineResult};
pub use optimizer::ScheduleOptimizer;
pub use priority::WorkOrderSorter;
pub use reference::handle_missing;
pub use scheduler::WorkOrderScheduler;
