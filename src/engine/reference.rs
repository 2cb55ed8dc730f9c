// ==========================================
// 工单排产系统 - 缺失引用处理
// ==========================================
// 默认静默跳过, 可按调用点升级为告警或失败
// ==========================================

use crate::domain::types::MissingReferencePolicy;
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, warn};

/// 按策略处理一次缺失引用
///
/// # 返回
/// - Ok(()): 调用方跳过该项继续
/// - Err(EngineError): 策略为 fail
pub fn handle_missing(policy: MissingReferencePolicy, error: EngineError) -> EngineResult<()> {
    match policy {
        MissingReferencePolicy::Skip => {
            debug!(%error, "缺失引用, 已跳过");
            Ok(())
        }
        MissingReferencePolicy::Warn => {
            warn!(%error, "缺失引用, 已跳过");
            Ok(())
        }
        MissingReferencePolicy::Fail => Err(error),
    }
}
