// ==========================================
// 集成测试共享辅助模块
// ==========================================

pub mod api_test_helper;
pub mod test_data_builder;
