// ==========================================
// OptimizationApi 集成测试
// ==========================================
// 职责: 指标、生成建议、提交建议
// ==========================================

mod helpers;

use helpers::api_test_helper::create_state;
use helpers::test_data_builder::{base_today, day, two_departments, WorkOrderBuilder};
use production_scheduling::api::ApiError;
use production_scheduling::domain::optimization::{ChangeReason, OptimizationSummary};
use production_scheduling::domain::types::{ChangeImpact, Priority, WorkOrderStatus};
use production_scheduling::domain::work_order::WorkOrderFilter;

// ==========================================
// 指标
// ==========================================

#[test]
fn test_metrics_count_pending_urgent_and_overdue() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").priority(Priority::Urgent).due(day(-1)).build(),
            WorkOrderBuilder::new("b").priority(Priority::Urgent).due(day(0)).build(),
            WorkOrderBuilder::new("c").priority(Priority::Low).due(day(-5)).build(),
            WorkOrderBuilder::new("d")
                .priority(Priority::Urgent)
                .status(WorkOrderStatus::InProgress)
                .due(day(-5))
                .build(),
        ],
    );

    let metrics = state
        .optimization_api
        .get_metrics_at(&WorkOrderFilter::all(), base_today())
        .unwrap();
    assert_eq!(metrics.total_pending, 3);
    assert_eq!(metrics.urgent_pending, 2);
    assert_eq!(metrics.overdue_pending, 2);
}

// ==========================================
// 生成建议
// ==========================================

#[test]
fn test_generate_is_preview_only() {
    let state = create_state(
        two_departments(),
        vec![WorkOrderBuilder::new("a").department("Fire-ex").step("1", 8.0).build()],
    );

    let changes = state
        .optimization_api
        .generate_optimized_schedule_at(&WorkOrderFilter::all(), base_today())
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].reason, ChangeReason::Unscheduled);
    assert_eq!(changes[0].optimized_scheduled_date, base_today());

    let stored = state.scheduling_api.get_work_order("a").unwrap().unwrap();
    assert_eq!(stored.scheduled_date, None);
}

#[test]
fn test_urgent_order_is_pulled_forward() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("u")
                .priority(Priority::Urgent)
                .department("Oxygen")
                .scheduled(day(5))
                .step("2", 8.0)
                .build(),
            // 已在最优日期, 不产生建议
            WorkOrderBuilder::new("same")
                .priority(Priority::Low)
                .department("Oxygen")
                .scheduled(day(0))
                .step("2", 4.0)
                .build(),
        ],
    );

    let changes = state
        .optimization_api
        .generate_optimized_schedule_at(&WorkOrderFilter::all(), base_today())
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].work_order_id, "u");
    assert_eq!(changes[0].reason, ChangeReason::UrgentAdvance);
    assert_eq!(changes[0].impact, ChangeImpact::High);
    assert_eq!(changes[0].days_difference, Some(-5));

    let summary = OptimizationSummary::from_changes(&changes);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.high, 1);
}

// ==========================================
// 提交
// ==========================================

#[test]
fn test_commit_writes_dates_and_converges() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").priority(Priority::High).step("1", 30.0).build(),
            WorkOrderBuilder::new("b").priority(Priority::Low).scheduled(day(20)).step("1", 8.0).build(),
        ],
    );
    let api = &state.optimization_api;

    let changes = api
        .generate_optimized_schedule_at(&WorkOrderFilter::all(), base_today())
        .unwrap();
    assert_eq!(changes.len(), 2);

    let applied = api.commit_optimizations(&changes).unwrap();
    assert_eq!(applied, 2);

    for change in &changes {
        let stored = state
            .scheduling_api
            .get_work_order(&change.work_order_id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.scheduled_date, Some(change.optimized_scheduled_date));
    }

    // 输入不变时再次生成不再产生建议
    let again = api
        .generate_optimized_schedule_at(&WorkOrderFilter::all(), base_today())
        .unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_commit_failure_keeps_partial_writes() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").step("1", 8.0).build(),
            WorkOrderBuilder::new("b").step("1", 8.0).build(),
            WorkOrderBuilder::new("c").step("1", 8.0).build(),
        ],
    );
    let api = &state.optimization_api;

    let mut changes = api
        .generate_optimized_schedule_at(&WorkOrderFilter::all(), base_today())
        .unwrap();
    assert_eq!(changes.len(), 3);
    changes[1].work_order_id = "vanished".to_string();

    let err = api.commit_optimizations(&changes).unwrap_err();
    assert!(matches!(err, ApiError::OptimizationCommitFailed(_)));

    let get = |id: &str| state.scheduling_api.get_work_order(id).unwrap().unwrap();
    assert_eq!(get(&changes[0].work_order_id).scheduled_date, Some(changes[0].optimized_scheduled_date));
    assert_eq!(get(&changes[2].work_order_id).scheduled_date, None);
}
