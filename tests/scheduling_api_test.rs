// ==========================================
// SchedulingApi 集成测试
// ==========================================
// 职责: 工单维护、产能汇总、排产、日排程投影
// ==========================================

mod helpers;

use chrono::Duration;
use helpers::api_test_helper::{create_state, create_strict_state};
use helpers::test_data_builder::{base_now, base_today, day, new_work_order, two_departments, WorkOrderBuilder};
use production_scheduling::api::ApiError;
use production_scheduling::config::config_keys;
use production_scheduling::domain::department::Department;
use production_scheduling::domain::types::{Priority, WorkOrderStatus};
use production_scheduling::domain::work_order::{ProcessStep, WorkOrderFilter, WorkOrderPatch};
use production_scheduling::engine::EngineError;

// ==========================================
// 查询
// ==========================================

#[test]
fn test_list_work_orders_applies_filter() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").department("Fire-ex").build(),
            WorkOrderBuilder::new("b").department("Oxygen").build(),
            WorkOrderBuilder::new("c")
                .department("Fire-ex")
                .status(WorkOrderStatus::Completed)
                .scheduled(day(3))
                .build(),
        ],
    );
    let api = &state.scheduling_api;

    assert_eq!(api.list_work_orders(&WorkOrderFilter::all()).unwrap().len(), 3);

    let fire: Vec<String> = api
        .list_work_orders(&WorkOrderFilter::department("Fire-ex"))
        .unwrap()
        .into_iter()
        .map(|wo| wo.id)
        .collect();
    assert_eq!(fire, vec!["a", "c"]);

    let filter = WorkOrderFilter {
        scheduled_date: Some(day(3)),
        ..Default::default()
    };
    assert_eq!(api.list_work_orders(&filter).unwrap()[0].id, "c");

    assert!(api.get_work_order("zzz").unwrap().is_none());
    assert!(matches!(api.get_work_order(" "), Err(ApiError::InvalidInput(_))));
}

// ==========================================
// 产能汇总
// ==========================================

#[test]
fn test_capacity_data_counts_open_orders_only() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").step("1", 24.0).step("2", 40.0).build(),
            WorkOrderBuilder::new("b")
                .status(WorkOrderStatus::OnHold)
                .step("1", 32.0)
                .build(),
            WorkOrderBuilder::new("c")
                .status(WorkOrderStatus::Completed)
                .step("1", 500.0)
                .build(),
        ],
    );

    let capacity = state.scheduling_api.get_capacity_data(&WorkOrderFilter::all()).unwrap();
    assert_eq!(capacity.len(), 2);

    // Fire-ex: 56h / 40h
    assert_eq!(capacity[0].department_name, "Fire-ex");
    assert_eq!(capacity[0].used_capacity, 40.0);
    assert_eq!(capacity[0].utilization_percentage, 140.0);
    assert_eq!(capacity[0].backlog_hours, 16.0);
    assert_eq!(capacity[0].backlog_days, 2.0);

    // Oxygen: 40h / 80h
    assert_eq!(capacity[1].utilization_percentage, 50.0);
    assert_eq!(capacity[1].backlog_hours, 0.0);

    for c in &capacity {
        assert!(c.used_capacity <= c.total_capacity);
    }
}

#[test]
fn test_zero_capacity_department_end_to_end() {
    let mut departments = two_departments();
    departments.push(Department::new("z", "Idle", 0.0, 0.0));
    let state = create_state(
        departments,
        vec![WorkOrderBuilder::new("a").step("z", 12.0).step("1", 8.0).build()],
    );

    let capacity = state.scheduling_api.get_capacity_data(&WorkOrderFilter::all()).unwrap();
    let idle = capacity.iter().find(|c| c.department_id == "z").unwrap();
    assert_eq!(idle.utilization_percentage, 0.0);
    assert_eq!(idle.backlog_days, 0.0);

    // 零产能工序默认跳过, 其余工序照常排产
    let results = state
        .scheduling_api
        .schedule_work_orders_at(&WorkOrderFilter::all(), base_now())
        .unwrap();
    assert_eq!(results[0].step_schedules.len(), 1);
    assert_eq!(results[0].step_schedules[0].step_id, "a-2");
}

// ==========================================
// 排产
// ==========================================

#[test]
fn test_urgent_before_low_in_shared_department() {
    let low = WorkOrderBuilder::new("low").priority(Priority::Low).created_on(1).step("1", 8.0).build();
    let urgent = WorkOrderBuilder::new("urgent")
        .priority(Priority::Urgent)
        .created_on(20)
        .step("1", 16.0)
        .build();

    for work_orders in [vec![low.clone(), urgent.clone()], vec![urgent.clone(), low.clone()]] {
        let state = create_state(two_departments(), work_orders);
        let results = state
            .scheduling_api
            .schedule_work_orders_at(&WorkOrderFilter::all(), base_now())
            .unwrap();

        assert_eq!(results[0].work_order_id, "urgent");
        assert_eq!(results[0].estimated_start_date, base_now());
        assert_eq!(results[0].estimated_completion_date, base_now() + Duration::days(2));
        assert_eq!(results[1].work_order_id, "low");
        assert_eq!(results[1].estimated_start_date, base_now() + Duration::days(2));
        assert_eq!(results[1].estimated_completion_date, base_now() + Duration::days(3));
    }
}

#[test]
fn test_estimated_completion_for_single_order() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").priority(Priority::High).step("2", 40.0).build(),
            WorkOrderBuilder::new("done").status(WorkOrderStatus::Completed).step("2", 8.0).build(),
        ],
    );
    let api = &state.scheduling_api;

    // 40h / 16h => 3 天
    assert_eq!(
        api.estimated_completion_at("a", &WorkOrderFilter::all(), base_now()).unwrap(),
        Some(base_now() + Duration::days(3))
    );
    assert_eq!(
        api.estimated_completion_at("done", &WorkOrderFilter::all(), base_now()).unwrap(),
        None
    );
}

#[test]
fn test_unknown_department_fails_under_strict_policy() {
    let work_orders = vec![WorkOrderBuilder::new("a").step("404", 8.0).build()];

    let lenient = create_state(two_departments(), work_orders.clone());
    let results = lenient
        .scheduling_api
        .schedule_work_orders_at(&WorkOrderFilter::all(), base_now())
        .unwrap();
    assert!(results[0].step_schedules.is_empty());

    let strict = create_strict_state(two_departments(), work_orders);
    let err = strict
        .scheduling_api
        .schedule_work_orders_at(&WorkOrderFilter::all(), base_now())
        .unwrap_err();
    assert!(matches!(err, ApiError::Engine(_)));
}

// ==========================================
// 日排程
// ==========================================

#[test]
fn test_daily_schedules_follow_projection_window() {
    let state = create_state(
        two_departments(),
        vec![WorkOrderBuilder::new("a").step("1", 20.0).step("2", 32.0).build()],
    );
    let api = &state.scheduling_api;

    let days = api.get_daily_schedules_at(&WorkOrderFilter::all(), base_now()).unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0].date, base_today());
    assert_eq!(days[0].available_hours, 24.0);

    for d in &days {
        let sum: f64 = d.work_order_steps.iter().map(|s| s.hours).sum();
        assert!((sum - d.scheduled_hours).abs() < 1e-9);
        assert_eq!(d.variance, d.available_hours - d.scheduled_hours);
    }
    let total: f64 = days.iter().map(|d| d.scheduled_hours).sum();
    assert!((total - 52.0).abs() < 1e-9);

    state
        .config_manager
        .update_value(config_keys::PROJECTION_WINDOW_DAYS, "7")
        .unwrap();
    let days = api.get_daily_schedules_at(&WorkOrderFilter::all(), base_now()).unwrap();
    assert_eq!(days.len(), 7);
}

// ==========================================
// 维护
// ==========================================

#[test]
fn test_add_work_order_assigns_id_and_created_at() {
    let state = create_state(two_departments(), vec![]);
    let api = &state.scheduling_api;

    let created = api
        .add_work_order_at(
            new_work_order("Pump Rebuild", vec![ProcessStep::new("s1", "Prep", "1", 8.0, 1)]),
            base_now(),
        )
        .unwrap();
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created.created_at, base_now());

    let stored = api.get_work_order(&created.id).unwrap().unwrap();
    assert_eq!(stored, created);

    let second = api
        .add_work_order(new_work_order("Pump Rebuild", vec![]))
        .unwrap();
    assert_ne!(second.id, created.id);
}

#[test]
fn test_add_work_order_validation() {
    let state = create_state(two_departments(), vec![]);
    let api = &state.scheduling_api;

    let err = api.add_work_order(new_work_order("  ", vec![])).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = api
        .add_work_order(new_work_order(
            "Bad hours",
            vec![ProcessStep::new("s1", "Prep", "1", -1.0, 1)],
        ))
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));

    let err = api
        .add_work_order(new_work_order(
            "Duplicate steps",
            vec![
                ProcessStep::new("s1", "Prep", "1", 1.0, 1),
                ProcessStep::new("s1", "Weld", "1", 1.0, 2),
            ],
        ))
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));

    assert!(api.list_work_orders(&WorkOrderFilter::all()).unwrap().is_empty());
}

#[test]
fn test_update_work_order_partial_fields() {
    let state = create_state(
        two_departments(),
        vec![WorkOrderBuilder::new("a").priority(Priority::Low).step("1", 8.0).build()],
    );
    let api = &state.scheduling_api;

    let patch = WorkOrderPatch {
        priority: Some(Priority::Urgent),
        due_date: Some(day(10)),
        ..Default::default()
    };
    let updated = api.update_work_order("a", &patch).unwrap().unwrap();
    assert_eq!(updated.priority, Priority::Urgent);
    assert_eq!(updated.due_date, Some(day(10)));
    assert_eq!(updated.steps.len(), 1);

    let updated = api
        .update_work_order_status("a", WorkOrderStatus::InProgress)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, WorkOrderStatus::InProgress);
    assert_eq!(updated.priority, Priority::Urgent);
}

#[test]
fn test_update_unknown_work_order_follows_policy() {
    let lenient = create_state(two_departments(), vec![]);
    let result = lenient
        .scheduling_api
        .update_work_order("ghost", &WorkOrderPatch::with_priority(Priority::High))
        .unwrap();
    assert!(result.is_none());

    let strict = create_strict_state(two_departments(), vec![]);
    let err = strict
        .scheduling_api
        .update_work_order("ghost", &WorkOrderPatch::with_priority(Priority::High))
        .unwrap_err();
    match err {
        ApiError::NotFound(msg) => assert!(msg.contains("ghost")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_batch_update_reports_updated_and_skipped() {
    let state = create_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").build(),
            WorkOrderBuilder::new("b").build(),
        ],
    );
    let api = &state.scheduling_api;

    let ids = vec!["a".to_string(), "missing".to_string(), "b".to_string()];
    let report = api
        .batch_update_work_orders(&ids, &WorkOrderPatch::with_status(WorkOrderStatus::OnHold))
        .unwrap();
    assert_eq!(report.updated, vec!["a", "b"]);
    assert_eq!(report.skipped, vec!["missing"]);

    let on_hold = WorkOrderFilter {
        status: Some(WorkOrderStatus::OnHold),
        ..Default::default()
    };
    assert_eq!(api.list_work_orders(&on_hold).unwrap().len(), 2);

    let err = api
        .batch_update_work_orders(&ids, &WorkOrderPatch::default())
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_update_work_order_rejects_invalid_hours_and_steps() {
    let state = create_state(
        two_departments(),
        vec![WorkOrderBuilder::new("a").step("1", 8.0).build()],
    );
    let api = &state.scheduling_api;

    let negative = WorkOrderPatch {
        steps: Some(vec![ProcessStep::new("a-1", "Prep", "1", -40.0, 1)]),
        ..Default::default()
    };
    let err = api.update_work_order("a", &negative).unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));

    let duplicated = WorkOrderPatch {
        steps: Some(vec![
            ProcessStep::new("a-1", "Prep", "1", 4.0, 1),
            ProcessStep::new("a-1", "Weld", "1", 4.0, 2),
        ]),
        ..Default::default()
    };
    let err = api.update_work_order("a", &duplicated).unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));

    let err = api
        .update_work_order(
            "a",
            &WorkOrderPatch {
                total_hours: Some(f64::NAN),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));

    // 批量更新同样校验
    let err = api
        .batch_update_work_orders(&["a".to_string()], &negative)
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));

    // 拒绝后工单与产能保持原样
    let stored = api.get_work_order("a").unwrap().unwrap();
    assert_eq!(stored.steps[0].estimated_hours, 8.0);
    let capacity = api.get_capacity_data(&WorkOrderFilter::all()).unwrap();
    assert_eq!(capacity[0].used_capacity, 8.0);
    assert_eq!(capacity[0].utilization_percentage, 20.0);
}

#[test]
fn test_batch_update_stops_at_first_missing_under_strict_policy() {
    let state = create_strict_state(
        two_departments(),
        vec![
            WorkOrderBuilder::new("a").build(),
            WorkOrderBuilder::new("b").build(),
        ],
    );
    let api = &state.scheduling_api;

    let ids = vec!["a".to_string(), "missing".to_string(), "b".to_string()];
    let err = api
        .batch_update_work_orders(&ids, &WorkOrderPatch::with_status(WorkOrderStatus::OnHold))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // 已写入的保留, 之后的不再写入
    assert_eq!(api.get_work_order("a").unwrap().unwrap().status, WorkOrderStatus::OnHold);
    assert_eq!(api.get_work_order("b").unwrap().unwrap().status, WorkOrderStatus::Pending);
}

#[test]
fn test_huge_step_hours_surface_as_engine_error() {
    let state = create_state(two_departments(), vec![]);

    let created = state
        .scheduling_api
        .add_work_order_at(
            new_work_order("Huge", vec![ProcessStep::new("s1", "Prep", "1", 1.0e9, 1)]),
            base_now(),
        )
        .unwrap();

    let err = state
        .scheduling_api
        .schedule_work_orders_at(&WorkOrderFilter::all(), base_now())
        .unwrap_err();
    match err {
        ApiError::Engine(EngineError::ScheduleOverflow { work_order_id, step_id }) => {
            assert_eq!(work_order_id, created.id);
            assert_eq!(step_id.as_deref(), Some("s1"));
        }
        other => panic!("Expected ScheduleOverflow, got {:?}", other),
    }

    let err = state
        .optimization_api
        .generate_optimized_schedule_at(&WorkOrderFilter::all(), base_today())
        .unwrap_err();
    assert!(matches!(err, ApiError::Engine(EngineError::ScheduleOverflow { .. })));
}
