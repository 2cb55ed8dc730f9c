// ==========================================
// 工单排产系统 - 演示场景数据
// ==========================================
// 六个部门 + 十个待排产工单 (8 月末至 9 月中旬, 制造超负荷场景)
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::department::Department;
use crate::domain::types::{Priority, WorkOrderStatus, WorkType};
use crate::domain::work_order::{ProcessStep, WorkOrder};

/// 示例部门
pub fn sample_departments() -> Vec<Department> {
    vec![
        Department::new("1", "Fire-ex", 160.0, 160.0),
        Department::new("2", "Firex-TX", 120.0, 120.0),
        Department::new("3", "Oxygen", 140.0, 140.0),
        Department::new("4", "Oxygen-TX", 100.0, 100.0),
        Department::new("5", "Survival", 180.0, 180.0),
        Department::new("6", "Survival-TX", 90.0, 90.0),
    ]
}

/// 示例工单
pub fn sample_work_orders() -> Vec<WorkOrder> {
    vec![
        SampleOrder {
            id: "1",
            numbers: ("WO-2024-001", "RO-X200-045"),
            customer_name: "Acme Manufacturing",
            title: "Engine Block Assembly",
            description: "Complete engine block assembly for Model X200",
            priority: Priority::High,
            department: "Fire-ex",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 15), (2024, 9, 5), (2024, 8, 28)),
            steps: &[
                ("Raw Material Prep", "1", 8.0),
                ("Machining Operations", "1", 16.0),
                ("Welding Frame", "4", 12.0),
                ("Final Assembly", "2", 6.0),
                ("Quality Inspection", "3", 3.0),
            ],
        },
        SampleOrder {
            id: "2",
            numbers: ("WO-2024-002", "RO-Y150-132"),
            customer_name: "Global Aerospace Corp",
            title: "Turbine Housing Repair",
            description: "Critical repair of turbine housing for emergency flight systems",
            priority: Priority::Urgent,
            department: "Firex-TX",
            work_type: WorkType::NonContract,
            dates: ((2024, 8, 16), (2024, 8, 30), (2024, 8, 27)),
            steps: &[
                ("Disassembly", "2", 8.0),
                ("Component Machining", "2", 24.0),
                ("Reassembly", "2", 16.0),
                ("Testing & QC", "2", 24.0),
            ],
        },
        SampleOrder {
            id: "3",
            numbers: ("WO-2024-003", "RO-Z300-789"),
            customer_name: "TechFlow Industries",
            title: "Oxygen System Overhaul",
            description: "Complete overhaul of oxygen system components",
            priority: Priority::Urgent,
            department: "Oxygen",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 18), (2024, 9, 2), (2024, 9, 1)),
            steps: &[
                ("Component Analysis", "3", 16.0),
                ("Machining", "3", 32.0),
                ("Assembly", "3", 24.0),
                ("Testing", "3", 24.0),
            ],
        },
        SampleOrder {
            id: "4",
            numbers: ("WO-2024-004", "RO-O400-123"),
            customer_name: "Maritime Safety Corp",
            title: "Emergency Oxygen Tank Repair",
            description: "Critical repair for emergency oxygen systems",
            priority: Priority::Urgent,
            department: "Oxygen-TX",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 19), (2024, 9, 3), (2024, 9, 2)),
            steps: &[
                ("Pressure Testing", "4", 16.0),
                ("Welding Repairs", "4", 32.0),
                ("Valve Replacement", "4", 24.0),
                ("Final Testing", "4", 16.0),
            ],
        },
        SampleOrder {
            id: "5",
            numbers: ("WO-2024-005", "RO-S500-567"),
            customer_name: "Emergency Response Inc",
            title: "Life Vest System Overhaul",
            description: "Complete overhaul of automated life vest systems",
            priority: Priority::High,
            department: "Survival",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 20), (2024, 9, 5), (2024, 9, 3)),
            steps: &[
                ("Component Inspection", "5", 24.0),
                ("Fabric Repair", "5", 40.0),
                ("Inflation System", "5", 32.0),
                ("Quality Testing", "5", 24.0),
            ],
        },
        SampleOrder {
            id: "6",
            numbers: ("WO-2024-006", "RO-ST600-890"),
            customer_name: "Safety Systems Ltd",
            title: "Survival Kit Transmission Update",
            description: "Update and repair survival kit transmission systems",
            priority: Priority::High,
            department: "Survival-TX",
            work_type: WorkType::NonContract,
            dates: ((2024, 8, 21), (2024, 9, 6), (2024, 9, 4)),
            steps: &[
                ("Electronics Testing", "6", 20.0),
                ("Circuit Repair", "6", 36.0),
                ("Signal Testing", "6", 28.0),
                ("Calibration", "6", 20.0),
            ],
        },
        SampleOrder {
            id: "7",
            numbers: ("WO-2024-007", "RO-F700-111"),
            customer_name: "Industrial Fire Systems",
            title: "Fire Suppression System Rebuild",
            description: "Complete rebuild of industrial fire suppression system",
            priority: Priority::Urgent,
            department: "Fire-ex",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 22), (2024, 9, 10), (2024, 9, 8)),
            steps: &[
                ("System Analysis", "1", 16.0),
                ("Component Replacement", "1", 32.0),
                ("Pressure Testing", "1", 20.0),
                ("Certification", "1", 12.0),
            ],
        },
        SampleOrder {
            id: "8",
            numbers: ("WO-2024-008", "RO-FT800-222"),
            customer_name: "Airport Safety Division",
            title: "Fire Suppression Transmission Repair",
            description: "Critical transmission system repair for airport fire systems",
            priority: Priority::Urgent,
            department: "Firex-TX",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 23), (2024, 9, 12), (2024, 9, 10)),
            steps: &[
                ("Diagnostic Testing", "2", 24.0),
                ("Transmission Rebuild", "2", 48.0),
                ("Performance Testing", "2", 24.0),
                ("Final Calibration", "2", 16.0),
            ],
        },
        SampleOrder {
            id: "9",
            numbers: ("WO-2024-009", "RO-O900-333"),
            customer_name: "Medical Equipment Co",
            title: "Hospital Oxygen System Repair",
            description: "Emergency repair of hospital oxygen delivery system",
            priority: Priority::Urgent,
            department: "Oxygen",
            work_type: WorkType::Contractual,
            dates: ((2024, 8, 24), (2024, 9, 12), (2024, 9, 11)),
            steps: &[
                ("System Inspection", "3", 32.0),
                ("Valve Replacement", "3", 48.0),
                ("Pressure Calibration", "3", 32.0),
                ("Safety Testing", "3", 16.0),
            ],
        },
        SampleOrder {
            id: "10",
            numbers: ("WO-2024-010", "RO-OT1000-444"),
            customer_name: "Emergency Services",
            title: "Mobile Oxygen Transmission Unit",
            description: "Repair of mobile oxygen transmission for ambulances",
            priority: Priority::High,
            department: "Oxygen-TX",
            work_type: WorkType::NonContract,
            dates: ((2024, 8, 25), (2024, 9, 15), (2024, 9, 13)),
            steps: &[
                ("Unit Disassembly", "4", 16.0),
                ("Component Repair", "4", 40.0),
                ("Transmission Testing", "4", 24.0),
                ("Mobile Testing", "4", 16.0),
            ],
        },
    ]
    .into_iter()
    .map(SampleOrder::build)
    .collect()
}

type Ymd = (i32, u32, u32);

/// 示例工单描述 (工序 id 按 "{工单id}-{序号}" 生成)
struct SampleOrder {
    id: &'static str,
    numbers: (&'static str, &'static str),
    customer_name: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    department: &'static str,
    work_type: WorkType,
    dates: (Ymd, Ymd, Ymd), // created / due / scheduled
    steps: &'static [(&'static str, &'static str, f64)],
}

impl SampleOrder {
    fn build(self) -> WorkOrder {
        let steps: Vec<ProcessStep> = self
            .steps
            .iter()
            .zip(1..)
            .map(|(&(name, dept, hours), order)| {
                ProcessStep::new(&format!("{}-{}", self.id, order), name, dept, hours, order)
            })
            .collect();
        let (created, due, scheduled) = self.dates;

        WorkOrder {
            id: self.id.to_string(),
            work_order_number: self.numbers.0.to_string(),
            repair_order_number: self.numbers.1.to_string(),
            customer_name: self.customer_name.to_string(),
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            priority: self.priority,
            status: WorkOrderStatus::Pending,
            department: self.department.to_string(),
            work_type: self.work_type,
            total_hours: steps.iter().map(|s| s.estimated_hours).sum(),
            created_at: midnight(created),
            due_date: ymd(due),
            scheduled_date: ymd(scheduled),
            steps,
        }
    }
}

fn ymd((y, m, d): Ymd) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn midnight(date: Ymd) -> NaiveDateTime {
    ymd(date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
