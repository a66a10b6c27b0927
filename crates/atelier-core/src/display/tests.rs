use crate::{
    display::{DecisionView, ResolvedOrderItem},
    models::{CurrentTask, Id, Milestone, MilestoneKind, Task, TaskDetail, TaskMap, TaskStatus},
    resolver::{resolve, RenderDecision},
    snapshot::OrderItemSnapshot,
};

fn milestone(name: &str, order: i64, progress: u8, is_done: bool) -> Milestone {
    Milestone {
        id: Id::new(format!("m{order}")),
        sequence_order: order,
        name: name.to_string(),
        description: None,
        progress,
        is_done,
        current_task: None,
        kind: MilestoneKind::Normal,
    }
}

fn done_task(id: &str, order: i64) -> Task {
    Task {
        id: Id::new(id),
        name: format!("Task {id}"),
        sequence_order: order,
        detail: TaskDetail {
            status: TaskStatus::Done,
            ..Default::default()
        },
    }
}

#[test]
fn test_milestone_display() {
    let mut sewing = milestone("Sewing", 2, 40, false);
    sewing.current_task = Some(CurrentTask {
        name: "Hemming".to_string(),
    });
    sewing.description = Some("Main body assembly".to_string());

    let output = sewing.to_string();
    assert!(output.contains("### 2. Sewing (➤ 40%)"));
    assert!(output.contains("- Current task: Hemming"));
    assert!(output.contains("Main body assembly"));
    assert!(!output.contains("- Kind:"));
}

#[test]
fn test_quality_check_milestone_display() {
    let mut qc = milestone("Quality Check", 3, 100, false);
    qc.kind = MilestoneKind::QualityCheck;

    let output = qc.to_string();
    assert!(output.contains("### 3. Quality Check (⧗ Awaiting verdict)"));
    assert!(output.contains("- Kind: quality check"));
}

#[test]
fn test_task_display_with_annotations() {
    let task = Task {
        id: Id::new("t1"),
        name: "Seam inspection".to_string(),
        sequence_order: 1,
        detail: TaskDetail {
            status: TaskStatus::Fail,
            note: Some("Loose stitching on left sleeve".to_string()),
            image: Some("https://cdn.example.com/qc/1.jpg".to_string()),
            charge_id: Some(Id::new("9")),
            charge_name: Some("Mira".to_string()),
        },
    };

    let output = task.to_string();
    assert!(output.contains("- Seam inspection (✗ Fail) @Mira"));
    assert!(output.contains("  - Note: Loose stitching on left sleeve"));
    assert!(output.contains("  - Image: https://cdn.example.com/qc/1.jpg"));
}

#[test]
fn test_current_decision_display() {
    let milestones = vec![
        milestone("Cutting", 1, 100, true),
        milestone("Sewing", 2, 40, false),
    ];
    let mut tasks = TaskMap::new();
    tasks.insert(Id::new("m1"), vec![done_task("cut", 1)]);
    tasks.insert(Id::new("m2"), vec![done_task("sew", 1)]);

    let output = resolve(&milestones, &tasks).to_string();
    assert!(output.contains("## Current milestone"));
    assert!(output.contains("### 2. Sewing"));
    assert!(output.contains("- Theme: normal"));
    assert!(output.contains("#### Completed tasks"));
    assert!(output.contains("- Task sew (✓ Done)"));
    assert!(output.contains("## Finished milestones"));
    assert!(output.contains("#### 1. Cutting"));
}

#[test]
fn test_all_done_collapsed_and_expanded() {
    let milestones = vec![
        milestone("Cutting", 1, 100, true),
        milestone("Sewing", 2, 100, true),
        milestone("Packing", 3, 100, true),
    ];
    let mut tasks = TaskMap::new();
    for (id, prefix) in [("m1", "cut"), ("m2", "sew"), ("m3", "pack")] {
        tasks.insert(
            Id::new(id),
            (1..=3).map(|n| done_task(&format!("{prefix}{n}"), n)).collect(),
        );
    }
    let decision = resolve(&milestones, &tasks);

    let collapsed = DecisionView::new(&decision).to_string();
    assert!(collapsed.contains("Completed tasks: 9"));
    assert!(collapsed.contains("#### 2. Sewing"));
    assert!(!collapsed.contains("#### 3. Packing"));
    assert!(!collapsed.contains("Task cut3"));
    assert!(collapsed.contains("_5 more completed task(s) hidden._"));

    let expanded = DecisionView::new(&decision).expanded(true).to_string();
    assert!(expanded.contains("#### 3. Packing"));
    assert!(expanded.contains("Task cut3"));
    assert!(!expanded.contains("hidden"));
}

#[test]
fn test_all_done_without_tasks() {
    let milestones = vec![milestone("Cutting", 1, 100, true)];
    let output = resolve(&milestones, &TaskMap::new()).to_string();
    assert!(output.contains("## All milestones done"));
    assert!(output.contains("No completed tasks."));
}

#[test]
fn test_resolved_order_item_header() {
    let snapshot = OrderItemSnapshot {
        order_item_id: Some(Id::new("OI-17")),
        ..Default::default()
    };
    let decision = RenderDecision::Empty;
    let output = ResolvedOrderItem {
        snapshot: &snapshot,
        decision: &decision,
        expanded: false,
    }
    .to_string();

    assert!(output.starts_with("# Order item OI-17\n"));
    assert!(output.contains("- Milestones: 0"));
    assert!(!output.contains("- Fetched:"));
    assert!(output.contains("No milestones assigned."));
}
