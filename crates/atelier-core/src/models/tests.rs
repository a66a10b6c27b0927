#[cfg(test)]
mod model_tests {
    use crate::models::{Id, KindRules, Milestone, MilestoneKind, Task, TaskStatus};

    fn create_test_milestone(progress: u8, is_done: bool, kind: MilestoneKind) -> Milestone {
        Milestone {
            id: Id::new("m-1"),
            sequence_order: 1,
            name: "Test Milestone".to_string(),
            description: None,
            progress,
            is_done,
            current_task: None,
            kind,
        }
    }

    #[test]
    fn test_task_status_parse_known_values() {
        assert_eq!(TaskStatus::parse("PENDING"), TaskStatus::Pending);
        assert_eq!(TaskStatus::parse("IN_PROGRESS"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("in-progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("InProgress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("done"), TaskStatus::Done);
        assert_eq!(TaskStatus::parse("PASS"), TaskStatus::Pass);
        assert_eq!(TaskStatus::parse("FAIL"), TaskStatus::Fail);
        assert_eq!(TaskStatus::parse("Completed"), TaskStatus::Completed);
        assert_eq!(TaskStatus::parse("CANCELLED"), TaskStatus::Cancelled);
    }

    #[test]
    fn test_task_status_unknown_is_preserved() {
        let status = TaskStatus::parse("ON_HOLD");
        assert_eq!(status, TaskStatus::Unknown("ON_HOLD".to_string()));
        assert_eq!(status.as_str(), "ON_HOLD");
        assert!(!status.is_completed());
    }

    #[test]
    fn test_task_status_completion_set() {
        let completed = [
            TaskStatus::Done,
            TaskStatus::Pass,
            TaskStatus::Fail,
            TaskStatus::Completed,
        ];
        let open = [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Cancelled,
            TaskStatus::Unknown(String::new()),
        ];
        assert!(completed.iter().all(TaskStatus::is_completed));
        assert!(!open.iter().any(TaskStatus::is_completed));
    }

    #[test]
    fn test_task_status_serde() {
        let status: TaskStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"IN_PROGRESS\"");

        let odd: TaskStatus = serde_json::from_str("\"REVIEW\"").unwrap();
        assert_eq!(serde_json::to_string(&odd).unwrap(), "\"REVIEW\"");
    }

    #[test]
    fn test_task_status_with_icon() {
        assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
        assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
        assert_eq!(TaskStatus::Cancelled.with_icon(), "⊘ Cancelled");
    }

    #[test]
    fn test_task_deserializes_with_missing_fields() {
        let task: Task = serde_json::from_str(r#"{ "name": "Press" }"#).unwrap();
        assert_eq!(task.id, Id::default());
        assert_eq!(task.sequence_order, 0);
        assert_eq!(task.detail.status, TaskStatus::Pending);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_id_from_number_and_string() {
        let from_number: Id = serde_json::from_str("17").unwrap();
        let from_string: Id = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"17\"");
    }

    #[test]
    fn test_id_accepts_any_json_number() {
        let large: Id = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(large, Id::new("18446744073709551615"));

        let negative: Id = serde_json::from_str("-4").unwrap();
        assert_eq!(negative.as_str(), "-4");

        let fractional: Id = serde_json::from_str("12.5").unwrap();
        assert_eq!(fractional.as_str(), "12.5");
    }

    #[test]
    fn test_kind_classification() {
        let rules = KindRules::default();
        assert_eq!(rules.classify("Quality Check"), MilestoneKind::QualityCheck);
        assert_eq!(rules.classify("pre-quality check"), MilestoneKind::QualityCheck);
        assert_eq!(
            rules.classify("Quality Check Failed"),
            MilestoneKind::QualityCheckRework
        );
        assert_eq!(rules.classify("Quality"), MilestoneKind::Normal);
        assert!(!MilestoneKind::Normal.is_quality_related());
        assert!(MilestoneKind::QualityCheckRework.is_quality_related());
    }

    #[test]
    fn test_kind_serde() {
        let kind: MilestoneKind = serde_json::from_str("\"QUALITY_CHECK_REWORK\"").unwrap();
        assert_eq!(kind, MilestoneKind::QualityCheckRework);
    }

    #[test]
    fn test_milestone_completion_signals() {
        let full = create_test_milestone(100, true, MilestoneKind::Normal);
        assert!(full.is_fully_done());
        assert!(!full.is_in_progress());

        let lagging = create_test_milestone(100, false, MilestoneKind::Normal);
        assert!(!lagging.is_fully_done());
        assert!(lagging.is_in_progress());
        assert!(!lagging.is_quality_check_pending());

        let done_early = create_test_milestone(80, true, MilestoneKind::Normal);
        assert!(!done_early.is_fully_done());
        assert!(!done_early.is_in_progress());

        let fresh = create_test_milestone(0, false, MilestoneKind::Normal);
        assert!(fresh.is_not_started());
    }

    #[test]
    fn test_quality_check_pending() {
        let pending = create_test_milestone(100, false, MilestoneKind::QualityCheck);
        assert!(pending.is_quality_check_pending());

        let passed = create_test_milestone(100, true, MilestoneKind::QualityCheck);
        assert!(!passed.is_quality_check_pending());

        let running = create_test_milestone(70, false, MilestoneKind::QualityCheck);
        assert!(!running.is_quality_check_pending());

        let rework = create_test_milestone(100, false, MilestoneKind::QualityCheckRework);
        assert!(!rework.is_quality_check_pending());
    }
}
