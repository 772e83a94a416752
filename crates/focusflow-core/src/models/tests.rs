#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{Block, Intensity, Mode, Mood, Plan, PlanDraft, PlanSummary};

    fn create_test_plan(blocks: Vec<Block>) -> Plan {
        Plan {
            id: "plan-42".to_string(),
            task: "Study CPS 305".to_string(),
            total_minutes: 30,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            mode: Mode::Coding,
            intensity: Intensity::Grind,
            focus_tip: "One thing at a time.".to_string(),
            energy_level: "high".to_string(),
            blocks,
        }
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("Coding".parse::<Mode>().unwrap(), Mode::Coding);
        assert_eq!("grind".parse::<Intensity>().unwrap(), Intensity::Grind);
        assert_eq!("okay".parse::<Mood>().unwrap(), Mood::Ok);
        assert_eq!(" Tired ".parse::<Mood>().unwrap(), Mood::Tired);
        assert!("fast".parse::<Intensity>().is_err());
        assert!("".parse::<Mood>().is_err());
    }

    #[test]
    fn test_label_round_trip_through_as_str() {
        for mode in [Mode::Study, Mode::Coding, Mode::Admin] {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_plan_serializes_blocks_under_plan_key() {
        let plan = create_test_plan(vec![Block::new("Warm up", 5, "Outline", "easy")]);
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["plan"][0]["title"], "Warm up");
        assert_eq!(json["mode"], "coding");
        assert_eq!(json["intensity"], "grind");
        assert!(json.get("blocks").is_none());
    }

    #[test]
    fn test_draft_defaults_missing_fields() {
        let draft: PlanDraft = serde_json::from_str(
            r#"{"task": "Inbox zero", "total_minutes": 20, "plan": [{"title": "Triage", "minutes": 20}]}"#,
        )
        .unwrap();

        assert_eq!(draft.mode, Mode::Study);
        assert_eq!(draft.intensity, Intensity::Normal);
        assert_eq!(draft.blocks[0].details, "");

        let plan = draft.into_plan("plan-7".to_string(), Timestamp::UNIX_EPOCH);
        assert_eq!(plan.id, "plan-7");
        assert_eq!(plan.blocks.len(), 1);
    }

    #[test]
    fn test_ensure_runnable_rejects_empty_and_zero_minute_blocks() {
        let empty = create_test_plan(vec![]);
        assert!(empty.ensure_runnable().unwrap_err().to_string().contains("no blocks"));

        let zero = create_test_plan(vec![
            Block::new("Fine", 5, "", "easy"),
            Block::new("Broken", 0, "", "easy"),
        ]);
        let err = zero.ensure_runnable().unwrap_err();
        assert!(err.to_string().contains("block 2 ('Broken')"));
    }

    #[test]
    fn test_summary_from_plan() {
        let plan = create_test_plan(vec![Block::new("Deep work", 30, "", "hard")]);
        let summary = PlanSummary::from(&plan);

        assert_eq!(summary.id, "plan-42");
        assert_eq!(summary.total_minutes, 30);
        assert_eq!(summary.mode, Mode::Coding);
        assert_eq!(summary.created_at, plan.created_at);
    }

    #[test]
    fn test_block_seconds() {
        assert_eq!(Block::new("A", 25, "", "").seconds(), 1500);
    }
}
