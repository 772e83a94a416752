mod common;

use common::create_test_planner;
use focusflow_core::{
    Coordinator, GeneratePlan, Id, Intensity, ListHistory, Mode, Mood, Phase, PlanDraft,
    SummarizeWeek, TickOutcome,
};

#[tokio::test]
async fn test_generated_plan_runs_to_reflection() {
    let (_temp_dir, planner) = create_test_planner().await;

    let draft: PlanDraft = serde_json::from_str(
        r#"{"task": "Flashcards", "total_minutes": 2, "mode": "study", "plan": [
            {"title": "Deck A", "minutes": 1, "difficulty": "easy"},
            {"title": "Deck B", "minutes": 1, "difficulty": "easy"}
        ]}"#,
    )
    .unwrap();
    let stored = planner.import_plan(draft).await.expect("Failed to import plan");

    let mut coordinator = Coordinator::new(planner);
    coordinator
        .load_plan_by_id(&Id {
            id: stored.id.clone(),
        })
        .await
        .expect("Failed to load plan");

    let token = coordinator.start().unwrap();
    let mut outcomes = Vec::new();
    while coordinator.phase() == Phase::Running {
        let outcome = coordinator.tick(token);
        if outcome != TickOutcome::Counted {
            outcomes.push(outcome);
        }
    }
    assert_eq!(
        outcomes,
        vec![TickOutcome::Advanced { from: 0, to: 1 }, TickOutcome::Completed]
    );
    assert_eq!(coordinator.view().unwrap().progress_percent(), 100);

    coordinator.begin_reflection().unwrap();
    let reflection = coordinator
        .submit_reflection(Some(Mood::Great), "all cards done")
        .await
        .expect("Failed to submit reflection");
    assert_eq!(reflection.plan_id, stored.id);
    assert_eq!(coordinator.phase(), Phase::Reflected);

    let saved = coordinator
        .collaborators()
        .list_reflections(&Id { id: stored.id })
        .await
        .unwrap();
    assert_eq!(saved, vec![reflection]);

    let summary = coordinator
        .weekly_summary(&SummarizeWeek::default())
        .await
        .unwrap();
    assert_eq!(summary.total_sessions, 1);
    assert_eq!(summary.top_tasks, vec!["Flashcards"]);
    assert!(summary
        .themes
        .contains(&"Sessions often feel great".to_string()));
}

#[tokio::test]
async fn test_missing_plan_is_collaborator_failure() {
    let (_temp_dir, planner) = create_test_planner().await;
    let mut coordinator = Coordinator::new(planner);

    let err = coordinator
        .load_plan_by_id(&Id {
            id: "plan-nope".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_collaborator_failure());
    assert!(err.to_string().contains("plan-nope"));
    assert!(coordinator.plan().is_none());
}

#[tokio::test]
async fn test_generate_through_coordinator_updates_history() {
    let (_temp_dir, planner) = create_test_planner().await;
    let mut coordinator = Coordinator::new(planner);

    let plan = coordinator
        .generate_plan(&GeneratePlan {
            task: "Quarterly report".to_string(),
            total_minutes: 50,
            mode: Mode::Admin,
            intensity: Intensity::Chill,
        })
        .await
        .expect("Failed to generate plan");
    assert_eq!(plan.blocks.len(), 6);
    assert_eq!(plan.energy_level, "low");

    let history = coordinator.history(&ListHistory::default()).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, plan.id);
    assert_eq!(history[0].intensity, Intensity::Chill);
}
