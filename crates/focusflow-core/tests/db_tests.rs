use focusflow_core::{Block, Database, FlowError, Intensity, Mode, Mood, Plan};
use jiff::Timestamp;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn sample_plan(id: &str, task: &str) -> Plan {
    Plan {
        id: id.to_string(),
        task: task.to_string(),
        total_minutes: 30,
        created_at: Timestamp::now(),
        mode: Mode::Coding,
        intensity: Intensity::Grind,
        focus_tip: "Close the browser.".to_string(),
        energy_level: "high".to_string(),
        blocks: vec![
            Block::new("Implement", 25, "Write the parser", "hard"),
            Block::new("Review", 5, "Read the diff", "easy"),
        ],
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.list_plan_summaries(10).unwrap().is_empty());
}

#[test]
fn test_insert_and_get_plan() {
    let (_temp_file, mut db) = create_test_db();
    let plan = sample_plan("plan-a", "Parser");

    db.insert_plan(&plan).expect("Failed to insert plan");

    let loaded = db
        .get_plan("plan-a")
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(loaded, plan);
    assert!(db.plan_exists("plan-a").unwrap());
    assert!(!db.plan_exists("plan-b").unwrap());
    assert!(db.get_plan("plan-b").unwrap().is_none());
}

#[test]
fn test_duplicate_plan_id_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_plan(&sample_plan("plan-a", "Parser")).unwrap();

    let err = db.insert_plan(&sample_plan("plan-a", "Other")).unwrap_err();
    assert!(matches!(err, FlowError::Database { .. }));
}

#[test]
fn test_summaries_newest_first() {
    let (_temp_file, mut db) = create_test_db();
    for (id, task) in [("plan-1", "One"), ("plan-2", "Two"), ("plan-3", "Three")] {
        db.insert_plan(&sample_plan(id, task)).unwrap();
    }

    let summaries = db.list_plan_summaries(10).unwrap();
    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["plan-3", "plan-2", "plan-1"]);
    assert_eq!(summaries[0].mode, Mode::Coding);
    assert_eq!(summaries[0].intensity, Intensity::Grind);

    let recent = db.list_recent_plans(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].task, "Three");
    assert_eq!(recent[0].blocks.len(), 2);
}

#[test]
fn test_reflections_per_plan() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_plan(&sample_plan("plan-a", "A")).unwrap();
    db.insert_plan(&sample_plan("plan-b", "B")).unwrap();

    let first = db.insert_reflection("plan-a", Mood::Great, "flow").unwrap();
    let second = db.insert_reflection("plan-a", Mood::Tired, "").unwrap();
    let other = db.insert_reflection("plan-b", Mood::Ok, "meh").unwrap();
    assert_ne!(first.id, second.id);

    assert_eq!(db.list_reflections("plan-a").unwrap(), vec![first.clone(), second]);
    let both = db
        .list_reflections_for_plans(&["plan-b".to_string(), "plan-a".to_string()])
        .unwrap();
    assert_eq!(both.len(), 3);
    assert_eq!(both[0], first);
    assert_eq!(both[2], other);
    assert!(db.list_reflections_for_plans(&[]).unwrap().is_empty());
}

#[test]
fn test_reflection_for_unknown_plan() {
    let (_temp_file, mut db) = create_test_db();
    let err = db
        .insert_reflection("plan-missing", Mood::Ok, "")
        .unwrap_err();
    assert!(matches!(err, FlowError::PlanNotFound { ref id } if id == "plan-missing"));
}

#[test]
fn test_migrates_plans_without_labels() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE plans (
                id TEXT PRIMARY KEY,
                created_at TEXT NOT NULL,
                task TEXT NOT NULL,
                total_minutes INTEGER NOT NULL,
                data TEXT NOT NULL
            );",
        )
        .unwrap();
        let data = serde_json::json!({
            "id": "plan-old",
            "task": "Legacy",
            "total_minutes": 30,
            "created_at": "2024-05-01T10:00:00Z",
            "plan": [{"title": "Work", "minutes": 30}]
        });
        conn.execute(
            "INSERT INTO plans (id, created_at, task, total_minutes, data) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params!["plan-old", "2024-05-01T10:00:00Z", "Legacy", 30, data.to_string()],
        )
        .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("Failed to migrate database");
    let summaries = db.list_plan_summaries(10).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].mode, Mode::Study);
    assert_eq!(summaries[0].intensity, Intensity::Normal);

    let plan = db.get_plan("plan-old").unwrap().unwrap();
    assert_eq!(plan.blocks[0].minutes, 30);
    assert!(plan.focus_tip.is_empty());
}
