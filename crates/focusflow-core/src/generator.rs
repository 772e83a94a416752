//! Local plan generation.
//!
//! Builds a block template from the task, the time budget, the kind of work
//! and the requested pace, then fits the block durations to the budget. Plans
//! produced elsewhere (see [`crate::Planner::import_plan`]) go through the
//! same [`fit_to_total`] pass.

use log::debug;

use crate::{
    error::{FlowError, Result},
    models::{Block, Intensity, Mode, PlanDraft, MAX_BLOCK_MINUTES},
    params::GeneratePlan,
};

/// Largest mismatch, in minutes, tolerated between block sum and budget.
pub const FIT_TOLERANCE_MINUTES: u32 = 3;

/// Largest budget a plan may ask for.
pub const MAX_PLAN_MINUTES: u32 = MAX_BLOCK_MINUTES;

/// Shortest deep-work stretch a generated plan contains.
const MIN_DEEP_WORK: u32 = 20;
const MIN_REVIEW: u32 = 5;
/// Chill plans at least this long get a second break inside deep work.
const SPLIT_DEEP_WORK_FROM: u32 = 50;

/// Checks a generation request.
///
/// # Errors
///
/// Returns `FlowError::InvalidInput` for a blank task or a budget outside
/// `1..=MAX_PLAN_MINUTES`.
pub fn validate_request(params: &GeneratePlan) -> Result<()> {
    if params.task.trim().is_empty() {
        return Err(FlowError::invalid_input("task").with_reason("Task cannot be empty"));
    }
    validate_total(params.total_minutes)
}

pub(crate) fn validate_total(total_minutes: u32) -> Result<()> {
    if total_minutes == 0 {
        return Err(FlowError::invalid_input("total_minutes")
            .with_reason("Total minutes must be greater than zero"));
    }
    if total_minutes > MAX_PLAN_MINUTES {
        return Err(FlowError::invalid_input("total_minutes")
            .with_reason(format!("Total minutes cannot exceed {MAX_PLAN_MINUTES}")));
    }
    Ok(())
}

/// Drafts a plan: warm-up, deep work, break and review.
///
/// ```rust
/// use focusflow_core::{generator::draft_plan, params::GeneratePlan};
///
/// let draft = draft_plan(&GeneratePlan {
///     task: "Graph algorithms".to_string(),
///     total_minutes: 60,
///     ..Default::default()
/// });
/// let minutes: Vec<u32> = draft.blocks.iter().map(|b| b.minutes).collect();
/// assert_eq!(minutes, vec![5, 45, 5, 5]);
/// ```
pub fn draft_plan(params: &GeneratePlan) -> PlanDraft {
    let task = params.task.trim();
    let total = params.total_minutes;
    let pace = Pace::of(params.intensity);
    let text = Wording::of(params.mode, task);

    let split = params.intensity == Intensity::Chill && total >= SPLIT_DEEP_WORK_FROM;
    let breaks = if split { 2 } else { 1 };
    let overhead = pace.warmup + breaks * pace.break_minutes + MIN_REVIEW;
    let deep_work = total.saturating_sub(overhead).max(MIN_DEEP_WORK);
    let review = total
        .saturating_sub(pace.warmup + deep_work + breaks * pace.break_minutes)
        .max(MIN_REVIEW);

    let mut blocks = vec![Block::new("Warm up", pace.warmup, text.warmup, "easy")];
    if split {
        let first = deep_work / 2;
        blocks.push(Block::new(
            "Deep work block 1",
            first,
            text.deep_work.clone(),
            pace.deep_difficulty,
        ));
        blocks.push(Block::new("Quick break", pace.break_minutes, BREAK_DETAILS, "easy"));
        blocks.push(Block::new(
            "Deep work block 2",
            deep_work - first,
            text.deep_work,
            pace.deep_difficulty,
        ));
    } else {
        blocks.push(Block::new(
            "Deep work block",
            deep_work,
            text.deep_work,
            pace.deep_difficulty,
        ));
    }
    blocks.push(Block::new("Quick break", pace.break_minutes, BREAK_DETAILS, "easy"));
    blocks.push(Block::new("Review", review, text.review, "medium"));

    fit_to_total(&mut blocks, total);

    PlanDraft {
        task: task.to_string(),
        total_minutes: total,
        mode: params.mode,
        intensity: params.intensity,
        focus_tip: pace.focus_tip.to_string(),
        energy_level: pace.energy_level.to_string(),
        blocks,
    }
}

/// Makes block durations consistent with the budget.
///
/// Every block gets at least one minute. When the sum then misses `total` by
/// more than [`FIT_TOLERANCE_MINUTES`], the last block absorbs the
/// difference without dropping below one minute.
pub fn fit_to_total(blocks: &mut [Block], total: u32) {
    let Some(last_index) = blocks.len().checked_sub(1) else {
        return;
    };

    for block in &mut *blocks {
        block.minutes = block.minutes.max(1);
    }

    let sum: i64 = blocks.iter().map(|b| i64::from(b.minutes)).sum();
    let diff = i64::from(total) - sum;
    if diff.unsigned_abs() > u64::from(FIT_TOLERANCE_MINUTES) {
        let last = &mut blocks[last_index];
        let adjusted = (i64::from(last.minutes) + diff).clamp(1, i64::from(u32::MAX));
        debug!(
            "Adjusting last block from {} to {} to match total_minutes={}",
            last.minutes, adjusted, total
        );
        last.minutes = u32::try_from(adjusted).unwrap_or(u32::MAX);
    }
}

const BREAK_DETAILS: &str = "Stretch, hydrate, short reset.";

struct Pace {
    warmup: u32,
    break_minutes: u32,
    deep_difficulty: &'static str,
    focus_tip: &'static str,
    energy_level: &'static str,
}

impl Pace {
    fn of(intensity: Intensity) -> Self {
        match intensity {
            Intensity::Chill => Self {
                warmup: 10,
                break_minutes: 10,
                deep_difficulty: "medium",
                focus_tip: "Go easy on yourself, steady beats intense.",
                energy_level: "low",
            },
            Intensity::Normal => Self {
                warmup: 5,
                break_minutes: 5,
                deep_difficulty: "hard",
                focus_tip: "Stay consistent, small wins add up.",
                energy_level: "medium",
            },
            Intensity::Grind => Self {
                warmup: 5,
                break_minutes: 3,
                deep_difficulty: "hard",
                focus_tip: "Protect the deep-work block: phone away, notifications off.",
                energy_level: "high",
            },
        }
    }
}

struct Wording {
    warmup: &'static str,
    deep_work: String,
    review: &'static str,
}

impl Wording {
    fn of(mode: Mode, task: &str) -> Self {
        match mode {
            Mode::Study => Self {
                warmup: "Review notes or outline key concepts.",
                deep_work: format!("Read and take notes on {task}, then try practice questions."),
                review: "Summarize progress & next steps.",
            },
            Mode::Coding => Self {
                warmup: "Re-read the spec and the code you are about to touch.",
                deep_work: format!("Implement and debug {task} in small, working steps."),
                review: "Run the tests, tidy up and note what is left.",
            },
            Mode::Admin => Self {
                warmup: "List the small tasks and order them by urgency.",
                deep_work: format!("Batch through {task}: email, forms, quick decisions."),
                review: "Clear leftovers and plan the next batch.",
            },
        }
    }
}
