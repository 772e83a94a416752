//! Reflection capture for an ended session.

use log::debug;

use crate::{
    error::{FlowError, Result},
    models::{Mood, Reflection},
    params::SubmitReflection,
};

/// In-memory reflection being filled in by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionDraft {
    pub plan_id: String,
    pub mood: Option<Mood>,
    pub notes: String,
}

#[derive(Debug, Default)]
enum Slot {
    #[default]
    Empty,
    Drafting(ReflectionDraft),
    Submitted(Reflection),
}

/// Holds at most one reflection: a draft while the user writes it, then the
/// persisted, read-only record.
#[derive(Debug, Default)]
pub struct ReflectionCapture {
    slot: Slot,
}

impl ReflectionCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the draft for `plan_id`, reusing an existing draft.
    pub(crate) fn open(&mut self, plan_id: &str) {
        if matches!(&self.slot, Slot::Drafting(draft) if draft.plan_id == plan_id) {
            return;
        }
        self.slot = Slot::Drafting(ReflectionDraft {
            plan_id: plan_id.to_string(),
            mood: None,
            notes: String::new(),
        });
    }

    pub fn draft(&self) -> Option<&ReflectionDraft> {
        match &self.slot {
            Slot::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ReflectionDraft> {
        match &mut self.slot {
            Slot::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    /// The submitted record, once persistence accepted it.
    pub fn record(&self) -> Option<&Reflection> {
        match &self.slot {
            Slot::Submitted(record) => Some(record),
            _ => None,
        }
    }

    /// Folds `mood` and `notes` into the draft and builds the submission.
    ///
    /// A mood given here overrides the draft's; without either, nothing is
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` when no draft is open or no mood
    /// was chosen.
    pub fn prepare(&mut self, mood: Option<Mood>, notes: &str) -> Result<SubmitReflection> {
        let draft = match &mut self.slot {
            Slot::Drafting(draft) => draft,
            Slot::Submitted(_) => {
                return Err(FlowError::precondition("submit reflection")
                    .because("a reflection was already submitted for this session"));
            }
            Slot::Empty => {
                return Err(FlowError::precondition("submit reflection")
                    .because("the session has not ended"));
            }
        };

        if mood.is_some() {
            draft.mood = mood;
        }
        draft.notes = notes.to_string();

        let mood = draft.mood.ok_or_else(|| {
            FlowError::precondition("submit reflection").because("a mood is required")
        })?;
        Ok(SubmitReflection {
            plan_id: draft.plan_id.clone(),
            mood,
            notes: draft.notes.clone(),
        })
    }

    /// Replaces the draft with the persisted record.
    pub(crate) fn complete(&mut self, record: Reflection) {
        debug!("Reflection {} stored for plan {}", record.id, record.plan_id);
        self.slot = Slot::Submitted(record);
    }

    pub fn clear(&mut self) {
        self.slot = Slot::Empty;
    }
}
