//! Weekly summary over recent plans and their reflections.
//!
//! The summary is a deterministic aggregate: counts and minutes, the most
//! frequent tasks, and a few themes and suggestions derived from the mix of
//! modes, intensities, session lengths and reflection moods.

use std::collections::HashMap;

use crate::models::{Intensity, Mode, Mood, Plan, Reflection, WeeklySummary};

/// Upper bound for each list in a summary.
pub const MAX_ITEMS: usize = 5;

const LONG_SESSION_MINUTES: u32 = 90;
const SHORT_SESSION_MINUTES: u32 = 30;

/// Summarizes `plans` (newest first) and the reflections recorded for them.
pub fn summarize(plans: &[Plan], reflections: &[Reflection]) -> WeeklySummary {
    if plans.is_empty() {
        return WeeklySummary {
            total_sessions: 0,
            total_minutes: 0,
            top_tasks: Vec::new(),
            themes: vec!["No data yet".to_string()],
            suggestions: vec!["Generate a few plans and run some sessions first.".to_string()],
        };
    }

    let stats = Stats::collect(plans, reflections);
    let mut summary = WeeklySummary {
        total_sessions: stats.sessions,
        total_minutes: stats.minutes,
        top_tasks: stats.top_tasks(),
        themes: stats.themes(),
        suggestions: stats.suggestions(),
    };
    summary.top_tasks.truncate(MAX_ITEMS);
    summary.themes.truncate(MAX_ITEMS);
    summary.suggestions.truncate(MAX_ITEMS);
    summary
}

struct TaskCount {
    name: String,
    count: u32,
    first_seen: usize,
}

struct Stats {
    sessions: u32,
    minutes: u32,
    tasks: Vec<TaskCount>,
    modes: [(Mode, u32); 3],
    grind: u32,
    chill: u32,
    moods: HashMap<Mood, u32>,
    reflections: u32,
}

impl Stats {
    fn collect(plans: &[Plan], reflections: &[Reflection]) -> Self {
        let mut tasks: Vec<TaskCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut modes = [(Mode::Study, 0), (Mode::Coding, 0), (Mode::Admin, 0)];
        let (mut grind, mut chill) = (0, 0);

        for (position, plan) in plans.iter().enumerate() {
            let key = plan.task.trim().to_lowercase();
            match index.get(&key) {
                Some(&i) => tasks[i].count += 1,
                None => {
                    index.insert(key, tasks.len());
                    tasks.push(TaskCount {
                        name: plan.task.trim().to_string(),
                        count: 1,
                        first_seen: position,
                    });
                }
            }
            if let Some(slot) = modes.iter_mut().find(|(mode, _)| *mode == plan.mode) {
                slot.1 += 1;
            }
            match plan.intensity {
                Intensity::Grind => grind += 1,
                Intensity::Chill => chill += 1,
                Intensity::Normal => {}
            }
        }

        let mut moods = HashMap::new();
        for reflection in reflections {
            *moods.entry(reflection.mood).or_insert(0) += 1;
        }

        Self {
            sessions: u32::try_from(plans.len()).unwrap_or(u32::MAX),
            minutes: plans.iter().fold(0, |sum: u32, p| sum.saturating_add(p.total_minutes)),
            tasks,
            modes,
            grind,
            chill,
            moods,
            reflections: u32::try_from(reflections.len()).unwrap_or(u32::MAX),
        }
    }

    fn average_minutes(&self) -> u32 {
        self.minutes / self.sessions.max(1)
    }

    fn majority(&self, count: u32, of: u32) -> bool {
        of > 0 && count * 2 > of
    }

    fn mood_count(&self, mood: Mood) -> u32 {
        self.moods.get(&mood).copied().unwrap_or(0)
    }

    fn mostly_tired(&self) -> bool {
        self.majority(self.mood_count(Mood::Tired), self.reflections)
    }

    fn scattered(&self) -> bool {
        self.sessions >= 3 && self.tasks.len() == self.sessions as usize
    }

    fn top_tasks(&self) -> Vec<String> {
        let mut ranked: Vec<&TaskCount> = self.tasks.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen)));
        ranked.into_iter().map(|t| t.name.clone()).collect()
    }

    fn themes(&self) -> Vec<String> {
        let mut themes = Vec::new();

        let (lead, lead_count) = self
            .modes
            .iter()
            .fold((Mode::Study, 0), |best, &(mode, count)| {
                if count > best.1 { (mode, count) } else { best }
            });
        themes.push(format!(
            "{} sessions lead ({} of {})",
            lead.label(),
            lead_count,
            self.sessions
        ));

        let average = self.average_minutes();
        themes.push(if average >= LONG_SESSION_MINUTES {
            format!("Long sessions (avg {average} min)")
        } else if average <= SHORT_SESSION_MINUTES {
            format!("Short sessions (avg {average} min)")
        } else {
            format!("Balanced session length (avg {average} min)")
        });

        if self.majority(self.grind, self.sessions) {
            themes.push("Mostly grind intensity".to_string());
        } else if self.majority(self.chill, self.sessions) {
            themes.push("Mostly chill intensity".to_string());
        }

        if let Some(top) = self.tasks.iter().filter(|t| t.count >= 3).max_by_key(|t| t.count) {
            themes.push(format!("Recurring focus on {}", top.name));
        } else if self.scattered() {
            themes.push("Many different tasks".to_string());
        }

        if self.reflections > 0 {
            themes.push(if self.mostly_tired() {
                "Often tired after sessions".to_string()
            } else if self.mood_count(Mood::Great) * 2 >= self.reflections {
                "Sessions often feel great".to_string()
            } else {
                "Mixed energy after sessions".to_string()
            });
        }

        themes
    }

    fn suggestions(&self) -> Vec<String> {
        let mut suggestions = Vec::new();
        let average = self.average_minutes();

        if self.mostly_tired() {
            suggestions
                .push("Try chill intensity or shorter blocks when you feel drained.".to_string());
        } else if self.majority(self.grind, self.sessions) {
            suggestions
                .push("Keep the grind sustainable: schedule a chill session this week.".to_string());
        }
        if average >= LONG_SESSION_MINUTES {
            suggestions.push(
                "Split long sessions into two plans with a real break between them.".to_string(),
            );
        } else if average <= SHORT_SESSION_MINUTES && self.sessions >= 3 {
            suggestions.push("Try one longer deep-work session to build momentum.".to_string());
        }
        if self.scattered() {
            suggestions.push(
                "Batch similar tasks into one admin session to reduce switching.".to_string(),
            );
        }
        if self.reflections == 0 {
            suggestions.push(
                "Submit a quick reflection after each session to track your energy.".to_string(),
            );
        }
        if suggestions.is_empty() {
            suggestions.push(
                "Keep the rhythm: plan your next session at the same time tomorrow.".to_string(),
            );
        }

        suggestions
    }
}
