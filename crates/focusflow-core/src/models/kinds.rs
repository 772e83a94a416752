//! Label enumerations for plans and reflections.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of work a plan is shaped for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Reading, notes, practice questions
    #[default]
    Study,

    /// Specs, implementation, debugging, refactoring
    Coding,

    /// Batching small tasks, email, planning
    Admin,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "study" => Ok(Mode::Study),
            "coding" => Ok(Mode::Coding),
            "admin" => Ok(Mode::Admin),
            _ => Err(format!("Invalid mode: {s}")),
        }
    }
}

impl Mode {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Study => "study",
            Mode::Coding => "coding",
            Mode::Admin => "admin",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Study => "Study",
            Mode::Coding => "Coding",
            Mode::Admin => "Admin",
        }
    }
}

/// How hard a plan pushes: break length and deep-work share.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// More breaks, easier blocks
    Chill,

    /// Balanced blocks
    #[default]
    Normal,

    /// Longer deep-work blocks, fewer and shorter breaks
    Grind,
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chill" => Ok(Intensity::Chill),
            "normal" => Ok(Intensity::Normal),
            "grind" => Ok(Intensity::Grind),
            _ => Err(format!("Invalid intensity: {s}")),
        }
    }
}

impl Intensity {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Chill => "chill",
            Intensity::Normal => "normal",
            Intensity::Grind => "grind",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Chill => "Chill",
            Intensity::Normal => "Normal",
            Intensity::Grind => "Grind",
        }
    }
}

/// How the user felt once a session ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Ok,
    Tired,
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "great" => Ok(Mood::Great),
            "ok" | "okay" => Ok(Mood::Ok),
            "tired" => Ok(Mood::Tired),
            _ => Err(format!("Invalid mood: {s}")),
        }
    }
}

impl Mood {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Ok => "ok",
            Mood::Tired => "tired",
        }
    }

    /// Every mood, in the order they are offered to the user.
    pub const ALL: [Mood; 3] = [Mood::Great, Mood::Ok, Mood::Tired];
}
