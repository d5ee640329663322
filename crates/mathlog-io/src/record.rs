//! Typed attempt records
//!
//! One `AttemptRecord` per practice-problem attempt. Categorical columns are
//! closed enums; `is_correct` stays a `bool` and is never coerced to a number
//! here.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operation practised by a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s.trim())
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

/// Difficulty label of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| format!("unknown difficulty level '{}'", s))
    }
}

/// A single practice-problem attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub student_id: String,
    pub problem: String,
    pub operation: Operation,
    pub difficulty_level: Difficulty,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_correct: bool,
    pub time_spent_seconds: f64,
    pub attempts_needed: u32,
    pub session_number: u32,
}

impl AttemptRecord {
    /// Check the per-record invariants
    pub fn validate(&self) -> Result<(), String> {
        if !self.time_spent_seconds.is_finite() || self.time_spent_seconds < 0.0 {
            return Err(format!(
                "time_spent_seconds must be a non-negative number, got {}",
                self.time_spent_seconds
            ));
        }
        if self.attempts_needed < 1 {
            return Err("attempts_needed must be at least 1".to_string());
        }
        if self.session_number < 1 {
            return Err("session_number must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Parse a boolean cell as written by spreadsheet and dataframe tools
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean '{}'", raw)))
}
