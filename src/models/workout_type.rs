use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of workout. The set is open ended: unknown values coming from the
/// store are kept, lowercased and trimmed, in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkoutType {
    Running,
    Cycling,
    Gym,
    Swimming,
    Walking,
    Yoga,
    Hiking,
    Other,
    Custom(String),
}

impl WorkoutType {
    /// Types offered by the submission form, in display order.
    pub const KNOWN: [WorkoutType; 8] = [
        WorkoutType::Running,
        WorkoutType::Cycling,
        WorkoutType::Gym,
        WorkoutType::Swimming,
        WorkoutType::Walking,
        WorkoutType::Yoga,
        WorkoutType::Hiking,
        WorkoutType::Other,
    ];

    /// Convert enum → DB string (always lowercase)
    pub fn as_str(&self) -> &str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
            WorkoutType::Gym => "gym",
            WorkoutType::Swimming => "swimming",
            WorkoutType::Walking => "walking",
            WorkoutType::Yoga => "yoga",
            WorkoutType::Hiking => "hiking",
            WorkoutType::Other => "other",
            WorkoutType::Custom(s) => s,
        }
    }

    /// Convert DB or user string → enum. Case and surrounding blanks are ignored.
    pub fn from_db_str(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "running" => WorkoutType::Running,
            "cycling" => WorkoutType::Cycling,
            "gym" => WorkoutType::Gym,
            "swimming" => WorkoutType::Swimming,
            "walking" => WorkoutType::Walking,
            "yoga" => WorkoutType::Yoga,
            "hiking" => WorkoutType::Hiking,
            "other" => WorkoutType::Other,
            _ => WorkoutType::Custom(lower),
        }
    }

    /// Capitalized label used in listings ("Running", "Gym", ...).
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for WorkoutType {
    fn from(s: String) -> Self {
        WorkoutType::from_db_str(&s)
    }
}

impl From<WorkoutType> for String {
    fn from(t: WorkoutType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
