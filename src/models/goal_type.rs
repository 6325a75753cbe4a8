use serde::{Deserialize, Serialize};
use std::fmt;

/// Goal category. Drives the accent color in listings; anything the store
/// sends that is not a known category is treated as `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalType {
    Workout,
    Distance,
    Calories,
    Steps,
    Weight,
    Custom,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Workout => "workout",
            GoalType::Distance => "distance",
            GoalType::Calories => "calories",
            GoalType::Steps => "steps",
            GoalType::Weight => "weight",
            GoalType::Custom => "custom",
        }
    }

    pub fn from_db_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "workout" => GoalType::Workout,
            "distance" => GoalType::Distance,
            "calories" => GoalType::Calories,
            "steps" => GoalType::Steps,
            "weight" => GoalType::Weight,
            _ => GoalType::Custom,
        }
    }
}

impl From<String> for GoalType {
    fn from(s: String) -> Self {
        GoalType::from_db_str(&s)
    }
}

impl From<GoalType> for String {
    fn from(t: GoalType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
