use super::{GoalType, Timestamp};
use crate::core::goals::{GoalProgress, progress_percent};
use serde::{Deserialize, Serialize};

/// A user-defined progress target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    #[serde(rename = "type")]
    pub kind: GoalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Goal {
    pub fn percent(&self) -> u8 {
        progress_percent(self.current, self.target)
    }

    pub fn is_achieved(&self) -> bool {
        self.percent() >= 100
    }

    pub fn progress(&self) -> GoalProgress {
        GoalProgress::of(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    pub user_id: String,
    pub title: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    #[serde(rename = "type")]
    pub kind: GoalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
}

impl NewGoal {
    pub fn into_goal(self, id: String, created_at: Timestamp) -> Goal {
        Goal {
            id,
            user_id: self.user_id,
            title: self.title,
            target: self.target,
            current: self.current,
            unit: self.unit,
            kind: self.kind,
            deadline: self.deadline,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<GoalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
}

impl GoalPatch {
    pub fn is_empty(&self) -> bool {
        *self == GoalPatch::default()
    }

    pub fn apply(&self, g: &mut Goal) {
        if let Some(v) = &self.title {
            g.title = v.clone();
        }
        if let Some(v) = self.target {
            g.target = v;
        }
        if let Some(v) = self.current {
            g.current = v;
        }
        if let Some(v) = &self.unit {
            g.unit = v.clone();
        }
        if let Some(v) = self.kind {
            g.kind = v;
        }
        if let Some(v) = self.deadline {
            g.deadline = Some(v);
        }
    }
}
