use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub priority: String,         // free-form; "high", "medium", "low" by convention
    pub due_date: Option<String>, // ISO 8601: YYYY-MM-DD, stored verbatim
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    pub fn new(id: u64, description: String) -> Self {
        Self {
            id,
            description,
            priority: "medium".to_string(),
            due_date: None,
            completed: false,
            created_at: utils::timestamp_now(),
        }
    }
}

/// Completion-status filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "pending" => Ok(Filter::Pending),
            "completed" => Ok(Filter::Completed),
            _ => Err(format!(
                "unknown filter '{}' (expected all, pending or completed)",
                s
            )),
        }
    }
}
