use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum PayoutStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl Display for PayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Completed => "completed",
            PayoutStatus::Failed => "failed",
        };
        write!(f, "{}", status)
    }
}

impl PayoutStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "pending" => PayoutStatus::Pending,
            "processing" => PayoutStatus::Processing,
            "completed" => PayoutStatus::Completed,
            "failed" => PayoutStatus::Failed,
            _ => PayoutStatus::Pending,
        }
    }
}
