use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DistributionStatus {
    #[default]
    Completed,
    Failed,
}

impl Display for DistributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            DistributionStatus::Completed => "completed",
            DistributionStatus::Failed => "failed",
        };
        write!(f, "{}", status)
    }
}

impl DistributionStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "completed" => DistributionStatus::Completed,
            "failed" => DistributionStatus::Failed,
            _ => DistributionStatus::Failed,
        }
    }
}
