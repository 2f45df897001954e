use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PayoutSchedule {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
}

impl Display for PayoutSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let schedule = match self {
            PayoutSchedule::Weekly => "weekly",
            PayoutSchedule::Biweekly => "biweekly",
            PayoutSchedule::Monthly => "monthly",
        };
        write!(f, "{}", schedule)
    }
}

impl PayoutSchedule {
    /// Strict parse; unknown values are rejected rather than defaulted so
    /// settings updates cannot smuggle in a bogus schedule.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(PayoutSchedule::Weekly),
            "biweekly" => Some(PayoutSchedule::Biweekly),
            "monthly" => Some(PayoutSchedule::Monthly),
            _ => None,
        }
    }

    pub fn from_str(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }
}
