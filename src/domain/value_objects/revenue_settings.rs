use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::enums::payout_schedules::PayoutSchedule;

/// Platform-wide defaults applied whenever no settings row has been persisted.
pub const DEFAULT_REVENUE_SETTINGS: RevenueSettingsModel = RevenueSettingsModel {
    platform_fee_percentage: 30,
    minimum_payout_amount: 1000,
    payout_schedule: PayoutSchedule::Monthly,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RevenueSettingsModel {
    pub platform_fee_percentage: i32,
    pub minimum_payout_amount: i64,
    pub payout_schedule: PayoutSchedule,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRevenueSettingsModel {
    pub platform_fee_percentage: Option<i32>,
    pub minimum_payout_amount: Option<i64>,
    pub payout_schedule: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsValidationError {
    #[error("platform fee percentage must be between 0 and 100: {0}")]
    FeeOutOfRange(i32),
    #[error("minimum payout amount must not be negative: {0}")]
    NegativeMinimumPayout(i64),
    #[error("payout schedule must be weekly, biweekly or monthly: {0}")]
    UnknownSchedule(String),
}

impl UpdateRevenueSettingsModel {
    /// Applies this update on top of `current`, validating every changed field.
    pub fn apply_to(
        &self,
        current: RevenueSettingsModel,
    ) -> Result<RevenueSettingsModel, SettingsValidationError> {
        let platform_fee_percentage = match self.platform_fee_percentage {
            Some(fee) if !(0..=100).contains(&fee) => {
                return Err(SettingsValidationError::FeeOutOfRange(fee));
            }
            Some(fee) => fee,
            None => current.platform_fee_percentage,
        };

        let minimum_payout_amount = match self.minimum_payout_amount {
            Some(amount) if amount < 0 => {
                return Err(SettingsValidationError::NegativeMinimumPayout(amount));
            }
            Some(amount) => amount,
            None => current.minimum_payout_amount,
        };

        let payout_schedule = match self.payout_schedule.as_deref() {
            Some(raw) => PayoutSchedule::parse(raw)
                .ok_or_else(|| SettingsValidationError::UnknownSchedule(raw.to_string()))?,
            None => current.payout_schedule,
        };

        Ok(RevenueSettingsModel {
            platform_fee_percentage,
            minimum_payout_amount,
            payout_schedule,
        })
    }
}
