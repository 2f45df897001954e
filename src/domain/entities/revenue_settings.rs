use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::revenue_settings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = revenue_settings)]
pub struct RevenueSettingsEntity {
    pub id: i64,
    pub platform_fee_percentage: i32,
    pub minimum_payout_amount: i64,
    pub payout_schedule: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = revenue_settings)]
pub struct InsertRevenueSettingsEntity {
    pub platform_fee_percentage: i32,
    pub minimum_payout_amount: i64,
    pub payout_schedule: String,
}
