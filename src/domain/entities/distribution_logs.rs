use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::revenue_distribution_logs;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = revenue_distribution_logs)]
pub struct DistributionLogEntity {
    pub id: i64,
    pub month: String,
    pub total_revenue: i64,
    pub total_distributed: i64,
    pub platform_fee: i64,
    pub developer_count: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = revenue_distribution_logs)]
pub struct InsertDistributionLogEntity {
    pub month: String,
    pub total_revenue: i64,
    pub total_distributed: i64,
    pub platform_fee: i64,
    pub developer_count: i32,
    pub status: String,
    pub notes: Option<String>,
}
