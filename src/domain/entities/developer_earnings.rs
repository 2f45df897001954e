use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::developer_earnings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = developer_earnings)]
pub struct DeveloperEarningsEntity {
    pub id: i64,
    pub developer_id: i64,
    pub website_id: i64,
    pub month: String,
    pub total_time: i64,
    pub premium_time: i64,
    pub earnings: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = developer_earnings)]
pub struct InsertDeveloperEarningsEntity {
    pub developer_id: i64,
    pub website_id: i64,
    pub month: String,
    pub total_time: i64,
    pub premium_time: i64,
    pub earnings: i64,
}
