use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::revenue;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = revenue)]
pub struct RevenueEntity {
    pub id: i64,
    pub developer_id: i64,
    pub month: String,
    pub amount: i64,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = revenue)]
pub struct InsertRevenueEntity {
    pub developer_id: i64,
    pub month: String,
    pub amount: i64,
}
