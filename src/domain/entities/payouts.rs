use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::payouts;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payouts)]
pub struct PayoutEntity {
    pub id: i64,
    pub developer_id: i64,
    pub amount: i64,
    pub month: String,
    pub status: String,
    pub payment_method: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payouts)]
pub struct InsertPayoutEntity {
    pub developer_id: i64,
    pub amount: i64,
    pub month: String,
    pub status: String,
    pub payment_method: String,
    pub notes: Option<String>,
}
