use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::developers;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = developers)]
pub struct DeveloperEntity {
    pub id: i64,
    pub user_id: Uuid,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
