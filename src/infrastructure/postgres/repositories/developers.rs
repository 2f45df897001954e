use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use uuid::Uuid;

use crate::{
    domain::{
        entities::developers::DeveloperEntity, repositories::developers::DeveloperRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::developers},
};

pub struct DeveloperPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DeveloperPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DeveloperRepository for DeveloperPostgres {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<DeveloperEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let developer = developers::table
            .filter(developers::user_id.eq(user_id))
            .select(DeveloperEntity::as_select())
            .first::<DeveloperEntity>(&mut conn)
            .optional()?;

        Ok(developer)
    }
}
