use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};

use crate::{
    domain::{
        entities::revenue_settings::{InsertRevenueSettingsEntity, RevenueSettingsEntity},
        repositories::revenue_settings::RevenueSettingsRepository,
        value_objects::{
            enums::payout_schedules::PayoutSchedule, revenue_settings::RevenueSettingsModel,
        },
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::revenue_settings},
};

pub struct RevenueSettingsPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl RevenueSettingsPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

fn to_model(entity: RevenueSettingsEntity) -> RevenueSettingsModel {
    RevenueSettingsModel {
        platform_fee_percentage: entity.platform_fee_percentage,
        minimum_payout_amount: entity.minimum_payout_amount,
        payout_schedule: PayoutSchedule::from_str(&entity.payout_schedule),
    }
}

#[async_trait]
impl RevenueSettingsRepository for RevenueSettingsPostgres {
    async fn get(&self) -> Result<Option<RevenueSettingsModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entity = revenue_settings::table
            .select(RevenueSettingsEntity::as_select())
            .first::<RevenueSettingsEntity>(&mut conn)
            .optional()?;

        Ok(entity.map(to_model))
    }

    async fn upsert(&self, settings: RevenueSettingsModel) -> Result<RevenueSettingsModel> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let existing = revenue_settings::table
            .select(RevenueSettingsEntity::as_select())
            .first::<RevenueSettingsEntity>(&mut conn)
            .optional()?;

        let saved = match existing {
            Some(entity) => update(revenue_settings::table.filter(revenue_settings::id.eq(entity.id)))
                .set((
                    revenue_settings::platform_fee_percentage.eq(settings.platform_fee_percentage),
                    revenue_settings::minimum_payout_amount.eq(settings.minimum_payout_amount),
                    revenue_settings::payout_schedule.eq(settings.payout_schedule.to_string()),
                    revenue_settings::updated_at.eq(Utc::now()),
                ))
                .returning(RevenueSettingsEntity::as_returning())
                .get_result::<RevenueSettingsEntity>(&mut conn)?,
            None => insert_into(revenue_settings::table)
                .values(&InsertRevenueSettingsEntity {
                    platform_fee_percentage: settings.platform_fee_percentage,
                    minimum_payout_amount: settings.minimum_payout_amount,
                    payout_schedule: settings.payout_schedule.to_string(),
                })
                .returning(RevenueSettingsEntity::as_returning())
                .get_result::<RevenueSettingsEntity>(&mut conn)?,
        };

        Ok(to_model(saved))
    }
}
