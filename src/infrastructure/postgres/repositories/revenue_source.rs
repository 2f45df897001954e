use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use tracing::debug;

use crate::{
    domain::{
        repositories::revenue_source::RevenueSource,
        value_objects::revenue_distribution::MONTHLY_SUBSCRIPTION_PRICE_CENTS,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::users},
};

/// Estimates the month's gross revenue from the current subscriber count.
/// A stand-in until billing records exist; swapped out by implementing
/// `RevenueSource` over the real payment store.
pub struct SubscriptionPoolRevenue {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPoolRevenue {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RevenueSource for SubscriptionPoolRevenue {
    async fn total_revenue_for_month(&self, month: &str) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let subscriber_count = users::table
            .filter(users::is_subscribed.eq(true))
            .count()
            .get_result::<i64>(&mut conn)?;

        debug!(
            month,
            subscriber_count, "revenue_source: estimating pool from subscriber count"
        );

        Ok(subscriber_count * MONTHLY_SUBSCRIPTION_PRICE_CENTS)
    }
}
