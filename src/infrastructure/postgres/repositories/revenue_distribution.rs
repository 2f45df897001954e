use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{
    Connection, RunQueryDsl, delete, dsl::sum, insert_into, prelude::*, sql_types::Integer,
};

use crate::{
    domain::{
        entities::distribution_logs::DistributionLogEntity,
        repositories::revenue_distribution::RevenueDistributionRepository,
        value_objects::{
            enums::payout_statuses::PayoutStatus,
            revenue_distribution::{NewDistribution, WebsiteUsage},
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{
            api_keys, developer_earnings, developers, payouts, revenue,
            revenue_distribution_logs, time_tracking, users, websites,
        },
    },
};

// Namespace for the month-keyed advisory lock, so allocator runs never
// collide with other advisory-lock users of the same database.
const REVENUE_LOCK_SPACE: i32 = 0x4A61_6A72;

pub struct RevenueDistributionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl RevenueDistributionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RevenueDistributionRepository for RevenueDistributionPostgres {
    async fn total_premium_time(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let total = time_tracking::table
            .inner_join(users::table)
            .filter(time_tracking::occurred_at.ge(start))
            .filter(time_tracking::occurred_at.lt(end))
            .filter(users::is_subscribed.eq(true))
            .select(sum(time_tracking::duration_seconds))
            .first::<Option<i64>>(&mut conn)?;

        Ok(total.unwrap_or(0))
    }

    async fn premium_usage_by_website(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WebsiteUsage>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = time_tracking::table
            .inner_join(users::table)
            .inner_join(
                websites::table.inner_join(api_keys::table.inner_join(developers::table)),
            )
            .filter(time_tracking::occurred_at.ge(start))
            .filter(time_tracking::occurred_at.lt(end))
            .filter(users::is_subscribed.eq(true))
            .group_by((developers::id, websites::id))
            .select((
                developers::id,
                websites::id,
                sum(time_tracking::duration_seconds),
            ))
            .load::<(i64, i64, Option<i64>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(developer_id, website_id, total_time)| WebsiteUsage {
                developer_id,
                website_id,
                total_time: total_time.unwrap_or(0),
            })
            .collect())
    }

    async fn replace_month_distribution(
        &self,
        distribution: NewDistribution,
    ) -> Result<DistributionLogEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let month = distribution.month.to_string();

        let log = conn.transaction::<DistributionLogEntity, anyhow::Error, _>(|conn| {
            diesel::sql_query("SELECT pg_advisory_xact_lock($1, $2)")
                .bind::<Integer, _>(REVENUE_LOCK_SPACE)
                .bind::<Integer, _>(distribution.month.lock_key())
                .execute(conn)?;

            delete(developer_earnings::table.filter(developer_earnings::month.eq(&month)))
                .execute(conn)?;
            delete(revenue::table.filter(revenue::month.eq(&month))).execute(conn)?;
            // Paid or in-flight payouts survive a recalculation; only pending
            // obligations are rewritten.
            delete(
                payouts::table
                    .filter(payouts::month.eq(&month))
                    .filter(payouts::status.eq(PayoutStatus::Pending.to_string())),
            )
            .execute(conn)?;
            delete(
                revenue_distribution_logs::table
                    .filter(revenue_distribution_logs::month.eq(&month)),
            )
            .execute(conn)?;

            if !distribution.earnings.is_empty() {
                insert_into(developer_earnings::table)
                    .values(&distribution.earnings)
                    .execute(conn)?;
            }
            if !distribution.revenues.is_empty() {
                insert_into(revenue::table)
                    .values(&distribution.revenues)
                    .execute(conn)?;
            }
            if !distribution.payouts.is_empty() {
                insert_into(payouts::table)
                    .values(&distribution.payouts)
                    .execute(conn)?;
            }

            let log = insert_into(revenue_distribution_logs::table)
                .values(&distribution.log)
                .returning(DistributionLogEntity::as_returning())
                .get_result::<DistributionLogEntity>(conn)?;

            Ok(log)
        })?;

        Ok(log)
    }
}
