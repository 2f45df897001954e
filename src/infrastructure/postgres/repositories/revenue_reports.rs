use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};

use crate::{
    domain::{
        entities::{
            distribution_logs::DistributionLogEntity, payouts::PayoutEntity,
            revenue::RevenueEntity,
        },
        repositories::revenue_reports::RevenueReportsRepository,
        value_objects::revenue_reports::{TopDeveloper, WebsiteEarningsDetail},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{developer_earnings, developers, payouts, revenue, revenue_distribution_logs, websites},
    },
};

pub struct RevenueReportsPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl RevenueReportsPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RevenueReportsRepository for RevenueReportsPostgres {
    async fn earnings_history(&self, developer_id: i64, limit: i64) -> Result<Vec<RevenueEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = revenue::table
            .filter(revenue::developer_id.eq(developer_id))
            .order(revenue::month.desc())
            .limit(limit)
            .select(RevenueEntity::as_select())
            .load::<RevenueEntity>(&mut conn)?;

        Ok(results)
    }

    async fn earnings_details(
        &self,
        developer_id: i64,
        month: &str,
    ) -> Result<Vec<WebsiteEarningsDetail>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = developer_earnings::table
            .inner_join(websites::table)
            .filter(developer_earnings::developer_id.eq(developer_id))
            .filter(developer_earnings::month.eq(month))
            .order(developer_earnings::earnings.desc())
            .select((
                developer_earnings::website_id,
                websites::name,
                websites::url,
                developer_earnings::total_time,
                developer_earnings::premium_time,
                developer_earnings::earnings,
            ))
            .load::<(i64, String, String, i64, i64, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(website_id, website_name, website_url, total_time, premium_time, earnings)| {
                    WebsiteEarningsDetail {
                        website_id,
                        website_name,
                        website_url,
                        total_time,
                        premium_time,
                        earnings,
                    }
                },
            )
            .collect())
    }

    async fn payout_history(&self, developer_id: i64, limit: i64) -> Result<Vec<PayoutEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = payouts::table
            .filter(payouts::developer_id.eq(developer_id))
            .order(payouts::created_at.desc())
            .limit(limit)
            .select(PayoutEntity::as_select())
            .load::<PayoutEntity>(&mut conn)?;

        Ok(results)
    }

    async fn distribution_history(&self, limit: i64) -> Result<Vec<DistributionLogEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = revenue_distribution_logs::table
            .order(revenue_distribution_logs::month.desc())
            .limit(limit)
            .select(DistributionLogEntity::as_select())
            .load::<DistributionLogEntity>(&mut conn)?;

        Ok(results)
    }

    async fn top_earning_developers(&self, month: &str, limit: i64) -> Result<Vec<TopDeveloper>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = revenue::table
            .inner_join(developers::table)
            .filter(revenue::month.eq(month))
            .order(revenue::amount.desc())
            .limit(limit)
            .select((revenue::developer_id, developers::company_name, revenue::amount))
            .load::<(i64, Option<String>, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(developer_id, developer_name, amount)| TopDeveloper {
                developer_id,
                developer_name,
                amount,
            })
            .collect())
    }
}
