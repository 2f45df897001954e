use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::{distribution_logs::DistributionLogEntity, payouts::PayoutEntity, revenue::RevenueEntity},
    value_objects::revenue_reports::{TopDeveloper, WebsiteEarningsDetail},
};

#[async_trait]
#[automock]
pub trait RevenueReportsRepository {
    async fn earnings_history(&self, developer_id: i64, limit: i64) -> Result<Vec<RevenueEntity>>;

    async fn earnings_details(
        &self,
        developer_id: i64,
        month: &str,
    ) -> Result<Vec<WebsiteEarningsDetail>>;

    async fn payout_history(&self, developer_id: i64, limit: i64) -> Result<Vec<PayoutEntity>>;

    async fn distribution_history(&self, limit: i64) -> Result<Vec<DistributionLogEntity>>;

    async fn top_earning_developers(&self, month: &str, limit: i64) -> Result<Vec<TopDeveloper>>;
}
