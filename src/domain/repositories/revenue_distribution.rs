use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;

use crate::domain::{
    entities::distribution_logs::DistributionLogEntity,
    value_objects::revenue_distribution::{NewDistribution, WebsiteUsage},
};

#[async_trait]
#[automock]
pub trait RevenueDistributionRepository {
    /// Seconds of time-on-site accrued by subscribed users in `[start, end)`.
    async fn total_premium_time(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64>;

    /// Premium time in `[start, end)` grouped by `(developer, website)`,
    /// resolved through the website -> api key -> developer ownership chain.
    async fn premium_usage_by_website(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WebsiteUsage>>;

    /// Atomically replaces the month's earnings, revenue, pending payout and
    /// log rows with the given distribution. Holds a month-keyed advisory
    /// lock for the duration so concurrent runs cannot interleave.
    async fn replace_month_distribution(
        &self,
        distribution: NewDistribution,
    ) -> Result<DistributionLogEntity>;
}
