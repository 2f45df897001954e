use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// Where the month's gross subscription revenue comes from. Injected so the
/// allocator never hardcodes a billing assumption.
#[async_trait]
#[automock]
pub trait RevenueSource {
    async fn total_revenue_for_month(&self, month: &str) -> Result<i64>;
}
