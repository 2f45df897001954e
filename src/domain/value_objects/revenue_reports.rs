use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{distribution_logs::DistributionLogEntity, payouts::PayoutEntity, revenue::RevenueEntity};

#[derive(Debug, Clone, Serialize)]
pub struct EarningsHistoryItem {
    pub month: String,
    pub amount: i64,
    pub calculated_at: DateTime<Utc>,
}

impl From<RevenueEntity> for EarningsHistoryItem {
    fn from(revenue: RevenueEntity) -> Self {
        Self {
            month: revenue.month,
            amount: revenue.amount,
            calculated_at: revenue.calculated_at,
        }
    }
}

/// Per-website slice of a developer's earnings for one month.
#[derive(Debug, Clone, Serialize)]
pub struct WebsiteEarningsDetail {
    pub website_id: i64,
    pub website_name: String,
    pub website_url: String,
    pub total_time: i64,
    pub premium_time: i64,
    pub earnings: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayoutHistoryItem {
    pub id: i64,
    pub amount: i64,
    pub month: String,
    pub status: String,
    pub payment_method: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PayoutEntity> for PayoutHistoryItem {
    fn from(payout: PayoutEntity) -> Self {
        Self {
            id: payout.id,
            amount: payout.amount,
            month: payout.month,
            status: payout.status,
            payment_method: payout.payment_method,
            notes: payout.notes,
            created_at: payout.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionLogItem {
    pub month: String,
    pub total_revenue: i64,
    pub total_distributed: i64,
    pub platform_fee: i64,
    pub developer_count: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DistributionLogEntity> for DistributionLogItem {
    fn from(log: DistributionLogEntity) -> Self {
        Self {
            month: log.month,
            total_revenue: log.total_revenue,
            total_distributed: log.total_distributed,
            platform_fee: log.platform_fee,
            developer_count: log.developer_count,
            status: log.status,
            notes: log.notes,
            created_at: log.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopDeveloper {
    pub developer_id: i64,
    pub developer_name: Option<String>,
    pub amount: i64,
}
