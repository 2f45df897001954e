use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{
    developer_earnings::InsertDeveloperEarningsEntity,
    distribution_logs::{DistributionLogEntity, InsertDistributionLogEntity},
    payouts::InsertPayoutEntity,
    revenue::InsertRevenueEntity,
};
use crate::domain::value_objects::months::Month;

/// Flat monthly price per subscribed user, in cents. Stands in for real
/// billing data until payment records are wired in.
pub const MONTHLY_SUBSCRIPTION_PRICE_CENTS: i64 = 1000;

/// Premium time accrued on one website, attributed to its owning developer.
#[derive(Debug, Clone, PartialEq)]
pub struct WebsiteUsage {
    pub developer_id: i64,
    pub website_id: i64,
    pub total_time: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EarningsShare {
    pub developer_id: i64,
    pub website_id: i64,
    pub total_time: i64,
    pub premium_time: i64,
    pub earnings: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionSummary {
    pub month: String,
    pub total_revenue: i64,
    pub total_distributed: i64,
    pub platform_fee: i64,
    pub developer_count: i32,
    pub status: String,
    pub notes: Option<String>,
}

impl From<DistributionLogEntity> for DistributionSummary {
    fn from(log: DistributionLogEntity) -> Self {
        Self {
            month: log.month,
            total_revenue: log.total_revenue,
            total_distributed: log.total_distributed,
            platform_fee: log.platform_fee,
            developer_count: log.developer_count,
            status: log.status,
            notes: log.notes,
        }
    }
}

/// Everything one allocator run writes, replacing any prior rows for the month.
#[derive(Debug, Clone)]
pub struct NewDistribution {
    pub month: Month,
    pub earnings: Vec<InsertDeveloperEarningsEntity>,
    pub revenues: Vec<InsertRevenueEntity>,
    pub payouts: Vec<InsertPayoutEntity>,
    pub log: InsertDistributionLogEntity,
}

/// Splits gross revenue into `(platform_fee, distributable)`.
/// Fee is floored, so the two parts always sum back to the total.
pub fn split_platform_fee(total_revenue: i64, fee_percentage: i32) -> (i64, i64) {
    let platform_fee = total_revenue * fee_percentage as i64 / 100;
    (platform_fee, total_revenue - platform_fee)
}

/// Pro-rata allocation of the distributable pool over per-website usage.
/// Each share is floored; the lost remainder stays with the platform.
pub fn allocate_earnings(
    usage: &[WebsiteUsage],
    total_premium_time: i64,
    distributable: i64,
) -> Vec<EarningsShare> {
    usage
        .iter()
        .map(|usage| {
            let earnings =
                (distributable as i128 * usage.total_time as i128 / total_premium_time as i128) as i64;

            EarningsShare {
                developer_id: usage.developer_id,
                website_id: usage.website_id,
                total_time: usage.total_time,
                // Only premium-user time is aggregated upstream today, so the
                // two buckets coincide.
                premium_time: usage.total_time,
                earnings,
            }
        })
        .collect()
}

/// Sums earnings per developer. BTreeMap keeps run output deterministic.
pub fn aggregate_by_developer(shares: &[EarningsShare]) -> BTreeMap<i64, i64> {
    let mut totals = BTreeMap::new();
    for share in shares {
        *totals.entry(share.developer_id).or_insert(0) += share.earnings;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(developer_id: i64, website_id: i64, total_time: i64) -> WebsiteUsage {
        WebsiteUsage {
            developer_id,
            website_id,
            total_time,
        }
    }

    #[test]
    fn fee_and_distributable_sum_to_total() {
        for (total, fee_pct) in [(2000, 30), (1, 30), (999, 33), (0, 50), (12345, 0), (777, 100)] {
            let (fee, distributable) = split_platform_fee(total, fee_pct);
            assert_eq!(fee + distributable, total, "total={total} fee_pct={fee_pct}");
            assert!(fee >= 0);
            assert!(distributable >= 0);
        }
    }

    #[test]
    fn allocation_never_exceeds_pool_and_deficit_is_bounded() {
        let usage = vec![
            usage(1, 10, 1800),
            usage(1, 11, 777),
            usage(2, 20, 3600),
            usage(3, 30, 1),
        ];
        let total_premium_time: i64 = usage.iter().map(|u| u.total_time).sum();
        let distributable = 1400;

        let shares = allocate_earnings(&usage, total_premium_time, distributable);
        let allocated: i64 = shares.iter().map(|s| s.earnings).sum();

        assert!(allocated <= distributable);
        assert!(distributable - allocated < shares.len() as i64);
    }

    #[test]
    fn allocation_matches_worked_example() {
        // Two developers, 1800s and 3600s of premium time over a 1400-cent pool.
        let usage = vec![usage(1, 10, 1800), usage(2, 20, 3600)];
        let shares = allocate_earnings(&usage, 5400, 1400);

        assert_eq!(shares[0].earnings, 466);
        assert_eq!(shares[1].earnings, 933);
        assert_eq!(shares[0].premium_time, shares[0].total_time);
    }

    #[test]
    fn developer_totals_sum_their_website_shares() {
        let usage = vec![usage(1, 10, 1800), usage(1, 11, 1800), usage(2, 20, 3600)];
        let shares = allocate_earnings(&usage, 7200, 1400);
        let totals = aggregate_by_developer(&shares);

        let developer_one: i64 = shares
            .iter()
            .filter(|s| s.developer_id == 1)
            .map(|s| s.earnings)
            .sum();

        assert_eq!(totals[&1], developer_one);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let usage = vec![usage(1, 10, i64::MAX / 2)];
        let shares = allocate_earnings(&usage, i64::MAX / 2, i64::MAX / 4);
        assert_eq!(shares[0].earnings, i64::MAX / 4);
    }
}
