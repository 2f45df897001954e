use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::{
        developer_earnings::InsertDeveloperEarningsEntity,
        distribution_logs::InsertDistributionLogEntity, payouts::InsertPayoutEntity,
        revenue::InsertRevenueEntity,
    },
    repositories::{
        revenue_distribution::RevenueDistributionRepository,
        revenue_settings::RevenueSettingsRepository, revenue_source::RevenueSource,
    },
    value_objects::{
        enums::{
            distribution_statuses::DistributionStatus, payout_methods::PayoutMethod,
            payout_statuses::PayoutStatus,
        },
        months::{Month, MonthError},
        revenue_distribution::{
            DistributionSummary, NewDistribution, aggregate_by_developer, allocate_earnings,
            split_platform_fee,
        },
        revenue_settings::DEFAULT_REVENUE_SETTINGS,
    },
};

const ZERO_USAGE_NOTE: &str = "No premium usage recorded for this period";

#[derive(Debug, Error)]
pub enum RevenueDistributionError {
    #[error(transparent)]
    InvalidMonth(#[from] MonthError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RevenueDistributionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            RevenueDistributionError::InvalidMonth(_) => StatusCode::BAD_REQUEST,
            RevenueDistributionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, RevenueDistributionError>;

pub struct RevenueDistributionUseCase<D, S, R>
where
    D: RevenueDistributionRepository + Send + Sync + 'static,
    S: RevenueSettingsRepository + Send + Sync + 'static,
    R: RevenueSource + Send + Sync + 'static,
{
    distribution_repo: Arc<D>,
    settings_repo: Arc<S>,
    revenue_source: Arc<R>,
}

impl<D, S, R> RevenueDistributionUseCase<D, S, R>
where
    D: RevenueDistributionRepository + Send + Sync + 'static,
    S: RevenueSettingsRepository + Send + Sync + 'static,
    R: RevenueSource + Send + Sync + 'static,
{
    pub fn new(distribution_repo: Arc<D>, settings_repo: Arc<S>, revenue_source: Arc<R>) -> Self {
        Self {
            distribution_repo,
            settings_repo,
            revenue_source,
        }
    }

    /// Runs the monthly allocation for `month` (previous calendar month when
    /// omitted) and returns the recorded summary. Re-running a month replaces
    /// its rows instead of appending.
    pub async fn calculate(&self, month: Option<String>) -> UseCaseResult<DistributionSummary> {
        let month = match month {
            Some(raw) => Month::parse(&raw).map_err(|err| {
                warn!(
                    raw_month = %raw,
                    error = %err,
                    status = axum::http::StatusCode::BAD_REQUEST.as_u16(),
                    "revenue_distribution: invalid month requested"
                );
                RevenueDistributionError::InvalidMonth(err)
            })?,
            None => Month::previous(Utc::now().date_naive()),
        };

        let (start, end) = month.date_range();
        info!(%month, "revenue_distribution: calculation started");

        let settings = self
            .settings_repo
            .get()
            .await
            .map_err(|err| {
                error!(%month, db_error = ?err, "revenue_distribution: failed to load settings");
                RevenueDistributionError::Internal(err)
            })?
            .unwrap_or(DEFAULT_REVENUE_SETTINGS);

        let total_premium_time = self
            .distribution_repo
            .total_premium_time(start, end)
            .await
            .map_err(|err| {
                error!(%month, db_error = ?err, "revenue_distribution: failed to sum premium time");
                RevenueDistributionError::Internal(err)
            })?;

        if total_premium_time == 0 {
            info!(%month, "revenue_distribution: no premium usage, recording zero run");
            return self.record_zero_run(month).await;
        }

        let total_revenue = self
            .revenue_source
            .total_revenue_for_month(&month.to_string())
            .await
            .map_err(|err| {
                error!(%month, error = ?err, "revenue_distribution: revenue source failed");
                RevenueDistributionError::Internal(err)
            })?;

        let (platform_fee, distributable) =
            split_platform_fee(total_revenue, settings.platform_fee_percentage);

        let usage = self
            .distribution_repo
            .premium_usage_by_website(start, end)
            .await
            .map_err(|err| {
                error!(%month, db_error = ?err, "revenue_distribution: failed to load usage groups");
                RevenueDistributionError::Internal(err)
            })?;

        let shares = allocate_earnings(&usage, total_premium_time, distributable);
        let developer_totals = aggregate_by_developer(&shares);

        let earnings = shares
            .iter()
            .map(|share| InsertDeveloperEarningsEntity {
                developer_id: share.developer_id,
                website_id: share.website_id,
                month: month.to_string(),
                total_time: share.total_time,
                premium_time: share.premium_time,
                earnings: share.earnings,
            })
            .collect::<Vec<_>>();

        let mut revenues = Vec::with_capacity(developer_totals.len());
        let mut payouts = Vec::new();
        for (&developer_id, &amount) in &developer_totals {
            revenues.push(InsertRevenueEntity {
                developer_id,
                month: month.to_string(),
                amount,
            });

            if amount >= settings.minimum_payout_amount {
                payouts.push(InsertPayoutEntity {
                    developer_id,
                    amount,
                    month: month.to_string(),
                    status: PayoutStatus::Pending.to_string(),
                    payment_method: PayoutMethod::BankTransfer.to_string(),
                    notes: Some(format!("Automatic payout for {}", month)),
                });
            }
        }

        let log = InsertDistributionLogEntity {
            month: month.to_string(),
            total_revenue,
            total_distributed: distributable,
            platform_fee,
            developer_count: developer_totals.len() as i32,
            status: DistributionStatus::Completed.to_string(),
            notes: Some(format!("Processed on {}", Utc::now().to_rfc3339())),
        };

        info!(
            %month,
            total_revenue,
            total_distributed = distributable,
            platform_fee,
            developer_count = developer_totals.len(),
            payout_count = payouts.len(),
            "revenue_distribution: persisting distribution"
        );

        let recorded = self
            .distribution_repo
            .replace_month_distribution(NewDistribution {
                month,
                earnings,
                revenues,
                payouts,
                log,
            })
            .await
            .map_err(|err| {
                error!(%month, db_error = ?err, "revenue_distribution: failed to persist distribution");
                RevenueDistributionError::Internal(err)
            })?;

        info!(%month, "revenue_distribution: calculation completed");

        Ok(DistributionSummary::from(recorded))
    }

    async fn record_zero_run(&self, month: Month) -> UseCaseResult<DistributionSummary> {
        let log = InsertDistributionLogEntity {
            month: month.to_string(),
            total_revenue: 0,
            total_distributed: 0,
            platform_fee: 0,
            developer_count: 0,
            status: DistributionStatus::Completed.to_string(),
            notes: Some(ZERO_USAGE_NOTE.to_string()),
        };

        let recorded = self
            .distribution_repo
            .replace_month_distribution(NewDistribution {
                month,
                earnings: Vec::new(),
                revenues: Vec::new(),
                payouts: Vec::new(),
                log,
            })
            .await
            .map_err(|err| {
                error!(%month, db_error = ?err, "revenue_distribution: failed to record zero run");
                RevenueDistributionError::Internal(err)
            })?;

        Ok(DistributionSummary::from(recorded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::distribution_logs::DistributionLogEntity,
        repositories::{
            revenue_distribution::MockRevenueDistributionRepository,
            revenue_settings::MockRevenueSettingsRepository, revenue_source::MockRevenueSource,
        },
        value_objects::{
            enums::payout_schedules::PayoutSchedule, revenue_distribution::WebsiteUsage,
            revenue_settings::RevenueSettingsModel,
        },
    };

    fn recorded_log(log: &InsertDistributionLogEntity) -> DistributionLogEntity {
        DistributionLogEntity {
            id: 1,
            month: log.month.clone(),
            total_revenue: log.total_revenue,
            total_distributed: log.total_distributed,
            platform_fee: log.platform_fee,
            developer_count: log.developer_count,
            status: log.status.clone(),
            notes: log.notes.clone(),
            created_at: Utc::now(),
        }
    }

    fn distribution_mock_echoing_log() -> impl Fn(NewDistribution) -> DistributionLogEntity {
        |distribution| recorded_log(&distribution.log)
    }

    #[tokio::test]
    async fn zero_premium_month_records_only_a_zero_log() {
        let mut distribution_repo = MockRevenueDistributionRepository::new();
        let mut settings_repo = MockRevenueSettingsRepository::new();
        let revenue_source = MockRevenueSource::new();

        settings_repo
            .expect_get()
            .returning(|| Box::pin(async { Ok(None) }));

        distribution_repo
            .expect_total_premium_time()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let echo = distribution_mock_echoing_log();
        distribution_repo
            .expect_replace_month_distribution()
            .withf(|distribution| {
                distribution.earnings.is_empty()
                    && distribution.revenues.is_empty()
                    && distribution.payouts.is_empty()
                    && distribution.log.total_revenue == 0
                    && distribution.log.developer_count == 0
            })
            .returning(move |distribution| {
                let log = echo(distribution);
                Box::pin(async move { Ok(log) })
            });

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        let summary = usecase.calculate(Some("2024-05".to_string())).await.unwrap();

        assert_eq!(summary.month, "2024-05");
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.total_distributed, 0);
        assert_eq!(summary.platform_fee, 0);
        assert_eq!(summary.developer_count, 0);
        assert_eq!(summary.status, "completed");
        assert_eq!(summary.notes.as_deref(), Some(ZERO_USAGE_NOTE));
    }

    #[tokio::test]
    async fn two_developer_month_allocates_proportional_shares() {
        let mut distribution_repo = MockRevenueDistributionRepository::new();
        let mut settings_repo = MockRevenueSettingsRepository::new();
        let mut revenue_source = MockRevenueSource::new();

        settings_repo
            .expect_get()
            .returning(|| Box::pin(async { Ok(None) }));

        distribution_repo
            .expect_total_premium_time()
            .returning(|_, _| Box::pin(async { Ok(5400) }));

        distribution_repo
            .expect_premium_usage_by_website()
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![
                        WebsiteUsage {
                            developer_id: 1,
                            website_id: 10,
                            total_time: 1800,
                        },
                        WebsiteUsage {
                            developer_id: 2,
                            website_id: 20,
                            total_time: 3600,
                        },
                    ])
                })
            });

        revenue_source
            .expect_total_revenue_for_month()
            .withf(|month| month == "2024-05")
            .returning(|_| Box::pin(async { Ok(2000) }));

        let echo = distribution_mock_echoing_log();
        distribution_repo
            .expect_replace_month_distribution()
            .withf(|distribution| {
                let earnings_ok = distribution.earnings.len() == 2
                    && distribution.earnings[0].earnings == 466
                    && distribution.earnings[1].earnings == 933
                    && distribution
                        .earnings
                        .iter()
                        .all(|row| row.premium_time == row.total_time);

                let revenues_ok = distribution.revenues.len() == 2
                    && distribution.revenues[0].developer_id == 1
                    && distribution.revenues[0].amount == 466
                    && distribution.revenues[1].developer_id == 2
                    && distribution.revenues[1].amount == 933;

                // Both totals fall under the default 1000-cent threshold.
                let payouts_ok = distribution.payouts.is_empty();

                let log_ok = distribution.log.total_revenue == 2000
                    && distribution.log.total_distributed == 1400
                    && distribution.log.platform_fee == 600
                    && distribution.log.developer_count == 2;

                earnings_ok && revenues_ok && payouts_ok && log_ok
            })
            .returning(move |distribution| {
                let log = echo(distribution);
                Box::pin(async move { Ok(log) })
            });

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        let summary = usecase.calculate(Some("2024-05".to_string())).await.unwrap();

        assert_eq!(summary.total_revenue, 2000);
        assert_eq!(summary.total_distributed, 1400);
        assert_eq!(summary.platform_fee, 600);
        assert_eq!(summary.developer_count, 2);
        assert_eq!(summary.platform_fee + summary.total_distributed, summary.total_revenue);
    }

    #[tokio::test]
    async fn payout_row_created_once_threshold_is_met() {
        let mut distribution_repo = MockRevenueDistributionRepository::new();
        let mut settings_repo = MockRevenueSettingsRepository::new();
        let mut revenue_source = MockRevenueSource::new();

        settings_repo
            .expect_get()
            .returning(|| Box::pin(async { Ok(None) }));

        distribution_repo
            .expect_total_premium_time()
            .returning(|_, _| Box::pin(async { Ok(3600) }));

        distribution_repo
            .expect_premium_usage_by_website()
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![WebsiteUsage {
                        developer_id: 7,
                        website_id: 70,
                        total_time: 3600,
                    }])
                })
            });

        revenue_source
            .expect_total_revenue_for_month()
            .returning(|_| Box::pin(async { Ok(2000) }));

        let echo = distribution_mock_echoing_log();
        distribution_repo
            .expect_replace_month_distribution()
            .withf(|distribution| {
                distribution.payouts.len() == 1
                    && distribution.payouts[0].developer_id == 7
                    && distribution.payouts[0].amount == 1400
                    && distribution.payouts[0].status == "pending"
                    && distribution.payouts[0].payment_method == "bank_transfer"
                    && distribution.payouts[0].notes.as_deref()
                        == Some("Automatic payout for 2024-05")
            })
            .returning(move |distribution| {
                let log = echo(distribution);
                Box::pin(async move { Ok(log) })
            });

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        let summary = usecase.calculate(Some("2024-05".to_string())).await.unwrap();
        assert_eq!(summary.developer_count, 1);
    }

    #[tokio::test]
    async fn payout_threshold_comes_from_the_settings_snapshot() {
        let mut distribution_repo = MockRevenueDistributionRepository::new();
        let mut settings_repo = MockRevenueSettingsRepository::new();
        let mut revenue_source = MockRevenueSource::new();

        settings_repo.expect_get().returning(|| {
            Box::pin(async {
                Ok(Some(RevenueSettingsModel {
                    platform_fee_percentage: 30,
                    minimum_payout_amount: 1500,
                    payout_schedule: PayoutSchedule::Monthly,
                }))
            })
        });

        distribution_repo
            .expect_total_premium_time()
            .returning(|_, _| Box::pin(async { Ok(3600) }));

        distribution_repo
            .expect_premium_usage_by_website()
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![WebsiteUsage {
                        developer_id: 7,
                        website_id: 70,
                        total_time: 3600,
                    }])
                })
            });

        revenue_source
            .expect_total_revenue_for_month()
            .returning(|_| Box::pin(async { Ok(2000) }));

        let echo = distribution_mock_echoing_log();
        distribution_repo
            .expect_replace_month_distribution()
            .withf(|distribution| {
                // 1400 earned, threshold raised to 1500: no payout row.
                distribution.payouts.is_empty() && distribution.revenues[0].amount == 1400
            })
            .returning(move |distribution| {
                let log = echo(distribution);
                Box::pin(async move { Ok(log) })
            });

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        usecase.calculate(Some("2024-05".to_string())).await.unwrap();
    }

    #[tokio::test]
    async fn revenue_rows_sum_each_developers_website_shares() {
        let mut distribution_repo = MockRevenueDistributionRepository::new();
        let mut settings_repo = MockRevenueSettingsRepository::new();
        let mut revenue_source = MockRevenueSource::new();

        settings_repo
            .expect_get()
            .returning(|| Box::pin(async { Ok(None) }));

        distribution_repo
            .expect_total_premium_time()
            .returning(|_, _| Box::pin(async { Ok(7200) }));

        distribution_repo
            .expect_premium_usage_by_website()
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![
                        WebsiteUsage {
                            developer_id: 1,
                            website_id: 10,
                            total_time: 1800,
                        },
                        WebsiteUsage {
                            developer_id: 1,
                            website_id: 11,
                            total_time: 1800,
                        },
                        WebsiteUsage {
                            developer_id: 2,
                            website_id: 20,
                            total_time: 3600,
                        },
                    ])
                })
            });

        revenue_source
            .expect_total_revenue_for_month()
            .returning(|_| Box::pin(async { Ok(2000) }));

        let echo = distribution_mock_echoing_log();
        distribution_repo
            .expect_replace_month_distribution()
            .withf(|distribution| {
                let developer_one_earnings: i64 = distribution
                    .earnings
                    .iter()
                    .filter(|row| row.developer_id == 1)
                    .map(|row| row.earnings)
                    .sum();

                let allocated: i64 = distribution.earnings.iter().map(|row| row.earnings).sum();

                distribution.revenues[0].amount == developer_one_earnings
                    && allocated <= distribution.log.total_distributed
                    && distribution.log.total_distributed - allocated
                        < distribution.earnings.len() as i64
            })
            .returning(move |distribution| {
                let log = echo(distribution);
                Box::pin(async move { Ok(log) })
            });

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        usecase.calculate(Some("2024-05".to_string())).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_month_is_rejected_before_any_data_access() {
        let distribution_repo = MockRevenueDistributionRepository::new();
        let settings_repo = MockRevenueSettingsRepository::new();
        let revenue_source = MockRevenueSource::new();

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        for raw in ["2024-13", "2024", "05-2024", "garbage"] {
            let err = usecase.calculate(Some(raw.to_string())).await.unwrap_err();
            assert!(matches!(err, RevenueDistributionError::InvalidMonth(_)));
            assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn omitted_month_defaults_to_previous_calendar_month() {
        let mut distribution_repo = MockRevenueDistributionRepository::new();
        let mut settings_repo = MockRevenueSettingsRepository::new();
        let revenue_source = MockRevenueSource::new();

        settings_repo
            .expect_get()
            .returning(|| Box::pin(async { Ok(None) }));

        distribution_repo
            .expect_total_premium_time()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let echo = distribution_mock_echoing_log();
        distribution_repo
            .expect_replace_month_distribution()
            .returning(move |distribution| {
                let log = echo(distribution);
                Box::pin(async move { Ok(log) })
            });

        let usecase = RevenueDistributionUseCase::new(
            Arc::new(distribution_repo),
            Arc::new(settings_repo),
            Arc::new(revenue_source),
        );

        let summary = usecase.calculate(None).await.unwrap();

        let expected = Month::previous(Utc::now().date_naive()).to_string();
        assert_eq!(summary.month, expected);
    }
}
