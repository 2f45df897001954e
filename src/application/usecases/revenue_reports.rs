use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::{developers::DeveloperRepository, revenue_reports::RevenueReportsRepository},
    value_objects::{
        months::{Month, MonthError},
        revenue_reports::{
            DistributionLogItem, EarningsHistoryItem, PayoutHistoryItem, TopDeveloper,
            WebsiteEarningsDetail,
        },
    },
};

const EARNINGS_HISTORY_MONTHS: i64 = 12;
const PAYOUT_HISTORY_LIMIT: i64 = 10;
const DISTRIBUTION_HISTORY_MONTHS: i64 = 12;
const TOP_DEVELOPERS_LIMIT: i64 = 10;

#[derive(Debug, Error)]
pub enum RevenueReportsError {
    #[error("developer profile not found")]
    DeveloperNotFound,
    #[error(transparent)]
    InvalidMonth(#[from] MonthError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RevenueReportsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            RevenueReportsError::DeveloperNotFound => StatusCode::NOT_FOUND,
            RevenueReportsError::InvalidMonth(_) => StatusCode::BAD_REQUEST,
            RevenueReportsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, RevenueReportsError>;

pub struct RevenueReportsUseCase<R, D>
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    reports_repo: Arc<R>,
    developer_repo: Arc<D>,
}

impl<R, D> RevenueReportsUseCase<R, D>
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    pub fn new(reports_repo: Arc<R>, developer_repo: Arc<D>) -> Self {
        Self {
            reports_repo,
            developer_repo,
        }
    }

    pub async fn earnings_history(&self, user_id: Uuid) -> UseCaseResult<Vec<EarningsHistoryItem>> {
        let developer_id = self.resolve_developer(user_id).await?;

        let history = self
            .reports_repo
            .earnings_history(developer_id, EARNINGS_HISTORY_MONTHS)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    developer_id,
                    db_error = ?err,
                    "revenue_reports: failed to load earnings history"
                );
                RevenueReportsError::Internal(err)
            })?;

        Ok(history.into_iter().map(EarningsHistoryItem::from).collect())
    }

    pub async fn earnings_details(
        &self,
        user_id: Uuid,
        month: &str,
    ) -> UseCaseResult<Vec<WebsiteEarningsDetail>> {
        let month = Month::parse(month).map_err(|err| {
            warn!(
                %user_id,
                raw_month = month,
                error = %err,
                status = axum::http::StatusCode::BAD_REQUEST.as_u16(),
                "revenue_reports: invalid month requested"
            );
            RevenueReportsError::InvalidMonth(err)
        })?;

        let developer_id = self.resolve_developer(user_id).await?;

        self.reports_repo
            .earnings_details(developer_id, &month.to_string())
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    developer_id,
                    %month,
                    db_error = ?err,
                    "revenue_reports: failed to load earnings details"
                );
                RevenueReportsError::Internal(err)
            })
    }

    pub async fn payout_history(&self, user_id: Uuid) -> UseCaseResult<Vec<PayoutHistoryItem>> {
        let developer_id = self.resolve_developer(user_id).await?;

        let payouts = self
            .reports_repo
            .payout_history(developer_id, PAYOUT_HISTORY_LIMIT)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    developer_id,
                    db_error = ?err,
                    "revenue_reports: failed to load payout history"
                );
                RevenueReportsError::Internal(err)
            })?;

        Ok(payouts.into_iter().map(PayoutHistoryItem::from).collect())
    }

    pub async fn distribution_history(&self) -> UseCaseResult<Vec<DistributionLogItem>> {
        let logs = self
            .reports_repo
            .distribution_history(DISTRIBUTION_HISTORY_MONTHS)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "revenue_reports: failed to load distribution history");
                RevenueReportsError::Internal(err)
            })?;

        Ok(logs.into_iter().map(DistributionLogItem::from).collect())
    }

    pub async fn top_earning_developers(&self, month: &str) -> UseCaseResult<Vec<TopDeveloper>> {
        let month = Month::parse(month).map_err(|err| {
            warn!(
                raw_month = month,
                error = %err,
                status = axum::http::StatusCode::BAD_REQUEST.as_u16(),
                "revenue_reports: invalid month requested"
            );
            RevenueReportsError::InvalidMonth(err)
        })?;

        self.reports_repo
            .top_earning_developers(&month.to_string(), TOP_DEVELOPERS_LIMIT)
            .await
            .map_err(|err| {
                error!(%month, db_error = ?err, "revenue_reports: failed to load top developers");
                RevenueReportsError::Internal(err)
            })
    }

    async fn resolve_developer(&self, user_id: Uuid) -> UseCaseResult<i64> {
        let developer = self
            .developer_repo
            .find_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "revenue_reports: failed to load developer profile");
                RevenueReportsError::Internal(err)
            })?
            .ok_or_else(|| {
                let err = RevenueReportsError::DeveloperNotFound;
                warn!(
                    %user_id,
                    status = err.status_code().as_u16(),
                    "revenue_reports: no developer profile for user"
                );
                err
            })?;

        info!(%user_id, developer_id = developer.id, "revenue_reports: developer resolved");
        Ok(developer.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::{
        entities::{developers::DeveloperEntity, revenue::RevenueEntity},
        repositories::{
            developers::MockDeveloperRepository, revenue_reports::MockRevenueReportsRepository,
        },
    };
    use mockall::predicate::eq;

    fn sample_developer(user_id: Uuid) -> DeveloperEntity {
        DeveloperEntity {
            id: 42,
            user_id,
            company_name: Some("Acme".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn earnings_history_is_resolved_through_the_developer_profile() {
        let user_id = Uuid::new_v4();

        let mut reports_repo = MockRevenueReportsRepository::new();
        let mut developer_repo = MockDeveloperRepository::new();

        let developer = sample_developer(user_id);
        developer_repo
            .expect_find_by_user_id()
            .with(eq(user_id))
            .returning(move |_| {
                let developer = developer.clone();
                Box::pin(async move { Ok(Some(developer)) })
            });

        reports_repo
            .expect_earnings_history()
            .with(eq(42i64), eq(EARNINGS_HISTORY_MONTHS))
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![RevenueEntity {
                        id: 1,
                        developer_id: 42,
                        month: "2024-05".to_string(),
                        amount: 466,
                        calculated_at: Utc::now(),
                    }])
                })
            });

        let usecase = RevenueReportsUseCase::new(Arc::new(reports_repo), Arc::new(developer_repo));

        let history = usecase.earnings_history(user_id).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].month, "2024-05");
        assert_eq!(history[0].amount, 466);
    }

    #[tokio::test]
    async fn missing_developer_profile_maps_to_not_found() {
        let user_id = Uuid::new_v4();

        let reports_repo = MockRevenueReportsRepository::new();
        let mut developer_repo = MockDeveloperRepository::new();

        developer_repo
            .expect_find_by_user_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = RevenueReportsUseCase::new(Arc::new(reports_repo), Arc::new(developer_repo));

        let err = usecase.earnings_history(user_id).await.unwrap_err();
        assert!(matches!(err, RevenueReportsError::DeveloperNotFound));
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn earnings_details_validates_month_before_touching_storage() {
        let reports_repo = MockRevenueReportsRepository::new();
        let developer_repo = MockDeveloperRepository::new();

        let usecase = RevenueReportsUseCase::new(Arc::new(reports_repo), Arc::new(developer_repo));

        let err = usecase
            .earnings_details(Uuid::new_v4(), "2024-99")
            .await
            .unwrap_err();

        assert!(matches!(err, RevenueReportsError::InvalidMonth(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn top_developers_passes_the_parsed_month_through() {
        let mut reports_repo = MockRevenueReportsRepository::new();
        let developer_repo = MockDeveloperRepository::new();

        reports_repo
            .expect_top_earning_developers()
            .withf(|month, limit| month == "2024-05" && *limit == TOP_DEVELOPERS_LIMIT)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(vec![TopDeveloper {
                        developer_id: 42,
                        developer_name: Some("Acme".to_string()),
                        amount: 933,
                    }])
                })
            });

        let usecase = RevenueReportsUseCase::new(Arc::new(reports_repo), Arc::new(developer_repo));

        let top = usecase.top_earning_developers("2024-05").await.unwrap();
        assert_eq!(top[0].developer_id, 42);
    }
}
