use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    repositories::revenue_settings::RevenueSettingsRepository,
    value_objects::revenue_settings::{
        DEFAULT_REVENUE_SETTINGS, RevenueSettingsModel, SettingsValidationError,
        UpdateRevenueSettingsModel,
    },
};

#[derive(Debug, Error)]
pub enum RevenueSettingsError {
    #[error(transparent)]
    Validation(#[from] SettingsValidationError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RevenueSettingsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            RevenueSettingsError::Validation(_) => StatusCode::BAD_REQUEST,
            RevenueSettingsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, RevenueSettingsError>;

pub struct RevenueSettingsUseCase<S>
where
    S: RevenueSettingsRepository + Send + Sync + 'static,
{
    settings_repo: Arc<S>,
}

impl<S> RevenueSettingsUseCase<S>
where
    S: RevenueSettingsRepository + Send + Sync + 'static,
{
    pub fn new(settings_repo: Arc<S>) -> Self {
        Self { settings_repo }
    }

    pub async fn get_settings(&self) -> UseCaseResult<RevenueSettingsModel> {
        let settings = self
            .settings_repo
            .get()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "revenue_settings: failed to load settings");
                RevenueSettingsError::Internal(err)
            })?
            .unwrap_or(DEFAULT_REVENUE_SETTINGS);

        Ok(settings)
    }

    pub async fn update_settings(
        &self,
        update: UpdateRevenueSettingsModel,
    ) -> UseCaseResult<RevenueSettingsModel> {
        let current = self.get_settings().await?;

        let merged = update.apply_to(current).map_err(|err| {
            warn!(
                error = %err,
                status = axum::http::StatusCode::BAD_REQUEST.as_u16(),
                "revenue_settings: rejected invalid settings update"
            );
            RevenueSettingsError::Validation(err)
        })?;

        let saved = self.settings_repo.upsert(merged).await.map_err(|err| {
            error!(db_error = ?err, "revenue_settings: failed to persist settings");
            RevenueSettingsError::Internal(err)
        })?;

        info!(
            platform_fee_percentage = saved.platform_fee_percentage,
            minimum_payout_amount = saved.minimum_payout_amount,
            payout_schedule = %saved.payout_schedule,
            "revenue_settings: settings updated"
        );

        Ok(saved)
    }
}
