use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use tracing::error;

use crate::{
    application::usecases::revenue_distribution::RevenueDistributionUseCase,
    domain::repositories::{
        revenue_distribution::RevenueDistributionRepository,
        revenue_settings::RevenueSettingsRepository, revenue_source::RevenueSource,
    },
    infrastructure::{
        axum_http::{auth::AdminUser, error_responses::error_response},
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                revenue_distribution::RevenueDistributionPostgres,
                revenue_settings::RevenueSettingsPostgres,
                revenue_source::SubscriptionPoolRevenue,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let distribution_repository = RevenueDistributionPostgres::new(Arc::clone(&db_pool));
    let settings_repository = RevenueSettingsPostgres::new(Arc::clone(&db_pool));
    let revenue_source = SubscriptionPoolRevenue::new(Arc::clone(&db_pool));
    let distribution_usecase = RevenueDistributionUseCase::new(
        Arc::new(distribution_repository),
        Arc::new(settings_repository),
        Arc::new(revenue_source),
    );

    Router::new()
        .route("/calculate", post(calculate))
        .with_state(Arc::new(distribution_usecase))
}

#[derive(Debug, Deserialize)]
pub struct CalculateRevenueRequest {
    pub month: Option<String>,
}

pub async fn calculate<D, S, R>(
    State(distribution_usecase): State<Arc<RevenueDistributionUseCase<D, S, R>>>,
    _admin: AdminUser,
    Json(payload): Json<CalculateRevenueRequest>,
) -> Response
where
    D: RevenueDistributionRepository + Send + Sync + 'static,
    S: RevenueSettingsRepository + Send + Sync + 'static,
    R: RevenueSource + Send + Sync + 'static,
{
    match distribution_usecase.calculate(payload.month).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_distribution: calculate request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}
