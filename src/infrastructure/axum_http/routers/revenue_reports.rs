use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::{
    application::usecases::revenue_reports::RevenueReportsUseCase,
    domain::repositories::{
        developers::DeveloperRepository, revenue_reports::RevenueReportsRepository,
    },
    infrastructure::{
        axum_http::{
            auth::{AdminUser, AuthUser},
            error_responses::error_response,
        },
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                developers::DeveloperPostgres, revenue_reports::RevenueReportsPostgres,
            },
        },
    },
};

fn build_usecase(
    db_pool: Arc<PgPoolSquad>,
) -> Arc<RevenueReportsUseCase<RevenueReportsPostgres, DeveloperPostgres>> {
    let reports_repository = RevenueReportsPostgres::new(Arc::clone(&db_pool));
    let developer_repository = DeveloperPostgres::new(Arc::clone(&db_pool));

    Arc::new(RevenueReportsUseCase::new(
        Arc::new(reports_repository),
        Arc::new(developer_repository),
    ))
}

/// Developer-facing earnings endpoints.
pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/earnings", get(earnings_history))
        .route("/earnings/:month", get(earnings_details))
        .route("/payouts", get(payout_history))
        .with_state(build_usecase(db_pool))
}

/// Platform-wide reporting, admin only.
pub fn admin_routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/stats", get(distribution_history))
        .route("/top-developers/:month", get(top_earning_developers))
        .with_state(build_usecase(db_pool))
}

pub async fn earnings_history<R, D>(
    State(reports_usecase): State<Arc<RevenueReportsUseCase<R, D>>>,
    auth: AuthUser,
) -> Response
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    match reports_usecase.earnings_history(auth.user_id).await {
        Ok(history) => Json(history).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_reports: earnings history request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn earnings_details<R, D>(
    State(reports_usecase): State<Arc<RevenueReportsUseCase<R, D>>>,
    auth: AuthUser,
    Path(month): Path<String>,
) -> Response
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    match reports_usecase.earnings_details(auth.user_id, &month).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_reports: earnings details request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn payout_history<R, D>(
    State(reports_usecase): State<Arc<RevenueReportsUseCase<R, D>>>,
    auth: AuthUser,
) -> Response
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    match reports_usecase.payout_history(auth.user_id).await {
        Ok(payouts) => Json(payouts).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_reports: payout history request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn distribution_history<R, D>(
    State(reports_usecase): State<Arc<RevenueReportsUseCase<R, D>>>,
    _admin: AdminUser,
) -> Response
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    match reports_usecase.distribution_history().await {
        Ok(logs) => Json(logs).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_reports: distribution history request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn top_earning_developers<R, D>(
    State(reports_usecase): State<Arc<RevenueReportsUseCase<R, D>>>,
    _admin: AdminUser,
    Path(month): Path<String>,
) -> Response
where
    R: RevenueReportsRepository + Send + Sync + 'static,
    D: DeveloperRepository + Send + Sync + 'static,
{
    match reports_usecase.top_earning_developers(&month).await {
        Ok(top) => Json(top).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_reports: top developers request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}
