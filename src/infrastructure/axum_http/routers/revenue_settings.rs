use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::{
    application::usecases::revenue_settings::RevenueSettingsUseCase,
    domain::{
        repositories::revenue_settings::RevenueSettingsRepository,
        value_objects::revenue_settings::UpdateRevenueSettingsModel,
    },
    infrastructure::{
        axum_http::{auth::AdminUser, error_responses::error_response},
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::revenue_settings::RevenueSettingsPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let settings_repository = RevenueSettingsPostgres::new(Arc::clone(&db_pool));
    let settings_usecase = RevenueSettingsUseCase::new(Arc::new(settings_repository));

    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .with_state(Arc::new(settings_usecase))
}

pub async fn get_settings<S>(
    State(settings_usecase): State<Arc<RevenueSettingsUseCase<S>>>,
    _admin: AdminUser,
) -> Response
where
    S: RevenueSettingsRepository + Send + Sync + 'static,
{
    match settings_usecase.get_settings().await {
        Ok(settings) => Json(settings).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_settings: get request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn update_settings<S>(
    State(settings_usecase): State<Arc<RevenueSettingsUseCase<S>>>,
    _admin: AdminUser,
    Json(update): Json<UpdateRevenueSettingsModel>,
) -> Response
where
    S: RevenueSettingsRepository + Send + Sync + 'static,
{
    match settings_usecase.update_settings(update).await {
        Ok(settings) => Json(settings).into_response(),
        Err(err) => {
            error!(error = %err, "revenue_settings: update request failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}
