use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::revenue_settings::RevenueSettingsModel;

#[async_trait]
#[automock]
pub trait RevenueSettingsRepository {
    /// The persisted settings row, if an admin has ever saved one.
    async fn get(&self) -> Result<Option<RevenueSettingsModel>>;

    /// Singleton upsert: creates the row if absent, otherwise updates it.
    async fn upsert(&self, settings: RevenueSettingsModel) -> Result<RevenueSettingsModel>;
}
