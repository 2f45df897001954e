use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::developers::DeveloperEntity;

#[async_trait]
#[automock]
pub trait DeveloperRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<DeveloperEntity>>;
}
