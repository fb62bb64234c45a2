use async_trait::async_trait;

use super::types::EducationUpdate;
use crate::error::UpdatesError;

/// Source of important updates for a child.
///
/// Implementations return an empty list when there is nothing new; an error
/// means the source itself failed. Timeouts are the provider's job.
#[async_trait]
pub trait UpdatesProvider: Send + Sync {
    /// Pending important updates, in the order the source ranks them.
    async fn important_updates(&self, child_id: u64) -> Result<Vec<EducationUpdate>, UpdatesError>;
}

#[async_trait]
impl<P: UpdatesProvider + ?Sized> UpdatesProvider for std::sync::Arc<P> {
    async fn important_updates(&self, child_id: u64) -> Result<Vec<EducationUpdate>, UpdatesError> {
        (**self).important_updates(child_id).await
    }
}

#[async_trait]
impl<P: UpdatesProvider + ?Sized> UpdatesProvider for Box<P> {
    async fn important_updates(&self, child_id: u64) -> Result<Vec<EducationUpdate>, UpdatesError> {
        (**self).important_updates(child_id).await
    }
}
