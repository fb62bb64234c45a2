//! In-process update sources.

use async_trait::async_trait;
use std::path::Path;

use super::traits::UpdatesProvider;
use super::types::EducationUpdate;
use crate::error::UpdatesError;

/// Provider that never has anything new.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUpdates;

#[async_trait]
impl UpdatesProvider for NoUpdates {
    async fn important_updates(&self, _child_id: u64) -> Result<Vec<EducationUpdate>, UpdatesError> {
        Ok(Vec::new())
    }
}

/// Provider backed by a fixed list, returned for every child.
#[derive(Debug, Clone, Default)]
pub struct StaticUpdatesProvider {
    updates: Vec<EducationUpdate>,
}

impl StaticUpdatesProvider {
    pub fn new(updates: Vec<EducationUpdate>) -> Self {
        Self { updates }
    }

    /// Load a JSON array of updates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array
    /// of updates.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, UpdatesError> {
        let content = std::fs::read_to_string(path)?;
        let updates: Vec<EducationUpdate> = serde_json::from_str(&content)?;
        Ok(Self::new(updates))
    }

    pub fn updates(&self) -> &[EducationUpdate] {
        &self.updates
    }
}

#[async_trait]
impl UpdatesProvider for StaticUpdatesProvider {
    async fn important_updates(&self, _child_id: u64) -> Result<Vec<EducationUpdate>, UpdatesError> {
        Ok(self.updates.clone())
    }
}
