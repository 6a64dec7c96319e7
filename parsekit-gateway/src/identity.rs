//! Default installation-identity controller.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use parsekit_core::traits::InstallationController;

/// Installation controller generating a uuid-v4 id on first use and
/// caching it for the controller's lifetime.
///
/// Hosts with durable device identity supply their own implementation;
/// this one covers processes without persistent storage.
#[derive(Debug, Default)]
pub struct CachedInstallationController {
    id: RwLock<Option<String>>,
}

impl CachedInstallationController {
    /// Creates a controller with no id assigned yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller pinned to a known installation id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: RwLock::new(Some(id.into())),
        }
    }
}

#[async_trait]
impl InstallationController for CachedInstallationController {
    async fn current_installation_id(&self) -> String {
        if let Some(id) = self.id.read().clone() {
            return id;
        }
        self.id
            .write()
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone()
    }
}
