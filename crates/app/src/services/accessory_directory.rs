//! Accessory directory — use-cases for listing and looking up accessories.
//!
//! There is no cache: every call asks the client for all services and
//! rebuilds the accessory snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use hapgate_domain::accessory::{AccessoryListing, AccessoryRecord};
use hapgate_domain::error::{HubError, NotFoundError};
use hapgate_domain::id::AccessoryUniqueId;
use hapgate_domain::layout::{self, LayoutRoom};
use hapgate_domain::time::{Timestamp, now};

use crate::ports::{AccessoryClient, DiscoveredService};

/// Application service for accessory lookups and listings.
pub struct AccessoryDirectory<C> {
    client: Arc<C>,
}

impl<C> Clone for AccessoryDirectory<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: AccessoryClient> AccessoryDirectory<C> {
    /// Create a new directory backed by the given client.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// The underlying accessory client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch all services and group them into accessories.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Upstream`] when the client fails.
    pub async fn snapshot(&self) -> Result<Vec<AccessoryRecord>, HubError> {
        let services = self.client.get_all_services().await?;
        Ok(group_services(services, now()))
    }

    /// List every accessory with its flattened characteristic summaries.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Upstream`] when the client fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<AccessoryListing>, HubError> {
        let accessories = self.snapshot().await?;
        tracing::debug!(count = accessories.len(), "listed accessories");
        Ok(accessories.into_iter().map(AccessoryListing::from).collect())
    }

    /// Look up an accessory by unique id.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no accessory matches, or
    /// [`HubError::Upstream`] when the client fails.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_unique_id(
        &self,
        unique_id: &AccessoryUniqueId,
    ) -> Result<AccessoryRecord, HubError> {
        self.snapshot()
            .await?
            .into_iter()
            .find(|a| &a.unique_id == unique_id)
            .ok_or_else(|| NotFoundError::Accessory(unique_id.clone()).into())
    }

    /// Look up an accessory and refresh the live values of all its services.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no accessory matches, or
    /// [`HubError::Upstream`] when the client fails.
    #[tracing::instrument(skip(self))]
    pub async fn detail(&self, unique_id: &AccessoryUniqueId) -> Result<AccessoryRecord, HubError> {
        let mut accessory = self.find_by_unique_id(unique_id).await?;
        let mut services = Vec::with_capacity(accessory.services.len());
        for service in &accessory.services {
            services.push(
                self.client
                    .refresh_characteristics(&accessory.unique_id, service)
                    .await?,
            );
        }
        accessory.services = services;
        accessory.fetched_at = now();
        Ok(accessory)
    }

    /// Refresh a single service of an accessory, identified by `service_iid`.
    ///
    /// The accessory is returned unchanged when it has no such service.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Upstream`] when the client fails.
    pub async fn refresh_service(
        &self,
        accessory: AccessoryRecord,
        service_iid: u32,
    ) -> Result<AccessoryRecord, HubError> {
        let Some(service) = accessory.services.iter().find(|s| s.iid == service_iid) else {
            return Ok(accessory);
        };
        let refreshed = self
            .client
            .refresh_characteristics(&accessory.unique_id, service)
            .await?;
        let mut accessory = accessory.with_service(refreshed);
        accessory.fetched_at = now();
        Ok(accessory)
    }

    /// Group accessories by room.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Upstream`] when the client fails.
    #[tracing::instrument(skip(self))]
    pub async fn layout(&self) -> Result<Vec<LayoutRoom>, HubError> {
        let accessories = self.snapshot().await?;
        Ok(layout::group_by_room(&accessories))
    }
}

/// Build accessories from a flat service list, indexed by unique id.
///
/// Accessories appear in the order their first service was seen; services
/// keep the client's order. Name and room come from the first service.
fn group_services(services: Vec<DiscoveredService>, fetched_at: Timestamp) -> Vec<AccessoryRecord> {
    let mut accessories: Vec<AccessoryRecord> = Vec::new();
    let mut index: HashMap<AccessoryUniqueId, usize> = HashMap::new();

    for discovered in services {
        if let Some(&position) = index.get(&discovered.unique_id) {
            accessories[position].services.push(discovered.service);
            continue;
        }
        index.insert(discovered.unique_id.clone(), accessories.len());
        accessories.push(AccessoryRecord {
            unique_id: discovered.unique_id,
            name: discovered.accessory_name,
            room: discovered.room,
            services: vec![discovered.service],
            fetched_at,
        });
    }

    accessories
}
