//! In-memory provider with canned data and artificial latency
//!
//! The catalog is generated per class, the inventory starts from a fixed seed
//! and is updated by `add_stock` and `confirm_rental` so that a refresh shows
//! the effect of what the user just did. Individual operations can be made to
//! fail, which is how the console's error paths are exercised.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use super::{ProviderError, ProviderOperation, RentalProvider, Result};
use crate::config::LatencySettings;
use crate::pricing::rental_cost;
use crate::schemas::{InventoryItem, RentalPreview, Vehicle, VehicleClass};

/// Configuration for mock provider behavior
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Per-operation delays
    pub latency: LatencySettings,

    /// Operations that fail with `ProviderError::Unavailable`
    pub fail_operations: HashSet<ProviderOperation>,
}

impl MockConfig {
    /// No delays and no failures; used by tests.
    pub fn instant() -> Self {
        Self {
            latency: LatencySettings::zero(),
            fail_operations: HashSet::new(),
        }
    }

    pub fn failing(mut self, operation: ProviderOperation) -> Self {
        self.fail_operations.insert(operation);
        self
    }
}

pub struct MockProvider {
    config: MockConfig,
    inventory: Mutex<Vec<InventoryItem>>,
    calls: Mutex<Vec<ProviderOperation>>,
}

impl MockProvider {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            inventory: Mutex::new(seed_inventory()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Operations received so far, in arrival order.
    pub fn calls(&self) -> Vec<ProviderOperation> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn inventory(&self) -> MutexGuard<'_, Vec<InventoryItem>> {
        self.inventory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records the call, waits out the configured delay and applies failure
    /// injection.
    async fn begin(&self, operation: ProviderOperation) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(operation);

        let delay = self.config.latency.for_operation(operation);
        if delay > Duration::ZERO {
            sleep(delay).await;
        }

        if self.config.fail_operations.contains(&operation) {
            debug!(operation = operation.as_str(), "injected failure");
            return Err(ProviderError::Unavailable(format!(
                "{} is not reachable",
                operation.as_str()
            )));
        }
        Ok(())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

/// Vehicles offered for a class: an economy, a standard and a premium model.
pub fn catalog_for(class: VehicleClass) -> Vec<Vehicle> {
    let letter = class.letter();
    [("Economy Car", 1), ("Standard Car", 2), ("Premium Car", 3)]
        .into_iter()
        .map(|(model, n)| {
            Vehicle::new(
                format!("{letter}-{n}"),
                format!("{model} {letter}{n}"),
                class,
            )
        })
        .collect()
}

fn find_catalog_vehicle(name: &str) -> Option<Vehicle> {
    VehicleClass::ALL
        .iter()
        .flat_map(|class| catalog_for(*class))
        .find(|vehicle| vehicle.name.eq_ignore_ascii_case(name))
}

fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("Economy Car A1", VehicleClass::A, 15),
        InventoryItem::new("Standard Car A2", VehicleClass::A, 8),
        InventoryItem::new("Premium Car B1", VehicleClass::B, 12),
        InventoryItem::new("Luxury Car C1", VehicleClass::C, 5),
    ]
}

#[async_trait]
impl RentalProvider for MockProvider {
    async fn list_vehicles(&self, class: VehicleClass) -> Result<Vec<Vehicle>> {
        self.begin(ProviderOperation::ListVehicles).await?;
        Ok(catalog_for(class))
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryItem>> {
        self.begin(ProviderOperation::ListInventory).await?;
        Ok(self.inventory().clone())
    }

    async fn add_stock(&self, vehicle_name: &str, quantity: u32) -> Result<()> {
        self.begin(ProviderOperation::AddStock).await?;
        if quantity == 0 {
            return Err(ProviderError::Rejected("quantity must be at least 1".to_string()));
        }

        let mut inventory = self.inventory();
        if let Some(item) = inventory
            .iter_mut()
            .find(|item| item.name.eq_ignore_ascii_case(vehicle_name))
        {
            item.available_count = item.available_count.saturating_add(quantity);
            return Ok(());
        }

        // Only catalog vehicles get a new row; anything else is accepted and dropped.
        match find_catalog_vehicle(vehicle_name) {
            Some(vehicle) => {
                inventory.push(InventoryItem::new(vehicle.name, vehicle.class, quantity));
            }
            None => debug!(vehicle_name, quantity, "ignoring stock for unknown vehicle"),
        }
        Ok(())
    }

    async fn quote_rental(
        &self,
        vehicle_name: &str,
        hours: f64,
        kilometers: f64,
    ) -> Result<RentalPreview> {
        self.begin(ProviderOperation::QuoteRental).await?;
        if hours.is_nan() || hours < 1.0 || kilometers.is_nan() || kilometers < 0.0 {
            return Err(ProviderError::Rejected(format!(
                "invalid rental terms: {hours} h, {kilometers} km"
            )));
        }

        let vehicle = find_catalog_vehicle(vehicle_name)
            .ok_or_else(|| ProviderError::UnknownVehicle(vehicle_name.to_string()))?;
        Ok(RentalPreview {
            vehicle_name: vehicle.name,
            class: vehicle.class,
            total_cost: rental_cost(hours, kilometers),
            hours,
            kilometers,
        })
    }

    async fn confirm_rental(&self, preview: &RentalPreview) -> Result<()> {
        self.begin(ProviderOperation::ConfirmRental).await?;
        if let Some(item) = self
            .inventory()
            .iter_mut()
            .find(|item| item.name == preview.vehicle_name)
        {
            item.available_count = item.available_count.saturating_sub(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockProvider {
        MockProvider::new(MockConfig::instant())
    }

    #[tokio::test]
    async fn test_catalog_belongs_to_requested_class() {
        let provider = provider();
        for class in VehicleClass::ALL {
            let vehicles = provider.list_vehicles(class).await.unwrap();
            assert_eq!(vehicles.len(), 3);
            assert!(vehicles.iter().all(|v| v.class == class));
        }
        let b = provider.list_vehicles(VehicleClass::B).await.unwrap();
        assert_eq!(b[0].name, "Economy Car B1");
        assert_eq!(b[2].name, "Premium Car B3");
    }

    #[tokio::test]
    async fn test_vehicle_ids_are_unique_across_classes() {
        let ids: HashSet<String> = VehicleClass::ALL
            .iter()
            .flat_map(|c| catalog_for(*c))
            .map(|v| v.id)
            .collect();
        assert_eq!(ids.len(), 9);
    }

    #[tokio::test]
    async fn test_seed_inventory() {
        let inventory = provider().list_inventory().await.unwrap();
        assert_eq!(inventory.len(), 4);
        assert_eq!(inventory[0], InventoryItem::new("Economy Car A1", VehicleClass::A, 15));
    }

    #[tokio::test]
    async fn test_add_stock_increments_existing_row() {
        let provider = provider();
        provider.add_stock("Economy Car A1", 3).await.unwrap();
        let inventory = provider.list_inventory().await.unwrap();
        assert_eq!(inventory[0].available_count, 18);
    }

    #[tokio::test]
    async fn test_add_stock_appends_catalog_vehicle() {
        let provider = provider();
        provider.add_stock("Premium Car C3", 2).await.unwrap();
        let inventory = provider.list_inventory().await.unwrap();
        assert_eq!(
            inventory.last(),
            Some(&InventoryItem::new("Premium Car C3", VehicleClass::C, 2))
        );
    }

    #[tokio::test]
    async fn test_add_stock_unknown_vehicle_is_accepted() {
        let provider = provider();
        let before = provider.list_inventory().await.unwrap();

        assert_eq!(provider.add_stock("Hovercraft", 1).await, Ok(()));

        let after = provider.list_inventory().await.unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_quote_uses_catalog_class() {
        let preview = provider()
            .quote_rental("Standard Car C2", 2.0, 10.0)
            .await
            .unwrap();
        assert_eq!(preview.class, VehicleClass::C);
        assert_eq!(preview.total_cost, 55.0);
    }

    #[tokio::test]
    async fn test_quote_unknown_vehicle_has_no_default_class() {
        let result = provider().quote_rental("Mystery Van", 2.0, 10.0).await;
        assert!(matches!(result, Err(ProviderError::UnknownVehicle(_))));
    }

    #[tokio::test]
    async fn test_quote_rejects_invalid_terms() {
        let provider = provider();
        assert!(matches!(
            provider.quote_rental("Economy Car A1", 0.5, 0.0).await,
            Err(ProviderError::Rejected(_))
        ));
        assert!(matches!(
            provider.quote_rental("Economy Car A1", 1.0, -1.0).await,
            Err(ProviderError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_confirm_decrements_and_saturates() {
        let provider = provider();
        let preview = provider.quote_rental("Economy Car A1", 1.0, 0.0).await.unwrap();
        provider.confirm_rental(&preview).await.unwrap();
        assert_eq!(provider.list_inventory().await.unwrap()[0].available_count, 14);

        provider.inventory()[0].available_count = 0;
        provider.confirm_rental(&preview).await.unwrap();
        assert_eq!(provider.list_inventory().await.unwrap()[0].available_count, 0);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let provider =
            MockProvider::new(MockConfig::instant().failing(ProviderOperation::ListInventory));
        assert!(matches!(
            provider.list_inventory().await,
            Err(ProviderError::Unavailable(_))
        ));
        assert!(provider.list_vehicles(VehicleClass::A).await.is_ok());
        assert_eq!(
            provider.calls(),
            vec![ProviderOperation::ListInventory, ProviderOperation::ListVehicles]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let provider = MockProvider::default();
        let started = tokio::time::Instant::now();
        provider.quote_rental("Economy Car A1", 1.0, 0.0).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
