use crate::interactive::domain::models::{ProviderRequest, ProviderResponse};
use crate::provider::{ProviderError, ProviderOperation, RentalProvider};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs provider requests and packages the outcome for the state machine.
pub struct RentalService {
    provider: Arc<dyn RentalProvider>,
}

impl RentalService {
    pub fn new(provider: Arc<dyn RentalProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, request: ProviderRequest) -> ProviderResponse {
        debug!(?request, "dispatching provider request");
        let started = Instant::now();

        let response = match request {
            ProviderRequest::ListVehicles { id, class } => ProviderResponse::VehiclesLoaded {
                id,
                class,
                result: self.provider.list_vehicles(class).await,
            },
            ProviderRequest::ListInventory { id } => ProviderResponse::InventoryLoaded {
                id,
                result: self.provider.list_inventory().await,
            },
            ProviderRequest::AddStock {
                vehicle_name,
                quantity,
            } => {
                let result = self.provider.add_stock(&vehicle_name, quantity).await;
                ProviderResponse::StockAdded {
                    vehicle_name,
                    quantity,
                    result,
                }
            }
            ProviderRequest::QuoteRental {
                vehicle_name,
                hours,
                kilometers,
            } => ProviderResponse::RentalQuoted {
                result: self
                    .provider
                    .quote_rental(&vehicle_name, hours, kilometers)
                    .await,
            },
            ProviderRequest::ConfirmRental { preview } => {
                let result = self.provider.confirm_rental(&preview).await;
                ProviderResponse::RentalConfirmed { preview, result }
            }
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let operation = response.operation().as_str();
        match response.error() {
            Some(err) => warn!(operation, elapsed_ms, %err, "provider request failed"),
            None => info!(operation, elapsed_ms, "provider request completed"),
        }
        response
    }
}

impl ProviderResponse {
    pub fn operation(&self) -> ProviderOperation {
        match self {
            ProviderResponse::VehiclesLoaded { .. } => ProviderOperation::ListVehicles,
            ProviderResponse::InventoryLoaded { .. } => ProviderOperation::ListInventory,
            ProviderResponse::StockAdded { .. } => ProviderOperation::AddStock,
            ProviderResponse::RentalQuoted { .. } => ProviderOperation::QuoteRental,
            ProviderResponse::RentalConfirmed { .. } => ProviderOperation::ConfirmRental,
        }
    }

    pub fn error(&self) -> Option<&ProviderError> {
        match self {
            ProviderResponse::VehiclesLoaded { result, .. } => result.as_ref().err(),
            ProviderResponse::InventoryLoaded { result, .. } => result.as_ref().err(),
            ProviderResponse::StockAdded { result, .. } => result.as_ref().err(),
            ProviderResponse::RentalQuoted { result } => result.as_ref().err(),
            ProviderResponse::RentalConfirmed { result, .. } => result.as_ref().err(),
        }
    }
}
