#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::interactive::domain::models::{
        Focus, Mode, NotificationKind, ProviderRequest, ProviderResponse, SortDirection, SortField,
    };
    use crate::interactive::domain::validation::{
        Field, HOURS_NOT_HALF_STEP, QUANTITY_TOO_SMALL, VEHICLE_NAME_REQUIRED,
        VEHICLE_NOT_IN_CATALOG,
    };
    use crate::provider::ProviderError;
    use crate::provider::mock::catalog_for;
    use crate::schemas::{InventoryItem, RentalPreview, VehicleClass};

    fn create_test_state() -> AppState {
        AppState::new(VehicleClass::A)
    }

    fn unavailable() -> ProviderError {
        ProviderError::Unavailable("offline".to_string())
    }

    fn test_inventory() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("Economy Car A1", VehicleClass::A, 15),
            InventoryItem::new("Premium Car B1", VehicleClass::B, 3),
            InventoryItem::new("Luxury Car C1", VehicleClass::C, 0),
        ]
    }

    fn test_preview() -> RentalPreview {
        RentalPreview {
            vehicle_name: "Economy Car A1".to_string(),
            class: VehicleClass::A,
            total_cost: 55.0,
            hours: 2.0,
            kilometers: 10.0,
        }
    }

    /// State with class A loaded and the seed inventory applied.
    fn loaded_state() -> AppState {
        let mut state = create_test_state();
        state.startup();
        state.update(Message::Provider(ProviderResponse::VehiclesLoaded {
            id: state.catalog.current_request_id,
            class: VehicleClass::A,
            result: Ok(catalog_for(VehicleClass::A)),
        }));
        state.update(Message::Provider(ProviderResponse::InventoryLoaded {
            id: state.inventory.current_request_id,
            result: Ok(test_inventory()),
        }));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.focus, Focus::TypeSelector);
        assert_eq!(state.selected_class, VehicleClass::A);
        assert!(state.catalog.vehicles.is_empty());
        assert!(state.rental.preview.is_none());
        assert_eq!(state.rental_form.hours, "1");
        assert_eq!(state.rental_form.kilometers, "0");
        assert_eq!(state.stock_form.quantity, "1");
        assert!(state.ui.message.is_none());
    }

    #[test]
    fn test_startup_fetches_catalog_and_inventory() {
        let mut state = create_test_state();
        let command = state.startup();

        assert_eq!(
            command.requests(),
            vec![
                &ProviderRequest::ListVehicles {
                    id: 1,
                    class: VehicleClass::A
                },
                &ProviderRequest::ListInventory { id: 1 },
            ]
        );
        assert!(state.catalog.is_loading);
        assert!(state.inventory.is_loading);
    }

    #[test]
    fn test_select_class_issues_tagged_fetch() {
        let mut state = loaded_state();
        let command = state.update(Message::SelectClass(VehicleClass::B));

        assert_eq!(state.selected_class, VehicleClass::B);
        assert!(state.catalog.is_loading);
        assert!(state.catalog.vehicles.is_empty());
        assert_eq!(
            command,
            Command::Request(ProviderRequest::ListVehicles {
                id: 2,
                class: VehicleClass::B
            })
        );
    }

    #[test]
    fn test_reselecting_loaded_class_is_noop() {
        let mut state = loaded_state();
        let vehicles_before = state.catalog.vehicles.clone();

        let command = state.update(Message::SelectClass(VehicleClass::A));

        assert_eq!(command, Command::None);
        assert!(!state.catalog.is_loading);
        assert_eq!(state.catalog.vehicles, vehicles_before);
    }

    #[test]
    fn test_reselecting_pending_class_is_noop() {
        let mut state = create_test_state();
        state.startup();

        assert_eq!(state.update(Message::SelectClass(VehicleClass::A)), Command::None);
        assert_eq!(state.catalog.current_request_id, 1);
    }

    #[test]
    fn test_reselecting_after_failure_retries() {
        let mut state = create_test_state();
        state.startup();
        state.update(Message::Provider(ProviderResponse::VehiclesLoaded {
            id: 1,
            class: VehicleClass::A,
            result: Err(unavailable()),
        }));

        let command = state.update(Message::SelectClass(VehicleClass::A));
        assert!(matches!(
            command,
            Command::Request(ProviderRequest::ListVehicles { id: 2, .. })
        ));
    }

    #[test]
    fn test_stale_catalog_response_is_discarded() {
        let mut state = create_test_state();
        state.startup();
        state.update(Message::SelectClass(VehicleClass::B));
        state.update(Message::SelectClass(VehicleClass::C));

        // The B response arrives after C was requested.
        state.update(Message::Provider(ProviderResponse::VehiclesLoaded {
            id: 2,
            class: VehicleClass::B,
            result: Ok(catalog_for(VehicleClass::B)),
        }));
        assert!(state.catalog.vehicles.is_empty());
        assert!(state.catalog.is_loading);

        state.update(Message::Provider(ProviderResponse::VehiclesLoaded {
            id: 3,
            class: VehicleClass::C,
            result: Ok(catalog_for(VehicleClass::C)),
        }));
        assert!(!state.catalog.is_loading);
        assert_eq!(state.catalog.loaded_class, Some(VehicleClass::C));
        assert!(state.catalog.vehicles.iter().all(|v| v.class == VehicleClass::C));
    }

    #[test]
    fn test_catalog_failure_notifies() {
        let mut state = create_test_state();
        state.startup();
        let command = state.update(Message::Provider(ProviderResponse::VehiclesLoaded {
            id: 1,
            class: VehicleClass::A,
            result: Err(unavailable()),
        }));

        assert_eq!(command, Command::ScheduleClearMessage(3000));
        let message = state.ui.message.as_ref().unwrap();
        assert_eq!(message.kind, NotificationKind::Error);
        assert!(message.description.starts_with("Failed to fetch vehicles"));
        assert!(!state.catalog.is_loading);
    }

    #[test]
    fn test_inventory_failure_keeps_prior_items() {
        let mut state = loaded_state();
        state.update(Message::RefreshInventory);
        state.update(Message::Provider(ProviderResponse::InventoryLoaded {
            id: state.inventory.current_request_id,
            result: Err(unavailable()),
        }));

        assert_eq!(state.inventory.items, test_inventory());
        assert!(!state.inventory.is_loading);
        assert_eq!(
            state.ui.message.as_ref().map(|m| m.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn test_stale_inventory_response_is_discarded() {
        let mut state = loaded_state();
        state.update(Message::RefreshInventory);
        state.update(Message::RefreshInventory);
        let latest = state.inventory.current_request_id;

        state.update(Message::Provider(ProviderResponse::InventoryLoaded {
            id: latest - 1,
            result: Ok(Vec::new()),
        }));
        assert_eq!(state.inventory.items.len(), 3);
        assert!(state.inventory.is_loading);
    }

    #[test]
    fn test_inventory_search_and_sort() {
        let mut state = loaded_state();
        state.update(Message::InventorySearchChanged("premium".to_string()));
        let names: Vec<&str> = state.visible_inventory().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Premium Car B1"]);

        state.update(Message::InventorySearchChanged(String::new()));
        state.update(Message::SortInventory(SortField::AvailableCount));
        state.update(Message::SortInventory(SortField::AvailableCount));
        assert_eq!(state.inventory.query.sort_direction, SortDirection::Descending);
        assert_eq!(state.visible_inventory()[0].name, "Economy Car A1");
    }

    #[test]
    fn test_inventory_selection_is_bounded() {
        let mut state = loaded_state();
        state.update(Message::InventorySelectionChanged(2));
        assert_eq!(state.inventory.selected_index, 2);
        state.update(Message::InventorySelectionChanged(10));
        assert_eq!(state.inventory.selected_index, 2);
    }

    #[test]
    fn test_stock_form_validation_errors() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::StockNameChanged("   ".to_string()));
        state.update(Message::StockQuantityChanged("0".to_string()));

        let command = state.update(Message::SubmitStock);

        assert_eq!(command, Command::None);
        assert_eq!(state.stock_form.errors.get(Field::VehicleName), Some(VEHICLE_NAME_REQUIRED));
        assert_eq!(state.stock_form.errors.get(Field::Quantity), Some(QUANTITY_TOO_SMALL));
        assert!(!state.stock_form.is_submitting);
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::StockNameChanged(String::new()));
        state.update(Message::StockQuantityChanged("0".to_string()));
        state.update(Message::SubmitStock);

        state.update(Message::StockQuantityChanged("4".to_string()));
        assert!(state.stock_form.errors.get(Field::Quantity).is_none());
        assert!(state.stock_form.errors.get(Field::VehicleName).is_some());
    }

    #[test]
    fn test_stock_suggestions_follow_catalog() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::StockNameChanged("car a".to_string()));

        assert!(state.stock_form.show_suggestions);
        assert_eq!(state.stock_form.suggestions.len(), 3);

        state.update(Message::SelectSuggestion("Premium Car A3".to_string()));
        assert_eq!(state.stock_form.vehicle_name, "Premium Car A3");
        assert!(!state.stock_form.show_suggestions);
    }

    #[test]
    fn test_open_stock_form_prefills_selected_row() {
        let mut state = loaded_state();
        state.update(Message::InventorySelectionChanged(1));
        state.update(Message::OpenStockForm);

        assert_eq!(state.mode, Mode::AddStock);
        assert_eq!(state.stock_form.vehicle_name, "Luxury Car C1");
    }

    #[test]
    fn test_stock_submission_success_resets_and_refreshes() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::StockNameChanged("Economy Car A1".to_string()));
        state.update(Message::StockQuantityChanged("3".to_string()));

        let command = state.update(Message::SubmitStock);
        assert_eq!(
            command,
            Command::Request(ProviderRequest::AddStock {
                vehicle_name: "Economy Car A1".to_string(),
                quantity: 3
            })
        );
        assert!(state.stock_form.is_submitting);
        assert_eq!(state.update(Message::SubmitStock), Command::None);

        let command = state.update(Message::Provider(ProviderResponse::StockAdded {
            vehicle_name: "Economy Car A1".to_string(),
            quantity: 3,
            result: Ok(()),
        }));

        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.stock_form.vehicle_name, "");
        assert_eq!(state.stock_form.quantity, "1");
        assert_eq!(
            state.ui.message.as_ref().unwrap().description,
            "Added 3 units of Economy Car A1 to inventory"
        );
        assert!(command
            .requests()
            .iter()
            .any(|r| matches!(r, ProviderRequest::ListInventory { .. })));
    }

    #[test]
    fn test_stock_submission_failure_keeps_form() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::StockNameChanged("Economy Car A1".to_string()));
        state.update(Message::StockQuantityChanged("3".to_string()));
        state.update(Message::SubmitStock);

        state.update(Message::Provider(ProviderResponse::StockAdded {
            vehicle_name: "Economy Car A1".to_string(),
            quantity: 3,
            result: Err(unavailable()),
        }));

        assert_eq!(state.mode, Mode::AddStock);
        assert_eq!(state.stock_form.vehicle_name, "Economy Car A1");
        assert_eq!(state.stock_form.quantity, "3");
        assert!(!state.stock_form.is_submitting);
        assert_eq!(
            state.ui.message.as_ref().map(|m| m.kind),
            Some(NotificationKind::Error)
        );
    }

    #[test]
    fn test_close_stock_form_ignored_while_submitting() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::StockNameChanged("Economy Car A1".to_string()));
        state.update(Message::SubmitStock);

        state.update(Message::CloseStockForm);
        assert_eq!(state.mode, Mode::AddStock);
    }

    #[test]
    fn test_preview_requires_catalog_vehicle() {
        let mut state = loaded_state();
        state.update(Message::RentalVehicleSelected("Premium Car B3".to_string()));

        assert_eq!(state.update(Message::SubmitRental), Command::None);
        assert_eq!(state.rental_form.errors.get(Field::Vehicle), Some(VEHICLE_NOT_IN_CATALOG));
    }

    #[test]
    fn test_preview_rejects_partial_hours() {
        let mut state = loaded_state();
        state.update(Message::RentalVehicleSelected("Economy Car A1".to_string()));
        state.update(Message::RentalHoursChanged("1.25".to_string()));

        assert_eq!(state.update(Message::SubmitRental), Command::None);
        assert_eq!(state.rental_form.errors.get(Field::Hours), Some(HOURS_NOT_HALF_STEP));
    }

    #[test]
    fn test_preview_disabled_without_catalog() {
        let mut state = create_test_state();
        state.rental_form.vehicle = Some("Economy Car A1".to_string());

        assert!(!state.rental_form_enabled());
        assert_eq!(state.update(Message::SubmitRental), Command::None);
        assert!(state.rental_form.errors.is_empty());
    }

    #[test]
    fn test_quote_opens_confirmation() {
        let mut state = loaded_state();
        state.update(Message::RentalVehicleSelected("Economy Car A1".to_string()));
        state.update(Message::RentalHoursChanged("2".to_string()));
        state.update(Message::RentalKilometersChanged("10".to_string()));

        let command = state.update(Message::SubmitRental);
        assert_eq!(
            command,
            Command::Request(ProviderRequest::QuoteRental {
                vehicle_name: "Economy Car A1".to_string(),
                hours: 2.0,
                kilometers: 10.0
            })
        );
        assert!(state.rental_form.is_submitting);

        state.update(Message::Provider(ProviderResponse::RentalQuoted {
            result: Ok(test_preview()),
        }));
        assert_eq!(state.mode, Mode::ConfirmRental);
        assert_eq!(state.rental.preview, Some(test_preview()));
        assert!(!state.rental_form.is_submitting);
    }

    #[test]
    fn test_stock_form_stays_closed_while_quote_pending() {
        let mut state = loaded_state();
        state.update(Message::RentalVehicleSelected("Economy Car A1".to_string()));
        state.update(Message::SubmitRental);

        assert_eq!(state.update(Message::OpenStockForm), Command::None);
        state.update(Message::StockNameChanged("Economy Car A1".to_string()));
        assert_eq!(state.mode, Mode::Browse);

        state.update(Message::Provider(ProviderResponse::RentalQuoted {
            result: Ok(test_preview()),
        }));
        assert_eq!(state.mode, Mode::ConfirmRental);

        state.update(Message::CancelRental);
        state.update(Message::OpenStockForm);
        assert_eq!(state.mode, Mode::AddStock);
    }

    #[test]
    fn test_quote_arriving_under_help_opens_after_close() {
        let mut state = loaded_state();
        state.update(Message::RentalVehicleSelected("Economy Car A1".to_string()));
        state.update(Message::SubmitRental);
        state.update(Message::ShowHelp);

        state.update(Message::Provider(ProviderResponse::RentalQuoted {
            result: Ok(test_preview()),
        }));
        assert_eq!(state.mode, Mode::Help);

        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::ConfirmRental);
    }

    #[test]
    fn test_quote_failure_leaves_no_preview() {
        let mut state = loaded_state();
        state.rental_form.is_submitting = true;
        state.update(Message::Provider(ProviderResponse::RentalQuoted {
            result: Err(ProviderError::UnknownVehicle("Mystery Van".to_string())),
        }));

        assert!(state.rental.preview.is_none());
        assert_eq!(state.mode, Mode::Browse);
        assert!(state.ui.message.as_ref().unwrap().description.contains("Mystery Van"));
    }

    #[test]
    fn test_confirm_without_preview_is_noop() {
        let mut state = loaded_state();
        assert_eq!(state.update(Message::ConfirmRental), Command::None);
        assert!(!state.rental.is_confirming);
    }

    #[test]
    fn test_confirm_success_clears_preview() {
        let mut state = loaded_state();
        state.rental.preview = Some(test_preview());
        state.mode = Mode::ConfirmRental;

        let command = state.update(Message::ConfirmRental);
        assert_eq!(
            command,
            Command::Request(ProviderRequest::ConfirmRental {
                preview: test_preview()
            })
        );
        assert_eq!(state.update(Message::ConfirmRental), Command::None);

        let command = state.update(Message::Provider(ProviderResponse::RentalConfirmed {
            preview: test_preview(),
            result: Ok(()),
        }));
        assert_eq!(state.mode, Mode::Browse);
        assert!(state.rental.preview.is_none());
        assert_eq!(
            state.ui.message.as_ref().unwrap().description,
            "Successfully rented Economy Car A1"
        );
        assert!(command
            .requests()
            .iter()
            .any(|r| matches!(r, ProviderRequest::ListInventory { .. })));
    }

    #[test]
    fn test_confirm_failure_keeps_preview_open() {
        let mut state = loaded_state();
        state.rental.preview = Some(test_preview());
        state.mode = Mode::ConfirmRental;
        state.update(Message::ConfirmRental);

        state.update(Message::Provider(ProviderResponse::RentalConfirmed {
            preview: test_preview(),
            result: Err(unavailable()),
        }));
        assert_eq!(state.mode, Mode::ConfirmRental);
        assert_eq!(state.rental.preview, Some(test_preview()));
        assert!(!state.rental.is_confirming);
    }

    #[test]
    fn test_cancel_rental_clears_preview() {
        let mut state = loaded_state();
        state.rental.preview = Some(test_preview());
        state.mode = Mode::ConfirmRental;

        assert_eq!(state.update(Message::CancelRental), Command::None);
        assert_eq!(state.mode, Mode::Browse);
        assert!(state.rental.preview.is_none());
    }

    #[test]
    fn test_cancel_ignored_while_confirming() {
        let mut state = loaded_state();
        state.rental.preview = Some(test_preview());
        state.mode = Mode::ConfirmRental;
        state.update(Message::ConfirmRental);

        state.update(Message::CancelRental);
        assert_eq!(state.mode, Mode::ConfirmRental);
        assert!(state.rental.preview.is_some());
    }

    #[test]
    fn test_new_catalog_drops_unlisted_rental_vehicle() {
        let mut state = loaded_state();
        state.update(Message::RentalVehicleSelected("Economy Car A1".to_string()));
        state.update(Message::SelectClass(VehicleClass::B));
        state.update(Message::Provider(ProviderResponse::VehiclesLoaded {
            id: state.catalog.current_request_id,
            class: VehicleClass::B,
            result: Ok(catalog_for(VehicleClass::B)),
        }));

        assert!(state.rental_form.vehicle.is_none());
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut state = loaded_state();
        state.update(Message::OpenStockForm);
        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);

        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::AddStock);
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = create_test_state();
        state.update(Message::FocusNext);
        assert_eq!(state.focus, Focus::Inventory);
        state.update(Message::FocusNext);
        assert_eq!(state.focus, Focus::RentalForm);
        state.update(Message::FocusPrevious);
        assert_eq!(state.focus, Focus::Inventory);
    }

    #[test]
    fn test_clear_message() {
        let mut state = create_test_state().with_message_clear_delay(10);
        state.startup();
        let command = state.update(Message::Provider(ProviderResponse::InventoryLoaded {
            id: 1,
            result: Err(unavailable()),
        }));
        assert_eq!(command, Command::ScheduleClearMessage(10));

        state.update(Message::ClearMessage);
        assert!(state.ui.message.is_none());
    }
}
