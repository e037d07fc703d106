use super::models::{SortDirection, SortField};
use crate::schemas::InventoryItem;
use std::cmp::Ordering;

/// Search term and sort order of the inventory table.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryQuery {
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for InventoryQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl InventoryQuery {
    /// Re-selecting the active field flips the direction; a new field starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        let term = self.search_term.to_lowercase();
        term.is_empty()
            || item.name.to_lowercase().contains(&term)
            || item.class.letter().to_lowercase().contains(&term)
    }

    /// Filters then stable-sorts `items`; equal keys keep their input order
    /// in either direction.
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        let mut rows: Vec<&InventoryItem> =
            items.iter().filter(|item| self.matches(item)).collect();
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, self.sort_field);
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }
}

fn compare(a: &InventoryItem, b: &InventoryItem, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Class => a.class.cmp(&b.class),
        SortField::AvailableCount => a.available_count.cmp(&b.available_count),
    }
}

/// Footer shown under a non-empty table.
pub fn summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} vehicles")
}

/// Names of `vehicles` containing `input`, case-insensitively. Empty input
/// yields nothing.
pub fn suggestions<'a>(vehicles: &'a [crate::schemas::Vehicle], input: &str) -> Vec<&'a str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    vehicles
        .iter()
        .filter(|vehicle| vehicle.name.to_lowercase().contains(&needle))
        .map(|vehicle| vehicle.name.as_str())
        .collect()
}
