//! Field validation shared by the stock intake and rental forms
//!
//! A form is checked against a list of [`Rule`]s. Each rule names the field it
//! reports on, the message shown under that field and a predicate. Only the
//! first failing rule of a field is reported.

use crate::schemas::Vehicle;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    VehicleName,
    Quantity,
    Vehicle,
    Hours,
    Kilometers,
}

pub struct Rule<F> {
    pub field: Field,
    pub message: &'static str,
    pub check: fn(&F) -> bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn single(field: Field, message: &'static str) -> Self {
        let mut errors = Self::default();
        errors.0.insert(field, message);
        errors
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate<F>(form: &F, rules: &[Rule<F>]) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for rule in rules {
        if errors.0.contains_key(&rule.field) {
            continue;
        }
        if !(rule.check)(form) {
            errors.0.insert(rule.field, rule.message);
        }
    }
    errors
}

pub const VEHICLE_NAME_REQUIRED: &str = "Vehicle name is required";
pub const QUANTITY_NOT_WHOLE: &str = "Quantity must be a whole number";
pub const QUANTITY_TOO_SMALL: &str = "Quantity must be at least 1";
pub const QUANTITY_TOO_LARGE: &str = "Quantity is too large";
pub const VEHICLE_REQUIRED: &str = "Please select a vehicle";
pub const VEHICLE_NOT_IN_CATALOG: &str = "Vehicle is not in the current catalog";
pub const HOURS_NOT_NUMBER: &str = "Enter a number of hours";
pub const HOURS_TOO_SMALL: &str = "Hours must be at least 1";
pub const HOURS_NOT_HALF_STEP: &str = "Hours must be in half-hour increments";
pub const KILOMETERS_NOT_NUMBER: &str = "Enter a number of kilometers";
pub const KILOMETERS_NEGATIVE: &str = "Kilometers cannot be negative";

fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Raw stock intake input.
#[derive(Clone, Copy, Debug)]
pub struct StockDraft<'a> {
    pub vehicle_name: &'a str,
    pub quantity: &'a str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StockSubmission {
    pub vehicle_name: String,
    pub quantity: u32,
}

fn has_vehicle_name(draft: &StockDraft<'_>) -> bool {
    !draft.vehicle_name.trim().is_empty()
}

fn quantity_is_whole(draft: &StockDraft<'_>) -> bool {
    parse_integer(draft.quantity).is_some()
}

fn quantity_at_least_one(draft: &StockDraft<'_>) -> bool {
    parse_integer(draft.quantity).is_some_and(|q| q >= 1)
}

fn quantity_fits(draft: &StockDraft<'_>) -> bool {
    parse_integer(draft.quantity).is_some_and(|q| u32::try_from(q).is_ok())
}

pub fn stock_rules<'a>() -> [Rule<StockDraft<'a>>; 4] {
    [
        Rule {
            field: Field::VehicleName,
            message: VEHICLE_NAME_REQUIRED,
            check: has_vehicle_name,
        },
        Rule {
            field: Field::Quantity,
            message: QUANTITY_NOT_WHOLE,
            check: quantity_is_whole,
        },
        Rule {
            field: Field::Quantity,
            message: QUANTITY_TOO_SMALL,
            check: quantity_at_least_one,
        },
        Rule {
            field: Field::Quantity,
            message: QUANTITY_TOO_LARGE,
            check: quantity_fits,
        },
    ]
}

impl StockDraft<'_> {
    pub fn validate(&self) -> Result<StockSubmission, FieldErrors> {
        let errors = validate(self, &stock_rules());
        if !errors.is_empty() {
            return Err(errors);
        }
        let quantity = parse_integer(self.quantity)
            .and_then(|q| u32::try_from(q).ok())
            .ok_or_else(|| FieldErrors::single(Field::Quantity, QUANTITY_NOT_WHOLE))?;
        Ok(StockSubmission {
            vehicle_name: self.vehicle_name.trim().to_string(),
            quantity,
        })
    }
}

/// Raw rental request input, checked against the loaded catalog.
#[derive(Clone, Copy, Debug)]
pub struct RentalDraft<'a> {
    pub vehicle: Option<&'a str>,
    pub hours: &'a str,
    pub kilometers: &'a str,
    pub catalog: &'a [Vehicle],
}

#[derive(Clone, Debug, PartialEq)]
pub struct RentalSubmission {
    pub vehicle_name: String,
    pub hours: f64,
    pub kilometers: f64,
}

fn vehicle_selected(draft: &RentalDraft<'_>) -> bool {
    draft.vehicle.is_some_and(|name| !name.is_empty())
}

fn vehicle_in_catalog(draft: &RentalDraft<'_>) -> bool {
    draft
        .vehicle
        .is_some_and(|name| draft.catalog.iter().any(|v| v.name == name))
}

fn hours_is_number(draft: &RentalDraft<'_>) -> bool {
    parse_number(draft.hours).is_some()
}

fn hours_at_least_one(draft: &RentalDraft<'_>) -> bool {
    parse_number(draft.hours).is_some_and(|h| h >= 1.0)
}

fn is_half_hour_step(hours: f64) -> bool {
    (hours * 2.0).fract() == 0.0
}

fn hours_half_step(draft: &RentalDraft<'_>) -> bool {
    parse_number(draft.hours).is_some_and(is_half_hour_step)
}

fn kilometers_is_number(draft: &RentalDraft<'_>) -> bool {
    parse_number(draft.kilometers).is_some()
}

fn kilometers_not_negative(draft: &RentalDraft<'_>) -> bool {
    parse_number(draft.kilometers).is_some_and(|km| km >= 0.0)
}

pub fn rental_rules<'a>() -> [Rule<RentalDraft<'a>>; 7] {
    [
        Rule {
            field: Field::Vehicle,
            message: VEHICLE_REQUIRED,
            check: vehicle_selected,
        },
        Rule {
            field: Field::Vehicle,
            message: VEHICLE_NOT_IN_CATALOG,
            check: vehicle_in_catalog,
        },
        Rule {
            field: Field::Hours,
            message: HOURS_NOT_NUMBER,
            check: hours_is_number,
        },
        Rule {
            field: Field::Hours,
            message: HOURS_TOO_SMALL,
            check: hours_at_least_one,
        },
        Rule {
            field: Field::Hours,
            message: HOURS_NOT_HALF_STEP,
            check: hours_half_step,
        },
        Rule {
            field: Field::Kilometers,
            message: KILOMETERS_NOT_NUMBER,
            check: kilometers_is_number,
        },
        Rule {
            field: Field::Kilometers,
            message: KILOMETERS_NEGATIVE,
            check: kilometers_not_negative,
        },
    ]
}

/// Checks already-parsed rental terms, as given to `rentdesk quote`.
/// Returns the message of the first rule they break.
pub fn rental_terms_error(hours: f64, kilometers: f64) -> Option<&'static str> {
    if !hours.is_finite() {
        Some(HOURS_NOT_NUMBER)
    } else if hours < 1.0 {
        Some(HOURS_TOO_SMALL)
    } else if !is_half_hour_step(hours) {
        Some(HOURS_NOT_HALF_STEP)
    } else if !kilometers.is_finite() {
        Some(KILOMETERS_NOT_NUMBER)
    } else if kilometers < 0.0 {
        Some(KILOMETERS_NEGATIVE)
    } else {
        None
    }
}

impl RentalDraft<'_> {
    pub fn validate(&self) -> Result<RentalSubmission, FieldErrors> {
        let errors = validate(self, &rental_rules());
        if !errors.is_empty() {
            return Err(errors);
        }
        match (self.vehicle, parse_number(self.hours), parse_number(self.kilometers)) {
            (Some(vehicle), Some(hours), Some(kilometers)) => Ok(RentalSubmission {
                vehicle_name: vehicle.to_string(),
                hours,
                kilometers,
            }),
            _ => Err(FieldErrors::single(Field::Vehicle, VEHICLE_REQUIRED)),
        }
    }
}
