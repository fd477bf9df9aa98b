//! Criteria matching for vehicle and customer search
//!
//! An entity matches when every criterion that is set passes. Unset criteria are
//! wildcards.

use crate::core::fuzzy::is_fuzzy_match;
use crate::types::{Customer, CustomerSearchCriteria, SearchCriteria, Vehicle};

/// Whether `vehicle` passes every set field of `criteria`
pub fn vehicle_matches(vehicle: &Vehicle, criteria: &SearchCriteria) -> bool {
    if criteria
        .vehicle_type
        .is_some_and(|vehicle_type| vehicle.vehicle_type() != vehicle_type)
    {
        return false;
    }

    if let Some(make) = criteria.make.as_deref().filter(|m| !m.is_empty()) {
        if !is_fuzzy_match(vehicle.make(), make, criteria.max_distance_make) {
            return false;
        }
    }

    if let Some(model) = criteria.model.as_deref().filter(|m| !m.is_empty()) {
        if !is_fuzzy_match(vehicle.model(), model, criteria.max_distance_model) {
            return false;
        }
    }

    criteria.passengers.map_or(true, |p| vehicle.passengers() == p)
        && criteria.storage.map_or(true, |s| vehicle.storage() == s)
        && criteria
            .availability
            .map_or(true, |a| vehicle.is_available() == a)
}

/// Whether `customer` passes every set field of `criteria`
pub fn customer_matches(customer: &Customer, criteria: &CustomerSearchCriteria) -> bool {
    if criteria
        .customer_id
        .is_some_and(|id| customer.customer_id() != id)
    {
        return false;
    }

    match criteria.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => is_fuzzy_match(customer.name(), name, criteria.max_distance),
        None => true,
    }
}
