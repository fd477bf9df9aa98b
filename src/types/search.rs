//! Search criteria for vehicles and customers
//!
//! A field left as `None` matches everything. Text fields are compared with the
//! Levenshtein distance and admit results up to the configured maximum distance.

use super::customer::CustomerId;
use super::vehicle::VehicleType;

/// Default maximum edit distance for makes and customer names
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Filter over the fleet
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    /// Exact vehicle type
    pub vehicle_type: Option<VehicleType>,

    /// Make, admitted within `max_distance_make` edits
    pub make: Option<String>,

    /// Model, admitted within `max_distance_model` edits
    pub model: Option<String>,

    pub max_distance_make: usize,

    /// Defaults to 0, so models must match exactly unless widened
    pub max_distance_model: usize,

    /// Exact passenger capacity
    pub passengers: Option<u32>,

    /// Exact storage capacity
    pub storage: Option<u32>,

    /// Required availability
    pub availability: Option<bool>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            vehicle_type: None,
            make: None,
            model: None,
            max_distance_make: DEFAULT_MAX_DISTANCE,
            max_distance_model: 0,
            passengers: None,
            storage: None,
            availability: None,
        }
    }
}

/// Filter over the customer roster
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSearchCriteria {
    /// Exact customer ID
    pub customer_id: Option<CustomerId>,

    /// Name, admitted within `max_distance` edits
    pub name: Option<String>,

    pub max_distance: usize,
}

impl Default for CustomerSearchCriteria {
    fn default() -> Self {
        CustomerSearchCriteria {
            customer_id: None,
            name: None,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}
