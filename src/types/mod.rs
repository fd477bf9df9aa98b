//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `vehicle`: Vehicle and its type tag
//! - `customer`: Customer and active rental records
//! - `search`: Search criteria for vehicles and customers
//! - `error`: Error types for the rental system

pub mod customer;
pub mod error;
pub mod search;
pub mod vehicle;

pub use customer::{Customer, CustomerId, RentalInfo, LOYALTY_DISCOUNT_THRESHOLD};
pub use error::RentalError;
pub use search::{CustomerSearchCriteria, SearchCriteria};
pub use vehicle::{Vehicle, VehicleType};
