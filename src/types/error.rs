//! Error types for the fleet rental system
//!
//! This module defines all error types that can occur while managing the fleet,
//! the customer roster, rentals and the flat-file snapshots.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Vehicle or customer ID not found, duplicate IDs
//! - **Rental Errors**: Vehicle unavailable, vehicle not rented, invalid dates
//! - **File Errors**: File cannot be opened, I/O failures while writing
//! - **Record Errors**: Malformed lines in a data file (recoverable, the line is skipped)

use super::customer::CustomerId;
use thiserror::Error;

/// Main error type for the rental system
///
/// Domain-rule violations are returned to the caller of the workflow engine.
/// Record errors are produced while loading and are logged and skipped by the loader.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RentalError {
    /// No vehicle with this ID exists in the fleet
    #[error("Vehicle ID {vehicle_id} not found")]
    VehicleNotFound {
        /// The unresolved vehicle ID
        vehicle_id: String,
    },

    /// No customer with this ID exists in the roster
    #[error("Customer ID {customer_id} not found")]
    CustomerNotFound {
        /// The unresolved customer ID
        customer_id: CustomerId,
    },

    /// A vehicle with this ID is already part of the fleet
    #[error("Vehicle with ID {vehicle_id} already exists")]
    DuplicateVehicleId {
        /// The duplicated vehicle ID
        vehicle_id: String,
    },

    /// A customer with this ID is already part of the roster
    #[error("Customer with ID {customer_id} already exists")]
    DuplicateCustomerId {
        /// The duplicated customer ID
        customer_id: CustomerId,
    },

    /// The vehicle is currently rented out
    #[error("Vehicle ID {vehicle_id} is not available")]
    VehicleUnavailable {
        /// The unavailable vehicle ID
        vehicle_id: String,
    },

    /// The customer holds no active rental for the vehicle
    #[error("Customer ID {customer_id} has not rented vehicle ID {vehicle_id}")]
    NotRented {
        /// Customer attempting the return
        customer_id: CustomerId,
        /// Vehicle being returned
        vehicle_id: String,
    },

    /// The customer still holds vehicles and cannot be removed
    #[error("Customer ID {customer_id} still has {active_rentals} active rental(s)")]
    CustomerHasActiveRentals {
        /// Customer being removed
        customer_id: CustomerId,
        /// Number of vehicles still rented
        active_rentals: usize,
    },

    /// A date string could not be parsed, or a return precedes its rent date
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate {
        /// The offending date as given
        value: String,
        /// Why the date was rejected
        reason: String,
    },

    /// A data file could not be opened for reading or writing
    ///
    /// This is a fatal error for the load or save that hit it.
    #[error("Could not open {path}: {message}")]
    FileOpen {
        /// Path of the file
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// I/O error while writing a snapshot
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A line of a data file does not follow the record format
    ///
    /// This is a recoverable error - the line is skipped and loading continues.
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number of the record (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// A vehicle line carries a type tag that is not Car, Van, Minibus or SUV
    ///
    /// This is a recoverable error - the line is skipped and loading continues.
    #[error("Unknown vehicle type '{type_tag}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    UnknownVehicleType {
        /// The unrecognized tag
        type_tag: String,
        /// Line number of the record (if available)
        line: Option<u64>,
    },
}

impl From<std::io::Error> for RentalError {
    fn from(error: std::io::Error) -> Self {
        RentalError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for RentalError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        RentalError::MalformedRecord {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl RentalError {
    /// Create a VehicleNotFound error
    pub fn vehicle_not_found(vehicle_id: &str) -> Self {
        RentalError::VehicleNotFound {
            vehicle_id: vehicle_id.to_string(),
        }
    }

    /// Create a CustomerNotFound error
    pub fn customer_not_found(customer_id: CustomerId) -> Self {
        RentalError::CustomerNotFound { customer_id }
    }

    /// Create a DuplicateVehicleId error
    pub fn duplicate_vehicle(vehicle_id: &str) -> Self {
        RentalError::DuplicateVehicleId {
            vehicle_id: vehicle_id.to_string(),
        }
    }

    /// Create a DuplicateCustomerId error
    pub fn duplicate_customer(customer_id: CustomerId) -> Self {
        RentalError::DuplicateCustomerId { customer_id }
    }

    /// Create a VehicleUnavailable error
    pub fn vehicle_unavailable(vehicle_id: &str) -> Self {
        RentalError::VehicleUnavailable {
            vehicle_id: vehicle_id.to_string(),
        }
    }

    /// Create a NotRented error
    pub fn not_rented(customer_id: CustomerId, vehicle_id: &str) -> Self {
        RentalError::NotRented {
            customer_id,
            vehicle_id: vehicle_id.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str, reason: &str) -> Self {
        RentalError::InvalidDate {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a FileOpen error
    pub fn file_open(path: &std::path::Path, error: &std::io::Error) -> Self {
        RentalError::FileOpen {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed(line: Option<u64>, message: impl Into<String>) -> Self {
        RentalError::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Whether this error only concerns a single record of a data file
    ///
    /// The loader logs and skips these instead of aborting.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            RentalError::MalformedRecord { .. } | RentalError::UnknownVehicleType { .. }
        )
    }
}
