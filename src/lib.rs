//! Fleet Rental Library
//! # Overview
//!
//! This library keeps the books of a small vehicle-rental business: a fleet of
//! vehicles, a roster of customers, the rentals between them, and the two
//! space-separated text files they are saved to.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Vehicle, Customer, search criteria, errors)
//! - [`cli`] - CLI arguments parsing and input validation
//! - [`core`] - Business logic components:
//!   - [`core::rental_company`] - Rental workflow orchestration
//!   - [`core::repository`] - Generic ordered storage keyed by ID
//!   - [`core::search`] and [`core::fuzzy`] - Criteria matching with edit distance
//!   - [`core::dates`] - Calendar arithmetic for due dates and late returns
//! - [`io`] - Loading and saving the vehicles and customers files
//! - [`commands`] - Dispatch of one CLI command per invocation
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Vehicle Types
//!
//! | Type    | Daily rate | Late fee per day |
//! |---------|-----------:|-----------------:|
//! | Car     |      50.00 |            10.00 |
//! | Van     |     100.00 |            20.00 |
//! | Minibus |      65.00 |            12.00 |
//! | SUV     |      80.00 |            15.00 |
//!
//! # Rental Rules
//!
//! - Every rental lasts 7 days and earns 10 loyalty points
//! - A customer with at least 100 points spends them on a 30% discount
//! - Returning on or before the due date earns 5 bonus points
//! - Returning late costs the vehicle's late fee for each day past the due date

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use core::{RentalCompany, RentalReceipt, ReturnReceipt, Repository};
pub use io::{load_from_files, save_to_files};
pub use types::{
    Customer, CustomerId, CustomerSearchCriteria, RentalError, RentalInfo, SearchCriteria,
    Vehicle, VehicleType,
};
