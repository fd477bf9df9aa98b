//! Core business logic module
//!
//! This module contains the rental bookkeeping components:
//! - `traits` - Trait abstractions shared by the repositories
//! - `repository` - Generic ordered in-memory storage keyed by ID
//! - `rental_company` - Rental workflow orchestration
//! - `search` - Criteria matching for vehicles and customers
//! - `fuzzy` - Levenshtein edit distance
//! - `dates` - Calendar date parsing and arithmetic

pub mod dates;
pub mod fuzzy;
pub mod rental_company;
pub mod repository;
pub mod search;
pub mod traits;

pub use rental_company::{RentalCompany, RentalReceipt, ReturnReceipt};
pub use repository::Repository;
pub use traits::Identifiable;
