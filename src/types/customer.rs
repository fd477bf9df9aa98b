//! Customer-related types for the fleet rental system
//!
//! A customer holds a loyalty-point balance and the list of vehicles it currently
//! has on rent. Rentals refer to vehicles by ID only; the fleet owns the vehicles.

use super::error::RentalError;
use crate::core::dates::{self, days_between};
use crate::core::Identifiable;
use chrono::NaiveDate;

/// Customer identifier (conventionally a 3-digit number, 100-999)
pub type CustomerId = u32;

/// Points deducted when a loyalty discount is granted
pub const LOYALTY_DISCOUNT_THRESHOLD: u32 = 100;

/// An active rental held by a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalInfo {
    /// ID of the rented vehicle, resolved through the fleet repository
    pub vehicle_id: String,

    /// Day the rental started
    pub rent_date: NaiveDate,

    /// Day the vehicle is due back; returns after this day are late
    pub due_date: NaiveDate,
}

/// A customer of the rental company
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    customer_id: CustomerId,
    name: String,
    loyalty_points: u32,
    rentals: Vec<RentalInfo>,
}

impl Customer {
    /// Create a customer with no points and no rentals
    pub fn new(customer_id: CustomerId, name: impl Into<String>) -> Self {
        Customer {
            customer_id,
            name: name.into(),
            loyalty_points: 0,
            rentals: Vec::new(),
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    /// Overwrite the balance (used when loading from file)
    pub fn set_loyalty_points(&mut self, points: u32) {
        self.loyalty_points = points;
    }

    /// Active rentals in the order they were taken out
    pub fn rentals(&self) -> &[RentalInfo] {
        &self.rentals
    }

    /// Record a new rental
    ///
    /// No duplicate check is made here; the workflow engine only calls this for
    /// vehicles that are available.
    pub fn rent_vehicle(&mut self, vehicle_id: &str, rent_date: NaiveDate, due_date: NaiveDate) {
        self.rentals.push(RentalInfo {
            vehicle_id: vehicle_id.to_string(),
            rent_date,
            due_date,
        });
    }

    /// Attach an existing rental (used when loading from file)
    pub fn add_rental(&mut self, rental: RentalInfo) {
        self.rentals.push(rental);
    }

    /// Close the rental for `vehicle_id` and report how many days late it is
    ///
    /// # Returns
    ///
    /// `max(0, return_date - due_date)` in whole days
    ///
    /// # Errors
    ///
    /// - `NotRented` if the customer has no active rental for the vehicle
    /// - `InvalidDate` if `return_date` is before the rental's rent date; the rental
    ///   is kept in that case
    pub fn return_vehicle(
        &mut self,
        vehicle_id: &str,
        return_date: NaiveDate,
    ) -> Result<u32, RentalError> {
        let position = self
            .rentals
            .iter()
            .position(|rental| rental.vehicle_id == vehicle_id)
            .ok_or_else(|| RentalError::not_rented(self.customer_id, vehicle_id))?;

        let rental = &self.rentals[position];
        if return_date < rental.rent_date {
            return Err(RentalError::invalid_date(
                &dates::format_date(return_date),
                &format!(
                    "return date precedes rent date {}",
                    dates::format_date(rental.rent_date)
                ),
            ));
        }

        let days_late = days_between(rental.due_date, return_date).max(0);
        self.rentals.remove(position);

        Ok(u32::try_from(days_late).unwrap_or(u32::MAX))
    }

    /// Spend points on a discount
    ///
    /// Deducts [`LOYALTY_DISCOUNT_THRESHOLD`] points when the balance allows it.
    /// Returns whether the discount was granted.
    pub fn apply_loyalty_discount(&mut self) -> bool {
        if self.loyalty_points >= LOYALTY_DISCOUNT_THRESHOLD {
            self.loyalty_points -= LOYALTY_DISCOUNT_THRESHOLD;
            true
        } else {
            false
        }
    }

    /// Adjust the balance by `delta`, never going below zero
    pub fn add_loyalty_points(&mut self, delta: i64) {
        let updated = (i64::from(self.loyalty_points) + delta).clamp(0, i64::from(u32::MAX));
        self.loyalty_points = updated as u32;
    }

    pub fn has_rented_vehicle(&self, vehicle_id: &str) -> bool {
        self.rentals
            .iter()
            .any(|rental| rental.vehicle_id == vehicle_id)
    }
}

impl Identifiable for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.customer_id
    }
}
