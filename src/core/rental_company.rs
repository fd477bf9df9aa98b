//! Rental workflow engine
//!
//! This module provides the `RentalCompany` that orchestrates renting and returning
//! by coordinating the fleet and customer repositories.
//!
//! The engine enforces business rules such as:
//! - Unique vehicle and customer IDs (the repositories themselves do not check)
//! - A vehicle is rented by at most one customer at a time
//! - Fixed 7-day rental period, 30% loyalty discount for 100 points
//! - 10 points per rental, 5 bonus points for an on-time return, per-day late fees

use crate::core::dates::{self, add_days};
use crate::core::repository::Repository;
use crate::core::search::{customer_matches, vehicle_matches};
use crate::types::{
    Customer, CustomerId, CustomerSearchCriteria, RentalError, SearchCriteria, Vehicle,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Length of every rental, in days
pub const RENTAL_PERIOD_DAYS: u32 = 7;

/// Points awarded for each rental
pub const RENTAL_POINTS: u32 = 10;

/// Points awarded for returning on or before the due date
pub const ON_TIME_RETURN_POINTS: u32 = 5;

/// Fraction of the rental cost waived by a loyalty discount (30%)
pub const LOYALTY_DISCOUNT_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Outcome of a successful rental
#[derive(Debug, Clone, PartialEq)]
pub struct RentalReceipt {
    pub customer_id: CustomerId,
    pub vehicle_id: String,
    pub rental_days: u32,
    pub rent_date: NaiveDate,
    pub due_date: NaiveDate,

    /// Cost before any discount
    pub base_cost: Decimal,

    /// Amount waived by the loyalty discount, if one was applied
    pub discount: Option<Decimal>,

    /// Cost after the discount
    pub total_cost: Decimal,

    pub points_earned: u32,
}

/// Outcome of a successful return
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    pub customer_id: CustomerId,
    pub vehicle_id: String,
    pub return_date: NaiveDate,
    pub days_late: u32,

    /// `days_late * late fee per day`, only when the return is late
    pub late_fee: Option<Decimal>,

    /// Bonus points, only when the return is on time
    pub bonus_points: u32,
}

/// Rental workflow engine
///
/// Owns the fleet and the customer roster for the lifetime of the process.
/// Customers refer to rented vehicles by ID; every lookup goes through the fleet.
#[derive(Debug, Clone, Default)]
pub struct RentalCompany {
    vehicles: Repository<Vehicle>,
    customers: Repository<Customer>,
}

impl RentalCompany {
    /// Create a company with an empty fleet and no customers
    pub fn new() -> Self {
        RentalCompany {
            vehicles: Repository::new(),
            customers: Repository::new(),
        }
    }

    /// Add a vehicle to the fleet
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVehicleId` if a vehicle with the same ID exists; the fleet
    /// is left unchanged.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), RentalError> {
        if self.vehicles.find_by_id(vehicle.vehicle_id()).is_some() {
            return Err(RentalError::duplicate_vehicle(vehicle.vehicle_id()));
        }

        debug!(vehicle_id = %vehicle.vehicle_id(), "Vehicle added");
        self.vehicles.add(vehicle);
        Ok(())
    }

    /// Remove a vehicle from the fleet
    ///
    /// # Errors
    ///
    /// - `VehicleNotFound` if no vehicle has that ID
    /// - `VehicleUnavailable` if a customer currently has it on rent
    pub fn remove_vehicle(&mut self, vehicle_id: &str) -> Result<Vehicle, RentalError> {
        if self.vehicles.find_by_id(vehicle_id).is_none() {
            return Err(RentalError::vehicle_not_found(vehicle_id));
        }
        if self.rental_holder(vehicle_id).is_some() {
            return Err(RentalError::vehicle_unavailable(vehicle_id));
        }

        self.vehicles
            .remove(vehicle_id)
            .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))
    }

    /// Add a customer to the roster
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCustomerId` if a customer with the same ID exists; the
    /// roster is left unchanged.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), RentalError> {
        if self.customers.find_by_id(&customer.customer_id()).is_some() {
            return Err(RentalError::duplicate_customer(customer.customer_id()));
        }

        debug!(customer_id = customer.customer_id(), "Customer added");
        self.customers.add(customer);
        Ok(())
    }

    /// Remove a customer from the roster
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if no customer has that ID
    /// - `CustomerHasActiveRentals` while the customer still holds vehicles
    pub fn remove_customer(&mut self, customer_id: CustomerId) -> Result<Customer, RentalError> {
        let customer = self
            .customers
            .find_by_id(&customer_id)
            .ok_or_else(|| RentalError::customer_not_found(customer_id))?;

        if !customer.rentals().is_empty() {
            return Err(RentalError::CustomerHasActiveRentals {
                customer_id,
                active_rentals: customer.rentals().len(),
            });
        }

        self.customers
            .remove(&customer_id)
            .ok_or_else(|| RentalError::customer_not_found(customer_id))
    }

    pub fn find_vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.find_by_id(vehicle_id)
    }

    pub fn find_customer(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.customers.find_by_id(&customer_id)
    }

    /// The whole fleet in insertion order
    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.get_all()
    }

    /// The whole roster in insertion order
    pub fn customers(&self) -> &[Customer] {
        self.customers.get_all()
    }

    /// Vehicles that can be rented right now
    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.is_available()).collect()
    }

    /// ID of the customer currently renting `vehicle_id`, if any
    pub fn rental_holder(&self, vehicle_id: &str) -> Option<CustomerId> {
        self.customers
            .iter()
            .find(|customer| customer.has_rented_vehicle(vehicle_id))
            .map(Customer::customer_id)
    }

    /// Flip a vehicle's availability (used by the loader for synthesized rentals)
    pub(crate) fn set_vehicle_availability(
        &mut self,
        vehicle_id: &str,
        available: bool,
    ) -> Result<(), RentalError> {
        let vehicle = self
            .vehicles
            .find_by_id_mut(vehicle_id)
            .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))?;
        vehicle.set_availability(available);
        Ok(())
    }

    /// Empty both the fleet and the roster
    pub fn clear_data(&mut self) {
        self.vehicles.clear();
        self.customers.clear();
    }

    /// Price of renting `vehicle` for `days` days at its base rate
    pub fn calculate_rental_cost(vehicle: &Vehicle, days: u32) -> Decimal {
        vehicle.base_rental_rate() * Decimal::from(days)
    }

    /// Quote a rental of `days` days for a vehicle in the fleet
    ///
    /// # Errors
    ///
    /// Returns `VehicleNotFound` if no vehicle has that ID.
    pub fn quote(&self, vehicle_id: &str, days: u32) -> Result<Decimal, RentalError> {
        let vehicle = self
            .find_vehicle(vehicle_id)
            .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))?;
        Ok(Self::calculate_rental_cost(vehicle, days))
    }

    /// Rent a vehicle to a customer starting today
    ///
    /// See [`RentalCompany::rent_vehicle_on`].
    pub fn rent_vehicle(
        &mut self,
        customer_id: CustomerId,
        vehicle_id: &str,
    ) -> Result<RentalReceipt, RentalError> {
        self.rent_vehicle_on(customer_id, vehicle_id, dates::today())
    }

    /// Rent a vehicle to a customer starting on `rent_date`
    ///
    /// The rental lasts [`RENTAL_PERIOD_DAYS`] days. A customer holding at least
    /// 100 loyalty points spends them on a 30% discount. Every rental then earns
    /// [`RENTAL_POINTS`] points.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving all state unchanged, if:
    /// - The customer does not exist (`CustomerNotFound`)
    /// - The vehicle does not exist (`VehicleNotFound`)
    /// - The vehicle is already rented out (`VehicleUnavailable`)
    pub fn rent_vehicle_on(
        &mut self,
        customer_id: CustomerId,
        vehicle_id: &str,
        rent_date: NaiveDate,
    ) -> Result<RentalReceipt, RentalError> {
        let customer = self
            .customers
            .find_by_id_mut(&customer_id)
            .ok_or_else(|| RentalError::customer_not_found(customer_id))?;

        let vehicle = self
            .vehicles
            .find_by_id_mut(vehicle_id)
            .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))?;

        if !vehicle.is_available() {
            return Err(RentalError::vehicle_unavailable(vehicle_id));
        }

        let base_cost = Self::calculate_rental_cost(vehicle, RENTAL_PERIOD_DAYS);

        let discount = if customer.apply_loyalty_discount() {
            Some(base_cost * LOYALTY_DISCOUNT_RATE)
        } else {
            None
        };
        let total_cost = base_cost - discount.unwrap_or(Decimal::ZERO);

        let due_date = add_days(rent_date, i64::from(RENTAL_PERIOD_DAYS));
        customer.rent_vehicle(vehicle_id, rent_date, due_date);
        vehicle.set_availability(false);
        customer.add_loyalty_points(i64::from(RENTAL_POINTS));

        info!(
            customer_id,
            vehicle_id = %vehicle_id,
            base_cost = %base_cost,
            discount = %discount.unwrap_or(Decimal::ZERO),
            total_cost = %total_cost,
            due_date = %due_date,
            "Vehicle rented"
        );

        Ok(RentalReceipt {
            customer_id,
            vehicle_id: vehicle_id.to_string(),
            rental_days: RENTAL_PERIOD_DAYS,
            rent_date,
            due_date,
            base_cost,
            discount,
            total_cost,
            points_earned: RENTAL_POINTS,
        })
    }

    /// Return a rented vehicle on the given `YYYY-MM-DD` date
    ///
    /// A late return reports `days_late * late fee`; an on-time return earns
    /// [`ON_TIME_RETURN_POINTS`] bonus points.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving all state unchanged, if:
    /// - The customer or vehicle does not exist
    /// - The customer has not rented this vehicle (`NotRented`)
    /// - The date cannot be parsed or precedes the rent date (`InvalidDate`)
    pub fn return_vehicle(
        &mut self,
        customer_id: CustomerId,
        vehicle_id: &str,
        return_date: &str,
    ) -> Result<ReturnReceipt, RentalError> {
        let customer = self
            .customers
            .find_by_id_mut(&customer_id)
            .ok_or_else(|| RentalError::customer_not_found(customer_id))?;

        let vehicle = self
            .vehicles
            .find_by_id_mut(vehicle_id)
            .ok_or_else(|| RentalError::vehicle_not_found(vehicle_id))?;

        if !customer.has_rented_vehicle(vehicle_id) {
            return Err(RentalError::not_rented(customer_id, vehicle_id));
        }

        let return_date = dates::parse_date(return_date)?;
        let days_late = customer.return_vehicle(vehicle_id, return_date)?;
        vehicle.set_availability(true);

        let (late_fee, bonus_points) = if days_late > 0 {
            (Some(vehicle.late_fee() * Decimal::from(days_late)), 0)
        } else {
            customer.add_loyalty_points(i64::from(ON_TIME_RETURN_POINTS));
            (None, ON_TIME_RETURN_POINTS)
        };

        info!(
            customer_id,
            vehicle_id = %vehicle_id,
            days_late,
            late_fee = %late_fee.unwrap_or(Decimal::ZERO),
            bonus_points,
            "Vehicle returned"
        );

        Ok(ReturnReceipt {
            customer_id,
            vehicle_id: vehicle_id.to_string(),
            return_date,
            days_late,
            late_fee,
            bonus_points,
        })
    }

    /// Vehicles passing every set field of `criteria`, in fleet order
    pub fn search_vehicles(&self, criteria: &SearchCriteria) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle_matches(vehicle, criteria))
            .collect()
    }

    /// Customers passing every set field of `criteria`, in roster order
    pub fn search_customers(&self, criteria: &CustomerSearchCriteria) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|customer| customer_matches(customer, criteria))
            .collect()
    }
}
