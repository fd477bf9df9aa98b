//! Vehicle types for the fleet rental system
//!
//! A vehicle is a single struct tagged with its [`VehicleType`]. The tag carries the
//! per-type constants (daily rate, default late fee) and the name used in data files.

use crate::core::Identifiable;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Kinds of vehicle in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    Van,
    Minibus,
    Suv,
}

impl VehicleType {
    /// All vehicle types, in menu order
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Car,
        VehicleType::Van,
        VehicleType::Minibus,
        VehicleType::Suv,
    ];

    /// Tag written in the vehicles file and shown in listings
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Van => "Van",
            VehicleType::Minibus => "Minibus",
            VehicleType::Suv => "SUV",
        }
    }

    /// Daily base rental rate
    pub fn base_rental_rate(&self) -> Decimal {
        match self {
            VehicleType::Car => Decimal::new(5000, 2),
            VehicleType::Van => Decimal::new(10000, 2),
            VehicleType::Minibus => Decimal::new(6500, 2),
            VehicleType::Suv => Decimal::new(8000, 2),
        }
    }

    /// Late fee per day a vehicle of this type starts with
    pub fn default_late_fee(&self) -> Decimal {
        match self {
            VehicleType::Car => Decimal::new(1000, 2),
            VehicleType::Van => Decimal::new(2000, 2),
            VehicleType::Minibus => Decimal::new(1200, 2),
            VehicleType::Suv => Decimal::new(1500, 2),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    /// Parse a type tag exactly as written in the vehicles file
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Car" => Ok(VehicleType::Car),
            "Van" => Ok(VehicleType::Van),
            "Minibus" => Ok(VehicleType::Minibus),
            "SUV" => Ok(VehicleType::Suv),
            other => Err(format!("Unknown vehicle type '{}'", other)),
        }
    }
}

/// A vehicle in the fleet
///
/// Identity, make, model and capacities are fixed at construction. Only the
/// availability flag and the late fee change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    vehicle_id: String,
    vehicle_type: VehicleType,
    make: String,
    model: String,
    passengers: u32,
    storage: u32,
    available: bool,
    late_fee: Decimal,
}

impl Vehicle {
    /// Create a vehicle with the late fee of its type
    pub fn new(
        vehicle_type: VehicleType,
        vehicle_id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        passengers: u32,
        storage: u32,
        available: bool,
    ) -> Self {
        Vehicle {
            vehicle_id: vehicle_id.into(),
            vehicle_type,
            make: make.into(),
            model: model.into(),
            passengers,
            storage,
            available,
            late_fee: vehicle_type.default_late_fee(),
        }
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn storage(&self) -> u32 {
        self.storage
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }

    /// Late fee charged per day past the due date
    pub fn late_fee(&self) -> Decimal {
        self.late_fee
    }

    pub fn set_late_fee(&mut self, fee: Decimal) {
        self.late_fee = fee;
    }

    /// Daily base rental rate for this vehicle's type
    pub fn base_rental_rate(&self) -> Decimal {
        self.vehicle_type.base_rental_rate()
    }

    /// Listing row: type, ID, make, model, passengers, storage, available, rate, late fee
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.vehicle_type.to_string(),
            self.vehicle_id.clone(),
            self.make.clone(),
            self.model.clone(),
            self.passengers.to_string(),
            self.storage.to_string(),
            if self.available { "Yes" } else { "No" }.to_string(),
            format!("{:.2}", self.base_rental_rate()),
            format!("{:.2}", self.late_fee),
        ]
    }
}

impl Identifiable for Vehicle {
    type Id = str;

    fn id(&self) -> &str {
        &self.vehicle_id
    }
}
