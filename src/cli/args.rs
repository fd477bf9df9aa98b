use super::validate;
use crate::types::{CustomerId, VehicleType};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manage a vehicle rental fleet, its customers and their rentals
#[derive(Parser, Debug)]
#[command(name = "fleet-rental")]
#[command(about = "Manage a vehicle rental fleet, its customers and their rentals", long_about = None)]
pub struct CliArgs {
    /// Vehicles snapshot file
    #[arg(
        long = "vehicles",
        value_name = "PATH",
        env = "FLEET_VEHICLES_FILE",
        default_value = "vehicles.txt",
        global = true,
        help = "Path to the vehicles file"
    )]
    pub vehicles_file: PathBuf,

    /// Customers snapshot file
    #[arg(
        long = "customers",
        value_name = "PATH",
        env = "FLEET_CUSTOMERS_FILE",
        default_value = "customers.txt",
        global = true,
        help = "Path to the customers file"
    )]
    pub customers_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// One operation against the rental company
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every vehicle in the fleet
    Vehicles {
        /// Only list vehicles that can be rented now
        #[arg(long)]
        available: bool,
    },

    /// List every customer and their rentals
    Customers,

    /// Add a vehicle to the fleet
    AddVehicle(AddVehicleArgs),

    /// Add a customer
    AddCustomer {
        #[arg(value_name = "CUSTOMER_ID", value_parser = validate::customer_id)]
        customer_id: CustomerId,

        #[arg(value_name = "NAME", value_parser = validate::name)]
        name: String,
    },

    /// Remove a vehicle that is not on rent
    RemoveVehicle {
        #[arg(value_name = "VEHICLE_ID", value_parser = validate::vehicle_id)]
        vehicle_id: String,
    },

    /// Remove a customer with no active rentals
    RemoveCustomer {
        #[arg(value_name = "CUSTOMER_ID", value_parser = validate::customer_id)]
        customer_id: CustomerId,
    },

    /// Rent a vehicle to a customer for 7 days starting today
    Rent {
        #[arg(value_name = "CUSTOMER_ID", value_parser = validate::customer_id)]
        customer_id: CustomerId,

        #[arg(value_name = "VEHICLE_ID", value_parser = validate::vehicle_id)]
        vehicle_id: String,
    },

    /// Return a rented vehicle
    Return {
        #[arg(value_name = "CUSTOMER_ID", value_parser = validate::customer_id)]
        customer_id: CustomerId,

        #[arg(value_name = "VEHICLE_ID", value_parser = validate::vehicle_id)]
        vehicle_id: String,

        /// Return date (YYYY-MM-DD), today if omitted
        #[arg(long, value_name = "DATE", value_parser = validate::date)]
        date: Option<NaiveDate>,
    },

    /// Price a rental without renting
    Quote {
        #[arg(value_name = "VEHICLE_ID", value_parser = validate::vehicle_id)]
        vehicle_id: String,

        #[arg(value_name = "DAYS")]
        days: u32,
    },

    /// Search the fleet; unset criteria match everything
    SearchVehicles(SearchVehiclesArgs),

    /// Search the customers; unset criteria match everything
    SearchCustomers {
        #[arg(long = "id", value_name = "CUSTOMER_ID", value_parser = validate::customer_id)]
        customer_id: Option<CustomerId>,

        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// Maximum edit distance for the name
        #[arg(long, value_name = "N", default_value_t = crate::types::search::DEFAULT_MAX_DISTANCE)]
        distance: usize,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddVehicleArgs {
    #[arg(value_name = "TYPE", value_parser = validate::vehicle_type)]
    pub vehicle_type: VehicleType,

    #[arg(value_name = "VEHICLE_ID", value_parser = validate::vehicle_id)]
    pub vehicle_id: String,

    #[arg(value_name = "MAKE", value_parser = validate::name)]
    pub make: String,

    #[arg(value_name = "MODEL", value_parser = validate::model)]
    pub model: String,

    #[arg(value_name = "PASSENGERS", value_parser = validate::passengers)]
    pub passengers: u32,

    #[arg(value_name = "STORAGE")]
    pub storage: u32,

    /// Add the vehicle as not available for rent
    #[arg(long)]
    pub unavailable: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SearchVehiclesArgs {
    #[arg(long = "type", value_name = "TYPE", value_parser = validate::vehicle_type)]
    pub vehicle_type: Option<VehicleType>,

    #[arg(long, value_name = "MAKE")]
    pub make: Option<String>,

    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    #[arg(long, value_name = "N")]
    pub passengers: Option<u32>,

    #[arg(long, value_name = "N")]
    pub storage: Option<u32>,

    /// Match on availability (true or false)
    #[arg(long, value_name = "BOOL")]
    pub available: Option<bool>,

    /// Maximum edit distance for the make
    #[arg(long, value_name = "N", default_value_t = crate::types::search::DEFAULT_MAX_DISTANCE)]
    pub make_distance: usize,

    /// Maximum edit distance for the model
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub model_distance: usize,
}

impl CliArgs {
    /// Whether the command changes state and the files must be saved afterwards
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.command,
            Command::AddVehicle(_)
                | Command::AddCustomer { .. }
                | Command::RemoveVehicle { .. }
                | Command::RemoveCustomer { .. }
                | Command::Rent { .. }
                | Command::Return { .. }
        )
    }
}
