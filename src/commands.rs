//! Command dispatch for the CLI
//!
//! Every invocation loads both snapshot files, runs one command against the
//! `RentalCompany` and saves the files again if the command changed anything.
//! Listings are written as tab-separated tables with a header row.

use crate::cli::{AddVehicleArgs, CliArgs, Command, SearchVehiclesArgs};
use crate::core::dates::{self, format_date};
use crate::core::{RentalCompany, RentalReceipt, ReturnReceipt};
use crate::io::{load_from_files, save_to_files};
use crate::types::{
    Customer, CustomerSearchCriteria, RentalError, SearchCriteria, Vehicle,
};
use csv::WriterBuilder;
use std::io::Write;

const VEHICLE_HEADER: [&str; 9] = [
    "type",
    "id",
    "make",
    "model",
    "passengers",
    "storage",
    "available",
    "daily_rate",
    "late_fee",
];

const CUSTOMER_HEADER: [&str; 4] = ["id", "name", "loyalty_points", "rentals"];

/// Load, execute and (for state-changing commands) save
///
/// # Arguments
///
/// * `args` - Parsed command line
/// * `output` - Where command results are written (stdout in the binary)
///
/// # Errors
///
/// Any error from loading, from the command itself, or from saving. A failed
/// command leaves the files untouched.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), RentalError> {
    let mut company = RentalCompany::new();
    load_from_files(&mut company, &args.vehicles_file, &args.customers_file)?;

    execute(&mut company, &args.command, output)?;

    if args.is_mutation() {
        save_to_files(&company, &args.vehicles_file, &args.customers_file)?;
    }

    Ok(())
}

/// Run one command against an already loaded company
pub fn execute(
    company: &mut RentalCompany,
    command: &Command,
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    match command {
        Command::Vehicles { available } => {
            let vehicles: Vec<&Vehicle> = if *available {
                company.available_vehicles()
            } else {
                company.vehicles().iter().collect()
            };
            write_vehicle_table(&vehicles, output)
        }

        Command::Customers => {
            let customers: Vec<&Customer> = company.customers().iter().collect();
            write_customer_table(&customers, output)
        }

        Command::AddVehicle(add) => {
            company.add_vehicle(new_vehicle(add))?;
            writeln!(output, "Vehicle {} added", add.vehicle_id)?;
            Ok(())
        }

        Command::AddCustomer { customer_id, name } => {
            company.add_customer(Customer::new(*customer_id, name.as_str()))?;
            writeln!(output, "Customer {} added", customer_id)?;
            Ok(())
        }

        Command::RemoveVehicle { vehicle_id } => {
            company.remove_vehicle(vehicle_id)?;
            writeln!(output, "Vehicle {} removed", vehicle_id)?;
            Ok(())
        }

        Command::RemoveCustomer { customer_id } => {
            company.remove_customer(*customer_id)?;
            writeln!(output, "Customer {} removed", customer_id)?;
            Ok(())
        }

        Command::Rent {
            customer_id,
            vehicle_id,
        } => {
            let receipt = company.rent_vehicle(*customer_id, vehicle_id)?;
            write_rental_receipt(&receipt, output)
        }

        Command::Return {
            customer_id,
            vehicle_id,
            date,
        } => {
            let return_date = format_date(date.unwrap_or_else(dates::today));
            let receipt = company.return_vehicle(*customer_id, vehicle_id, &return_date)?;
            write_return_receipt(&receipt, output)
        }

        Command::Quote { vehicle_id, days } => {
            let cost = company.quote(vehicle_id, *days)?;
            writeln!(output, "{} for {} day(s): {:.2}", vehicle_id, days, cost)?;
            Ok(())
        }

        Command::SearchVehicles(search) => {
            let results = company.search_vehicles(&vehicle_criteria(search));
            write_vehicle_table(&results, output)
        }

        Command::SearchCustomers {
            customer_id,
            name,
            distance,
        } => {
            let criteria = CustomerSearchCriteria {
                customer_id: *customer_id,
                name: name.clone(),
                max_distance: *distance,
            };
            let results = company.search_customers(&criteria);
            write_customer_table(&results, output)
        }
    }
}

fn new_vehicle(add: &AddVehicleArgs) -> Vehicle {
    Vehicle::new(
        add.vehicle_type,
        add.vehicle_id.as_str(),
        add.make.as_str(),
        add.model.as_str(),
        add.passengers,
        add.storage,
        !add.unavailable,
    )
}

fn vehicle_criteria(search: &SearchVehiclesArgs) -> SearchCriteria {
    SearchCriteria {
        vehicle_type: search.vehicle_type,
        make: search.make.clone(),
        model: search.model.clone(),
        max_distance_make: search.make_distance,
        max_distance_model: search.model_distance,
        passengers: search.passengers,
        storage: search.storage,
        availability: search.available,
    }
}

fn table_error(error: csv::Error) -> RentalError {
    RentalError::Io {
        message: error.to_string(),
    }
}

/// Write vehicles as a tab-separated table
pub fn write_vehicle_table(
    vehicles: &[&Vehicle],
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(output);

    writer.write_record(VEHICLE_HEADER).map_err(table_error)?;
    for vehicle in vehicles {
        writer.write_record(vehicle.to_row()).map_err(table_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write customers as a tab-separated table
///
/// The rentals column lists `<vehicle>:<due date>` pairs separated by spaces.
pub fn write_customer_table(
    customers: &[&Customer],
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(output);

    writer.write_record(CUSTOMER_HEADER).map_err(table_error)?;
    for customer in customers {
        let rentals = customer
            .rentals()
            .iter()
            .map(|rental| format!("{}:{}", rental.vehicle_id, format_date(rental.due_date)))
            .collect::<Vec<_>>()
            .join(" ");

        writer
            .write_record([
                customer.customer_id().to_string(),
                customer.name().to_string(),
                customer.loyalty_points().to_string(),
                rentals,
            ])
            .map_err(table_error)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_rental_receipt(
    receipt: &RentalReceipt,
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    writeln!(
        output,
        "Customer {} rented {} from {} to {} ({} days)",
        receipt.customer_id,
        receipt.vehicle_id,
        format_date(receipt.rent_date),
        format_date(receipt.due_date),
        receipt.rental_days
    )?;
    if let Some(discount) = receipt.discount {
        writeln!(
            output,
            "Loyalty discount applied: {:.2} off {:.2}",
            discount, receipt.base_cost
        )?;
    }
    writeln!(output, "Total cost: {:.2}", receipt.total_cost)?;
    writeln!(output, "Loyalty points earned: {}", receipt.points_earned)?;
    Ok(())
}

fn write_return_receipt(
    receipt: &ReturnReceipt,
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    writeln!(
        output,
        "Customer {} returned {} on {}",
        receipt.customer_id,
        receipt.vehicle_id,
        format_date(receipt.return_date)
    )?;
    match receipt.late_fee {
        Some(fee) => writeln!(
            output,
            "Returned {} day(s) late, late fee: {:.2}",
            receipt.days_late, fee
        )?,
        None => writeln!(
            output,
            "Returned on time, bonus loyalty points: {}",
            receipt.bonus_points
        )?,
    }
    Ok(())
}
