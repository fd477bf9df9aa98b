//! Loading and saving the fleet and roster snapshots
//!
//! Loading is forgiving: a bad line is logged and skipped, and loading continues.
//! Only a file that cannot be opened (or fails mid-read) aborts the load. Both files
//! are opened before the company is touched, so a missing customers file does not
//! leave a half-loaded fleet behind.
//!
//! Saving opens both files before truncating either, so a path that cannot be
//! opened leaves both snapshots as they were. There is no rollback once writing
//! has started: a write error part way through can leave the two files disagreeing.

use crate::core::dates::{self, add_days};
use crate::core::rental_company::RENTAL_PERIOD_DAYS;
use crate::core::RentalCompany;
use crate::io::record_format::{
    format_customer_line, format_vehicle_line, parse_customer_record, parse_vehicle_record,
    CustomerRecord,
};
use crate::io::record_reader::RecordReader;
use crate::types::{Customer, RentalError, RentalInfo};
use chrono::NaiveDate;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Counts reported after a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub vehicles_loaded: usize,
    pub customers_loaded: usize,
    pub records_skipped: usize,
}

/// Load both snapshot files into `company`
///
/// Rentals listed in the customers file are recreated as starting today.
/// See [`load_from_files_on`].
pub fn load_from_files(
    company: &mut RentalCompany,
    vehicles_path: &Path,
    customers_path: &Path,
) -> Result<LoadSummary, RentalError> {
    load_from_files_on(company, vehicles_path, customers_path, dates::today())
}

/// Load both snapshot files into `company`, recreating rentals as of `rent_date`
///
/// The snapshot does not store rental dates, so every rental listed for a customer
/// starts on `rent_date` and is due [`RENTAL_PERIOD_DAYS`] days later.
///
/// # Arguments
///
/// * `company` - Company to add the loaded vehicles and customers to
/// * `vehicles_path` - Path of the vehicles file
/// * `customers_path` - Path of the customers file
/// * `rent_date` - Start date given to the recreated rentals
///
/// # Returns
///
/// * `Ok(LoadSummary)` - Counts of loaded and skipped records
/// * `Err(RentalError::FileOpen)` - A file could not be opened; `company` is untouched
/// * `Err(RentalError::Io)` - A file failed mid-read
pub fn load_from_files_on(
    company: &mut RentalCompany,
    vehicles_path: &Path,
    customers_path: &Path,
    rent_date: NaiveDate,
) -> Result<LoadSummary, RentalError> {
    let vehicle_records = RecordReader::open(vehicles_path)?;
    let customer_records = RecordReader::open(customers_path)?;

    let mut summary = LoadSummary::default();

    for result in vehicle_records {
        let vehicle = match result.and_then(|record| parse_vehicle_record(&record)) {
            Ok(vehicle) => vehicle,
            Err(e) if e.is_record_error() => {
                warn!(file = %vehicles_path.display(), "Skipping vehicle line: {}", e);
                summary.records_skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match company.add_vehicle(vehicle) {
            Ok(()) => summary.vehicles_loaded += 1,
            Err(e) => {
                warn!(file = %vehicles_path.display(), "Skipping vehicle line: {}", e);
                summary.records_skipped += 1;
            }
        }
    }

    for result in customer_records {
        let record = match result.and_then(|record| parse_customer_record(&record)) {
            Ok(record) => record,
            Err(e) if e.is_record_error() => {
                warn!(file = %customers_path.display(), "Skipping customer line: {}", e);
                summary.records_skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        if company.find_customer(record.customer_id).is_some() {
            warn!(
                file = %customers_path.display(),
                "Skipping customer line: {}",
                RentalError::duplicate_customer(record.customer_id)
            );
            summary.records_skipped += 1;
            continue;
        }

        restore_customer(company, record, rent_date)?;
        summary.customers_loaded += 1;
    }

    info!(
        vehicles = summary.vehicles_loaded,
        customers = summary.customers_loaded,
        skipped = summary.records_skipped,
        "Loaded snapshot"
    );

    Ok(summary)
}

/// Add a customer and its rentals to the company
///
/// Vehicle IDs that are unknown, or already on rent to someone, are skipped.
fn restore_customer(
    company: &mut RentalCompany,
    record: CustomerRecord,
    rent_date: NaiveDate,
) -> Result<(), RentalError> {
    let customer_id = record.customer_id;
    let due_date = add_days(rent_date, i64::from(RENTAL_PERIOD_DAYS));

    let mut customer = Customer::new(customer_id, record.name);
    customer.set_loyalty_points(record.loyalty_points);

    for vehicle_id in &record.vehicle_ids {
        if company.find_vehicle(vehicle_id).is_none() {
            warn!(customer_id, vehicle_id = %vehicle_id, "Rented vehicle not found, skipping");
            continue;
        }
        if customer.has_rented_vehicle(vehicle_id) {
            warn!(customer_id, vehicle_id = %vehicle_id, "Vehicle listed twice, skipping");
            continue;
        }
        if let Some(holder) = company.rental_holder(vehicle_id) {
            warn!(
                customer_id,
                holder,
                vehicle_id = %vehicle_id,
                "Vehicle already rented by another customer, skipping"
            );
            continue;
        }

        customer.add_rental(RentalInfo {
            vehicle_id: vehicle_id.clone(),
            rent_date,
            due_date,
        });
    }

    let rented: Vec<String> = customer
        .rentals()
        .iter()
        .map(|rental| rental.vehicle_id.clone())
        .collect();

    company.add_customer(customer)?;
    for vehicle_id in &rented {
        company.set_vehicle_availability(vehicle_id, false)?;
    }

    Ok(())
}

/// Write one line per vehicle
pub fn write_vehicles(company: &RentalCompany, output: &mut dyn Write) -> Result<(), RentalError> {
    for vehicle in company.vehicles() {
        writeln!(output, "{}", format_vehicle_line(vehicle))?;
    }
    Ok(())
}

/// Write one line per customer
pub fn write_customers(company: &RentalCompany, output: &mut dyn Write) -> Result<(), RentalError> {
    for customer in company.customers() {
        writeln!(output, "{}", format_customer_line(customer))?;
    }
    Ok(())
}

/// Open (or create) a snapshot file for writing without truncating it yet
fn open_for_save(path: &Path) -> Result<File, RentalError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| RentalError::file_open(path, &e))
}

/// Empty an opened snapshot file and wrap it for writing
fn truncate_for_save(file: File) -> Result<BufWriter<File>, RentalError> {
    file.set_len(0)?;
    Ok(BufWriter::new(file))
}

/// Save both snapshot files, replacing their contents
///
/// # Errors
///
/// - `FileOpen` if either file cannot be opened; neither file is modified
/// - `Io` if truncating or writing fails
pub fn save_to_files(
    company: &RentalCompany,
    vehicles_path: &Path,
    customers_path: &Path,
) -> Result<(), RentalError> {
    let vehicles_file = open_for_save(vehicles_path)?;
    let customers_file = open_for_save(customers_path)?;

    let mut vehicles_out = truncate_for_save(vehicles_file)?;
    let mut customers_out = truncate_for_save(customers_file)?;

    write_vehicles(company, &mut vehicles_out)?;
    vehicles_out.flush()?;

    write_customers(company, &mut customers_out)?;
    customers_out.flush()?;

    info!(
        vehicles = company.vehicles().len(),
        customers = company.customers().len(),
        "Saved snapshot"
    );

    Ok(())
}
