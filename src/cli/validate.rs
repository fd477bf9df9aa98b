//! Value parsers for command-line input
//!
//! Each function has the `fn(&str) -> Result<T, String>` shape clap expects from a
//! `value_parser`, so invalid input is reported by clap with usage help.

use crate::core::dates;
use crate::types::{CustomerId, VehicleType};
use chrono::NaiveDate;

/// Longest accepted model name, in characters
pub const MAX_MODEL_LEN: usize = 50;

/// Customer IDs are three-digit numbers (100-999)
pub fn customer_id(s: &str) -> Result<CustomerId, String> {
    match s.trim().parse::<CustomerId>() {
        Ok(id) if (100..=999).contains(&id) => Ok(id),
        _ => Err(format!("'{s}' is not a 3-digit customer ID (100-999)")),
    }
}

/// Vehicle IDs are `V` followed by one or more digits
pub fn vehicle_id(s: &str) -> Result<String, String> {
    let s = s.trim();
    match s.strip_prefix('V') {
        Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            Ok(s.to_string())
        }
        _ => Err(format!("'{s}' is not a vehicle ID ('V' followed by digits)")),
    }
}

/// Names and makes: letters and spaces only, at least one letter
pub fn name(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(format!("'{s}' must contain letters and spaces only"));
    }
    Ok(s.to_string())
}

/// Models: non-empty, at most [`MAX_MODEL_LEN`] characters
pub fn model(s: &str) -> Result<String, String> {
    let s = s.trim();
    let len = s.chars().count();
    if len == 0 || len > MAX_MODEL_LEN {
        return Err(format!(
            "model must be between 1 and {MAX_MODEL_LEN} characters, got {len}"
        ));
    }
    Ok(s.to_string())
}

/// Passenger capacity: a positive integer
pub fn passengers(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("'{s}' is not a positive passenger capacity")),
    }
}

/// Vehicle type tag, case-insensitive (`car`, `Van`, `SUV`, ...)
pub fn vehicle_type(s: &str) -> Result<VehicleType, String> {
    let s = s.trim();
    VehicleType::ALL
        .into_iter()
        .find(|vehicle_type| vehicle_type.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("'{s}' is not a vehicle type (Car, Van, Minibus, SUV)"))
}

/// Calendar date in `YYYY-MM-DD` form
pub fn date(s: &str) -> Result<NaiveDate, String> {
    dates::parse_date(s).map_err(|e| e.to_string())
}
