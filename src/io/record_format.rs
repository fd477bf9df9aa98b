//! Line format handling for vehicle and customer snapshots
//!
//! This module centralizes all flat-file format concerns, providing:
//! - The csv reader configuration for space-separated, quoted lines
//! - Conversion from raw records to vehicles and customer records
//! - Line serialization for saving
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! Each line is split on its own, so an unterminated quote never runs into the
//! next line. Tokens may be separated by any run of spaces or tabs.
//!
//! # Vehicle line
//!
//! ```text
//! Car V101 "Toyota" "Corolla" 5 400 1
//! ```
//!
//! Type tag, ID, quoted make and model, passengers, storage and availability (`0|1`).
//! A six-field line without the type tag is an older snapshot and is read as a `Car`.
//!
//! # Customer line
//!
//! ```text
//! 101 "Alice Smith" 40 V101 V104
//! ```
//!
//! ID, quoted name, optional loyalty points, then the IDs of rented vehicles.

use crate::types::{Customer, CustomerId, RentalError, Vehicle, VehicleType};
use csv::{Position, ReaderBuilder, StringRecord};
use serde::Deserialize;

/// Field count of a tagged vehicle line
pub const VEHICLE_FIELDS: usize = 7;

/// Field count of an untagged vehicle line from an older snapshot
pub const LEGACY_VEHICLE_FIELDS: usize = 6;

/// Raw tagged vehicle line, deserialized positionally
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VehicleRow {
    pub vehicle_type: String,
    pub vehicle_id: String,
    pub make: String,
    pub model: String,
    pub passengers: u32,
    pub storage: u32,
    pub available: u8,
}

/// Raw untagged vehicle line
#[derive(Debug, Deserialize, Clone, PartialEq)]
struct LegacyVehicleRow {
    vehicle_id: String,
    make: String,
    model: String,
    passengers: u32,
    storage: u32,
    available: u8,
}

impl From<LegacyVehicleRow> for VehicleRow {
    fn from(row: LegacyVehicleRow) -> Self {
        VehicleRow {
            vehicle_type: VehicleType::Car.as_str().to_string(),
            vehicle_id: row.vehicle_id,
            make: row.make,
            model: row.model,
            passengers: row.passengers,
            storage: row.storage,
            available: row.available,
        }
    }
}

/// Parsed customer line
///
/// Rented vehicle IDs are kept as strings; the loader resolves them against the
/// fleet and synthesizes the rentals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub name: String,
    pub loyalty_points: u32,
    pub vehicle_ids: Vec<String>,
}

/// Reader configuration shared by both snapshot files
///
/// - Single space between tokens (lines are normalized first by [`split_line`])
/// - `"` quoting with `\` as escape character
/// - No header row, variable field counts
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b' ')
        .quote(b'"')
        .escape(Some(b'\\'))
        .double_quote(false)
        .has_headers(false)
        .flexible(true);
    builder
}

/// Collapse unquoted runs of spaces and tabs into single spaces
///
/// Leading and trailing separators and the line terminator are dropped. Quoted
/// text is copied as is.
fn normalize_separators(line: &[u8]) -> Vec<u8> {
    let mut normalized = Vec::with_capacity(line.len());
    let mut in_quotes = false;
    let mut escaped = false;
    let mut pending_separator = false;

    for &byte in line {
        if byte == b'\n' || byte == b'\r' {
            continue;
        }

        if in_quotes {
            normalized.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_quotes = false;
            }
            continue;
        }

        if byte == b' ' || byte == b'\t' {
            pending_separator = true;
            continue;
        }

        let field_start = normalized.is_empty() || pending_separator;
        if pending_separator && !normalized.is_empty() {
            normalized.push(b' ');
        }
        pending_separator = false;

        if byte == b'"' && field_start {
            in_quotes = true;
        }
        normalized.push(byte);
    }

    normalized
}

/// Split one raw line of a snapshot file into fields
///
/// The returned record carries `line_number` as its position so later errors can
/// point at the line.
///
/// # Returns
///
/// * `Ok(Some(record))` - The fields of the line
/// * `Ok(None)` - The line is blank
/// * `Err(RentalError::MalformedRecord)` - The line is not valid UTF-8
pub fn split_line(line: &[u8], line_number: u64) -> Result<Option<StringRecord>, RentalError> {
    let normalized = normalize_separators(line);
    if normalized.is_empty() {
        return Ok(None);
    }

    let mut reader = reader_builder().from_reader(normalized.as_slice());
    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => {}
        Ok(false) => return Ok(None),
        Err(e) => {
            let message = match e.kind() {
                csv::ErrorKind::Utf8 { err, .. } => {
                    format!("invalid UTF-8 in field {}", err.field() + 1)
                }
                _ => e.to_string(),
            };
            return Err(RentalError::malformed(Some(line_number), message));
        }
    }

    let mut position = Position::new();
    position.set_line(line_number);
    record.set_position(Some(position));

    Ok(Some(record))
}

fn record_line(record: &StringRecord) -> Option<u64> {
    record.position().map(|pos| pos.line())
}

/// Convert a vehicle record to a vehicle
///
/// # Arguments
///
/// * `record` - One line of the vehicles file, split into fields
///
/// # Returns
///
/// Result containing either:
/// - Ok(Vehicle) - Successfully converted record
/// - Err(RentalError) - `UnknownVehicleType` for an unrecognized tag, `MalformedRecord`
///   for any other problem
pub fn parse_vehicle_record(record: &StringRecord) -> Result<Vehicle, RentalError> {
    let line = record_line(record);

    let row: VehicleRow = match record.len() {
        VEHICLE_FIELDS => record.deserialize(None)?,
        LEGACY_VEHICLE_FIELDS => record.deserialize::<LegacyVehicleRow>(None)?.into(),
        count => {
            return Err(RentalError::malformed(
                line,
                format!("expected {VEHICLE_FIELDS} fields in vehicle line, found {count}"),
            ))
        }
    };

    convert_vehicle_row(row, line)
}

/// Convert a deserialized vehicle row to a vehicle
pub fn convert_vehicle_row(row: VehicleRow, line: Option<u64>) -> Result<Vehicle, RentalError> {
    let vehicle_type: VehicleType =
        row.vehicle_type
            .parse()
            .map_err(|_| RentalError::UnknownVehicleType {
                type_tag: row.vehicle_type.clone(),
                line,
            })?;

    if row.vehicle_id.is_empty() {
        return Err(RentalError::malformed(line, "empty vehicle ID"));
    }

    let available = match row.available {
        0 => false,
        1 => true,
        other => {
            return Err(RentalError::malformed(
                line,
                format!("availability must be 0 or 1, found {other}"),
            ))
        }
    };

    Ok(Vehicle::new(
        vehicle_type,
        row.vehicle_id,
        row.make,
        row.model,
        row.passengers,
        row.storage,
        available,
    ))
}

/// Convert a customer record to a `CustomerRecord`
///
/// When the third field is not an integer the points default to 0 and every field
/// from the third on is taken as a rented vehicle ID. Negative points are read as 0.
///
/// # Errors
///
/// `MalformedRecord` if the ID is not a number or the name is missing.
pub fn parse_customer_record(record: &StringRecord) -> Result<CustomerRecord, RentalError> {
    let line = record_line(record);

    let customer_id = record
        .get(0)
        .ok_or_else(|| RentalError::malformed(line, "empty customer line"))?;
    let customer_id: CustomerId = customer_id
        .parse()
        .map_err(|_| RentalError::malformed(line, format!("invalid customer ID '{customer_id}'")))?;

    let name = record
        .get(1)
        .ok_or_else(|| RentalError::malformed(line, "missing customer name"))?
        .to_string();

    let mut rest = record.iter().skip(2).peekable();

    let loyalty_points = match rest.peek().and_then(|field| field.parse::<i64>().ok()) {
        Some(points) => {
            rest.next();
            u32::try_from(points.max(0)).unwrap_or(u32::MAX)
        }
        None => 0,
    };

    Ok(CustomerRecord {
        customer_id,
        name,
        loyalty_points,
        vehicle_ids: rest.map(str::to_string).collect(),
    })
}

/// Quote a text field, escaping `\` and `"` with a backslash
pub fn quote_field(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Serialize a vehicle as one line (without the trailing newline)
pub fn format_vehicle_line(vehicle: &Vehicle) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        vehicle.vehicle_type(),
        vehicle.vehicle_id(),
        quote_field(vehicle.make()),
        quote_field(vehicle.model()),
        vehicle.passengers(),
        vehicle.storage(),
        u8::from(vehicle.is_available()),
    )
}

/// Serialize a customer as one line (without the trailing newline)
///
/// Points are always written, followed by the IDs of the vehicles on rent.
pub fn format_customer_line(customer: &Customer) -> String {
    let mut line = format!(
        "{} {} {}",
        customer.customer_id(),
        quote_field(customer.name()),
        customer.loyalty_points()
    );
    for rental in customer.rentals() {
        line.push(' ');
        line.push_str(&rental.vehicle_id);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    /// Split a single non-blank line as the first line of a file
    fn record(line: &str) -> StringRecord {
        split_line(line.as_bytes(), 1).unwrap().unwrap()
    }

    #[rstest]
    #[case::double_space("Car  V101 \"Toyota\" \"Corolla\" 5 400 1")]
    #[case::leading_space(" Car V101 \"Toyota\" \"Corolla\" 5 400 1")]
    #[case::tab("Car\tV101 \"Toyota\"\t\t\"Corolla\" 5 400 1")]
    #[case::trailing_space_and_crlf("Car V101 \"Toyota\" \"Corolla\" 5 400 1  \r\n")]
    fn test_split_line_accepts_whitespace_runs(#[case] line: &str) {
        let vehicle = parse_vehicle_record(&record(line)).unwrap();

        assert_eq!(vehicle.vehicle_id(), "V101");
        assert_eq!(vehicle.model(), "Corolla");
    }

    #[test]
    fn test_split_line_keeps_quoted_whitespace() {
        let fields = record("Van V110 \"Land  Rover\" \"Defender\t130\" 8 900 1");

        assert_eq!(fields.get(2), Some("Land  Rover"));
        assert_eq!(fields.get(3), Some("Defender\t130"));
    }

    #[test]
    fn test_split_line_keeps_empty_quoted_field() {
        let fields = record("101 \"\" 5");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get(1), Some(""));
    }

    #[test]
    fn test_split_line_unterminated_quote_stays_on_its_line() {
        let fields = record("Car V101 \"Toyota Corolla 5 400 1\n");

        assert_eq!(fields.len(), 3);
        assert!(matches!(
            parse_vehicle_record(&fields),
            Err(RentalError::MalformedRecord { line: Some(1), .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("\n")]
    #[case(" \t \r\n")]
    fn test_split_line_blank(#[case] line: &str) {
        assert_eq!(split_line(line.as_bytes(), 4).unwrap(), None);
    }

    #[test]
    fn test_split_line_sets_line_number() {
        let fields = split_line(b"102 \"Bob\" 0\n", 9).unwrap().unwrap();
        assert_eq!(fields.position().map(|p| p.line()), Some(9));
    }

    #[test]
    fn test_split_line_invalid_utf8() {
        let result = split_line(b"102 \"\xff\xfe\" 0\n", 2);

        assert!(matches!(
            result,
            Err(RentalError::MalformedRecord { line: Some(2), .. })
        ));
    }

    #[rstest]
    #[case("Car V101 \"Toyota\" \"Corolla\" 5 400 1", VehicleType::Car, true)]
    #[case("Van V102 \"Ford\" \"Transit\" 3 1200 0", VehicleType::Van, false)]
    #[case("Minibus V103 \"Mercedes\" \"Sprinter\" 16 500 1", VehicleType::Minibus, true)]
    #[case("SUV V105 \"Audi\" \"Q8\" 5 605 1", VehicleType::Suv, true)]
    fn test_parse_vehicle_record_tagged(
        #[case] line: &str,
        #[case] expected_type: VehicleType,
        #[case] available: bool,
    ) {
        let vehicle = parse_vehicle_record(&record(line)).unwrap();

        assert_eq!(vehicle.vehicle_type(), expected_type);
        assert_eq!(vehicle.is_available(), available);
    }

    #[test]
    fn test_parse_vehicle_record_fields() {
        let vehicle =
            parse_vehicle_record(&record("Car V108 \"Vauxhall\" \"Corsa\" 5 300 1")).unwrap();

        assert_eq!(vehicle.vehicle_id(), "V108");
        assert_eq!(vehicle.make(), "Vauxhall");
        assert_eq!(vehicle.model(), "Corsa");
        assert_eq!(vehicle.passengers(), 5);
        assert_eq!(vehicle.storage(), 300);
    }

    #[test]
    fn test_parse_vehicle_record_quoted_spaces_and_escapes() {
        let vehicle = parse_vehicle_record(&record(
            r#"Van V110 "Land Rover" "Defender \"130\" \\ LWB" 8 900 1"#,
        ))
        .unwrap();

        assert_eq!(vehicle.make(), "Land Rover");
        assert_eq!(vehicle.model(), r#"Defender "130" \ LWB"#);
    }

    #[test]
    fn test_parse_vehicle_record_unquoted_words() {
        let vehicle = parse_vehicle_record(&record("Car V101 Toyota Corolla 5 400 1")).unwrap();
        assert_eq!(vehicle.make(), "Toyota");
    }

    #[test]
    fn test_parse_vehicle_record_legacy_is_car() {
        let vehicle = parse_vehicle_record(&record("V200 \"Fiat\" \"Panda\" 4 225 0")).unwrap();

        assert_eq!(vehicle.vehicle_type(), VehicleType::Car);
        assert_eq!(vehicle.vehicle_id(), "V200");
        assert!(!vehicle.is_available());
    }

    #[test]
    fn test_parse_vehicle_record_unknown_type() {
        let result = parse_vehicle_record(&record("Truck V300 \"MAN\" \"TGX\" 2 9000 1"));

        assert!(matches!(
            result,
            Err(RentalError::UnknownVehicleType { ref type_tag, line: Some(1) }) if type_tag == "Truck"
        ));
    }

    #[rstest]
    #[case::too_few_fields("Car V101 \"Toyota\" 5 400")]
    #[case::too_many_fields("Car V101 \"Toyota\" \"Corolla\" 5 400 1 extra")]
    #[case::non_numeric_passengers("Car V101 \"Toyota\" \"Corolla\" five 400 1")]
    #[case::negative_storage("Car V101 \"Toyota\" \"Corolla\" 5 -400 1")]
    #[case::availability_out_of_range("Car V101 \"Toyota\" \"Corolla\" 5 400 2")]
    fn test_parse_vehicle_record_malformed(#[case] line: &str) {
        let result = parse_vehicle_record(&record(line));

        assert!(matches!(result, Err(RentalError::MalformedRecord { .. })));
    }

    #[rstest]
    #[case::full("101 \"Alice Smith\" 40 V101 V104", 101, "Alice Smith", 40, vec!["V101", "V104"])]
    #[case::points_only("102 \"Bob\" 0", 102, "Bob", 0, vec![])]
    #[case::missing_points("103 \"Carol\" V102", 103, "Carol", 0, vec!["V102"])]
    #[case::name_only("104 \"Dan\"", 104, "Dan", 0, vec![])]
    #[case::negative_points("101 \"Alice\" -5 V101", 101, "Alice", 0, vec!["V101"])]
    #[case::leading_space(" 101 \"Alice\" 5", 101, "Alice", 5, vec![])]
    #[case::points_above_u32("105 \"Eve\" 5000000000", 105, "Eve", u32::MAX, vec![])]
    fn test_parse_customer_record(
        #[case] line: &str,
        #[case] customer_id: CustomerId,
        #[case] name: &str,
        #[case] loyalty_points: u32,
        #[case] vehicle_ids: Vec<&str>,
    ) {
        let parsed = parse_customer_record(&record(line)).unwrap();

        assert_eq!(parsed.customer_id, customer_id);
        assert_eq!(parsed.name, name);
        assert_eq!(parsed.loyalty_points, loyalty_points);
        assert_eq!(parsed.vehicle_ids, vehicle_ids);
    }

    #[rstest]
    #[case::non_numeric_id("abc \"Alice\" 10")]
    #[case::missing_name("101")]
    fn test_parse_customer_record_malformed(#[case] line: &str) {
        let result = parse_customer_record(&record(line));
        assert!(matches!(result, Err(RentalError::MalformedRecord { .. })));
    }

    #[rstest]
    #[case("Toyota", "\"Toyota\"")]
    #[case("Land Rover", "\"Land Rover\"")]
    #[case("Say \"hi\"", r#""Say \"hi\"""#)]
    #[case(r"back\slash", r#""back\\slash""#)]
    #[case("", "\"\"")]
    fn test_quote_field(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(quote_field(value), expected);
    }

    #[test]
    fn test_format_vehicle_line() {
        let vehicle = Vehicle::new(VehicleType::Suv, "V105", "Audi", "Q8", 5, 605, false);
        assert_eq!(format_vehicle_line(&vehicle), "SUV V105 \"Audi\" \"Q8\" 5 605 0");
    }

    #[test]
    fn test_format_customer_line() {
        let mut customer = Customer::new(106, "Christina");
        customer.set_loyalty_points(20);
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        customer.rent_vehicle("V108", day, day);
        customer.rent_vehicle("V101", day, day);

        assert_eq!(format_customer_line(&customer), "106 \"Christina\" 20 V108 V101");
        assert_eq!(
            format_customer_line(&Customer::new(101, "Alice")),
            "101 \"Alice\" 0"
        );
    }

    #[test]
    fn test_formatted_lines_parse_back() {
        let vehicle = Vehicle::new(
            VehicleType::Minibus,
            "V103",
            "Mercedes \"Benz\"",
            "Sprinter",
            16,
            500,
            true,
        );

        let parsed = parse_vehicle_record(&record(&format_vehicle_line(&vehicle))).unwrap();

        assert_eq!(parsed, vehicle);
    }
}
