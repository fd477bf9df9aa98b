//! I/O module
//!
//! Handles the flat-file snapshots of the fleet and the customer roster.
//!
//! # Components
//!
//! - `record_format` - Line format handling (record conversion, line serialization)
//! - `record_reader` - Streaming reader with iterator interface
//! - `store` - Loading and saving both files

pub mod record_format;
pub mod record_reader;
pub mod store;

pub use record_format::{format_customer_line, format_vehicle_line, CustomerRecord};
pub use record_reader::RecordReader;
pub use store::{load_from_files, load_from_files_on, save_to_files, LoadSummary};
