//! Dataset acquisition
//!
//! Builds `Dataset` values from CSV sources.

pub mod csv_loader;

pub use csv_loader::{load_csv, parse_csv_str, LoadError};
