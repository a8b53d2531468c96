//! # Valora Ext File
//!
//! File-based curve data loading for the Valora valuation library.
//!
//! Parses fixed-format discount-curve exports (CSV with an
//! `Index,Currency,Date,Days,Rate,DF` header) into the uniform
//! [`CurvePoint`](valora_curves::CurvePoint) row shape the core consumes.
//! Malformed rows are surfaced here, before they reach the core; the first
//! bad row aborts the load.
//!
//! File paths are explicit parameters. This crate holds no ambient
//! configuration or global state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod market_data;

pub use error::{FileError, FileResult};
pub use market_data::{load_curve_points, CsvCurveSource};
