//! Bar readers and result formatters for the fracvar estimator.
//!
//! This crate moves data in and out of the estimator:
//!
//! - [`read_bars`] / [`read_bars_from_path`] - Load bars from CSV, JSON or NDJSON
//! - [`CsvFormatter`] - CSV output
//! - [`JsonFormatter`] - JSON array or NDJSON output

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fracvar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod reader;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, InputFormat};
pub use json::JsonFormatter;
pub use reader::{read_bars, read_bars_from_path};
