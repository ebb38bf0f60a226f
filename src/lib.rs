//! popline
//!
//! A lightweight Rust library for formatting, tabulating, charting, and
//! exporting a municipal population time series. Pairs with the `popline` CLI.
//!
//! ### Features
//! - Validated (year, population) series with strict ordering invariants
//! - French thousands-style display values that never leak into exports
//! - Declarative, reproducible line-chart encodings (plus SVG/PNG rendering)
//! - Display tables with per-column raw/styled modes
//! - CSV and XLSX export payloads and summary statistics
//!
//! ### Example
//! ```
//! use popline::models::{DataSet, TableStyle};
//!
//! let dataset = DataSet::from_pairs([(1968, 8_949), (1990, 10_100), (2021, 16_000)])?;
//! let dashboard = popline::presenter::build_dashboard(&dataset, TableStyle::default())?;
//! let csv = popline::export::to_csv(&dataset.export_rows())?;
//! assert!(dashboard.analysis.contains("16 000"));
//! assert!(!String::from_utf8(csv)?.contains("16 000"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod presenter;
pub mod stats;
pub mod storage;
pub mod table;
pub mod viz;

pub use error::{Error, Result};
pub use models::{DataSet, Observation, StyleMode, TableStyle};
