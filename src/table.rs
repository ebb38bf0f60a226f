//! Display table derived from a series.
//!
//! Each column carries its own [`StyleMode`]: a raw column keeps plain digits
//! and stays numerically sortable; a styled column uses the space thousands
//! separator from [`crate::format`].

use crate::error::Result;
use crate::format;
use crate::models::{DataSet, StyleMode, TableStyle};
use serde::Serialize;

pub const YEAR_HEADER: &str = "Année";
pub const POPULATION_HEADER: &str = "Population";

/// Column metadata: header text, display mode, and whether the rendered
/// values still compare numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: String,
    pub mode: StyleMode,
    pub sortable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub year_display: String,
    pub population_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

/// Build the display table, one row per observation in series order.
pub fn build_table(dataset: &DataSet, style: TableStyle) -> Result<TableView> {
    let mut rows = Vec::with_capacity(dataset.len());
    for obs in dataset.iter() {
        // Year digits are never grouped, so both modes render identically.
        let year_display = format::style_year(obs.year())?;
        let population_display = match style.population {
            StyleMode::Raw => obs.population().to_string(),
            StyleMode::Styled => format::style_thousands(obs.population())?,
        };
        rows.push(TableRow {
            year_display,
            population_display,
        });
    }

    Ok(TableView {
        columns: vec![
            Column {
                header: YEAR_HEADER.to_string(),
                mode: style.year,
                sortable: true,
            },
            Column {
                header: POPULATION_HEADER.to_string(),
                mode: style.population,
                sortable: matches!(style.population, StyleMode::Raw),
            },
        ],
        rows,
    })
}
