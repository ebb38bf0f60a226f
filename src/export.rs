//! Raw-value export payloads for the download actions.
//!
//! Exports always carry unstyled integers; the styled representation is
//! presentation-only and must never appear in these bytes. Both formats share
//! the `année,population` header and the series order of the data set.

use crate::error::{Error, Result, SerializationError};
use crate::models::ExportRow;
use rust_xlsxwriter::Workbook;

/// Download metadata for the CSV action.
pub const CSV_FILENAME: &str = "population_data.csv";
pub const CSV_MIME: &str = "text/csv";
/// Download metadata for the spreadsheet action.
pub const XLSX_FILENAME: &str = "population_data.xlsx";
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// Worksheet name of the spreadsheet export.
pub const SHEET_NAME: &str = "Population";

/// Serialize rows as UTF-8 CSV with the `année,population` header, one line
/// per observation.
pub fn to_csv(rows: &[ExportRow]) -> Result<Vec<u8>> {
    if rows.is_empty() {
        return Err(SerializationError::Empty.into());
    }
    write_csv(rows).map_err(Error::from)
}

fn write_csv(rows: &[ExportRow]) -> std::result::Result<Vec<u8>, SerializationError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.into_inner()
        .map_err(|e| SerializationError::Buffer(e.to_string()))
}

/// Parse CSV bytes produced by [`to_csv`] back into raw rows. Together with
/// [`to_csv`] this upholds the round-trip law
/// `parse_csv(to_csv(rows)) == rows`.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ExportRow>> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(bytes);
    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        rows.push(rec.map_err(SerializationError::from)?);
    }
    Ok(rows)
}

/// Serialize rows as a one-sheet XLSX workbook, in memory.
pub fn to_xlsx(rows: &[ExportRow]) -> Result<Vec<u8>> {
    if rows.is_empty() {
        return Err(SerializationError::Empty.into());
    }
    write_workbook(rows).map_err(Error::from)
}

fn write_workbook(rows: &[ExportRow]) -> std::result::Result<Vec<u8>, SerializationError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.write_string(0, 0, "année")?;
    worksheet.write_string(0, 1, "population")?;
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_number(r, 0, row.year as f64)?;
        worksheet.write_number(r, 1, row.population as f64)?;
    }
    Ok(workbook.save_to_buffer()?)
}
