//! Assembly of the dashboard page model.
//!
//! The rendering host (a web dashboard, a GUI, the CLI) receives one
//! [`Dashboard`] per page view plus, on demand, the [`ExportPayload`] behind
//! each download action. Everything here is a pure function of the series.

use crate::chart::{self, ChartSpec};
use crate::error::Result;
use crate::export;
use crate::format;
use crate::models::{DataSet, TableStyle};
use crate::stats;
use crate::table::{self, TableView};
use serde::Serialize;

/// Page title of the dashboard.
pub const DASHBOARD_TITLE: &str = "Évolution de la Population";

/// Export formats offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

/// One user-triggered download action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportAction {
    pub label: String,
    pub filename: &'static str,
    pub mime: &'static str,
    pub format: ExportFormat,
}

/// Materialized download: metadata plus the serialized bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Everything the rendering host needs for one page view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub chart: ChartSpec,
    pub table: TableView,
    pub analysis: String,
    pub exports: Vec<ExportAction>,
}

/// Build the full page model: chart encoding, display table, analysis prose,
/// and the two download actions.
pub fn build_dashboard(dataset: &DataSet, style: TableStyle) -> Result<Dashboard> {
    Ok(Dashboard {
        title: DASHBOARD_TITLE.to_string(),
        chart: chart::build_chart_spec(dataset)?,
        table: table::build_table(dataset, style)?,
        analysis: analysis_paragraph(dataset)?,
        exports: vec![
            ExportAction {
                label: "Télécharger en CSV".to_string(),
                filename: export::CSV_FILENAME,
                mime: export::CSV_MIME,
                format: ExportFormat::Csv,
            },
            ExportAction {
                label: "Télécharger en Excel".to_string(),
                filename: export::XLSX_FILENAME,
                mime: export::XLSX_MIME,
                format: ExportFormat::Xlsx,
            },
        ],
    })
}

/// Serialize the raw series for one download action.
pub fn export_payload(dataset: &DataSet, format: ExportFormat) -> Result<ExportPayload> {
    let rows = dataset.export_rows();
    let (filename, mime, bytes) = match format {
        ExportFormat::Csv => (
            export::CSV_FILENAME,
            export::CSV_MIME,
            export::to_csv(&rows)?,
        ),
        ExportFormat::Xlsx => (
            export::XLSX_FILENAME,
            export::XLSX_MIME,
            export::to_xlsx(&rows)?,
        ),
    };
    Ok(ExportPayload {
        filename,
        mime,
        bytes,
    })
}

/// French prose summary shown under the chart. Uses styled values; this is a
/// presentation context.
pub fn analysis_paragraph(dataset: &DataSet) -> Result<String> {
    let s = stats::series_summary(dataset);
    let start = format::style_thousands(s.start_population)?;
    let end = format::style_thousands(s.end_population)?;
    let pct = format!("{:.1}", s.growth_pct).replace('.', ",");
    Ok(format!(
        "Entre {} et {}, la population de la commune est passée de {} à {} habitants, \
         soit une évolution de {} %. La série compte {} relevés.",
        s.start_year, s.end_year, start, end, pct, s.count
    ))
}
