use popline::models::{DataSet, StyleMode, TableStyle};
use popline::presenter::{ExportFormat, analysis_paragraph, build_dashboard, export_payload};

fn series() -> DataSet {
    DataSet::from_pairs([(1968, 8_949), (1975, 9_550), (1990, 10_100), (2021, 16_000)]).unwrap()
}

#[test]
fn dashboard_carries_chart_table_analysis_and_two_exports() {
    let d = series();
    let dash = build_dashboard(&d, TableStyle::default()).unwrap();
    assert_eq!(dash.title, "Évolution de la Population");
    assert_eq!(dash.chart.x.ticks.len(), d.len());
    assert_eq!(dash.table.rows.len(), d.len());
    assert_eq!(dash.exports.len(), 2);
    assert_eq!(dash.exports[0].filename, "population_data.csv");
    assert_eq!(dash.exports[1].filename, "population_data.xlsx");
}

#[test]
fn analysis_prose_uses_styled_values() {
    let text = analysis_paragraph(&series()).unwrap();
    assert!(text.contains("1968"));
    assert!(text.contains("2021"));
    assert!(text.contains("8 949"));
    assert!(text.contains("16 000"));
}

#[test]
fn table_style_flows_through_the_dashboard() {
    let style = TableStyle {
        year: StyleMode::Raw,
        population: StyleMode::Styled,
    };
    let dash = build_dashboard(&series(), style).unwrap();
    assert_eq!(dash.table.rows[3].population_display, "16 000");
    assert!(!dash.table.columns[1].sortable);
}

#[test]
fn payloads_carry_download_metadata_and_raw_bytes() {
    let d = series();
    let csv = export_payload(&d, ExportFormat::Csv).unwrap();
    assert_eq!(csv.filename, "population_data.csv");
    assert_eq!(csv.mime, "text/csv");
    assert!(csv.bytes.starts_with("année,population\n".as_bytes()));

    let xlsx = export_payload(&d, ExportFormat::Xlsx).unwrap();
    assert_eq!(xlsx.filename, "population_data.xlsx");
    assert_eq!(
        xlsx.mime,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(xlsx.bytes.starts_with(b"PK"));
}
