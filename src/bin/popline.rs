use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use popline::models::{DataSet, StyleMode, TableStyle};
use popline::{chart, presenter, stats, storage, table, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "popline",
    version,
    about = "Format, tabulate, chart & export a population series"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build dashboard outputs (chart, table, exports, analysis) from a series.
    Report(ReportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColumnStyle {
    Raw,
    Styled,
}

impl From<ColumnStyle> for StyleMode {
    fn from(c: ColumnStyle) -> Self {
        match c {
            ColumnStyle::Raw => StyleMode::Raw,
            ColumnStyle::Styled => StyleMode::Styled,
        }
    }
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Series file (.csv with an année,population header, or a .json array).
    /// Uses the built-in commune series if omitted.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Render the line chart to this path (.svg or .png).
    #[arg(long)]
    chart: Option<PathBuf>,
    /// Width of the chart (default 800).
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Height of the chart (default 400).
    #[arg(long, default_value_t = 400)]
    height: u32,
    /// TTF font registered for chart text rendering.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Write the declarative chart spec as JSON.
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Write the CSV export payload.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the XLSX export payload.
    #[arg(long)]
    xlsx: Option<PathBuf>,
    /// Print the display table to stdout.
    #[arg(long, default_value_t = false)]
    table: bool,
    /// Display mode of the year column.
    #[arg(long, value_enum, default_value = "raw")]
    year_style: ColumnStyle,
    /// Display mode of the population column.
    #[arg(long, value_enum, default_value = "raw")]
    population_style: ColumnStyle,
    /// Print summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Print the analysis paragraph to stdout.
    #[arg(long, default_value_t = false)]
    analysis: bool,
}

/// Census rounds of the fictitious commune, 1968..2021.
const BUILTIN_SERIES: [(i32, i64); 9] = [
    (1968, 8_949),
    (1975, 9_550),
    (1982, 9_800),
    (1990, 10_100),
    (1999, 11_250),
    (2006, 12_500),
    (2011, 13_750),
    (2016, 14_854),
    (2021, 16_000),
];

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
    }
}

fn load_series(path: Option<&PathBuf>) -> Result<DataSet> {
    match path {
        Some(p) => {
            let ext = p
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            match ext.as_deref() {
                Some("json") => storage::load_json(p),
                _ => storage::load_csv(p),
            }
        }
        None => Ok(DataSet::from_pairs(BUILTIN_SERIES)?),
    }
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    let dataset = load_series(args.data.as_ref())?;

    if let Some(font_path) = args.font.as_ref() {
        let bytes: &'static [u8] = Box::leak(std::fs::read(font_path)?.into_boxed_slice());
        viz::register_font(bytes);
    }

    if let Some(path) = args.spec.as_ref() {
        let spec = chart::build_chart_spec(&dataset)?;
        storage::write_bytes(serde_json::to_string_pretty(&spec)?.as_bytes(), path)?;
        eprintln!("Wrote chart spec to {}", path.display());
    }

    if let Some(path) = args.chart.as_ref() {
        viz::plot_series(&dataset, path, args.width, args.height)?;
        eprintln!("Wrote chart to {}", path.display());
    }

    if let Some(path) = args.csv.as_ref() {
        let payload = presenter::export_payload(&dataset, presenter::ExportFormat::Csv)?;
        storage::write_bytes(&payload.bytes, path)?;
        eprintln!("Saved {} rows to {}", dataset.len(), path.display());
    }

    if let Some(path) = args.xlsx.as_ref() {
        let payload = presenter::export_payload(&dataset, presenter::ExportFormat::Xlsx)?;
        storage::write_bytes(&payload.bytes, path)?;
        eprintln!("Saved {} rows to {}", dataset.len(), path.display());
    }

    if args.table {
        let style = TableStyle {
            year: args.year_style.into(),
            population: args.population_style.into(),
        };
        let view = table::build_table(&dataset, style)?;
        println!(
            "{:<8} {:>12}",
            view.columns[0].header, view.columns[1].header
        );
        for row in &view.rows {
            println!("{:<8} {:>12}", row.year_display, row.population_display);
        }
    }

    if args.stats {
        let s = stats::series_summary(&dataset);
        println!(
            "count={} min={} max={} mean={:.1} median={:.1} growth={} ({:.1} %)",
            s.count, s.min, s.max, s.mean, s.median, s.growth, s.growth_pct
        );
    }

    if args.analysis {
        println!("{}", presenter::analysis_paragraph(&dataset)?);
    }

    Ok(())
}
