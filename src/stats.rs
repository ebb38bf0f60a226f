use crate::models::DataSet;
use serde::Serialize;

/// Summary statistics for one population series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub start_year: i32,
    pub end_year: i32,
    pub start_population: i64,
    pub end_population: i64,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub median: f64,
    /// Signed change between the first and last observation.
    pub growth: i64,
    /// Percent change from the first observation; 0.0 when the series starts
    /// at zero.
    pub growth_pct: f64,
}

/// Compute summary statistics over the series.
pub fn series_summary(dataset: &DataSet) -> SeriesSummary {
    let mut values: Vec<i64> = dataset.iter().map(|o| o.population()).collect();
    values.sort_unstable();
    let count = values.len();
    let min = values[0];
    let max = values[count - 1];
    let mean = values.iter().sum::<i64>() as f64 / count as f64;
    let median = if count % 2 == 1 {
        values[count / 2] as f64
    } else {
        (values[count / 2 - 1] + values[count / 2]) as f64 / 2.0
    };

    let first = dataset.first();
    let last = dataset.last();
    let growth = last.population() - first.population();
    let growth_pct = if first.population() == 0 {
        0.0
    } else {
        growth as f64 * 100.0 / first.population() as f64
    };

    SeriesSummary {
        count,
        start_year: first.year(),
        end_year: last.year(),
        start_population: first.population(),
        end_population: last.population(),
        min,
        max,
        mean,
        median,
        growth,
        growth_pct,
    }
}
