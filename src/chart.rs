//! Declarative encoding for the population line chart.
//!
//! The builder is a pure function of a [`DataSet`]; serializing the result
//! with `serde_json` is reproducible byte for byte, so hosts can cache or
//! diff specs. Rendering is a separate concern (see [`crate::viz`]).

use crate::error::Result;
use crate::format;
use crate::models::DataSet;
use serde::Serialize;

/// Chart title shown by the dashboard.
pub const CHART_TITLE: &str = "Évolution de la population";
/// Line and point color of the population series.
pub const SERIES_COLOR: &str = "#3B825C";
/// Point marker radius in pixels.
pub const POINT_SIZE: u32 = 3;
/// Number of labeled ticks on the quantitative axis.
pub const Y_TICK_COUNT: usize = 6;

/// Encoding channel of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Ordinal,
    Quantitative,
}

/// Mark type of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XTick {
    pub year: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YTick {
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XAxis {
    pub channel: Channel,
    pub title: String,
    /// One tick per observation year, in series order.
    pub ticks: Vec<XTick>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YAxis {
    pub channel: Channel,
    pub title: String,
    /// `[min(population), max(population)]` of the series.
    pub domain: [i64; 2],
    /// Evenly spaced integer ticks, endpoints included.
    pub ticks: Vec<YTick>,
    pub scientific_notation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark {
    pub kind: MarkKind,
    pub color: String,
    pub point_size: u32,
    pub point_filled: bool,
}

/// Hover text for one point: styled year and styled population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub year: String,
    pub population: String,
}

/// Complete visual encoding handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x: XAxis,
    pub y: YAxis,
    pub mark: Mark,
    pub tooltips: Vec<Tooltip>,
}

/// Build the chart encoding for a series: one ordinal tick per year,
/// thousands-grouped labels on the quantitative axis, a line mark with point
/// markers, and one tooltip per observation. Never mutates the series.
pub fn build_chart_spec(dataset: &DataSet) -> Result<ChartSpec> {
    let mut x_ticks = Vec::with_capacity(dataset.len());
    let mut tooltips = Vec::with_capacity(dataset.len());
    for obs in dataset.iter() {
        let year_label = format::style_year(obs.year())?;
        tooltips.push(Tooltip {
            year: year_label.clone(),
            population: format::style_thousands(obs.population())?,
        });
        x_ticks.push(XTick {
            year: obs.year(),
            label: year_label,
        });
    }

    let lo = dataset.min_population();
    let hi = dataset.max_population();
    let y_ticks = y_tick_values(lo, hi, Y_TICK_COUNT)
        .into_iter()
        .map(|value| {
            Ok(YTick {
                value,
                label: format::style_thousands(value)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ChartSpec {
        title: CHART_TITLE.to_string(),
        x: XAxis {
            channel: Channel::Ordinal,
            title: "Année".to_string(),
            ticks: x_ticks,
        },
        y: YAxis {
            channel: Channel::Quantitative,
            title: "Population".to_string(),
            domain: [lo, hi],
            ticks: y_ticks,
            scientific_notation: false,
        },
        mark: Mark {
            kind: MarkKind::Line,
            color: SERIES_COLOR.to_string(),
            point_size: POINT_SIZE,
            point_filled: true,
        },
        tooltips,
    })
}

/// Evenly spaced integer ticks over `[lo, hi]`, endpoints included,
/// deduplicated when the range is too narrow for `count` distinct values.
fn y_tick_values(lo: i64, hi: i64, count: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(count.max(2));
    if count < 2 || hi <= lo {
        out.push(lo);
        if hi > lo {
            out.push(hi);
        }
        return out;
    }
    let span = hi - lo;
    for i in 0..count {
        let v = lo + span * i as i64 / (count as i64 - 1);
        if out.last() != Some(&v) {
            out.push(v);
        }
    }
    out
}
