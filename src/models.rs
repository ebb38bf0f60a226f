use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Accepted census window for observation years (4-digit).
pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2100;

/// One (year, population) data point. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    year: i32,
    population: i64,
}

impl Observation {
    /// Validate and build an observation. Years must have 4 digits and lie in
    /// `1900..=2100`; populations must be non-negative.
    pub fn new(year: i32, population: i64) -> Result<Self> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(Error::InvalidInput(format!(
                "year {year} outside {YEAR_MIN}..={YEAR_MAX}"
            )));
        }
        if population < 0 {
            return Err(Error::InvalidInput(format!(
                "population {population} is negative"
            )));
        }
        Ok(Self { year, population })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn population(&self) -> i64 {
        self.population
    }
}

/// Raw projection of one observation, used by the exporter and the series
/// file formats. Field names double as the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "année")]
    pub year: i32,
    pub population: i64,
}

impl From<Observation> for ExportRow {
    fn from(o: Observation) -> Self {
        Self {
            year: o.year,
            population: o.population,
        }
    }
}

/// A population value in both representations. Derived on demand; the styled
/// string never feeds back into the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayValue {
    pub raw: i64,
    pub styled: String,
}

/// Which representation a view shows for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// Plain digits, numerically sortable, round-trippable.
    #[default]
    Raw,
    /// Thousands grouped with a space, for human scanning.
    Styled,
}

/// Per-column display choice for the data table. Defaults to raw on both
/// columns so the table stays sortable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStyle {
    pub year: StyleMode,
    pub population: StyleMode,
}

/// Ordered, validated series of observations. The single source of truth for
/// chart, table, and export; all of those are pure projections of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    observations: Vec<Observation>,
}

impl DataSet {
    /// Build a data set, enforcing the series invariants: at least two
    /// observations (a line needs two points), years unique and strictly
    /// ascending.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.len() < 2 {
            return Err(Error::MalformedDataSet(format!(
                "need at least 2 observations, got {}",
                observations.len()
            )));
        }
        for pair in observations.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(Error::MalformedDataSet(format!(
                    "years must be strictly ascending: {} then {}",
                    pair[0].year, pair[1].year
                )));
            }
        }
        Ok(Self { observations })
    }

    /// Build a data set from raw `(year, population)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, i64)>,
    {
        let observations = pairs
            .into_iter()
            .map(|(y, p)| Observation::new(y, p))
            .collect::<Result<Vec<_>>>()?;
        Self::new(observations)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Earliest observation. Always present (len >= 2).
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// Latest observation. Always present (len >= 2).
    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    pub fn min_population(&self) -> i64 {
        self.observations
            .iter()
            .map(|o| o.population)
            .min()
            .unwrap_or(0)
    }

    pub fn max_population(&self) -> i64 {
        self.observations
            .iter()
            .map(|o| o.population)
            .max()
            .unwrap_or(0)
    }

    /// Raw projection handed to the exporter, in series order.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.observations.iter().copied().map(ExportRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_unique_years_accepted() {
        let d = DataSet::from_pairs([(1968, 8_949), (1975, 9_550)]).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.first().year(), 1968);
        assert_eq!(d.last().population(), 9_550);
    }

    #[test]
    fn observation_is_validated_on_construction() {
        assert!(Observation::new(1899, 0).is_err());
        assert!(Observation::new(2101, 0).is_err());
        assert!(Observation::new(2000, -1).is_err());
        assert!(Observation::new(2000, 0).is_ok());
    }
}
