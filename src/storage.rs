use crate::models::{DataSet, ExportRow, Observation};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Load a series from a CSV file with the `année,population` schema.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataSet> {
    let path = path.as_ref();
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let mut rows = Vec::new();
    for rec in rdr.deserialize::<ExportRow>() {
        rows.push(rec?);
    }
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    dataset_from_rows(rows)
}

/// Load a series from a JSON array of `{"année": .., "population": ..}` rows.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<DataSet> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rows: Vec<ExportRow> = serde_json::from_reader(f)?;
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    dataset_from_rows(rows)
}

fn dataset_from_rows(rows: Vec<ExportRow>) -> Result<DataSet> {
    let observations = rows
        .into_iter()
        .map(|r| Observation::new(r.year, r.population))
        .collect::<crate::error::Result<Vec<_>>>()?;
    Ok(DataSet::new(observations)?)
}

/// Write export payload bytes to disk.
pub fn write_bytes<P: AsRef<Path>>(bytes: &[u8], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    f.write_all(bytes)?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export;
    use tempfile::tempdir;

    #[test]
    fn write_and_reload_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("serie.csv");
        let d = DataSet::from_pairs([(1968, 8_949), (2021, 16_000)]).unwrap();
        write_bytes(&export::to_csv(&d.export_rows()).unwrap(), &path).unwrap();
        let loaded = load_csv(&path).unwrap();
        assert_eq!(loaded, d);
    }

    #[test]
    fn short_series_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "année,population\n1968,8949\n").unwrap();
        assert!(load_csv(&path).is_err());
    }
}
