//! Result files.

use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use rsu_place::StrategyReport;

use crate::run::GenerationRow;

/// All reports as pretty JSON.  NaN distances serialize as `null`.
pub fn write_reports(path: &Path, reports: &[StrategyReport]) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), reports)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn write_generations(path: &Path, rows: &[GenerationRow]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        w.serialize(row)?;
    }
    w.flush()?;
    Ok(())
}
