//! Link tables produced by the simulator and the metrics derived from them.
//!
//! # CSV format
//!
//! ```csv
//! agent_id,selected_agent,distance
//! 17,200000,84.2
//! 23,200001,412.9
//! ```
//!
//! Only rows linking a traced vehicle (`agent_id < base`) to an RSU
//! (`selected_agent >= base`) count towards the metrics.

use std::io::Read;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::{EvalResult, Metrics};

/// One agent→agent link reported by the simulator.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct LinkRecord {
    pub agent_id:       u64,
    pub selected_agent: u64,
    pub distance:       f64,
}

impl LinkRecord {
    pub fn new(agent_id: u64, selected_agent: u64, distance: f64) -> Self {
        Self { agent_id, selected_agent, distance }
    }

    /// `true` for a vehicle→RSU link.
    #[inline]
    pub fn is_vehicle_to_rsu(&self, agent_id_base: u32) -> bool {
        let base = agent_id_base as u64;
        self.agent_id < base && self.selected_agent >= base
    }
}

/// Read a link table from a CSV file.
///
/// Malformed rows are skipped with a warning so a partially written table
/// still yields metrics for whatever could be parsed.
pub fn read_link_table(path: &Path) -> EvalResult<Vec<LinkRecord>> {
    let file = std::fs::File::open(path)?;
    read_link_table_reader(file)
}

/// Like [`read_link_table`] but accepts any `Read` source.
pub fn read_link_table_reader<R: Read>(reader: R) -> EvalResult<Vec<LinkRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in csv_reader.deserialize::<LinkRecord>() {
        match result {
            Ok(r) => rows.push(r),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("link table: skipped {skipped} malformed rows, kept {}", rows.len());
    }
    Ok(rows)
}

/// Coverage and mean distance over the vehicle→RSU rows of `rows`.
///
/// - `coverage = 100 · |{distance ≤ radius}| / |rows|`, or `0` with no rows.
/// - `avg_distance` is the mean distance, or NaN with no rows.
pub fn metrics_from_links(rows: &[LinkRecord], agent_id_base: u32, rsu_radius: f64) -> Metrics {
    let mut total = 0usize;
    let mut covered = 0usize;
    let mut distance_sum = 0.0;
    for r in rows.iter().filter(|r| r.is_vehicle_to_rsu(agent_id_base)) {
        total += 1;
        distance_sum += r.distance;
        if r.distance <= rsu_radius {
            covered += 1;
        }
    }
    if total == 0 {
        return Metrics::new(0.0, f64::NAN);
    }
    Metrics::new(
        covered as f64 / total as f64 * 100.0,
        distance_sum / total as f64,
    )
}
