//! CSV junction loader.
//!
//! # CSV format
//!
//! One row per junction, as extracted from the network file:
//!
//! ```csv
//! id,x,y,type
//! 1000,120.5,33.0,priority
//! cluster_12,480.2,910.7,traffic_light
//! ```
//!
//! `type` may be omitted.  Row order does not matter; [`JunctionSet::new`]
//! sorts by position.
//!
//! [`JunctionSet::new`]: crate::JunctionSet::new

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Junction, SpatialError, SpatialResult};

#[derive(Deserialize)]
struct JunctionRecord {
    id:   String,
    x:    f64,
    y:    f64,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Load junctions from a CSV file.
pub fn load_junctions_csv(path: &Path) -> SpatialResult<Vec<Junction>> {
    let file = std::fs::File::open(path).map_err(SpatialError::Io)?;
    load_junctions_reader(file)
}

/// Like [`load_junctions_csv`] but accepts any `Read` source.
pub fn load_junctions_reader<R: Read>(reader: R) -> SpatialResult<Vec<Junction>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut junctions = Vec::new();
    for result in csv_reader.deserialize::<JunctionRecord>() {
        let r = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        junctions.push(Junction::new(r.id, r.x, r.y, r.kind));
    }
    Ok(junctions)
}
