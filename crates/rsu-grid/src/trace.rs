//! Vehicle trajectory traces.
//!
//! # CSV format
//!
//! One row per observation, the same schema the simulator consumes:
//!
//! ```csv
//! time_step,agent_id,x,y
//! 0.0,17,1203.5,880.1
//! 0.0,23,40.0,1190.7
//! 1.0,17,1210.2,884.9
//! ```
//!
//! Rows are stably sorted by `time_step` on load, so within one timestep the
//! file order is kept.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rsu_core::{AgentId, Point};

use crate::{ModelError, ModelResult};

/// One observation of one agent.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct TrajectoryRecord {
    pub time_step: f64,
    pub agent_id:  AgentId,
    pub x:         f64,
    pub y:         f64,
}

impl TrajectoryRecord {
    pub fn new(time_step: f64, agent_id: AgentId, x: f64, y: f64) -> Self {
        Self { time_step, agent_id, x, y }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A full trace, ordered by timestep.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    records: Vec<TrajectoryRecord>,
}

impl Trace {
    /// Stably sort `records` by `time_step`.
    pub fn new(mut records: Vec<TrajectoryRecord>) -> Self {
        records.sort_by(|a, b| a.time_step.total_cmp(&b.time_step));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    /// Consecutive groups of records sharing a `time_step`.
    pub fn timesteps(&self) -> impl Iterator<Item = &[TrajectoryRecord]> + '_ {
        self.records.chunk_by(|a, b| a.time_step == b.time_step)
    }
}

/// Load a trace from a CSV file.
pub fn load_trace_csv(path: &Path) -> ModelResult<Trace> {
    let file = std::fs::File::open(path).map_err(ModelError::Io)?;
    load_trace_reader(file)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
pub fn load_trace_reader<R: Read>(reader: R) -> ModelResult<Trace> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<TrajectoryRecord>() {
        let r = result.map_err(|e| ModelError::Parse(e.to_string()))?;
        if !(r.x.is_finite() && r.y.is_finite() && r.time_step.is_finite()) {
            return Err(ModelError::Parse(format!(
                "non-finite observation for {} at time {}",
                r.agent_id, r.time_step
            )));
        }
        records.push(r);
    }
    Ok(Trace::new(records))
}
