//! Deployment serialization for the simulator.
//!
//! RSUs are written as stationary agents at `time_step = 0`, with ids
//! starting at the pipeline's `agent_id_base` so the link table can tell
//! them apart from traced vehicles:
//!
//! ```csv
//! time_step,agent_id,x,y
//! 0,200000,120.5,33.0
//! 0,200001,480.2,910.7
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use rsu_core::Deployment;

use crate::EvalResult;

#[derive(Serialize)]
struct DeploymentRecord {
    time_step: u32,
    agent_id:  u64,
    x:         f64,
    y:         f64,
}

/// Write `deployment` to the CSV file at `path`, replacing it.
pub fn write_deployment_csv(path: &Path, deployment: &Deployment, agent_id_base: u32) -> EvalResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_deployment(file, deployment, agent_id_base)
}

/// Like [`write_deployment_csv`] but accepts any `Write` sink.
pub fn write_deployment<W: Write>(writer: W, deployment: &Deployment, agent_id_base: u32) -> EvalResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    if deployment.is_empty() {
        // `serialize` emits the header with the first row; keep the schema
        // visible for an empty deployment too.
        w.write_record(["time_step", "agent_id", "x", "y"])?;
    }
    for (i, p) in deployment.iter().enumerate() {
        w.serialize(DeploymentRecord {
            time_step: 0,
            agent_id:  agent_id_base as u64 + i as u64,
            x:         p.x,
            y:         p.y,
        })?;
    }
    w.flush()?;
    Ok(())
}
