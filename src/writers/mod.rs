//! File sinks for trajectories and scalar observables.
pub mod data_log;
pub mod recorder;
pub mod xyz_traj;

use std::{
    fs::{File, OpenOptions},
    io::BufWriter,
    path::Path,
};

/// Opens a sink file: truncated on the first write of a run, appended to
/// afterwards.
fn open_sink(path: &Path, started: &mut bool) -> std::io::Result<BufWriter<File>> {
    let file = if *started {
        OpenOptions::new().append(true).create(true).open(path)?
    } else {
        File::create(path)?
    };
    *started = true;
    Ok(BufWriter::new(file))
}
