use std::{
    io::{Result, Write},
    path::{Path, PathBuf},
};

use crate::measurement::GroupSample;
use crate::writers::open_sink;

/// Scalar observables for one recorded step.
#[derive(Debug, Clone, Copy)]
pub struct DataRow<'a> {
    pub elapsed_time: f64,
    pub potential_energy: f64,
    pub kinetic_energy: f64,
    pub samples: &'a [GroupSample],
}

/// Whitespace separated data file, one line per recorded step:
/// `time potential kinetic total` followed by
/// `id count fx fy fz vx vy vz` for every watched group.
pub struct DataLog {
    path: PathBuf,
    started: bool,
}

impl DataLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            started: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_row(out: &mut impl Write, row: &DataRow) -> Result<()> {
        let total_energy = row.potential_energy + row.kinetic_energy;
        write!(
            out,
            "{} {} {} {}",
            row.elapsed_time, row.potential_energy, row.kinetic_energy, total_energy
        )?;

        for sample in row.samples {
            match sample {
                GroupSample::Measured(data) => write!(
                    out,
                    " {} {} {} {} {} {} {} {}",
                    data.id,
                    data.count,
                    data.force[0],
                    data.force[1],
                    data.force[2],
                    data.mean_velocity[0],
                    data.mean_velocity[1],
                    data.mean_velocity[2]
                )?,
                // an empty group has no mean velocity
                GroupSample::NoMatchingParticles { id } => write!(out, " {} 0 0 0 0 NA NA NA", id)?,
            }
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn write_step(&mut self, row: &DataRow) -> Result<()> {
        let mut out = open_sink(&self.path, &mut self.started)?;
        Self::write_row(&mut out, row)?;
        out.flush()
    }
}
