use log::error;

use crate::atoms::new::Atoms;
use crate::errors::MdError;
use crate::writers::data_log::{DataLog, DataRow};
use crate::writers::xyz_traj::XyzTraj;

/// Which sinks are written at recorded steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordState {
    pub xyz: bool,
    pub data: bool,
}

impl RecordState {
    pub const NONE: RecordState = RecordState { xyz: false, data: false };
    pub const ALL: RecordState = RecordState { xyz: true, data: true };
}

/// Drives both sinks every `interval` steps.
pub struct Recorder {
    interval: usize,
    xyz: Option<XyzTraj>,
    data: Option<DataLog>,
}

impl Recorder {
    /// Sinks are `<base_name>.xyz` and `<base_name>.txt`.
    pub fn new(state: RecordState, base_name: &str, interval: usize) -> Self {
        Self {
            interval,
            xyz: state.xyz.then(|| XyzTraj::new(format!("{base_name}.xyz"))),
            data: state.data.then(|| DataLog::new(format!("{base_name}.txt"))),
        }
    }

    pub fn should_record(&self, current_time: usize) -> bool {
        self.interval > 0 && current_time % self.interval == 0
    }

    /// Writes the enabled sinks if `current_time` is a recording step.
    /// A failing sink does not prevent the other one from being written;
    /// every failure is logged and returned.
    pub fn record(&mut self, current_time: usize, atoms: &Atoms, row: &DataRow) -> Vec<MdError> {
        let mut failures = Vec::new();
        if !self.should_record(current_time) {
            return failures;
        }

        if let Some(xyz) = &mut self.xyz {
            if let Err(source) = xyz.write_frame(atoms) {
                failures.push(MdError::RecordError {
                    path: xyz.path().display().to_string(),
                    source,
                });
            }
        }

        if let Some(data) = &mut self.data {
            if let Err(source) = data.write_step(row) {
                failures.push(MdError::RecordError {
                    path: data.path().display().to_string(),
                    source,
                });
            }
        }

        for failure in &failures {
            error!("at time step {current_time}: {failure}");
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::particle::Particle;
    use na::Vector3;

    #[test]
    fn records_on_multiples_of_the_interval() {
        let recorder = Recorder::new(RecordState::NONE, "unused", 10);
        assert!(recorder.should_record(0));
        assert!(!recorder.should_record(5));
        assert!(recorder.should_record(20));
    }

    #[test]
    fn unwritable_sink_is_reported() {
        let base = std::env::temp_dir()
            .join("cellmd-missing-directory")
            .join("nested")
            .join("out");
        let mut recorder = Recorder::new(RecordState::ALL, &base.display().to_string(), 1);

        let atoms = Atoms::new(vec![Particle::new(Vector3::zeros())]);
        let row = DataRow {
            elapsed_time: 0.0,
            potential_energy: 0.0,
            kinetic_energy: 0.0,
            samples: &[],
        };
        let failures = recorder.record(3, &atoms, &row);

        assert_eq!(failures.len(), 2);
        assert!(failures
            .iter()
            .all(|failure| matches!(failure, MdError::RecordError { .. })));
    }
}
