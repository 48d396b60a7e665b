use na::Vector3;

use crate::atoms::neighbour_list::CellList;
use crate::constants::{
    DEFAULT_CUTOFF, DEFAULT_OUTPUT_NAME, DEFAULT_RECORD_INTERVAL, DEFAULT_STEPS, DEFAULT_TEMPERATURE,
    DEFAULT_TIMESTEP,
};
use crate::errors::{MdError, Result};
use crate::simulation_box::SimulationBox;
use crate::writers::recorder::RecordState;

/// Run parameters of a [`crate::simulation::Simulation`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Box extents, the box spans `[0, volume)` on every axis
    pub volume: Vector3<f64>,
    pub pbc: [bool; 3],
    /// Potential cutoff radius
    pub cutoff: f64,
    pub timestep: f64,
    /// Number of steps executed by a run
    pub steps: usize,
    /// Reduced temperature used to seed velocities
    pub temperature: f64,
    pub record_interval: usize,
    pub record: RecordState,
    /// Base name of the `.xyz` and `.txt` output files
    pub output: String,
    /// Group ids measured at every step, in output order
    pub measure_ids: Vec<u32>,
    /// Seed of the velocity generator, entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            volume: Vector3::new(1.0, 1.0, 1.0),
            pbc: [false; 3],
            cutoff: DEFAULT_CUTOFF,
            timestep: DEFAULT_TIMESTEP,
            steps: DEFAULT_STEPS,
            temperature: DEFAULT_TEMPERATURE,
            record_interval: DEFAULT_RECORD_INTERVAL,
            record: RecordState::NONE,
            output: String::from(DEFAULT_OUTPUT_NAME),
            measure_ids: Vec::new(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn simulation_box(&self) -> Result<SimulationBox> {
        SimulationBox::new(self.volume, self.pbc)
    }

    /// Checks everything that can be checked before particles are known.
    pub fn validate(&self) -> Result<()> {
        let sim_box = self.simulation_box()?;
        CellList::divide_into_cells(&sim_box, self.cutoff)?;
        if !(self.temperature.is_finite() && self.temperature >= 0.0) {
            return Err(MdError::InvalidTemperature {
                temperature: self.temperature,
            });
        }
        if self.record_interval == 0 {
            return Err(MdError::InvalidRecordInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_for_a_large_enough_box() {
        let config = SimulationConfig {
            volume: Vector3::new(10.0, 10.0, 10.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.output, "simulationOutput");
        assert_eq!(config.record_interval, 10);
    }

    #[test]
    fn default_unit_box_is_smaller_than_the_cutoff() {
        assert!(matches!(
            SimulationConfig::default().validate(),
            Err(MdError::CutoffExceedsBox { axis: 0, .. })
        ));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let base = SimulationConfig {
            volume: Vector3::new(10.0, 10.0, 10.0),
            ..Default::default()
        };

        let config = SimulationConfig { record_interval: 0, ..base.clone() };
        assert!(matches!(config.validate(), Err(MdError::InvalidRecordInterval)));

        let config = SimulationConfig { temperature: -1.0, ..base.clone() };
        assert!(matches!(config.validate(), Err(MdError::InvalidTemperature { .. })));

        let config = SimulationConfig { cutoff: -2.0, ..base.clone() };
        assert!(matches!(config.validate(), Err(MdError::InvalidCutoff { .. })));

        let config = SimulationConfig { volume: Vector3::new(10.0, -1.0, 10.0), ..base };
        assert!(matches!(config.validate(), Err(MdError::InvalidVolume { axis: 1, .. })));
    }
}
