use crate::atoms::particle::Particle;
use crate::config::SimulationConfig;
use crate::errors::Result;
use crate::simulation::Simulation;

/// Everything collected from an input file: the run parameters and the
/// initial particles, in the order they were declared.
#[derive(Debug, Clone, Default)]
pub struct SimulationContext {
    pub config: SimulationConfig,
    pub particles: Vec<Particle>,
}

impl SimulationContext {
    pub fn into_simulation(self) -> Result<Simulation> {
        Simulation::new(self.config, self.particles)
    }
}
