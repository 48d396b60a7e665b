//! The simulation engine: velocity seeding, cell-list force evaluation and
//! velocity-Verlet stepping, with periodic measurement and recording.
use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::atoms::neighbour_list::CellList;
use crate::atoms::new::Atoms;
use crate::atoms::particle::Particle;
use crate::config::SimulationConfig;
use crate::ensemble::nve::VelocityVerlet;
use crate::errors::{MdError, Result};
use crate::measurement::{GroupSample, Measurements};
use crate::potentials::lennard_jones::LennardJones;
use crate::potentials::potential::{CellListManager, PotentialManager};
use crate::simulation_box::SimulationBox;
use crate::writers::data_log::DataRow;
use crate::writers::recorder::Recorder;

/// Outcome of [`Simulation::run`].
#[derive(Debug)]
pub struct RunReport {
    pub steps: usize,
    pub potential_energy: f64,
    pub kinetic_energy: f64,
    pub total_energy: f64,
    /// Sink failures, the physics kept running through all of them
    pub record_failures: Vec<MdError>,
}

pub struct Simulation {
    config: SimulationConfig,
    sim_box: SimulationBox,
    atoms: Atoms,
    cells: CellList,
    manager: CellListManager<LennardJones>,
    integrator: VelocityVerlet,
    measurements: Measurements,
    recorder: Recorder,
    current_time: usize,
    potential_energy: f64,
    kinetic_energy: f64,
}

impl Simulation {
    /// Validates the configuration and prepares the cell grid and the
    /// potential constants.
    pub fn new(config: SimulationConfig, particles: Vec<Particle>) -> Result<Self> {
        config.validate()?;
        let sim_box = config.simulation_box()?;
        let cells = CellList::new(&sim_box, config.cutoff)?;
        let manager = CellListManager::new(LennardJones::new(config.cutoff));
        let integrator = VelocityVerlet::new(config.timestep);
        let measurements = Measurements::new(config.measure_ids.clone());
        let recorder = Recorder::new(config.record, &config.output, config.record_interval);

        Ok(Self {
            config,
            sim_box,
            atoms: Atoms::new(particles),
            cells,
            manager,
            integrator,
            measurements,
            recorder,
            current_time: 0,
            potential_energy: 0.0,
            kinetic_energy: 0.0,
        })
    }

    pub fn add_particles(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.atoms.extend(particles);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    pub fn particles(&self) -> &[Particle] {
        &self.atoms.particles
    }

    pub fn cells(&self) -> &CellList {
        &self.cells
    }

    pub fn current_time(&self) -> usize {
        self.current_time
    }

    /// Potential energy per particle after the latest force evaluation
    pub fn potential_energy(&self) -> f64 {
        self.potential_energy
    }

    /// Kinetic energy per particle after the latest step
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    pub fn total_energy(&self) -> f64 {
        self.potential_energy + self.kinetic_energy
    }

    pub fn measurements(&self) -> &[GroupSample] {
        self.measurements.samples()
    }

    /// Seeds velocities, then builds the cell list and evaluates forces so
    /// that the initial state carries valid accelerations.
    pub fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.atoms.is_empty() {
            return Err(MdError::NoParticles);
        }
        self.current_time = 0;
        // every run starts its output files afresh
        self.recorder = Recorder::new(
            self.config.record,
            &self.config.output,
            self.config.record_interval,
        );

        self.atoms.start_velocities(self.config.temperature, rng)?;
        self.compute_forces();
        self.kinetic_energy = self.atoms.kinetic_energy();
        self.measurements.collect(&self.atoms);

        info!(
            "initialised {} particles ({} mobile) in a {}x{}x{} cell grid, E_pot = {}, E_kin = {}",
            self.atoms.n_atoms(),
            self.atoms.n_mobile(),
            self.cells.n_cells()[0],
            self.cells.n_cells()[1],
            self.cells.n_cells()[2],
            self.potential_energy,
            self.kinetic_energy,
        );
        debug!(
            "shifted-force constants: c1 = {}, c2 = {}",
            self.manager.potential.energy_shift(),
            self.manager.potential.force_shift()
        );
        Ok(())
    }

    fn compute_forces(&mut self) {
        self.cells.rebuild(&mut self.atoms, &self.sim_box);
        self.potential_energy = self
            .manager
            .compute_potential(&mut self.atoms, &self.cells, &self.sim_box);
    }

    /// Advances the system by one time step and records it if due. Returns
    /// the sink failures of this step.
    pub fn step(&mut self) -> Vec<MdError> {
        self.current_time += 1;
        debug!("Time: {}", self.current_time);

        self.integrator.first_half(&mut self.atoms);
        self.compute_forces();
        self.kinetic_energy = self.integrator.second_half(&mut self.atoms);

        self.measurements.collect(&self.atoms);
        self.record()
    }

    /// Writes the current state to the enabled sinks if the current time is
    /// a multiple of the record interval.
    pub fn record(&mut self) -> Vec<MdError> {
        let row = DataRow {
            elapsed_time: self.current_time as f64 * self.config.timestep,
            potential_energy: self.potential_energy,
            kinetic_energy: self.kinetic_energy,
            samples: self.measurements.samples(),
        };
        self.recorder.record(self.current_time, &self.atoms, &row)
    }

    /// Initialises the system, records the initial state and runs the
    /// configured number of steps.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RunReport> {
        info!(
            "running {} steps, dt = {}, cutoff = {}, T = {}",
            self.config.steps, self.config.timestep, self.config.cutoff, self.config.temperature
        );
        self.init(rng)?;

        let mut record_failures = self.record();
        for _ in 0..self.config.steps {
            record_failures.extend(self.step());
        }

        info!(
            "finished at step {}: E_pot = {}, E_kin = {}, E_tot = {}",
            self.current_time,
            self.potential_energy,
            self.kinetic_energy,
            self.total_energy()
        );

        Ok(RunReport {
            steps: self.config.steps,
            potential_energy: self.potential_energy,
            kinetic_energy: self.kinetic_energy,
            total_energy: self.total_energy(),
            record_failures,
        })
    }

    /// [`Simulation::run`] with a generator seeded from the configured seed,
    /// or from entropy when no seed is set.
    pub fn run_seeded(&mut self) -> Result<RunReport> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.run(&mut rng)
    }
}
