/// Default Lennard-Jones cutoff radius, in units of sigma
pub const DEFAULT_CUTOFF: f64 = 2.5;

/// Default integration time step, in reduced LJ time units
pub const DEFAULT_TIMESTEP: f64 = 0.005;

pub const DEFAULT_RECORD_INTERVAL: usize = 10;

pub const DEFAULT_STEPS: usize = 1000;

pub const DEFAULT_TEMPERATURE: f64 = 1.0;

pub const DEFAULT_OUTPUT_NAME: &str = "simulationOutput";

/// Element tag written in front of every position in the trajectory file
pub const XYZ_ELEMENT: &str = "C";
