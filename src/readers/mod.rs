//! Input file parsing into a [`simulation_context::SimulationContext`].
pub mod input_file;
pub mod simulation_context;
