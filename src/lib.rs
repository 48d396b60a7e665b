//! Short-range Lennard-Jones molecular dynamics on a cell list.
//!
//! An input file, read by [`system::System`], describes the box, the
//! particles and the run. The engine itself is [`simulation::Simulation`].
extern crate nalgebra as na;

pub mod args_parser;
pub mod atoms;
pub mod config;
pub mod constants;
pub mod ensemble;
pub mod errors;
pub mod extensions;
pub mod lattice;
pub mod math;
pub mod measurement;
pub mod potentials;
pub mod readers;
pub mod simulation;
pub mod simulation_box;
pub mod system;
pub mod writers;
