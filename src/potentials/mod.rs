pub mod lennard_jones;
pub mod potential;
