//! Time integration schemes.
pub mod nve;
