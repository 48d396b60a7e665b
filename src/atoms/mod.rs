//! The particle arena and everything that operates on the whole set of
//! particles can be found here.
pub mod neighbour_list;
pub mod new;
pub mod particle;
pub mod properties;
pub mod velocities;
