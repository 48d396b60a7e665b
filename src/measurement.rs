//! Aggregate observables over groups of particles selected by group id.
use log::warn;
use na::Vector3;

use crate::atoms::new::Atoms;
use crate::errors::{MdError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMeasurement {
    pub id: u32,
    pub count: usize,
    /// Summed acceleration of the group, which is the summed force for unit
    /// masses
    pub force: Vector3<f64>,
    pub mean_velocity: Vector3<f64>,
}

/// Latest measurement of one watched group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupSample {
    Measured(GroupMeasurement),
    NoMatchingParticles { id: u32 },
}

impl GroupSample {
    pub fn id(&self) -> u32 {
        match self {
            GroupSample::Measured(measurement) => measurement.id,
            GroupSample::NoMatchingParticles { id } => *id,
        }
    }

    pub fn measurement(&self) -> Option<&GroupMeasurement> {
        match self {
            GroupSample::Measured(measurement) => Some(measurement),
            GroupSample::NoMatchingParticles { .. } => None,
        }
    }
}

/// Counts the particles of group `id` and sums their accelerations and
/// velocities.
pub fn measure_group(atoms: &Atoms, id: u32) -> Result<GroupMeasurement> {
    let mut count = 0usize;
    let mut force = Vector3::zeros();
    let mut velocity = Vector3::zeros();

    for particle in atoms.particles.iter().filter(|p| p.group_id == id) {
        count += 1;
        force += particle.acceleration;
        velocity += particle.velocity;
    }

    if count == 0 {
        return Err(MdError::NoMatchingParticles { id });
    }

    Ok(GroupMeasurement {
        id,
        count,
        force,
        mean_velocity: velocity / count as f64,
    })
}

/// The watched groups, in the order they were configured, with their
/// latest samples.
#[derive(Debug, Clone, Default)]
pub struct Measurements {
    ids: Vec<u32>,
    samples: Vec<GroupSample>,
}

impl Measurements {
    pub fn new(ids: Vec<u32>) -> Self {
        let samples = ids
            .iter()
            .map(|&id| GroupSample::NoMatchingParticles { id })
            .collect();
        Self { ids, samples }
    }

    pub fn add_id(&mut self, id: u32) {
        self.ids.push(id);
        self.samples.push(GroupSample::NoMatchingParticles { id });
    }

    pub fn samples(&self) -> &[GroupSample] {
        &self.samples
    }

    /// Recomputes every watched group from scratch.
    pub fn collect(&mut self, atoms: &Atoms) {
        self.samples.clear();
        for &id in &self.ids {
            let sample = match measure_group(atoms, id) {
                Ok(measurement) => GroupSample::Measured(measurement),
                Err(e) => {
                    warn!("{e}");
                    GroupSample::NoMatchingParticles { id }
                }
            };
            self.samples.push(sample);
        }
    }
}
