use crate::atoms::particle::Particle;

/// The particle arena. Particles are addressed by their index in
/// `particles`, which stays stable for the whole run.
#[derive(Debug, Clone, Default)]
pub struct Atoms {
    pub particles: Vec<Particle>,
}

impl Atoms {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn n_atoms(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn extend(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.particles.extend(particles);
    }

    /// Number of particles that are not fully fixed
    pub fn n_mobile(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_fixed()).count()
    }
}
