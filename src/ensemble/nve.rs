use crate::atoms::new::Atoms;

/// Velocity-Verlet integration split around the force evaluation.
///
/// A full step is `first_half`, rebuild the cell list, recompute forces,
/// then `second_half`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityVerlet {
    pub dt: f64,
}

impl VelocityVerlet {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    /// Half kick with the current accelerations on the unconstrained axes,
    /// then a full drift of every particle.
    pub fn first_half(&self, atoms: &mut Atoms) {
        for particle in atoms.particles.iter_mut() {
            let acceleration = particle.acceleration;
            particle.kick(&acceleration, 0.5 * self.dt);
            particle.position += self.dt * particle.velocity;
        }
    }

    /// Half kick with the freshly computed accelerations. Returns the
    /// kinetic energy per particle.
    pub fn second_half(&self, atoms: &mut Atoms) -> f64 {
        for particle in atoms.particles.iter_mut() {
            let acceleration = particle.acceleration;
            particle.kick(&acceleration, 0.5 * self.dt);
        }
        atoms.kinetic_energy()
    }
}
