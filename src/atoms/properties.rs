use na::Vector3;

use crate::atoms::new::Atoms;

impl Atoms {
    /// Kinetic energy per particle, `0.5 * Σ|v|² / N`, fixed particles
    /// included in both the sum and the count.
    pub fn kinetic_energy(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let v2: f64 = self
            .particles
            .iter()
            .map(|p| p.velocity.norm_squared())
            .sum();
        0.5 * v2 / self.n_atoms() as f64
    }

    /// Mean velocity over the particles that are not fully fixed, `None`
    /// when every particle is fixed.
    pub fn mobile_mean_velocity(&self) -> Option<Vector3<f64>> {
        let mut total = Vector3::zeros();
        let mut count = 0usize;
        for particle in self.particles.iter().filter(|p| !p.is_fixed()) {
            total += particle.velocity;
            count += 1;
        }
        (count > 0).then(|| total / count as f64)
    }

    pub fn total_acceleration(&self) -> Vector3<f64> {
        self.particles
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::particle::Particle;
    use approx::assert_relative_eq;

    #[test]
    fn kinetic_energy_is_per_particle() {
        let atoms = Atoms::new(vec![
            Particle::new(Vector3::zeros()).with_velocity(Vector3::new(1.0, 0.0, 0.0)),
            Particle::new(Vector3::zeros()).with_velocity(Vector3::new(0.0, 2.0, 0.0)),
            Particle::new(Vector3::zeros()).fixed(),
        ]);
        assert_relative_eq!(atoms.kinetic_energy(), 0.5 * 5.0 / 3.0);
    }

    #[test]
    fn mean_velocity_skips_fixed_particles() {
        let atoms = Atoms::new(vec![
            Particle::new(Vector3::zeros()).with_velocity(Vector3::new(1.0, 0.0, 0.0)),
            Particle::new(Vector3::zeros()).with_velocity(Vector3::new(3.0, 0.0, 0.0)),
            Particle::new(Vector3::zeros())
                .with_velocity(Vector3::new(100.0, 0.0, 0.0))
                .fixed(),
        ]);
        assert_relative_eq!(atoms.mobile_mean_velocity().unwrap(), Vector3::new(2.0, 0.0, 0.0));

        let all_fixed = Atoms::new(vec![Particle::new(Vector3::zeros()).fixed()]);
        assert!(all_fixed.mobile_mean_velocity().is_none());
    }
}
