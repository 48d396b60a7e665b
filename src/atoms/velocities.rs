use rand::Rng;

use crate::atoms::new::Atoms;
use crate::errors::{MdError, Result};
use crate::math::random_unit_vector;

impl Atoms {
    /// Seeds velocities for the given reduced temperature and removes the
    /// drift of the mobile subsystem.
    pub fn start_velocities<R: Rng + ?Sized>(&mut self, temperature: f64, rng: &mut R) -> Result<()> {
        if self.is_empty() {
            return Err(MdError::NoParticles);
        }
        if self.n_mobile() == 0 {
            return Err(MdError::NoMobileParticles);
        }
        self.initialise_velocities(temperature, rng);
        self.remove_drift();
        Ok(())
    }

    /// Adds a random isotropic kick of magnitude `sqrt(3T(1 - 1/N))` to
    /// every particle that is not fully fixed.
    fn initialise_velocities<R: Rng + ?Sized>(&mut self, temperature: f64, rng: &mut R) {
        let n_atoms = self.n_atoms() as f64;
        let magnitude = (3.0 * temperature * (1.0 - 1.0 / n_atoms)).sqrt();

        for particle in self.particles.iter_mut().filter(|p| !p.is_fixed()) {
            let kick = random_unit_vector(rng) * magnitude;
            particle.kick(&kick, 1.0);
        }
    }

    /// Zeroes the momentum of the mobile subsystem axis by axis. The drift
    /// summed over every particle that is not fully fixed is taken out of
    /// the particles free along that axis.
    fn remove_drift(&mut self) {
        for axis in 0..3 {
            let mut total = 0.0;
            let mut count = 0usize;
            for particle in self.particles.iter().filter(|p| !p.is_fixed()) {
                total += particle.velocity[axis];
                if particle.constraint.is_free(axis) {
                    count += 1;
                }
            }
            if count == 0 {
                continue;
            }

            let mean = total / count as f64;
            for particle in self.particles.iter_mut() {
                if particle.constraint.is_free(axis) {
                    particle.velocity[axis] -= mean;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::particle::{Constraint, Particle};
    use approx::assert_abs_diff_eq;
    use na::Vector3;
    use rand::{rngs::SmallRng, SeedableRng};

    fn line_of_particles(n: usize) -> Vec<Particle> {
        (0..n)
            .map(|i| Particle::new(Vector3::new(i as f64, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn mobile_centre_of_mass_is_at_rest() {
        let mut particles = line_of_particles(50);
        particles[3] = particles[3].clone().fixed();
        particles[10] = particles[10].clone().with_velocity(Vector3::new(4.0, -1.0, 2.0));
        let mut atoms = Atoms::new(particles);

        let mut rng = SmallRng::seed_from_u64(1234);
        atoms.start_velocities(0.8, &mut rng).unwrap();

        let mean = atoms.mobile_mean_velocity().unwrap();
        assert_abs_diff_eq!(mean, Vector3::zeros(), epsilon = 1e-12);
        assert_eq!(atoms.particles[3].velocity, Vector3::zeros());
    }

    #[test]
    fn two_particles_move_apart_symmetrically() {
        let mut atoms = Atoms::new(line_of_particles(2));
        let mut rng = SmallRng::seed_from_u64(3);
        atoms.start_velocities(2.0, &mut rng).unwrap();

        let v0 = atoms.particles[0].velocity;
        let v1 = atoms.particles[1].velocity;
        assert_abs_diff_eq!(v0 + v1, Vector3::zeros(), epsilon = 1e-12);
        assert!(v0.norm() > 0.0);
    }

    #[test]
    fn zero_temperature_keeps_existing_velocities_minus_drift() {
        let mut atoms = Atoms::new(vec![
            Particle::new(Vector3::zeros()).with_velocity(Vector3::new(1.0, 0.0, 0.0)),
            Particle::new(Vector3::zeros()).with_velocity(Vector3::new(3.0, 0.0, 0.0)),
        ]);
        let mut rng = SmallRng::seed_from_u64(0);
        atoms.start_velocities(0.0, &mut rng).unwrap();

        assert_abs_diff_eq!(atoms.particles[0].velocity, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(atoms.particles[1].velocity, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn constrained_axes_are_never_seeded() {
        let mut particles = line_of_particles(20);
        for particle in particles.iter_mut().take(10) {
            particle.constraint = Constraint::Z;
        }
        let mut atoms = Atoms::new(particles);
        let mut rng = SmallRng::seed_from_u64(99);
        atoms.start_velocities(1.0, &mut rng).unwrap();

        for particle in atoms.particles.iter().take(10) {
            assert_eq!(particle.velocity[2], 0.0);
        }
        let z_mean: f64 = atoms.particles[10..].iter().map(|p| p.velocity[2]).sum::<f64>() / 10.0;
        assert_abs_diff_eq!(z_mean, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn constrained_axis_velocity_counts_towards_the_drift() {
        let mut atoms = Atoms::new(vec![
            Particle::new(Vector3::zeros())
                .with_velocity(Vector3::new(0.0, 0.0, 1.0))
                .with_constraint(Constraint::Z),
            Particle::new(Vector3::new(1.0, 0.0, 0.0)),
            Particle::new(Vector3::new(2.0, 0.0, 0.0)),
        ]);
        let mut rng = SmallRng::seed_from_u64(5);
        atoms.start_velocities(0.0, &mut rng).unwrap();

        assert_eq!(atoms.particles[0].velocity[2], 1.0);
        assert_abs_diff_eq!(atoms.particles[1].velocity, Vector3::new(0.0, 0.0, -0.5), epsilon = 1e-15);
        let mean = atoms.mobile_mean_velocity().unwrap();
        assert_abs_diff_eq!(mean, Vector3::zeros(), epsilon = 1e-15);
    }

    #[test]
    fn seeding_errors() {
        let mut rng = SmallRng::seed_from_u64(0);

        let mut empty = Atoms::default();
        assert!(matches!(empty.start_velocities(1.0, &mut rng), Err(MdError::NoParticles)));

        let mut fixed = Atoms::new(vec![Particle::new(Vector3::zeros()).fixed()]);
        assert!(matches!(fixed.start_velocities(1.0, &mut rng), Err(MdError::NoMobileParticles)));
    }
}
