use std::f64::consts::TAU;

use na::Vector3;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Draws a direction uniformly distributed on the unit sphere.
///
/// Uses cylindrical sampling: the azimuth is uniform in `[0, 2π)` and the
/// cosine of the polar angle is uniform in `[-1, 1]`, which by Archimedes'
/// hat-box theorem gives a uniform density over the sphere.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    let azimuth = Uniform::new(0.0_f64, TAU).sample(rng);
    let cos_theta = Uniform::new_inclusive(-1.0_f64, 1.0).sample(rng);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    Vector3::new(
        sin_theta * azimuth.cos(),
        sin_theta * azimuth.sin(),
        cos_theta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn unit_vectors_have_unit_norm() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_relative_eq!(random_unit_vector(&mut rng).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn unit_vectors_average_to_zero() {
        let mut rng = SmallRng::seed_from_u64(42);
        let n = 20_000;
        let mut sum = Vector3::zeros();
        for _ in 0..n {
            sum += random_unit_vector(&mut rng);
        }
        let mean = sum / n as f64;
        assert!(mean.norm() < 0.03, "mean direction {mean} is biased");
    }
}
