use na::Vector3;

use crate::potentials::potential::PairPotential;

/// Truncated and force-shifted 12-6 Lennard-Jones potential in reduced
/// units (`epsilon = sigma = 1`).
///
/// Both the energy and the force go continuously to zero at the cutoff:
///
/// ```text
/// U(r) = 4 (r⁻¹² - r⁻⁶) + c1 + c2 (r - rc)
/// c1   = -4 (rc⁻¹² - rc⁻⁶)
/// c2   = 48 (rc⁻¹³ - 0.5 rc⁻⁷)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    rcut: f64,
    /// Energy shift, `-U(rc)`
    c1: f64,
    /// Force shift, `-U'(rc)`
    c2: f64,
}

impl LennardJones {
    pub fn new(rcut: f64) -> Self {
        let c1 = -4.0 * (rcut.powi(-12) - rcut.powi(-6));
        let c2 = 48.0 * (rcut.powi(-13) - 0.5 * rcut.powi(-7));
        Self { rcut, c1, c2 }
    }

    pub fn energy_shift(&self) -> f64 {
        self.c1
    }

    pub fn force_shift(&self) -> f64 {
        self.c2
    }

    /// Pair energy at distance `r`
    pub fn energy(&self, r: f64) -> f64 {
        let ir2 = 1.0 / (r * r);
        let ir6 = ir2 * ir2 * ir2;
        4.0 * ir6 * (ir6 - 1.0) + self.c1 + self.c2 * (r - self.rcut)
    }

    /// Coefficient `k` such that the force on the second particle of a pair
    /// is `k * rij`
    pub fn force_coefficient(&self, r: f64) -> f64 {
        let ir2 = 1.0 / (r * r);
        let ir6 = ir2 * ir2 * ir2;
        48.0 * ir2 * ir6 * (ir6 - 0.5) - self.c2 / r
    }
}

impl PairPotential for LennardJones {
    fn compute_potential(&self, rij: &Vector3<f64>, r: f64) -> (f64, Vector3<f64>) {
        let potential_energy = self.energy(r);
        let force = self.force_coefficient(r) * rij;
        (potential_energy, force)
    }

    fn get_rcut(&self) -> f64 {
        self.rcut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn shift_constants() {
        let lj = LennardJones::new(2.5);
        assert_relative_eq!(lj.energy_shift(), 0.016_316_891_136, epsilon = 1e-12);
        assert_relative_eq!(lj.force_shift(), -0.038_999_477_452_8, epsilon = 1e-12);
    }

    #[test]
    fn vanishes_continuously_at_the_cutoff() {
        let lj = LennardJones::new(2.5);
        let r = 2.5 - 1e-9;
        assert_abs_diff_eq!(lj.energy(r), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(lj.force_coefficient(r) * r, 0.0, epsilon = 1e-8);

        // the derivative of the energy matches the force near the cutoff
        let h = 1e-6;
        let r = 2.4;
        let derivative = (lj.energy(r + h) - lj.energy(r - h)) / (2.0 * h);
        assert_relative_eq!(-derivative, lj.force_coefficient(r) * r, epsilon = 1e-7);
    }

    #[test]
    fn force_is_along_the_separation() {
        let lj = LennardJones::new(3.0);
        let rij = Vector3::new(0.6, 0.8, 0.0);
        let (_, force) = lj.compute_potential(&rij, 1.0);
        assert_abs_diff_eq!(force.cross(&rij).norm(), 0.0, epsilon = 1e-12);
        // repulsive at r = 1, pushes the second particle away
        assert!(force.dot(&rij) > 0.0);
    }

    #[test]
    fn minimum_is_near_two_to_the_sixth() {
        let lj = LennardJones::new(1e6);
        let r_min = 2f64.powf(1.0 / 6.0);
        assert_abs_diff_eq!(lj.force_coefficient(r_min), 0.0, epsilon = 1e-12);
        assert_relative_eq!(lj.energy(r_min), -1.0, epsilon = 1e-9);
    }
}
