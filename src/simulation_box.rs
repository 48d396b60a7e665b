use na::Vector3;

use crate::errors::{MdError, Result};

/// Axis-aligned simulation box anchored at the origin, with a periodicity
/// flag per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    pub extents: Vector3<f64>,
    pub pbc: [bool; 3],
}

impl SimulationBox {
    pub fn new(extents: Vector3<f64>, pbc: [bool; 3]) -> Result<Self> {
        for axis in 0..3 {
            let extent = extents[axis];
            if !(extent.is_finite() && extent > 0.0) {
                return Err(MdError::InvalidVolume { axis, extent });
            }
        }
        Ok(Self { extents, pbc })
    }

    pub fn cubic(length: f64, pbc: [bool; 3]) -> Result<Self> {
        Self::new(Vector3::repeat(length), pbc)
    }

    pub fn is_periodic(&self, axis: usize) -> bool {
        self.pbc[axis]
    }

    /// Folds a position back into `[0, extent)` on every periodic axis.
    /// Non-periodic axes are left untouched.
    pub fn apply_boundary_conditions_pos(&self, position: &mut Vector3<f64>) {
        for i in 0..3 {
            if self.is_periodic(i) {
                let wrapped = position[i].rem_euclid(self.extents[i]);
                // rem_euclid of a tiny negative number can round up to the extent
                position[i] = if wrapped >= self.extents[i] { 0.0 } else { wrapped };
            }
        }
    }

    /// Minimum-image correction of a displacement vector: on each periodic
    /// axis a component longer than half the extent is shifted by one full
    /// extent towards zero.
    pub fn apply_boundary_conditions_dis(&self, rij: &mut Vector3<f64>) {
        for i in 0..3 {
            if self.is_periodic(i) {
                let half = 0.5 * self.extents[i];
                if rij[i] > half {
                    rij[i] -= self.extents[i];
                } else if rij[i] < -half {
                    rij[i] += self.extents[i];
                }
            }
        }
    }

    /// Displacement from `from` to `to` under the minimum-image convention.
    pub fn displacement(&self, from: &Vector3<f64>, to: &Vector3<f64>) -> Vector3<f64> {
        let mut rij = to - from;
        self.apply_boundary_conditions_dis(&mut rij);
        rij
    }
}
