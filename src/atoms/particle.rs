use na::Vector3;

/// Per-axis velocity constraint stored as a bitmask over X, Y and Z.
///
/// A set bit excludes that axis from velocity kicks. A particle with all
/// three bits set is fully fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constraint(u8);

impl Constraint {
    pub const NONE: Constraint = Constraint(0x0);
    pub const X: Constraint = Constraint(0x1);
    pub const Y: Constraint = Constraint(0x2);
    pub const Z: Constraint = Constraint(0x4);
    pub const ALL: Constraint = Constraint(0x7);

    pub fn from_bits(bits: u8) -> Self {
        Constraint(bits & Self::ALL.0)
    }

    pub fn is_constrained(&self, axis: usize) -> bool {
        (self.0 >> axis) & 0x1 == 1
    }

    pub fn is_free(&self, axis: usize) -> bool {
        !self.is_constrained(axis)
    }

    pub fn is_fixed(&self) -> bool {
        *self == Self::ALL
    }
}

impl std::ops::BitOr for Constraint {
    type Output = Constraint;

    fn bitor(self, rhs: Constraint) -> Constraint {
        Constraint(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Constraint {
    fn bitor_assign(&mut self, rhs: Constraint) {
        self.0 |= rhs.0;
    }
}

/// A point particle of unit mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    /// Recomputed from scratch by every force evaluation
    pub acceleration: Vector3<f64>,
    pub constraint: Constraint,
    /// Group tag used for measurements, 0 means unselected
    pub group_id: u32,
}

impl Particle {
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            constraint: Constraint::NONE,
            group_id: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn with_group(mut self, group_id: u32) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn fixed(self) -> Self {
        self.with_constraint(Constraint::ALL)
    }

    pub fn is_fixed(&self) -> bool {
        self.constraint.is_fixed()
    }

    /// `velocity += scale * vector`, restricted to the unconstrained axes
    pub fn kick(&mut self, vector: &Vector3<f64>, scale: f64) {
        for axis in 0..3 {
            if self.constraint.is_free(axis) {
                self.velocity[axis] += scale * vector[axis];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_bits() {
        let xz = Constraint::X | Constraint::Z;
        assert!(xz.is_constrained(0));
        assert!(xz.is_free(1));
        assert!(xz.is_constrained(2));
        assert!(!xz.is_fixed());

        assert!((xz | Constraint::Y).is_fixed());
        assert_eq!(Constraint::from_bits(0xff), Constraint::ALL);
    }

    #[test]
    fn kick_respects_constraint() {
        let mut particle = Particle::new(Vector3::zeros()).with_constraint(Constraint::Y);
        particle.kick(&Vector3::new(1.0, 1.0, 1.0), 0.5);
        assert_eq!(particle.velocity, Vector3::new(0.5, 0.0, 0.5));

        let mut fixed = Particle::new(Vector3::zeros()).fixed();
        fixed.kick(&Vector3::new(1.0, 1.0, 1.0), 0.5);
        assert_eq!(fixed.velocity, Vector3::zeros());
    }
}
