//! Cubic lattice builders producing initial particle lists.
use na::{Matrix3, Matrix3xX, Vector3};

use crate::atoms::particle::{Constraint, Particle};

/// A block of `nx * ny * nz` unit cells filling `volume`, translated to
/// `origin`.
#[derive(Debug, Clone)]
pub struct Lattice {
    volume: Vector3<f64>,
    origin: Vector3<f64>,
    counts: [usize; 3],
    particles: Vec<Particle>,
}

fn sc_basis_frac() -> Matrix3xX<f64> {
    Matrix3xX::from_columns(&[Vector3::<f64>::zeros()])
}

fn fcc_basis_frac() -> Matrix3xX<f64> {
    let a1: Vector3<f64> = Vector3::new(0.0, 0.0, 0.0);
    let a2: Vector3<f64> = Vector3::new(0.5, 0.5, 0.0);
    let a3: Vector3<f64> = Vector3::new(0.0, 0.5, 0.5);
    let a4: Vector3<f64> = Vector3::new(0.5, 0.0, 0.5);

    Matrix3xX::from_columns(&[a1, a2, a3, a4])
}

impl Lattice {
    pub fn new(volume: Vector3<f64>, counts: [usize; 3], origin: Vector3<f64>) -> Self {
        Self {
            volume,
            origin,
            counts,
            particles: Vec::new(),
        }
    }

    /// Edge lengths of one unit cell
    pub fn constants(&self) -> Vector3<f64> {
        Vector3::new(
            self.volume[0] / self.counts[0] as f64,
            self.volume[1] / self.counts[1] as f64,
            self.volume[2] / self.counts[2] as f64,
        )
    }

    fn h_matrix(&self) -> Matrix3<f64> {
        Matrix3::from_diagonal(&self.constants())
    }

    fn generate_super_cell(&mut self, basis_frac: &Matrix3xX<f64>, template: &Particle) {
        let h = self.h_matrix();
        let [nx, ny, nz] = self.counts;
        self.particles.reserve(nx * ny * nz * basis_frac.ncols());

        for ix in 0..nx {
            for iy in 0..ny {
                for iz in 0..nz {
                    let cell_origin_frac = Vector3::new(ix as f64, iy as f64, iz as f64);
                    for b in basis_frac.column_iter() {
                        let frac = cell_origin_frac + b;
                        let mut particle = template.clone();
                        particle.position = h * frac + self.origin;
                        self.particles.push(particle);
                    }
                }
            }
        }
    }

    /// Adds one particle per unit cell.
    pub fn create_sc(&mut self, constraint: Constraint) -> &mut Self {
        let template = Particle::new(Vector3::zeros()).with_constraint(constraint);
        self.generate_super_cell(&sc_basis_frac(), &template);
        self
    }

    /// Adds four particles per unit cell, on the corners and face centres.
    pub fn create_fcc(&mut self, constraint: Constraint, initial_velocity: Vector3<f64>, group_id: u32) -> &mut Self {
        let template = Particle::new(Vector3::zeros())
            .with_velocity(initial_velocity)
            .with_constraint(constraint)
            .with_group(group_id);
        self.generate_super_cell(&fcc_basis_frac(), &template);
        self
    }

    /// Rotates the particles by `angle` radians in the XY plane, around the
    /// centre of the lattice volume.
    pub fn rotate_xy(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let center = self.volume / 2.0 + self.origin;

        for particle in self.particles.iter_mut() {
            let r = particle.position - center;
            let x = r[0] * c - r[1] * s;
            let y = r[0] * s + r[1] * c;
            particle.position = Vector3::new(x, y, r[2]) + center;
        }
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn into_particles(self) -> Vec<Particle> {
        self.particles
    }
}
