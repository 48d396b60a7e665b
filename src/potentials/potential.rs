use na::Vector3;

use crate::atoms::neighbour_list::CellList;
use crate::atoms::new::Atoms;
use crate::simulation_box::SimulationBox;

pub trait PairPotential: Send + Sync {
    /// Pair energy and the force acting on the second particle, given the
    /// minimum-image separation `rij = r_j - r_i` and its norm `r`.
    fn compute_potential(&self, rij: &Vector3<f64>, r: f64) -> (f64, Vector3<f64>);
    fn get_rcut(&self) -> f64;
}

pub trait PotentialManager {
    /// Recomputes every particle's acceleration from scratch and returns
    /// the potential energy per particle.
    fn compute_potential(&self, atoms: &mut Atoms, cells: &CellList, sim_box: &SimulationBox) -> f64;
}

/// Evaluates a pair potential over the pairs found by a cell list.
pub struct CellListManager<P: PairPotential> {
    pub potential: P,
}

impl<P: PairPotential> CellListManager<P> {
    pub fn new(potential: P) -> Self {
        Self { potential }
    }

    /// Per-particle accelerations (unit masses) and the summed pair energy,
    /// without touching the particles.
    fn evaluate(&self, atoms: &Atoms, cells: &CellList, sim_box: &SimulationBox) -> (Vec<Vector3<f64>>, f64) {
        let mut accelerations = vec![Vector3::zeros(); atoms.n_atoms()];
        let mut potential_energy = 0.0;

        cells.for_each_pair(
            &atoms.particles,
            sim_box,
            self.potential.get_rcut(),
            |i, j, rij, r| {
                let (uij, force_ij) = self.potential.compute_potential(rij, r);
                potential_energy += uij;
                accelerations[i] -= force_ij;
                accelerations[j] += force_ij;
            },
        );

        (accelerations, potential_energy)
    }
}

impl<P: PairPotential> PotentialManager for CellListManager<P> {
    fn compute_potential(&self, atoms: &mut Atoms, cells: &CellList, sim_box: &SimulationBox) -> f64 {
        if atoms.is_empty() {
            return 0.0;
        }
        let (accelerations, potential_energy) = self.evaluate(atoms, cells, sim_box);
        for (particle, acceleration) in atoms.particles.iter_mut().zip(accelerations) {
            particle.acceleration = acceleration;
        }
        potential_energy / atoms.n_atoms() as f64
    }
}
