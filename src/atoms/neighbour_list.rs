use std::collections::HashSet;

use na::Vector3;

use crate::atoms::new::Atoms;
use crate::atoms::particle::Particle;
use crate::errors::{MdError, Result};
use crate::simulation_box::SimulationBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset3 {
    pub dx: isize,
    pub dy: isize,
    pub dz: isize,
}

const fn offset(dx: isize, dy: isize, dz: isize) -> Offset3 {
    Offset3 { dx, dy, dz }
}

// 14 forward neighbour offsets for a 3D cell-linked list: the self cell and
// one offset out of every pair {d, -d} of the 26 surrounding cells.
pub const FORWARD_NEIGHBOUR_OFFSETS: [Offset3; 14] = [
    offset(0, 0, 0), // self cell
    offset(1, 0, 0),
    offset(0, 1, 0),
    offset(0, 0, 1),
    offset(1, 1, 0),
    offset(0, 1, 1),
    offset(1, 0, 1),
    offset(1, 1, 1),
    offset(-1, 1, 1),
    offset(-1, 1, 0),
    offset(-1, 1, -1),
    offset(1, 1, -1),
    offset(0, 1, -1),
    offset(-1, 0, 1),
];

/// Uniform grid of cells at least `cutoff` wide along every axis, holding
/// indices into the particle arena.
///
/// The grid geometry is fixed at construction; only the cell contents are
/// rebuilt every step.
#[derive(Debug, Clone)]
pub struct CellList {
    n_cells: [usize; 3],
    cell_size: Vector3<f64>,
    cells: Vec<Vec<usize>>,
    /// Unordered pairs of cells to visit, self pairs included, each once
    cell_pairs: Vec<(usize, usize)>,
}

impl CellList {
    pub fn new(sim_box: &SimulationBox, cutoff: f64) -> Result<Self> {
        let n_cells = Self::divide_into_cells(sim_box, cutoff)?;
        let cell_size = Vector3::new(
            sim_box.extents[0] / n_cells[0] as f64,
            sim_box.extents[1] / n_cells[1] as f64,
            sim_box.extents[2] / n_cells[2] as f64,
        );
        let ncell_total = n_cells[0] * n_cells[1] * n_cells[2];

        let mut cell_list = Self {
            n_cells,
            cell_size,
            cells: vec![Vec::new(); ncell_total],
            cell_pairs: Vec::new(),
        };
        cell_list.cell_pairs = cell_list.build_cell_pairs(sim_box);
        Ok(cell_list)
    }

    /// Number of cells per axis, `floor(extent / cutoff)`.
    pub fn divide_into_cells(sim_box: &SimulationBox, cutoff: f64) -> Result<[usize; 3]> {
        if !(cutoff.is_finite() && cutoff > 0.0) {
            return Err(MdError::InvalidCutoff { cutoff });
        }

        let mut ncell = [1usize; 3];
        for (axis, n) in ncell.iter_mut().enumerate() {
            let extent = sim_box.extents[axis];
            *n = (extent / cutoff).floor() as usize;
            if *n == 0 {
                return Err(MdError::CutoffExceedsBox { axis, extent, cutoff });
            }
        }
        Ok(ncell)
    }

    pub fn n_cells(&self) -> [usize; 3] {
        self.n_cells
    }

    pub fn cell_size(&self) -> Vector3<f64> {
        self.cell_size
    }

    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    pub fn cell_pairs(&self) -> &[(usize, usize)] {
        &self.cell_pairs
    }

    pub fn cell_index(&self, cx: usize, cy: usize, cz: usize) -> usize {
        (cz * self.n_cells[1] + cy) * self.n_cells[0] + cx
    }

    /// Grid coordinates of the cell holding `position`. Coordinates outside
    /// the grid (only possible on non-periodic axes) are clamped into the
    /// edge cells.
    pub fn cell_of(&self, position: &Vector3<f64>) -> [usize; 3] {
        let mut cell = [0usize; 3];
        for axis in 0..3 {
            let c = (position[axis] / self.cell_size[axis]).floor();
            let last = (self.n_cells[axis] - 1) as f64;
            // NaN falls through to 0 with the `as` cast
            cell[axis] = c.clamp(0.0, last) as usize;
        }
        cell
    }

    /// Wraps positions on periodic axes into the box and buckets every
    /// particle into exactly one cell. Previous contents are discarded.
    pub fn rebuild(&mut self, atoms: &mut Atoms, sim_box: &SimulationBox) {
        for particle in atoms.particles.iter_mut() {
            sim_box.apply_boundary_conditions_pos(&mut particle.position);
        }
        self.assign(&atoms.particles);
    }

    fn assign(&mut self, particles: &[Particle]) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        for (i, particle) in particles.iter().enumerate() {
            let [cx, cy, cz] = self.cell_of(&particle.position);
            let index = self.cell_index(cx, cy, cz);
            self.cells[index].push(i);
        }
    }

    /// Neighbour along one axis: wraps around on periodic axes, `None` past
    /// the edge of a non-periodic axis.
    fn neighbour_coordinate(&self, c: usize, d: isize, axis: usize, periodic: bool) -> Option<usize> {
        let n = self.n_cells[axis] as isize;
        let shifted = c as isize + d;
        if periodic {
            Some(shifted.rem_euclid(n) as usize)
        } else if (0..n).contains(&shifted) {
            Some(shifted as usize)
        } else {
            None
        }
    }

    fn build_cell_pairs(&self, sim_box: &SimulationBox) -> Vec<(usize, usize)> {
        let [nx, ny, nz] = self.n_cells;
        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(nx * ny * nz * 14);
        let mut pairs = Vec::with_capacity(nx * ny * nz * 14);

        for cz_i in 0..nz {
            for cy_i in 0..ny {
                for cx_i in 0..nx {
                    let current_cell = self.cell_index(cx_i, cy_i, cz_i);

                    for offset in FORWARD_NEIGHBOUR_OFFSETS.iter() {
                        let neighbour = (
                            self.neighbour_coordinate(cx_i, offset.dx, 0, sim_box.is_periodic(0)),
                            self.neighbour_coordinate(cy_i, offset.dy, 1, sim_box.is_periodic(1)),
                            self.neighbour_coordinate(cz_i, offset.dz, 2, sim_box.is_periodic(2)),
                        );
                        let (Some(cx_j), Some(cy_j), Some(cz_j)) = neighbour else {
                            continue;
                        };
                        let a_neighbour_cell = self.cell_index(cx_j, cy_j, cz_j);

                        // with fewer than three cells on an axis, several
                        // offsets land on the same cell
                        let key = (
                            current_cell.min(a_neighbour_cell),
                            current_cell.max(a_neighbour_cell),
                        );
                        if seen.insert(key) {
                            pairs.push((current_cell, a_neighbour_cell));
                        }
                    }
                }
            }
        }
        pairs
    }

    /// Calls `visit(i, j, rij, r)` once for every unordered pair of particles
    /// closer than `cutoff` under the minimum-image convention, with
    /// `rij = position[j] - position[i]`.
    ///
    /// The cell list must have been rebuilt against the current positions.
    pub fn for_each_pair<F>(&self, particles: &[Particle], sim_box: &SimulationBox, cutoff: f64, mut visit: F)
    where
        F: FnMut(usize, usize, &Vector3<f64>, f64),
    {
        for &(current_cell, a_neighbour_cell) in &self.cell_pairs {
            let current_cell_atoms = &self.cells[current_cell];
            let neighbour_cell_atoms = &self.cells[a_neighbour_cell];
            let same_cell = current_cell == a_neighbour_cell;

            for (a, &i) in current_cell_atoms.iter().enumerate() {
                let start = if same_cell { a + 1 } else { 0 };
                for &j in &neighbour_cell_atoms[start..] {
                    let rij = sim_box.displacement(&particles[i].position, &particles[j].position);
                    let r = rij.norm();
                    if r > cutoff {
                        continue;
                    }
                    visit(i, j, &rij, r);
                }
            }
        }
    }
}
