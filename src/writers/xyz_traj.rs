use std::{
    io::{Result, Write},
    path::{Path, PathBuf},
};

use crate::atoms::new::Atoms;
use crate::constants::XYZ_ELEMENT;
use crate::writers::open_sink;

/// XYZ trajectory: particle count, a blank comment line, then one
/// `C x y z` line per particle for every frame.
pub struct XyzTraj {
    path: PathBuf,
    started: bool,
}

impl XyzTraj {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            started: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_natoms(out: &mut impl Write, n_atoms: usize) -> Result<()> {
        writeln!(out, "{}", n_atoms)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn write_atoms_info(out: &mut impl Write, atoms: &Atoms) -> Result<()> {
        for particle in &atoms.particles {
            let position = particle.position;
            writeln!(
                out,
                "{} {} {} {}",
                XYZ_ELEMENT, position[0], position[1], position[2]
            )?;
        }
        Ok(())
    }

    pub fn write_frame(&mut self, atoms: &Atoms) -> Result<()> {
        let mut out = open_sink(&self.path, &mut self.started)?;
        Self::write_natoms(&mut out, atoms.n_atoms())?;
        Self::write_atoms_info(&mut out, atoms)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::particle::Particle;
    use na::Vector3;

    #[test]
    fn frame_layout() {
        let atoms = Atoms::new(vec![
            Particle::new(Vector3::new(0.0, 0.5, 1.0)),
            Particle::new(Vector3::new(1.25, -2.0, 3.0)),
        ]);
        let mut out = Vec::new();
        XyzTraj::write_natoms(&mut out, atoms.n_atoms()).unwrap();
        XyzTraj::write_atoms_info(&mut out, &atoms).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "2\n\nC 0 0.5 1\nC 1.25 -2 3\n");
    }

    #[test]
    fn first_frame_overwrites_then_appends() {
        let path = std::env::temp_dir().join(format!("cellmd-xyz-{}.xyz", std::process::id()));
        std::fs::write(&path, "stale content\n").unwrap();

        let atoms = Atoms::new(vec![Particle::new(Vector3::new(1.0, 2.0, 3.0))]);
        let mut traj = XyzTraj::new(&path);
        traj.write_frame(&atoms).unwrap();
        traj.write_frame(&atoms).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1\n\nC 1 2 3\n1\n\nC 1 2 3\n");
        std::fs::remove_file(&path).unwrap();
    }
}
