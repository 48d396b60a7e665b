//! Parsers for the individual commands of an input file.
use na::Vector3;

use crate::{
    atoms::particle::{Constraint, Particle},
    errors::{MdError, Result},
    extensions::{ArgsExt, IntToUnsigned},
    lattice::Lattice,
    readers::simulation_context::SimulationContext,
    writers::recorder::RecordState,
};

/// The commands understood in an input file, one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Volume,
    Periodic,
    Cutoff,
    TimeStep,
    RunSteps,
    Temperature,
    Seed,
    RecordEvery,
    Record,
    Output,
    Measure,
    Lattice,
    Atom,
}

impl Command {
    pub fn from_str(command: &str) -> Option<Self> {
        let command = match command {
            "volume" => Command::Volume,
            "periodic" => Command::Periodic,
            "cutoff" => Command::Cutoff,
            "timestep" => Command::TimeStep,
            "run" => Command::RunSteps,
            "temperature" => Command::Temperature,
            "seed" => Command::Seed,
            "record_every" => Command::RecordEvery,
            "record" => Command::Record,
            "output" => Command::Output,
            "measure" => Command::Measure,
            "lattice" => Command::Lattice,
            "atom" => Command::Atom,
            _ => return None,
        };
        Some(command)
    }

    /// Parses the arguments of the command found on `line` into `ctx`.
    pub fn run(&self, args: &[&str], line: usize, ctx: &mut SimulationContext) -> Result<()> {
        match self {
            Command::Volume => {
                ctx.config.volume = parse_vector_at(args, 0, line)?;
            }
            Command::Periodic => {
                let mut pbc = [false; 3];
                for &arg in args {
                    if arg == "none" {
                        pbc = [false; 3];
                        continue;
                    }
                    let axes = parse_axes(arg, line)?;
                    for (axis, periodic) in pbc.iter_mut().enumerate() {
                        *periodic |= axes.is_constrained(axis);
                    }
                }
                ctx.config.pbc = pbc;
            }
            Command::Cutoff => {
                ctx.config.cutoff = args.parse_float_at(0, line)?;
            }
            Command::TimeStep => {
                ctx.config.timestep = args.parse_float_at(0, line)?;
            }
            Command::RunSteps => {
                ctx.config.steps = args.parse_int_at(0, line)?.convert_to_usize(line)?;
                if args.len() > 1 {
                    ctx.config.temperature = args.parse_float_at(1, line)?;
                }
            }
            Command::Temperature => {
                ctx.config.temperature = args.parse_float_at(0, line)?;
            }
            Command::Seed => {
                let seed = args.parse_int_at(0, line)?.convert_to_usize(line)?;
                ctx.config.seed = Some(seed as u64);
            }
            Command::RecordEvery => {
                ctx.config.record_interval = args.parse_int_at(0, line)?.convert_to_usize(line)?;
            }
            Command::Record => {
                let mut state = RecordState::NONE;
                for &arg in args {
                    match arg {
                        "xyz" => state.xyz = true,
                        "data" => state.data = true,
                        "none" => state = RecordState::NONE,
                        _ => return Err(invalid_argument(arg, line)),
                    }
                }
                ctx.config.record = state;
            }
            Command::Output => {
                ctx.config.output = args.get_required(0, line)?.to_string();
            }
            Command::Measure => {
                for read_args in 0..args.len() {
                    let id = args.parse_int_at(read_args, line)?.convert_to_u32(line)?;
                    ctx.config.measure_ids.push(id);
                }
            }
            Command::Lattice => read_lattice(args, line, ctx)?,
            Command::Atom => read_atom(args, line, ctx)?,
        }
        Ok(())
    }
}

fn invalid_argument(arg: &str, line: usize) -> MdError {
    MdError::InvalidArgument {
        string: arg.to_string(),
        line,
    }
}

fn parse_vector_at(args: &[&str], index: usize, line: usize) -> Result<Vector3<f64>> {
    Ok(Vector3::new(
        args.parse_float_at(index, line)?,
        args.parse_float_at(index + 1, line)?,
        args.parse_float_at(index + 2, line)?,
    ))
}

/// Axis letters such as `xz` as a bitmask
fn parse_axes(arg: &str, line: usize) -> Result<Constraint> {
    let mut axes = Constraint::NONE;
    for letter in arg.chars() {
        axes |= match letter.to_ascii_lowercase() {
            'x' => Constraint::X,
            'y' => Constraint::Y,
            'z' => Constraint::Z,
            _ => return Err(invalid_argument(arg, line)),
        };
    }
    Ok(axes)
}

/// `lattice <sc|fcc> <lx> <ly> <lz> <nx> <ny> <nz> [keywords]`
///
/// Keywords: `origin x y z`, `fixed`, `constrain <axes>`,
/// `velocity vx vy vz`, `group id`, `rotate angle`.
fn read_lattice(args: &[&str], line: usize, ctx: &mut SimulationContext) -> Result<()> {
    let mut read_args = 0;
    let style = args.get_required(read_args, line)?;
    read_args += 1;
    if style != "sc" && style != "fcc" {
        return Err(invalid_argument(style, line));
    }

    let volume = parse_vector_at(args, read_args, line)?;
    read_args += 3;
    let mut counts = [1usize; 3];
    for count in counts.iter_mut() {
        *count = args.parse_int_at(read_args, line)?.convert_to_usize(line)?;
        if *count == 0 {
            return Err(invalid_argument(args[read_args], line));
        }
        read_args += 1;
    }

    let mut origin = Vector3::zeros();
    let mut constraint = Constraint::NONE;
    let mut velocity = Vector3::zeros();
    let mut group_id = 0;
    let mut rotation = None;

    while let Some(&keyword) = args.get(read_args) {
        read_args += 1;
        match keyword {
            "origin" => {
                origin = parse_vector_at(args, read_args, line)?;
                read_args += 3;
            }
            "fixed" => constraint = Constraint::ALL,
            "constrain" => {
                constraint |= parse_axes(args.get_required(read_args, line)?, line)?;
                read_args += 1;
            }
            "velocity" => {
                velocity = parse_vector_at(args, read_args, line)?;
                read_args += 3;
            }
            "group" => {
                group_id = args.parse_int_at(read_args, line)?.convert_to_u32(line)?;
                read_args += 1;
            }
            "rotate" => {
                rotation = Some(args.parse_float_at(read_args, line)?);
                read_args += 1;
            }
            _ => return Err(invalid_argument(keyword, line)),
        }
    }

    let mut lattice = Lattice::new(volume, counts, origin);
    if style == "fcc" {
        lattice.create_fcc(constraint, velocity, group_id);
    } else {
        lattice.create_sc(constraint);
    }
    if let Some(angle) = rotation {
        lattice.rotate_xy(angle);
    }

    let particles = lattice.into_particles().into_iter();
    if style == "fcc" {
        ctx.particles.extend(particles);
    } else {
        // simple cubic sites carry neither velocity nor group of their own
        ctx.particles
            .extend(particles.map(|p| p.with_velocity(velocity).with_group(group_id)));
    }
    Ok(())
}

/// `atom x y z [velocity vx vy vz] [fixed] [constrain <axes>] [group id]`
fn read_atom(args: &[&str], line: usize, ctx: &mut SimulationContext) -> Result<()> {
    let mut read_args = 0;
    let mut particle = Particle::new(parse_vector_at(args, read_args, line)?);
    read_args += 3;

    while let Some(&keyword) = args.get(read_args) {
        read_args += 1;
        match keyword {
            "velocity" => {
                particle.velocity = parse_vector_at(args, read_args, line)?;
                read_args += 3;
            }
            "fixed" => particle.constraint = Constraint::ALL,
            "constrain" => {
                particle.constraint |= parse_axes(args.get_required(read_args, line)?, line)?;
                read_args += 1;
            }
            "group" => {
                particle.group_id = args.parse_int_at(read_args, line)?.convert_to_u32(line)?;
                read_args += 1;
            }
            _ => return Err(invalid_argument(keyword, line)),
        }
    }

    ctx.particles.push(particle);
    Ok(())
}
