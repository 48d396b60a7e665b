//! The pivotal struct to read an input file and run the described system.
use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use crate::{
    errors::{MdError, Result},
    readers::{input_file::commands::Command, simulation_context::SimulationContext},
    simulation::RunReport,
};

/// [`System`] is the basic API for running a simulation described by an
/// input file.
///
/// [`System::read`] collects the commands of the input file into a
/// [`SimulationContext`], and [`System::run`] builds the simulation from it
/// and runs it to completion.
///
/// # Examples
///
/// ```no_run
/// use cellmd::system::System;
///
/// let report = System::new(String::from("input.md")).read()?.run()?;
/// println!("final total energy {}", report.total_energy);
/// # Ok::<(), cellmd::errors::MdError>(())
/// ```
pub struct System {
    /// the path to the input file which contains the commands describing the run
    infile: String,
    ctx: SimulationContext,
}

impl System {
    /// The constructor for the System which takes in the path to the input file
    pub fn new(infile: String) -> Self {
        let ctx = SimulationContext::default();
        Self { infile, ctx }
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.ctx
    }

    /// Reads the input file and collects all the commands it contains.
    pub fn read(&mut self) -> Result<&mut Self> {
        let file = File::open(&self.infile).map_err(|e| MdError::InputFileError {
            path: self.infile.clone(),
            source: e,
        })?;
        self.read_from(BufReader::new(file))
    }

    /// Same as [`System::read`], from any buffered reader.
    pub fn read_from(&mut self, reader: impl BufRead) -> Result<&mut Self> {
        for (line_num, line) in reader.lines().enumerate() {
            let line_num = line_num + 1;
            let line = line.map_err(|e| MdError::DataFileError {
                path: self.infile.clone(),
                line: line_num,
                source: e,
            })?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Considering only the part of the line that is before the commented part.
            let uncommented = line
                .split_once('#')
                .map(|(before, _)| before)
                .unwrap_or(line)
                .trim();

            let line_split: Vec<&str> = uncommented.split_whitespace().collect();
            let command = line_split[0];
            let args = &line_split[1..];

            match Command::from_str(command) {
                Some(cmd) => cmd.run(args, line_num, &mut self.ctx)?,
                None => {
                    return Err(MdError::UnknownCommand {
                        command: command.to_string(),
                        line: line_num,
                    })
                }
            }
        }
        Ok(self)
    }

    /// Builds the simulation from the collected context and runs it with the
    /// configured seed.
    pub fn run(&mut self) -> Result<RunReport> {
        let ctx = std::mem::take(&mut self.ctx);
        let mut simulation = ctx.into_simulation()?;
        simulation.run_seeded()
    }
}
