use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdError {
    // File I/O Errors
    #[error("Failed to open input file '{path}': {source}")]
    InputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} in file '{path}': {source}")]
    DataFileError {
        path: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write record to '{path}': {source}")]
    RecordError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing Errors
    #[error("Invalid command {command} found line: {line}")]
    UnknownCommand { command: String, line: usize },

    #[error("Missing argument on line {line}")]
    MissingArgument { line: usize },

    #[error("Error parsing floating number from string {string}: {source}")]
    FloatParseError {
        string: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Error parsing integer number from string {string}: {source}")]
    IntParseError {
        string: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Negative value {value} not allowed on line: {line}")]
    NegativeValue { value: i64, line: usize },

    #[error("Invalid argument: {string} at line: {line}")]
    InvalidArgument { string: String, line: usize },

    // Configuration errors
    #[error("No particles defined for the simulation")]
    NoParticles,

    #[error("All particles are fixed, velocities can not be seeded")]
    NoMobileParticles,

    #[error("Cutoff {cutoff} exceeds the box extent {extent} along axis {axis}")]
    CutoffExceedsBox { axis: usize, extent: f64, cutoff: f64 },

    #[error("Cutoff radius must be positive and finite, got {cutoff}")]
    InvalidCutoff { cutoff: f64 },

    #[error("Box extent along axis {axis} must be positive and finite, got {extent}")]
    InvalidVolume { axis: usize, extent: f64 },

    #[error("Temperature must be non-negative and finite, got {temperature}")]
    InvalidTemperature { temperature: f64 },

    #[error("Record interval must be at least 1")]
    InvalidRecordInterval,

    // Measurement conditions
    #[error("No particles match the measured group {id}")]
    NoMatchingParticles { id: u32 },
}

pub type Result<T> = std::result::Result<T, MdError>;
