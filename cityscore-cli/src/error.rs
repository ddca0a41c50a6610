//! Error types emitted by the cityscore CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use cityscore_scorer::WeightsError;
use thiserror::Error;

/// Errors emitted by the cityscore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the score request failed.
    #[error("failed to open score request at {path:?}: {source}")]
    OpenScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The score request was not valid JSON for the expected shape.
    #[error("failed to parse score request at {path:?}: {source}")]
    ParseScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The query location is not a usable coordinate.
    #[error("query location ({lat}, {lon}) is not a valid coordinate")]
    InvalidLocation {
        /// Latitude in decimal degrees.
        lat: f64,
        /// Longitude in decimal degrees.
        lon: f64,
    },
    /// The request's category weights were rejected.
    #[error("invalid category weights: {0}")]
    InvalidWeights(#[from] WeightsError),
    /// Serialising the scores to JSON failed.
    #[error("failed to serialise scores: {0}")]
    SerialiseScores(#[source] serde_json::Error),
    /// Writing the scores to the output stream failed.
    #[error("failed to write scores: {0}")]
    WriteScoreOutput(#[source] std::io::Error),
}
