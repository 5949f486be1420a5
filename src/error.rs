use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Could not read tuning file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed tuning JSON")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("Invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
