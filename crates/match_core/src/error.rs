use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid value field: {0}")]
    InvalidValueField(String),

    #[error("Invalid dribble profile: {0}")]
    InvalidDribbleProfile(String),
}

impl SimError {
    /// Errors on optional external data that the engine replaces with
    /// built-in defaults instead of aborting the run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimError::Io(_) => true,
            SimError::Json(_) => true,
            SimError::InvalidValueField(_) => true,
            SimError::InvalidDribbleProfile(_) => true,
            SimError::Yaml(_) => false,
            SimError::Csv(_) => false,
            SimError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
