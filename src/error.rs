use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("Malformed catalog row {row} ({name}): {reason}")]
    MalformedCatalogRow {
        row: usize,
        name: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MenuError {
    pub fn malformed(row: usize, name: &str, reason: impl Into<String>) -> Self {
        MenuError::MalformedCatalogRow {
            row,
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
