use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Cannot read sett registry at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sett registry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sett {0} is registered more than once")]
    DuplicateSett(String),
}
