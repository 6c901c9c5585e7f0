use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RadarError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            RadarError::Serialization(err.to_string())
        } else {
            RadarError::Deserialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RadarError>;
