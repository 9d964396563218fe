use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid symptom id: {0:?}")]
    InvalidSymptomId(String),
    #[error("invalid disease id: {0:?}")]
    InvalidDiseaseId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
