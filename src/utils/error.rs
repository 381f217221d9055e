use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Metadata error: {message}")]
    MetadataError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Package error: {message}")]
    PackageError { message: String },
}

pub type Result<T> = std::result::Result<T, SkillError>;
