use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaybeError {
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Conversion error: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, MaybeError>;

// Helper conversions
impl From<serde_json::Error> for MaybeError {
    fn from(e: serde_json::Error) -> Self { Self::Decode(e.to_string()) }
}
impl From<rusqlite::types::FromSqlError> for MaybeError {
    fn from(e: rusqlite::types::FromSqlError) -> Self { Self::Conversion(e.to_string()) }
}
impl From<rusqlite::Error> for MaybeError {
    fn from(e: rusqlite::Error) -> Self { Self::Conversion(e.to_string()) }
}
