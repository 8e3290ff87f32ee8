//! Error types for listenmap.

use thiserror::Error;

use crate::models::DepartmentId;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("department {id} is listed under both {first} and {second}")]
    DuplicateDepartment {
        id: DepartmentId,
        first: String,
        second: String,
    },

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("JSON parse error: {0}")]
    Table(#[from] serde_json::Error),

    #[error("failed to load map asset: {0}")]
    AssetLoad(String),

    #[error("map document did not attach after {attempts} checks")]
    NotAttached { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, MapError>;
