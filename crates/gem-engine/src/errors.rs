use gem_kernel::GeometryError;
use gem_types::{TableError, UnknownGradeError};

/// Errors from the generator suite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GemError {
    #[error("non-finite value for {param}: {value}")]
    InvalidNumericInput { param: &'static str, value: f64 },

    #[error("unknown grade key: {key}")]
    UnknownGrade { key: String },

    #[error("grade table error: {0}")]
    Table(#[from] TableError),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

impl From<UnknownGradeError> for GemError {
    fn from(err: UnknownGradeError) -> Self {
        GemError::UnknownGrade { key: err.key }
    }
}
