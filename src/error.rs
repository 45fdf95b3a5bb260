use thiserror::Error;

pub type GResult<T> = Result<T, GError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GError {
    #[error("index ({row}, {col}) out of range for matrix of shape ({rows}, {cols})")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("row index {row} out of range for matrix with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("too many values: matrix holds {capacity} elements")]
    LoaderOverflow { capacity: usize },
    #[error("dimensions of the matrices are not consistent in {op}: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
        op: &'static str,
    },
    #[error("source holds {got} elements, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

impl GError {
    /// Element, row and loader overflow failures all report an index past
    /// the end of the storage.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            GError::OutOfRange { .. } | GError::RowOutOfRange { .. } | GError::LoaderOverflow { .. }
        )
    }
}

impl From<&str> for GError {
    fn from(e: &str) -> Self {
        GError::Unexpected(e.to_string())
    }
}

impl From<String> for GError {
    fn from(e: String) -> Self {
        GError::Unexpected(e)
    }
}

impl From<GError> for String {
    fn from(e: GError) -> Self {
        format!("{}", e)
    }
}
