use thiserror::Error;

/// Top-level error type for the veer trajectory-error kernel.
#[derive(Debug, Error)]
pub enum VeerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Errors related to oracle test files.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("oracle file is missing the {0} line")]
    MissingLine(&'static str),

    #[error("invalid number {token:?} in the {line} line")]
    InvalidNumber {
        line: &'static str,
        token: String,
    },

    #[error("{path} path has {xs} x-coordinates but {ys} y-coordinates")]
    AxisMismatch {
        path: &'static str,
        xs: usize,
        ys: usize,
    },
}

/// Convenience type alias for results using [`VeerError`].
pub type Result<T> = std::result::Result<T, VeerError>;
