use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("buffer length mismatch for {operand}: expected {expected}, got {got}")]
    BufferLength {
        operand: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid tile {rows}x{cols}: both dimensions must be > 0")]
    InvalidTile { rows: usize, cols: usize },
    #[error("invalid reduction lane count {0}: must be > 0")]
    InvalidReductionLanes(usize),
}

pub type Result<T> = std::result::Result<T, KernelError>;
