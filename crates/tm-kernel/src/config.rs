use crate::error::{KernelError, Result};

/// Default tile edge, in output elements.
pub const DEFAULT_TILE: usize = 32;

/// Scheduling parameters for the tiled kernel.
///
/// Tiles group output iterations into `rows x cols` blocks; each band of
/// `rows` rows is one unit of parallel work. `reduction_lanes` splits the
/// shared dimension into that many contiguous chunks whose partial sums are
/// combined in order.
///
/// None of these change the mathematical result, only the order of
/// floating-point additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    rows: usize,
    cols: usize,
    reduction_lanes: usize,
}

impl TileConfig {
    /// Create a tile configuration with a single reduction lane.
    ///
    /// # Errors
    /// Returns [`KernelError::InvalidTile`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(KernelError::InvalidTile { rows, cols });
        }
        Ok(TileConfig {
            rows,
            cols,
            reduction_lanes: 1,
        })
    }

    /// Create an `n x n` tile configuration.
    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    /// Set the number of lanes the reduction over the shared dimension is
    /// split into.
    ///
    /// # Errors
    /// Returns [`KernelError::InvalidReductionLanes`] if `lanes` is zero.
    pub fn with_reduction_lanes(mut self, lanes: usize) -> Result<Self> {
        if lanes == 0 {
            return Err(KernelError::InvalidReductionLanes(lanes));
        }
        self.reduction_lanes = lanes;
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn reduction_lanes(&self) -> usize {
        self.reduction_lanes
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        TileConfig {
            rows: DEFAULT_TILE,
            cols: DEFAULT_TILE,
            reduction_lanes: 1,
        }
    }
}
