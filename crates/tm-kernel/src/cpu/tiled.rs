//! Tiled, data-parallel matmul kernel.
//!
//! The output is cut into bands of `tile.rows()` rows. Bands run in parallel
//! on the rayon pool, each worker owning a disjoint slice of C; inside a band
//! the columns are walked in tiles of `tile.cols()` so that the same rows of
//! A stay hot while a block of B columns is consumed.

use rayon::prelude::*;

use super::reduce::dot_column;
use crate::backend::{debug_check_lengths, ComputeBackend};
use crate::config::TileConfig;
use crate::shape::MatmulDims;

/// Compute C = A @ B with the given tiling.
///
/// Every element of C in `[0, m*q)` is written exactly once, with a fresh
/// accumulator per element. The call returns once all bands are done.
///
/// Results for different tile configurations agree within floating-point
/// tolerance. Changing only the tile shape keeps the summation order over k,
/// so it leaves the bits unchanged; changing the reduction lane count does
/// not.
///
/// # Panics
/// Buffers shorter than m*p, p*q or m*q are a precondition violation and
/// panic (debug assertion, or slice indexing in release builds).
pub fn tiled_matmul(a: &[f32], b: &[f32], c: &mut [f32], dims: MatmulDims, tile: &TileConfig) {
    debug_check_lengths(a, b, c, dims);

    let MatmulDims { m, p, q } = dims;
    if m == 0 || q == 0 {
        return;
    }

    // Tiles larger than the output behave as one tile spanning it.
    let band_rows = tile.rows().min(m);
    let tile_cols = tile.cols().min(q);
    let lanes = tile.reduction_lanes();

    c[..m * q]
        .par_chunks_mut(band_rows * q)
        .enumerate()
        .for_each(|(band, c_band)| {
            let i0 = band * band_rows;
            let rows = c_band.len() / q;
            for j0 in (0..q).step_by(tile_cols) {
                let j_end = (j0 + tile_cols).min(q);
                for di in 0..rows {
                    let i = i0 + di;
                    let a_row = &a[i * p..(i + 1) * p];
                    let c_row = &mut c_band[di * q..(di + 1) * q];
                    for (j, out) in c_row.iter_mut().enumerate().take(j_end).skip(j0) {
                        *out = dot_column(a_row, b, j, q, lanes);
                    }
                }
            }
        });
}

/// [`tiled_matmul`] with the default 32x32 tile.
pub fn matmul(a: &[f32], b: &[f32], c: &mut [f32], m: usize, p: usize, q: usize) {
    tiled_matmul(a, b, c, MatmulDims::new(m, p, q), &TileConfig::default());
}

/// Parallel tiled backend.
#[derive(Debug, Clone, Default)]
pub struct TiledBackend {
    config: TileConfig,
}

impl TiledBackend {
    pub fn new(config: TileConfig) -> Self {
        log::debug!(
            "tiled backend: {}x{} tiles, {} reduction lane(s), {} worker thread(s)",
            config.rows(),
            config.cols(),
            config.reduction_lanes(),
            rayon::current_num_threads()
        );
        TiledBackend { config }
    }

    pub fn config(&self) -> &TileConfig {
        &self.config
    }
}

impl ComputeBackend for TiledBackend {
    fn name(&self) -> &str {
        "tiled"
    }

    fn matmul_into(&self, a: &[f32], b: &[f32], c: &mut [f32], dims: MatmulDims) {
        tiled_matmul(a, b, c, dims, &self.config);
    }
}
