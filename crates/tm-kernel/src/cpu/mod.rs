pub mod reduce;
pub mod tiled;

use crate::backend::{debug_check_lengths, ComputeBackend};
use crate::shape::MatmulDims;

pub use tiled::TiledBackend;

/// Pure-Rust serial CPU backend.
///
/// A single thread walks i, j, k in order with one accumulator per output
/// element. Intended as the numeric reference for the tiled kernel.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn matmul_into(&self, a: &[f32], b: &[f32], c: &mut [f32], dims: MatmulDims) {
        debug_check_lengths(a, b, c, dims);
        let MatmulDims { m, p, q } = dims;
        for i in 0..m {
            for j in 0..q {
                let mut sum = 0.0f32;
                for k in 0..p {
                    sum += a[i * p + k] * b[k * q + j];
                }
                c[i * q + j] = sum;
            }
        }
    }
}
