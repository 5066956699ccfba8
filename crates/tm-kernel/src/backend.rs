use std::fmt::Debug;

use crate::error::Result;
use crate::shape::MatmulDims;

/// Trait for pluggable matmul backends.
///
/// `matmul_into` is the raw kernel contract: it trusts its arguments the way
/// the directive-annotated kernel does. `matmul_checked_into` and `matmul`
/// validate buffer lengths first and report mismatches as errors.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu", "tiled").
    fn name(&self) -> &str;

    /// Matrix multiplication into a caller-owned buffer: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, p]
    /// - `b`: row-major data of shape [p, q]
    /// - `c`: row-major output of shape [m, q]; every one of its first
    ///   `m * q` elements is overwritten
    ///
    /// # Panics
    /// Buffers shorter than their shapes are a precondition violation. They
    /// trip a debug assertion, and in release builds panic on the first
    /// out-of-range index. Elements past the shaped prefix are ignored.
    fn matmul_into(&self, a: &[f32], b: &[f32], c: &mut [f32], dims: MatmulDims);

    /// Like [`matmul_into`](Self::matmul_into), but checks that every buffer
    /// has exactly the length its shape implies. On error C is untouched.
    fn matmul_checked_into(
        &self,
        a: &[f32],
        b: &[f32],
        c: &mut [f32],
        dims: MatmulDims,
    ) -> Result<()> {
        dims.validate(a, b, c)?;
        log::debug!("{}: matmul {}", self.name(), dims);
        self.matmul_into(a, b, c, dims);
        Ok(())
    }

    /// Allocating matrix multiplication.
    ///
    /// Returns row-major data of shape [m, q].
    fn matmul(&self, a: &[f32], b: &[f32], dims: MatmulDims) -> Result<Vec<f32>> {
        let mut c = vec![0.0f32; dims.c_len()];
        self.matmul_checked_into(a, b, &mut c, dims)?;
        Ok(c)
    }
}

/// Debug-build check of the kernel's length preconditions.
#[inline]
pub(crate) fn debug_check_lengths(a: &[f32], b: &[f32], c: &[f32], dims: MatmulDims) {
    debug_assert!(
        a.len() >= dims.a_len(),
        "a.len()={} but m*p={}",
        a.len(),
        dims.a_len()
    );
    debug_assert!(
        b.len() >= dims.b_len(),
        "b.len()={} but p*q={}",
        b.len(),
        dims.b_len()
    );
    debug_assert!(
        c.len() >= dims.c_len(),
        "c.len()={} but m*q={}",
        c.len(),
        dims.c_len()
    );
}
