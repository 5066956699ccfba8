//! `tm-kernel` - Tiled, data-parallel f32 matrix multiplication.
//!
//! This crate provides:
//! - [`tiled_matmul`], computing C = A @ B over caller-owned row-major
//!   buffers in parallel tiles (32x32 by default)
//! - A `ComputeBackend` trait with a serial reference `CpuBackend` and the
//!   parallel `TiledBackend`
//! - `TileConfig` for tile shape and reduction lanes
//! - `MatmulDims` for operand sizes and checked validation
//!
//! The kernel trusts its inputs: buffer lengths are preconditions, checked
//! only in debug builds. Use `ComputeBackend::matmul` or
//! `ComputeBackend::matmul_checked_into` to get errors instead.

pub mod backend;
pub mod config;
pub mod cpu;
pub mod error;
pub mod shape;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use config::{TileConfig, DEFAULT_TILE};
pub use cpu::tiled::{matmul, tiled_matmul};
pub use cpu::{CpuBackend, TiledBackend};
pub use error::{KernelError, Result};
pub use shape::MatmulDims;
