//! C ABI for the tiled matmul kernel.
//!
//! The functions mirror the kernel contract: no status, no error channel.
//! Buffer validity and non-overlap are the caller's obligations.

use std::os::raw::c_int;
use std::slice;

use tm_kernel::{tiled_matmul, MatmulDims, TileConfig, DEFAULT_TILE};

/// C dimensions are signed; a negative extent runs zero iterations.
fn dim(v: c_int) -> usize {
    usize::try_from(v).unwrap_or(0)
}

/// Tile from C arguments; non-positive edges fall back to the default.
fn tile_config(rows: c_int, cols: c_int) -> TileConfig {
    let edge = |v: c_int| match usize::try_from(v) {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_TILE,
    };
    TileConfig::new(edge(rows), edge(cols)).unwrap_or_default()
}

/// Borrow `len` floats at `ptr`. An operand with no elements is never read,
/// so its pointer may be null.
unsafe fn operand<'a>(ptr: *const f32, len: usize) -> &'a [f32] {
    if len == 0 {
        return &[];
    }
    debug_assert!(!ptr.is_null(), "null operand of {} elements", len);
    slice::from_raw_parts(ptr, len)
}

unsafe fn operand_mut<'a>(ptr: *mut f32, len: usize) -> &'a mut [f32] {
    if len == 0 {
        return &mut [];
    }
    debug_assert!(!ptr.is_null(), "null output of {} elements", len);
    slice::from_raw_parts_mut(ptr, len)
}

/// Returns the default tile edge (32).
#[no_mangle]
pub extern "C" fn tm_default_tile() -> c_int {
    DEFAULT_TILE as c_int
}

/// Compute C = A @ B with the default 32x32 tiling.
///
/// A is `m x p`, B is `p x q`, C is `m x q`, all row-major `float`.
/// Every element of C is overwritten.
///
/// # Safety
/// `a`, `b` and `c` must be valid for `m*p`, `p*q` and `m*q` floats
/// respectively, and `c` must not overlap `a` or `b`. Pointers are only
/// dereferenced when the product has output elements and the operand is
/// non-empty.
#[no_mangle]
pub unsafe extern "C" fn tm_matmul(
    a: *const f32,
    b: *const f32,
    c: *mut f32,
    m: c_int,
    p: c_int,
    q: c_int,
) {
    tm_matmul_tiled(a, b, c, m, p, q, DEFAULT_TILE as c_int, DEFAULT_TILE as c_int)
}

/// Like `tm_matmul`, with an explicit `tile_rows x tile_cols` tiling.
///
/// # Safety
/// Same requirements as `tm_matmul`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tm_matmul_tiled(
    a: *const f32,
    b: *const f32,
    c: *mut f32,
    m: c_int,
    p: c_int,
    q: c_int,
    tile_rows: c_int,
    tile_cols: c_int,
) {
    let dims = MatmulDims::new(dim(m), dim(p), dim(q));
    if dims.is_empty() {
        return;
    }
    let a = operand(a, dims.a_len());
    let b = operand(b, dims.b_len());
    let c = operand_mut(c, dims.c_len());
    tiled_matmul(a, b, c, dims, &tile_config(tile_rows, tile_cols));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_default_tile() {
        assert_eq!(tm_default_tile(), 32);
    }

    #[test]
    fn test_matmul_2x2() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [5.0f32, 6.0, 7.0, 8.0];
        let mut c = [0.0f32; 4];
        unsafe { tm_matmul(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 2, 2, 2) };
        assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_tiled_odd_tile() {
        // [1,2,3] @ [1;1;1] repeated over 3 rows
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let b = [1.0f32, 1.0, 1.0];
        let mut c = [0.0f32; 3];
        unsafe { tm_matmul_tiled(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 3, 3, 1, 2, 0) };
        assert_eq!(c, [6.0, 15.0, 24.0]);
    }

    #[test]
    fn test_matmul_tiled_oversized_tile() {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [5.0f32, 6.0, 7.0, 8.0];
        let mut c = [0.0f32; 4];
        let edge = c_int::MAX;
        unsafe { tm_matmul_tiled(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 2, 2, 2, edge, edge) };
        assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_negative_dims_write_nothing() {
        let a = [1.0f32; 4];
        let b = [1.0f32; 4];
        let mut c = [5.0f32; 4];
        unsafe { tm_matmul(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), -1, 2, 2) };
        assert_eq!(c, [5.0; 4]);
        unsafe { tm_matmul(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 2, 2, -7) };
        assert_eq!(c, [5.0; 4]);
    }

    #[test]
    fn test_unread_operands_may_be_null() {
        // m == 0: neither A nor B is read
        unsafe { tm_matmul(ptr::null(), ptr::null(), ptr::null_mut(), 0, 3, 4) };
        // q == 0: nothing is read or written
        unsafe { tm_matmul(ptr::null(), ptr::null(), ptr::null_mut(), 2, 3, 0) };
    }

    #[test]
    fn test_shared_dim_zero_writes_zeros() {
        let mut c = [8.0f32; 6];
        unsafe { tm_matmul(ptr::null(), ptr::null(), c.as_mut_ptr(), 2, 0, 3) };
        assert_eq!(c, [0.0; 6]);
    }
}
