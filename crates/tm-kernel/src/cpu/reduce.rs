//! Reduction over the shared dimension.
//!
//! Each output element is the dot product of a row of A with a column of B.
//! The k range can be split into lanes; every lane accumulates its own
//! partial sum and the partials are added in lane order, so a given lane
//! count always yields the same bits.

/// Sum of `a_row[k] * b[(k0 + k) * q + j]` over the chunk.
#[inline]
fn partial_dot(a_chunk: &[f32], b: &[f32], k0: usize, j: usize, q: usize) -> f32 {
    let mut acc = 0.0f32;
    for (dk, &a) in a_chunk.iter().enumerate() {
        acc += a * b[(k0 + dk) * q + j];
    }
    acc
}

/// Dot product of `a_row` (length p) with column `j` of row-major B whose
/// row stride is `q`, reduced across `lanes` contiguous chunks of k.
///
/// `lanes` of 0 or 1 is a single sequential accumulator. Lanes beyond p
/// collapse to one element each.
#[inline]
pub fn dot_column(a_row: &[f32], b: &[f32], j: usize, q: usize, lanes: usize) -> f32 {
    let p = a_row.len();
    if lanes <= 1 || p <= 1 {
        return partial_dot(a_row, b, 0, j, q);
    }

    let chunk = p.div_ceil(lanes);
    a_row
        .chunks(chunk)
        .enumerate()
        .map(|(lane, a_chunk)| partial_dot(a_chunk, b, lane * chunk, j, q))
        .fold(0.0f32, |total, partial| total + partial)
}
