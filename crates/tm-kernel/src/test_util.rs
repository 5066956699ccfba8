use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::Rng;

/// Row-major `rows x cols` matrix with entries in [-1, 1).
pub fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Vec<f32> {
    (0..rows * cols).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

/// Row-major `n x n` identity.
pub fn identity(n: usize) -> Vec<f32> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}

/// Element-wise comparison at single-precision tolerance.
pub fn assert_close(got: &[f32], expected: &[f32]) {
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected) {
        assert_relative_eq!(*g, *e, epsilon = 1e-4, max_relative = 1e-5);
    }
}
