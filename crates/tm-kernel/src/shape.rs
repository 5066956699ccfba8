use crate::error::{KernelError, Result};
use std::fmt;

/// Dimensions of a product C = A @ B.
///
/// A is [m, p], B is [p, q] and C is [m, q], all row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatmulDims {
    pub m: usize,
    pub p: usize,
    pub q: usize,
}

impl MatmulDims {
    pub fn new(m: usize, p: usize, q: usize) -> Self {
        MatmulDims { m, p, q }
    }

    /// Number of elements in A (m * p).
    pub fn a_len(&self) -> usize {
        self.m * self.p
    }

    /// Number of elements in B (p * q).
    pub fn b_len(&self) -> usize {
        self.p * self.q
    }

    /// Number of elements in C (m * q).
    pub fn c_len(&self) -> usize {
        self.m * self.q
    }

    /// Returns true if the product has no output elements.
    pub fn is_empty(&self) -> bool {
        self.c_len() == 0
    }

    /// Checks that each buffer holds exactly as many elements as its shape.
    ///
    /// Operands are checked in the order A, B, C and the first mismatch is
    /// reported.
    pub fn validate(&self, a: &[f32], b: &[f32], c: &[f32]) -> Result<()> {
        let checks = [
            ("a", self.a_len(), a.len()),
            ("b", self.b_len(), b.len()),
            ("c", self.c_len(), c.len()),
        ];
        for (operand, expected, got) in checks {
            if expected != got {
                return Err(KernelError::BufferLength {
                    operand,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for MatmulDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}x{}] @ [{}x{}]", self.m, self.p, self.p, self.q)
    }
}

impl From<(usize, usize, usize)> for MatmulDims {
    fn from((m, p, q): (usize, usize, usize)) -> Self {
        MatmulDims::new(m, p, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        let d = MatmulDims::new(2, 3, 4);
        assert_eq!(d.a_len(), 6);
        assert_eq!(d.b_len(), 12);
        assert_eq!(d.c_len(), 8);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(MatmulDims::new(0, 3, 4).is_empty());
        assert!(MatmulDims::new(3, 5, 0).is_empty());
        // p == 0 still has outputs (all zero)
        assert!(!MatmulDims::new(2, 0, 2).is_empty());
    }

    #[test]
    fn test_validate_ok() {
        let d = MatmulDims::new(1, 2, 3);
        assert!(d.validate(&[0.0; 2], &[0.0; 6], &[0.0; 3]).is_ok());
    }

    #[test]
    fn test_validate_reports_first_mismatch() {
        let d = MatmulDims::new(2, 2, 2);
        let err = d.validate(&[0.0; 4], &[0.0; 3], &[0.0; 1]).unwrap_err();
        assert_eq!(
            err,
            KernelError::BufferLength {
                operand: "b",
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MatmulDims::new(2, 3, 4).to_string(), "[2x3] @ [3x4]");
    }

    #[test]
    fn test_from_tuple() {
        let d: MatmulDims = (4, 5, 6).into();
        assert_eq!(d, MatmulDims::new(4, 5, 6));
    }
}
