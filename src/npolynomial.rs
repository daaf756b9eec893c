//! A wrapper around [`nalgebra::DMatrix`] interpreting it as a polynomial.

use nalgebra::{DMatrix, DVector};
use std::fmt;

use crate::vector::Vector;

/// Wrapper around [`nalgebra::DMatrix`] interpreting it as a polynomial:
/// $p: \R \to \R^r $ where $r$ is the number of rows.
///
/// This means rows are the polynomials for each coordinate
/// and columns are the different powers' coefficents.
#[derive(Clone, PartialEq)]
pub struct Polynomial(pub DMatrix<f64>);

impl Polynomial {
    /// Get the polynomial's degree
    ///
    /// A polynomial without any coefficents is treated like a constant zero.
    pub fn degree(&self) -> usize {
        self.0.ncols().saturating_sub(1)
    }

    /// Number of coordinates the polynomial maps to
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    /// Evaluate `self` at position `x` and store the result into `out`.
    pub fn evaluate_to(&self, x: f64, out: &mut DVector<f64>) {
        out.fill(0.0);
        let ncols = self.0.ncols();
        if ncols == 0 {
            return;
        }
        for i in 0..ncols - 1 {
            let i = ncols - 1 - i;
            *out += self.0.column(i);
            *out *= x;
        }
        *out += self.0.column(0);
    }

    /// Evaluate `self` at position `x`.
    pub fn evaluate(&self, x: f64) -> Vector<f64> {
        let mut out = DVector::zeros(self.dim());
        self.evaluate_to(x, &mut out);
        Vector::new(out.iter().copied())
    }

    /// Calculate `self`'s derivative.
    pub fn derive(&self) -> Polynomial {
        let ncols = self.0.ncols();
        if ncols <= 1 {
            return Polynomial(DMatrix::zeros(self.dim(), 1));
        }
        let mut out = DMatrix::zeros(self.dim(), ncols - 1);
        let mut exponent = 1.0;
        for i in 1..ncols {
            out.set_column(i - 1, &(self.0.column(i) * exponent));
            exponent += 1.0;
        }
        Polynomial(out)
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.data.fmt(formatter)
    }
}
