//! Bernstein basis polynomials and the combinatorics behind them.

use nalgebra::DMatrix;
use num::{Float, NumCast};

use crate::error::{Error, Result};

/// Converts an index or count into a float.
pub(crate) fn usize_to_generic<K: Float>(n: usize) -> K {
    // Float types can represent any usize, possibly rounded
    <K as NumCast>::from(n).unwrap_or_else(K::max_value)
}

/// Computes `n!` iteratively.
///
/// Fails with [`Error::InvalidArgument`] for negative `n`.
pub fn factorial<K: Float>(n: i64) -> Result<K> {
    if n < 0 {
        return Err(Error::InvalidArgument {
            name: "n",
            value: n,
        });
    }
    let mut product = K::one();
    let mut factor = K::one();
    for _ in 1..n {
        factor = factor + K::one();
        product = product * factor;
    }
    Ok(product)
}

/// Computes the binomial coefficient `C(n, k)`.
///
/// Uses the multiplicative formula over the smaller of `k` and `n - k`, so intermediate values
/// stay close to the result instead of growing like `n!`.
/// `C(n, k)` is zero for `k > n`, negative inputs fail with [`Error::InvalidArgument`].
pub fn binomial<K: Float>(n: i64, k: i64) -> Result<K> {
    if n < 0 {
        return Err(Error::InvalidArgument {
            name: "n",
            value: n,
        });
    }
    if k < 0 {
        return Err(Error::InvalidArgument {
            name: "k",
            value: k,
        });
    }
    if k > n {
        return Ok(K::zero());
    }

    let k = k.min(n - k);
    let mut coefficient = K::one();
    let mut numerator = usize_to_generic::<K>(n as usize);
    let mut denominator = K::one();
    for _ in 0..k {
        coefficient = coefficient * numerator / denominator;
        numerator = numerator - K::one();
        denominator = denominator + K::one();
    }
    Ok(coefficient.round())
}

/// The `k`-th bernstein basis polynomial of degree `n`:
/// $b_{k,n}(x) = \binom{n}{k} x^k (1-x)^{n-k}$
///
/// The coefficients of the polynomial and of its derivative are computed once on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bernstein<K: Float = f64> {
    k: usize,
    n: usize,
    coefficient: K,

    // Coefficients of b_{k-1,n-1} and b_{k,n-1}, zero where the index leaves [0, n-1]
    lower: K,
    upper: K,
}

impl<K: Float> Bernstein<K> {
    /// Builds $b_{k,n}$, failing with [`Error::InvalidDegree`] if `k > n`.
    pub fn new(k: usize, n: usize) -> Result<Self> {
        if k > n {
            return Err(Error::InvalidDegree { k, n });
        }
        let (k_, n_) = (k as i64, n as i64);
        let (lower, upper) = if n == 0 {
            (K::zero(), K::zero())
        } else if k == 0 {
            (K::zero(), binomial(n_ - 1, k_)?)
        } else {
            (binomial(n_ - 1, k_ - 1)?, binomial(n_ - 1, k_)?)
        };
        Ok(Bernstein {
            k,
            n,
            coefficient: binomial(n_, k_)?,
            lower,
            upper,
        })
    }

    /// Index of the polynomial within its basis
    pub fn index(&self) -> usize {
        self.k
    }

    /// Degree of the basis
    pub fn degree(&self) -> usize {
        self.n
    }

    /// Evaluate the polynomial at `x`.
    ///
    /// `x` isn't restricted to `[0, 1]`.
    pub fn value(&self, x: K) -> K {
        term(self.coefficient, x, self.k, self.n - self.k)
    }

    /// Evaluate the polynomial's derivative at `x`.
    ///
    /// Uses $b'_{k,n} = n (b_{k-1,n-1} - b_{k,n-1})$ where polynomials with an index outside of
    /// `[0, n-1]` vanish.
    pub fn derivative(&self, x: K) -> K {
        if self.n == 0 {
            return K::zero();
        }
        let lower = if self.k == 0 {
            K::zero()
        } else {
            term(self.lower, x, self.k - 1, self.n - self.k)
        };
        let upper = if self.k == self.n {
            K::zero()
        } else {
            term(self.upper, x, self.k, self.n - 1 - self.k)
        };
        usize_to_generic::<K>(self.n) * (lower - upper)
    }
}

/// Computes `c * x^a * (1-x)^b`
fn term<K: Float>(c: K, x: K, a: usize, b: usize) -> K {
    c * x.powi(a as i32) * (K::one() - x).powi(b as i32)
}

/// Builds the complete basis of degree `n` i.e. $b_{0,n}, \dots, b_{n,n}$.
pub fn basis<K: Float>(n: usize) -> Result<Vec<Bernstein<K>>> {
    (0..=n).map(|k| Bernstein::new(k, n)).collect()
}

/// Computes the bernstein polynomial basis for a given number of control points in power form.
///
/// Row `i` holds the coefficients of $b_{i,n}$ with `n = size - 1`, column `j` belongs to $x^j$.
pub fn bernstein_polynomials(size: usize) -> DMatrix<f64> {
    // Each row is a different berstein polynomial
    let mut polynomials = DMatrix::zeros(size, size);
    if size == 0 {
        return polynomials;
    }

    // Fill matrix with pascal triangle of shape:
    //    ...
    //   1 3 3 1
    //     1 2 1
    //       1 1
    //         1
    for n in 0..size {
        let m = size - 1 - n;
        polynomials[(m, size - 1)] = 1.0;
        polynomials[(m, m)] = 1.0;
        for i in 1..n {
            let j = size - 1 - i;
            polynomials[(m, j)] = polynomials[(m + 1, j + 1)] + polynomials[(m + 1, j)];
        }
    }

    // Scale every row by the entries is the top row
    // (First and last row can be skipped, since their coeff is always 1)
    for i in 1..(size - 1) {
        let coeff = polynomials[(0, i)];
        let mut row = polynomials.row_mut(i);
        row *= coeff;
    }

    // Apply minus sign in checkerboard pattern
    for i in 0..size {
        for j in i..size {
            if (j + i) % 2 == 1 {
                polynomials[(i, j)] = -polynomials[(i, j)];
            }
        }
    }

    polynomials
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factorials() {
        assert_eq!(factorial::<f64>(0), Ok(1.0));
        assert_eq!(factorial::<f64>(1), Ok(1.0));
        assert_eq!(factorial::<f64>(5), Ok(120.0));
        assert!(matches!(
            factorial::<f64>(-1),
            Err(Error::InvalidArgument { value: -1, .. })
        ));
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial::<f64>(5, 5), Ok(1.0));
        assert_eq!(binomial::<f64>(5, 1), Ok(5.0));
        assert_eq!(binomial::<f64>(5, 3), Ok(10.0));
        assert_eq!(binomial::<f64>(3, 4), Ok(0.0));
        assert_eq!(binomial::<f64>(40, 20), Ok(137_846_528_820.0));
        assert!(binomial::<f64>(-2, 1).is_err());
        assert!(binomial::<f64>(2, -1).is_err());
    }

    #[test]
    fn binomial_symmetry() {
        for n in 0..30 {
            for k in 0..=n {
                assert_eq!(binomial::<f64>(n, k), binomial::<f64>(n, n - k));
            }
        }
    }

    #[test]
    fn invalid_degree() {
        assert_eq!(
            Bernstein::<f64>::new(3, 2),
            Err(Error::InvalidDegree { k: 3, n: 2 })
        );
    }

    #[test]
    fn values() {
        let b = Bernstein::new(2, 5).unwrap();
        assert_eq!(b.value(0.0), 0.0);
        assert_eq!(b.value(1.0), 0.0);
        assert_eq!(b.value(2.0), -40.0);
    }

    #[test]
    fn derivatives() {
        let b = Bernstein::new(2, 3).unwrap();
        assert_eq!(b.value(0.0), 0.0);
        assert_eq!(b.derivative(1.0), -3.0);

        assert_eq!(Bernstein::new(0, 0).unwrap().derivative(0.3), 0.0);
        assert_eq!(Bernstein::new(0, 1).unwrap().derivative(0.3), -1.0);
        assert_eq!(Bernstein::new(1, 1).unwrap().derivative(0.3), 1.0);
    }

    #[test]
    fn derivative_matches_difference_quotient() {
        let h = 1e-6;
        for n in 0..8 {
            for b in basis::<f64>(n).unwrap() {
                for x in [-0.5, 0.1, 0.5, 0.9, 1.7] {
                    let quotient = (b.value(x + h) - b.value(x - h)) / (2.0 * h);
                    assert_relative_eq!(b.derivative(x), quotient, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn partition_of_unity() {
        for n in 0..=15 {
            let basis = basis::<f64>(n).unwrap();
            for x in [-1.0, 0.0, 0.25, 0.5, 0.8, 1.0, 2.0] {
                let sum: f64 = basis.iter().map(|b| b.value(x)).sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn power_form() {
        #[rustfmt::skip]
        let cubic = DMatrix::from_row_slice(4, 4, &[
            1.0, -3.0,  3.0, -1.0,
            0.0,  3.0, -6.0,  3.0,
            0.0,  0.0,  3.0, -3.0,
            0.0,  0.0,  0.0,  1.0,
        ]);
        assert_eq!(bernstein_polynomials(4), cubic);
        assert_eq!(
            bernstein_polynomials(3),
            DMatrix::from_row_slice(3, 3, &[1.0, -2.0, 1.0, 0.0, 2.0, -2.0, 0.0, 0.0, 1.0])
        );
        assert_eq!(bernstein_polynomials(1), DMatrix::from_element(1, 1, 1.0));
        assert_eq!(bernstein_polynomials(0).len(), 0);
    }
}
