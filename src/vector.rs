//! Immutable vectors of runtime dimension.
//!
//! All binary operations check that both operands share a dimension and report
//! [`Error::DimensionMismatch`] otherwise.

use std::cmp::Ordering;
use std::ops::{Deref, Mul, Neg};

use num::Float;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Planar and spatial vectors are stored inline
type Coords<K> = SmallVec<[K; 3]>;

/// An n-dimensional tuple of numbers.
///
/// Every operation returns a new vector, the coordinates are never changed in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<K: Float = f64>(Coords<K>);

impl<K: Float> Vector<K> {
    /// Creates a vector from an ordered sequence of coordinates.
    pub fn new<I: IntoIterator<Item = K>>(coords: I) -> Self {
        Vector(coords.into_iter().collect())
    }

    /// Creates a planar vector.
    pub fn xy(x: K, y: K) -> Self {
        Vector(SmallVec::from_slice(&[x, y]))
    }

    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Vector(SmallVec::from_elem(K::zero(), dim))
    }

    /// Number of coordinates
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Componentwise sum
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |x, y| x + y)
    }

    /// Componentwise difference
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |x, y| x - y)
    }

    /// Componentwise product
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |x, y| x * y)
    }

    /// Componentwise quotient
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |x, y| x / y)
    }

    /// Scales every coordinate by `s`.
    pub fn mul_scalar(&self, s: K) -> Self {
        Vector(self.0.iter().map(|&x| x * s).collect())
    }

    /// Divides every coordinate by `s`.
    pub fn div_scalar(&self, s: K) -> Self {
        Vector(self.0.iter().map(|&x| x / s).collect())
    }

    /// Scalar product
    pub fn dot(&self, rhs: &Self) -> Result<K> {
        self.check_dim(rhs)?;
        Ok(self
            .0
            .iter()
            .zip(rhs.0.iter())
            .fold(K::zero(), |sum, (&x, &y)| sum + x * y))
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> K {
        self.0
            .iter()
            .fold(K::zero(), |sum, &x| sum + x * x)
            .sqrt()
    }

    /// Euclidean distance between `self` and `other`.
    pub fn distance(&self, other: &Self) -> Result<K> {
        Ok(self.sub(other)?.magnitude())
    }

    /// Point reflection of `self` through `center`, i.e. `2 * center - self`.
    pub fn reflect_through(&self, center: &Self) -> Result<Self> {
        center.mul_scalar(K::one() + K::one()).sub(self)
    }

    /// Adds `a * x` to `self` in place.
    ///
    /// Only used to accumulate weighted sums whose operands were validated up front.
    pub(crate) fn axpy(&mut self, a: K, x: &Self) {
        debug_assert_eq!(self.dim(), x.dim());
        self.0
            .iter_mut()
            .zip(x.0.iter())
            .for_each(|(y, &x)| *y = *y + a * x);
    }

    fn check_dim(&self, rhs: &Self) -> Result<()> {
        if self.dim() != rhs.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                found: rhs.dim(),
            });
        }
        Ok(())
    }

    fn zip_with<F: Fn(K, K) -> K>(&self, rhs: &Self, f: F) -> Result<Self> {
        self.check_dim(rhs)?;
        Ok(Vector(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(&x, &y)| f(x, y))
                .collect(),
        ))
    }
}

impl<K: Float> Deref for Vector<K> {
    type Target = [K];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/* Compare points suitable for aabbs */
impl<K: Float> PartialOrd for Vector<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dim() != other.dim() {
            return None;
        }
        let mut ordering = None;
        for (x, y) in self.iter().zip(other.iter()) {
            match x.partial_cmp(y) {
                None => return None,
                Some(Ordering::Equal) => (),
                Some(next) => match ordering {
                    // One coordinate is less while another is greater
                    Some(old) if old != next => return None,
                    _ => ordering = Some(next),
                },
            }
        }
        Some(ordering.unwrap_or(Ordering::Equal))
    }
}

impl<K: Float> Neg for Vector<K> {
    type Output = Vector<K>;
    fn neg(self) -> Self::Output {
        Vector(self.0.into_iter().map(|x| -x).collect())
    }
}

impl<K: Float> Mul<K> for &Vector<K> {
    type Output = Vector<K>;
    fn mul(self, s: K) -> Self::Output {
        self.mul_scalar(s)
    }
}

/* Conversions */
impl<K: Float, const N: usize> From<[K; N]> for Vector<K> {
    fn from(coords: [K; N]) -> Self {
        Vector::new(coords)
    }
}
impl<K: Float> From<(K, K)> for Vector<K> {
    fn from(p: (K, K)) -> Self {
        Vector::xy(p.0, p.1)
    }
}
