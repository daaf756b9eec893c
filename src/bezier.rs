//! Bezier curves of arbitrary degree evaluated through their bernstein basis.

use nalgebra::DMatrix;
use num::Float;
use smallvec::SmallVec;

use crate::bernstein::{basis, bernstein_polynomials, Bernstein};
use crate::bounding_box::BoundingBox;
use crate::error::{Error, Result};
use crate::npolynomial::Polynomial;
use crate::vector::Vector;

/// Cubic curves and lower keep their points on the stack
type Points<K> = SmallVec<[Vector<K>; 4]>;
type Basis<K> = SmallVec<[Bernstein<K>; 4]>;

/// A bezier curve given by its control points.
///
/// All control points share the curve's dimension.
/// The bernstein basis matching the curve's degree is cached and rebuilt whenever the number of
/// points changes.
#[derive(Clone, Debug)]
pub struct BezierCurve<K: Float = f64> {
    dimension: usize,
    points: Points<K>,
    basis: Basis<K>,
}

impl<K: Float> BezierCurve<K> {
    /// Creates a curve without any points whose points will have `dimension` coordinates.
    pub fn empty(dimension: usize) -> Self {
        BezierCurve {
            dimension,
            points: SmallVec::new(),
            basis: SmallVec::new(),
        }
    }

    /// Creates a curve from its control points.
    ///
    /// The first point determines the curve's dimension, every other point has to match it.
    pub fn new<I: IntoIterator<Item = Vector<K>>>(points: I) -> Result<Self> {
        let points: Points<K> = points.into_iter().collect();
        let dimension = points.first().map_or(0, Vector::dim);
        if let Some(p) = points.iter().find(|p| p.dim() != dimension) {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                found: p.dim(),
            });
        }
        let mut curve = BezierCurve {
            dimension,
            points,
            basis: SmallVec::new(),
        };
        curve.rebuild_basis()?;
        Ok(curve)
    }

    /// Dimension of the curve's points
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the curve has no control points yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points.
    /// Returns `None` for a curve without points.
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// The control points in order
    pub fn points(&self) -> &[Vector<K>] {
        &self.points
    }

    /// The `i`-th control point
    pub fn point(&self, i: usize) -> Result<&Vector<K>> {
        self.points.get(i).ok_or(Error::IndexOutOfRange {
            index: i,
            len: self.len(),
        })
    }

    /// The last control point, if any
    pub fn last_point(&self) -> Option<&Vector<K>> {
        self.points.last()
    }

    /// Appends a control point raising the curve's degree by one.
    pub fn add_point(&mut self, point: Vector<K>) -> Result<()> {
        self.check_dim(&point)?;
        self.points.push(point);
        self.rebuild_basis()
    }

    /// Replaces the `i`-th control point.
    pub fn set_point(&mut self, i: usize, point: Vector<K>) -> Result<()> {
        self.check_dim(&point)?;
        let len = self.len();
        let slot = self
            .points
            .get_mut(i)
            .ok_or(Error::IndexOutOfRange { index: i, len })?;
        *slot = point;
        Ok(())
    }

    /// Moves every control point by `delta`.
    pub fn translate(&mut self, delta: &Vector<K>) -> Result<()> {
        self.check_dim(delta)?;
        for p in self.points.iter_mut() {
            *p = p.add(delta)?;
        }
        Ok(())
    }

    /// Get the point on the curve at position `t`.
    ///
    /// Computes $\sum_i P_i b_{i,n}(t)$.
    /// A curve without points evaluates to the zero vector.
    pub fn value(&self, t: K) -> Vector<K> {
        self.weighted_sum(|b| b.value(t))
    }

    /// Get the curve's tangent vector at position `t`.
    ///
    /// *The resulting vector is not normalized!*
    pub fn derivative(&self, t: K) -> Vector<K> {
        self.weighted_sum(|b| b.derivative(t))
    }

    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// This box will also contain the whole curve between `0` and `1`.
    pub fn bounding_box(&self) -> Option<BoundingBox<K>> {
        BoundingBox::from_iter(self.points.iter())
    }

    fn weighted_sum<F: Fn(&Bernstein<K>) -> K>(&self, weight: F) -> Vector<K> {
        let mut sum = Vector::zeros(self.dimension);
        for (p, b) in self.points.iter().zip(self.basis.iter()) {
            sum.axpy(weight(b), p);
        }
        sum
    }

    fn rebuild_basis(&mut self) -> Result<()> {
        self.basis = match self.degree() {
            Some(n) => basis(n)?.into_iter().collect(),
            None => SmallVec::new(),
        };
        Ok(())
    }

    fn check_dim(&self, point: &Vector<K>) -> Result<()> {
        if point.dim() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                found: point.dim(),
            });
        }
        Ok(())
    }
}

impl BezierCurve<f64> {
    /// Computes the curve's polynomial
    ///
    /// This polynomial evaluated between `0` and `1` yields the same points as its corrisponding
    /// bezier curve, but evaluating it only costs a single pass of horner's method.
    pub fn polynomial(&self) -> Polynomial {
        let points = DMatrix::from_fn(self.dimension, self.len(), |row, col| {
            self.points[col][row]
        });
        Polynomial(points * bernstein_polynomials(self.len()))
    }
}

impl<K: Float> PartialEq for BezierCurve<K> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.points == other.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic() -> BezierCurve {
        BezierCurve::new([
            Vector::xy(50.0, 0.0),
            Vector::xy(200.0, 33.0),
            Vector::xy(0.0, 66.0),
            Vector::xy(50.0, 100.0),
        ])
        .unwrap()
    }

    #[test]
    fn endpoints() {
        let curve = BezierCurve::new([
            Vector::xy(0.0, 0.0),
            Vector::xy(0.0, 1.0),
            Vector::xy(1.0, 1.0),
            Vector::xy(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(curve.value(0.0), Vector::xy(0.0, 0.0));
        assert_eq!(curve.value(1.0), Vector::xy(1.0, 0.0));
        assert_eq!(curve.value(0.5), Vector::xy(0.5, 0.75));
    }

    #[test]
    fn endpoint_interpolation() {
        for len in 1..8 {
            let points: Vec<_> = (0..len)
                .map(|i| Vector::xy(i as f64 * 1.5, (i * i) as f64 - 3.0))
                .collect();
            let curve = BezierCurve::new(points.clone()).unwrap();
            assert_eq!(curve.degree(), Some(len - 1));
            assert_eq!(curve.value(0.0), points[0]);
            assert_eq!(curve.value(1.0), points[len - 1]);
        }
    }

    #[test]
    fn degenerate() {
        let empty = BezierCurve::<f64>::empty(2);
        assert_eq!(empty.value(0.5), Vector::zeros(2));
        assert_eq!(empty.derivative(0.5), Vector::zeros(2));
        assert_eq!(empty.degree(), None);

        let constant = BezierCurve::new([Vector::xy(3.0, 4.0)]).unwrap();
        assert_eq!(constant.value(0.7), Vector::xy(3.0, 4.0));
        assert_eq!(constant.derivative(0.7), Vector::zeros(2));
    }

    #[test]
    fn derivative() {
        let curve = cubic();
        // B'(0) = 3 (P1 - P0), B'(1) = 3 (P3 - P2)
        assert_eq!(curve.derivative(0.0), Vector::xy(450.0, 99.0));
        assert_eq!(curve.derivative(1.0), Vector::xy(150.0, 102.0));
    }

    #[test]
    fn add_point_rebuilds_basis() {
        let mut curve = BezierCurve::empty(2);
        curve.add_point(Vector::xy(0.0, 0.0)).unwrap();
        curve.add_point(Vector::xy(2.0, 2.0)).unwrap();
        assert_eq!(curve.value(0.5), Vector::xy(1.0, 1.0));
        curve.add_point(Vector::xy(4.0, 0.0)).unwrap();
        assert_eq!(curve.value(0.5), Vector::xy(2.0, 1.0));
    }

    #[test]
    fn dimension_checks() {
        let mut curve = BezierCurve::empty(2);
        assert_eq!(
            curve.add_point(Vector::new([1.0, 2.0, 3.0])),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(BezierCurve::new([Vector::xy(0.0, 0.0), Vector::new([1.0])]).is_err());
    }

    #[test]
    fn indexing() {
        let mut curve = cubic();
        assert_eq!(curve.point(3), Ok(&Vector::xy(50.0, 100.0)));
        assert_eq!(
            curve.point(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(curve.set_point(4, Vector::xy(0.0, 0.0)).is_err());
        curve.set_point(0, Vector::xy(1.0, 1.0)).unwrap();
        assert_eq!(curve.value(0.0), Vector::xy(1.0, 1.0));
    }

    #[test]
    fn polynomial_matches_basis() {
        let curve = cubic();
        let polynomial = curve.polynomial();
        let derivative = polynomial.derive();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let (a, b) = (curve.value(t), polynomial.evaluate(t));
            let (da, db) = (curve.derivative(t), derivative.evaluate(t));
            for d in 0..2 {
                assert_relative_eq!(a[d], b[d], epsilon = 1e-9);
                assert_relative_eq!(da[d], db[d], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn translate() {
        let mut curve = cubic();
        curve.translate(&Vector::xy(-50.0, 0.0)).unwrap();
        assert_eq!(curve.value(0.0), Vector::xy(0.0, 0.0));
        assert_eq!(curve.value(1.0), Vector::xy(0.0, 100.0));
    }
}
