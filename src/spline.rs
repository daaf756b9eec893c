//! Chains of bezier segments sharing their end points.

use log::debug;
use num::{Float, ToPrimitive};

use crate::bernstein::usize_to_generic;
use crate::bezier::BezierCurve;
use crate::error::{Error, Result};
use crate::vector::Vector;

/// Index pair addressing one control point of a spline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointRef {
    /// Index of the segment
    pub curve: usize,
    /// Index of the point within the segment
    pub point: usize,
}

impl PointRef {
    /// Shorthand constructor
    pub fn new(curve: usize, point: usize) -> Self {
        PointRef { curve, point }
    }
}

/// Number of control points in a finished segment
pub const CUBIC_POINTS: usize = 4;

/// An ordered sequence of bezier segments.
///
/// A segment appended after a finished cubic is *joined* to it: the cubic's last anchor and the
/// new segment's first anchor are the same logical point and are always written together.
///
/// The global parameter `t` runs from `0` to [`Spline::size`], segment `i` covers `(i, i + 1]`
/// (segment `0` also covers `t = 0`).
#[derive(Clone, Debug, PartialEq)]
pub struct Spline<K: Float = f64> {
    dimension: usize,
    curves: Vec<BezierCurve<K>>,

    // joints[i] is set if curves[i] starts at the last anchor of curves[i - 1]
    joints: Vec<bool>,
}

impl<K: Float> Default for Spline<K> {
    fn default() -> Self {
        Spline::new()
    }
}

impl<K: Float> Spline<K> {
    /// Creates an empty planar spline.
    pub fn new() -> Self {
        Spline::with_dimension(2)
    }

    /// Creates an empty spline whose points have `dimension` coordinates.
    pub fn with_dimension(dimension: usize) -> Self {
        Spline {
            dimension,
            curves: Vec::new(),
            joints: Vec::new(),
        }
    }

    /// Dimension of the spline's points
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of segments
    pub fn size(&self) -> usize {
        self.curves.len()
    }

    /// Checks whether the spline has no segments.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Sum of all segments' point counts.
    ///
    /// Shared anchors are counted once per segment.
    pub fn total_points(&self) -> usize {
        self.curves.iter().map(BezierCurve::len).sum()
    }

    /// The segments in order
    pub fn curves(&self) -> &[BezierCurve<K>] {
        &self.curves
    }

    /// The `i`-th segment
    pub fn curve(&self, i: usize) -> Result<&BezierCurve<K>> {
        self.curves.get(i).ok_or(Error::IndexOutOfRange {
            index: i,
            len: self.size(),
        })
    }

    /// Index of the last segment
    pub fn last_curve_index(&self) -> Option<usize> {
        self.size().checked_sub(1)
    }

    /// The last segment
    pub fn last_curve(&self) -> Option<&BezierCurve<K>> {
        self.curves.last()
    }

    /// Checks whether segment `i` starts at the last anchor of segment `i - 1`.
    pub fn is_joined(&self, i: usize) -> bool {
        self.joints.get(i).copied().unwrap_or(false)
    }

    /// Appends a new segment.
    ///
    /// The new segment's first point is the shared anchor itself, not the previous end handle.
    /// After a finished cubic the new segment starts with the cubic's last anchor, joined to it,
    /// followed by the reflection of the cubic's end handle as a straight continuation.
    /// After an unfinished segment the same two points are derived from its last two points,
    /// without a joint.
    pub fn add_curve(&mut self) -> Result<()> {
        let (seed, joined) = match self.curves.last() {
            None => (Vec::new(), false),
            Some(previous) => {
                let seed = match previous.points() {
                    [] => Vec::new(),
                    [anchor] => vec![anchor.clone()],
                    [.., handle, anchor] => vec![anchor.clone(), handle.reflect_through(anchor)?],
                };
                (seed, previous.len() == CUBIC_POINTS)
            }
        };
        let mut curve = BezierCurve::empty(self.dimension);
        for p in seed {
            curve.add_point(p)?;
        }
        self.curves.push(curve);
        self.joints.push(joined);
        debug!("Added segment {} (joined: {})", self.size() - 1, joined);
        Ok(())
    }

    /// Appends `point` to the last segment.
    pub fn add_point(&mut self, point: Vector<K>) -> Result<()> {
        self.curves
            .last_mut()
            .ok_or(Error::NoActiveSegment)?
            .add_point(point)
    }

    /// Reads one control point.
    pub fn get_point(&self, curve: usize, point: usize) -> Result<&Vector<K>> {
        self.curve(curve)?.point(point)
    }

    /// Overwrites one control point.
    ///
    /// Writing a shared anchor updates both segments holding it, nothing else is adjusted.
    pub fn set_point(&mut self, curve: usize, point: usize, p: Vector<K>) -> Result<()> {
        let len = self.size();
        let target = self
            .curves
            .get_mut(curve)
            .ok_or(Error::IndexOutOfRange { index: curve, len })?;
        let last = target.len().saturating_sub(1);
        target.set_point(point, p.clone())?;

        if let Some(twin) = self.twin(PointRef::new(curve, point), last) {
            self.curves[twin.curve].set_point(twin.point, p)?;
        }
        Ok(())
    }

    /// The other copy of a shared anchor, if `at` is one.
    fn twin(&self, at: PointRef, last: usize) -> Option<PointRef> {
        if at.point == 0 && at.curve > 0 && self.is_joined(at.curve) {
            let previous = at.curve - 1;
            return Some(PointRef::new(previous, self.curves[previous].len() - 1));
        }
        if at.point == last && self.is_joined(at.curve + 1) && !self.curves[at.curve + 1].is_empty()
        {
            return Some(PointRef::new(at.curve + 1, 0));
        }
        None
    }

    /// Removes the `i`-th segment and returns it.
    ///
    /// Neighbouring segments are not stitched together, the segment that followed the removed
    /// one simply loses its joint.
    pub fn remove_curve(&mut self, i: usize) -> Result<BezierCurve<K>> {
        if i >= self.size() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.size(),
            });
        }
        self.joints.remove(i);
        if let Some(joint) = self.joints.get_mut(i) {
            *joint = false;
        }
        debug!("Removed segment {}", i);
        Ok(self.curves.remove(i))
    }

    /// Moves every point of the spline by `delta`.
    pub fn translate(&mut self, delta: &Vector<K>) -> Result<()> {
        for curve in self.curves.iter_mut() {
            curve.translate(delta)?;
        }
        Ok(())
    }

    /// Maps the global parameter `t` to a segment index and the segment's local parameter.
    ///
    /// The segment index is `max(ceil(t) - 1, 0)` clamped to the existing segments, so an
    /// integer `t` selects the segment *ending* there with local parameter `1`.
    /// Returns `None` for an empty spline.
    pub fn segment_at(&self, t: K) -> Option<(usize, K)> {
        let last = self.last_curve_index()?;
        let index = if t >= usize_to_generic(self.size()) {
            last
        } else {
            (t.ceil() - K::one()).to_usize().unwrap_or(0).min(last)
        };
        Some((index, t - usize_to_generic(index)))
    }

    /// Get the point on the spline at global position `t`.
    pub fn value(&self, t: K) -> Result<Vector<K>> {
        let (index, local) = self.locate(t)?;
        Ok(self.curves[index].value(local))
    }

    /// Get the spline's tangent vector at global position `t`.
    pub fn derivative(&self, t: K) -> Result<Vector<K>> {
        let (index, local) = self.locate(t)?;
        Ok(self.curves[index].derivative(local))
    }

    /// Samples the spline at `0, step, 2 step, ...` below [`Spline::size`].
    ///
    /// Returns the parameters with their points, e.g. for drawing the curve's path.
    pub fn samples(&self, step: K) -> Vec<(K, Vector<K>)> {
        sample_parameters(self.size(), step)
            .filter_map(|t| Some((t, self.value(t).ok()?)))
            .collect()
    }

    fn locate(&self, t: K) -> Result<(usize, K)> {
        self.segment_at(t).ok_or(Error::IndexOutOfRange { index: 0, len: 0 })
    }
}

/// Global parameters `i * step` for all `i` with `i * step < size`.
pub(crate) fn sample_parameters<K: Float>(size: usize, step: K) -> impl Iterator<Item = K> {
    let end = usize_to_generic::<K>(size);
    let valid = step > K::zero();
    (0..)
        .map(move |i| usize_to_generic::<K>(i) * step)
        .take_while(move |&t| valid && t < end)
}
