//! Hit-testing a cursor position against a spline's points and its path.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::npolynomial::Polynomial;
use crate::spline::{sample_parameters, PointRef, Spline};
use crate::vector::Vector;

/// Thresholds for picking points and curves.
///
/// Missing fields fall back to their defaults when deserialized, so a host application can
/// keep a partial table in its settings file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestConfig {
    /// Maximum distance between cursor and a control point
    pub point_radius: f64,
    /// Width of the drawn stroke
    pub curve_width: f64,
    /// Extra distance added to `curve_width` so thin strokes are easier to pick
    pub tolerance: f64,
    /// Parameter step used when sampling the spline
    pub sample_step: f64,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        HitTestConfig {
            point_radius: 5.0,
            curve_width: 5.0,
            tolerance: 2.0,
            sample_step: 0.01,
        }
    }
}

impl HitTestConfig {
    /// Maximum distance between cursor and the sampled path
    pub fn curve_threshold(&self) -> f64 {
        self.curve_width + self.tolerance
    }
}

/// Read only view on a spline answering hit queries.
pub struct ProximityIndex<'a> {
    spline: &'a Spline<f64>,
    config: &'a HitTestConfig,
}

impl<'a> ProximityIndex<'a> {
    /// Borrows `spline` for the duration of the queries.
    pub fn new(spline: &'a Spline<f64>, config: &'a HitTestConfig) -> Self {
        ProximityIndex { spline, config }
    }

    /// Finds the first control point within [`HitTestConfig::point_radius`] of `position`.
    ///
    /// Points are scanned segment by segment, the first match wins even if a later point is
    /// closer.
    pub fn point_at(&self, position: &Vector<f64>) -> Option<PointRef> {
        let radius = self.config.point_radius;
        for (ci, curve) in self.spline.curves().iter().enumerate() {
            for (pi, point) in curve.points().iter().enumerate() {
                if matches!(point.distance(position), Ok(d) if d <= radius) {
                    trace!("Point hit at {}:{}", ci, pi);
                    return Some(PointRef::new(ci, pi));
                }
            }
        }
        None
    }

    /// Finds the first sampled parameter `t` whose point lies within
    /// [`HitTestConfig::curve_threshold`] of `position`.
    ///
    /// Samples every [`HitTestConfig::sample_step`] over `[0, size)`. Segments whose control
    /// points' bounding box is too far away are skipped without evaluating them.
    pub fn curve_at(&self, position: &Vector<f64>) -> Option<f64> {
        let threshold = self.config.curve_threshold();
        let candidates: Vec<Option<Polynomial>> = self
            .spline
            .curves()
            .iter()
            .map(|curve| {
                let near = curve
                    .bounding_box()
                    .map_or(false, |bb| bb.inflate(threshold).contains(position));
                near.then(|| curve.polynomial())
            })
            .collect();
        if candidates.iter().all(Option::is_none) {
            return None;
        }

        let mut point = nalgebra::DVector::zeros(self.spline.dimension());
        for t in sample_parameters(self.spline.size(), self.config.sample_step) {
            let (index, local) = self.spline.segment_at(t)?;
            let polynomial = match &candidates[index] {
                Some(polynomial) => polynomial,
                None => continue,
            };
            polynomial.evaluate_to(local, &mut point);
            let distance = point
                .iter()
                .zip(position.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            if distance <= threshold {
                trace!("Curve hit at t = {}", t);
                return Some(t);
            }
        }
        None
    }
}
