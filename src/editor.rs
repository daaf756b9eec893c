//! Interactive editing of a spline keeping its tangents continuous.
//!
//! Two handles next to a shared anchor are kept as point reflections of each other through
//! that anchor: `P1[i + 1] = 2 * P3[i] - P2[i]`. Moving an anchor drags both of its handles
//! along, moving a handle mirrors the opposite handle.

use log::{debug, trace};
use num::Float;

use crate::bezier::BezierCurve;
use crate::error::Result;
use crate::spline::{PointRef, Spline, CUBIC_POINTS};
use crate::vector::Vector;

/// Index of a segment's start handle
const START_HANDLE: usize = 1;
/// Index of a segment's end handle
const END_HANDLE: usize = 2;
/// Index of a segment's end anchor
const END_ANCHOR: usize = 3;

/// Owns a spline under construction or modification and the point currently being dragged.
///
/// The focus is stored as an index pair, it is cleared whenever the segment it points into
/// may have disappeared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContinuityEditor<K: Float = f64> {
    spline: Spline<K>,
    focus: Option<PointRef>,
}

impl<K: Float> ContinuityEditor<K> {
    /// Starts editing `spline` without any focused point.
    pub fn new(spline: Spline<K>) -> Self {
        ContinuityEditor {
            spline,
            focus: None,
        }
    }

    /// The edited spline
    pub fn spline(&self) -> &Spline<K> {
        &self.spline
    }

    /// Stops editing and hands back the spline.
    pub fn into_spline(self) -> Spline<K> {
        self.spline
    }

    /// The point currently being dragged
    pub fn focused_point(&self) -> Option<PointRef> {
        self.focus
    }

    /// Focuses an existing point.
    pub fn focus(&mut self, at: PointRef) -> Result<()> {
        self.spline.get_point(at.curve, at.point)?;
        self.focus = Some(at);
        Ok(())
    }

    /// Places the next point of the spline being drawn and focuses it.
    ///
    /// The very first point is placed twice, as start anchor and as its handle, so the handle
    /// can be dragged out of the anchor. Once a segment holds four points a new, joined segment
    /// is started, also when drawing resumes on a spline ending in a finished cubic.
    pub fn add_point(&mut self, point: Vector<K>) -> Result<PointRef> {
        if self.last_curve_finished() {
            self.spline.add_curve()?;
        }
        if self.spline.total_points() == 0 {
            self.spline.add_point(point.clone())?;
        }
        self.spline.add_point(point)?;

        if self.last_curve_finished() {
            self.spline.add_curve()?;
        }

        let curve = self.spline.size() - 1;
        let point = self.spline.curves()[curve].len().saturating_sub(1);
        let focus = PointRef::new(curve, point);
        self.focus = Some(focus);
        Ok(focus)
    }

    /// Checks whether there is no open segment to place points into.
    fn last_curve_finished(&self) -> bool {
        self.spline
            .last_curve()
            .map_or(true, |curve| curve.len() >= CUBIC_POINTS)
    }

    /// Moves the focused point to `position`, does nothing without focus.
    pub fn set_focused_point(&mut self, position: Vector<K>) -> Result<()> {
        match self.focus {
            Some(at) => self.move_point(at, position),
            None => Ok(()),
        }
    }

    /// Forgets the focused point.
    pub fn remove_focused_point(&mut self) {
        self.focus = None;
    }

    /// Moves one control point to `position` keeping the tangents continuous.
    ///
    /// - A start handle mirrors the previous segment's end handle through their shared anchor.
    /// - An end handle mirrors the next segment's start handle through their shared anchor.
    /// - An anchor takes both adjacent handles along by the same offset.
    pub fn move_point(&mut self, at: PointRef, position: Vector<K>) -> Result<()> {
        let PointRef { curve, point } = at;
        trace!("Moving point {:?}", at);
        match point {
            START_HANDLE => {
                if self.spline.is_joined(curve) {
                    let anchor = self.spline.get_point(curve - 1, END_ANCHOR)?;
                    let mirrored = position.reflect_through(anchor)?;
                    self.spline.set_point(curve - 1, END_HANDLE, mirrored)?;
                }
                self.spline.set_point(curve, point, position)
            }
            END_HANDLE => {
                let next = curve + 1;
                if self.spline.is_joined(next) && self.spline.curves()[next].len() > START_HANDLE
                {
                    let anchor = self.spline.get_point(curve, END_ANCHOR)?;
                    let mirrored = position.reflect_through(anchor)?;
                    self.spline.set_point(next, START_HANDLE, mirrored)?;
                }
                self.spline.set_point(curve, point, position)
            }
            _ => self.move_anchor(at, position),
        }
    }

    /// Moves an anchor (or any point beyond a cubic's handles) together with its handles.
    fn move_anchor(&mut self, at: PointRef, position: Vector<K>) -> Result<()> {
        let PointRef { curve, point } = at;
        let delta = position.sub(self.spline.get_point(curve, point)?)?;

        let mut handles = Vec::with_capacity(2);
        if point == 0 {
            handles.push(PointRef::new(curve, START_HANDLE));
            if self.spline.is_joined(curve) {
                handles.push(PointRef::new(curve - 1, END_HANDLE));
            }
        } else if point == END_ANCHOR {
            handles.push(PointRef::new(curve, END_HANDLE));
            if self.spline.is_joined(curve + 1) {
                handles.push(PointRef::new(curve + 1, START_HANDLE));
            }
        }

        // Writes the anchor's twin in a joined segment as well
        self.spline.set_point(curve, point, position)?;
        for handle in handles {
            if let Ok(p) = self.spline.get_point(handle.curve, handle.point) {
                let moved = p.add(&delta)?;
                self.spline.set_point(handle.curve, handle.point, moved)?;
            }
        }
        Ok(())
    }

    /// Moves the whole spline by `delta`.
    pub fn translate(&mut self, delta: &Vector<K>) -> Result<()> {
        self.spline.translate(delta)
    }

    /// Discards the segment that is still being drawn and clears the focus.
    ///
    /// Only a trailing segment with fewer than four points is removed, finished segments are
    /// never touched. Returns the removed segment.
    pub fn remove_unfinished_curve(&mut self) -> Result<Option<BezierCurve<K>>> {
        self.focus = None;
        let last = match self.spline.last_curve_index() {
            Some(last) if self.spline.curve(last)?.len() < CUBIC_POINTS => last,
            _ => return Ok(None),
        };
        debug!("Discarding unfinished segment {}", last);
        self.spline.remove_curve(last).map(Some)
    }
}
