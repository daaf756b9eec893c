#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bernstein;
pub mod bezier;
pub mod bounding_box;
pub mod editor;
pub mod error;
pub mod npolynomial;
pub mod proximity;
pub mod sketch;
pub mod spline;
pub mod vector;

pub use crate::bernstein::Bernstein;
pub use crate::bezier::BezierCurve;
pub use crate::editor::ContinuityEditor;
pub use crate::error::{Error, Result};
pub use crate::proximity::{HitTestConfig, ProximityIndex};
pub use crate::sketch::{Mode, ModeEvent, Sketch};
pub use crate::spline::{PointRef, Spline};
pub use crate::vector::Vector;
