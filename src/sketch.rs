//! A drawing surface holding several splines and translating pointer gestures into edits.
//!
//! The surface is either in [`Mode::Draw`], where presses and releases place new points, or in
//! [`Mode::Edit`], where presses select a spline and drags move its points or the whole spline.
//! The mode is owned by the caller and passed into every gesture.

use log::debug;

use crate::editor::ContinuityEditor;
use crate::error::Result;
use crate::proximity::{HitTestConfig, ProximityIndex};
use crate::vector::Vector;

/// What pointer gestures do
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Presses and releases place new points
    #[default]
    Draw,
    /// Presses select, drags move
    Edit,
}

/// Requests to switch the [`Mode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeEvent {
    /// The pen tool was picked
    Pen,
    /// The move tool was picked
    Move,
}

impl Mode {
    /// The mode after `event`
    pub fn transition(self, event: ModeEvent) -> Mode {
        match event {
            ModeEvent::Pen => Mode::Draw,
            ModeEvent::Move => Mode::Edit,
        }
    }
}

/// What the pointer grabbed on press in edit mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Grab {
    /// A control point, which is now the spline's focus
    Point,
    /// The curve itself
    Curve,
}

/// Several splines being drawn and edited.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    splines: Vec<ContinuityEditor<f64>>,
    focused: Option<usize>,
    config: HitTestConfig,

    grab: Option<Grab>,
    last_position: Option<Vector<f64>>,
}

impl Sketch {
    /// Creates an empty sketch picking points and curves with `config`.
    pub fn new(config: HitTestConfig) -> Self {
        Sketch {
            config,
            ..Sketch::default()
        }
    }

    /// The splines in drawing order
    pub fn splines(&self) -> &[ContinuityEditor<f64>] {
        &self.splines
    }

    /// Index of the selected spline
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The selected spline
    pub fn focused_spline(&self) -> Option<&ContinuityEditor<f64>> {
        self.splines.get(self.focused?)
    }

    /// The hit test thresholds
    pub fn config(&self) -> &HitTestConfig {
        &self.config
    }

    /// Switches tools, dropping the current selection.
    pub fn change_mode(&mut self, mode: Mode, event: ModeEvent) -> Mode {
        self.release_focus();
        mode.transition(event)
    }

    /// Handles a pointer press at `position`.
    ///
    /// Draw mode starts a new spline unless one is being drawn and places a point.
    /// Edit mode selects the first spline with a point under the cursor, or failing that the
    /// first spline whose curve is under the cursor.
    pub fn pointer_down(&mut self, mode: Mode, position: Vector<f64>) -> Result<()> {
        match mode {
            Mode::Draw => {
                let index = match self.focused {
                    Some(index) => index,
                    None => {
                        self.splines.push(ContinuityEditor::default());
                        debug!("Started spline {}", self.splines.len() - 1);
                        self.splines.len() - 1
                    }
                };
                self.focused = Some(index);
                self.splines[index].add_point(position)?;
            }
            Mode::Edit => {
                self.release_focus();
                for (i, editor) in self.splines.iter_mut().enumerate() {
                    let index = ProximityIndex::new(editor.spline(), &self.config);
                    let grab = if let Some(at) = index.point_at(&position) {
                        editor.focus(at)?;
                        Some(Grab::Point)
                    } else {
                        index.curve_at(&position).map(|_| Grab::Curve)
                    };
                    if grab.is_some() {
                        debug!("Selected spline {} by {:?}", i, grab);
                        self.focused = Some(i);
                        self.grab = grab;
                        self.last_position = Some(position);
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Handles a pointer release at `position`.
    ///
    /// Draw mode places the point ending the dragged handle, edit mode ends the drag but keeps
    /// the spline selected.
    pub fn pointer_up(&mut self, mode: Mode, position: Vector<f64>) -> Result<()> {
        let index = match self.focused {
            Some(index) => index,
            None => return Ok(()),
        };
        match mode {
            Mode::Draw => {
                self.splines[index].add_point(position)?;
            }
            Mode::Edit => {
                self.splines[index].remove_focused_point();
                self.grab = None;
                self.last_position = None;
            }
        }
        Ok(())
    }

    /// Handles pointer movement to `position`.
    ///
    /// Draw mode drags the last placed point. Edit mode drags the grabbed point, or moves the
    /// whole spline if its curve was grabbed.
    pub fn pointer_move(&mut self, mode: Mode, position: Vector<f64>) -> Result<()> {
        let index = match self.focused {
            Some(index) => index,
            None => return Ok(()),
        };
        let editor = &mut self.splines[index];
        match (mode, self.grab) {
            (Mode::Draw, _) | (Mode::Edit, Some(Grab::Point)) => {
                editor.set_focused_point(position)?;
            }
            (Mode::Edit, Some(Grab::Curve)) => {
                if let Some(last) = &self.last_position {
                    editor.translate(&position.sub(last)?)?;
                }
                self.last_position = Some(position);
            }
            (Mode::Edit, None) => (),
        }
        Ok(())
    }

    /// Handles the cancel key.
    ///
    /// While drawing this discards the unfinished segment of the current spline and ends the
    /// spline, dropping it entirely if nothing finished is left.
    pub fn cancel(&mut self, mode: Mode) -> Result<()> {
        if mode != Mode::Draw {
            return Ok(());
        }
        if let Some(index) = self.focused.take() {
            let editor = &mut self.splines[index];
            editor.remove_unfinished_curve()?;
            if editor.spline().is_empty() {
                debug!("Dropped empty spline {}", index);
                self.splines.remove(index);
            }
        }
        Ok(())
    }

    /// Deletes the selected spline.
    pub fn delete_focused(&mut self) -> Option<ContinuityEditor<f64>> {
        let index = self.focused?;
        self.release_focus();
        debug!("Deleted spline {}", index);
        Some(self.splines.remove(index))
    }

    fn release_focus(&mut self) {
        if let Some(editor) = self.focused.and_then(|i| self.splines.get_mut(i)) {
            editor.remove_focused_point();
        }
        self.focused = None;
        self.grab = None;
        self.last_position = None;
    }
}
