use crate::draw::history::StrokeHistory;
use crate::draw::model::{Stroke, StrokeStyle};
use crate::draw::DrawingSurface;

const MIN_POINT_DIST_SQ: f32 = 9.0;

/// Freehand drawing canvas layered over the replay view.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingCanvas {
    style: StrokeStyle,
    active: Option<Stroke>,
    history: StrokeHistory,
}

impl Default for DrawingCanvas {
    fn default() -> Self {
        Self::new(StrokeStyle::default())
    }
}

impl DrawingCanvas {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            active: None,
            history: StrokeHistory::default(),
        }
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn begin_stroke(&mut self, point: (f32, f32)) {
        self.active = Some(Stroke {
            style: self.style,
            points: vec![point],
        });
    }

    pub fn extend_stroke(&mut self, point: (f32, f32)) {
        if let Some(stroke) = self.active.as_mut() {
            if should_append_point(stroke.points.last().copied(), point) {
                stroke.points.push(point);
            }
        }
    }

    pub fn end_stroke(&mut self, point: (f32, f32)) {
        self.extend_stroke(point);
        self.commit_stroke();
    }

    pub fn commit_stroke(&mut self) {
        if let Some(stroke) = self.active.take() {
            self.history.commit(stroke);
        }
    }

    /// Drop an in-progress stroke without committing it, e.g. when drawing
    /// mode is switched off mid-drag.
    pub fn cancel_stroke(&mut self) {
        self.active = None;
    }
}

impl DrawingSurface for DrawingCanvas {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.active = None;
        let removed = self.history.clear();
        tracing::debug!(removed, "cleared drawing canvas");
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        if self.history.undo().is_none() {
            tracing::debug!("nothing to undo on drawing canvas");
        }
        Ok(())
    }
}

fn should_append_point(last: Option<(f32, f32)>, point: (f32, f32)) -> bool {
    let Some((last_x, last_y)) = last else {
        return true;
    };

    let dx = point.0 - last_x;
    let dy = point.1 - last_y;
    dx * dx + dy * dy >= MIN_POINT_DIST_SQ
}
