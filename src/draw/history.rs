use crate::draw::model::Stroke;

/// Committed strokes in drawing order. Undo drops the newest stroke and clear
/// wipes everything; neither can be redone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.strokes.len();
        self.strokes.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::model::StrokeStyle;

    fn sample_stroke(id: i32) -> Stroke {
        let p = id as f32;
        Stroke {
            style: StrokeStyle::default(),
            points: vec![(p, p), (p + 1.0, p + 1.0)],
        }
    }

    #[test]
    fn undo_pops_newest_stroke_first() {
        let mut history = StrokeHistory::default();
        let first = sample_stroke(1);
        let second = sample_stroke(2);

        history.commit(first.clone());
        history.commit(second.clone());

        assert_eq!(history.undo(), Some(second));
        assert_eq!(history.undo(), Some(first));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut history = StrokeHistory::default();
        history.commit(sample_stroke(0));
        history.commit(sample_stroke(1));

        assert_eq!(history.clear(), 2);
        assert!(history.is_empty());
        assert_eq!(history.clear(), 0);
        assert!(history.strokes().is_empty());
    }
}
