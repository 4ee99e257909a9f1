//! Per-round stroke bookkeeping. Deliberately dumb CRUD: the composition
//! and resolution engines never depend on anything here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::course::MappedCourse;
use crate::geometry::Coordinate;

/// One recorded stroke. Both fields optional: a quick tap on the watch
/// records a bare stroke, detail can be filled in later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Stroke {
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub position: Option<Coordinate>,
}

/// One player's card for a composed round, keyed by hole position in the
/// mapped course (0-based play order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub player: String,
    #[serde(default)]
    strokes: BTreeMap<usize, Vec<Stroke>>,
    #[serde(default)]
    annotations: BTreeMap<usize, String>,
}

impl Scorecard {
    pub fn new(player: impl Into<String>) -> Self {
        Self { player: player.into(), strokes: BTreeMap::new(), annotations: BTreeMap::new() }
    }

    pub fn record_stroke(&mut self, hole_index: usize, stroke: Stroke) {
        self.strokes.entry(hole_index).or_default().push(stroke);
    }

    /// Remove the most recent stroke on a hole (mis-tap correction).
    pub fn undo_stroke(&mut self, hole_index: usize) -> Option<Stroke> {
        let strokes = self.strokes.get_mut(&hole_index)?;
        let stroke = strokes.pop();
        if strokes.is_empty() {
            self.strokes.remove(&hole_index);
        }
        stroke
    }

    pub fn strokes_on(&self, hole_index: usize) -> &[Stroke] {
        self.strokes.get(&hole_index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stroke_count(&self, hole_index: usize) -> usize {
        self.strokes_on(hole_index).len()
    }

    pub fn total_strokes(&self) -> usize {
        self.strokes.values().map(Vec::len).sum()
    }

    pub fn annotate(&mut self, hole_index: usize, note: impl Into<String>) {
        self.annotations.insert(hole_index, note.into());
    }

    pub fn annotation(&self, hole_index: usize) -> Option<&str> {
        self.annotations.get(&hole_index).map(String::as_str)
    }

    /// Strokes over/under par, counting only holes with at least one
    /// recorded stroke (an unplayed hole is not a score of zero).
    pub fn score_to_par(&self, course: &MappedCourse) -> i32 {
        self.strokes
            .iter()
            .filter_map(|(index, strokes)| {
                let hole = course.holes.get(*index)?;
                Some(strokes.len() as i32 - i32::from(hole.par.strokes()))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::group::HoleGroup;
    use crate::model::hole::{Hole, Par};
    use crate::model::section::Section;
    use crate::model::venue::Venue;

    fn course() -> MappedCourse {
        let mut venue = Venue::new("V");
        venue.add_group(HoleGroup::new(
            "Short",
            vec![Hole::new(Par::Three), Hole::new(Par::Four), Hole::new(Par::Five)],
        ));
        MappedCourse::compose(&venue, &[Section::all(0, 3)])
    }

    #[test]
    fn record_and_undo() {
        let mut card = Scorecard::new("Ada");
        card.record_stroke(0, Stroke::default());
        card.record_stroke(0, Stroke { club: Some("putter".into()), position: None });

        assert_eq!(card.stroke_count(0), 2);
        let undone = card.undo_stroke(0).unwrap();
        assert_eq!(undone.club.as_deref(), Some("putter"));
        assert_eq!(card.stroke_count(0), 1);

        card.undo_stroke(0);
        assert_eq!(card.total_strokes(), 0);
        assert!(card.undo_stroke(0).is_none());
    }

    #[test]
    fn score_to_par_skips_unplayed_holes() {
        let course = course();
        let mut card = Scorecard::new("Ada");
        // Hole 0 (par 3): 4 strokes, +1. Hole 2 (par 5): 3 strokes, -2.
        for _ in 0..4 {
            card.record_stroke(0, Stroke::default());
        }
        for _ in 0..3 {
            card.record_stroke(2, Stroke::default());
        }

        assert_eq!(card.score_to_par(&course), -1);
        assert_eq!(card.total_strokes(), 7);
    }

    #[test]
    fn annotations_round_trip() {
        let mut card = Scorecard::new("Ada");
        card.annotate(1, "wind from the left");
        assert_eq!(card.annotation(1), Some("wind from the left"));
        assert_eq!(card.annotation(0), None);
    }
}
