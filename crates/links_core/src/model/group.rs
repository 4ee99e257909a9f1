//! Named, ordered blocks of holes within a venue.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::hole::Hole;

pub type GroupId = Uuid;

/// Hole count at which a group can be split into front/back nines.
pub const SPLITTABLE_HOLE_COUNT: usize = 18;

/// A named, ordered block of holes (typically 9 or 18).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleGroup {
    pub id: GroupId,
    pub name: String,
    pub holes: Vec<Hole>,
    /// Training-only group: excluded from affinity and composition
    /// combinatorics.
    #[serde(default)]
    pub practice: bool,
    /// Forbids splitting an 18-hole group into nine-hole sections.
    #[serde(default)]
    pub indivisible: bool,
}

impl HoleGroup {
    pub fn new(name: impl Into<String>, holes: Vec<Hole>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), holes, practice: false, indivisible: false }
    }

    pub fn practice(mut self) -> Self {
        self.practice = true;
        self
    }

    pub fn indivisible(mut self) -> Self {
        self.indivisible = true;
        self
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par.strokes())).sum()
    }

    /// True iff this group offers front/back nine sections.
    pub fn splittable(&self) -> bool {
        self.holes.len() == SPLITTABLE_HOLE_COUNT && !self.indivisible
    }
}
