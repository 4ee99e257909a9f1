//! Section references: which slice of which group goes into a round.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    All,
    FrontNine,
    BackNine,
}

/// A reference selecting all or half of one group's holes.
///
/// Sections are references into a specific venue's group list, not copies:
/// `group_index` is positional, and a section is only meaningful against
/// the venue whose [`sections`](crate::model::venue::Venue::sections)
/// enumeration produced it. `hole_count` records the slice length at the
/// time the section was built and is display data; composition always
/// resolves counts from the live group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    pub group_index: usize,
    pub hole_count: usize,
    pub kind: SectionKind,
}

impl Section {
    pub fn new(group_index: usize, hole_count: usize, kind: SectionKind) -> Self {
        Self { group_index, hole_count, kind }
    }

    pub fn all(group_index: usize, hole_count: usize) -> Self {
        Self::new(group_index, hole_count, SectionKind::All)
    }

    pub fn front_nine(group_index: usize) -> Self {
        Self::new(group_index, 9, SectionKind::FrontNine)
    }

    pub fn back_nine(group_index: usize) -> Self {
        Self::new(group_index, 9, SectionKind::BackNine)
    }
}
