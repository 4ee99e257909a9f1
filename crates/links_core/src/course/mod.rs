//! Round composition: flattening sections into a playable hole sequence.
//!
//! A [`MappedCourse`] is a derived, immutable result: a snapshot of the
//! venue, the sections the caller picked, and the flattened holes in play
//! order. The [`CourseSummary`] projection is recomputed on demand and is
//! light enough to embed in a persisted round record without the venue.

use serde::{Deserialize, Serialize};

use crate::model::group::SPLITTABLE_HOLE_COUNT;
use crate::model::hole::Hole;
use crate::model::section::{Section, SectionKind};
use crate::model::venue::Venue;

/// The flattened, ordered hole sequence for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedCourse {
    pub venue: Venue,
    pub sections: Vec<Section>,
    pub holes: Vec<Hole>,
}

impl MappedCourse {
    /// Compose a round from `sections`, in the caller's order.
    ///
    /// Section order is play order and is never re-sorted. Half sections
    /// split by position: front = first 9, back = last 9.
    ///
    /// # Panics
    ///
    /// Panics if a section references a missing group, or requests a half
    /// split of a group that is not a divisible 18-hole group. Both mean
    /// the caller bypassed [`Venue::sections`]; check hand-built sections
    /// with [`Venue::validate_section`] first.
    pub fn compose(venue: &Venue, sections: &[Section]) -> Self {
        let mut holes = Vec::new();
        for section in sections {
            let group = venue.group_at(section.group_index).unwrap_or_else(|| {
                panic!(
                    "section references group index {} but venue '{}' has {} groups",
                    section.group_index,
                    venue.name,
                    venue.groups().len()
                )
            });
            let slice: &[Hole] = match section.kind {
                SectionKind::All => &group.holes,
                SectionKind::FrontNine | SectionKind::BackNine => {
                    assert!(
                        group.splittable(),
                        "group '{}' cannot be split into nines ({} holes, indivisible: {})",
                        group.name,
                        group.hole_count(),
                        group.indivisible
                    );
                    let half = SPLITTABLE_HOLE_COUNT / 2;
                    if section.kind == SectionKind::FrontNine {
                        &group.holes[..half]
                    } else {
                        &group.holes[half..]
                    }
                }
            };
            holes.extend_from_slice(slice);
        }

        Self { venue: venue.clone(), sections: sections.to_vec(), holes }
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par.strokes())).sum()
    }

    /// Storage-light projection of this course, recomputed on demand.
    pub fn summary(&self) -> CourseSummary {
        let mut segments = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            // Sections were validated at compose time; the snapshot still
            // contains the referenced group.
            if let Some(group) = self.venue.group_at(section.group_index) {
                let half = SPLITTABLE_HOLE_COUNT / 2;
                let slice: &[Hole] = match section.kind {
                    SectionKind::All => &group.holes,
                    SectionKind::FrontNine => &group.holes[..half],
                    SectionKind::BackNine => &group.holes[half..],
                };
                segments.push(SegmentSummary {
                    group_name: group.name.clone(),
                    kind: section.kind,
                    hole_count: slice.len(),
                    pars: slice.iter().map(|h| h.par.strokes()).collect(),
                });
            }
        }
        CourseSummary {
            venue_name: self.venue.name.clone(),
            total_par: self.total_par(),
            segments,
        }
    }
}

/// One composed section as it appears on a scorecard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub group_name: String,
    pub kind: SectionKind,
    pub hole_count: usize,
    pub pars: Vec<u8>,
}

/// Compact course description for embedding in persisted round records.
///
/// Re-derivable from a [`MappedCourse`] at any time; never primary state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub venue_name: String,
    pub total_par: u32,
    pub segments: Vec<SegmentSummary>,
}
