//! # links_core - Golf Venue Layout & Round Composition
//!
//! This library models a golf venue's playable layout and resolves, at
//! query time, which holes and hole attributes apply to a round. It is a
//! pure, synchronous model crate consumed by a host application: no
//! network surface, no background work.
//!
//! ## Features
//! - Course composition: flatten caller-ordered sections into a round
//! - Affinity maintenance: group-combination constraints stay valid under
//!   any group mutation
//! - Variant resolution: seasonal/personal/temporary overrides resolved
//!   per channel through a caller-ordered selector
//! - Versioned, checksummed persistence for venue and round records

pub mod course;
pub mod error;
pub mod geometry;
pub mod model;
pub mod scorecard;
pub mod store;

// Re-export the model surface
pub use course::{CourseSummary, MappedCourse, SegmentSummary};
pub use error::LayoutError;
pub use geometry::{BoundingRect, Coordinate, Segment};
pub use model::{
    Affinity, Channel, Facility, FacilityKind, GroupId, Hazard, HazardKind, Hole, HoleGroup,
    HoleId, Par, Section, SectionKind, Selector, Variant, VariantOverride, Venue, VenueId,
};
pub use scorecard::{Scorecard, Stroke};

// Re-export the persistence surface
pub use store::{StoreError, VenueStore, ROUND_VERSION, VENUE_VERSION};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
