pub mod facility;
pub mod group;
pub mod hole;
pub mod section;
pub mod variant;
pub mod venue;

pub use facility::{Facility, FacilityKind};
pub use group::{GroupId, HoleGroup, SPLITTABLE_HOLE_COUNT};
pub use hole::{Hazard, HazardKind, Hole, HoleId, Par};
pub use section::{Section, SectionKind};
pub use variant::{Channel, Selector, Variant, VariantOverride};
pub use venue::{Affinity, Venue, VenueId};
