//! The full venue model and its affinity consistency maintenance.
//!
//! A venue owns its hole groups, facilities, and affinity constraints.
//! Group state and affinities are private: every mutator runs the
//! normalization pass before returning, so callers can never observe an
//! affinity that names a missing or practice group. The source app enforced
//! this with a property observer; here it is an explicit, atomic
//! mutate-then-maintain step on each mutator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LayoutError;
use crate::model::facility::Facility;
use crate::model::group::{GroupId, HoleGroup};
use crate::model::section::{Section, SectionKind};

pub type VenueId = Uuid;

/// A declared compatibility set: these groups may be combined into one
/// round. Valid affinities always have ≥2 members, all of them present,
/// non-practice groups — maintenance prunes anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affinity {
    pub members: BTreeSet<GroupId>,
}

impl Affinity {
    pub fn new<I: IntoIterator<Item = GroupId>>(members: I) -> Self {
        Self { members: members.into_iter().collect() }
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.members.contains(&id)
    }
}

/// The full golf venue: hole groups, facilities, and affinity constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    groups: Vec<HoleGroup>,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    affinities_enabled: bool,
    #[serde(default)]
    affinities: Vec<Affinity>,
}

impl Venue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            groups: Vec::new(),
            facilities: Vec::new(),
            affinities_enabled: false,
            affinities: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Group access and mutation (every mutator ends with maintenance)
    // ------------------------------------------------------------------

    pub fn groups(&self) -> &[HoleGroup] {
        &self.groups
    }

    pub fn group_at(&self, index: usize) -> Option<&HoleGroup> {
        self.groups.get(index)
    }

    pub fn group(&self, id: GroupId) -> Option<&HoleGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Replace the whole group list.
    pub fn set_groups(&mut self, groups: Vec<HoleGroup>) {
        self.groups = groups;
        self.normalize_affinities();
    }

    pub fn add_group(&mut self, group: HoleGroup) {
        self.groups.push(group);
        self.normalize_affinities();
    }

    /// Remove a group by id, returning it if it was present.
    pub fn remove_group(&mut self, id: GroupId) -> Option<HoleGroup> {
        let index = self.groups.iter().position(|g| g.id == id)?;
        let removed = self.groups.remove(index);
        self.normalize_affinities();
        Some(removed)
    }

    /// Reorder a group. Out-of-range indices are ignored.
    pub fn move_group(&mut self, from: usize, to: usize) {
        if from < self.groups.len() && to < self.groups.len() && from != to {
            let group = self.groups.remove(from);
            self.groups.insert(to, group);
            self.normalize_affinities();
        }
    }

    /// Edit one group in place (holes, name, flags). Returns false if the
    /// id is unknown.
    pub fn update_group<F>(&mut self, id: GroupId, edit: F) -> bool
    where
        F: FnOnce(&mut HoleGroup),
    {
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => {
                edit(group);
                self.normalize_affinities();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Affinities
    // ------------------------------------------------------------------

    pub fn affinities(&self) -> &[Affinity] {
        &self.affinities
    }

    pub fn affinities_enabled(&self) -> bool {
        self.affinities_enabled
    }

    /// Replace the affinity list; invalid members are pruned immediately.
    pub fn set_affinities(&mut self, affinities: Vec<Affinity>) {
        self.affinities = affinities;
        self.normalize_affinities();
    }

    /// Add one affinity. Returns false if it was pruned away entirely
    /// (fewer than 2 of its members are eligible groups).
    pub fn add_affinity(&mut self, affinity: Affinity) -> bool {
        // Existing entries are already normalized, so the only entry the
        // maintenance pass can drop is the one just pushed.
        let before = self.affinities.len();
        self.affinities.push(affinity);
        self.normalize_affinities();
        self.affinities.len() == before + 1
    }

    /// Enable or disable affinity constraints. Forced off whenever fewer
    /// than 2 eligible groups exist, regardless of the requested value.
    pub fn set_affinities_enabled(&mut self, enabled: bool) {
        self.affinities_enabled = enabled;
        self.normalize_affinities();
    }

    /// Identities of groups that may participate in affinities.
    pub fn eligible_group_ids(&self) -> BTreeSet<GroupId> {
        self.groups.iter().filter(|g| !g.practice).map(|g| g.id).collect()
    }

    /// True iff combining the two groups into one round is allowed: either
    /// affinity constraints are off, or some affinity contains both.
    pub fn can_combine(&self, a: GroupId, b: GroupId) -> bool {
        if !self.affinities_enabled || a == b {
            return true;
        }
        self.affinities.iter().any(|aff| aff.contains(a) && aff.contains(b))
    }

    /// Affinity consistency maintenance.
    ///
    /// Prunes each affinity to members that still exist and are not
    /// practice groups, drops affinities with fewer than 2 survivors, and
    /// forces `affinities_enabled` off when fewer than 2 eligible groups
    /// remain. Idempotent; never fabricates affinities. Normally runs
    /// inside each mutator; public so decoded records can be repaired.
    pub fn normalize_affinities(&mut self) {
        let eligible = self.eligible_group_ids();

        let mut next: Vec<Affinity> = Vec::with_capacity(self.affinities.len());
        for affinity in &self.affinities {
            let kept: BTreeSet<GroupId> =
                affinity.members.intersection(&eligible).copied().collect();
            if kept.len() >= 2 {
                next.push(Affinity { members: kept });
            }
        }

        // Replace only on actual change to avoid needless notifications
        // downstream of a clone-compare.
        if next != self.affinities {
            log::debug!(
                "venue '{}': pruned affinities {} -> {}",
                self.name,
                self.affinities.len(),
                next.len()
            );
            self.affinities = next;
        }

        if eligible.len() < 2 && self.affinities_enabled {
            log::debug!("venue '{}': fewer than 2 eligible groups, disabling affinities", self.name);
            self.affinities_enabled = false;
        }
    }

    // ------------------------------------------------------------------
    // Section enumeration
    // ------------------------------------------------------------------

    /// Every legally selectable section, recomputed from current group
    /// state. Each group offers its "all" section; an 18-hole divisible
    /// group additionally offers front and back nines.
    pub fn sections(&self) -> Vec<Section> {
        let mut out = Vec::with_capacity(self.groups.len());
        for (index, group) in self.groups.iter().enumerate() {
            out.push(Section::all(index, group.hole_count()));
            if group.splittable() {
                out.push(Section::front_nine(index));
                out.push(Section::back_nine(index));
            }
        }
        out
    }

    /// Check a hand-built section against this venue. Sections obtained
    /// from [`sections`](Self::sections) always pass.
    pub fn validate_section(&self, section: &Section) -> Result<(), LayoutError> {
        let group = self.groups.get(section.group_index).ok_or(LayoutError::UnknownGroup {
            index: section.group_index,
            count: self.groups.len(),
        })?;
        match section.kind {
            SectionKind::All => Ok(()),
            SectionKind::FrontNine | SectionKind::BackNine => {
                if group.splittable() {
                    Ok(())
                } else {
                    Err(LayoutError::NotSplittable {
                        name: group.name.clone(),
                        holes: group.hole_count(),
                        indivisible: group.indivisible,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hole::{Hole, Par};

    fn group(name: &str, holes: usize) -> HoleGroup {
        HoleGroup::new(name, (0..holes).map(|_| Hole::new(Par::Four)).collect())
    }

    fn venue_with_two_18s() -> (Venue, GroupId, GroupId) {
        let g1 = group("East", 18);
        let g2 = group("West", 18);
        let (id1, id2) = (g1.id, g2.id);
        let mut venue = Venue::new("Royal Links");
        venue.set_groups(vec![g1, g2]);
        (venue, id1, id2)
    }

    #[test]
    fn sections_for_splittable_18_hole_group() {
        let mut venue = Venue::new("V");
        venue.add_group(group("East", 18));

        let sections = venue.sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], Section::all(0, 18));
        assert_eq!(sections[1], Section::front_nine(0));
        assert_eq!(sections[2], Section::back_nine(0));
    }

    #[test]
    fn sections_for_indivisible_and_short_groups() {
        let mut venue = Venue::new("V");
        venue.add_group(group("East", 18).indivisible());
        venue.add_group(group("Short", 9));

        let sections = venue.sections();
        assert_eq!(sections.len(), 2);
        assert!(sections.iter().all(|s| s.kind == SectionKind::All));
    }

    #[test]
    fn sections_reflect_flag_changes_immediately() {
        let mut venue = Venue::new("V");
        let g = group("East", 18);
        let id = g.id;
        venue.add_group(g);
        assert_eq!(venue.sections().len(), 3);

        venue.update_group(id, |g| g.indivisible = true);
        assert_eq!(venue.sections().len(), 1);
    }

    #[test]
    fn affinity_survives_while_members_eligible() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        venue.set_affinities(vec![Affinity::new([id1, id2])]);
        venue.set_affinities_enabled(true);

        assert_eq!(venue.affinities().len(), 1);
        assert!(venue.affinities_enabled());
        assert!(venue.can_combine(id1, id2));
    }

    #[test]
    fn removing_member_drops_affinity_and_disables_flag() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        venue.set_affinities(vec![Affinity::new([id1, id2])]);
        venue.set_affinities_enabled(true);

        venue.remove_group(id2);

        assert!(venue.affinities().is_empty());
        assert!(!venue.affinities_enabled());
    }

    #[test]
    fn practice_flag_prunes_affinity_membership() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        let g3 = group("North", 9);
        let id3 = g3.id;
        venue.add_group(g3);
        venue.set_affinities(vec![Affinity::new([id1, id2, id3])]);
        venue.set_affinities_enabled(true);

        venue.update_group(id3, |g| g.practice = true);

        assert_eq!(venue.affinities().len(), 1);
        let members = &venue.affinities()[0].members;
        assert!(members.contains(&id1) && members.contains(&id2) && !members.contains(&id3));
        // Two eligible groups remain, so the flag stays as set.
        assert!(venue.affinities_enabled());
    }

    #[test]
    fn move_group_reorders_without_breaking_affinities() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        venue.set_affinities(vec![Affinity::new([id1, id2])]);

        venue.move_group(0, 1);
        assert_eq!(venue.groups()[0].id, id2);
        assert_eq!(venue.groups()[1].id, id1);
        assert_eq!(venue.affinities().len(), 1);

        // Out-of-range moves are ignored.
        venue.move_group(0, 5);
        assert_eq!(venue.groups()[0].id, id2);
    }

    #[test]
    fn maintenance_is_idempotent() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        venue.set_affinities(vec![Affinity::new([id1, id2]), Affinity::new([id1, Uuid::new_v4()])]);

        let after_first = venue.clone();
        venue.normalize_affinities();
        assert_eq!(venue, after_first);
    }

    #[test]
    fn stale_member_is_filtered_not_errored() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        venue.set_affinities(vec![Affinity::new([id1, id2, Uuid::new_v4()])]);

        assert_eq!(venue.affinities().len(), 1);
        assert_eq!(venue.affinities()[0].members.len(), 2);
    }

    #[test]
    fn single_eligible_group_cannot_enable_affinities() {
        // G1 playable 18, G2 practice: only one eligible group.
        let mut venue = Venue::new("V");
        venue.add_group(group("East", 18));
        venue.add_group(group("Range", 9).practice());

        venue.set_affinities_enabled(true);
        assert!(!venue.affinities_enabled());

        // Sections still include the practice group's "all" entry plus the
        // splittable 18's three entries.
        assert_eq!(venue.sections().len(), 4);
    }

    #[test]
    fn add_affinity_reports_pruning() {
        let (mut venue, id1, id2) = venue_with_two_18s();
        assert!(venue.add_affinity(Affinity::new([id1, id2])));
        assert!(!venue.add_affinity(Affinity::new([id1, Uuid::new_v4()])));
        assert_eq!(venue.affinities().len(), 1);
    }

    #[test]
    fn validate_section_rejects_bad_references() {
        let mut venue = Venue::new("V");
        venue.add_group(group("Short", 9));

        assert_eq!(
            venue.validate_section(&Section::all(3, 9)),
            Err(LayoutError::UnknownGroup { index: 3, count: 1 })
        );
        assert!(matches!(
            venue.validate_section(&Section::front_nine(0)),
            Err(LayoutError::NotSplittable { .. })
        ));
        for section in venue.sections() {
            assert_eq!(venue.validate_section(&section), Ok(()));
        }
    }
}
