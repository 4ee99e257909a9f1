//! A single playable hole: base attributes plus per-variant overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LayoutError;
use crate::geometry::{BoundingRect, Coordinate};
use crate::model::variant::{Channel, Selector, Variant, VariantOverride};

/// Hole identity, opaque to callers.
pub type HoleId = Uuid;

/// Legal par values, serialized as the numeric par (3-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Par {
    Three,
    Four,
    Five,
    Six,
}

impl Par {
    pub fn strokes(self) -> u8 {
        match self {
            Par::Three => 3,
            Par::Four => 4,
            Par::Five => 5,
            Par::Six => 6,
        }
    }
}

impl From<Par> for u8 {
    fn from(par: Par) -> u8 {
        par.strokes()
    }
}

impl TryFrom<u8> for Par {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Par::Three),
            4 => Ok(Par::Four),
            5 => Ok(Par::Five),
            6 => Ok(Par::Six),
            other => Err(LayoutError::InvalidPar(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Bunker,
    Water,
    OutOfBounds,
    Trees,
    Rough,
}

/// A marked hazard area on the hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    pub area: BoundingRect,
}

/// One playable hole.
///
/// Base attributes (`tee`, `green`, `checkpoint`) may each be absent; the
/// resolved accessors consult the hole's overrides through a [`Selector`]
/// and fall back to the base value. Overrides are keyed by kind, so the
/// "at most one override set per kind" invariant is enforced by the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub id: HoleId,
    pub par: Par,
    #[serde(default)]
    pub tee: Option<BoundingRect>,
    #[serde(default)]
    pub green: Option<BoundingRect>,
    #[serde(default)]
    pub checkpoint: Option<Coordinate>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    #[serde(default)]
    overrides: BTreeMap<Variant, VariantOverride>,
}

impl Hole {
    pub fn new(par: Par) -> Self {
        Self {
            id: Uuid::new_v4(),
            par,
            tee: None,
            green: None,
            checkpoint: None,
            hazards: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// The override set for `kind`, if one is stored.
    pub fn override_for(&self, kind: Variant) -> Option<&VariantOverride> {
        self.overrides.get(&kind)
    }

    /// Replace the override set for `kind`. An empty set removes the entry,
    /// keeping the "no empty override sets" invariant.
    pub fn set_override(&mut self, kind: Variant, set: VariantOverride) {
        if set.is_empty() {
            self.overrides.remove(&kind);
        } else {
            self.overrides.insert(kind, set);
        }
    }

    /// Edit the override set for `kind` in place, creating it if absent.
    /// If the edit leaves the set empty it is removed.
    pub fn edit_override<F>(&mut self, kind: Variant, edit: F)
    where
        F: FnOnce(&mut VariantOverride),
    {
        let mut set = self.overrides.remove(&kind).unwrap_or_default();
        edit(&mut set);
        if !set.is_empty() {
            self.overrides.insert(kind, set);
        }
    }

    /// Effective tee area under `selector`.
    pub fn resolved_tee(&self, selector: &Selector) -> Option<BoundingRect> {
        self.scan(selector, |set| set.tee).or(self.tee)
    }

    /// Effective green area under `selector`.
    pub fn resolved_green(&self, selector: &Selector) -> Option<BoundingRect> {
        self.scan(selector, |set| set.green).or(self.green)
    }

    /// Effective checkpoint under `selector`.
    pub fn resolved_checkpoint(&self, selector: &Selector) -> Option<Coordinate> {
        self.scan(selector, |set| set.checkpoint).or(self.checkpoint)
    }

    /// Which variant kind (if any) supplies `channel` under `selector`.
    ///
    /// `None` means the lookup falls through to the base value.
    pub fn resolved_source(&self, channel: Channel, selector: &Selector) -> Option<Variant> {
        selector.kinds().iter().copied().find(|kind| {
            self.overrides.get(kind).is_some_and(|set| match channel {
                Channel::Tee => set.tee.is_some(),
                Channel::Green => set.green.is_some(),
                Channel::Checkpoint => set.checkpoint.is_some(),
            })
        })
    }

    /// One scan routine for every channel: first kind in selector order
    /// with a value wins; absence falls through.
    fn scan<T, F>(&self, selector: &Selector, pick: F) -> Option<T>
    where
        F: Fn(&VariantOverride) -> Option<T>,
    {
        selector.kinds().iter().find_map(|kind| self.overrides.get(kind).and_then(&pick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(v: f64) -> BoundingRect {
        BoundingRect::new(Coordinate::new(v, v), Coordinate::new(v + 1.0, v + 1.0))
    }

    #[test]
    fn par_round_trips_as_number() {
        let json = serde_json::to_string(&Par::Five).unwrap();
        assert_eq!(json, "5");
        let par: Par = serde_json::from_str("4").unwrap();
        assert_eq!(par, Par::Four);
    }

    #[test]
    fn par_rejects_out_of_range() {
        assert_eq!(Par::try_from(2), Err(LayoutError::InvalidPar(2)));
        assert!(serde_json::from_str::<Par>("7").is_err());
    }

    #[test]
    fn base_value_when_no_overrides() {
        let mut hole = Hole::new(Par::Four);
        hole.tee = Some(rect(1.0));
        assert_eq!(hole.resolved_tee(&Selector::all()), Some(rect(1.0)));
        assert_eq!(hole.resolved_green(&Selector::all()), None);
    }

    #[test]
    fn earliest_kind_in_precedence_wins() {
        let mut hole = Hole::new(Par::Four);
        hole.tee = Some(rect(0.0));
        hole.set_override(Variant::Seasonal, VariantOverride { tee: Some(rect(1.0)), ..Default::default() });
        hole.set_override(Variant::Temporary, VariantOverride { tee: Some(rect(2.0)), ..Default::default() });

        // Input order of the selector set is irrelevant; seasonal scans first.
        let selector = Selector::new([Variant::Temporary, Variant::Personal, Variant::Seasonal]);
        assert_eq!(hole.resolved_tee(&selector), Some(rect(1.0)));
        assert_eq!(hole.resolved_source(Channel::Tee, &selector), Some(Variant::Seasonal));
    }

    #[test]
    fn channels_fall_through_independently() {
        let mut hole = Hole::new(Par::Four);
        hole.green = Some(rect(9.0));
        // Seasonal overrides only the tee; green lookups skip it.
        hole.set_override(Variant::Seasonal, VariantOverride { tee: Some(rect(1.0)), ..Default::default() });
        hole.set_override(Variant::Personal, VariantOverride { green: Some(rect(2.0)), ..Default::default() });

        let selector = Selector::all();
        assert_eq!(hole.resolved_tee(&selector), Some(rect(1.0)));
        assert_eq!(hole.resolved_green(&selector), Some(rect(2.0)));
        assert_eq!(hole.resolved_source(Channel::Green, &selector), Some(Variant::Personal));
        assert_eq!(hole.resolved_checkpoint(&selector), None);
    }

    #[test]
    fn partial_selector_ignores_unlisted_kinds() {
        let mut hole = Hole::new(Par::Three);
        hole.tee = Some(rect(0.0));
        hole.set_override(Variant::Seasonal, VariantOverride { tee: Some(rect(1.0)), ..Default::default() });

        let personal_only = Selector::new([Variant::Personal]);
        assert_eq!(hole.resolved_tee(&personal_only), Some(rect(0.0)));
        assert_eq!(hole.resolved_tee(&Selector::none()), Some(rect(0.0)));
    }

    #[test]
    fn custom_precedence_flips_the_winner() {
        let mut hole = Hole::new(Par::Four);
        hole.set_override(Variant::Seasonal, VariantOverride { tee: Some(rect(1.0)), ..Default::default() });
        hole.set_override(Variant::Temporary, VariantOverride { tee: Some(rect(2.0)), ..Default::default() });

        let temporary_first = Selector::with_comparator(Variant::DEFAULT_PRECEDENCE, |a, b| {
            b.precedence_index().cmp(&a.precedence_index())
        });
        assert_eq!(hole.resolved_tee(&temporary_first), Some(rect(2.0)));
    }

    #[test]
    fn setting_empty_override_removes_entry() {
        let mut hole = Hole::new(Par::Four);
        hole.set_override(Variant::Personal, VariantOverride { tee: Some(rect(1.0)), ..Default::default() });
        assert!(hole.override_for(Variant::Personal).is_some());

        hole.set_override(Variant::Personal, VariantOverride::default());
        assert!(hole.override_for(Variant::Personal).is_none());
    }

    #[test]
    fn edit_override_dropping_last_value_removes_entry() {
        let mut hole = Hole::new(Par::Four);
        hole.edit_override(Variant::Temporary, |set| set.checkpoint = Some(Coordinate::ZERO));
        assert!(hole.override_for(Variant::Temporary).is_some());

        hole.edit_override(Variant::Temporary, |set| set.checkpoint = None);
        assert!(hole.override_for(Variant::Temporary).is_none());
    }
}
