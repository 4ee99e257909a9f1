//! Situational override kinds and the ordered selector used to resolve them.
//!
//! A hole carries at most one [`VariantOverride`] per [`Variant`] kind. At
//! query time a caller supplies a [`Selector`] naming which kinds are active
//! and in what precedence; resolution scans the selector in order and takes
//! the first kind that supplies a value for the queried channel.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingRect, Coordinate};

/// A situational context that may supply alternate hole attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Seasonal,
    Personal,
    Temporary,
}

impl Variant {
    /// Default precedence, highest first.
    ///
    /// Kept as an explicit table so reordering the enum declaration can
    /// never silently change resolution results.
    pub const DEFAULT_PRECEDENCE: [Variant; 3] =
        [Variant::Seasonal, Variant::Personal, Variant::Temporary];

    /// Position of this kind in the default precedence table.
    pub fn precedence_index(self) -> usize {
        Self::DEFAULT_PRECEDENCE
            .iter()
            .position(|v| *v == self)
            .unwrap_or(Self::DEFAULT_PRECEDENCE.len())
    }
}

/// Attribute channels a variant may override, resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Tee,
    Green,
    Checkpoint,
}

/// The override values one variant kind supplies for a single hole.
///
/// Each channel is independently settable; a kind that overrides the tee
/// but not the green leaves green lookups to fall through to the next kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct VariantOverride {
    #[serde(default)]
    pub tee: Option<BoundingRect>,
    #[serde(default)]
    pub green: Option<BoundingRect>,
    #[serde(default)]
    pub checkpoint: Option<Coordinate>,
}

impl VariantOverride {
    /// True iff no channel carries a value. Holes never store empty sets.
    pub fn is_empty(&self) -> bool {
        self.tee.is_none() && self.green.is_none() && self.checkpoint.is_none()
    }
}

/// An ordered sequence of variant kinds to consult during resolution.
///
/// Built from an unordered collection of kinds plus a precedence
/// comparator; duplicates are dropped. Selectors are intentionally partial:
/// a caller that only wants personal overrides builds a selector containing
/// just [`Variant::Personal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    kinds: Vec<Variant>,
}

impl Selector {
    /// Selector over the given kinds, ordered by default precedence.
    pub fn new<I: IntoIterator<Item = Variant>>(kinds: I) -> Self {
        Self::with_comparator(kinds, |a, b| a.precedence_index().cmp(&b.precedence_index()))
    }

    /// Selector over the given kinds with a caller-supplied precedence.
    ///
    /// The comparator's ascending order is the scan order: the kind sorted
    /// first is consulted first.
    pub fn with_comparator<I, F>(kinds: I, mut compare: F) -> Self
    where
        I: IntoIterator<Item = Variant>,
        F: FnMut(Variant, Variant) -> Ordering,
    {
        let mut unique: Vec<Variant> = Vec::with_capacity(Variant::DEFAULT_PRECEDENCE.len());
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        unique.sort_by(|a, b| compare(*a, *b));
        Self { kinds: unique }
    }

    /// Selector over every kind, in default precedence.
    pub fn all() -> Self {
        Self { kinds: Variant::DEFAULT_PRECEDENCE.to_vec() }
    }

    /// Selector that consults no overrides at all (base values only).
    pub fn none() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Kinds in scan order.
    pub fn kinds(&self) -> &[Variant] {
        &self.kinds
    }
}
