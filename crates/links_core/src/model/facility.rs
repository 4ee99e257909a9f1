use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    Clubhouse,
    DrivingRange,
    PuttingGreen,
    ProShop,
    Restaurant,
}

/// A non-playable venue facility. Plain data, no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub kind: FacilityKind,
    #[serde(default)]
    pub location: Option<Coordinate>,
}

impl Facility {
    pub fn new(name: impl Into<String>, kind: FacilityKind) -> Self {
        Self { name: name.into(), kind, location: None }
    }
}
