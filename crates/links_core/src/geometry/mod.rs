//! Geometry value types for course layout
//!
//! Everything here is plain value math over WGS84-style lat/lon pairs.
//! Rectangles are always stored normalized: `origin` is the component-wise
//! minimum and `end` the component-wise maximum of the two defining corners,
//! no matter which corners a caller passes in.

use serde::{Deserialize, Serialize};

/// A point on the course (degrees latitude / longitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const ZERO: Self = Self { latitude: 0.0, longitude: 0.0 };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Component-wise linear interpolation between `a` and `b`.
    ///
    /// `t = 0` yields `a`, `t = 1` yields `b`; `t` is not clamped.
    #[inline]
    pub fn interpolate(a: Self, b: Self, t: f64) -> Self {
        Self {
            latitude: a.latitude + (b.latitude - a.latitude) * t,
            longitude: a.longitude + (b.longitude - a.longitude) * t,
        }
    }

    fn component_min(a: Self, b: Self) -> Self {
        Self { latitude: a.latitude.min(b.latitude), longitude: a.longitude.min(b.longitude) }
    }

    fn component_max(a: Self, b: Self) -> Self {
        Self { latitude: a.latitude.max(b.latitude), longitude: a.longitude.max(b.longitude) }
    }
}

/// Axis-aligned bounding rectangle.
///
/// Invariant: `origin <= end` component-wise. All constructors and
/// operations re-normalize, so the invariant holds for any value a caller
/// can observe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingRect {
    pub origin: Coordinate,
    pub end: Coordinate,
}

impl BoundingRect {
    /// Build from two arbitrary corners.
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        Self { origin: Coordinate::component_min(a, b), end: Coordinate::component_max(a, b) }
    }

    /// Degenerate rectangle covering a single point.
    pub fn at(point: Coordinate) -> Self {
        Self { origin: point, end: point }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::interpolate(self.origin, self.end, 0.5)
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude >= self.origin.latitude
            && point.latitude <= self.end.latitude
            && point.longitude >= self.origin.longitude
            && point.longitude <= self.end.longitude
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            origin: Coordinate::component_min(self.origin, other.origin),
            end: Coordinate::component_max(self.end, other.end),
        }
    }

    /// Overlapping region of `self` and `other`, or `None` if disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let origin = Coordinate::component_max(self.origin, other.origin);
        let end = Coordinate::component_min(self.end, other.end);
        if origin.latitude <= end.latitude && origin.longitude <= end.longitude {
            Some(Self { origin, end })
        } else {
            None
        }
    }

    /// Grow the rectangle just enough to cover `point`.
    pub fn expand_to(&self, point: Coordinate) -> Self {
        Self {
            origin: Coordinate::component_min(self.origin, point),
            end: Coordinate::component_max(self.end, point),
        }
    }
}

/// Directed straight segment, e.g. tee center to green center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Segment {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Point at fraction `t` along the segment (not clamped).
    pub fn point_at(&self, t: f64) -> Coordinate {
        Coordinate::interpolate(self.start, self.end, t)
    }
}
