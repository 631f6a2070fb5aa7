//! Facility lookup: filter by kind, search by text, sort by distance.

use serde::Serialize;

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    facility::{Coordinates, Facility, FacilityKind},
};

/// A facility together with its distance from a reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyFacility<'a> {
    pub facility: &'a Facility,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FacilityDirectory {
    facilities: Vec<Facility>,
}

impl FacilityDirectory {
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }

    pub fn all(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn get(&self, id: &str) -> SahayakResult<&Facility> {
        self.facilities
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| SahayakError::NotFound {
                kind: "facility".to_string(),
                id: id.to_string(),
            })
    }

    /// Facilities of `kind` (all kinds when `None`) whose name or address
    /// contains `query` in either locale. A blank query matches everything.
    /// Catalog order is preserved.
    pub fn filter(&self, kind: Option<FacilityKind>, query: &str) -> Vec<&Facility> {
        let query = query.trim();
        self.facilities
            .iter()
            .filter(|f| kind.map_or(true, |k| f.kind == k))
            .filter(|f| query.is_empty() || f.name.matches(query) || f.address.matches(query))
            .collect()
    }

    /// Like `filter`, then sorted nearest first from `origin`.
    pub fn nearest(&self, origin: &Coordinates, kind: Option<FacilityKind>, query: &str) -> Vec<NearbyFacility<'_>> {
        let mut nearby: Vec<NearbyFacility<'_>> = self
            .filter(kind, query)
            .into_iter()
            .map(|facility| NearbyFacility {
                distance_km: origin.distance_km(&facility.location),
                facility,
            })
            .collect();
        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        nearby
    }
}
