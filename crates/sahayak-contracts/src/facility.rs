//! Health facilities, coordinates, and emergency contacts.

use serde::{Deserialize, Serialize};

use crate::locale::{localize_digits, Locale, Localized};

/// Mean Earth radius used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Central Kathmandu. Used when device location is unavailable.
    pub const KATHMANDU: Coordinates = Coordinates {
        latitude: 27.7172,
        longitude: 85.3240,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Haversine distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlng = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        // Rounding can push `a` just past 1 for near-antipodal points.
        2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
    }
}

/// What kind of service a facility offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    Hospital,
    Clinic,
    Pharmacy,
}

impl FacilityKind {
    pub const ALL: [FacilityKind; 3] = [FacilityKind::Hospital, FacilityKind::Clinic, FacilityKind::Pharmacy];

    pub fn key(self) -> &'static str {
        match self {
            FacilityKind::Hospital => "hospital",
            FacilityKind::Clinic => "clinic",
            FacilityKind::Pharmacy => "pharmacy",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (FacilityKind::Hospital, Locale::En) => "Hospital",
            (FacilityKind::Hospital, Locale::Ne) => "अस्पताल",
            (FacilityKind::Clinic, Locale::En) => "Clinic",
            (FacilityKind::Clinic, Locale::Ne) => "क्लिनिक",
            (FacilityKind::Pharmacy, Locale::En) => "Pharmacy",
            (FacilityKind::Pharmacy, Locale::Ne) => "फार्मेसी",
        }
    }

    /// Parse a kind key. Returns `None` for unknown keys (including "all").
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// A hospital, clinic, or pharmacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: Localized<String>,
    pub kind: FacilityKind,
    pub address: Localized<String>,
    pub phone: String,
    pub hours: Localized<String>,
    pub location: Coordinates,
}

/// A national emergency line such as the ambulance number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyLine {
    /// Stable machine key, e.g. "ambulance".
    pub key: String,
    pub name: Localized<String>,
    /// Short dial code in ASCII digits, e.g. "102".
    pub number: String,
}

impl EmergencyLine {
    /// The dial code rendered in the digits of `locale`.
    pub fn display_number(&self, locale: Locale) -> String {
        localize_digits(&self.number, locale)
    }
}

/// A hospital listed on the emergency screen for direct calling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyHospital {
    pub name: Localized<String>,
    pub phone: String,
    pub address: Localized<String>,
}
