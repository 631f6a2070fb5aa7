//! Health services screen: nearby facilities and map links.

use tracing::{info, warn};

use sahayak_contracts::{
    error::SahayakResult,
    facility::{Coordinates, Facility, FacilityKind},
    locale::{localize_digits, Locale},
};
use sahayak_core::traits::LocationProvider;
use sahayak_store::{FacilityDirectory, NearbyFacility};

use crate::strings::t;

/// Where the map centre came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapCentre {
    Detected(Coordinates),
    Fallback(Coordinates),
}

impl MapCentre {
    pub fn coordinates(&self) -> Coordinates {
        match *self {
            MapCentre::Detected(c) | MapCentre::Fallback(c) => c,
        }
    }
}

pub struct HealthServicesScreen {
    directory: FacilityDirectory,
    fallback: Coordinates,
    centre: MapCentre,
    kind: Option<FacilityKind>,
    query: String,
}

impl HealthServicesScreen {
    pub fn new(directory: FacilityDirectory, fallback: Coordinates) -> Self {
        Self {
            directory,
            fallback,
            centre: MapCentre::Fallback(fallback),
            kind: None,
            query: String::new(),
        }
    }

    /// Ask `provider` for the device position. Any failure leaves the map on
    /// the fallback centre; the error is logged and never surfaced.
    pub fn locate(&mut self, provider: &dyn LocationProvider) -> MapCentre {
        self.centre = match provider.current_position() {
            Ok(position) => {
                info!(lat = position.latitude, lng = position.longitude, "device location detected");
                MapCentre::Detected(position)
            }
            Err(e) => {
                warn!(error = %e, "location unavailable, using default area");
                MapCentre::Fallback(self.fallback)
            }
        };
        self.centre
    }

    pub fn centre(&self) -> MapCentre {
        self.centre
    }

    pub fn kind(&self) -> Option<FacilityKind> {
        self.kind
    }

    /// `None` shows every kind.
    pub fn set_kind(&mut self, kind: Option<FacilityKind>) {
        self.kind = kind;
    }

    /// Step through all → hospital → clinic → pharmacy → all.
    pub fn cycle_kind(&mut self) {
        self.kind = match self.kind {
            None => Some(FacilityKind::ALL[0]),
            Some(k) => FacilityKind::ALL
                .iter()
                .position(|x| *x == k)
                .and_then(|i| FacilityKind::ALL.get(i + 1).copied()),
        };
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Matching facilities, nearest to the map centre first.
    pub fn visible(&self) -> Vec<NearbyFacility<'_>> {
        self.directory.nearest(&self.centre.coordinates(), self.kind, &self.query)
    }

    pub fn facility(&self, id: &str) -> SahayakResult<&Facility> {
        self.directory.get(id)
    }

    /// Heading line: detected location or the default area note.
    pub fn location_note(&self, locale: Locale) -> &'static str {
        match self.centre {
            MapCentre::Detected(_) => t(locale, "services.location_detected"),
            MapCentre::Fallback(c) if c == Coordinates::KATHMANDU => t(locale, "services.default_area"),
            MapCentre::Fallback(_) => t(locale, "services.configured_area"),
        }
    }

    /// Link to health facilities around the map centre. The stock fallback
    /// opens the Kathmandu place page.
    pub fn area_url(&self) -> String {
        match self.centre {
            MapCentre::Fallback(c) if c == Coordinates::KATHMANDU => {
                "https://www.google.com/maps/place/Kathmandu,+Nepal/@27.7172,85.3240,13z".to_string()
            }
            MapCentre::Detected(c) | MapCentre::Fallback(c) => format!(
                "https://www.google.com/maps/search/health+facilities/@{},{},13z",
                c.latitude, c.longitude
            ),
        }
    }
}

/// Turn-by-turn directions link to `facility`.
pub fn directions_url(facility: &Facility) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        facility.location.latitude, facility.location.longitude
    )
}

/// True for facilities whose hours say they are open around the clock.
pub fn is_open_24h(facility: &Facility) -> bool {
    facility.hours.en.contains("24")
}

/// "1.2 km" in the digits of `locale`.
pub fn distance_label(distance_km: f64, locale: Locale) -> String {
    let km = format!("{:.1}", distance_km);
    format!("{} km", localize_digits(&km, locale))
}
