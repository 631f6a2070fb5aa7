//! Hospitals, clinics, and pharmacies around Kathmandu.

use sahayak_contracts::{
    facility::{Coordinates, Facility, FacilityKind},
    locale::Localized,
};

const OPEN_24H: (&str, &str) = ("Open 24 hours", "२४ घण्टा खुला");

#[allow(clippy::too_many_arguments)]
fn facility(
    id: &str,
    name: (&str, &str),
    kind: FacilityKind,
    address: (&str, &str),
    phone: &str,
    hours: (&str, &str),
    latitude: f64,
    longitude: f64,
) -> Facility {
    Facility {
        id: id.to_string(),
        name: Localized::text(name.0, name.1),
        kind,
        address: Localized::text(address.0, address.1),
        phone: phone.to_string(),
        hours: Localized::text(hours.0, hours.1),
        location: Coordinates::new(latitude, longitude),
    }
}

pub fn facilities() -> Vec<Facility> {
    vec![
        facility(
            "1",
            ("Tribhuvan University Teaching Hospital", "त्रिभुवन विश्वविद्यालय शिक्षण अस्पताल"),
            FacilityKind::Hospital,
            ("Maharajgunj, Kathmandu", "महाराजगञ्ज, काठमाडौं"),
            "+977-1-4412303",
            OPEN_24H,
            27.7350,
            85.3290,
        ),
        facility(
            "2",
            ("Grande International Hospital", "ग्रान्डे अन्तर्राष्ट्रिय अस्पताल"),
            FacilityKind::Hospital,
            ("Dhapasi, Kathmandu", "ढापासी, काठमाडौं"),
            "+977-1-5159266",
            OPEN_24H,
            27.7290,
            85.3210,
        ),
        facility(
            "3",
            ("Norvic International Hospital", "नर्भिक अन्तर्राष्ट्रिय अस्पताल"),
            FacilityKind::Hospital,
            ("Thapathali, Kathmandu", "थापाथली, काठमाडौं"),
            "+977-1-4258554",
            OPEN_24H,
            27.6960,
            85.3200,
        ),
        facility(
            "4",
            ("City Care Clinic", "सिटी केयर क्लिनिक"),
            FacilityKind::Clinic,
            ("Putalisadak, Kathmandu", "पुतलीसडक, काठमाडौं"),
            "+977-1-4221111",
            ("7 AM - 8 PM", "बिहान ७ - बेलुका ८"),
            27.7100,
            85.3180,
        ),
        facility(
            "5",
            ("MedPlus Pharmacy", "मेडप्लस फार्मेसी"),
            FacilityKind::Pharmacy,
            ("New Road, Kathmandu", "नयाँ सडक, काठमाडौं"),
            "+977-1-4252525",
            ("6 AM - 10 PM", "बिहान ६ - बेलुका १०"),
            27.7050,
            85.3150,
        ),
        facility(
            "6",
            ("LifeCare Pharmacy", "लाइफकेयर फार्मेसी"),
            FacilityKind::Pharmacy,
            ("Lazimpat, Kathmandu", "लाजिम्पाट, काठमाडौं"),
            "+977-1-4412345",
            OPEN_24H,
            27.7280,
            85.3250,
        ),
    ]
}
