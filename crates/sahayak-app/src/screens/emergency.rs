//! Emergency screen: national lines, first-aid steps, and hospital calls.

use tracing::{error, info, warn};

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    facility::{EmergencyHospital, EmergencyLine},
    locale::{to_ascii_digits, Locale, Localized},
};
use sahayak_core::traits::Dialer;

pub struct EmergencyScreen {
    lines: Vec<EmergencyLine>,
    instructions: Localized<Vec<String>>,
    hospitals: Vec<EmergencyHospital>,
}

impl EmergencyScreen {
    pub fn new(
        lines: Vec<EmergencyLine>,
        instructions: Localized<Vec<String>>,
        hospitals: Vec<EmergencyHospital>,
    ) -> Self {
        Self {
            lines,
            instructions,
            hospitals,
        }
    }

    pub fn lines(&self) -> &[EmergencyLine] {
        &self.lines
    }

    pub fn instructions(&self, locale: Locale) -> &[String] {
        self.instructions.get(locale)
    }

    pub fn hospitals(&self) -> &[EmergencyHospital] {
        &self.hospitals
    }

    /// Dial the national line with `key`, e.g. "ambulance".
    pub fn call_line(&self, key: &str, dialer: &dyn Dialer) -> SahayakResult<String> {
        let line = self
            .lines
            .iter()
            .find(|l| l.key == key)
            .ok_or_else(|| SahayakError::NotFound {
                kind: "emergency line".to_string(),
                id: key.to_string(),
            })?;
        call(&line.number, dialer)
    }

    /// Dial the hospital at `index` in `hospitals()`.
    pub fn call_hospital(&self, index: usize, dialer: &dyn Dialer) -> SahayakResult<String> {
        let hospital = self.hospitals.get(index).ok_or_else(|| SahayakError::NotFound {
            kind: "emergency hospital".to_string(),
            id: index.to_string(),
        })?;
        call(&hospital.phone, dialer)
    }
}

/// Build the `tel:` URI for `number`, which may use Nepali digits.
///
/// Only digits, `+` and `-` may remain after conversion.
pub fn tel_uri(number: &str) -> SahayakResult<String> {
    let ascii = to_ascii_digits(number.trim());
    let valid = !ascii.is_empty()
        && ascii.chars().any(|c| c.is_ascii_digit())
        && ascii.chars().all(|c| c.is_ascii_digit() || c == '+' || c == '-');
    if !valid {
        return Err(SahayakError::InvalidInput {
            reason: format!("'{}' is not a dialable number", number),
        });
    }
    Ok(format!("tel:{}", ascii))
}

/// Dial `number` and return the URI that was dispatched.
pub fn call(number: &str, dialer: &dyn Dialer) -> SahayakResult<String> {
    let uri = tel_uri(number).inspect_err(|e| warn!(error = %e, "refusing to dial"))?;
    dialer
        .dial(&uri)
        .inspect_err(|e| error!(uri = %uri, error = %e, "dial failed"))?;
    info!(uri = %uri, "call placed");
    Ok(uri)
}
