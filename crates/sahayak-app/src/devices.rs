//! Stand-in device collaborators for hosts without geolocation or telephony.

use std::sync::{Arc, Mutex};

use tracing::info;

use sahayak_contracts::{
    error::{SahayakError, SahayakResult},
    facility::Coordinates,
};
use sahayak_core::traits::{Dialer, LocationProvider};

/// Always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> SahayakResult<Coordinates> {
        Ok(self.0)
    }
}

/// Behaves like a device where permission was denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_position(&self) -> SahayakResult<Coordinates> {
        Err(SahayakError::LocationUnavailable {
            reason: "geolocation is not available on this device".to_string(),
        })
    }
}

/// A dialer that logs each `tel:` URI instead of placing a call.
///
/// Clones share the call history.
#[derive(Debug, Clone, Default)]
pub struct LogDialer {
    dialed: Arc<Mutex<Vec<String>>>,
}

impl LogDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URI dialed so far, oldest first.
    pub fn dialed(&self) -> SahayakResult<Vec<String>> {
        self.dialed
            .lock()
            .map(|d| d.clone())
            .map_err(|e| SahayakError::StorageFailure {
                reason: format!("dial history lock poisoned: {}", e),
            })
    }
}

impl Dialer for LogDialer {
    fn dial(&self, tel_uri: &str) -> SahayakResult<()> {
        info!(uri = %tel_uri, "dialing");
        self.dialed
            .lock()
            .map_err(|e| SahayakError::StorageFailure {
                reason: format!("dial history lock poisoned: {}", e),
            })?
            .push(tel_uri.to_string());
        Ok(())
    }
}
