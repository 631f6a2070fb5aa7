//! Medicine records and the image payload submitted for identification.

use serde::{Deserialize, Serialize};

use crate::locale::Localized;

/// Reference information about one medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Stable machine key, e.g. "paracetamol-500".
    pub key: String,
    /// Brand name with strength, e.g. "Paracetamol 500mg".
    pub name: Localized<String>,
    pub generic_name: Localized<String>,
    pub uses: Localized<Vec<String>>,
    pub dosage: Localized<String>,
    pub side_effects: Localized<Vec<String>>,
    pub warnings: Localized<Vec<String>>,
    pub photo_url: String,
}

/// An uploaded or captured photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Original file name, or a capture label for camera shots.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
