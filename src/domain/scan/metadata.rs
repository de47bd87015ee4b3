//! Objects reported by the platform's metadata output.
//!
//! The platform hands over a heterogeneous list of detections. Each entry is
//! modelled as a closed enum so consumers match on the kind instead of
//! assuming every entry is a readable code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Encoding standard of a scannable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    Qr,
    Aztec,
    Code39,
    Code93,
    Code128,
    DataMatrix,
    Ean8,
    Ean13,
    Itf14,
    Pdf417,
    Upce,
}

impl Symbology {
    const ALL: [Symbology; 11] = [
        Symbology::Qr,
        Symbology::Aztec,
        Symbology::Code39,
        Symbology::Code93,
        Symbology::Code128,
        Symbology::DataMatrix,
        Symbology::Ean8,
        Symbology::Ean13,
        Symbology::Itf14,
        Symbology::Pdf417,
        Symbology::Upce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::Qr => "qr",
            Symbology::Aztec => "aztec",
            Symbology::Code39 => "code39",
            Symbology::Code93 => "code93",
            Symbology::Code128 => "code128",
            Symbology::DataMatrix => "data_matrix",
            Symbology::Ean8 => "ean8",
            Symbology::Ean13 => "ean13",
            Symbology::Itf14 => "itf14",
            Symbology::Pdf417 => "pdf417",
            Symbology::Upce => "upce",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbology {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Symbology::ALL
            .iter()
            .copied()
            .find(|sym| sym.as_str() == needle)
            .ok_or_else(|| {
                ValidationError::invalid_format("symbology", format!("unknown symbology '{}'", s))
            })
    }
}

/// A decoded string, handed to the delegate exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedCode(String);

impl DecodedCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecodedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A detected machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineReadableCode {
    pub symbology: Symbology,
    /// `None` when the symbol was located but could not be decoded.
    pub string_value: Option<String>,
}

/// One entry of a metadata callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataObject {
    MachineReadableCode(MachineReadableCode),
    Face { face_id: i64 },
    /// Any detection kind this crate does not model.
    Other { kind: String },
}

impl MetadataObject {
    /// A decoded QR code.
    pub fn qr(value: impl Into<String>) -> Self {
        Self::code(Symbology::Qr, Some(value.into()))
    }

    pub fn code(symbology: Symbology, string_value: Option<String>) -> Self {
        MetadataObject::MachineReadableCode(MachineReadableCode {
            symbology,
            string_value,
        })
    }

    pub fn as_machine_readable(&self) -> Option<&MachineReadableCode> {
        match self {
            MetadataObject::MachineReadableCode(code) => Some(code),
            _ => None,
        }
    }

    /// Returns the payload if this entry is a QR code carrying a string.
    pub fn decoded_qr(&self) -> Option<DecodedCode> {
        match self {
            MetadataObject::MachineReadableCode(MachineReadableCode {
                symbology: Symbology::Qr,
                string_value: Some(value),
            }) => Some(DecodedCode::new(value.clone())),
            _ => None,
        }
    }
}
