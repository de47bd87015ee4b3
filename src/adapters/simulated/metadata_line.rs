//! Text form of a metadata callback, used by the CLI harness.
//!
//! A line holds zero or more objects separated by `;`:
//!
//! - `qr:ABC123` - a code with a decoded payload (`ean13:4006381333931`, ...)
//! - `qr` - a located code without a payload
//! - `face` - a face detection
//! - anything else with a `~` prefix (`~human_body`) - an unmodelled detection
//!
//! An empty line is an empty callback.

use crate::domain::foundation::ValidationError;
use crate::domain::scan::{MetadataObject, Symbology};

/// Parses one line into the objects of a single callback.
pub fn parse_metadata_line(line: &str) -> Result<Vec<MetadataObject>, ValidationError> {
    line.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Result<MetadataObject, ValidationError> {
    if entry.eq_ignore_ascii_case("face") {
        return Ok(MetadataObject::Face { face_id: 0 });
    }
    if let Some(kind) = entry.strip_prefix('~') {
        if kind.is_empty() {
            return Err(ValidationError::empty_field("kind"));
        }
        return Ok(MetadataObject::Other {
            kind: kind.to_string(),
        });
    }

    match entry.split_once(':') {
        Some((symbology, payload)) => Ok(MetadataObject::code(
            symbology.parse::<Symbology>()?,
            Some(payload.to_string()),
        )),
        None => Ok(MetadataObject::code(entry.parse::<Symbology>()?, None)),
    }
}
