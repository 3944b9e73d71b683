//! Core domain types for the instrument catalog.
//!
//! - `Instrument`: a single catalog record
//! - `NewInstrument`: the caller-supplied fields of a record (everything but the id)
//! - `InstrumentId`: store-assigned integer identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an instrument.
///
/// Ids are assigned by the store at insert time and are never supplied by
/// callers. Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InstrumentId(i64);

impl InstrumentId {
    /// Create an instrument ID from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for InstrumentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A catalog record.
///
/// Wire shape: `{id, name, type, price, description}`. The category label
/// is free-form text; `type` is a Rust keyword, so the field is named
/// `kind` internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: InstrumentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub description: String,
}

impl Instrument {
    /// Build a full record from a store-assigned id and caller fields.
    pub fn from_fields(id: InstrumentId, fields: NewInstrument) -> Self {
        Self {
            id,
            name: fields.name,
            kind: fields.kind,
            price: fields.price,
            description: fields.description,
        }
    }
}

/// Caller-supplied fields for create and replace operations.
///
/// All four fields are required; the id is never accepted from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInstrument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub description: String,
}

impl NewInstrument {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            price,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_id_display() {
        let id = InstrumentId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_instrument_wire_shape() {
        let instrument = Instrument::from_fields(
            InstrumentId::new(1),
            NewInstrument::new("Guitar", "String", 199.99, "6-string"),
        );

        let json = serde_json::to_value(&instrument).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Guitar",
                "type": "String",
                "price": 199.99,
                "description": "6-string",
            })
        );

        let back: Instrument = serde_json::from_value(json).unwrap();
        assert_eq!(back, instrument);
    }

    #[test]
    fn test_new_instrument_rejects_missing_fields() {
        let result: Result<NewInstrument, _> =
            serde_json::from_str(r#"{"name": "Guitar", "type": "String"}"#);
        assert!(result.is_err());
    }
}
