//! API request/response models.
//!
//! Success responses carry the bare `Instrument` JSON; only the request
//! body and the error envelope need their own shapes.

use crate::types::NewInstrument;
use serde::{Deserialize, Serialize};

/// Request body for create and replace operations.
///
/// Mirrors the wire shape `{name, type, price, description}`; all fields
/// are required and missing ones are rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub description: String,
}

impl From<InstrumentPayload> for NewInstrument {
    fn from(payload: InstrumentPayload) -> Self {
        NewInstrument {
            name: payload.name,
            kind: payload.kind,
            price: payload.price,
            description: payload.description,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
