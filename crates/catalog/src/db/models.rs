//! Database row models for instruments.
//!
//! These structs map directly to the `instruments` table and handle
//! conversion to the domain types in `crate::types`.

use crate::types::{Instrument, InstrumentId};
use sqlx::FromRow;

/// Database row for an instrument.
///
/// `type` is quoted in SQL; the struct field is `kind` to match the
/// domain type.
#[derive(Debug, Clone, FromRow)]
pub struct InstrumentRow {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub description: String,
}

impl InstrumentRow {
    /// Convert from database row to domain type.
    pub fn to_domain(&self) -> Instrument {
        Instrument {
            id: InstrumentId::new(self.id),
            name: self.name.clone(),
            kind: self.kind.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_domain() {
        let row = InstrumentRow {
            id: 3,
            name: "Violin".to_string(),
            kind: "String".to_string(),
            price: 450.0,
            description: "4/4 size".to_string(),
        };

        let instrument = row.to_domain();
        assert_eq!(instrument.id, InstrumentId::new(3));
        assert_eq!(instrument.name, "Violin");
        assert_eq!(instrument.kind, "String");
        assert_eq!(instrument.price, 450.0);
        assert_eq!(instrument.description, "4/4 size");
    }
}
