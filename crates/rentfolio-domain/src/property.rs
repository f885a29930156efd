//! Domain model for rental properties.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    /// Living surface in square meters. Always positive in well-formed data.
    pub surface: f64,
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<f64>,
    /// Currency override for this property's figures; the portfolio default
    /// applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        surface: f64,
        kind: PropertyKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            surface,
            kind,
            monthly_rent: None,
            currency: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_rent(mut self, monthly_rent: f64) -> Self {
        self.monthly_rent = Some(monthly_rent);
        self
    }

    /// A property counts as occupied once a rent is set on it.
    pub fn is_occupied(&self) -> bool {
        self.monthly_rent.map(|rent| rent > 0.0).unwrap_or(false)
    }
}

impl Identifiable for Property {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Studio,
    Other,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::House => "House",
            PropertyKind::Studio => "Studio",
            PropertyKind::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_requires_a_positive_rent() {
        let vacant = Property::new("T2 Centre", "12 rue des Lilas", 45.0, PropertyKind::Apartment);
        assert!(!vacant.is_occupied());
        assert!(!vacant.clone().with_rent(0.0).is_occupied());
        assert!(vacant.with_rent(850.0).is_occupied());
    }

    #[test]
    fn kind_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&PropertyKind::Apartment).unwrap();
        assert_eq!(json, "\"apartment\"");
    }
}
