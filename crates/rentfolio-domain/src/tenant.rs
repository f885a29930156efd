//! Domain model for tenants and their guarantors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{flexible_date, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub property_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, with = "flexible_date")]
    pub move_in_date: Option<NaiveDate>,
    #[serde(default, with = "flexible_date")]
    pub move_out_date: Option<NaiveDate>,
    #[serde(default)]
    pub deposit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guarantor: Option<Guarantor>,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(
        property_id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: String::new(),
            phone: String::new(),
            move_in_date: None,
            move_out_date: None,
            deposit: 0.0,
            guarantor: None,
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for Tenant {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
