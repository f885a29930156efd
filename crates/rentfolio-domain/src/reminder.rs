//! Domain model for scheduled landlord reminders.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{flexible_date, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub property_id: Uuid,
    pub kind: ReminderKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "flexible_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(
        property_id: Uuid,
        kind: ReminderKind,
        title: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            kind,
            title: title.into(),
            description: None,
            due_date: Some(due_date),
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn complete(&mut self) {
        self.is_completed = true;
    }
}

impl Identifiable for Reminder {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    RentIndexation,
    LeaseRenewal,
    ChargesRevision,
    Custom,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReminderKind::RentIndexation => "Rent indexation",
            ReminderKind::LeaseRenewal => "Lease renewal",
            ReminderKind::ChargesRevision => "Charges revision",
            ReminderKind::Custom => "Custom",
        };
        f.write_str(label)
    }
}
