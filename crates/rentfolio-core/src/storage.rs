//! Persistence collaborator contract.

use serde::{Deserialize, Serialize};

use rentfolio_domain::{Expense, Payment, Property, Reminder, Tenant};

use crate::CoreError;

/// Every stored collection, fetched as one consistent snapshot before a
/// computation pass begins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub properties: Vec<Property>,
    pub tenants: Vec<Tenant>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub reminders: Vec<Reminder>,
}

/// Abstraction over persistence backends holding the flat record
/// collections. Loads degrade to empty collections instead of failing;
/// saves overwrite the whole collection.
pub trait RecordStore: Send + Sync {
    fn load_properties(&self) -> Vec<Property>;
    fn save_properties(&self, properties: &[Property]) -> Result<(), CoreError>;
    fn load_tenants(&self) -> Vec<Tenant>;
    fn save_tenants(&self, tenants: &[Tenant]) -> Result<(), CoreError>;
    fn load_payments(&self) -> Vec<Payment>;
    fn save_payments(&self, payments: &[Payment]) -> Result<(), CoreError>;
    fn load_expenses(&self) -> Vec<Expense>;
    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CoreError>;
    fn load_reminders(&self) -> Vec<Reminder>;
    fn save_reminders(&self, reminders: &[Reminder]) -> Result<(), CoreError>;

    /// Joins every collection read into one snapshot.
    fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            properties: self.load_properties(),
            tenants: self.load_tenants(),
            payments: self.load_payments(),
            expenses: self.load_expenses(),
            reminders: self.load_reminders(),
        }
    }
}
