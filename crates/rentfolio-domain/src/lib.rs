//! rentfolio-domain
//!
//! Pure domain models (Property, Tenant, Payment, Expense, Reminder) and
//! calendar primitives. No I/O, no storage. Only data types and core enums.

pub mod analytics;
pub mod common;
pub mod expense;
pub mod payment;
pub mod property;
pub mod reminder;
pub mod report;
pub mod tenant;

pub use analytics::*;
pub use common::*;
pub use expense::*;
pub use payment::*;
pub use property::*;
pub use reminder::*;
pub use report::*;
pub use tenant::*;
