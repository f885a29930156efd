//! rentfolio-core
//!
//! The financial engine behind the rental-portfolio app: record filters,
//! period bucketing, report building, and analytics projections. Depends on
//! rentfolio-domain. No terminal I/O, no direct storage interactions.

pub mod alerts;
pub mod analytics;
pub mod currency;
pub mod error;
pub mod filters;
pub mod period;
pub mod report;
pub mod storage;

pub use alerts::*;
pub use analytics::*;
pub use currency::*;
pub use error::CoreError;
pub use filters::*;
pub use period::*;
pub use report::*;
pub use storage::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("rentfolio=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Rentfolio tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
