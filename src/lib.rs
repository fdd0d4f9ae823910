#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the authoritative expense ledger and persistence
//! adapter behind a single-user expense tracker: record entries, filter them
//! by category, derive running totals and per-category stats.

pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
