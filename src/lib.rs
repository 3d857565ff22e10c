#![doc(test(attr(deny(warnings))))]

//! Chronicle Core offers the calendar, scheduling, and monthly-aggregation
//! primitives behind a personal finance chronicle: deciding when recurring
//! obligations fall due, expanding installment plans into dated schedules,
//! and folding transactions, installments, and reminders into monthly views.

pub mod errors;
pub mod ledger;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Chronicle Core tracing initialized.");
    });
}
