use thiserror::Error;

/// Rejection cases for installment schedule construction.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("a plan needs at least one installment")]
    NoInstallments,
    #[error("total amount must be finite, got {0}")]
    NonFiniteAmount(f64),
    #[error("total amount must be positive, got {0}")]
    NonPositiveAmount(f64),
}
