//! # Shop Error Types
//!
//! All errors that can occur in the synchronization core.
//!
//! A full waiting room is NOT an error - it is the `Rejected` admission
//! outcome. Errors here are the shutdown path and caller mistakes.

use crate::CustomerId;
use thiserror::Error;

/// Errors that can occur in the synchronization core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    /// The shop is closing. Every blocked wait unwinds with this so
    /// threads can be joined deterministically.
    #[error("shop is closed")]
    Closed,

    /// The id is already in the waiting queue or the chair. Ids must be
    /// unique while a visit is pending.
    #[error("customer {0} is already present in the shop")]
    AlreadyPresent(CustomerId),
}

/// Result type for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;
