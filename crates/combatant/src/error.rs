//! Errors surfaced by the decision core to its direct callers.
//!
//! Arbitration never propagates these: goals check the matching capability
//! predicate first and degrade their score instead.
use arena_core::PickupId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AiError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AiError {
    #[error("map knowledge has no regions to recommend a destination from")]
    NoRegions,

    #[error("{0} is not known to the pickup knowledge base")]
    UnknownPickup(PickupId),

    #[error("no behavior node registered as `{0}`")]
    UnknownNode(String),

    #[error("no goal named `{0}`")]
    UnknownGoal(String),
}
