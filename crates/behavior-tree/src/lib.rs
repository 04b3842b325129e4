//! Lightweight behavior graph engine for tick-driven agents.
//!
//! This library provides a minimal behavior tree implementation that an
//! agent's decision layer enables, ticks once per frame, and disables when
//! it switches focus.
//!
//! - **Resumable**: Actions may report `Running` and are resumed next tick
//! - **Explicit lifecycle**: [`BehaviorGraph`] exposes enable/disable/tick/reset
//! - **Blackboard**: [`Blackboard`] hands variables down to leaves by name
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`], [`UtilitySelector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - Leaf nodes: [`Condition`], [`Action`]

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod graph;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use blackboard::Blackboard;
pub use composite::{Selector, Sequence, UtilitySelector};
pub use decorator::{AlwaysSucceed, Inverter};
pub use graph::BehaviorGraph;
pub use leaf::{Action, Condition};
pub use status::Status;
