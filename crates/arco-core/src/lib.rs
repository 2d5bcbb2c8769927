//! Arco model contract, shared typed containers, and an in-memory model.
//!
//! - `model_like` — the [`ModelLike`] operation set
//! - `model`      — [`Model`], an in-memory implementation with configurable [`Support`]
//! - `store`      — type-erased containers reused by model decorators
//! - `attributes` — attribute kinds and the built-in catalog

pub mod attributes;
pub mod error;
pub mod model;
pub mod model_like;
pub mod store;
pub mod support;
pub mod types;

pub use attributes::{
    Attribute, AttributeKey, ConstraintAttribute, ConstraintDualStart, ConstraintMetadata,
    ConstraintPrimalStart, ModelAttribute, ModelMetadata, ModelName, OptimizerAttribute,
    RawOptimizerAttribute, Silent, TimeLimitSec, VariableAttribute, VariableMetadata,
    VariablePrimalStart,
};
pub use error::ModelError;
pub use model::Model;
pub use model_like::ModelLike;
pub use support::Support;
pub use types::Sense;
