//! Type-erased containers shared by [`crate::model::Model`] and model
//! decorators.
//!
//! - `allocator`   — constraint index allocation
//! - `constraints` — constraints grouped by (function, set) pair
//! - `names`       — name registry with lazy reverse lookup
//! - `attributes`  — optimizer, model, variable, and constraint attribute values
//! - `objective`   — objective function slot

mod allocator;
mod attributes;
mod constraints;
mod erased;
mod names;
mod objective;

pub use allocator::IndexAllocator;
pub use attributes::{AttributeStore, IndexedAttributeStore};
pub use constraints::ConstraintStore;
pub use names::NameRegistry;
pub use objective::ObjectiveSlot;
