//! Capability fallback for Arco models.
//!
//! [`UniversalFallback`] wraps any [`arco_core::ModelLike`] and makes the
//! composite accept every function/set pair, objective type, and attribute.
//! Whatever the wrapped model rejects is stored in typed containers owned by
//! the wrapper; everything else is forwarded unchanged.
//!
//! ```
//! use arco_core::{Model, ModelLike, Support};
//! use arco_expr::{EqualTo, SingleVariable};
//! use arco_fallback::UniversalFallback;
//!
//! let mut model = UniversalFallback::new(Model::with_support(Support::new()));
//! let x = model.add_variable();
//! let fixed = model
//!     .add_constraint(SingleVariable::new(x), EqualTo::new(3.0))
//!     .unwrap();
//! assert_eq!(fixed.inner(), x.inner());
//! assert_eq!(model.summary().total_constraints(), 1);
//! ```

pub mod fallback;
pub mod summary;

pub use fallback::UniversalFallback;
pub use summary::{ConstraintCount, FallbackSummary};
