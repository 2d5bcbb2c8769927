use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::type_key::TypeKey;

macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Get the inner u32 value.
            pub fn inner(self) -> u32 {
                self.0
            }

            /// Create an index from a u32 value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

define_id_type!(VariableIndex);

impl fmt::Display for VariableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// The reified (function type, set type) pair of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintType {
    pub function: TypeKey,
    pub set: TypeKey,
}

impl ConstraintType {
    pub fn of<F: 'static, S: 'static>() -> Self {
        Self {
            function: TypeKey::of::<F>(),
            set: TypeKey::of::<S>(),
        }
    }

    pub fn is<F: 'static, S: 'static>(self) -> bool {
        self.function.is::<F>() && self.set.is::<S>()
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-in-{}", self.function, self.set)
    }
}

/// Typed handle of a constraint with function type `F` and set type `S`.
///
/// Values are unique per `(F, S)` pair within one model.
pub struct ConstraintIndex<F, S> {
    value: u32,
    marker: PhantomData<fn() -> (F, S)>,
}

impl<F, S> ConstraintIndex<F, S> {
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.value
    }
}

impl<F: 'static, S: 'static> ConstraintIndex<F, S> {
    pub fn constraint_type() -> ConstraintType {
        ConstraintType::of::<F, S>()
    }

    /// Forget the static type, keeping it as a runtime token.
    pub fn erase(self) -> AnyConstraintIndex {
        AnyConstraintIndex::new(ConstraintType::of::<F, S>(), self.value)
    }
}

impl<F, S> Clone for ConstraintIndex<F, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, S> Copy for ConstraintIndex<F, S> {}

impl<F, S> PartialEq for ConstraintIndex<F, S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F, S> Eq for ConstraintIndex<F, S> {}

impl<F, S> Hash for ConstraintIndex<F, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F, S> PartialOrd for ConstraintIndex<F, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F, S> Ord for ConstraintIndex<F, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<F: 'static, S: 'static> fmt::Debug for ConstraintIndex<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstraintIndex<{}, {}>({})",
            TypeKey::of::<F>(),
            TypeKey::of::<S>(),
            self.value
        )
    }
}

impl<F: 'static, S: 'static> From<ConstraintIndex<F, S>> for AnyConstraintIndex {
    fn from(index: ConstraintIndex<F, S>) -> Self {
        index.erase()
    }
}

/// Constraint handle whose (function, set) pair is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyConstraintIndex {
    constraint_type: ConstraintType,
    value: u32,
}

impl AnyConstraintIndex {
    pub fn new(constraint_type: ConstraintType, value: u32) -> Self {
        Self {
            constraint_type,
            value,
        }
    }

    pub fn constraint_type(self) -> ConstraintType {
        self.constraint_type
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.value
    }

    pub fn is<F: 'static, S: 'static>(self) -> bool {
        self.constraint_type.is::<F, S>()
    }

    /// Recover the typed handle, or `None` when the pair differs.
    pub fn downcast<F: 'static, S: 'static>(self) -> Option<ConstraintIndex<F, S>> {
        self.is::<F, S>()
            .then_some(ConstraintIndex::new(self.value))
    }
}

impl fmt::Display for AnyConstraintIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.constraint_type, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{AnyConstraintIndex, ConstraintIndex, ConstraintType, VariableIndex};

    struct Affine;
    struct LessThan;
    struct EqualTo;

    #[test]
    fn variable_index_roundtrip() {
        let id = VariableIndex::new(7);
        assert_eq!(id.inner(), 7);
        assert_eq!(id.to_string(), "x7");
    }

    #[test]
    fn erased_index_downcasts_only_to_its_own_pair() {
        let typed = ConstraintIndex::<Affine, LessThan>::new(11);
        let erased: AnyConstraintIndex = typed.into();
        assert_eq!(erased.inner(), 11);
        assert_eq!(erased.downcast::<Affine, LessThan>(), Some(typed));
        assert!(erased.downcast::<Affine, EqualTo>().is_none());
    }

    #[test]
    fn constraint_type_display_names_both_parts() {
        let ct = ConstraintType::of::<Affine, LessThan>();
        assert_eq!(ct.to_string(), "Affine-in-LessThan");
        assert_eq!(
            ConstraintIndex::<Affine, LessThan>::new(3).erase().to_string(),
            "Affine-in-LessThan#3"
        );
    }

    #[test]
    fn debug_shows_type_parameters() {
        let rendered = format!("{:?}", ConstraintIndex::<Affine, EqualTo>::new(2));
        assert_eq!(rendered, "ConstraintIndex<Affine, EqualTo>(2)");
    }
}
