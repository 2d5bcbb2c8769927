//! Runtime type tokens used to key type-erased containers.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Reified type identifier: a [`TypeId`] plus the type's name for display.
///
/// Equality and hashing only consider the [`TypeId`].
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Token for the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Type name without its module path or generic arguments.
    pub fn short_name(self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    pub fn is<T: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::TypeKey;

    struct Marker;

    #[test]
    fn equality_follows_type_identity() {
        assert_eq!(TypeKey::of::<Marker>(), TypeKey::of::<Marker>());
        assert_ne!(TypeKey::of::<Marker>(), TypeKey::of::<u32>());
        assert!(TypeKey::of::<Marker>().is::<Marker>());
    }

    #[test]
    fn short_name_strips_module_path() {
        assert_eq!(TypeKey::of::<Marker>().short_name(), "Marker");
        assert_eq!(TypeKey::of::<Vec<u32>>().short_name(), "Vec");
        assert_eq!(TypeKey::of::<Marker>().to_string(), "Marker");
    }
}
