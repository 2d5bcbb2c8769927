//! Type-erased value boxes recovered by checked downcast.

use std::any::Any;
use std::fmt;

trait ErasedValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn clone_box(&self) -> Box<dyn ErasedValue>;
}

impl<T: Any + fmt::Debug + Clone> ErasedValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }
}

/// Owned value of any cloneable type.
#[derive(Debug)]
pub(crate) struct ErasedBox(Box<dyn ErasedValue>);

impl ErasedBox {
    pub(crate) fn new<T: Any + fmt::Debug + Clone>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }
}

impl Clone for ErasedBox {
    fn clone(&self) -> Self {
        Self((*self.0).clone_box())
    }
}
